use yew::prelude::*;
use shared::{ApiResult, Page, PageRequest, Worker};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct WorkersState {
    pub page: Option<Page<Worker>>,
    pub request: PageRequest,
    pub loading: bool,
    pub error: Option<String>,
}

impl WorkersState {
    pub fn total_pages(&self) -> u32 {
        self.page
            .as_ref()
            .map(|page| page.total_pages(self.request.page_size))
            .unwrap_or(1)
    }
}

pub struct UseWorkersResult {
    pub state: WorkersState,
    pub actions: UseWorkersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseWorkersActions {
    pub go_to_page: Callback<u32>,
    pub refresh: Callback<()>,
    pub delete_worker: Callback<u64>,
}

/// Paginated worker list.
///
/// Results arriving after the component unmounted are dropped.
#[hook]
pub fn use_workers(api_client: &ApiClient, page_size: u32) -> UseWorkersResult {
    let request = use_state(|| PageRequest::first(page_size));
    let page = use_state(|| Option::<Page<Worker>>::None);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let reload_counter = use_state(|| 0u32);
    let mounted = use_mut_ref(|| true);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || *mounted.borrow_mut() = false
        });
    }

    // Fetch whenever the requested page changes or a reload is asked for
    {
        let api_client = api_client.clone();
        let page = page.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        use_effect_with((*request, *reload_counter), move |(request, _)| {
            let request = *request;
            loading.set(true);

            spawn_local(async move {
                let result = api_client.list_workers(request).await;
                if !*mounted.borrow() {
                    return;
                }

                match result {
                    ApiResult::Success { data, .. } => {
                        page.set(Some(data));
                        error.set(None);
                    }
                    ApiResult::Failure { message, .. } => {
                        Logger::warn_with_component("workers", &format!("Failed to load workers: {}", message));
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let go_to_page = {
        let request = request.clone();
        Callback::from(move |page_number: u32| {
            request.set((*request).with_page(page_number));
        })
    };

    let refresh = {
        let reload_counter = reload_counter.clone();
        Callback::from(move |_: ()| {
            reload_counter.set(reload_counter.wrapping_add(1));
        })
    };

    let delete_worker = {
        let api_client = api_client.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        let mounted = mounted.clone();

        Callback::from(move |id: u64| {
            let api_client = api_client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            let mounted = mounted.clone();

            spawn_local(async move {
                let result = api_client.delete_worker(id).await;
                if !*mounted.borrow() {
                    return;
                }

                match result {
                    ApiResult::Success { .. } => refresh.emit(()),
                    ApiResult::Failure { message, .. } => error.set(Some(message)),
                }
            });
        })
    };

    let state = WorkersState {
        page: (*page).clone(),
        request: *request,
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseWorkersActions {
        go_to_page,
        refresh,
        delete_worker,
    };

    UseWorkersResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_without_data() {
        let state = WorkersState {
            page: None,
            request: PageRequest::first(10),
            loading: true,
            error: None,
        };
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_total_pages_from_count() {
        let state = WorkersState {
            page: Some(Page { count: 42, next: None, previous: None, results: Vec::new() }),
            request: PageRequest::first(10),
            loading: false,
            error: None,
        };
        assert_eq!(state.total_pages(), 5);
    }
}
