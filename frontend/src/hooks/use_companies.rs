use yew::prelude::*;
use shared::{ApiResult, Company};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Companies for select boxes, loaded once per mount
#[hook]
pub fn use_companies(api_client: &ApiClient) -> Vec<Company> {
    let companies = use_state(Vec::<Company>::new);
    let mounted = use_mut_ref(|| true);

    {
        let api_client = api_client.clone();
        let companies = companies.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            {
                let mounted = mounted.clone();
                spawn_local(async move {
                    let result = api_client.list_companies().await;
                    if !*mounted.borrow() {
                        return;
                    }

                    match result {
                        ApiResult::Success { data, .. } => companies.set(data.results),
                        ApiResult::Failure { message, .. } => {
                            Logger::warn_with_component("companies", &format!("Failed to load companies: {}", message));
                        }
                    }
                });
            }
            move || *mounted.borrow_mut() = false
        });
    }

    (*companies).clone()
}
