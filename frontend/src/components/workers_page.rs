use yew::prelude::*;
use shared::Worker;
use super::pagination::Pagination;
use super::worker_form::WorkerForm;
use super::worker_list::WorkerList;
use crate::hooks::use_companies::use_companies;
use crate::hooks::use_workers::use_workers;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct WorkersPageProps {
    pub api_client: ApiClient,
}

#[function_component(WorkersPage)]
pub fn workers_page(props: &WorkersPageProps) -> Html {
    let page_size = props.api_client.config().page_size;
    let workers = use_workers(&props.api_client, page_size);
    let companies = use_companies(&props.api_client);

    let on_created = {
        let refresh = workers.actions.refresh.clone();
        Callback::from(move |_: Worker| refresh.emit(()))
    };

    let state = &workers.state;
    let rows = state.page.as_ref().map(|page| page.results.clone()).unwrap_or_default();

    html! {
        <main class="workers-page container">
            <WorkerForm
                api_client={props.api_client.clone()}
                companies={companies.clone()}
                on_created={on_created}
            />

            <section class="workers-list-section">
                <h2>{"Workers"}</h2>

                {if let Some(error) = &state.error {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                <WorkerList
                    workers={rows}
                    companies={companies}
                    loading={state.loading}
                    on_delete={workers.actions.delete_worker.clone()}
                />

                <Pagination
                    current={state.request.page}
                    total_pages={state.total_pages()}
                    on_page_change={workers.actions.go_to_page.clone()}
                    disabled={state.loading}
                />
            </section>
        </main>
    }
}
