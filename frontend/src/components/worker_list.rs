use yew::prelude::*;
use shared::date::canonical_to_display;
use shared::number::format_amount;
use shared::phone::format_phone;
use shared::{Company, Worker};

#[derive(Properties, PartialEq)]
pub struct WorkerListProps {
    pub workers: Vec<Worker>,
    pub companies: Vec<Company>,
    pub loading: bool,
    pub on_delete: Callback<u64>,
}

/// Company name for a worker, or a dash when unknown
pub fn company_name(companies: &[Company], id: Option<u64>) -> String {
    id.and_then(|id| companies.iter().find(|company| company.id == id))
        .map(|company| company.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[function_component(WorkerList)]
pub fn worker_list(props: &WorkerListProps) -> Html {
    if props.loading && props.workers.is_empty() {
        return html! { <div class="loading">{"Loading workers..."}</div> };
    }

    if props.workers.is_empty() {
        return html! { <div class="empty-state">{"No workers yet"}</div> };
    }

    html! {
        <table class="workers-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Phone"}</th>
                    <th>{"Salary"}</th>
                    <th>{"Hire date"}</th>
                    <th>{"Company"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for props.workers.iter().map(|worker| {
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = worker.id;
                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                    };

                    html! {
                        <tr key={worker.id}>
                            <td>{worker.full_name.clone()}</td>
                            <td>{format_phone(&worker.phone)}</td>
                            <td class="amount">{format!("{} so'm", format_amount(worker.salary))}</td>
                            <td>{worker.hire_date.as_deref().map(canonical_to_display).unwrap_or_default()}</td>
                            <td>{company_name(&props.companies, worker.company)}</td>
                            <td>
                                <button type="button" class="btn btn-danger btn-small" onclick={on_delete} disabled={props.loading}>
                                    {"Delete"}
                                </button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
