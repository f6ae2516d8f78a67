use yew::prelude::*;
use web_sys::HtmlSelectElement;
use wasm_bindgen_futures::spawn_local;
use shared::number::{to_submission, NumberError};
use shared::phone::{is_complete, phone_digits};
use shared::{ApiResult, CalendarDate, Company, FieldChange, FieldErrors, NewWorker, Worker};
use super::amount_input::AmountInput;
use super::date_input::DateInput;
use super::field::{native_change, FieldError};
use super::phone_input::PhoneInput;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Form values as the inputs report them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkerDraft {
    pub full_name: String,
    /// Formatted phone display
    pub phone: String,
    /// Separator-free salary string
    pub salary: String,
    /// YYYY-MM-DD or empty
    pub hire_date: String,
    /// Company id as text, empty for none
    pub company: String,
}

impl WorkerDraft {
    /// Apply one change event from either a native or a formatted input
    pub fn apply(&mut self, change: &FieldChange) {
        let value = change.value().to_string();
        match change.name() {
            "full_name" => self.full_name = value,
            "phone" => self.phone = value,
            "salary" => self.salary = value,
            "hire_date" => self.hire_date = value,
            "company" => self.company = value,
            other => Logger::debug_with_component("worker-form", &format!("Ignoring change for unknown field {}", other)),
        }
    }

    /// Build the API payload or report which fields need fixing
    pub fn to_payload(&self) -> Result<NewWorker, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut reject = |field: &str, message: &str| {
            errors.entry(field.to_string()).or_default().push(message.to_string());
        };

        let full_name = self.full_name.trim().to_string();
        if full_name.is_empty() {
            reject("full_name", "Enter the worker's name");
        }

        if !is_complete(&self.phone) {
            reject("phone", "Enter the full phone number");
        }

        let salary = match to_submission(&self.salary) {
            Ok(salary) => salary,
            Err(NumberError::Empty) => {
                reject("salary", "Enter the salary");
                String::new()
            }
            Err(NumberError::Malformed(_)) => {
                reject("salary", "Salary must be a number");
                String::new()
            }
        };

        let hire_date = if self.hire_date.is_empty() {
            None
        } else if CalendarDate::parse(&self.hire_date).is_ok() {
            Some(self.hire_date.clone())
        } else {
            reject("hire_date", "Enter a valid date");
            None
        };

        let company = if self.company.is_empty() {
            None
        } else {
            match self.company.parse::<u64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    reject("company", "Choose a company from the list");
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewWorker {
            full_name,
            phone: phone_digits(&self.phone),
            salary,
            hire_date,
            company,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkerFormProps {
    pub api_client: ApiClient,
    pub companies: Vec<Company>,
    pub on_created: Callback<Worker>,
}

#[function_component(WorkerForm)]
pub fn worker_form(props: &WorkerFormProps) -> Html {
    let draft = use_state(WorkerDraft::default);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let field_errors = use_state(FieldErrors::new);
    let form_success = use_state(|| false);

    // One handler for native inputs and the formatted ones
    let on_field_change = {
        let draft = draft.clone();
        let form_success = form_success.clone();
        Callback::from(move |change: FieldChange| {
            let mut next = (*draft).clone();
            next.apply(&change);
            draft.set(next);
            form_success.set(false);
        })
    };

    let on_native_input = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: InputEvent| on_field_change.emit(native_change(&e)))
    };

    let on_company_change = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit(FieldChange::new(select.name(), select.value()));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let field_errors = field_errors.clone();
        let form_success = form_success.clone();
        let api_client = props.api_client.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match draft.to_payload() {
                Ok(payload) => payload,
                Err(errors) => {
                    form_error.set(None);
                    field_errors.set(errors);
                    return;
                }
            };

            let draft = draft.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let field_errors = field_errors.clone();
            let form_success = form_success.clone();
            let api_client = api_client.clone();
            let on_created = on_created.clone();

            submitting.set(true);
            spawn_local(async move {
                match api_client.create_worker(&payload).await {
                    ApiResult::Success { data, .. } => {
                        Logger::info_with_component("worker-form", &format!("Created worker {}", data.id));
                        draft.set(WorkerDraft::default());
                        form_error.set(None);
                        field_errors.set(FieldErrors::new());
                        form_success.set(true);
                        on_created.emit(data);
                    }
                    ApiResult::Failure { message, field_errors: fields, .. } => {
                        form_error.set(Some(message));
                        field_errors.set(fields);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_message = |field: &str| -> Option<AttrValue> {
        field_errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(|message| AttrValue::from(message.clone()))
    };

    html! {
        <section class="worker-form-section">
            <h2>{"New worker"}</h2>

            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if *form_success {
                html! { <div class="form-message success">{"Worker saved"}</div> }
            } else { html! {} }}

            <form class="worker-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="full_name">{"Full name"}</label>
                    <input
                        type="text"
                        id="full_name"
                        name="full_name"
                        value={draft.full_name.clone()}
                        oninput={on_native_input}
                        disabled={*submitting}
                    />
                    <FieldError message={field_message("full_name")} />
                </div>

                <div class="form-group">
                    <PhoneInput
                        name="phone"
                        label="Phone"
                        value={draft.phone.clone()}
                        on_change={on_field_change.clone()}
                        disabled={*submitting}
                        error={field_message("phone")}
                    />
                </div>

                <div class="form-group">
                    <AmountInput
                        name="salary"
                        label="Monthly salary"
                        suffix="so'm"
                        placeholder="0"
                        value={draft.salary.clone()}
                        on_change={on_field_change.clone()}
                        disabled={*submitting}
                        error={field_message("salary")}
                    />
                </div>

                <div class="form-group">
                    <DateInput
                        name="hire_date"
                        label="Hire date"
                        value={draft.hire_date.clone()}
                        on_change={on_field_change}
                        disabled={*submitting}
                        error={field_message("hire_date")}
                    />
                </div>

                <div class="form-group">
                    <label for="company">{"Company"}</label>
                    <select id="company" name="company" onchange={on_company_change} disabled={*submitting}>
                        <option value="" selected={draft.company.is_empty()}>{"None"}</option>
                        {for props.companies.iter().map(|company| {
                            let id = company.id.to_string();
                            html! {
                                <option value={id.clone()} selected={draft.company == id}>
                                    {company.name.clone()}
                                </option>
                            }
                        })}
                    </select>
                    <FieldError message={field_message("company")} />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Saving..." } else { "Save worker" }}
                </button>
            </form>
        </section>
    }
}
