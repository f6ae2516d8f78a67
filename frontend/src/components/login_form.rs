use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{ApiResult, FieldChange, FieldErrors, LoginRequest};
use super::field::{native_change, FieldError};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub api_client: ApiClient,
    pub on_signed_in: Callback<()>,
}

#[derive(Clone, Default, PartialEq)]
struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    fn apply(&mut self, change: &FieldChange) {
        match change.name() {
            "username" => self.username = change.value().to_string(),
            "password" => self.password = change.value().to_string(),
            _ => {}
        }
    }
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let credentials = use_state(Credentials::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let field_errors = use_state(FieldErrors::new);

    let on_input = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*credentials).clone();
            next.apply(&native_change(&e));
            credentials.set(next);
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let field_errors = field_errors.clone();
        let api_client = props.api_client.clone();
        let on_signed_in = props.on_signed_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if credentials.username.trim().is_empty() || credentials.password.is_empty() {
                error.set(Some("Enter your username and password".to_string()));
                return;
            }

            let request = LoginRequest {
                username: credentials.username.trim().to_string(),
                password: credentials.password.clone(),
            };
            let submitting = submitting.clone();
            let error = error.clone();
            let field_errors = field_errors.clone();
            let api_client = api_client.clone();
            let on_signed_in = on_signed_in.clone();

            submitting.set(true);
            spawn_local(async move {
                match api_client.login(&request).await {
                    ApiResult::Success { data, .. } => {
                        api_client.session().sign_in(&data.access);
                        Logger::info_with_component("login", "Signed in");
                        on_signed_in.emit(());
                    }
                    ApiResult::Failure { message, field_errors: fields, .. } => {
                        error.set(Some(message));
                        field_errors.set(fields);
                        submitting.set(false);
                    }
                }
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
        <section class="login-section">
            <h2>{"Sign in"}</h2>

            {if let Some(message) = error.as_ref() {
                html! { <div class="form-message error">{message}</div> }
            } else { html! {} }}

            <form class="login-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        value={credentials.username.clone()}
                        oninput={on_input.clone()}
                        disabled={*submitting}
                    />
                    <FieldError message={field_message("username")} />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        value={credentials.password.clone()}
                        oninput={on_input}
                        disabled={*submitting}
                    />
                    <FieldError message={field_message("password")} />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_follow_changes() {
        let mut credentials = Credentials::default();
        credentials.apply(&FieldChange::new("username", "admin"));
        credentials.apply(&FieldChange::new("password", "secret"));
        credentials.apply(&FieldChange::new("unknown", "ignored"));

        assert_eq!(credentials.username, "admin");
        assert_eq!(credentials.password, "secret");
    }
}
