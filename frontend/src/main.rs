use yew::prelude::*;
use shared::{DashboardConfig, Session};
use std::rc::Rc;

mod components;
mod hooks;
mod services;

use components::header::Header;
use components::login_form::LoginForm;
use components::workers_page::WorkersPage;
use services::api::ApiClient;
use services::logging::Logger;
use services::token_store::LocalStorageTokenStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Login,
    Workers,
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| View::Login);

    // Built once; a 401 from any request sends the user back to the login screen
    let api_client = {
        let set_view = view.setter();
        use_memo((), move |_| {
            let config = DashboardConfig::from_build_env();
            Logger::init(&config);
            Logger::info_with_component("app", &format!("API base URL: {}", config.api_base_url));

            let store = Rc::new(LocalStorageTokenStore::new(&config.token_storage_key));
            let session = Session::new(store, move || {
                Logger::warn_with_component("session", "Session expired, signing out");
                set_view.set(View::Login);
            })
            .with_auth_scheme(config.auth_scheme.clone());

            ApiClient::new(Rc::new(config), session)
        })
    };

    // Resume a stored session
    {
        let view = view.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            if api_client.session().is_authenticated() {
                view.set(View::Workers);
            }
            || ()
        });
    }

    let on_signed_in = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(View::Workers))
    };

    let on_sign_out = {
        let view = view.clone();
        let api_client = api_client.clone();
        Callback::from(move |_: ()| {
            api_client.session().sign_out();
            Logger::info_with_component("app", "Signed out");
            view.set(View::Login);
        })
    };

    html! {
        <div class="app">
            {match *view {
                View::Login => html! {
                    <main class="login-page container">
                        <h1>{"Business Dashboard"}</h1>
                        <LoginForm api_client={(*api_client).clone()} on_signed_in={on_signed_in} />
                    </main>
                },
                View::Workers => html! {
                    <>
                        <Header title="Business Dashboard" on_sign_out={on_sign_out} />
                        <WorkersPage api_client={(*api_client).clone()} />
                    </>
                },
            }}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
