use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub on_sign_out: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_click = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| on_sign_out.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{props.title.clone()}</h1>
                <div class="header-right">
                    <button type="button" class="btn btn-secondary sign-out-btn" onclick={on_click}>
                        {"Sign out"}
                    </button>
                </div>
            </div>
        </header>
    }
}
