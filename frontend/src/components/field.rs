use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::FieldChange;

/// Turn a native input event into the same change shape the formatted inputs emit
pub fn native_change(e: &InputEvent) -> FieldChange {
    let input: HtmlInputElement = e.target_unchecked_into();
    FieldChange::new(input.name(), input.value())
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Validation message shown under an input
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.message {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}
