use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::phone::{apply_edit, format_phone};
use shared::FieldChange;
use super::field::FieldError;

#[derive(Properties, PartialEq)]
pub struct PhoneInputProps {
    pub name: AttrValue,
    /// Raw digits or an already formatted number
    #[prop_or_default]
    pub value: AttrValue,
    /// Receives the formatted display text; strip it with `phone_digits` before sending
    pub on_change: Callback<FieldChange>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Phone number input rendering `+998 (XX) XXX-XX-XX` progressively
#[function_component(PhoneInput)]
pub fn phone_input(props: &PhoneInputProps) -> Html {
    let display = use_state(|| format_phone(&props.value));

    {
        let display = display.clone();
        use_effect_with(props.value.clone(), move |value| {
            if value.as_str() != display.as_str() {
                display.set(format_phone(value));
            }
            || ()
        });
    }

    let on_input = {
        let display = display.clone();
        let on_change = props.on_change.clone();
        let name = props.name.clone();

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = apply_edit(&display, &input.value());

            input.set_value(&formatted);
            display.set(formatted.clone());
            on_change.emit(FieldChange::new(name.as_str(), formatted));
        })
    };

    html! {
        <div class="phone-input">
            {if let Some(label) = &props.label {
                html! { <label class="field-label" for={props.name.clone()}>{label}</label> }
            } else { html! {} }}

            <input
                type="tel"
                id={props.name.clone()}
                name={props.name.clone()}
                inputmode="tel"
                autocomplete="off"
                placeholder="+998 (__) ___-__-__"
                value={(*display).clone()}
                oninput={on_input}
                disabled={props.disabled}
            />

            <FieldError message={props.error.clone()} />
        </div>
    }
}
