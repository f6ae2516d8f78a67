use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::number::{accept_keystroke, clean, group, to_numeric_string};
use shared::FieldChange;
use super::field::FieldError;

#[derive(Properties, PartialEq)]
pub struct AmountInputProps {
    pub name: AttrValue,
    /// Separator-free numeric string, e.g. "2500000.50"
    #[prop_or_default]
    pub value: AttrValue,
    pub on_change: Callback<FieldChange>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Unit shown after the input, e.g. "so'm"
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Currency/salary input that groups digits while typing
#[function_component(AmountInput)]
pub fn amount_input(props: &AmountInputProps) -> Html {
    let display = use_state(|| group(&clean(&props.value)));

    {
        let display = display.clone();
        use_effect_with(props.value.clone(), move |value| {
            if to_numeric_string(&display) != value.as_str() {
                display.set(group(&clean(value)));
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
            match accept_keystroke(&input.value()) {
                Some(edit) => {
                    input.set_value(&edit.display);
                    display.set(edit.display);
                    on_change.emit(FieldChange::new(name.as_str(), edit.value));
                }
                // Keep the last valid text
                None => input.set_value(&display),
            }
        })
    };

    html! {
        <div class="amount-input">
            {if let Some(label) = &props.label {
                html! { <label class="field-label" for={props.name.clone()}>{label}</label> }
            } else { html! {} }}

            <div class="amount-input-field">
                <input
                    type="text"
                    id={props.name.clone()}
                    name={props.name.clone()}
                    inputmode="decimal"
                    autocomplete="off"
                    placeholder={props.placeholder.clone()}
                    value={(*display).clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
                {if let Some(suffix) = &props.suffix {
                    html! { <span class="amount-suffix">{suffix}</span> }
                } else { html! {} }}
            </div>

            <FieldError message={props.error.clone()} />
        </div>
    }
}
