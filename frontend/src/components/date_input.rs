use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::date::{canonical_to_display, mask_keystroke, month_grid, GridCell, MaskedDate, MonthCursor, WEEKDAY_NAMES};
use shared::{CalendarDate, DateFormat, FieldChange};
use super::field::FieldError;
use crate::hooks::use_click_outside::use_click_outside;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct DateInputProps {
    /// Form field name reported in change events
    pub name: AttrValue,
    /// Selected date in YYYY-MM-DD format, empty when unset
    #[prop_or_default]
    pub value: AttrValue,
    /// Receives the YYYY-MM-DD value once a complete, valid date is entered
    pub on_change: Callback<FieldChange>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Change to report for one masked keystroke.
///
/// A complete valid date reports its canonical form, clearing a field that
/// held a date reports `""`, and anything else reports nothing.
fn change_for(name: &str, masked: &MaskedDate, had_value: bool) -> Option<FieldChange> {
    match masked.date {
        Some(date) => Some(FieldChange::new(name, date.format(DateFormat::Canonical))),
        None if masked.display.is_empty() && had_value => Some(FieldChange::new(name, "")),
        None => None,
    }
}

/// Text input with dd-mm-yyyy masking and a dropdown month calendar
#[function_component(DateInput)]
pub fn date_input(props: &DateInputProps) -> Html {
    let root_ref = use_node_ref();
    let show_calendar = use_state(|| false);
    let display = use_state(|| canonical_to_display(&props.value));
    let selected = CalendarDate::parse(&props.value).ok();
    let cursor = use_state(|| MonthCursor::of(&selected.unwrap_or_else(today)));

    // Follow value replacements coming from the parent
    {
        let display = display.clone();
        let cursor = cursor.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Ok(date) = CalendarDate::parse(value) {
                display.set(date.format(DateFormat::Display));
                cursor.set(MonthCursor::of(&date));
            } else if value.is_empty() {
                display.set(String::new());
            }
            || ()
        });
    }

    let on_input = {
        let display = display.clone();
        let on_change = props.on_change.clone();
        let name = props.name.clone();
        let had_value = !props.value.is_empty();

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let masked = mask_keystroke(&input.value());

            // Rejected characters must disappear even when the state is unchanged
            input.set_value(&masked.display);
            display.set(masked.display.clone());

            if let Some(change) = change_for(name.as_str(), &masked, had_value) {
                on_change.emit(change);
            }
        })
    };

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(!*show_calendar);
        })
    };

    {
        let show_calendar = show_calendar.clone();
        use_click_outside(
            root_ref.clone(),
            *show_calendar,
            Callback::from(move |_| show_calendar.set(false)),
        );
    }

    let select_date = {
        let display = display.clone();
        let cursor = cursor.clone();
        let show_calendar = show_calendar.clone();
        let on_change = props.on_change.clone();
        let name = props.name.clone();

        Callback::from(move |date: CalendarDate| {
            display.set(date.format(DateFormat::Display));
            cursor.set(MonthCursor::of(&date));
            show_calendar.set(false);
            on_change.emit(FieldChange::new(name.as_str(), date.format(DateFormat::Canonical)));
        })
    };

    let select_today = {
        let select_date = select_date.clone();
        Callback::from(move |_: MouseEvent| select_date.emit(today()))
    };

    let prev_month = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set((*cursor).prev()))
    };

    let next_month = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set((*cursor).next()))
    };

    let cells = month_grid(*cursor, selected, today());

    html! {
        <div class="date-input" ref={root_ref}>
            {if let Some(label) = &props.label {
                html! { <label class="field-label" for={props.name.clone()}>{label}</label> }
            } else { html! {} }}

            <div class="date-input-field">
                <input
                    type="text"
                    id={props.name.clone()}
                    name={props.name.clone()}
                    inputmode="numeric"
                    placeholder="dd-mm-yyyy"
                    maxlength="10"
                    autocomplete="off"
                    value={(*display).clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
                <button
                    type="button"
                    class="calendar-toggle"
                    onclick={toggle_calendar}
                    disabled={props.disabled}
                >
                    {"📅"}
                </button>
            </div>

            <FieldError message={props.error.clone()} />

            {if *show_calendar && !props.disabled {
                html! {
                    <div class="calendar-dropdown">
                        <div class="calendar-header">
                            <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                            <span class="month-year">{cursor.label()}</span>
                            <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                        </div>

                        <div class="calendar-grid">
                            <div class="weekday-header">
                                {for WEEKDAY_NAMES.iter().map(|name| html! { <span>{*name}</span> })}
                            </div>

                            <div class="calendar-days">
                                {for cells.iter().map(|cell| match cell {
                                    GridCell::Blank => html! { <span class="calendar-day blank"></span> },
                                    GridCell::Day { date, is_selected, is_today } => {
                                        let date = *date;
                                        let select_date = select_date.clone();
                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(
                                                    "calendar-day",
                                                    is_selected.then_some("selected"),
                                                    is_today.then_some("today")
                                                )}
                                                onclick={Callback::from(move |_: MouseEvent| select_date.emit(date))}
                                            >
                                                {date.day()}
                                            </button>
                                        }
                                    }
                                })}
                            </div>
                        </div>

                        <div class="calendar-footer">
                            <button type="button" class="today-button" onclick={select_today}>
                                {"Bugun"}
                            </button>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
