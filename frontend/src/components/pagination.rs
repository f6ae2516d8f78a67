use yew::prelude::*;
use shared::pagination::page_window;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based current page
    pub current: u32,
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
    /// How many page-number buttons to show at once
    #[prop_or(5)]
    pub window: u32,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let current = props.current;
    let has_previous = current > 1;
    let has_next = current < props.total_pages;

    html! {
        <nav class="pagination">
            <button
                type="button"
                class="page-button"
                disabled={props.disabled || !has_previous}
                onclick={go_to(current.saturating_sub(1).max(1))}
            >
                {"‹"}
            </button>

            {for page_window(current, props.total_pages, props.window).into_iter().map(|page| html! {
                <button
                    type="button"
                    class={classes!("page-button", (page == current).then_some("active"))}
                    disabled={props.disabled}
                    onclick={go_to(page)}
                >
                    {page}
                </button>
            })}

            <button
                type="button"
                class="page-button"
                disabled={props.disabled || !has_next}
                onclick={go_to((current + 1).min(props.total_pages))}
            >
                {"›"}
            </button>
        </nav>
    }
}
