use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// Pointer events that count as interacting somewhere on the page.
/// `mousedown` fires before any click handler re-renders the target away.
const OUTSIDE_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Emit `on_outside` for presses outside `node` while `active` is true.
///
/// Presses inside the node (its own buttons, the grid, the input) are
/// ignored. Listeners are removed when `active` turns false or the
/// component unmounts.
#[hook]
pub fn use_click_outside(node: NodeRef, active: bool, on_outside: Callback<()>) {
    use_effect_with(active, move |active| {
        let listeners: Vec<EventListener> = if *active {
            let document = gloo::utils::document();
            OUTSIDE_EVENTS
                .iter()
                .map(|event_type| {
                    let node = node.clone();
                    let on_outside = on_outside.clone();
                    EventListener::new(&document, *event_type, move |event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        if !is_inside(node.cast::<Node>(), target.as_ref()) {
                            on_outside.emit(());
                        }
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        move || drop(listeners)
    });
}

fn is_inside(root: Option<Node>, target: Option<&Node>) -> bool {
    match (root, target) {
        (Some(root), Some(target)) => root.contains(Some(target)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_is_inside() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        let child = document.create_element("button").unwrap();
        let stranger = document.create_element("span").unwrap();
        root.append_child(&child).unwrap();

        let root_node: Node = root.clone().into();

        assert!(is_inside(Some(root_node.clone()), Some(&*child)));
        assert!(is_inside(Some(root_node.clone()), Some(&*root)));
        assert!(!is_inside(Some(root_node.clone()), Some(&*stranger)));
        assert!(!is_inside(Some(root_node), None));
        assert!(!is_inside(None, Some(&*child)));
    }
}
