use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDetailsElement};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

/// Given the open flags after `toggled` changed, the other items that must
/// close. Nothing closes when `toggled` itself was just closed.
pub fn items_to_close(open: &[bool], toggled: usize) -> Vec<usize> {
    if !open.get(toggled).copied().unwrap_or(false) {
        return Vec::new();
    }
    open.iter()
        .enumerate()
        .filter(|&(i, &is_open)| i != toggled && is_open)
        .map(|(i, _)| i)
        .collect()
}

pub fn attach(document: &Document) -> Result<(), BehaviorError> {
    let items: Rc<Vec<HtmlDetailsElement>> = Rc::new(
        dom::query_all(document, config::FAQ_ITEMS)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlDetailsElement>().ok())
            .collect(),
    );

    for (index, item) in items.iter().enumerate() {
        let items = Rc::clone(&items);
        dom::listen(item, "toggle", move |_| {
            let open: Vec<bool> = items.iter().map(|d| d.open()).collect();
            for other in items_to_close(&open, index) {
                items[other].set_open(false);
            }
        })?;
    }
    Ok(())
}
