use web_sys::{Document, Window};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

/// Marks `body` with `loaded` once every subresource has finished loading.
pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    if document.ready_state() == "complete" {
        return mark(document);
    }
    let document = document.clone();
    dom::listen(window, "load", move |_| {
        if let Err(e) = mark(&document) {
            log::warn!("load marker: {}", e);
        }
    })
}

fn mark(document: &Document) -> Result<(), BehaviorError> {
    match document.body() {
        Some(body) => dom::add_class(&body, config::LOADED_CLASS),
        None => Ok(()),
    }
}
