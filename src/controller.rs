use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::error::BehaviorError;
use crate::{
    accordion, anchor_scroll, banner, contact_form, dom, loaded, nav_toggle, navbar, observer,
    parallax, reveal, stagger,
};

/// Initializes every behavior as soon as the DOM is parsed. The wasm module
/// can arrive after `DOMContentLoaded`, in which case this runs immediately.
pub fn start() -> Result<(), BehaviorError> {
    let window = dom::window()?;
    let document = window.document().ok_or(BehaviorError::MissingDocument)?;

    if document.ready_state() != "loading" {
        init(&window, &document);
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::once(move || {
        init(&window, &document);
    });
    target.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    )?;
    on_ready.forget();
    Ok(())
}

/// Registers each behavior independently and returns how many failed.
pub fn init(window: &Window, document: &Document) -> usize {
    let registrations = [
        ("nav toggle", nav_toggle::attach(document)),
        ("anchor scroll", anchor_scroll::attach(window, document)),
        ("navbar shadow", navbar::attach(window, document)),
        ("scroll reveal", reveal::attach(window, document)),
        ("contact form", contact_form::attach(window, document)),
        ("accordion", accordion::attach(document)),
        ("hero parallax", parallax::attach(window, document)),
        ("observer reveal", observer::attach(window, document)),
        ("stagger", stagger::attach(document)),
        ("load marker", loaded::attach(window, document)),
    ];

    let failed = register(registrations);

    banner::print();
    log::info!("Page behaviors initialized ({} failed)", failed);
    failed
}

/// Walks every registration outcome, logging failures, and returns how many
/// failed. A failure never stops the remaining entries from being reported.
pub fn register<'a, I>(registrations: I) -> usize
where
    I: IntoIterator<Item = (&'a str, Result<(), BehaviorError>)>,
{
    let mut failed = 0;
    for (name, result) in registrations {
        match result {
            Ok(()) => log::debug!("{} ready", name),
            Err(e) => {
                failed += 1;
                log::warn!("{} not registered: {}", name, e);
            }
        }
    }
    failed
}
