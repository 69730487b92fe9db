use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

/// One-shot visibility bookkeeping for observed elements.
#[derive(Debug, Clone)]
pub struct OneShotReveal {
    revealed: Vec<bool>,
    notifications: usize,
}

impl OneShotReveal {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
            notifications: 0,
        }
    }

    /// Returns true only the first time `index` is revealed; the caller
    /// should then stop observing it.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.notifications += 1;
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Number of elements still being watched.
    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Intersection notifications received for watched elements.
    pub fn notifications(&self) -> usize {
        self.notifications
    }
}

pub fn is_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    watch(window, document).map(|_| ())
}

/// Starts observing the reveal targets and hands back the shared bookkeeping.
/// `None` when the browser lacks `IntersectionObserver` or nothing matches.
pub fn watch(
    window: &Window,
    document: &Document,
) -> Result<Option<Rc<RefCell<OneShotReveal>>>, BehaviorError> {
    if !is_supported(window) {
        log::info!("IntersectionObserver unavailable, skipping observer reveal");
        return Ok(None);
    }

    let elements = dom::query_all(document, config::OBSERVER_REVEAL_TARGETS);
    if elements.is_empty() {
        return Ok(None);
    }

    let state = Rc::new(RefCell::new(OneShotReveal::new(elements.len())));
    let shared = Rc::clone(&state);
    let targets = elements.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some(index) = targets.iter().position(|el| *el == target) else {
                continue;
            };
            if state.borrow_mut().reveal(index) {
                reveal_target(&target);
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::OBSERVER_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(config::OBSERVER_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    log::debug!("observer reveal watching {} elements", elements.len());
    Ok(Some(shared))
}

fn reveal_target(target: &Element) {
    if let Err(e) = dom::add_class(target, config::VISIBLE_CLASS) {
        log::warn!("observer reveal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_each_element_once() {
        let mut state = OneShotReveal::new(3);
        assert!(state.reveal(1));
        assert!(!state.reveal(1));
        assert!(!state.reveal(1));
        assert_eq!(state.remaining(), 2);
        assert_eq!(state.notifications(), 3);
    }

    #[test]
    fn every_element_can_be_revealed() {
        let mut state = OneShotReveal::new(2);
        assert!(state.reveal(0));
        assert!(state.reveal(1));
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut state = OneShotReveal::new(1);
        assert!(!state.reveal(7));
        assert_eq!(state.remaining(), 1);
    }
}
