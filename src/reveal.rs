use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

/// True once the element's top edge sits above `viewport_height - REVEAL_POINT`.
pub fn is_within_reveal_point(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - config::REVEAL_POINT
}

/// Tracks which of a fixed set of elements have been revealed. Flags only go
/// from false to true.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Feeds the current top offsets of every element (indexed like the
    /// tracker) and returns the indices revealed by this call. Offsets of
    /// already revealed elements are ignored.
    pub fn update<F>(&mut self, viewport_height: f64, mut top_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> f64,
    {
        let mut newly = Vec::new();
        for (index, revealed) in self.revealed.iter_mut().enumerate() {
            if *revealed {
                continue;
            }
            if is_within_reveal_point(top_of(index), viewport_height) {
                *revealed = true;
                newly.push(index);
            }
        }
        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    let elements = dom::query_all(document, config::SCROLL_REVEAL_TARGETS);
    if elements.is_empty() {
        return Ok(());
    }
    for element in &elements {
        dom::add_class(element, config::REVEAL_CLASS)?;
    }
    log::debug!("scroll reveal watching {} elements", elements.len());

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let check = {
        let window = window.clone();
        move || reveal_pass(&window, &elements, &tracker)
    };

    check();
    dom::listen(window, "scroll", move |_| check())
}

fn reveal_pass(window: &Window, elements: &[Element], tracker: &RefCell<RevealTracker>) {
    let viewport_height = dom::viewport_height(window);
    let newly = tracker
        .borrow_mut()
        .update(viewport_height, |i| dom::top_in_viewport(&elements[i]));
    for index in newly {
        if let Err(e) = dom::add_class(&elements[index], config::VISIBLE_CLASS) {
            log::warn!("reveal: {}", e);
        }
    }
}
