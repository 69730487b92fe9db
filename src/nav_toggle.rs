use web_sys::{Document, Element};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    /// Background scrolling is locked while the menu is open.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub fn attach(document: &Document) -> Result<(), BehaviorError> {
    let (Some(toggle), Some(menu)) = (
        dom::query(document, config::NAV_TOGGLE),
        dom::query(document, config::NAV_MENU),
    ) else {
        return Ok(());
    };

    {
        let (document, button, menu) = (document.clone(), toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let next = current(&menu).toggle();
            render(&document, &button, &menu, next);
        })?;
    }

    for link in dom::query_all_in(&menu, "a") {
        let (document, button, menu) = (document.clone(), toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_| {
            let next = current(&menu).close();
            render(&document, &button, &menu, next);
        })?;
    }
    Ok(())
}

/// The menu's class list is the source of truth, so markup that ships open
/// is honoured.
fn current(menu: &Element) -> NavMenu {
    NavMenu::new(menu.class_list().contains(config::ACTIVE_CLASS))
}

fn render(document: &Document, toggle: &Element, menu: &Element, state: NavMenu) {
    let result = if state.is_open() {
        dom::add_class(toggle, config::ACTIVE_CLASS)
            .and_then(|_| dom::add_class(menu, config::ACTIVE_CLASS))
    } else {
        dom::remove_class(toggle, config::ACTIVE_CLASS)
            .and_then(|_| dom::remove_class(menu, config::ACTIVE_CLASS))
    };
    let result = result.and_then(|_| match document.body() {
        Some(body) => dom::set_style(&body, "overflow", state.body_overflow()),
        None => Ok(()),
    });
    if let Err(e) = result {
        log::warn!("nav toggle: {}", e);
    }
}
