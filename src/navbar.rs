use web_sys::{Document, Window};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarShadow {
    Raised,
    Flat,
}

impl NavbarShadow {
    /// Strictly above the threshold raises the bar; no hysteresis.
    pub fn for_offset(scroll_offset: f64) -> Self {
        if scroll_offset > config::NAVBAR_SHADOW_THRESHOLD {
            NavbarShadow::Raised
        } else {
            NavbarShadow::Flat
        }
    }

    pub fn css_value(self) -> &'static str {
        match self {
            NavbarShadow::Raised => config::NAVBAR_SHADOW,
            NavbarShadow::Flat => "none",
        }
    }
}

pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    let Some(navbar) = dom::query(document, config::NAVBAR) else {
        return Ok(());
    };

    let apply = {
        let window = window.clone();
        move || {
            let shadow = NavbarShadow::for_offset(dom::scroll_offset(&window));
            if let Err(e) = dom::set_style(&navbar, "box-shadow", shadow.css_value()) {
                log::warn!("navbar shadow: {}", e);
            }
        }
    };

    apply();
    dom::listen(window, "scroll", move |_| apply())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn threshold_boundary() {
        assert_eq!(NavbarShadow::for_offset(99.0), NavbarShadow::Flat);
        assert_eq!(NavbarShadow::for_offset(100.0), NavbarShadow::Flat);
        assert_eq!(NavbarShadow::for_offset(101.0), NavbarShadow::Raised);
    }

    #[test]
    fn css_values() {
        assert_eq!(NavbarShadow::Flat.css_value(), "none");
        assert_eq!(
            NavbarShadow::Raised.css_value(),
            "0 2px 20px rgba(0,0,0,0.08)"
        );
    }

    proptest! {
        #[test]
        fn flat_at_or_below_threshold(offset in -500.0f64..=100.0) {
            prop_assert_eq!(NavbarShadow::for_offset(offset), NavbarShadow::Flat);
        }

        #[test]
        fn raised_above_threshold(offset in 100.001f64..1.0e6) {
            prop_assert_eq!(NavbarShadow::for_offset(offset), NavbarShadow::Raised);
        }
    }
}
