use web_sys::{Document, Window};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    /// The hero frame for a scroll offset, or `None` once the offset has
    /// passed one viewport height, in which case the hero keeps its last frame.
    pub fn at(scroll_offset: f64, viewport_height: f64) -> Option<Self> {
        if viewport_height <= 0.0 || scroll_offset > viewport_height {
            return None;
        }
        let offset = scroll_offset.max(0.0);
        Some(Self {
            translate_y: offset * config::PARALLAX_SPEED,
            opacity: 1.0 - offset / viewport_height * config::PARALLAX_MAX_FADE,
        })
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    let Some(hero) = dom::query(document, config::HERO) else {
        return Ok(());
    };

    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        let frame = ParallaxFrame::at(
            dom::scroll_offset(&scroll_window),
            dom::viewport_height(&scroll_window),
        );
        let Some(frame) = frame else {
            return;
        };
        let result = dom::set_style(&hero, "transform", &frame.transform())
            .and_then(|_| dom::set_style(&hero, "opacity", &frame.opacity.to_string()));
        if let Err(e) = result {
            log::warn!("hero parallax: {}", e);
        }
    })
}
