use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

/// Element id named by a same-page link, percent-decoded. A bare `#` names
/// nothing.
pub fn fragment_id(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let id = urlencoding::decode(fragment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(id)
}

/// Page offset that puts the target's top edge just below the fixed navbar.
pub fn scroll_destination(target_top: f64, page_offset: f64, navbar_height: f64) -> f64 {
    target_top + page_offset - navbar_height
}

pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    for anchor in dom::query_all(document, config::ANCHOR_LINKS) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let (window, document) = (window.clone(), document.clone());
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let target = fragment_id(&href).and_then(|id| document.get_element_by_id(&id));
            let Some(target) = target else {
                log::debug!("anchor {} has no target on this page", href);
                return;
            };
            let navbar_height = dom::query(&document, config::NAVBAR)
                .map(|navbar| dom::offset_height(&navbar))
                .unwrap_or(0.0);
            let top = scroll_destination(
                dom::top_in_viewport(&target),
                dom::scroll_offset(&window),
                navbar_height,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment() {
        assert_eq!(fragment_id("#kontakt").as_deref(), Some("kontakt"));
    }

    #[test]
    fn percent_encoded_fragment() {
        assert_eq!(fragment_id("#o%20nas").as_deref(), Some("o nas"));
        assert_eq!(fragment_id("#wydarzenia-%C5%BC").as_deref(), Some("wydarzenia-ż"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/blog#top"), None);
    }

    #[test]
    fn destination_clears_the_navbar() {
        // Target 400px below the fold while already 1200px down, 80px navbar.
        assert_eq!(scroll_destination(400.0, 1200.0, 80.0), 1520.0);
        // Target above the viewport.
        assert_eq!(scroll_destination(-300.0, 1200.0, 80.0), 820.0);
    }
}
