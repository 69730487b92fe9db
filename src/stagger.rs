use web_sys::Document;

use crate::config;
use crate::dom;
use crate::error::BehaviorError;

pub fn delay_for(index: usize, base_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(base_ms)
}

pub fn delays(count: usize, base_ms: u32) -> impl Iterator<Item = u32> {
    (0..count).map(move |i| delay_for(i, base_ms))
}

pub fn css_delay(ms: u32) -> String {
    format!("{}ms", ms)
}

pub fn attach(document: &Document) -> Result<(), BehaviorError> {
    for &(selector, base_ms) in config::STAGGER_GROUPS {
        let items = dom::query_all(document, selector);
        for (item, delay) in items.iter().zip(delays(items.len(), base_ms)) {
            dom::set_style(item, "transition-delay", &css_delay(delay))?;
        }
    }
    Ok(())
}
