/// Styled lines printed to the developer console at startup: (text, css).
pub const BANNER: &[(&str, &str)] = &[
    (
        "%c✨ THE COMMUNITY ✨",
        "font-size: 24px; font-weight: bold; color: #1E3A5F;",
    ),
    (
        "%cOffline is the new online",
        "font-size: 14px; color: #C4846C; font-style: italic;",
    ),
    (
        "%c→ https://instagram.com/the.community.events",
        "font-size: 12px; color: #6B6B6B;",
    ),
];

pub fn print() {
    for &(text, style) in BANNER {
        gloo_console::log!(text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_carries_a_style_directive() {
        assert_eq!(BANNER.len(), 3);
        for (text, style) in BANNER {
            assert!(text.starts_with("%c"));
            assert!(style.contains("font-size"));
        }
    }
}
