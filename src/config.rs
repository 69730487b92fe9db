use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Selectors
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAVBAR: &str = ".navbar";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const HERO: &str = ".hero";
pub const CONTACT_FORM: &str = ".contact-form";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const FAQ_ITEMS: &str = ".faq-item";
pub const SCROLL_REVEAL_TARGETS: &str = ".section-header, .founder-card, .value-card, \
    .business-card, .service-item, .event-card, .blog-card, .faq-item";
pub const OBSERVER_REVEAL_TARGETS: &str = ".value-card, .result-item, .process-steps li";

// Class names
pub const ACTIVE_CLASS: &str = "active";
pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const LOADED_CLASS: &str = "loaded";

// Navbar
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 100.0;
pub const NAVBAR_SHADOW: &str = "0 2px 20px rgba(0,0,0,0.08)";

// Reveal
pub const REVEAL_POINT: f64 = 150.0;
pub const OBSERVER_THRESHOLD: f64 = 0.1;
pub const OBSERVER_ROOT_MARGIN: &str = "0px";

// Parallax
pub const PARALLAX_SPEED: f64 = 0.3;
pub const PARALLAX_MAX_FADE: f64 = 0.5;

// Stagger groups: (selector, base delay in ms)
pub const STAGGER_GROUPS: &[(&str, u32)] = &[
    (".value-card", 80),
    (".service-item", 50),
    (".result-item", 100),
];

// Contact form
pub const REQUIRED_FIELDS: &[&str] = &["name", "email"];
pub const SUBMIT_REVERT_MS: u32 = 3000;
pub const SENT_LABEL: &str = "Wysłano! ✓";
pub const VALIDATION_MESSAGE: &str = "Proszę wypełnić wszystkie wymagane pola.";
pub const THANK_YOU_MESSAGE: &str = "Dziękujemy za wiadomość! Odezwiemy się wkrótce.";
