pub mod config;
pub mod controller;
pub mod dom;
pub mod error;

pub mod accordion;
pub mod anchor_scroll;
pub mod banner;
pub mod contact_form;
pub mod loaded;
pub mod nav_toggle;
pub mod navbar;
pub mod observer;
pub mod parallax;
pub mod reveal;
pub mod stagger;

pub use controller::{init, start};
pub use error::{BehaviorError, ValidationError};
