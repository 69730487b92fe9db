//! Contact form: client-side validation and a simulated send.
//!
//! Nothing leaves the browser. A valid submission is logged, the submit
//! button shows a confirmation label for a few seconds, then the form resets.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Array};
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement, Window};

use crate::config;
use crate::dom;
use crate::error::{BehaviorError, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    /// Later pairs with the same name replace earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for &field in config::REQUIRED_FIELDS {
            if self.get(field).map_or(true, str::is_empty) {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Submit button state. `Sent` remembers the label to put back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sent { original_label: String },
}

impl SubmitState {
    /// Enters `Sent`. A repeated send keeps the label captured first, so the
    /// temporary confirmation text is never taken for the original.
    pub fn begin(&mut self, current_label: &str) {
        if let SubmitState::Idle = self {
            *self = SubmitState::Sent {
                original_label: current_label.to_string(),
            };
        }
    }

    /// Back to `Idle`, handing out the label to restore.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(self) {
            SubmitState::Sent { original_label } => Some(original_label),
            SubmitState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Sent { .. })
    }
}

/// Blocking user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {}", BehaviorError::from(e));
        }
    }
}

#[derive(Default)]
struct Submission {
    state: SubmitState,
    // Dropping the handle cancels the pending revert.
    revert: Option<Timeout>,
}

pub fn attach(window: &Window, document: &Document) -> Result<(), BehaviorError> {
    attach_with(document, Rc::new(AlertNotifier::new(window.clone())))
}

pub fn attach_with(document: &Document, notifier: Rc<dyn Notifier>) -> Result<(), BehaviorError> {
    let Some(form) = dom::query(document, config::CONTACT_FORM)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let submission = Rc::new(RefCell::new(Submission::default()));
    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = submit(&form, &submission, notifier.as_ref()) {
            log::warn!("contact form: {}", e);
        }
    })
}

fn submit(
    form: &HtmlFormElement,
    submission: &Rc<RefCell<Submission>>,
    notifier: &dyn Notifier,
) -> Result<(), BehaviorError> {
    let payload = read_payload(form)?;
    if let Err(e) = payload.validate() {
        log::debug!("contact form rejected: {}", e);
        notifier.notify(config::VALIDATION_MESSAGE);
        return Ok(());
    }

    match payload.to_json() {
        Ok(json) => log::info!("Form submitted: {}", json),
        Err(e) => log::warn!("could not serialize form payload: {}", e),
    }

    if let Some(button) = submit_button(form) {
        let mut current = submission.borrow_mut();
        if current.state.is_pending() {
            log::debug!("resubmitted while a revert was pending, restarting the timer");
        }
        current
            .state
            .begin(&button.text_content().unwrap_or_default());
        button.set_text_content(Some(config::SENT_LABEL));
        button.set_disabled(true);

        let (form, submission) = (form.clone(), Rc::clone(submission));
        current.revert = Some(Timeout::new(config::SUBMIT_REVERT_MS, move || {
            let original = submission.borrow_mut().state.finish();
            form.reset();
            if let Some(label) = original {
                button.set_text_content(Some(&label));
            }
            button.set_disabled(false);
        }));
    }

    notifier.notify(config::THANK_YOU_MESSAGE);
    Ok(())
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector(config::SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

/// All named string fields, in `FormData` order. File inputs are skipped.
fn read_payload(form: &HtmlFormElement) -> Result<FormPayload, BehaviorError> {
    let data = FormData::new_with_form(form)?;
    let mut pairs = Vec::new();
    if let Some(entries) = js_sys::try_iter(&data)? {
        for entry in entries {
            let entry: Array = entry?.unchecked_into();
            if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
                pairs.push((name, value));
            }
        }
    }
    Ok(FormPayload::from_pairs(pairs))
}
