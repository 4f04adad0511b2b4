//! Contact form lifecycle and the submission seam.
//!
//! Phase machine: `Editing → Submitting → Submitted → Editing` (on reset).
//! A failed submission drops back to `Editing` with the error kept for
//! display. The submission itself goes through [`SubmissionService`], so
//! the simulated implementation can be swapped for a real one without
//! touching the form.

use std::fmt;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::services::ServiceCatalog;
use crate::slider::{SliderConfig, SliderState};

// ─── Errors ──────────────────────────────────────────────────────────

/// A field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        })
    }
}

/// Failure reported by a [`SubmissionService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid fields: {}", join_fields(.0))]
    Invalid(Vec<FormField>),
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        phase: FormPhase,
        action: &'static str,
    },
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ─── Data ────────────────────────────────────────────────────────────

/// Snapshot of the form handed to the submission service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub service: Option<String>,
    pub budget: i64,
    pub message: String,
}

impl FormData {
    /// Every field that fails validation, in display order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(FormField::Name);
        }
        if !is_plausible_email(&self.email) {
            invalid.push(FormField::Email);
        }
        if self.message.trim().is_empty() {
            invalid.push(FormField::Message);
        }
        invalid
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Lifecycle phase of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormPhase::Editing => "editing",
            FormPhase::Submitting => "submitting",
            FormPhase::Submitted => "submitted",
        })
    }
}

// ─── Submission seam ─────────────────────────────────────────────────

/// Delivers a completed form somewhere.
pub trait SubmissionService: Send + Sync {
    fn submit(&self, form: &FormData) -> Result<(), SubmissionError>;
}

/// Waits for a fixed delay, then reports success. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmission {
    pub delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SubmissionService for SimulatedSubmission {
    fn submit(&self, form: &FormData) -> Result<(), SubmissionError> {
        info!(
            name = %form.name,
            budget = form.budget,
            delay_ms = self.delay.as_millis() as u64,
            "simulating contact submission"
        );
        thread::sleep(self.delay);
        Ok(())
    }
}

/// Notification shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

/// Submission delay and success copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSettings {
    pub delay_ms: u64,
    pub success_title: String,
    pub success_description: String,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            success_title: "Awesome! Your message is on its way.".into(),
            success_description: "I'll get back to you within 24 hours.".into(),
        }
    }
}

impl SubmissionSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn simulated_service(&self) -> SimulatedSubmission {
        SimulatedSubmission::new(self.delay())
    }

    pub fn success_toast(&self) -> Toast {
        Toast {
            title: self.success_title.clone(),
            description: self.success_description.clone(),
        }
    }
}

// ─── Message tone ────────────────────────────────────────────────────

const POSITIVE_WORDS: &[&str] = &["great", "awesome", "amazing", "excellent", "wonderful", "fantastic"];
const URGENT_WORDS: &[&str] = &["urgent", "problem", "issue", "help", "asap", "quickly"];

/// Coarse mood of the message, used for the hint icon next to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageTone {
    Positive,
    Urgent,
    Budget,
    Design,
    Neutral,
}

impl MessageTone {
    /// Case-insensitive substring match; earlier categories win.
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();
        if POSITIVE_WORDS.iter().any(|w| lower.contains(w)) {
            MessageTone::Positive
        } else if URGENT_WORDS.iter().any(|w| lower.contains(w)) {
            MessageTone::Urgent
        } else if lower.contains("budget") {
            MessageTone::Budget
        } else if lower.contains("design") {
            MessageTone::Design
        } else {
            MessageTone::Neutral
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MessageTone::Positive => "😊",
            MessageTone::Urgent => "⚡",
            MessageTone::Budget => "💰",
            MessageTone::Design => "🎨",
            MessageTone::Neutral => "💬",
        }
    }
}

// ─── Form ────────────────────────────────────────────────────────────

/// Contact form state, owned by the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: Option<String>,
    pub message: String,
    budget: SliderState,
    phase: FormPhase,
    last_error: Option<SubmissionError>,
}

impl ContactForm {
    pub fn new(slider: &SliderConfig) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            service: None,
            message: String::new(),
            budget: slider.initial_state(),
            phase: FormPhase::Editing,
            last_error: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn budget(&self) -> &SliderState {
        &self.budget
    }

    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    pub fn tone(&self) -> MessageTone {
        MessageTone::detect(&self.message)
    }

    pub fn set_budget(&mut self, slider: &SliderConfig, raw: i64) {
        self.budget.set(slider, raw);
    }

    pub fn budget_up(&mut self, slider: &SliderConfig) {
        self.budget.step_up(slider);
    }

    pub fn budget_down(&mut self, slider: &SliderConfig) {
        self.budget.step_down(slider);
    }

    /// Select a service and pre-fill its suggested budget. Returns false for
    /// an unknown id, leaving the form untouched.
    pub fn select_service(&mut self, id: &str, catalog: &ServiceCatalog, slider: &SliderConfig) -> bool {
        match catalog.suggested_budget(id) {
            Some(budget) => {
                self.service = Some(id.to_string());
                self.budget.set(slider, budget);
                true
            }
            None => false,
        }
    }

    pub fn data(&self) -> FormData {
        FormData {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            service: self.service.clone(),
            budget: self.budget.value(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate and move to `Submitting`, returning the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<FormData, FormError> {
        self.expect_phase(FormPhase::Editing, "submit")?;
        let data = self.data();
        let invalid = data.invalid_fields();
        if !invalid.is_empty() {
            return Err(FormError::Invalid(invalid));
        }
        self.last_error = None;
        self.phase = FormPhase::Submitting;
        info!(budget = data.budget, "contact form submitting");
        Ok(data)
    }

    /// Record the outcome of an in-flight submission.
    pub fn complete(&mut self, outcome: Result<(), SubmissionError>) -> Result<(), FormError> {
        self.expect_phase(FormPhase::Submitting, "complete a submission")?;
        match outcome {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                info!("contact form submitted");
            }
            Err(e) => {
                warn!(error = %e, "contact submission failed");
                self.phase = FormPhase::Editing;
                self.last_error = Some(e);
            }
        }
        Ok(())
    }

    /// Clear the form for another message. Not allowed mid-submission.
    pub fn reset(&mut self, slider: &SliderConfig) -> Result<(), FormError> {
        if self.phase == FormPhase::Submitting {
            return Err(FormError::InvalidTransition {
                phase: self.phase,
                action: "reset",
            });
        }
        *self = Self::new(slider);
        Ok(())
    }

    /// Run the whole lifecycle synchronously against `service`.
    pub fn submit_with(&mut self, service: &dyn SubmissionService) -> Result<(), FormError> {
        let data = self.begin_submit()?;
        let outcome = service.submit(&data);
        self.complete(outcome.clone())?;
        outcome.map_err(FormError::from)
    }

    fn expect_phase(&self, expected: FormPhase, action: &'static str) -> Result<(), FormError> {
        if self.phase != expected {
            return Err(FormError::InvalidTransition {
                phase: self.phase,
                action,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> SliderConfig {
        SliderConfig::new(1_000, 50_000, 500, 5_000).unwrap()
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new(&slider());
        form.name = "Asha".into();
        form.email = "asha@example.com".into();
        form.message = "Need a new storefront".into();
        form
    }

    struct FailingService;

    impl SubmissionService for FailingService {
        fn submit(&self, _form: &FormData) -> Result<(), SubmissionError> {
            Err(SubmissionError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn email_validation() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("  first.last@mail.example.org "));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@localhost"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("a b@c.com"));
    }

    #[test]
    fn empty_form_lists_every_invalid_field() {
        let mut form = ContactForm::new(&slider());
        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err,
            FormError::Invalid(vec![FormField::Name, FormField::Email, FormField::Message])
        );
        assert_eq!(err.to_string(), "invalid fields: name, email, message");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn full_cycle_with_simulated_service() {
        let mut form = filled_form();
        let service = SimulatedSubmission::new(Duration::ZERO);
        form.submit_with(&service).unwrap();
        assert_eq!(form.phase(), FormPhase::Submitted);

        form.reset(&slider()).unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.name.is_empty());
        assert_eq!(form.budget().value(), 5_000);
    }

    #[test]
    fn failure_returns_to_editing_with_error() {
        let mut form = filled_form();
        let err = form.submit_with(&FailingService).unwrap_err();
        assert!(matches!(err, FormError::Submission(SubmissionError::Unavailable(_))));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.last_error().is_some());
        assert_eq!(form.name, "Asha");
    }

    #[test]
    fn transitions_out_of_order_rejected() {
        let mut form = filled_form();
        assert!(matches!(
            form.complete(Ok(())),
            Err(FormError::InvalidTransition { phase: FormPhase::Editing, .. })
        ));

        form.begin_submit().unwrap();
        assert!(form.begin_submit().is_err());
        let err = form.reset(&slider()).unwrap_err();
        assert_eq!(err.to_string(), "cannot reset while submitting");
    }

    #[test]
    fn snapshot_is_trimmed_and_carries_budget() {
        let mut form = filled_form();
        form.name = "  Asha  ".into();
        form.set_budget(&slider(), 12_345);
        let data = form.begin_submit().unwrap();
        assert_eq!(data.name, "Asha");
        assert_eq!(data.budget, 12_500);
    }

    #[test]
    fn selecting_service_prefills_budget() {
        let catalog = ServiceCatalog::new(vec![crate::services::Service {
            id: "app".into(),
            label: "Mobile App".into(),
            suggested_budget: (8_000, 30_000),
        }])
        .unwrap();
        let mut form = ContactForm::new(&slider());
        assert!(form.select_service("app", &catalog, &slider()));
        assert_eq!(form.service.as_deref(), Some("app"));
        assert_eq!(form.budget().value(), 8_000);
        assert!(!form.select_service("nope", &catalog, &slider()));
        assert_eq!(form.service.as_deref(), Some("app"));
    }

    #[test]
    fn message_tone_priority() {
        assert_eq!(MessageTone::detect("This is AWESOME, help!"), MessageTone::Positive);
        assert_eq!(MessageTone::detect("Need this ASAP"), MessageTone::Urgent);
        assert_eq!(MessageTone::detect("what budget do you need"), MessageTone::Budget);
        assert_eq!(MessageTone::detect("logo design"), MessageTone::Design);
        assert_eq!(MessageTone::detect("hello"), MessageTone::Neutral);
        assert_eq!(MessageTone::Neutral.icon(), "💬");
    }

    #[test]
    fn settings_build_service_and_toast() {
        let settings = SubmissionSettings::default();
        assert_eq!(settings.simulated_service().delay, Duration::from_millis(2000));
        assert!(!settings.success_toast().title.is_empty());
    }
}
