//! Application state - single-owner, main-thread only.
//!
//! All page state lives here: the validated site, theme/menu state, the
//! contact form, the simulated scroll position and the navbar style that is
//! currently applied. The submission worker talks back over channels.

use std::sync::mpsc::{Receiver, Sender};

use chrono::{DateTime, Duration, Local};
use tracing::{debug, warn};

use folio_core::{
    ContactForm, FormError, FormPhase, PageState, Regime, Site, StyleBundle, SubmissionError,
    Toast,
};

use crate::worker::{WorkerCommand, WorkerResponse};

/// How long the success toast stays on screen.
pub const TOAST_SECONDS: i64 = 4;

/// Pixels scrolled per PageUp/PageDown.
pub const SCROLL_STEP_PX: f64 = 40.0;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Email,
    Service,
    Budget,
    Message,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Name,
        Focus::Email,
        Focus::Service,
        Focus::Budget,
        Focus::Message,
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Name => "Name",
            Focus::Email => "Email",
            Focus::Service => "Service",
            Focus::Budget => "Budget",
            Focus::Message => "Message",
            Focus::Submit => "Send",
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Toast plus the moment it disappears.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub toast: Toast,
    pub expires_at: DateTime<Local>,
}

/// Navbar style currently on screen. Replaced only on a regime change.
#[derive(Debug, Clone)]
pub struct NavbarState {
    pub regime: Regime,
    pub style: StyleBundle,
    /// Number of times a style has been applied, including the first.
    pub applications: usize,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,

    pub site: Site,
    pub page: PageState,
    pub form: ContactForm,
    pub focus: Focus,
    /// Highlighted row in the service list.
    pub service_cursor: usize,

    // Scroll
    pub scroll_offset: f64,
    pub navbar: NavbarState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub toast: Option<ActiveToast>,
}

impl AppState {
    pub fn new(
        site: Site,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        let form = ContactForm::new(site.budget.config());
        let regime = site.navbar.regime(site.trigger.progress(0.0));
        let navbar = NavbarState {
            regime,
            style: site.navbar.style(regime).clone(),
            applications: 1,
        };
        Self {
            running: true,
            site,
            page: PageState::default(),
            form,
            focus: Focus::Name,
            service_cursor: 0,
            scroll_offset: 0.0,
            navbar,
            worker_tx,
            worker_rx,
            status_message: None,
            toast: None,
        }
    }

    /// Current scroll progress through the navbar trigger range.
    pub fn scroll_progress(&self) -> f64 {
        self.site.trigger.progress(self.scroll_offset)
    }

    /// Scroll the page by `delta` pixels (never above the top). Returns true
    /// when the navbar style was re-applied.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.scroll_offset = (self.scroll_offset + delta).max(0.0);
        let regime = self.site.navbar.regime(self.scroll_progress());
        if regime == self.navbar.regime {
            return false;
        }
        debug!(?regime, offset = self.scroll_offset, "navbar regime changed");
        self.navbar.regime = regime;
        self.navbar.style = self.site.navbar.style(regime).clone();
        self.navbar.applications += 1;
        true
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.page.toggle_theme();
        self.set_status(if theme.is_dark() { "Dark mode" } else { "Light mode" });
    }

    /// Move the service highlight and select it, pre-filling the budget.
    pub fn select_service_at(&mut self, index: usize) {
        let Some(service) = self.site.services.services().get(index) else {
            return;
        };
        let id = service.id.clone();
        let label = service.label.clone();
        self.service_cursor = index;
        if self
            .form
            .select_service(&id, &self.site.services, self.site.budget.config())
        {
            let amount = self.site.budget.format(self.form.budget().value() as f64);
            self.set_status(format!("{label} selected, budget set to {amount}"));
        }
    }

    pub fn budget_up(&mut self) {
        self.form.budget_up(self.site.budget.config());
    }

    pub fn budget_down(&mut self) {
        self.form.budget_down(self.site.budget.config());
    }

    /// Validate the form and hand it to the worker.
    pub fn submit(&mut self) {
        let data = match self.form.begin_submit() {
            Ok(data) => data,
            Err(FormError::Invalid(fields)) => {
                if let Some(first) = fields.first() {
                    self.focus = match first {
                        folio_core::FormField::Name => Focus::Name,
                        folio_core::FormField::Email => Focus::Email,
                        folio_core::FormField::Message => Focus::Message,
                    };
                }
                self.set_warning(FormError::Invalid(fields).to_string());
                return;
            }
            Err(e) => {
                self.set_warning(e.to_string());
                return;
            }
        };

        if self.worker_tx.send(WorkerCommand::Submit { data }).is_err() {
            warn!("submission worker is gone");
            self.finish_submission(Err(SubmissionError::Unavailable(
                "submission worker stopped".into(),
            )));
            return;
        }
        self.set_status("Launching your message…");
    }

    /// Apply the worker's outcome to the form.
    pub fn finish_submission(&mut self, result: Result<(), SubmissionError>) {
        let failed = result.as_ref().err().map(|e| e.to_string());
        if let Err(e) = self.form.complete(result) {
            self.set_warning(e.to_string());
            return;
        }
        match failed {
            None => {
                self.show_toast(self.site.submission.success_toast(), Local::now());
                self.status_message = None;
            }
            Some(message) => self.set_error(message),
        }
    }

    /// Clear the form after a successful send.
    pub fn send_another(&mut self) {
        match self.form.reset(self.site.budget.config()) {
            Ok(()) => {
                self.focus = Focus::Name;
                self.service_cursor = 0;
                self.toast = None;
            }
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    pub fn show_toast(&mut self, toast: Toast, now: DateTime<Local>) {
        self.toast = Some(ActiveToast {
            toast,
            expires_at: now + Duration::seconds(TOAST_SECONDS),
        });
    }

    /// Drop the toast once it has expired.
    pub fn expire_toast(&mut self, now: DateTime<Local>) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
