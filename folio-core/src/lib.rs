//! Folio Core - the logic behind the portfolio site's interactive pieces.
//!
//! - Tier classification of a bounded value (pricing brackets)
//! - Whole-unit currency formatting
//! - Budget slider state and its render-ready view
//! - Scroll-progress breakpoint for the collapsing navbar
//! - Service catalog, contact-form lifecycle and the submission seam
//! - Page state and TOML site configuration
//!
//! Classification and interpolation are pure: callers own the state and
//! pass it in on every change.

pub mod config;
pub mod currency;
pub mod error;
pub mod form;
pub mod page;
pub mod scroll;
pub mod services;
pub mod slider;
pub mod tier;

pub use config::{ConfigError, Site, SiteConfig};
pub use currency::{format_compact, format_currency, format_tier_range, CurrencyCode, CurrencyError, Locale};
pub use error::DomainError;
pub use form::{
    ContactForm, FormData, FormError, FormField, FormPhase, MessageTone, SimulatedSubmission,
    SubmissionError, SubmissionService, SubmissionSettings, Toast,
};
pub use page::{PageState, ThemeMode};
pub use scroll::{interpolate, Length, Regime, ScrollBreakpoint, ScrollRange, StyleBundle};
pub use services::{Service, ServiceCatalog};
pub use slider::{BudgetSlider, BudgetView, SliderConfig, SliderState, TierChip};
pub use tier::{classify, normalized_position, Tier, TierClassification, TierTable};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn tier_types_are_send_sync() {
        assert_send::<TierTable>();
        assert_sync::<TierTable>();
        assert_send::<TierClassification>();
        assert_sync::<TierClassification>();
    }

    #[test]
    fn scroll_types_are_send_sync() {
        assert_send::<ScrollBreakpoint>();
        assert_sync::<ScrollBreakpoint>();
        assert_send::<ScrollRange>();
        assert_sync::<ScrollRange>();
    }

    #[test]
    fn site_is_send_sync() {
        assert_send::<Site>();
        assert_sync::<Site>();
    }

    #[test]
    fn form_types_are_send_sync() {
        assert_send::<ContactForm>();
        assert_sync::<ContactForm>();
        assert_send::<FormData>();
        assert_sync::<FormData>();
        assert_send::<Box<dyn SubmissionService>>();
        assert_sync::<Box<dyn SubmissionService>>();
    }
}
