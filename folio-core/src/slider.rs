//! Budget slider - caller-owned integer state plus the derived view model.
//!
//! `SliderState` is owned by the enclosing form. `BudgetSlider` is the
//! static configuration (range, step, tier table, currency) that turns a
//! state into everything the renderer needs: amount text, tier label, style
//! token and fill position.

use serde::Serialize;

use crate::currency::{format_currency, format_tier_range, CurrencyCode, Locale};
use crate::error::DomainError;
use crate::tier::{Tier, TierClassification, TierTable};

/// Range and step of an integer slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    min: i64,
    max: i64,
    step: i64,
    default: i64,
}

impl SliderConfig {
    pub fn new(min: i64, max: i64, step: i64, default: i64) -> Result<Self, DomainError> {
        if max <= min {
            return Err(DomainError::DegenerateRange {
                min: min as f64,
                max: max as f64,
            });
        }
        if step <= 0 {
            return Err(DomainError::InvalidStep(step));
        }
        let mut config = Self {
            min,
            max,
            step,
            default,
        };
        config.default = config.snap(default);
        Ok(config)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn default_value(&self) -> i64 {
        self.default
    }

    /// Clamp to the range and snap to the nearest `min + k * step` that does
    /// not exceed `max`. Ties snap upward.
    pub fn snap(&self, raw: i64) -> i64 {
        let offset = raw.clamp(self.min, self.max) - self.min;
        let steps = (offset + self.step / 2) / self.step;
        let snapped = self.min + steps * self.step;
        if snapped > self.max {
            snapped - self.step
        } else {
            snapped
        }
    }

    /// Fill fraction of `value` within the range, in `[0, 1]`.
    pub fn position(&self, value: i64) -> f64 {
        let span = (self.max - self.min) as f64;
        ((value - self.min) as f64 / span).clamp(0.0, 1.0)
    }

    pub fn initial_state(&self) -> SliderState {
        SliderState {
            value: self.default,
        }
    }
}

/// Current slider value. Always snapped to its config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderState {
    value: i64,
}

impl SliderState {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Set from raw user input; out-of-range input is clamped.
    pub fn set(&mut self, config: &SliderConfig, raw: i64) {
        self.value = config.snap(raw);
    }

    pub fn step_up(&mut self, config: &SliderConfig) {
        self.set(config, self.value.saturating_add(config.step));
    }

    pub fn step_down(&mut self, config: &SliderConfig) {
        self.set(config, self.value.saturating_sub(config.step));
    }

    pub fn reset(&mut self, config: &SliderConfig) {
        self.value = config.default;
    }

    pub fn position(&self, config: &SliderConfig) -> f64 {
        config.position(self.value)
    }
}

/// Everything a renderer needs to draw the slider for one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetView {
    pub amount: i64,
    pub formatted: String,
    pub classification: TierClassification,
    /// Fill / thumb position in `[0, 1]`.
    pub fill: f64,
}

/// One entry of the tier legend shown under the slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierChip {
    pub label: String,
    pub range_label: String,
    pub style_token: String,
    pub active: bool,
}

/// Slider range, tier table and currency settings for the budget input.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSlider {
    config: SliderConfig,
    tiers: TierTable,
    locale: Locale,
    currency: CurrencyCode,
}

impl BudgetSlider {
    /// The tier table spans exactly the slider range.
    pub fn new(
        config: SliderConfig,
        tiers: Vec<Tier>,
        locale: Locale,
        currency: CurrencyCode,
    ) -> Result<Self, DomainError> {
        let tiers = TierTable::new(tiers, config.min as f64, config.max as f64)?;
        Ok(Self {
            config,
            tiers,
            locale,
            currency,
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, self.locale, self.currency)
    }

    pub fn view(&self, state: &SliderState) -> BudgetView {
        let amount = state.value();
        let classification = self.tiers.classify(amount as f64);
        BudgetView {
            amount,
            formatted: self.format(amount as f64),
            fill: classification.normalized_position,
            classification,
        }
    }

    /// Legend entries for every tier, marking the one `state` falls in.
    pub fn chips(&self, state: &SliderState) -> Vec<TierChip> {
        let active = self.tiers.tier_index(state.value() as f64);
        self.tiers
            .tiers()
            .iter()
            .enumerate()
            .map(|(index, tier)| {
                let (lower, upper) = self
                    .tiers
                    .tier_range(index)
                    .unwrap_or((self.tiers.min_value(), None));
                TierChip {
                    label: tier.label.clone(),
                    range_label: format_tier_range(lower, upper, self.currency),
                    style_token: tier.style_token.clone(),
                    active: index == active,
                }
            })
            .collect()
    }

    /// Range end labels, e.g. `("₹8,500", "₹1,00,000+")`.
    pub fn range_labels(&self) -> (String, String) {
        (
            self.format(self.config.min as f64),
            format!("{}+", self.format(self.config.max as f64)),
        )
    }
}
