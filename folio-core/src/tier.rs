//! Tier classification - maps a value in a bounded domain to a labelled tier.
//!
//! A `TierTable` partitions `[min_value, max_value]` into left-closed,
//! right-open ranges, with an open-ended top tier. A value equal to a bound
//! belongs to the tier above it. Inputs outside the domain are clamped, not
//! rejected: drag gestures routinely overshoot.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::DomainError;

/// One row of a tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Exclusive upper bound. `None` marks the open-ended top tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    pub label: String,
    /// Opaque key for the renderer (e.g. a colour ramp name).
    pub style_token: String,
}

impl Tier {
    pub fn bounded(upper_bound: f64, label: impl Into<String>, style_token: impl Into<String>) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            label: label.into(),
            style_token: style_token.into(),
        }
    }

    pub fn open(label: impl Into<String>, style_token: impl Into<String>) -> Self {
        Self {
            upper_bound: None,
            label: label.into(),
            style_token: style_token.into(),
        }
    }
}

/// Result of classifying a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierClassification {
    /// Position of the matched tier in the table.
    pub index: usize,
    pub label: String,
    pub style_token: String,
    /// Location of the (clamped) value within the domain, in `[0, 1]`.
    pub normalized_position: f64,
}

/// Validated, ordered tier table over `[min_value, max_value]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    tiers: Vec<Tier>,
    min_value: f64,
    max_value: f64,
}

impl TierTable {
    /// Build a table, checking the range and the ordering invariant.
    ///
    /// Every tier but the last needs a finite bound, bounds must be strictly
    /// increasing, and the last tier must be open-ended.
    pub fn new(tiers: Vec<Tier>, min_value: f64, max_value: f64) -> Result<Self, DomainError> {
        check_range(min_value, max_value)?;

        let last = tiers.len().checked_sub(1).ok_or(DomainError::EmptyTable)?;
        let mut previous: Option<f64> = None;

        for (index, tier) in tiers.iter().enumerate() {
            match (tier.upper_bound, index == last) {
                (None, true) => {}
                (None, false) => return Err(DomainError::UnboundedInteriorTier { index }),
                (Some(bound), true) => return Err(DomainError::BoundedTopTier { bound }),
                (Some(bound), false) => {
                    if !bound.is_finite() {
                        return Err(DomainError::NonFiniteBound { index });
                    }
                    if let Some(prev) = previous {
                        if bound <= prev {
                            return Err(DomainError::UnsortedBounds {
                                index,
                                previous: prev,
                                bound,
                            });
                        }
                    }
                    previous = Some(bound);
                }
            }
        }

        Ok(Self {
            tiers,
            min_value,
            max_value,
        })
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Clamp a value into the domain. NaN maps to `min_value`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            trace!("NaN value clamped to minimum {}", self.min_value);
            return self.min_value;
        }
        let clamped = value.clamp(self.min_value, self.max_value);
        if clamped != value {
            trace!(value, clamped, "value clamped into tier domain");
        }
        clamped
    }

    /// Index of the tier containing `value` (after clamping).
    pub fn tier_index(&self, value: f64) -> usize {
        let value = self.clamp(value);
        self.tiers
            .iter()
            .position(|tier| tier.upper_bound.map_or(true, |bound| bound > value))
            .unwrap_or(self.tiers.len() - 1)
    }

    /// Classify a value: tier label, style token and normalised position.
    pub fn classify(&self, value: f64) -> TierClassification {
        let value = self.clamp(value);
        let index = self.tier_index(value);
        let tier = &self.tiers[index];
        let span = self.max_value - self.min_value;
        TierClassification {
            index,
            label: tier.label.clone(),
            style_token: tier.style_token.clone(),
            normalized_position: ((value - self.min_value) / span).clamp(0.0, 1.0),
        }
    }

    /// Lower bound (inclusive) and upper bound (exclusive, `None` if open) of
    /// the tier at `index`. The first tier starts at `min_value`.
    pub fn tier_range(&self, index: usize) -> Option<(f64, Option<f64>)> {
        let tier = self.tiers.get(index)?;
        let lower = match index {
            0 => self.min_value,
            _ => self.tiers[index - 1].upper_bound.unwrap_or(self.min_value),
        };
        Some((lower, tier.upper_bound))
    }
}

/// Free-function form of [`TierTable::classify`].
pub fn classify(value: f64, table: &TierTable) -> TierClassification {
    table.classify(value)
}

/// `(value - min) / (max - min)`, clamped to `[0, 1]`.
pub fn normalized_position(value: f64, min: f64, max: f64) -> Result<f64, DomainError> {
    check_range(min, max)?;
    if value.is_nan() {
        return Ok(0.0);
    }
    Ok(((value - min) / (max - min)).clamp(0.0, 1.0))
}

fn check_range(min: f64, max: f64) -> Result<(), DomainError> {
    // Written so that NaN on either side also fails.
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(DomainError::DegenerateRange { min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget_table() -> TierTable {
        TierTable::new(
            vec![
                Tier::bounded(15_000.0, "Starter", "green"),
                Tier::bounded(25_000.0, "Business", "blue"),
                Tier::bounded(35_000.0, "Professional", "purple"),
                Tier::bounded(50_000.0, "Premium", "pink"),
                Tier::open("Enterprise", "red"),
            ],
            8_500.0,
            100_000.0,
        )
        .unwrap()
    }

    #[test]
    fn value_below_first_bound_is_first_tier() {
        let t = budget_table();
        assert_eq!(t.classify(14_999.0).label, "Starter");
        assert_eq!(t.classify(8_500.0).label, "Starter");
    }

    #[test]
    fn value_on_bound_belongs_to_next_tier() {
        let t = budget_table();
        assert_eq!(t.classify(15_000.0).label, "Business");
        assert_eq!(t.classify(25_000.0).label, "Professional");
        assert_eq!(t.classify(35_000.0).label, "Premium");
        assert_eq!(t.classify(50_000.0).label, "Enterprise");
    }

    #[test]
    fn top_tier_is_open_ended() {
        let t = budget_table();
        let c = t.classify(99_999.0);
        assert_eq!(c.label, "Enterprise");
        assert_eq!(c.style_token, "red");
        assert_eq!(c.index, 4);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let t = budget_table();
        let low = t.classify(-5.0);
        assert_eq!(low.label, "Starter");
        assert_eq!(low.normalized_position, 0.0);

        let high = t.classify(1_000_000.0);
        assert_eq!(high.label, "Enterprise");
        assert_eq!(high.normalized_position, 1.0);
    }

    #[test]
    fn nan_is_treated_as_minimum() {
        let t = budget_table();
        let c = t.classify(f64::NAN);
        assert_eq!(c.index, 0);
        assert_eq!(c.normalized_position, 0.0);
    }

    #[test]
    fn normalized_position_is_linear() {
        let t = budget_table();
        let mid = (8_500.0 + 100_000.0) / 2.0;
        assert!((t.classify(mid).normalized_position - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tier_range_reports_bounds() {
        let t = budget_table();
        assert_eq!(t.tier_range(0), Some((8_500.0, Some(15_000.0))));
        assert_eq!(t.tier_range(4), Some((50_000.0, None)));
        assert_eq!(t.tier_range(5), None);
    }

    #[test]
    fn degenerate_range_rejected() {
        let tiers = vec![Tier::open("Only", "x")];
        assert_eq!(
            TierTable::new(tiers.clone(), 10.0, 10.0),
            Err(DomainError::DegenerateRange { min: 10.0, max: 10.0 })
        );
        assert!(TierTable::new(tiers.clone(), 10.0, 5.0).is_err());
        assert!(TierTable::new(tiers, f64::NAN, 5.0).is_err());
    }

    #[test]
    fn empty_table_rejected() {
        assert_eq!(TierTable::new(vec![], 0.0, 1.0), Err(DomainError::EmptyTable));
    }

    #[test]
    fn unsorted_bounds_rejected() {
        let err = TierTable::new(
            vec![
                Tier::bounded(20.0, "a", "a"),
                Tier::bounded(10.0, "b", "b"),
                Tier::open("c", "c"),
            ],
            0.0,
            100.0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsortedBounds {
                index: 1,
                previous: 20.0,
                bound: 10.0
            }
        );
    }

    #[test]
    fn duplicate_bounds_rejected() {
        let result = TierTable::new(
            vec![
                Tier::bounded(10.0, "a", "a"),
                Tier::bounded(10.0, "b", "b"),
                Tier::open("c", "c"),
            ],
            0.0,
            100.0,
        );
        assert!(matches!(result, Err(DomainError::UnsortedBounds { .. })));
    }

    #[test]
    fn top_tier_must_be_open() {
        let result = TierTable::new(vec![Tier::bounded(10.0, "a", "a")], 0.0, 100.0);
        assert_eq!(result, Err(DomainError::BoundedTopTier { bound: 10.0 }));
    }

    #[test]
    fn interior_tier_must_be_bounded() {
        let result = TierTable::new(vec![Tier::open("a", "a"), Tier::open("b", "b")], 0.0, 1.0);
        assert_eq!(result, Err(DomainError::UnboundedInteriorTier { index: 0 }));
    }

    #[test]
    fn infinite_bound_rejected() {
        let result = TierTable::new(
            vec![Tier::bounded(f64::INFINITY, "a", "a"), Tier::open("b", "b")],
            0.0,
            1.0,
        );
        assert_eq!(result, Err(DomainError::NonFiniteBound { index: 0 }));
    }

    #[test]
    fn free_normalized_position() {
        assert_eq!(normalized_position(5.0, 0.0, 10.0), Ok(0.5));
        assert_eq!(normalized_position(-5.0, 0.0, 10.0), Ok(0.0));
        assert_eq!(normalized_position(50.0, 0.0, 10.0), Ok(1.0));
        assert!(normalized_position(1.0, 3.0, 3.0).is_err());
    }

    #[test]
    fn free_classify_matches_method() {
        let t = budget_table();
        assert_eq!(classify(30_000.0, &t), t.classify(30_000.0));
    }
}
