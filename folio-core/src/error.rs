//! Configuration invariant errors shared by the tier, slider, scroll and
//! service modules.
//!
//! Every variant describes a configuration defect. They are raised when a
//! table, slider or breakpoint is constructed, never per interaction, so the
//! caller can fail fast at startup.

/// A configuration value violates a construction-time invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("degenerate range: max ({max}) must be greater than min ({min})")]
    DegenerateRange { min: f64, max: f64 },

    #[error("tier table is empty")]
    EmptyTable,

    #[error("tier {index} bound {bound} is not greater than previous bound {previous}")]
    UnsortedBounds {
        index: usize,
        previous: f64,
        bound: f64,
    },

    #[error("tier {index} bound is not finite")]
    NonFiniteBound { index: usize },

    #[error("tier {index} has no upper bound but is not the last tier")]
    UnboundedInteriorTier { index: usize },

    #[error("last tier must be open-ended, found upper bound {bound}")]
    BoundedTopTier { bound: f64 },

    #[error("scroll threshold {0} must be a finite value in [0, 1]")]
    InvalidThreshold(f64),

    #[error("slider step {0} must be positive")]
    InvalidStep(i64),

    #[error("invalid service '{id}': {reason}")]
    InvalidService { id: String, reason: String },
}
