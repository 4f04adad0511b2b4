//! Scroll-progress breakpoint for the fixed navbar.
//!
//! Progress at or below the threshold selects the expanded style, above it
//! the collapsed style. This is a hard switch with no hysteresis and no
//! memory of earlier calls; the visual tween between the two bundles belongs
//! to the renderer, driven by `transition_ms` and `easing`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::DomainError;

/// A horizontal length as the renderer understands it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the viewport width.
    Vw(f32),
}

impl Length {
    /// Resolve against a viewport width in the same unit as `Px`.
    pub fn resolve(self, viewport_width: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Vw(pct) => viewport_width * pct / 100.0,
        }
    }
}

/// Visual parameters for one navbar regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleBundle {
    pub width: Length,
    pub max_width_px: f32,
    pub top_rem: f32,
    pub border_radius_rem: f32,
    /// Background white overlay alpha, 0..1.
    pub background_alpha: f32,
    /// Drop-shadow alpha, 0..1.
    pub shadow_alpha: f32,
    pub transition_ms: u32,
    pub easing: String,
}

impl StyleBundle {
    /// Wide, slightly rounded bar shown over the hero section.
    pub fn navbar_expanded() -> Self {
        Self {
            width: Length::Vw(90.0),
            max_width_px: 420.0,
            top_rem: 2.0,
            border_radius_rem: 0.75,
            background_alpha: 0.18,
            shadow_alpha: 0.12,
            transition_ms: 500,
            easing: "power2.out".to_string(),
        }
    }

    /// Compact pill once the hero has scrolled away.
    pub fn navbar_collapsed() -> Self {
        Self {
            width: Length::Px(320.0),
            max_width_px: 320.0,
            top_rem: 2.0,
            border_radius_rem: 2.5,
            background_alpha: 0.28,
            shadow_alpha: 0.18,
            transition_ms: 500,
            easing: "power2.out".to_string(),
        }
    }

    /// Effective width: `width` resolved against the viewport, capped at
    /// `max_width_px`.
    pub fn effective_width(&self, viewport_width: f32) -> f32 {
        self.width.resolve(viewport_width).min(self.max_width_px)
    }
}

/// Which of the two style bundles applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Expanded,
    Collapsed,
}

/// A single threshold splitting expanded from collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBreakpoint {
    threshold: f64,
    expanded: StyleBundle,
    collapsed: StyleBundle,
}

impl ScrollBreakpoint {
    pub fn new(
        threshold: f64,
        expanded: StyleBundle,
        collapsed: StyleBundle,
    ) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(DomainError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            expanded,
            collapsed,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn expanded(&self) -> &StyleBundle {
        &self.expanded
    }

    pub fn collapsed(&self) -> &StyleBundle {
        &self.collapsed
    }

    pub fn regime(&self, progress: f64) -> Regime {
        if clamp_progress(progress) > self.threshold {
            Regime::Collapsed
        } else {
            Regime::Expanded
        }
    }

    pub fn style(&self, regime: Regime) -> &StyleBundle {
        match regime {
            Regime::Expanded => &self.expanded,
            Regime::Collapsed => &self.collapsed,
        }
    }

    pub fn interpolate(&self, progress: f64) -> &StyleBundle {
        self.style(self.regime(progress))
    }
}

/// Style bundle for `progress`. Same input, same reference.
pub fn interpolate(progress: f64, breakpoint: &ScrollBreakpoint) -> &StyleBundle {
    breakpoint.interpolate(progress)
}

/// Clamp a reported progress into `[0, 1]`. NaN counts as 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    let clamped = progress.clamp(0.0, 1.0);
    if clamped != progress {
        trace!(progress, clamped, "scroll progress clamped");
    }
    clamped
}

/// Scroll window over which progress runs from 0 to 1.
///
/// `start` is the scroll offset where the trigger begins (e.g. hero bottom
/// minus the navbar's top margin) and `length` the distance to full progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRange {
    start: f64,
    length: f64,
}

impl ScrollRange {
    pub fn new(start: f64, length: f64) -> Result<Self, DomainError> {
        if !(start.is_finite() && length.is_finite() && length > 0.0) {
            return Err(DomainError::DegenerateRange {
                min: start,
                max: start + length,
            });
        }
        Ok(Self { start, length })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Progress for a scroll offset, clamped to `[0, 1]`.
    pub fn progress(&self, offset: f64) -> f64 {
        clamp_progress((offset - self.start) / self.length)
    }
}
