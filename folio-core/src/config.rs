//! Site configuration - TOML on disk, validated into runtime types.
//!
//! `SiteConfig` is the serializable shape; `SiteConfig::build` checks every
//! invariant once and returns a `Site` holding only validated values.
//! Budget ranges differ between deployments (rupees vs dollars, different
//! floors), so nothing here is hard-wired beyond the `Default`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::{CurrencyCode, CurrencyError, Locale};
use crate::error::DomainError;
use crate::form::SubmissionSettings;
use crate::scroll::{ScrollBreakpoint, ScrollRange, StyleBundle};
use crate::services::{Service, ServiceCatalog};
use crate::slider::{BudgetSlider, SliderConfig};
use crate::tier::Tier;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid budget settings: {0}")]
    Domain(#[from] DomainError),
    #[error("invalid currency settings: {0}")]
    Currency(#[from] CurrencyError),
}

/// `[budget]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
    pub locale: Locale,
    pub currency: CurrencyCode,
    pub tiers: Vec<Tier>,
}

/// `[navbar.trigger]` section, in pixels of page scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub start: f64,
    pub length: f64,
}

/// `[navbar]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarConfig {
    pub threshold: f64,
    pub trigger: TriggerConfig,
    pub expanded: StyleBundle,
    pub collapsed: StyleBundle,
}

/// Whole-site configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub budget: BudgetConfig,
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub submission: SubmissionSettings,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub budget: BudgetSlider,
    pub navbar: ScrollBreakpoint,
    pub trigger: ScrollRange,
    pub services: ServiceCatalog,
    pub submission: SubmissionSettings,
}

impl SiteConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded site config");
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate every section and build the runtime types.
    pub fn build(&self) -> Result<Site, ConfigError> {
        let b = &self.budget;
        let slider = SliderConfig::new(b.min, b.max, b.step, b.default)?;
        let budget = BudgetSlider::new(slider, b.tiers.clone(), b.locale, b.currency)?;

        let n = &self.navbar;
        let navbar = ScrollBreakpoint::new(n.threshold, n.expanded.clone(), n.collapsed.clone())?;
        let trigger = ScrollRange::new(n.trigger.start, n.trigger.length)?;

        let services = ServiceCatalog::new(self.services.clone())?;

        debug!(
            tiers = b.tiers.len(),
            services = services.len(),
            threshold = n.threshold,
            "site config validated"
        );

        Ok(Site {
            budget,
            navbar,
            trigger,
            services,
            submission: self.submission.clone(),
        })
    }
}

impl Default for SiteConfig {
    /// Rupee pricing: ₹8,500 to ₹1,00,000+ in ₹1,000 steps.
    fn default() -> Self {
        Self {
            budget: BudgetConfig {
                min: 8_500,
                max: 100_000,
                step: 1_000,
                default: 15_000,
                locale: Locale::EnIn,
                currency: CurrencyCode::Inr,
                tiers: vec![
                    Tier::bounded(15_000.0, "Starter", "green"),
                    Tier::bounded(25_000.0, "Business", "blue"),
                    Tier::bounded(35_000.0, "Professional", "purple"),
                    Tier::bounded(50_000.0, "Premium", "pink"),
                    Tier::open("Enterprise", "red"),
                ],
            },
            navbar: NavbarConfig {
                threshold: 0.5,
                trigger: TriggerConfig {
                    start: 40.0,
                    length: 200.0,
                },
                expanded: StyleBundle::navbar_expanded(),
                collapsed: StyleBundle::navbar_collapsed(),
            },
            services: default_services(),
            submission: SubmissionSettings::default(),
        }
    }
}

fn default_services() -> Vec<Service> {
    [
        ("website", "Website Development", (2_000, 10_000)),
        ("ecommerce", "E-commerce Platform", (5_000, 25_000)),
        ("app", "Mobile App", (8_000, 30_000)),
        ("design", "UI/UX Design", (1_500, 8_000)),
        ("consulting", "Consulting", (500, 3_000)),
    ]
    .into_iter()
    .map(|(id, label, suggested_budget)| Service {
        id: id.to_string(),
        label: label.to_string(),
        suggested_budget,
    })
    .collect()
}

impl Site {
    /// Validated default site.
    pub fn default_site() -> Result<Self, ConfigError> {
        SiteConfig::default().build()
    }
}
