//! Folio CLI - inspect the site's pricing tiers and navbar, format amounts,
//! and run a contact submission end to end.
//!
//! Commands:
//! - `classify` - tier, style token and fill for a budget amount
//! - `tiers` - the configured tier table with compact ranges
//! - `navbar` - regime and style bundle for a scroll progress or offset
//! - `format` - one-off currency formatting
//! - `submit` - validate a contact form and send it through the simulated service
//! - `config` - print the effective configuration as TOML

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::scroll::clamp_progress;
use folio_core::{
    format_currency, interpolate, ContactForm, CurrencyCode, Length, Locale, Regime, Site,
    SiteConfig, StyleBundle,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio CLI - pricing tiers, navbar breakpoints and contact submissions"
)]
struct Cli {
    /// Site configuration TOML. Defaults to the built-in rupee pricing.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a budget amount into its pricing tier.
    Classify {
        /// Amount in whole currency units. Out-of-range values are clamped.
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the configured pricing tiers.
    Tiers,
    /// Show which navbar style applies at a scroll position.
    Navbar {
        /// Scroll progress in [0, 1]; values outside are clamped.
        #[arg(
            allow_negative_numbers = true,
            required_unless_present = "offset",
            conflicts_with = "offset"
        )]
        progress: Option<f64>,

        /// Page scroll offset in pixels, converted through the trigger range.
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<f64>,

        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Format an amount as whole-unit currency.
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Locale tag (en-IN, en-US, en-GB, de-DE, fr-FR). Defaults to the config's.
        #[arg(long)]
        locale: Option<String>,

        /// Currency code (INR, USD, EUR, GBP). Defaults to the config's.
        #[arg(long)]
        currency: Option<String>,
    },
    /// Validate a contact message and send it through the simulated service.
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Service id; pre-fills the suggested budget.
        #[arg(long)]
        service: Option<String>,

        /// Budget amount; snapped to the slider step.
        #[arg(long)]
        budget: Option<i64>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };
    let site = config.build().context("site configuration is invalid")?;
    debug!(config = ?cli.config, "site ready");

    match cli.command {
        Commands::Classify { value, json } => run_classify(&site, value, json),
        Commands::Tiers => {
            run_tiers(&site);
            Ok(())
        }
        Commands::Navbar {
            progress,
            offset,
            json,
        } => run_navbar(&site, progress, offset, json),
        Commands::Format {
            amount,
            locale,
            currency,
        } => run_format(&site, amount, locale.as_deref(), currency.as_deref()),
        Commands::Submit {
            name,
            email,
            message,
            service,
            budget,
        } => run_submit(&site, name, email, message, service, budget),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_classify(site: &Site, value: f64, json: bool) -> Result<()> {
    let table = site.budget.tiers();
    let classification = table.classify(value);

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    let clamped = table.clamp(value);
    println!("Amount:   {}", site.budget.format(clamped));
    if clamped != value {
        println!("          (clamped from {value})");
    }
    println!("Tier:     {} ({})", classification.label, classification.style_token);
    println!(
        "Fill:     {:.1}%",
        classification.normalized_position * 100.0
    );
    Ok(())
}

fn run_tiers(site: &Site) {
    let budget = &site.budget;
    let (low, high) = budget.range_labels();
    let state = budget.config().initial_state();

    println!("Range: {low} to {high} (step {})", budget.config().step());
    println!();
    println!("{:<3} {:<16} {:<12} {:<10}", "#", "Tier", "Range", "Style");
    println!("{}", "-".repeat(44));
    for (i, chip) in budget.chips(&state).iter().enumerate() {
        let marker = if chip.active { " *" } else { "" };
        println!(
            "{:<3} {:<16} {:<12} {:<10}{marker}",
            i, chip.label, chip.range_label, chip.style_token
        );
    }
    println!();
    println!("* default budget {}", budget.format(state.value() as f64));
}

fn run_navbar(site: &Site, progress: Option<f64>, offset: Option<f64>, json: bool) -> Result<()> {
    let progress = match (progress, offset) {
        (Some(p), None) => clamp_progress(p),
        (None, Some(px)) => site.trigger.progress(px),
        _ => bail!("give either a progress value or --offset"),
    };

    let regime = site.navbar.regime(progress);
    let style = interpolate(progress, &site.navbar);

    if json {
        let out = serde_json::json!({
            "progress": progress,
            "threshold": site.navbar.threshold(),
            "regime": regime,
            "style": style,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let regime_name = match regime {
        Regime::Expanded => "expanded",
        Regime::Collapsed => "collapsed",
    };
    println!(
        "Progress: {progress:.3} (threshold {})",
        site.navbar.threshold()
    );
    println!("Regime:   {regime_name}");
    print_style(style);
    Ok(())
}

fn print_style(style: &StyleBundle) {
    let width = match style.width {
        Length::Px(px) => format!("{px}px"),
        Length::Vw(vw) => format!("{vw}vw"),
    };
    println!("Width:    {width} (max {}px)", style.max_width_px);
    println!("Top:      {}rem", style.top_rem);
    println!("Radius:   {}rem", style.border_radius_rem);
    println!(
        "Alpha:    background {:.2}, shadow {:.2}",
        style.background_alpha, style.shadow_alpha
    );
    println!("Tween:    {}ms {}", style.transition_ms, style.easing);
}

fn run_format(site: &Site, amount: f64, locale: Option<&str>, currency: Option<&str>) -> Result<()> {
    let locale: Locale = match locale {
        Some(tag) => tag.parse()?,
        None => site.budget.locale(),
    };
    let currency: CurrencyCode = match currency {
        Some(code) => code.parse()?,
        None => site.budget.currency(),
    };
    println!("{}", format_currency(amount, locale, currency));
    Ok(())
}

fn run_submit(
    site: &Site,
    name: String,
    email: String,
    message: String,
    service: Option<String>,
    budget: Option<i64>,
) -> Result<()> {
    let slider = site.budget.config();
    let mut form = ContactForm::new(slider);
    form.name = name;
    form.email = email;
    form.message = message;

    if let Some(id) = service.as_deref() {
        if !form.select_service(id, &site.services, slider) {
            let known: Vec<&str> = site.services.services().iter().map(|s| s.id.as_str()).collect();
            bail!("unknown service '{id}'. Valid: {}", known.join(", "));
        }
    }
    if let Some(amount) = budget {
        form.set_budget(slider, amount);
    }

    let view = site.budget.view(form.budget());
    println!(
        "Budget:   {} ({})",
        view.formatted, view.classification.label
    );
    println!("Tone:     {}", form.tone().icon());
    println!("Sending…");

    let submission = site.submission.simulated_service();
    form.submit_with(&submission)?;

    let toast = site.submission.success_toast();
    println!();
    println!("{}", toast.title);
    println!("{}", toast.description);
    Ok(())
}
