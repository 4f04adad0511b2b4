//! Integration tests for tier classification and the navbar breakpoint.
//!
//! Tests:
//! 1. Pricing boundaries land in the upper tier
//! 2. Out-of-range and NaN inputs are clamped, never rejected
//! 3. Malformed tables fail at construction
//! 4. Breakpoint regimes around the threshold, including overscroll
//! 5. Budget slider view ties slider, tiers and formatting together

use folio_core::{
    classify, format_currency, interpolate, normalized_position, CurrencyCode, DomainError,
    Locale, Regime, ScrollBreakpoint, ScrollRange, Site, StyleBundle, Tier, TierTable,
};

// ──────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────

fn pricing_tiers() -> Vec<Tier> {
    vec![
        Tier::bounded(15_000.0, "Starter", "green"),
        Tier::bounded(25_000.0, "Business", "blue"),
        Tier::bounded(35_000.0, "Professional", "purple"),
        Tier::bounded(50_000.0, "Premium", "pink"),
        Tier::open("Enterprise", "red"),
    ]
}

fn pricing_table() -> TierTable {
    TierTable::new(pricing_tiers(), 8_500.0, 100_000.0).unwrap()
}

fn navbar() -> ScrollBreakpoint {
    ScrollBreakpoint::new(
        0.5,
        StyleBundle::navbar_expanded(),
        StyleBundle::navbar_collapsed(),
    )
    .unwrap()
}

// ──────────────────────────────────────────────
// Classification
// ──────────────────────────────────────────────

#[test]
fn boundary_values_belong_to_upper_tier() {
    let table = pricing_table();
    assert_eq!(classify(14_999.0, &table).label, "Starter");
    assert_eq!(classify(15_000.0, &table).label, "Business");
    assert_eq!(classify(24_999.0, &table).label, "Business");
    assert_eq!(classify(25_000.0, &table).label, "Professional");
    assert_eq!(classify(49_999.0, &table).label, "Premium");
    assert_eq!(classify(50_000.0, &table).label, "Enterprise");
    assert_eq!(classify(99_999.0, &table).label, "Enterprise");
}

#[test]
fn classification_carries_style_and_position() {
    let table = pricing_table();
    let c = classify(8_500.0, &table);
    assert_eq!(c.index, 0);
    assert_eq!(c.style_token, "green");
    assert_eq!(c.normalized_position, 0.0);

    let c = classify(100_000.0, &table);
    assert_eq!(c.index, 4);
    assert_eq!(c.style_token, "red");
    assert_eq!(c.normalized_position, 1.0);

    let mid = 8_500.0 + (100_000.0 - 8_500.0) / 2.0;
    assert!((classify(mid, &table).normalized_position - 0.5).abs() < 1e-12);
}

#[test]
fn out_of_range_values_are_clamped() {
    let table = pricing_table();
    assert_eq!(classify(-5.0, &table), classify(8_500.0, &table));
    assert_eq!(classify(1.0e12, &table), classify(100_000.0, &table));
    assert_eq!(classify(f64::INFINITY, &table).label, "Enterprise");
    assert_eq!(classify(f64::NEG_INFINITY, &table).label, "Starter");
    assert_eq!(classify(f64::NAN, &table), classify(8_500.0, &table));
}

#[test]
fn normalized_position_rejects_degenerate_range() {
    assert_eq!(normalized_position(5.0, 0.0, 10.0).unwrap(), 0.5);
    assert_eq!(normalized_position(-5.0, 0.0, 10.0).unwrap(), 0.0);
    assert_eq!(normalized_position(50.0, 0.0, 10.0).unwrap(), 1.0);
    assert!(matches!(
        normalized_position(5.0, 10.0, 10.0),
        Err(DomainError::DegenerateRange { .. })
    ));
    assert!(matches!(
        normalized_position(5.0, 10.0, 0.0),
        Err(DomainError::DegenerateRange { .. })
    ));
}

// ──────────────────────────────────────────────
// Construction failures
// ──────────────────────────────────────────────

#[test]
fn degenerate_range_rejected() {
    let err = TierTable::new(pricing_tiers(), 100.0, 100.0).unwrap_err();
    assert_eq!(err, DomainError::DegenerateRange { min: 100.0, max: 100.0 });
    assert!(TierTable::new(pricing_tiers(), 200.0, 100.0).is_err());
    assert!(TierTable::new(pricing_tiers(), f64::NAN, 100.0).is_err());
}

#[test]
fn unsorted_bounds_rejected() {
    let mut tiers = pricing_tiers();
    tiers.swap(1, 2);
    let err = TierTable::new(tiers, 8_500.0, 100_000.0).unwrap_err();
    assert!(matches!(err, DomainError::UnsortedBounds { index: 2, .. }), "{err}");
}

#[test]
fn duplicate_bound_rejected() {
    let tiers = vec![
        Tier::bounded(10.0, "a", "x"),
        Tier::bounded(10.0, "b", "x"),
        Tier::open("c", "x"),
    ];
    assert!(matches!(
        TierTable::new(tiers, 0.0, 20.0),
        Err(DomainError::UnsortedBounds { .. })
    ));
}

#[test]
fn empty_table_rejected() {
    assert_eq!(TierTable::new(vec![], 0.0, 1.0).unwrap_err(), DomainError::EmptyTable);
}

#[test]
fn open_tier_must_be_last() {
    let tiers = vec![Tier::open("a", "x"), Tier::open("b", "x")];
    assert!(matches!(
        TierTable::new(tiers, 0.0, 1.0),
        Err(DomainError::UnboundedInteriorTier { index: 0 })
    ));

    let tiers = vec![Tier::bounded(0.5, "a", "x"), Tier::bounded(0.9, "b", "x")];
    assert!(matches!(
        TierTable::new(tiers, 0.0, 1.0),
        Err(DomainError::BoundedTopTier { .. })
    ));
}

// ──────────────────────────────────────────────
// Breakpoint
// ──────────────────────────────────────────────

#[test]
fn threshold_is_exclusive_above() {
    let bp = navbar();
    assert_eq!(interpolate(0.49, &bp), bp.expanded());
    assert_eq!(interpolate(0.5, &bp), bp.expanded());
    assert_eq!(interpolate(0.51, &bp), bp.collapsed());
}

#[test]
fn overscroll_behaves_as_clamped() {
    let bp = navbar();
    assert_eq!(interpolate(-0.2, &bp), interpolate(0.0, &bp));
    assert_eq!(interpolate(1.3, &bp), interpolate(1.0, &bp));
    assert_eq!(interpolate(f64::NAN, &bp), bp.expanded());
}

#[test]
fn oscillation_has_no_hysteresis() {
    let bp = navbar();
    let regimes: Vec<Regime> = [0.49, 0.51, 0.49, 0.51, 0.5]
        .into_iter()
        .map(|p| bp.regime(p))
        .collect();
    assert_eq!(
        regimes,
        vec![
            Regime::Expanded,
            Regime::Collapsed,
            Regime::Expanded,
            Regime::Collapsed,
            Regime::Expanded
        ]
    );
}

#[test]
fn threshold_out_of_unit_interval_rejected() {
    for bad in [-0.1, 1.1, f64::NAN] {
        let result = ScrollBreakpoint::new(
            bad,
            StyleBundle::navbar_expanded(),
            StyleBundle::navbar_collapsed(),
        );
        assert!(matches!(result, Err(DomainError::InvalidThreshold(_))));
    }
}

#[test]
fn scroll_offset_drives_regime() {
    let bp = navbar();
    let range = ScrollRange::new(40.0, 200.0).unwrap();
    assert_eq!(bp.regime(range.progress(0.0)), Regime::Expanded);
    assert_eq!(bp.regime(range.progress(140.0)), Regime::Expanded);
    assert_eq!(bp.regime(range.progress(141.0)), Regime::Collapsed);
    assert_eq!(bp.regime(range.progress(10_000.0)), Regime::Collapsed);
}

// ──────────────────────────────────────────────
// Budget slider over the default site
// ──────────────────────────────────────────────

#[test]
fn default_site_budget_view() {
    let site = Site::default_site().unwrap();
    let config = site.budget.config();
    let mut state = config.initial_state();

    let view = site.budget.view(&state);
    assert_eq!(view.amount, 15_500);
    assert_eq!(view.formatted, "₹15,500");
    assert_eq!(view.classification.label, "Business");

    state.set(config, 1_000_000);
    let view = site.budget.view(&state);
    assert_eq!(view.classification.label, "Enterprise");
    assert!(view.fill <= 1.0);

    let chips = site.budget.chips(&state);
    assert_eq!(chips.len(), 5);
    assert_eq!(chips.iter().filter(|c| c.active).count(), 1);
    assert!(chips[4].active);
    assert_eq!(chips[0].range_label, "₹8.5K-15K");
    assert_eq!(chips[4].range_label, "₹50K+");
}

#[test]
fn currency_rounds_to_whole_units() {
    assert_eq!(format_currency(15_000.0, Locale::EnIn, CurrencyCode::Inr), "₹15,000");
    assert_eq!(format_currency(15_000.6, Locale::EnIn, CurrencyCode::Inr), "₹15,001");
    assert_eq!(format_currency(15_000.4, Locale::EnIn, CurrencyCode::Inr), "₹15,000");
    assert_eq!(format_currency(100_000.0, Locale::EnIn, CurrencyCode::Inr), "₹1,00,000");
    assert_eq!(format_currency(100_000.0, Locale::EnUs, CurrencyCode::Usd), "$100,000");
}

#[test]
fn budget_view_serializes_for_renderers() {
    let site = Site::default_site().unwrap();
    let state = site.budget.config().initial_state();
    let json = serde_json::to_value(site.budget.view(&state)).unwrap();
    assert_eq!(json["amount"], 15_500);
    assert_eq!(json["formatted"], "₹15,500");
    assert_eq!(json["classification"]["label"], "Business");
    assert_eq!(json["classification"]["style_token"], "blue");
}
