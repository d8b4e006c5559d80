use domain::catalog::{
    country_preset, country_risks, resolve_country, scenario_preset, COUNTRIES, DEFAULT_SCENARIO,
    SCENARIOS,
};
use domain::{score, IndicatorSet, RiskModel};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_atlantis_resolves_to_united_states() {
    let atlantis = country_preset("Atlantis");
    let us = country_preset("United States");

    assert_eq!(atlantis, us);
    assert_eq!(atlantis, IndicatorSet::new(130.0, 0.7, 0.07, 2.0, 0.6, 0.6));
    assert!(!resolve_country("Atlantis").recognized);
}

#[test]
fn test_unknown_scenario_uses_documented_default() {
    let fallback = scenario_preset("Not A Real Scenario");
    assert_eq!(fallback, IndicatorSet::new(120.0, 0.4, 0.05, 1.0, 0.7, 0.6));
    assert_eq!(fallback, DEFAULT_SCENARIO);
    assert_eq!(scenario_preset(""), DEFAULT_SCENARIO);
}

#[test]
fn test_scenario_values() {
    assert_eq!(
        scenario_preset("Sanctions Spiral"),
        IndicatorSet::new(135.0, 0.8, 0.07, 2.0, 0.85, 0.75)
    );
    assert_eq!(
        scenario_preset("Climate Shock Conflict"),
        IndicatorSet::new(135.0, 0.5, 0.06, 2.0, 0.95, 0.85)
    );
    assert_eq!(
        scenario_preset("Global Recovery"),
        IndicatorSet::new(105.0, 0.2, 0.03, 0.0, 0.5, 0.4)
    );
}

#[test]
fn test_every_catalog_entry_resolves_to_itself() {
    for preset in SCENARIOS.iter() {
        assert_eq!(scenario_preset(preset.name), preset.indicators, "{}", preset.name);
    }
    for preset in COUNTRIES.iter() {
        assert_eq!(country_preset(preset.name), preset.indicators, "{}", preset.name);
    }
}

#[test]
fn test_country_ranking() {
    let risks = country_risks(&RiskModel::standard());
    let (top, _) = risks
        .iter()
        .cloned()
        .fold(("", f64::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });
    assert_eq!(top, "China");

    let us = risks.iter().find(|(name, _)| *name == "United States").unwrap();
    assert!((us.1 - score(&country_preset("United States"))).abs() < 1e-12);
}

proptest! {
    #[test]
    fn prop_lookup_is_deterministic(name in ".{0,24}") {
        prop_assert_eq!(country_preset(&name), country_preset(&name));
        prop_assert_eq!(scenario_preset(&name), scenario_preset(&name));
    }

    #[test]
    fn prop_unknown_countries_fall_back(name in "[a-z]{1,12}") {
        // catalog names are capitalised, so lower-case names never match
        prop_assert_eq!(country_preset(&name), COUNTRIES[0].indicators);
    }
}
