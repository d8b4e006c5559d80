//! Built-in scenario and country presets.
//!
//! Both catalogs are immutable tables. Lookups never fail: an unknown name
//! resolves to the catalog's fallback entry.

use crate::indicators::IndicatorSet;
use crate::model::Scorer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub indicators: IndicatorSet,
}

const fn preset(
    name: &'static str,
    gti: f64,
    twsi: f64,
    mbr: f64,
    afs: f64,
    eds: f64,
    evi: f64,
) -> Preset {
    Preset {
        name,
        indicators: IndicatorSet::new(gti, twsi, mbr, afs, eds, evi),
    }
}

/// Name of the free-form entry in the scenario selector.
pub const CUSTOM: &str = "Custom";

/// Used for "Custom" and for any unknown scenario name.
pub const DEFAULT_SCENARIO: IndicatorSet = IndicatorSet::new(120.0, 0.4, 0.05, 1.0, 0.7, 0.6);

pub const SCENARIOS: [Preset; 8] = [
    preset("Trade War Escalation", 130.0, 0.7, 0.07, 2.0, 0.8, 0.7),
    preset("Energy Crisis", 125.0, 0.4, 0.05, 1.0, 0.9, 0.8),
    preset("Cyber Conflict", 120.0, 0.5, 0.06, 2.0, 0.7, 0.6),
    preset("Calm Recovery", 110.0, 0.3, 0.04, 0.0, 0.6, 0.5),
    preset("Sanctions Spiral", 135.0, 0.8, 0.07, 2.0, 0.85, 0.75),
    preset("Alliance Breakdown", 140.0, 0.6, 0.07, 3.0, 0.8, 0.8),
    preset("Global Recovery", 105.0, 0.2, 0.03, 0.0, 0.5, 0.4),
    preset("Climate Shock Conflict", 135.0, 0.5, 0.06, 2.0, 0.95, 0.85),
];

/// Unknown country names resolve to this entry.
pub const FALLBACK_COUNTRY: &str = "United States";

pub const COUNTRIES: [Preset; 6] = [
    preset("United States", 130.0, 0.7, 0.07, 2.0, 0.6, 0.6),
    preset("China", 140.0, 0.8, 0.08, 2.0, 0.9, 0.7),
    preset("Russia", 135.0, 0.6, 0.08, 3.0, 0.85, 0.8),
    preset("European Union", 125.0, 0.5, 0.05, 1.0, 0.7, 0.6),
    preset("India", 120.0, 0.4, 0.06, 1.0, 0.8, 0.7),
    preset("Middle East", 130.0, 0.5, 0.07, 2.0, 0.9, 0.8),
];

/// Outcome of a lookup that remembers whether the fallback was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub indicators: IndicatorSet,
    pub recognized: bool,
}

fn find(table: &[Preset], name: &str) -> Option<IndicatorSet> {
    table.iter().find(|p| p.name == name).map(|p| p.indicators)
}

pub fn resolve_scenario(name: &str) -> Resolved {
    match find(&SCENARIOS, name) {
        Some(indicators) => Resolved {
            indicators,
            recognized: true,
        },
        None => Resolved {
            indicators: DEFAULT_SCENARIO,
            recognized: name == CUSTOM,
        },
    }
}

pub fn resolve_country(name: &str) -> Resolved {
    match find(&COUNTRIES, name) {
        Some(indicators) => Resolved {
            indicators,
            recognized: true,
        },
        None => Resolved {
            indicators: COUNTRIES[0].indicators,
            recognized: false,
        },
    }
}

/// Indicators for a named scenario, or [`DEFAULT_SCENARIO`] when unknown.
pub fn scenario_preset(name: &str) -> IndicatorSet {
    let resolved = resolve_scenario(name);
    if !resolved.recognized {
        tracing::warn!(scenario = name, "unknown scenario preset, using default");
    }
    resolved.indicators
}

/// Indicators for a named country, or the United States entry when unknown.
pub fn country_preset(name: &str) -> IndicatorSet {
    let resolved = resolve_country(name);
    if !resolved.recognized {
        tracing::warn!(country = name, fallback = FALLBACK_COUNTRY, "unknown country");
    }
    resolved.indicators
}

/// Selector order: "Custom" first, then the named scenarios.
pub fn scenario_names() -> Vec<&'static str> {
    std::iter::once(CUSTOM)
        .chain(SCENARIOS.iter().map(|p| p.name))
        .collect()
}

pub fn country_names() -> Vec<&'static str> {
    COUNTRIES.iter().map(|p| p.name).collect()
}

/// Risk of every country, in catalog order.
pub fn country_risks(scorer: &impl Scorer) -> Vec<(&'static str, f64)> {
    COUNTRIES
        .iter()
        .map(|p| (p.name, scorer.score(&p.indicators)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskModel;

    #[test]
    fn test_custom_maps_to_default() {
        let resolved = resolve_scenario(CUSTOM);
        assert!(resolved.recognized);
        assert_eq!(resolved.indicators, DEFAULT_SCENARIO);
    }

    #[test]
    fn test_unknown_scenario_is_flagged() {
        let resolved = resolve_scenario("Zombie Apocalypse");
        assert!(!resolved.recognized);
        assert_eq!(resolved.indicators, DEFAULT_SCENARIO);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(!resolve_country("china").recognized);
        assert_eq!(country_preset("china"), country_preset("United States"));
    }

    #[test]
    fn test_names_in_declaration_order() {
        let names = scenario_names();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Custom");
        assert_eq!(names[1], "Trade War Escalation");
        assert_eq!(names[8], "Climate Shock Conflict");
        assert_eq!(country_names()[5], "Middle East");
    }

    #[test]
    fn test_country_risks_follow_catalog() {
        let risks = country_risks(&RiskModel::standard());
        assert_eq!(risks.len(), COUNTRIES.len());
        assert_eq!(risks[0].0, "United States");
        // China: 1 + 7.0 + 0.08 + 0.0056 + 0.08 + 0.054 + 0.056
        assert!((risks[1].1 - 8.2756).abs() < 1e-9);
    }
}
