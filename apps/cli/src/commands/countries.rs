use anyhow::Result;
use clap::Args;

use risk_engine::domain::catalog::{self, FALLBACK_COUNTRY};
use risk_engine::domain::{RiskModel, Scorer};

use crate::ui::{self, chart, table, Icon};

const BAR_WIDTH: usize = 40;

#[derive(Args, Debug)]
pub struct CountriesCommand {
    /// Countries to compare (defaults to every profile)
    pub names: Vec<String>,
}

impl CountriesCommand {
    pub fn execute(self) -> Result<()> {
        let rows = country_rows(&self.names, &RiskModel::standard());
        let rows: Vec<(&str, f64)> = rows.iter().map(|(n, r)| (n.as_str(), *r)).collect();

        ui::heading(Icon::Globe, "Country-by-Country Risk Profiles");
        ui::println(table::country_risks(&rows).to_string());
        ui::heading(Icon::Chart, "Country Risk Comparison");
        ui::println(chart::bar_chart(&rows, BAR_WIDTH));
        Ok(())
    }
}

/// Risk per requested country, or per profile when none are named.
fn country_rows<S: Scorer>(names: &[String], scorer: &S) -> Vec<(String, f64)> {
    if names.is_empty() {
        return catalog::country_risks(scorer)
            .into_iter()
            .map(|(name, risk)| (name.to_string(), risk))
            .collect();
    }

    names
        .iter()
        .map(|name| {
            let resolved = catalog::resolve_country(name);
            if !resolved.recognized {
                tracing::warn!(country = %name, fallback = FALLBACK_COUNTRY, "unknown country");
            }
            (name.clone(), scorer.score(&resolved.indicators))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_profiles_when_no_names() {
        let model = RiskModel::standard();
        let rows = country_rows(&[], &model);
        assert_eq!(rows.len(), catalog::country_names().len());
        assert_eq!(rows[0].0, "United States");
    }

    #[test]
    fn test_unknown_country_scores_as_fallback() {
        let model = RiskModel::standard();
        let rows = country_rows(&["Atlantis".to_string()], &model);
        let fallback = model.score(&catalog::country_preset(FALLBACK_COUNTRY));
        assert_eq!(rows, vec![("Atlantis".to_string(), fallback)]);
    }
}
