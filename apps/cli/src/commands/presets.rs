use anyhow::Result;
use clap::Args;

use risk_engine::domain::catalog::{self, COUNTRIES};
use risk_engine::domain::{score, IndicatorSet};

use crate::ui::{self, table, Icon};

#[derive(Args, Debug)]
pub struct PresetsCommand {
    /// Only list scenario presets
    #[arg(long, conflicts_with = "countries")]
    pub scenarios: bool,

    /// Only list country profiles
    #[arg(long)]
    pub countries: bool,
}

impl PresetsCommand {
    pub fn execute(self) -> Result<()> {
        if !self.countries {
            let rows: Vec<(&str, IndicatorSet, f64)> = catalog::scenario_names()
                .into_iter()
                .map(|name| {
                    let set = catalog::scenario_preset(name);
                    (name, set, score(&set))
                })
                .collect();
            ui::heading(Icon::Globe, "Scenario presets");
            ui::println(table::presets(&rows).to_string());
        }

        if !self.scenarios {
            let rows: Vec<(&str, IndicatorSet, f64)> = COUNTRIES
                .iter()
                .map(|p| (p.name, p.indicators, score(&p.indicators)))
                .collect();
            ui::heading(Icon::Globe, "Country profiles");
            ui::println(table::presets(&rows).to_string());
        }
        Ok(())
    }
}
