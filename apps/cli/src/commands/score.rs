use anyhow::Result;
use clap::Args;

use risk_engine::application::AssessmentService;
use risk_engine::domain::Scorer;

use super::ScenarioArgs;
use crate::ui::{self, table, Icon, RiskBand, Theme};

#[derive(Args, Debug)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

impl ScoreCommand {
    pub fn execute(self) -> Result<()> {
        let service = AssessmentService::default();
        // unknown presets are logged by `resolve`
        let (indicators, _) = service.resolve(&self.scenario.preset, &self.scenario.overrides());
        let risk = service.scorer().score(&indicators);

        ui::heading(Icon::Globe, format!("Scenario: {}", self.scenario.preset));
        ui::println(table::indicators(&indicators).to_string());
        ui::println(format!(
            "\n{} {} {}",
            Theme::bold("Estimated Conflict Risk:"),
            Theme::risk(risk),
            Theme::muted(RiskBand::of(risk))
        ));
        Ok(())
    }
}
