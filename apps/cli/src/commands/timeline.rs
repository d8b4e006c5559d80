use anyhow::Result;
use clap::Args;

use risk_engine::application::AssessmentService;
use risk_engine::domain::{TimelineSimulator, YearRange};

use super::ScenarioArgs;
use crate::core::config::{RiskConfig, TimelineConfig};
use crate::core::error::CliError;
use crate::ui::{self, chart, table, Icon, Theme};

const CHART_HEIGHT: usize = 10;

/// Timeline settings shared with `export`.
#[derive(Args, Debug, Clone)]
pub struct TimelineArgs {
    /// First simulated year
    #[arg(long)]
    pub start: Option<i32>,

    /// Last simulated year (inclusive)
    #[arg(long)]
    pub end: Option<i32>,

    /// Standard deviation of the yearly multiplicative noise
    #[arg(long)]
    pub noise: Option<f64>,

    /// Seed for reproducible noise (omit for a fresh draw every run)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TimelineArgs {
    /// Flags override the config file.
    pub fn simulator(&self, defaults: &TimelineConfig) -> Result<TimelineSimulator, CliError> {
        let start = self.start.unwrap_or(defaults.start_year);
        let end = self.end.unwrap_or(defaults.end_year);
        let noise = self.noise.unwrap_or(defaults.noise_std_dev);

        let range =
            YearRange::new(start, end).map_err(|e| CliError::InvalidInput(e.to_string()))?;
        TimelineSimulator::new(range, noise).map_err(|e| CliError::InvalidInput(e.to_string()))
    }
}

#[derive(Args, Debug)]
pub struct TimelineCommand {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    #[command(flatten)]
    pub timeline: TimelineArgs,
}

impl TimelineCommand {
    pub fn execute(self, config: &RiskConfig) -> Result<()> {
        let simulator = self.timeline.simulator(&config.timeline)?;
        let range = simulator.range();
        let service = AssessmentService::new(simulator);

        let report = service.assess_seeded(
            &self.scenario.preset,
            &self.scenario.overrides(),
            self.timeline.seed,
        );

        ui::heading(
            Icon::Chart,
            format!("Risk Evolution Over Time ({}–{})", range.start(), range.end()),
        );
        ui::println(Theme::muted(format!(
            "{} · baseline {:.2}% · noise σ={}",
            report.preset,
            report.risk,
            simulator.std_dev()
        )));
        ui::println(table::timeline(&report.timeline).to_string());
        ui::println(chart::line_chart(&report.timeline, CHART_HEIGHT));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: Option<i32>, end: Option<i32>, noise: Option<f64>) -> TimelineArgs {
        TimelineArgs {
            start,
            end,
            noise,
            seed: None,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let defaults = TimelineConfig::default();
        let sim = args(Some(2030), None, Some(0.1)).simulator(&defaults).unwrap();
        assert_eq!(sim.range().start(), 2030);
        assert_eq!(sim.range().end(), 2035);
        assert_eq!(sim.std_dev(), 0.1);
    }

    #[test]
    fn test_invalid_flags_are_input_errors() {
        let defaults = TimelineConfig::default();
        assert!(matches!(
            args(Some(2040), None, None).simulator(&defaults),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            args(None, None, Some(-1.0)).simulator(&defaults),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_huge_year_span_is_an_input_error() {
        let defaults = TimelineConfig::default();
        assert!(matches!(
            args(Some(-2_000_000_000), Some(2_000_000_000), None).simulator(&defaults),
            Err(CliError::InvalidInput(_))
        ));
    }
}
