use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use risk_engine::application::AssessmentService;
use risk_engine::infrastructure::CsvReportSink;

use super::timeline::TimelineArgs;
use super::ScenarioArgs;
use crate::core::config::RiskConfig;
use crate::ui::{Icon, Theme};

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    #[command(flatten)]
    pub timeline: TimelineArgs,

    /// Directory for the exported files
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

impl ExportCommand {
    pub fn execute(self, config: &RiskConfig) -> Result<()> {
        cliclack::intro(console::style("Conflict Risk Export").bold())?;

        let simulator = self.timeline.simulator(&config.timeline)?;
        let service = AssessmentService::new(simulator);
        let report = service.assess_seeded(
            &self.scenario.preset,
            &self.scenario.overrides(),
            self.timeline.seed,
        );

        cliclack::log::info(format!(
            "{} · Estimated Conflict Risk {}",
            report.preset,
            Theme::risk(report.risk)
        ))?;

        let out_dir = self.out_dir.unwrap_or_else(|| config.export.out_dir.clone());
        let sink = CsvReportSink::new(&out_dir);

        match service.export(&report, &sink) {
            Ok(files) => {
                cliclack::log::success(format!(
                    "{} {}\n{} {}",
                    Icon::File,
                    Theme::muted(files.scenario.display()),
                    Icon::File,
                    Theme::muted(files.timeline.display())
                ))?;
                cliclack::outro(format!("{} Scenario and timeline exported.", Icon::Check))?;
                Ok(())
            }
            Err(e) => {
                cliclack::outro_cancel("Nothing else was changed.")?;
                Err(e)
            }
        }
    }
}
