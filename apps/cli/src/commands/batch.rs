use anyhow::Result;
use clap::Args;

use risk_engine::domain::{BatchSimulator, BatchSummary, RiskModel};

use crate::core::config::RiskConfig;
use crate::ui::{self, table, Icon, Theme};

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// Number of random scenarios to score
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Random seed; the same seed reproduces the same batch
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many samples to print
    #[arg(long)]
    pub show: Option<usize>,
}

impl BatchCommand {
    pub fn execute(self, config: &RiskConfig) -> Result<()> {
        let count = self.count.unwrap_or(config.batch.count);
        let seed = self.seed.unwrap_or(config.batch.seed);
        let show = self.show.unwrap_or(config.batch.show);

        let samples = BatchSimulator::new(count).run_seeded(&RiskModel::standard(), seed);

        ui::heading(Icon::Dice, format!("Batch simulation ({} scenarios)", count));
        ui::println(Theme::muted(format!("seed {}", seed)));

        let shown = &samples[..show.min(samples.len())];
        if !shown.is_empty() {
            ui::println(table::batch(shown).to_string());
        }

        if let Some(summary) = BatchSummary::from_samples(&samples) {
            ui::println(table::batch_summary(&summary).to_string());
        }
        Ok(())
    }
}
