use clap::Args;

use risk_engine::domain::catalog::CUSTOM;
use risk_engine::domain::IndicatorOverrides;

pub mod batch;
pub mod countries;
pub mod export;
pub mod presets;
pub mod score;
pub mod timeline;

/// Preset selection plus per-indicator overrides, shared by the
/// scenario-driven commands.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Scenario preset to start from (unknown names fall back to "Custom")
    #[arg(short, long, default_value = CUSTOM)]
    pub preset: String,

    /// Geopolitical Tension Index (100–150)
    #[arg(long)]
    pub gti: Option<f64>,

    /// Trade War Severity Index (0–1)
    #[arg(long)]
    pub twsi: Option<f64>,

    /// Military Build-up Rate (0.03–0.08)
    #[arg(long)]
    pub mbr: Option<f64>,

    /// Alliance Fragmentation Score (0–3)
    #[arg(long)]
    pub afs: Option<u32>,

    /// Energy Dependency Score (0–1)
    #[arg(long)]
    pub eds: Option<f64>,

    /// Economic Vulnerability Index (0–1)
    #[arg(long)]
    pub evi: Option<f64>,
}

impl ScenarioArgs {
    pub fn overrides(&self) -> IndicatorOverrides {
        IndicatorOverrides {
            gti: self.gti,
            twsi: self.twsi,
            mbr: self.mbr,
            afs: self.afs.map(f64::from),
            eds: self.eds,
            evi: self.evi,
        }
    }
}
