use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use domain::catalog;
use domain::ports::report_sink::ReportSink;
use domain::{
    IndicatorOverrides, IndicatorSet, RiskModel, Scorer, TimelinePoint, TimelineSimulator,
};

/// Everything the dashboard shows for one selected scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub preset: String,
    /// False when the preset name was unknown and the default was used.
    pub recognized: bool,
    pub indicators: IndicatorSet,
    pub risk: f64,
    pub countries: Vec<(&'static str, f64)>,
    pub timeline: Vec<TimelinePoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub scenario: PathBuf,
    pub timeline: PathBuf,
}

/// Wires catalog lookup, scoring and the timeline together.
pub struct AssessmentService<S = RiskModel> {
    scorer: S,
    timeline: TimelineSimulator,
}

impl AssessmentService<RiskModel> {
    pub fn new(timeline: TimelineSimulator) -> Self {
        Self::with_scorer(RiskModel::standard(), timeline)
    }
}

impl Default for AssessmentService<RiskModel> {
    fn default() -> Self {
        Self::new(TimelineSimulator::default())
    }
}

impl<S: Scorer> AssessmentService<S> {
    pub fn with_scorer(scorer: S, timeline: TimelineSimulator) -> Self {
        Self { scorer, timeline }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Preset values with any overrides applied on top.
    pub fn resolve(&self, preset: &str, overrides: &IndicatorOverrides) -> (IndicatorSet, bool) {
        let resolved = catalog::resolve_scenario(preset);
        if !resolved.recognized {
            tracing::warn!(preset, "unknown scenario preset, falling back to default values");
        }

        let indicators = overrides.apply_to(resolved.indicators);
        for (indicator, value) in indicators.out_of_range() {
            let range = indicator.range();
            tracing::warn!(
                indicator = indicator.code(),
                value,
                min = range.min,
                max = range.max,
                "value outside nominal range"
            );
        }
        (indicators, resolved.recognized)
    }

    pub fn assess<R: Rng + ?Sized>(
        &self,
        preset: &str,
        overrides: &IndicatorOverrides,
        rng: &mut R,
    ) -> ScenarioReport {
        let (indicators, recognized) = self.resolve(preset, overrides);
        let risk = self.scorer.score(&indicators);
        tracing::debug!(preset, %indicators, risk, "scenario scored");

        ScenarioReport {
            preset: preset.to_string(),
            recognized,
            indicators,
            risk,
            countries: catalog::country_risks(&self.scorer),
            timeline: self.timeline.simulate(&indicators, &self.scorer, rng),
        }
    }

    /// Like [`assess`](Self::assess), seeding the timeline noise when a seed is given.
    pub fn assess_seeded(
        &self,
        preset: &str,
        overrides: &IndicatorOverrides,
        seed: Option<u64>,
    ) -> ScenarioReport {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.assess(preset, overrides, &mut rng)
    }

    pub fn export(&self, report: &ScenarioReport, sink: &impl ReportSink) -> Result<ExportedFiles> {
        let scenario = sink
            .write_scenario(&report.indicators, report.risk)
            .context("Failed to export scenario")?;
        let timeline = sink
            .write_timeline(&report.timeline)
            .context("Failed to export timeline")?;

        Ok(ExportedFiles { scenario, timeline })
    }
}
