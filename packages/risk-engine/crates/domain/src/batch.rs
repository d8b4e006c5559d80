//! Standalone batch mode: score many independently sampled scenarios.
//!
//! Indicators are drawn from broad, uncorrelated ranges. Nothing here touches
//! the preset catalogs or the timeline.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RiskError;
use crate::indicators::IndicatorSet;
use crate::model::Scorer;

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_SEED: u64 = 42;

/// Half-open real interval `[min, max)` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, indicator: &'static str) -> Result<(), RiskError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(RiskError::InvalidRange {
                indicator,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRanges {
    pub gti: UniformRange,
    pub twsi: UniformRange,
    pub mbr: UniformRange,
    /// Inclusive integer bounds.
    pub afs: (u32, u32),
    pub eds: UniformRange,
    pub evi: UniformRange,
}

impl Default for SamplingRanges {
    fn default() -> Self {
        Self {
            gti: UniformRange::new(100.0, 150.0),
            twsi: UniformRange::new(0.2, 0.7),
            mbr: UniformRange::new(0.03, 0.08),
            afs: (0, 3),
            eds: UniformRange::new(0.5, 0.9),
            evi: UniformRange::new(0.4, 0.8),
        }
    }
}

impl SamplingRanges {
    pub fn validate(&self) -> Result<(), RiskError> {
        self.gti.validate("GTI")?;
        self.twsi.validate("TWSI")?;
        self.mbr.validate("MBR")?;
        if self.afs.0 > self.afs.1 {
            return Err(RiskError::InvalidRange {
                indicator: "AFS",
                min: self.afs.0 as f64,
                max: self.afs.1 as f64,
            });
        }
        self.eds.validate("EDS")?;
        self.evi.validate("EVI")
    }

    /// One draw per indicator, in GTI, TWSI, MBR, AFS, EDS, EVI order.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> IndicatorSet {
        let gti = self.gti.sample(rng);
        let twsi = self.twsi.sample(rng);
        let mbr = self.mbr.sample(rng);
        let afs = rng.gen_range(self.afs.0..=self.afs.1) as f64;
        let eds = self.eds.sample(rng);
        let evi = self.evi.sample(rng);
        IndicatorSet::new(gti, twsi, mbr, afs, eds, evi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSample {
    /// 1-based position in the batch.
    pub index: usize,
    pub indicators: IndicatorSet,
    pub risk: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSimulator {
    count: usize,
    ranges: SamplingRanges,
}

impl BatchSimulator {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ranges: SamplingRanges::default(),
        }
    }

    pub fn with_ranges(count: usize, ranges: SamplingRanges) -> Result<Self, RiskError> {
        ranges.validate()?;
        Ok(Self { count, ranges })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn ranges(&self) -> &SamplingRanges {
        &self.ranges
    }

    pub fn run<S, R>(&self, scorer: &S, rng: &mut R) -> Vec<BatchSample>
    where
        S: Scorer + ?Sized,
        R: Rng + ?Sized,
    {
        (1..=self.count)
            .map(|index| {
                let indicators = self.ranges.sample(rng);
                BatchSample {
                    index,
                    indicators,
                    risk: scorer.score(&indicators),
                }
            })
            .collect()
    }

    /// Reproducible run: the same seed always yields the same samples.
    pub fn run_seeded<S>(&self, scorer: &S, seed: u64) -> Vec<BatchSample>
    where
        S: Scorer + ?Sized,
    {
        tracing::debug!(count = self.count, seed, "running seeded batch");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run(scorer, &mut rng)
    }
}

impl Default for BatchSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

/// Distribution of risk across a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl BatchSummary {
    /// `None` for an empty batch.
    pub fn from_samples(samples: &[BatchSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let (min, max, sum) = samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), s| (min.min(s.risk), max.max(s.risk), sum + s.risk),
        );
        let mean = sum / n;
        let variance = samples.iter().map(|s| (s.risk - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            count: samples.len(),
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}
