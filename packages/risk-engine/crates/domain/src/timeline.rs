use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::RiskError;
use crate::indicators::IndicatorSet;
use crate::model::Scorer;

pub const DEFAULT_START_YEAR: i32 = 2025;
pub const DEFAULT_END_YEAR: i32 = 2035;
pub const DEFAULT_NOISE_STD_DEV: f64 = 0.02;
/// Longest timeline a single run will simulate.
pub const MAX_TIMELINE_YEARS: usize = 1000;

/// Contiguous, inclusive range of simulated years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, RiskError> {
        if start > end {
            return Err(RiskError::InvalidYearRange { start, end });
        }
        if span(start, end) > MAX_TIMELINE_YEARS as u64 {
            return Err(RiskError::YearRangeTooLong {
                start,
                end,
                max: MAX_TIMELINE_YEARS,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Number of simulated years; never zero.
    pub fn year_count(&self) -> usize {
        // bounded by MAX_TIMELINE_YEARS
        span(self.start, self.end) as usize
    }
}

fn span(start: i32, end: i32) -> u64 {
    u64::from(end.abs_diff(start)) + 1
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePoint {
    pub year: i32,
    pub risk: f64,
}

/// Year-by-year drift around a fixed baseline.
///
/// Every year each base indicator is multiplied by its own factor drawn from
/// `Normal(1.0, std_dev)`. Years do not compound: each one perturbs the
/// original base values, never the previous year's.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSimulator {
    range: YearRange,
    std_dev: f64,
}

impl TimelineSimulator {
    pub fn new(range: YearRange, std_dev: f64) -> Result<Self, RiskError> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(RiskError::InvalidNoise(std_dev));
        }
        Ok(Self { range, std_dev })
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Simulate with Gaussian noise drawn from `rng`.
    ///
    /// Draws six factors per year in `Indicator::ALL` order, so a range of
    /// `n` years consumes exactly `6 * n` samples.
    pub fn simulate<S, R>(
        &self,
        base: &IndicatorSet,
        scorer: &S,
        rng: &mut R,
    ) -> Vec<TimelinePoint>
    where
        S: Scorer + ?Sized,
        R: Rng + ?Sized,
    {
        let std_dev = self.std_dev;
        tracing::debug!(
            start = self.range.start,
            end = self.range.end,
            std_dev = self.std_dev,
            "simulating timeline"
        );
        self.simulate_with(base, scorer, || {
            let z: f64 = rng.sample(StandardNormal);
            1.0 + std_dev * z
        })
    }

    /// Simulate with an arbitrary factor source, called once per indicator per year.
    pub fn simulate_with<S, F>(
        &self,
        base: &IndicatorSet,
        scorer: &S,
        mut factor: F,
    ) -> Vec<TimelinePoint>
    where
        S: Scorer + ?Sized,
        F: FnMut() -> f64,
    {
        self.range
            .years()
            .map(|year| {
                let factors: [f64; 6] = std::array::from_fn(|_| factor());
                let perturbed = base.scaled_by(factors);
                TimelinePoint {
                    year,
                    risk: scorer.score(&perturbed),
                }
            })
            .collect()
    }
}

impl Default for TimelineSimulator {
    fn default() -> Self {
        Self {
            range: YearRange::default(),
            std_dev: DEFAULT_NOISE_STD_DEV,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{score, RiskModel};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_range_is_eleven_years() {
        let range = YearRange::default();
        assert_eq!(range.year_count(), 11);
        assert_eq!(range.years().next(), Some(2025));
        assert_eq!(range.years().last(), Some(2035));
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert_eq!(
            YearRange::new(2030, 2025),
            Err(RiskError::InvalidYearRange {
                start: 2030,
                end: 2025
            })
        );
        assert_eq!(YearRange::new(2030, 2030).map(|r| r.year_count()), Ok(1));
    }

    #[test]
    fn test_rejects_oversized_range() {
        assert_eq!(
            YearRange::new(i32::MIN, i32::MAX),
            Err(RiskError::YearRangeTooLong {
                start: i32::MIN,
                end: i32::MAX,
                max: MAX_TIMELINE_YEARS,
            })
        );
        assert!(YearRange::new(-2_000_000_000, 2_000_000_000).is_err());

        let widest = YearRange::new(2000, 2000 + MAX_TIMELINE_YEARS as i32 - 1).unwrap();
        assert_eq!(widest.year_count(), MAX_TIMELINE_YEARS);
        assert!(YearRange::new(2000, 2000 + MAX_TIMELINE_YEARS as i32).is_err());
    }

    #[test]
    fn test_year_count_across_zero() {
        assert_eq!(YearRange::new(-5, 5).map(|r| r.year_count()), Ok(11));
        assert_eq!(span(i32::MIN, i32::MAX), 1 << 32);
    }

    #[test]
    fn test_rejects_bad_noise() {
        let range = YearRange::default();
        assert!(TimelineSimulator::new(range, -0.1).is_err());
        assert!(TimelineSimulator::new(range, f64::NAN).is_err());
        assert!(TimelineSimulator::new(range, 0.0).is_ok());
    }

    #[test]
    fn test_zero_noise_is_flat() {
        let base = IndicatorSet::new(125.0, 0.5, 0.05, 1.0, 0.7, 0.6);
        let sim = TimelineSimulator::new(YearRange::default(), 0.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let points = sim.simulate(&base, &RiskModel::standard(), &mut rng);
        assert_eq!(points.len(), 11);
        assert!(points.iter().all(|p| p.risk == score(&base)));
    }

    #[test]
    fn test_draws_six_factors_per_year() {
        let sim = TimelineSimulator::default();
        let mut calls = 0;
        sim.simulate_with(&IndicatorSet::zero(), &RiskModel::standard(), || {
            calls += 1;
            1.0
        });
        assert_eq!(calls, 66);
    }
}
