use crate::indicators::IndicatorSet;

/// Weights of the linear risk model: an intercept plus one weight per indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskCoefficients {
    pub intercept: f64,
    pub gti: f64,
    pub twsi: f64,
    pub mbr: f64,
    pub afs: f64,
    pub eds: f64,
    pub evi: f64,
}

impl RiskCoefficients {
    pub const STANDARD: RiskCoefficients = RiskCoefficients {
        intercept: 1.0,
        gti: 0.05,
        twsi: 0.10,
        mbr: 0.07,
        afs: 0.04,
        eds: 0.06,
        evi: 0.08,
    };

    /// Indicator weights in `Indicator::ALL` order (intercept excluded).
    pub fn weights(&self) -> [f64; 6] {
        [self.gti, self.twsi, self.mbr, self.afs, self.eds, self.evi]
    }
}

impl Default for RiskCoefficients {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Anything that turns an indicator set into a risk value.
pub trait Scorer {
    fn score(&self, indicators: &IndicatorSet) -> f64;
}

/// Linear conflict risk model.
///
/// `risk = b0 + b1*GTI + b2*TWSI + b3*MBR + b4*AFS + b5*EDS + b6*EVI`
///
/// Total over the reals: no clamping, no validation. The result is read as a
/// percentage by callers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RiskModel {
    coefficients: RiskCoefficients,
}

impl RiskModel {
    pub const fn standard() -> Self {
        Self {
            coefficients: RiskCoefficients::STANDARD,
        }
    }

    pub fn coefficients(&self) -> &RiskCoefficients {
        &self.coefficients
    }
}

impl Scorer for RiskModel {
    fn score(&self, indicators: &IndicatorSet) -> f64 {
        let c = &self.coefficients;
        c.intercept
            + c.gti * indicators.gti
            + c.twsi * indicators.twsi
            + c.mbr * indicators.mbr
            + c.afs * indicators.afs
            + c.eds * indicators.eds
            + c.evi * indicators.evi
    }
}

impl<F> Scorer for F
where
    F: Fn(&IndicatorSet) -> f64,
{
    fn score(&self, indicators: &IndicatorSet) -> f64 {
        self(indicators)
    }
}

/// Score with the standard coefficients.
pub fn score(indicators: &IndicatorSet) -> f64 {
    RiskModel::standard().score(indicators)
}
