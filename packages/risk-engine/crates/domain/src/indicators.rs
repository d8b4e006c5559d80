use std::fmt;

/// The six geopolitical indicators that feed the risk model.
///
/// Values are plain reals. The nominal ranges in [`Indicator::range`] describe
/// what the inputs are expected to look like, but nothing here enforces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSet {
    /// Geopolitical Tension Index
    pub gti: f64,
    /// Trade War Severity Index
    pub twsi: f64,
    /// Military Build-up Rate
    pub mbr: f64,
    /// Alliance Fragmentation Score. Nominally an integer count, stored as a
    /// real because timeline noise scales it.
    pub afs: f64,
    /// Energy Dependency Score
    pub eds: f64,
    /// Economic Vulnerability Index
    pub evi: f64,
}

impl IndicatorSet {
    pub const fn new(gti: f64, twsi: f64, mbr: f64, afs: f64, eds: f64, evi: f64) -> Self {
        Self {
            gti,
            twsi,
            mbr,
            afs,
            eds,
            evi,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Values in [`Indicator::ALL`] order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.gti, self.twsi, self.mbr, self.afs, self.eds, self.evi]
    }

    pub fn from_array(values: [f64; 6]) -> Self {
        let [gti, twsi, mbr, afs, eds, evi] = values;
        Self::new(gti, twsi, mbr, afs, eds, evi)
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Gti => self.gti,
            Indicator::Twsi => self.twsi,
            Indicator::Mbr => self.mbr,
            Indicator::Afs => self.afs,
            Indicator::Eds => self.eds,
            Indicator::Evi => self.evi,
        }
    }

    pub fn set(&mut self, indicator: Indicator, value: f64) {
        match indicator {
            Indicator::Gti => self.gti = value,
            Indicator::Twsi => self.twsi = value,
            Indicator::Mbr => self.mbr = value,
            Indicator::Afs => self.afs = value,
            Indicator::Eds => self.eds = value,
            Indicator::Evi => self.evi = value,
        }
    }

    /// Element-wise product with a factor per indicator.
    pub fn scaled_by(&self, factors: [f64; 6]) -> Self {
        let values = self.to_array();
        Self::from_array(std::array::from_fn(|i| values[i] * factors[i]))
    }

    /// Indicators whose value lies outside the nominal range.
    pub fn out_of_range(&self) -> Vec<(Indicator, f64)> {
        Indicator::ALL
            .iter()
            .map(|&ind| (ind, self.get(ind)))
            .filter(|&(ind, value)| !ind.range().contains(value))
            .collect()
    }
}

impl fmt::Display for IndicatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GTI={} TWSI={} MBR={} AFS={} EDS={} EVI={}",
            self.gti, self.twsi, self.mbr, self.afs, self.eds, self.evi
        )
    }
}

/// Nominal range of an indicator, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRange {
    pub min: f64,
    pub max: f64,
    pub integer: bool,
}

impl IndicatorRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max && (!self.integer || value.fract() == 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Gti,
    Twsi,
    Mbr,
    Afs,
    Eds,
    Evi,
}

impl Indicator {
    pub const ALL: [Indicator; 6] = [
        Indicator::Gti,
        Indicator::Twsi,
        Indicator::Mbr,
        Indicator::Afs,
        Indicator::Eds,
        Indicator::Evi,
    ];

    /// Short column label, as used in exports.
    pub fn code(&self) -> &'static str {
        match self {
            Indicator::Gti => "GTI",
            Indicator::Twsi => "TWSI",
            Indicator::Mbr => "MBR",
            Indicator::Afs => "AFS",
            Indicator::Eds => "EDS",
            Indicator::Evi => "EVI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Indicator::Gti => "Geopolitical Tension Index",
            Indicator::Twsi => "Trade War Severity Index",
            Indicator::Mbr => "Military Build-up Rate",
            Indicator::Afs => "Alliance Fragmentation Score",
            Indicator::Eds => "Energy Dependency Score",
            Indicator::Evi => "Economic Vulnerability Index",
        }
    }

    pub fn range(&self) -> IndicatorRange {
        let (min, max, integer) = match self {
            Indicator::Gti => (100.0, 150.0, false),
            Indicator::Twsi => (0.0, 1.0, false),
            Indicator::Mbr => (0.03, 0.08, false),
            Indicator::Afs => (0.0, 3.0, true),
            Indicator::Eds => (0.0, 1.0, false),
            Indicator::Evi => (0.0, 1.0, false),
        };
        IndicatorRange { min, max, integer }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Per-indicator replacements applied on top of a preset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorOverrides {
    pub gti: Option<f64>,
    pub twsi: Option<f64>,
    pub mbr: Option<f64>,
    pub afs: Option<f64>,
    pub eds: Option<f64>,
    pub evi: Option<f64>,
}

impl IndicatorOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, base: IndicatorSet) -> IndicatorSet {
        IndicatorSet {
            gti: self.gti.unwrap_or(base.gti),
            twsi: self.twsi.unwrap_or(base.twsi),
            mbr: self.mbr.unwrap_or(base.mbr),
            afs: self.afs.unwrap_or(base.afs),
            eds: self.eds.unwrap_or(base.eds),
            evi: self.evi.unwrap_or(base.evi),
        }
    }
}
