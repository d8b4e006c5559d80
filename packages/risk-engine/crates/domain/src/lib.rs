pub mod batch;
pub mod catalog;
pub mod error;
pub mod indicators;
pub mod model;
pub mod ports;
pub mod timeline;

pub use batch::{BatchSample, BatchSimulator, BatchSummary, SamplingRanges, UniformRange};
pub use catalog::{Preset, Resolved};
pub use error::RiskError;
pub use indicators::{Indicator, IndicatorOverrides, IndicatorRange, IndicatorSet};
pub use model::{score, RiskCoefficients, RiskModel, Scorer};
pub use ports::report_sink::{ExportError, ReportSink};
pub use timeline::{TimelinePoint, TimelineSimulator, YearRange};
