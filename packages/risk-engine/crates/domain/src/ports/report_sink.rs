use crate::indicators::IndicatorSet;
use crate::timeline::TimelinePoint;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for the one-shot scenario export.
///
/// Each method returns the location it wrote to.
pub trait ReportSink {
    fn write_scenario(&self, indicators: &IndicatorSet, risk: f64)
        -> Result<PathBuf, ExportError>;
    fn write_timeline(&self, timeline: &[TimelinePoint]) -> Result<PathBuf, ExportError>;
}
