use domain::ports::report_sink::{ExportError, ReportSink};
use domain::{IndicatorSet, TimelinePoint};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCENARIO_FILE: &str = "Conflict_Risk_Scenario.csv";
pub const TIMELINE_FILE: &str = "Conflict_Risk_Timeline.csv";

pub const OVERALL_RISK_HEADER: &str = "Overall Risk (%)";
pub const YEAR_HEADER: &str = "Year";
pub const TIMELINE_RISK_HEADER: &str = "Conflict Risk (%)";

/// One row of the scenario sheet. Field names become the header.
#[derive(Debug, Serialize)]
struct ScenarioRow {
    #[serde(rename = "GTI")]
    gti: f64,
    #[serde(rename = "TWSI")]
    twsi: f64,
    #[serde(rename = "MBR")]
    mbr: f64,
    #[serde(rename = "AFS")]
    afs: f64,
    #[serde(rename = "EDS")]
    eds: f64,
    #[serde(rename = "EVI")]
    evi: f64,
    #[serde(rename = "Overall Risk (%)")]
    risk: f64,
}

impl ScenarioRow {
    fn new(indicators: &IndicatorSet, risk: f64) -> Self {
        Self {
            gti: indicators.gti,
            twsi: indicators.twsi,
            mbr: indicators.mbr,
            afs: indicators.afs,
            eds: indicators.eds,
            evi: indicators.evi,
            risk,
        }
    }
}

#[derive(Debug, Serialize)]
struct TimelineRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Conflict Risk (%)")]
    risk: f64,
}

impl From<&TimelinePoint> for TimelineRow {
    fn from(point: &TimelinePoint) -> Self {
        Self {
            year: point.year,
            risk: point.risk,
        }
    }
}

/// Writes the scenario and timeline tables as comma-separated files that
/// spreadsheet tools open directly.
pub struct CsvReportSink {
    out_dir: PathBuf,
}

impl CsvReportSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn prepare(&self, file_name: &str) -> Result<PathBuf, ExportError> {
        if !self.out_dir.exists() {
            fs::create_dir_all(&self.out_dir)?;
        }
        Ok(self.out_dir.join(file_name))
    }

    /// Serialize `rows`, taking the header from the first record. `empty_header`
    /// is written instead when there are no rows.
    fn write_rows<T: Serialize>(
        path: &Path,
        empty_header: &[&str],
        rows: impl IntoIterator<Item = T>,
    ) -> Result<usize, ExportError> {
        let failed = |e: csv::Error| ExportError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut writer = csv::Writer::from_path(path).map_err(failed)?;
        let mut written = 0;
        for row in rows {
            writer.serialize(row).map_err(failed)?;
            written += 1;
        }
        if written == 0 {
            writer.write_record(empty_header).map_err(failed)?;
        }
        writer.flush()?;
        Ok(written)
    }
}

impl ReportSink for CsvReportSink {
    fn write_scenario(
        &self,
        indicators: &IndicatorSet,
        risk: f64,
    ) -> Result<PathBuf, ExportError> {
        let path = self.prepare(SCENARIO_FILE)?;
        Self::write_rows(&path, &[], [ScenarioRow::new(indicators, risk)])?;
        tracing::info!(path = %path.display(), "scenario exported");
        Ok(path)
    }

    fn write_timeline(&self, timeline: &[TimelinePoint]) -> Result<PathBuf, ExportError> {
        let path = self.prepare(TIMELINE_FILE)?;
        let rows = Self::write_rows(
            &path,
            &[YEAR_HEADER, TIMELINE_RISK_HEADER],
            timeline.iter().map(TimelineRow::from),
        )?;
        tracing::info!(path = %path.display(), rows, "timeline exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header_of<T: Serialize>(row: T) -> String {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(row).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        text.lines().next().unwrap().to_string()
    }

    #[test]
    fn test_scenario_header_comes_from_row_fields() {
        let header = header_of(ScenarioRow::new(&IndicatorSet::zero(), 1.0));
        assert_eq!(header, format!("GTI,TWSI,MBR,AFS,EDS,EVI,{OVERALL_RISK_HEADER}"));
    }

    #[test]
    fn test_timeline_header_matches_empty_fallback() {
        let point = TimelinePoint {
            year: 2025,
            risk: 7.0,
        };
        let header = header_of(TimelineRow::from(&point));
        assert_eq!(header, [YEAR_HEADER, TIMELINE_RISK_HEADER].join(","));
    }
}
