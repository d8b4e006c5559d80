use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Invalid year range: {start}..={end} (start must not be after end)")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Year range {start}..={end} is too long (at most {max} years)")]
    YearRangeTooLong { start: i32, end: i32, max: usize },

    #[error("Invalid noise standard deviation: {0} (must be finite and non-negative)")]
    InvalidNoise(f64),

    #[error("Invalid sampling range for {indicator}: [{min}, {max})")]
    InvalidRange {
        indicator: &'static str,
        min: f64,
        max: f64,
    },
}
