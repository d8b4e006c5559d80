use owo_colors::OwoColorize;
use std::fmt;

/// The central theme definition for the conflict-risk CLI.
/// Defines the color palette and iconography.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) - headings, preset names.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", text.cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", text.bold())
    }

    /// Success Color (Green)
    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", text.green().bold())
    }

    /// Warning Color (Yellow)
    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", text.yellow().bold())
    }

    /// Error Color (Red)
    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", text.red().bold())
    }

    /// Muted/Dimmed - metadata, seeds, file paths.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", text.dimmed())
    }

    /// A risk percentage colored by band.
    pub fn risk(value: f64) -> String {
        let text = format!("{:.2}%", value);
        match RiskBand::of(value) {
            RiskBand::Low => Self::success(text),
            RiskBand::Elevated => Self::warning(text),
            RiskBand::High => Self::error(text),
        }
    }
}

/// Display bands for a risk value. The bands only affect coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Elevated,
    High,
}

impl RiskBand {
    pub fn of(value: f64) -> Self {
        if value < 7.0 {
            RiskBand::Low
        } else if value < 8.0 {
            RiskBand::Elevated
        } else {
            RiskBand::High
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Low => write!(f, "🟢 Low"),
            RiskBand::Elevated => write!(f, "🟡 Elevated"),
            RiskBand::High => write!(f, "🔴 High"),
        }
    }
}

/// Usage: `println!("{} Exported", Icon::File)`
pub enum Icon {
    Globe,
    Chart,
    Dice,
    File,
    Check,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Globe => "🌍",
            Icon::Chart => "📈",
            Icon::Dice => "🎲",
            Icon::File => "📄",
            Icon::Check => "✔",
        };
        write!(f, "{}", icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(RiskBand::of(6.9), RiskBand::Low);
        assert_eq!(RiskBand::of(7.7389), RiskBand::Elevated);
        assert_eq!(RiskBand::of(8.2756), RiskBand::High);
    }
}
