use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Check config.toml for syntax errors or unknown keys ([timeline], [batch], [export])."
                    .to_string(),
            ),
            CliError::ConfigNotFound(_) => {
                Some("Drop --config to use ~/.conflict-risk/config.toml or built-in defaults.".to_string())
            }
            CliError::InvalidInput(_) => {
                Some("Run with --help to see accepted values.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

/// Print any error, using the themed rendering when it is a [`CliError`].
pub fn report(err: &anyhow::Error) {
    match err.downcast_ref::<CliError>() {
        Some(cli) => cli.render(),
        None => {
            eprintln!("\n{} {}", console::style("Error:").red().bold(), err);
            for cause in err.chain().skip(1) {
                eprintln!("{} {}", console::style("  caused by:").dim(), cause);
            }
        }
    }
}
