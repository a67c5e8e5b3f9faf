//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use rowscope_core::{AppConfig, PresentationMode};

#[derive(Parser, Debug)]
#[command(name = "rowscope")]
#[command(about = "Browse, filter, sort and select records from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file holding an array of records
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Starting mode: paged or continuous
    #[arg(short, long)]
    pub mode: Option<PresentationMode>,

    /// Rows per page
    #[arg(short = 's', long)]
    pub page_size: Option<usize>,

    /// Print the initial view as JSON and exit
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(mode) = self.mode {
            config.view.mode = mode;
        }
        if let Some(size) = self.page_size {
            config.view.page_size = size;
        }
        if let Some(path) = &self.records {
            config.records.path = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "rowscope",
            "--mode",
            "continuous",
            "--page-size",
            "25",
            "--records",
            "people.json",
        ]);
        assert_eq!(cli.mode, Some(PresentationMode::Continuous));
        assert_eq!(cli.page_size, Some(25));
        assert!(!cli.json);
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        assert!(Cli::try_parse_from(["rowscope", "--mode", "sideways"]).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let cli = Cli::parse_from(["rowscope", "-s", "50", "-r", "data.json"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.view.page_size, 50);
        assert_eq!(config.view.mode, PresentationMode::Paged);
        assert_eq!(config.records.path, Some(PathBuf::from("data.json")));
    }
}
