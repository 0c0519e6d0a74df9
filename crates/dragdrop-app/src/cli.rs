//! Command-line arguments.

use crate::app::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// Replay a recorded drag-and-drop event trace.
#[derive(Debug, Parser)]
#[command(name = "dragdrop-replay", version, about)]
pub struct Cli {
    /// JSON script with the events to replay.
    pub script: PathBuf,

    /// Treat a drag end over a drop target as a drop, overriding the script.
    #[arg(long)]
    pub sticky: bool,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            script: cli.script,
            force_sticky: cli.sticky,
            pretty: cli.pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["dragdrop-replay", "trace.json", "--sticky"]).unwrap();
        let config = AppConfig::from(cli);
        assert_eq!(config.script, PathBuf::from("trace.json"));
        assert!(config.force_sticky);
        assert!(!config.pretty);
    }

    #[test]
    fn test_script_required() {
        assert!(Cli::try_parse_from(["dragdrop-replay"]).is_err());
    }
}
