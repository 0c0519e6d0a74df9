//! Replay driver.

use dragdrop_core::{Report, Script, ScriptError};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load script {path}: {source}")]
    Script {
        path: PathBuf,
        #[source]
        source: ScriptError,
    },
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Replay configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the JSON script.
    pub script: PathBuf,
    /// Force sticky drops regardless of the script setting.
    pub force_sticky: bool,
    /// Pretty-print the report.
    pub pretty: bool,
}

/// Replay the configured script and write the report as JSON to `out`.
pub fn run(config: &AppConfig, out: &mut impl Write) -> AppResult<Report<String, String>> {
    let mut script: Script<String, String> =
        Script::from_path(&config.script).map_err(|source| AppError::Script {
            path: config.script.clone(),
            source,
        })?;
    if config.force_sticky {
        script.sticky = true;
    }
    log::info!(
        "Replaying {} events from {} (sticky: {})",
        script.events.len(),
        config.script.display(),
        script.sticky
    );

    let report = script.run();
    log::info!(
        "{} transfers, {} state changes",
        report.transfers.len(),
        report.changed
    );

    if config.pretty {
        serde_json::to_writer_pretty(&mut *out, &report)?;
    } else {
        serde_json::to_writer(&mut *out, &report)?;
    }
    writeln!(out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragdrop_core::DragState;

    const STICKY_TRACE: &str = r#"{
        "events": [
            { "type": "drag_start", "drag_id": "card-1" },
            { "type": "drag_enter", "drop_id": "done" },
            { "type": "drag_end" }
        ]
    }"#;

    fn write_script(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("trace.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_run_without_sticky() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            script: write_script(&dir, STICKY_TRACE),
            ..Default::default()
        };

        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        assert!(report.transfers.is_empty());
        assert_eq!(report.final_state, DragState::Idle);

        let json = String::from_utf8(out).unwrap();
        assert!(json.contains("\"transfers\":[]"));
    }

    #[test]
    fn test_force_sticky() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            script: write_script(&dir, STICKY_TRACE),
            force_sticky: true,
            pretty: true,
        };

        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        assert_eq!(report.transfers.len(), 1);
        assert_eq!(report.transfers[0].drag_id, "card-1");
        assert_eq!(report.transfers[0].drop_id, "done");
        assert!(report.transfers[0].position.is_none());
    }

    #[test]
    fn test_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            script: dir.path().join("nope.json"),
            ..Default::default()
        };

        let result = run(&config, &mut Vec::new());
        assert!(matches!(result, Err(AppError::Script { .. })));
    }
}
