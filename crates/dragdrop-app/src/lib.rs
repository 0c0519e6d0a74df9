//! Drag-and-drop Replay Application
//!
//! Loads a recorded drag event trace, replays it through a tracker and
//! reports the completed transfers.

mod app;
mod cli;

pub use app::{AppConfig, AppError, AppResult, run};
pub use cli::Cli;
