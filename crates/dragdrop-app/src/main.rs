//! Replay entry point.

use clap::Parser;
use dragdrop_app::{AppConfig, Cli};

fn main() {
    env_logger::init();

    let config = AppConfig::from(Cli::parse());
    let stdout = std::io::stdout();
    if let Err(e) = dragdrop_app::run(&config, &mut stdout.lock()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
