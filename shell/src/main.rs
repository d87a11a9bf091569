mod args;
mod dispatch;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use crate::args::{Args, ShellConfig};
use crate::logging::log_writer;

fn main() -> ExitCode {
    let args = Args::parse();
    let mut config = ShellConfig::from_args(args);
    let writer = log_writer(io::stderr, config.log.as_deref()).unwrap_or_else(|err| {
        eprintln!("failed to open log file: {err}");
        std::process::exit(1);
    });

    let level = if config.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(false)
        .with_max_level(level)
        .init();

    if let Err(err) = config.read_batch_if_empty(io::stdin().lock()) {
        eprintln!("failed to read SQL from stdin: {err}");
        return ExitCode::from(66);
    }

    let config_json = serde_json::to_string(&config).unwrap_or_else(|_| "{}".to_string());
    tracing::info!(sqlite = sqlite_bridge::engine_version(), "config: {}", config_json);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dispatch::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            eprintln!("{}", err.to_json());
            ExitCode::from(err.exit_code())
        }
    }
}
