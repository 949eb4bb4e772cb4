//! Logging setup for the roster shell.
//!
//! The shell renders on stdout, so logs default to `./roster.log` to keep
//! the transcript readable. `ROSTER_LOG=term` sends them to stderr instead,
//! and `ROSTER_LOG=off` disables logging. `ROSTER_LOG_LEVEL`
//! (error|warn|info|debug|trace) adjusts verbosity.

use std::fs::File;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

const LOG_FILE: &str = "./roster.log";

pub fn initialize_from_env() {
    let level = std::env::var("ROSTER_LOG_LEVEL")
        .ok()
        .and_then(|raw| LevelFilter::from_str(&raw).ok())
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    match std::env::var("ROSTER_LOG").as_deref() {
        Ok("off") => {}
        Ok("term") => {
            // Stderr keeps log lines out of the rendered view.
            let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
        }
        _ => init_file_logger(level, config),
    }
}

fn init_file_logger(level: LevelFilter, config: Config) {
    match File::create(LOG_FILE) {
        Ok(file) => {
            let _ = WriteLogger::init(level, config, file);
        }
        Err(err) => {
            eprintln!("Warning: could not create {LOG_FILE}: {err}; logging disabled");
        }
    }
}
