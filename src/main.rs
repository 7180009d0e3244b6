//! foothold: a territory-control bot speaking the Warlight line protocol.
//!
//! Reads commands from stdin and writes replies to stdout. Logs go to stderr;
//! set `RUST_LOG` to change the level. An optional JSON config file is taken
//! from the first argument or `FOOTHOLD_CONFIG`.

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use foothold::config::{ConfigError, PlannerConfig, CONFIG_ENV};
use foothold::engine::{Engine, EngineError};

fn load_config() -> Result<PlannerConfig, ConfigError> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            PlannerConfig::load(&path)
        }
        None => Ok(PlannerConfig::default()),
    }
}

/// Runs the protocol loop until stdin closes.
fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("foothold=info"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "could not load config");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::with_config(config);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "failed to read stdin");
                break;
            }
        };

        match engine.handle_line(&line, &mut out) {
            Ok(()) => {}
            Err(EngineError::Io(e)) => {
                error!(error = %e, "failed to write reply");
                return ExitCode::FAILURE;
            }
            Err(e) => warn!(error = %e, line = %line, "skipping line"),
        }
    }

    ExitCode::SUCCESS
}
