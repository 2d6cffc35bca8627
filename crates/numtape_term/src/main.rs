//! Terminal host for the tape widget.
//!
//! Reads optional settings from `<config dir>/numtape/config.json`, picks a
//! problem and plays it on stdin/stdout. Logs go to stderr.

mod error;
mod paths;
mod play;
mod text_surface;

use std::fs;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use numtape::prelude::*;
use tracing::{debug, info};

use error::TermError;
use paths::AppPaths;
use text_surface::TextSurface;

fn load_config(paths: &AppPaths) -> Result<WidgetConfig, TermError> {
    let path = paths.config_file();
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            return Ok(WidgetConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    WidgetConfig::from_json_str(&json).map_err(|source| TermError::Config { path, source })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let paths = AppPaths::new()?;
    let config = load_config(&paths)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut rng = Prng::new(seed);
    let problem = Problem::generate(&mut rng, config.max_number);
    info!(seed, "problem ready");

    let surface = TextSurface::new(config.geometry, config.max_number);
    let mut widget = Widget::new(problem, &config, surface)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play::play(&mut widget, stdin.lock(), &mut stdout)?;
    Ok(())
}
