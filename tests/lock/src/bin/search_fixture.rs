//! Binary that runs one fixture world under one strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [world] [strategy]`
//!
//! Defaults: `grid_maze astar`. Output: `key=value` lines on stdout. Logs go
//! to stderr, filtered by `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use lock_tests::fixtures::report_lines;
use tracing_subscriber::{fmt, EnvFilter};
use waypoint_search::Strategy;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let world = args.next().unwrap_or_else(|| "grid_maze".to_string());
    let strategy = match args.next().as_deref().unwrap_or("astar").parse::<Strategy>() {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("search_fixture: {e}");
            return ExitCode::from(2);
        }
    };

    match report_lines(&world, strategy) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("search_fixture: {e}");
            ExitCode::FAILURE
        }
    }
}
