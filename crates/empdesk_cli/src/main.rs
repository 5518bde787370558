//! Console entry point for the employee record manager.
//!
//! # Responsibility
//! - Resolve configuration, start logging, and compose repository, service
//!   and session explicitly.
//! - Map startup failures to a non-zero exit code.

mod config;
mod session;

use config::AppConfig;
use empdesk_core::{core_version, init_logging, EmployeeService, SqliteEmployeeRepository};
use log::info;
use session::Session;
use std::error::Error;
use std::io;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env();

    // Logs are diagnostics only; the console works without them.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("Warning: file logging disabled: {err}");
    }

    let repo = SqliteEmployeeRepository::new(&config.db_path);
    info!(
        "event=cli_start module=cli status=ok version={} db_path={} match_policy={:?}",
        core_version(),
        repo.db_path().display(),
        config.match_policy
    );
    repo.check_connection()?;
    let service = EmployeeService::with_match_policy(repo, config.match_policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = Session::new(stdin.lock(), stdout.lock(), &service).run()?;

    info!("event=cli_stop module=cli status=ok reason={end:?}");
    Ok(())
}
