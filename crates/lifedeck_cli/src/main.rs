//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lifedeck_core` linkage.
//! - With a database path, print today's points and claimable rewards as JSON.
//!
//! Usage: `lifedeck_cli [db_path]`
//!
//! Set `LIFEDECK_LOG_DIR` (absolute path) to write core logs there.

use lifedeck_core::db::open_db;
use lifedeck_core::{
    init_logging, Clock, LoggingConfig, RewardsService, SqlitePreferences, SystemClock,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("lifedeck_core ping={}", lifedeck_core::ping());
    println!("lifedeck_core version={}", lifedeck_core::core_version());

    if let Ok(log_dir) = std::env::var("LIFEDECK_LOG_DIR") {
        let started = LoggingConfig::with_default_level(&log_dir)
            .and_then(|config| init_logging(&config));
        if let Err(err) = started {
            eprintln!("lifedeck_cli: logging disabled: {err}");
        }
    }

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match print_points(&db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lifedeck_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_points(db_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(db_path)?;
    let prefs = SqlitePreferences::try_new(&conn)?;
    let rewards = RewardsService::new(&prefs);
    let clock = SystemClock;

    let today = clock.today_index();
    let breakdown = rewards.breakdown(today);
    let claimable = rewards.claimable(breakdown.available())?;

    let report = serde_json::json!({
        "day_index": today,
        "points": breakdown,
        "available": breakdown.available(),
        "claimable_rewards": claimable,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
