//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roommates_core` linkage with deterministic output.
//! - When given a database path, report how many chores and roommates it holds.

use roommates_core::{
    ChoreRepository, ConnectionFactory, RepoResult, RoommateRepository, SqliteChoreRepository,
    SqliteRoommateRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("roommates_core ping={}", roommates_core::ping());
    println!("roommates_core version={}", roommates_core::core_version());

    let Some(connection_string) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match print_counts(&connection_string) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roommates_core error={err}");
            ExitCode::FAILURE
        }
    }
}

fn print_counts(connection_string: &str) -> RepoResult<()> {
    let connections = ConnectionFactory::new(connection_string)?;
    let chores = SqliteChoreRepository::new(connections.clone()).get_all()?;
    let roommates = SqliteRoommateRepository::new(connections).get_all()?;

    println!("roommates_core chores={}", chores.len());
    println!("roommates_core roommates={}", roommates.len());
    Ok(())
}
