use std::path::PathBuf;

use crate::error::GameError;

/// Stdout is the playing field, so log output goes to a file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("goal_shooter.log")
}

pub fn setup_logging() -> Result<PathBuf, GameError> {
    let path = log_path();
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(log::LevelFilter::Info)
        .level_for("goal_shooter", log::LevelFilter::Debug)
        .chain(fern::log_file(&path)?)
        .apply()?;
    Ok(path)
}
