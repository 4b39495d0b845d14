use thiserror::Error;

/// Fatal start-up and platform failures.  The simulation itself cannot
/// fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
