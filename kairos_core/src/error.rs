use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchError {
    #[error("precision must be >= 0, got {0}")]
    NegativePrecision(i32),
    #[error("stopwatch is already running")]
    AlreadyRunning,
    #[error("stopwatch has already been used, call reset() before starting it again")]
    NotReset,
}
