use thiserror::Error;

/// Failures surfaced by the engine and the widget shell.
///
/// These are programmer-error-class conditions: synchronous, reported to the
/// caller of the offending operation, never retried.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An index, height, or offset did not satisfy the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The host container is missing or not an element.
    #[error("container is missing or not an element")]
    InvalidContainer,
}

pub type Result<T> = core::result::Result<T, Error>;
