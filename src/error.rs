//! Errors raised by maze construction

use thiserror::Error;

/// Everything that can go wrong before a maze exists
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Requested maze size cannot produce a grid
    #[error("invalid argument: maze size {size} {reason}")]
    InvalidArgument {
        /// The size that was asked for
        size: usize,
        /// Why it was rejected
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;
