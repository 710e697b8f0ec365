// Error taxonomy for daemon interaction
//
// Transport and spawn failures pass through untranslated; the one error this
// crate introduces itself is the `CouldNotConnect` sentinel raised when siad
// never becomes reachable during `connect`.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Sentinel raised by `connect` when siad never answered the version
    /// probe within the retry budget. Distinct from `Transport` so callers
    /// can tell "daemon never came up" apart from an individual failed call.
    #[error("could not connect to siad")]
    CouldNotConnect,

    /// Transport-level failure from an individual API call.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The daemon executable could not be started.
    #[error(transparent)]
    Spawn(#[from] std::io::Error),

    /// siad answered, but with a non-success HTTP status.
    #[error("siad replied with unexpected status {0}")]
    UnexpectedStatus(StatusCode),
}

impl Error {
    /// True only for the `connect` sentinel.
    pub fn is_could_not_connect(&self) -> bool {
        matches!(self, Error::CouldNotConnect)
    }
}
