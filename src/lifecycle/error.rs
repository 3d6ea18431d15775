//! Lifecycle error definitions.

use thiserror::Error;

use crate::lifecycle::signals::Signal;

/// Errors that can occur while waiting for a shutdown signal.
///
/// Registry operations never fail; these only come from the signal source.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// The OS refused to install a handler for the signal.
    #[error("failed to subscribe to {signal}: {source}")]
    Subscribe {
        signal: Signal,
        #[source]
        source: std::io::Error,
    },

    /// The signal cannot be observed on this platform.
    #[error("{0} is not supported on this platform")]
    Unsupported(Signal),

    /// The signal source ended before delivering a matching signal.
    #[error("signal source closed before a shutdown signal was received")]
    SourceClosed,
}

/// Error returned when a signal name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown signal name: {0:?}")]
pub struct ParseSignalError(pub String);
