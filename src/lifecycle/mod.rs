//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (shutdown.rs → registry.rs):
//!     add / add_with_key / add_with_param / remove / reset
//!     → HookRegistry (one mutex per Shutdown instance)
//!
//! Listen (signals.rs → dispatch.rs):
//!     SignalSource delivers one matching signal
//!     → snapshot of the registry
//!     → one blocking task per hook, all invoked with that signal
//!     → drain until every task finished → DrainSummary
//!
//! Default instance (global.rs):
//!     free functions → lazily created process-wide Shutdown
//! ```
//!
//! # Design Decisions
//! - One canonical hook shape: `Fn(Signal)`; no-arg hooks are adapted
//! - Registry lock is never held while a hook runs
//! - No ordering between hooks, no timeout on the drain
//! - Signals arriving while draining are ignored and counted

pub mod dispatch;
pub mod error;
pub mod global;
pub mod hook;
pub mod key;
pub mod registry;
pub mod shutdown;
pub mod signals;

pub use dispatch::DrainSummary;
pub use error::{ParseSignalError, ShutdownError};
pub use hook::Hook;
pub use registry::HookRegistry;
pub use shutdown::Shutdown;
pub use signals::{channel, ChannelSignals, OsSignals, Signal, SignalSet, SignalSource, SignalTrigger};
