//! Graceful shutdown hooks.
//!
//! Register any number of cleanup routines, wait for a termination signal,
//! then run all of them concurrently and return once every one has finished.
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), shutdown_hooks::ShutdownError> {
//!     shutdown_hooks::add(|| println!("flushing buffers"));
//!     let key = shutdown_hooks::add_with_param(|sig| println!("got {}", sig));
//!     shutdown_hooks::remove(&key);
//!
//!     // Any terminating signal.
//!     shutdown_hooks::listen(&[]).await?;
//!     Ok(())
//! }
//! ```
//!
//! The free functions operate on a process-wide instance; create a
//! [`Shutdown`] for an independent set of hooks.

pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ShutdownConfig;
pub use lifecycle::global::{
    add, add_with_key, add_with_key_with_param, add_with_param, default_instance, hooks, listen,
    listen_with, remove, reset,
};
pub use lifecycle::{
    channel, DrainSummary, Hook, Shutdown, ShutdownError, Signal, SignalSet, SignalSource,
    SignalTrigger,
};
