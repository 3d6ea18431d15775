//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! lifecycle/* emits tracing events:
//!     registry mutations (debug), signal received (info),
//!     ignored signals (warn), failed hooks (error)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is up to the binary
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
