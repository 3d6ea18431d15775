//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShutdownConfig (validated, immutable)
//!     → listen filter + logging setup in the binary
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal (or no) config files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenConfig, ObservabilityConfig, ShutdownConfig};
pub use validation::{validate_config, ValidationError};
