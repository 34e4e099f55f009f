//! Folio Configuration
//!
//! YAML configuration for the portfolio terminal.
//!
//! # Configuration Loading Priority
//!
//! 1. Compiled-in defaults
//! 2. `/etc/folio/folio.yaml` (system-wide)
//! 3. `~/.config/folio/folio.yaml` (user)
//! 4. `./folio.yaml` (project-local)
//! 5. `FOLIO_CONFIG=/path/to/config.yaml` (explicit, replaces 2-4)
//! 6. A file passed to [`load_from_file`] (explicit, replaces 2-5)
//! 7. Environment variables (highest priority)
//!
//! # Example Configuration
//!
//! ```yaml
//! identity:
//!   user: rishmika
//!   host: portfolio
//!   os: "Portfolio OS v1.0.0"
//!
//! shell:
//!   prompt: "{user}@{host}:{cwd}$ "
//!   history:
//!     max_entries: 1000
//!
//! logging:
//!   level: warn
//! ```

#![allow(missing_docs)]

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::*;

/// Load configuration from default locations.
///
/// Searches for config files in order and merges them.
/// Environment variables override file values.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load() -> Result<FolioConfig, ConfigError> {
    ConfigLoader::new().load()
}

/// Load configuration from a specific file, ignoring `FOLIO_CONFIG`.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_from_file(path: &str) -> Result<FolioConfig, ConfigError> {
    ConfigLoader::new().with_file(path).load()
}
