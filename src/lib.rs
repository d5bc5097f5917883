//! Ignore-rule evaluation for pre-commit sensitive-content scans.
//!
//! Exemptions come from two files at the repository root: the line-oriented
//! `.talismanignore` and the structured `.talismanrc`. Detectors query the
//! parsed rules with [`TalismanRc::accept`] / [`TalismanRc::deny`] to decide
//! whether a staged change is exempt from their checks. Detectors, repository
//! file access, and path matching all live with the caller; this crate only
//! decides applicability.

pub mod error;
pub mod ignore_file;
pub mod loader;
pub mod matcher;
pub mod rc_config;

pub use error::ConfigError;
pub use ignore_file::{DEFAULT_IGNORE_FILE, Ignore, Ignores};
pub use loader::{read_config_from_rc_file, read_ignores_from_file};
pub use matcher::PatternMatcher;
pub use rc_config::{DEFAULT_RC_FILE, FileIgnoreConfig, TalismanRc};
