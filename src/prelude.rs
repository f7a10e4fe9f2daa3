//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to parse versions and migrate
//! wiring documents.
//!
//! # Example
//!
//! ```rust,no_run
//! use wirecloud_plugin::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let legacy_json = std::fs::read_to_string("path/to/legacy_wiring.json")?;
//! let wiring = migrate_json(&legacy_json)?;
//! println!("{}", serde_json::to_string_pretty(&wiring)?);
//!
//! check_upgrade("1.0", "1.1rc1")?;
//! # Ok(())
//! # }
//! ```

// Versions
pub use crate::version::{Prerelease, PrereleaseTag, Version, check_upgrade, sort_versions};

// Wiring documents
pub use crate::wiring::{
    LegacyWiring, VisualDescription, Wiring, is_empty_wiring, migrate_json, migrate_value,
};

// Error types
pub use crate::error::{UpgradeError, VersionError, WiringError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
