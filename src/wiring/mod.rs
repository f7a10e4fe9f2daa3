//! Wiring documents and the migration from the legacy view-based schema to
//! the 2.0 schema with a separate business and visual layer.

pub mod current;
pub mod legacy;
mod migrate;

pub use current::*;
pub use legacy::*;

use crate::error::WiringError;
use serde_json::Value;

/// Reads and migrates a legacy document in one step.
///
/// Either the whole document migrates or an error is returned; no partial
/// result is ever produced.
pub fn migrate_value(value: &Value) -> Result<Wiring, WiringError> {
    Ok(LegacyWiring::from_value(value)?.migrate())
}

/// Same as [`migrate_value`], starting from JSON text.
pub fn migrate_json(text: &str) -> Result<Wiring, WiringError> {
    Ok(LegacyWiring::from_json(text)?.migrate())
}

/// True iff the visual layer draws nothing. The business layer is ignored.
pub fn is_empty_wiring(visual: &VisualDescription) -> bool {
    visual.is_empty()
}
