//! # Wirecloud Plugin Core
//!
//! The data transformations behind the Wirecloud marketplace plugin:
//!
//! - **Versions**: [`version::Version`] parses strings such as `1.2`, `1.0.0b3`
//!   or `2.1rc1` and orders them, padding short values with zeros and sorting
//!   prereleases (`a < b < rc`) before their final release.
//!   [`version::check_upgrade`] rejects upgrades that are not strictly newer.
//! - **Wiring migration**: [`wiring::LegacyWiring`] reads a pre-2.0 wiring
//!   document and [`wiring::LegacyWiring::migrate`] turns it into a 2.0
//!   [`wiring::Wiring`], splitting the business layer (connections and
//!   operators) from the visual layer (positions, collapse state and
//!   connection handles).
//!
//! ## Quick Start
//!
//! ```rust
//! use wirecloud_plugin::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let legacy = json!({
//!         "operators": {},
//!         "connections": [{
//!             "source": {"type": "iwidget", "id": "w1", "endpoint": "out"},
//!             "target": {"type": "iwidget", "id": "w2", "endpoint": "in"}
//!         }],
//!         "views": [{
//!             "connections": [{
//!                 "pullerStart": {"posX": 10, "posY": 20},
//!                 "pullerEnd": {"posX": 30, "posY": 40}
//!             }],
//!             "operators": {},
//!             "iwidgets": {}
//!         }]
//!     });
//!
//!     let wiring = migrate_value(&legacy)?;
//!     assert_eq!(wiring.version, "2.0");
//!     assert_eq!(wiring.visual_description.connections[0].source_name, "widget/w1/out");
//!
//!     let upgrade = check_upgrade("1.0", "1.0.1")?;
//!     println!("Upgrading to {}", upgrade);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod prelude;
pub mod version;
pub mod wiring;
