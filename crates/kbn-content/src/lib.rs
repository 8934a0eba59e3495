//! Kibana content classification
//!
//! Describes saved visualizations and dashboard panels: which editor built
//! them, whether they are legacy, and whether they carry a query or filter.
//!
//! # Architecture
//!
//! ```text
//! raw document → inflate → PathChain lookups → rules → Descriptor
//!                                                          ↑
//! dashboard → panelsJSON → by-value panels ────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use kbn_content::{describe_saved_object, Editor};
//! use serde_json::json;
//!
//! let desc = describe_saved_object(json!({
//!     "type": "visualization",
//!     "attributes": {
//!         "title": "Requests",
//!         "visState": "{\"type\":\"metrics\",\"params\":{\"type\":\"gauge\"}}"
//!     }
//! }))?;
//!
//! assert_eq!(desc.editor()?, Editor::Tsvb);
//! assert_eq!(desc.tsvb_type(), "gauge");
//! assert!(desc.is_legacy());
//! # Ok::<(), kbn_content::ContentError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
mod classifier;
mod fields;

pub mod config;
pub mod descriptor;
pub mod error;
pub mod filters;
pub mod inflate;
pub mod kind;
pub mod panels;
pub mod references;
pub mod rules;

// Re-exports for convenience
pub use classifier::{
    by_reference_panel_ids, collect_by_value_panels, describe_saved_object, Classifier,
};
pub use config::{ClassifierConfig, LegacyPolicy};
pub use descriptor::{Descriptor, VisualizationSummary};
pub use error::{ConfigError, ContentError, ContentResult};
pub use inflate::inflate;
pub use kind::{Editor, Link, SavedObjectType};
pub use panels::ByValuePanels;
pub use references::{dashboard_title, Reference};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for describing content
    pub use crate::classifier::Classifier;
    pub use crate::config::{ClassifierConfig, LegacyPolicy};
    pub use crate::descriptor::Descriptor;
    pub use crate::error::{ContentError, ContentResult};
    pub use crate::kind::{Editor, Link, SavedObjectType};
    pub use kbn_path::{DocPath, NestedValue, PathChain};
}
