//! Document path resolution
//!
//! Tolerant lookup of dotted paths inside loosely-typed JSON documents.
//!
//! # Core Concepts
//!
//! - [`DocPath`]: Dotted address of a field (`attributes.visState.type`)
//! - [`NestedValue`]: Typed-but-forgiving accessors over nested maps and lists
//! - [`PathChain`]: Ordered fallback paths, first present string wins
//!
//! # Example
//!
//! ```rust
//! use kbn_path::PathChain;
//! use serde_json::json;
//!
//! let chain = PathChain::dotted(&["attributes.title", "title"]);
//! let doc = json!({ "title": "Flights" });
//! assert_eq!(chain.resolve_str(&doc), "Flights");
//! ```

#![warn(unreachable_pub)]

mod chain;
mod nested;
mod path;

pub use chain::PathChain;
pub use nested::NestedValue;
pub use path::{DocPath, PathError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
