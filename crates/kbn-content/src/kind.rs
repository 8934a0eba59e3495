//! Saved object kinds, panel provenance and editors

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Declared `type` of a saved object or by-value panel
///
/// Unrecognised values are kept verbatim in [`SavedObjectType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SavedObjectType {
    /// Aggregation-based, TSVB, Vega and Timelion visualizations
    Visualization,
    /// Lens visualization
    Lens,
    /// Maps application map
    Map,
    /// Discover saved search
    Search,
    /// Anything else, passed through as found
    Other(String),
}

impl SavedObjectType {
    /// Wire name of the type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Visualization => "visualization",
            Self::Lens => "lens",
            Self::Map => "map",
            Self::Search => "search",
            Self::Other(other) => other,
        }
    }

    /// Check if this is a `visualization` saved object
    #[inline]
    #[must_use]
    pub fn is_visualization(&self) -> bool {
        matches!(self, Self::Visualization)
    }
}

impl From<&str> for SavedObjectType {
    fn from(value: &str) -> Self {
        match value {
            "visualization" => Self::Visualization,
            "lens" => Self::Lens,
            "map" => Self::Map,
            "search" => Self::Search,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SavedObjectType {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<SavedObjectType> for String {
    fn from(value: SavedObjectType) -> Self {
        match value {
            SavedObjectType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for SavedObjectType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for SavedObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a visualization reached the classifier
///
/// Provenance only; never derived from document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    /// Standalone saved object, or a dashboard panel pointing at one
    ByReference,
    /// Definition embedded inline in a dashboard panel
    ByValue,
}

impl Link {
    /// Wire name of the link kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ByReference => "by_reference",
            Self::ByValue => "by_value",
        }
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authoring tool for a visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Editor {
    /// Lens
    #[serde(rename = "Lens")]
    Lens,
    /// Maps application
    #[serde(rename = "Maps")]
    Maps,
    /// Discover saved search
    #[serde(rename = "Discover")]
    Discover,
    /// Time Series Visual Builder
    #[serde(rename = "TSVB")]
    Tsvb,
    /// Vega grammar
    #[serde(rename = "Vega")]
    Vega,
    /// Timelion expression
    #[serde(rename = "Timelion")]
    Timelion,
    /// Aggregation-based editor
    #[serde(rename = "Aggs-based")]
    AggsBased,
}

impl Editor {
    /// Display name of the editor
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lens => "Lens",
            Self::Maps => "Maps",
            Self::Discover => "Discover",
            Self::Tsvb => "TSVB",
            Self::Vega => "Vega",
            Self::Timelion => "Timelion",
            Self::AggsBased => "Aggs-based",
        }
    }
}

impl Display for Editor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
