//! Error types for scene manifest parsing.

use std::fmt;
use trellis_layout::LayoutError;

/// Error type for manifest parsing and evaluation.
#[derive(Debug)]
pub enum ParseError {
    /// YAML parsing error
    Yaml(serde_yaml_ng::Error),
    /// Invalid `trellis` format version
    InvalidVersion(String),
    /// Manifest name is not kebab-case
    InvalidName(String),
    /// Two scenes share an ID
    DuplicateSceneId(String),
    /// Requested scene does not exist
    SceneNotFound(String),
    /// Invalid value
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
    /// Stack or item configuration rejected by the layout model
    Layout {
        /// Scene ID
        scene: String,
        /// Underlying layout error
        source: LayoutError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::InvalidVersion(v) => write!(f, "Invalid trellis version: {v}"),
            Self::InvalidName(name) => {
                write!(f, "Invalid manifest name '{name}': must be kebab-case")
            }
            Self::DuplicateSceneId(id) => write!(f, "Duplicate scene id: {id}"),
            Self::SceneNotFound(id) => write!(f, "Scene not found: {id}"),
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::Layout { scene, source } => write!(f, "Layout error in scene '{scene}': {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Layout { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}
