//! Error types for plugin configuration checks

use thiserror::Error;

/// Result type alias for plugin configuration operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Error type for property validation and bundle id composition
///
/// Every variant carries the offending key or identifier so the message
/// alone is enough to correct the app config. All errors are fatal to the
/// configuration step; nothing is retried.
#[derive(Error, Debug)]
pub enum PluginError {
    /// A recognized property holds a value of the wrong type
    #[error("invalid property type: '{key}' must be {expected}")]
    InvalidPropertyType { key: String, expected: &'static str },

    /// A property is not in the recognized set
    #[error("unknown property: \"{key}\" is not a recognized plugin property")]
    UnknownProperty { key: String },

    /// A full-form override does not extend the main bundle identifier
    #[error(
        "invalid NSE bundle id \"{override_id}\": it must start with the main bundle id followed by a dot (\"{primary}.\")"
    )]
    PrefixMismatch { override_id: String, primary: String },

    /// The derived suffix contains more than one dot-delimited segment
    #[error(
        "invalid NSE bundle id \"{override_id}\": only one dot-free segment may follow the main bundle id \"{primary}\""
    )]
    MultiSegmentSuffix { override_id: String, primary: String },

    /// The derived suffix is empty
    #[error(
        "invalid NSE bundle id \"{override_id}\": the segment after \"{primary}\" must not be empty"
    )]
    EmptySuffix { override_id: String, primary: String },

    /// Typed props conversion failed
    #[error("deserialize error: {0}")]
    Deserialize(String),
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        PluginError::Deserialize(err.to_string())
    }
}
