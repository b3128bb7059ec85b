use serde::{Deserialize, Serialize};

/// Options controlling a normalization call.
///
/// - `skip_select` leaves an absent projection absent, for callers that
///   set their own projection after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub skip_select: bool,
}

impl NormalizeOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that suppress the default projection.
    pub fn skip_select() -> Self {
        Self { skip_select: true }
    }

    /// Read options from a JSON object; missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
