/// Failure to read [`crate::SpacelessOptions`] from text.
///
/// Values inside a well-formed document never fail, they fall back to defaults.
#[derive(Debug)]
pub enum OptionsError {
    /// The document is not valid JSON
    Json(serde_json::Error),
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::Json(e) => write!(f, "invalid spaceless options: {e}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(value: serde_json::Error) -> Self {
        OptionsError::Json(value)
    }
}
