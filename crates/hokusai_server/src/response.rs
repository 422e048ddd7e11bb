//! Wire response types.
//!
//! Every outcome crosses the boundary in a uniform envelope: a `success`
//! flag plus either panels or a human-readable error message.

use hokusai_comic::{ComicStrip, Panel};
use serde::Serialize;

/// Successful generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComicResponse {
    /// Always true for this shape
    pub success: bool,
    /// The generated panels, in order
    pub panels: Vec<Panel>,
    /// Convenience count of `panels`
    pub total_panels: usize,
}

impl From<ComicStrip> for ComicResponse {
    fn from(strip: ComicStrip) -> Self {
        let total_panels = strip.len();
        Self {
            success: true,
            panels: strip.panels,
            total_panels,
        }
    }
}

/// Uniform failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Always false for this shape
    pub success: bool,
    /// Human-readable failure description
    pub error: String,
}

impl ErrorResponse {
    /// Create a failure envelope with the given message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Credential and limit status for the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigResponse {
    /// Whether a Gemini credential was configured at startup
    pub api_key_configured: bool,
    /// Inclusive supported panel-count range
    pub max_panels_range: [u32; 2],
    /// Minimum accepted story length in characters
    pub min_story_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_counts_panels() {
        let strip = ComicStrip::new(vec![
            Panel::from_scene(1, "First"),
            Panel::from_scene(2, "Second"),
        ]);
        let response = ComicResponse::from(strip);
        assert!(response.success);
        assert_eq!(response.total_panels, 2);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["panels"][0]["panel_number"], 1);
        assert_eq!(json["total_panels"], 2);
    }

    #[test]
    fn error_envelope_is_uniform() {
        let response = ErrorResponse::new("Story text is required");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Story text is required");
    }
}
