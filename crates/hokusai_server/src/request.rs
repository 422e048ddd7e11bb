//! Wire request types.

use serde::Deserialize;

/// A comic generation request body.
///
/// `max_panels` is optional; the handler substitutes the default bound and
/// the generator clamps whatever arrives into the supported range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComicRequest {
    /// The story to convert
    pub story: String,
    /// Requested upper bound on panel count
    #[serde(default)]
    pub max_panels: Option<u32>,
}
