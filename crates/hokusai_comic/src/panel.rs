//! A single comic strip panel.

use serde::{Deserialize, Serialize};

/// One unit of the output comic strip.
///
/// Panels are immutable once constructed and live only for the duration of a
/// request/response cycle. Dialogue lines keep their speaking order.
///
/// # Examples
///
/// ```
/// use hokusai_comic::Panel;
///
/// let panel = Panel {
///     number: 1,
///     scene: "A lighthouse at dusk".to_string(),
///     narration: Some("The storm was coming.".to_string()),
///     dialogue: vec!["Keeper: \"Light the lamp!\"".to_string()],
/// };
///
/// let rendered = format!("{}", panel);
/// assert!(rendered.starts_with("Panel 1: [Scene: A lighthouse at dusk]"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// 1-based position of this panel in the strip
    #[serde(rename = "panel_number")]
    pub number: u32,
    /// Description of the visual setting
    pub scene: String,
    /// Optional narration text
    pub narration: Option<String>,
    /// Character dialogue lines, in speaking order
    #[serde(default)]
    pub dialogue: Vec<String>,
}

impl Panel {
    /// Create a panel with only a scene description.
    pub fn from_scene(number: u32, scene: impl Into<String>) -> Self {
        Self {
            number,
            scene: scene.into(),
            narration: None,
            dialogue: Vec::new(),
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Panel {}: [Scene: {}]", self.number, self.scene)?;

        if let Some(narration) = &self.narration {
            write!(f, "\nNarration: {}", narration)?;
        }

        for line in &self.dialogue {
            write!(f, "\n{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_skips_missing_narration() {
        let panel = Panel::from_scene(2, "An empty street");
        let rendered = format!("{}", panel);
        assert_eq!(rendered, "Panel 2: [Scene: An empty street]");
    }

    #[test]
    fn display_keeps_dialogue_order() {
        let panel = Panel {
            number: 1,
            scene: "A duel".to_string(),
            narration: None,
            dialogue: vec!["A: \"Draw!\"".to_string(), "B: \"After you.\"".to_string()],
        };
        let rendered = format!("{}", panel);
        let a = rendered.find("A: ").unwrap();
        let b = rendered.find("B: ").unwrap();
        assert!(a < b);
    }

    #[test]
    fn wire_format_uses_panel_number() {
        let panel = Panel::from_scene(3, "A harbor");
        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["panel_number"], 3);
        assert_eq!(json["scene"], "A harbor");
    }
}
