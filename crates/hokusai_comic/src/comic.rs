//! The assembled comic strip.

use crate::Panel;
use serde::{Deserialize, Serialize};

const BANNER: &str =
    "============================================================";

/// An ordered sequence of comic panels.
///
/// Construction renumbers the panels sequentially from 1, so the position of
/// a panel in the strip always matches its `number` field regardless of any
/// numbering the model put in its reply.
///
/// # Examples
///
/// ```
/// use hokusai_comic::{ComicStrip, Panel};
///
/// let strip = ComicStrip::new(vec![
///     Panel::from_scene(7, "A rooftop garden"),
///     Panel::from_scene(2, "The same garden, years later"),
/// ]);
///
/// assert_eq!(strip.panels[0].number, 1);
/// assert_eq!(strip.panels[1].number, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicStrip {
    /// The panels, in narrative order
    pub panels: Vec<Panel>,
}

impl ComicStrip {
    /// Build a strip from panels, reassigning contiguous numbers from 1.
    pub fn new(panels: Vec<Panel>) -> Self {
        let panels = panels
            .into_iter()
            .enumerate()
            .map(|(index, mut panel)| {
                panel.number = index as u32 + 1;
                panel
            })
            .collect();
        Self { panels }
    }

    /// Number of panels in the strip.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the strip contains no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl std::fmt::Display for ComicStrip {
    /// Render the strip as a plain-text transcript, one section per panel.
    ///
    /// This is the downloadable artifact format; it is stable and covered by
    /// a round-trip test.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "COMIC STRIP")?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f)?;

        for panel in &self.panels {
            writeln!(f, "{}", panel)?;
            writeln!(f)?;
        }

        write!(f, "{}", BANNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_is_contiguous_from_one() {
        let strip = ComicStrip::new(vec![
            Panel::from_scene(9, "First"),
            Panel::from_scene(9, "Second"),
            Panel::from_scene(1, "Third"),
        ]);
        let numbers: Vec<u32> = strip.panels.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn transcript_contains_every_panel() {
        let strip = ComicStrip::new(vec![
            Panel {
                number: 1,
                scene: "A harbor".to_string(),
                narration: Some("Dawn broke.".to_string()),
                dialogue: vec!["Sailor: \"Cast off!\"".to_string()],
            },
            Panel::from_scene(2, "Open water"),
        ]);

        let text = format!("{}", strip);
        assert!(text.starts_with(BANNER));
        assert!(text.contains("COMIC STRIP"));
        assert!(text.contains("Panel 1: [Scene: A harbor]"));
        assert!(text.contains("Narration: Dawn broke."));
        assert!(text.contains("Sailor: \"Cast off!\""));
        assert!(text.contains("Panel 2: [Scene: Open water]"));
        assert!(text.ends_with(BANNER));
    }
}
