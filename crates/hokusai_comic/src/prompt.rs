//! Prompt template for story segmentation.

/// Build the instruction prompt for segmenting a story into panels.
///
/// The template is deterministic: the same story and panel bound always
/// produce the same prompt. Any variability in the pipeline comes from the
/// model, never from this function. The labeled-field shape requested here
/// (`PANEL` / `SCENE:` / `DIALOGUE:` / `NARRATION:`) is the primary grammar
/// recognized by [`crate::parse_response`].
///
/// # Examples
///
/// ```
/// use hokusai_comic::build_prompt;
///
/// let prompt = build_prompt("A fox found a map.", 6);
/// assert!(prompt.contains("at most 6 panels"));
/// assert!(prompt.contains("A fox found a map."));
/// ```
pub fn build_prompt(story: &str, max_panels: u32) -> String {
    format!(
        "You are an expert comic strip writer. Break the following story into \
at most {max_panels} panels, one per narrative beat.\n\
\n\
For each panel provide:\n\
1. A scene description (visual setting and atmosphere)\n\
2. Character dialogue lines (if any), in speaking order, in the format \"Character Name: dialogue\"\n\
3. Narration text (only if needed for context)\n\
\n\
Format your response exactly like this for each panel:\n\
\n\
PANEL [number]\n\
SCENE: [Brief scene description]\n\
DIALOGUE:\n\
- [Character Name]: \"[Their dialogue]\"\n\
- [Character Name]: \"[Their dialogue]\"\n\
NARRATION: [Optional narration text]\n\
\n\
Story to convert:\n\
{story}\n\
\n\
Capture the key moments and emotions of the story. Do not add commentary \
outside the panel blocks."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_deterministic() {
        let a = build_prompt("Two robots shared an umbrella.", 8);
        let b = build_prompt("Two robots shared an umbrella.", 8);
        assert_eq!(a, b);
    }

    #[test]
    fn prompt_carries_story_and_bound() {
        let prompt = build_prompt("Two robots shared an umbrella.", 12);
        assert!(prompt.contains("at most 12 panels"));
        assert!(prompt.contains("Two robots shared an umbrella."));
        assert!(prompt.contains("PANEL [number]"));
        assert!(prompt.contains("SCENE:"));
        assert!(prompt.contains("DIALOGUE:"));
        assert!(prompt.contains("NARRATION:"));
    }
}
