//! Lenient parsing of model replies into panels.
//!
//! Model output rarely matches the requested shape exactly, so parsing is a
//! total function: it never fails, it only degrades. The recognized grammar,
//! in priority order:
//!
//! 1. **Code fences** — a reply wrapped in ``` fences (with or without a
//!    language tag) is unwrapped before any other strategy runs.
//! 2. **JSON** — a balanced top-level array, or an object carrying a
//!    `panels` array, of objects with a string `scene` field and optional
//!    `narration` (string) and `dialogue` (array of strings, or one string)
//!    fields. Any `panel_number` in the reply is ignored.
//! 3. **Labeled blocks** — sections split on `PANEL <n>` headers
//!    (case-insensitive); within a section, `SCENE:` and `NARRATION:` take
//!    the rest of their line, and `DIALOGUE:` collects the following
//!    `-`/`*`-bulleted lines until `NARRATION:` or the section end. A block
//!    without a scene gets the placeholder `"Unknown scene"`.
//! 4. **Paragraph fallback** — blank-line-separated chunks, each becoming a
//!    scene-only panel.
//!
//! Whatever strategy wins, the result is truncated to the requested bound
//! (never padded) and renumbered sequentially from 1.

use crate::Panel;
use regex::Regex;
use serde_json::Value;

/// Convert a raw model reply into at most `max_panels` panels.
///
/// # Examples
///
/// ```
/// use hokusai_comic::parse_response;
///
/// let raw = "PANEL 1\nSCENE: A quiet village at dawn.\nDIALOGUE:\n- Ren: \"It's time.\"\n";
/// let panels = parse_response(raw, 10);
/// assert_eq!(panels.len(), 1);
/// assert_eq!(panels[0].scene, "A quiet village at dawn.");
/// assert_eq!(panels[0].dialogue, vec!["Ren: \"It's time.\"".to_string()]);
/// ```
pub fn parse_response(raw: &str, max_panels: u32) -> Vec<Panel> {
    let body = fenced_block(raw).unwrap_or_else(|| raw.trim().to_string());

    let mut panels = parse_json_panels(raw)
        .or_else(|| parse_labeled_blocks(&body))
        .unwrap_or_else(|| split_paragraphs(&body));

    panels.truncate(max_panels as usize);
    for (index, panel) in panels.iter_mut().enumerate() {
        panel.number = index as u32 + 1;
    }
    panels
}

/// Extract the content of the first markdown code fence, if any.
fn fenced_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let content_start = start + 3;
    // Skip a language tag on the opening fence line
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    match response[skip_to..].find("```") {
        Some(end) => Some(response[skip_to..skip_to + end].trim().to_string()),
        // No closing fence, likely a truncated reply
        None => Some(response[skip_to..].trim().to_string()),
    }
}

/// Try to read the reply as JSON panels.
fn parse_json_panels(raw: &str) -> Option<Vec<Panel>> {
    let json_str = extract_json(raw)?;
    let value: Value = serde_json::from_str(&json_str).ok()?;

    let items = match &value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map.get("panels")?.as_array()?.clone(),
        _ => return None,
    };

    let panels: Vec<Panel> = items.iter().filter_map(json_panel).collect();
    if panels.is_empty() { None } else { Some(panels) }
}

/// Read one JSON item as a panel, skipping anything without a scene.
fn json_panel(item: &Value) -> Option<Panel> {
    let obj = item.as_object()?;

    let scene = obj
        .get("scene")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_string();

    let narration = obj
        .get("narration")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let dialogue = match obj.get("dialogue") {
        Some(Value::Array(lines)) => lines
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(line)) if !line.trim().is_empty() => vec![line.trim().to_string()],
        _ => Vec::new(),
    };

    Some(Panel {
        number: 0,
        scene,
        narration,
        dialogue,
    })
}

/// Extract a JSON payload from a reply that may wrap it in fences or prose.
fn extract_json(response: &str) -> Option<String> {
    if let Some(start) = response.find("```json") {
        let content_start = start + "```json".len();
        let content = match response[content_start..].find("```") {
            Some(end) => &response[content_start..content_start + end],
            None => &response[content_start..],
        };
        return Some(content.trim().to_string());
    }

    // Prefer whichever balanced structure opens first
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');
    match (bracket_pos, brace_pos) {
        (Some(b), Some(c)) if b < c => extract_balanced(response, '[', ']')
            .or_else(|| extract_balanced(response, '{', '}')),
        (Some(_), None) => extract_balanced(response, '[', ']'),
        (None, Some(_)) => extract_balanced(response, '{', '}'),
        _ => None,
    }
}

/// Extract content between balanced delimiters, respecting JSON strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Split on `PANEL <n>` headers and read the labeled fields of each section.
fn parse_labeled_blocks(body: &str) -> Option<Vec<Panel>> {
    let header = Regex::new(r"(?i)PANEL\s+\d+").expect("valid panel header regex");
    let headers: Vec<_> = header.find_iter(body).collect();
    if headers.is_empty() {
        return None;
    }

    let mut panels = Vec::with_capacity(headers.len());
    for (i, m) in headers.iter().enumerate() {
        let start = m.end();
        let end = headers.get(i + 1).map(|next| next.start()).unwrap_or(body.len());
        panels.push(parse_section(&body[start..end]));
    }
    Some(panels)
}

/// Read the labeled fields of one panel section.
fn parse_section(section: &str) -> Panel {
    let scene =
        line_field(section, "SCENE").unwrap_or_else(|| "Unknown scene".to_string());
    let narration = line_field(section, "NARRATION");
    let dialogue = dialogue_lines(section);

    Panel {
        number: 0,
        scene,
        narration,
        dialogue,
    }
}

/// Capture the rest of the line after `LABEL:`, case-insensitive.
fn line_field(section: &str, label: &str) -> Option<String> {
    let pattern = format!(r"(?im)^[ \t]*{label}:[ \t]*(.+)$");
    let re = Regex::new(&pattern).expect("valid field regex");
    re.captures(section)
        .map(|caps| caps[1].trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Collect `-`/`*`-bulleted lines between `DIALOGUE:` and `NARRATION:`.
fn dialogue_lines(section: &str) -> Vec<String> {
    let re =
        Regex::new(r"(?is)DIALOGUE:\s*(.*?)(?:NARRATION:|$)").expect("valid dialogue regex");
    let Some(caps) = re.captures(section) else {
        return Vec::new();
    };

    caps[1]
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.strip_prefix('-').or_else(|| line.strip_prefix('*'))?;
            let rest = rest.trim();
            (!rest.is_empty()).then(|| rest.to_string())
        })
        .collect()
}

/// Last resort: every blank-line-separated chunk becomes a scene.
fn split_paragraphs(body: &str) -> Vec<Panel> {
    let sep = Regex::new(r"\n\s*\n").expect("valid paragraph split regex");
    sep.split(body)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let scene = chunk.split_whitespace().collect::<Vec<_>>().join(" ");
            Panel::from_scene(0, scene)
        })
        .collect()
}
