//! Line-by-line rewriting of generated text into the selected output format.
//!
//! Headings are recognized by the literal prefixes `"## "` and `"### "` only,
//! which are the two levels the outline prompt asks for. Anything else,
//! deeper headings included, is treated as ordinary text.

use serde::Serialize;

use crate::OutputFormat;

const H2: &str = "## ";
const H3: &str = "### ";

/// The terminal artifact shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedOutput {
    pub format: OutputFormat,
    pub text: String,
}

/// Rewrite `text` according to `mode`. Pure and deterministic.
pub fn format(text: &str, mode: OutputFormat) -> FormattedOutput {
    let rewrite: fn(&str) -> String = match mode {
        OutputFormat::Markdown => shift_markdown_line,
        OutputFormat::Html => html_line,
        OutputFormat::Note => note_line,
    };
    let text = text.split('\n').map(rewrite).collect::<Vec<_>>().join("\n");
    FormattedOutput { format: mode, text }
}

/// Push every heading one level down so the outline nests under the page's
/// own headings.
fn shift_markdown_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix(H2) {
        format!("### {rest}")
    } else if let Some(rest) = line.strip_prefix(H3) {
        format!("#### {rest}")
    } else {
        line.to_string()
    }
}

// No escaping: the output is meant to be pasted into a blog editor as-is.
fn html_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix(H2) {
        format!("<h2>{}</h2>", rest.trim())
    } else if let Some(rest) = line.strip_prefix(H3) {
        format!("<h3>{}</h3>", rest.trim())
    } else {
        format!("{line}<br>")
    }
}

fn note_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix(H2) {
        format!("■ {rest}")
    } else if let Some(rest) = line.strip_prefix(H3) {
        format!("▶ {rest}")
    } else {
        line.to_string()
    }
}
