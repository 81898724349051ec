//! Console output: the formatted text, the reports and diffs.

use std::path::Path;

use similar::TextDiff;

use crate::Beautified;

/// Header printed before the formatted text.
pub const FORMATTED_TEXT_HEADER: &str = "[*] Formatted text:";

/// Header printed before statistics and mistakes.
pub const ADDITIONAL_INFO_HEADER: &str = "[*] Additional info:";

/// Render the console output of a run.
///
/// Without `written_to` the formatted text is printed, followed by the
/// reports. With it, only the reports and a confirmation of the write are.
pub fn render(result: &Beautified, written_to: Option<&Path>) -> String {
    let info = render_info(result);
    match written_to {
        Some(path) => match info {
            Some(info) => format!("{}\n{}", info, written_message(path)),
            None => written_message(path),
        },
        None => {
            let mut output = format!("{}\n{}", FORMATTED_TEXT_HEADER, result.text);
            if let Some(info) = info {
                output.push('\n');
                output.push_str(&info);
            }
            output
        }
    }
}

/// Render the statistics and mistakes block, if any report was produced.
pub fn render_info(result: &Beautified) -> Option<String> {
    let mut sections = Vec::new();
    if let Some(statistics) = &result.statistics {
        sections.push(statistics.to_string());
    }
    if let Some(mistakes) = &result.mistakes {
        sections.push(mistakes.to_string());
    }
    if sections.is_empty() {
        return None;
    }
    Some(format!("{}\n{}", ADDITIONAL_INFO_HEADER, sections.join("\n")))
}

/// Confirmation printed after the text has been written.
pub fn written_message(path: &Path) -> String {
    format!(
        "[=========] 100% Text has been successfully written to '{}'",
        path.display()
    )
}

/// Render a unified diff between the input and the formatted text.
///
/// Returns an empty string when nothing changed.
pub fn render_diff(original: &str, formatted: &str) -> String {
    if original == formatted {
        return String::new();
    }
    let diff = TextDiff::from_lines(original, formatted);
    let mut unified = diff.unified_diff();
    unified.context_radius(3).header("original", "formatted");
    unified.to_string()
}
