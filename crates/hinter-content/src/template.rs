//! New report draft rendering

use crate::Result;

/// Characters that are not allowed in draft file names on common platforms.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Render the initial contents of a report draft.
///
/// Recipient lists are written as JSON arrays, which YAML reads back as flow
/// sequences. `sourcePath` and `destinationPath` start out empty so the body is
/// distributed under the draft's own path.
pub fn render_draft(title: &str, to: &[String], except: &[String]) -> Result<String> {
    let to = serde_json::to_string(to)?;
    let except = serde_json::to_string(except)?;
    Ok(format!(
        "---\nto: {to}\nexcept: {except}\nsourcePath: \"\"\ndestinationPath: \"\"\n---\n\n# {title}\n\n"
    ))
}

/// Turn a free-form title into a file name stem.
///
/// Reserved characters, control characters and a leading space become `-`.
/// Everything else, including inner spaces, is kept.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if INVALID_FILENAME_CHARS.contains(&c) || c.is_control() || (i == 0 && c == ' ') {
                '-'
            } else {
                c
            }
        })
        .collect()
}
