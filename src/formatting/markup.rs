use crate::constants::MARKUP_REPLACEMENTS;

/// Rewrite Jira wiki delimiters into their GitHub Markdown equivalents.
///
/// Each table entry is applied exactly once, left-to-right through the
/// table; `str::replace` scans only the input string, so no replacement can
/// re-match text produced by an earlier one.
pub fn reformat_markup(text: &str) -> String {
    let mut result = text.to_string();
    for (from, to) in MARKUP_REPLACEMENTS {
        result = result.replace(from, to);
    }
    result
}

/// Prefix reformatted text with an attribution line naming its original
/// author.
pub fn attribute(author: &str, text: &str) -> String {
    format!("_{} says:_ \n\n {}", author, reformat_markup(text))
}
