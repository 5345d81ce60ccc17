//! Count formatting for log summaries.

/// Return "s" suffix for plural counts (`0` and `2..` are plural).
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization.
///
/// Nouns ending in a consonant followed by `y` take `ies`
/// (`"directory"` -> `"directories"`).
///
/// # Examples
///
/// - `plural_count(1, "file")` -> `"1 file"`
/// - `plural_count(3, "namespace")` -> `"3 namespaces"`
/// - `plural_count(2, "directory")` -> `"2 directories"`
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        return format!("1 {noun}");
    }
    match noun.strip_suffix('y') {
        Some(stem) if stem.ends_with(|c: char| !"aeiou".contains(c)) => {
            format!("{count} {stem}ies")
        }
        _ => format!("{count} {noun}{}", plural_s(count)),
    }
}
