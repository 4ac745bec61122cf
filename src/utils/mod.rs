//! Small shared helpers.

pub mod date;

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "item")` -> `"0 items"`
/// - `plural_count(1, "item")` -> `"1 item"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
