//! Minimal HTML escaping for brief text.

/// Escape the four HTML-significant characters: `&`, `<`, `>`, `"`.
///
/// Ampersands are replaced first so the entities introduced by the
/// later passes survive intact. Apostrophes pass through unchanged.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
