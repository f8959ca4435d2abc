//! HTML text escaping.

/// Escape text for use in HTML element content and quoted attributes.
///
/// Escapes `& < > " '`, with the apostrophe written as `&#x27;`.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
