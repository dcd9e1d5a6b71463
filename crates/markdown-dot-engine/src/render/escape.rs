/// Replacements applied to node text, in order.
const TEXT_REPLACEMENTS: [(&str, &str); 3] = [("<", "&lt;"), (">", "&gt;"), (". ", ". &nbsp;")];

/// Escapes node text for an HTML body.
///
/// Only angle brackets are escaped; entities already present in the source
/// pass through. A sentence break (`". "`) gets a trailing non-breaking
/// space.
pub fn escape_text(text: &str) -> String {
    TEXT_REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Escapes an attribute value for use inside double quotes.
pub fn escape_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
