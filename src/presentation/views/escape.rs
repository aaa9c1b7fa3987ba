/// Minimal HTML escaping for text nodes and quoted attribute values.
/// Everything user- or database-sourced goes through here before it is
/// embedded in a page; only `DisplayRow::link_html` is injected raw.
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
