use regex::Regex;

fn absolute_url_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://").expect("invalid http(s) regex"))
}

fn media_prefix_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^.*media/").expect("invalid media prefix regex"))
}

/// Determine whether a reference should bypass base-path resolution.
///
/// Fully qualified `http(s)` URLs and root-relative paths already point at a concrete location.
pub fn is_absolute_reference(value: &str) -> bool {
    value.starts_with('/') || absolute_url_pattern().is_match(value)
}

/// Remove everything up to and including the last `media/` segment of an authored path.
pub fn strip_media_prefix(value: &str) -> &str {
    match media_prefix_pattern().find(value) {
        Some(found) => &value[found.end()..],
        None => value,
    }
}
