use std::env;
use std::fmt;

/// Environment variable consulted for the deployment base href.
pub const BASE_HREF_ENV: &str = "PORTFOLIO_BASE_HREF";

/// Folder under the base path that holds authored media.
pub const MEDIA_DIR: &str = "media";

/// URL prefix under which the site is deployed.
///
/// The stored prefix always ends with exactly one `/`, so joining it with a relative segment
/// never produces a doubled or missing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath {
    prefix: String,
}

impl BasePath {
    /// The domain root, `/`.
    pub fn root() -> Self {
        Self {
            prefix: "/".to_string(),
        }
    }

    /// Build a base path from an href such as `/app`, `/app/` or `https://cdn.example.com/site`.
    ///
    /// Blank values fall back to the root.
    pub fn from_href(href: &str) -> Self {
        let trimmed = href.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }

        Self {
            prefix: format!("{trimmed}/"),
        }
    }

    /// Interpret a raw [`BASE_HREF_ENV`] value. Unset and blank values yield `None`.
    pub fn from_env_value(value: Option<&str>) -> Option<Self> {
        value
            .filter(|href| !href.trim().is_empty())
            .map(Self::from_href)
    }

    /// Read the base href from [`BASE_HREF_ENV`], defaulting to the root when unset or blank.
    pub fn from_env() -> Self {
        Self::from_env_value(read_env().as_deref()).unwrap_or_default()
    }

    /// Prefix including its trailing slash.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` when the site is served from the domain root.
    pub fn is_root(&self) -> bool {
        self.prefix == "/"
    }

    /// Join a relative resource name below the media folder of this base.
    pub fn media_url(&self, name: &str) -> String {
        format!("{}{}/{}", self.prefix, MEDIA_DIR, name)
    }
}

/// Raw value of [`BASE_HREF_ENV`], if set.
pub(crate) fn read_env() -> Option<String> {
    env::var(BASE_HREF_ENV).ok()
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::BasePath;

    #[test]
    fn blank_href_is_root() {
        assert_eq!(BasePath::from_href(""), BasePath::root());
        assert_eq!(BasePath::from_href("   "), BasePath::root());
        assert_eq!(BasePath::from_href("/"), BasePath::root());
        assert!(BasePath::default().is_root());
    }

    #[test]
    fn appends_missing_trailing_slash() {
        assert_eq!(BasePath::from_href("/app").as_str(), "/app/");
        assert_eq!(BasePath::from_href("/app/").as_str(), "/app/");
    }

    #[test]
    fn collapses_repeated_trailing_slashes() {
        let base = BasePath::from_href("/app///");
        assert_eq!(base.media_url("x.jpg"), "/app/media/x.jpg");
    }

    #[test]
    fn env_value_overrides_only_when_present() {
        assert_eq!(
            BasePath::from_env_value(Some("/sub")),
            Some(BasePath::from_href("/sub/"))
        );
        assert_eq!(BasePath::from_env_value(None), None);
        assert_eq!(BasePath::from_env_value(Some("")), None);
        assert_eq!(BasePath::from_env_value(Some("  ")), None);
    }

    #[test]
    fn backslashes_are_left_alone() {
        assert_eq!(BasePath::from_href("\\app").as_str(), "\\app/");
    }

    #[test]
    fn keeps_absolute_origins() {
        let base = BasePath::from_href("https://cdn.example.com/site");
        assert_eq!(
            base.media_url("clip.mp4"),
            "https://cdn.example.com/site/media/clip.mp4"
        );
    }
}
