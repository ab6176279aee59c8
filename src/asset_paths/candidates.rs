use std::collections::BTreeSet;

use log::debug;

use super::base::{BasePath, MEDIA_DIR};
use super::filters::{is_absolute_reference, strip_media_prefix};

/// Resolve a resource name against the base path taken from the environment.
///
/// See [`AssetResolver::primary`].
pub fn resolve_primary(name: &str) -> String {
    AssetResolver::from_env().primary(name)
}

/// Expand a resource name into its fallback chain using the environment base path.
///
/// See [`AssetResolver::candidates`].
pub fn resolve_candidates(name: &str) -> Vec<String> {
    AssetResolver::from_env().candidates(name)
}

/// Base-aware resolver producing primary URLs and ordered fallback chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetResolver {
    base: BasePath,
}

impl AssetResolver {
    /// Create a resolver for the given deployment base.
    pub fn new(base: BasePath) -> Self {
        Self { base }
    }

    /// Create a resolver reading the base href from the environment.
    pub fn from_env() -> Self {
        Self::new(BasePath::from_env())
    }

    /// Deployment base used by this resolver.
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Resolve the first URL to try for `name`.
    ///
    /// Empty names stay empty. Absolute URLs and root-relative paths are returned unchanged;
    /// anything else lands in the media folder below the base path.
    pub fn primary(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        if is_absolute_reference(name) {
            return name.to_string();
        }
        self.base.media_url(name)
    }

    /// Generate the ordered, de-duplicated list of URLs to try for `name`.
    ///
    /// The chain starts with [`Self::primary`], falls back to the root media folder when the
    /// primary points elsewhere, and ends with a root-relative guess.
    pub fn candidates(&self, name: &str) -> Vec<String> {
        if name.is_empty() {
            return Vec::new();
        }

        let mut builder = CandidateBuilder::new(name, self.primary(name));

        builder.add_root_media_candidate();
        builder.add_root_candidate();

        let candidates = builder.finish();
        debug!("resolved '{name}' to {candidates:?}");
        candidates
    }

    /// Sources for a catalog thumbnail.
    ///
    /// Root-relative thumbnails are used as authored. Relative ones have any leading
    /// `…media/` segment and leading slash removed before being expanded into a chain.
    pub fn thumbnail_sources(&self, thumb: &str) -> Vec<String> {
        if thumb.starts_with('/') {
            return vec![thumb.to_string()];
        }

        let stripped = strip_media_prefix(thumb);
        self.candidates(stripped.trim_start_matches('/'))
    }
}

struct CandidateBuilder<'a> {
    name: &'a str,
    primary_in_root_media: bool,
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl<'a> CandidateBuilder<'a> {
    fn new(name: &'a str, primary: String) -> Self {
        let root_media = format!("/{MEDIA_DIR}/");
        let mut builder = Self {
            name,
            primary_in_root_media: primary.starts_with(&root_media),
            seen: BTreeSet::new(),
            result: Vec::new(),
        };
        builder.push(primary);
        builder
    }

    fn add_root_media_candidate(&mut self) {
        if self.primary_in_root_media {
            return;
        }
        self.push(format!("/{}/{}", MEDIA_DIR, self.name));
    }

    fn add_root_candidate(&mut self) {
        self.push(format!("/{}", self.name));
    }

    fn finish(self) -> Vec<String> {
        self.result
    }

    fn push(&mut self, candidate: String) {
        if self.seen.insert(candidate.clone()) {
            self.result.push(candidate);
        }
    }
}
