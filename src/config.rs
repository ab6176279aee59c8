//! Site configuration loader describing deployment and presentation settings.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::asset_paths::{AssetResolver, BASE_HREF_ENV, BasePath, read_env};
use crate::hero::HeroSettings;

/// File name searched for by [`SiteConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.config.json";

/// Discoverable site configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
  /// Deployment base href, `/` when unset. [`BASE_HREF_ENV`] takes precedence.
  pub base_href: Option<String>,
  /// Optional catalog file replacing the built-in works.
  pub catalog_path: Option<String>,
  /// Directory holding `<slug>.md` notes files.
  pub notes_dir: Option<String>,
  /// Show the failed-asset overlay.
  pub debug: bool,
  /// Hero presentation tunables.
  pub hero: HeroSettings,
}

impl SiteConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fallback to default
  /// values so downstream callers can continue operating with sensible assumptions.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      return Self::default();
    }
    Self::from_path(&candidate).unwrap_or_else(|| {
      warn!("ignoring unreadable config at {}", candidate.display());
      Self::default()
    })
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Deployment base, preferring a non-blank [`BASE_HREF_ENV`] over the file.
  pub fn base_path(&self) -> BasePath {
    self.base_path_with(read_env().as_deref())
  }

  /// Deployment base given the raw environment value.
  pub fn base_path_with(&self, env_value: Option<&str>) -> BasePath {
    BasePath::from_env_value(env_value)
      .unwrap_or_else(|| BasePath::from_href(self.base_href.as_deref().unwrap_or_default()))
  }

  /// Resolver for the configured deployment base.
  pub fn resolver(&self) -> AssetResolver {
    AssetResolver::new(self.base_path())
  }

  /// Catalog file relative to `root`, if configured.
  pub fn catalog_file(&self, root: &Path) -> Option<PathBuf> {
    self.catalog_path.as_ref().map(|path| root.join(path))
  }

  /// Notes directory relative to `root`, if configured.
  pub fn notes_directory(&self, root: &Path) -> Option<PathBuf> {
    self.notes_dir.as_ref().map(|path| root.join(path))
  }
}
