//! The catalog of authored works and its loaders.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::warn;
use serde::Deserialize;

use crate::embed::is_valid_video_id;
use crate::models::{Tag, WorkItem};

/// Ordered, read-only list of works.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  works: Vec<WorkItem>,
}

/// Catalog files may be a bare list or an object with a `works` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
  List(Vec<WorkItem>),
  Wrapped { works: Vec<WorkItem> },
}

/// Errors that can occur while loading a catalog file.
#[derive(Debug)]
pub enum CatalogError {
  /// Failed to read the catalog file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON catalog.
  Json {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to parse a YAML catalog.
  Yaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_yaml::Error,
  },
}

/// A single problem found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
  /// Two works share an identifier.
  DuplicateId(String),
  /// Two works share a slug.
  DuplicateSlug(String),
  /// A required text field is blank.
  EmptyField {
    /// Identifier (or position) of the offending work.
    work: String,
    /// Name of the blank field.
    field: &'static str,
  },
  /// A non-blank video id that does not look like a YouTube id.
  InvalidVideoId {
    /// Identifier of the offending work.
    work: String,
    /// The authored value.
    video_id: String,
  },
}

impl Catalog {
  /// Wrap an ordered list of works.
  pub fn new(works: Vec<WorkItem>) -> Self {
    Self { works }
  }

  /// The works authored for the site, built on first access.
  pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::new(builtin_works()))
  }

  /// Load a catalog from a JSON or YAML file, picked by extension.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| CatalogError::Io {
      path: path.to_path_buf(),
      source: err,
    })?;

    let is_yaml = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let file: CatalogFile = if is_yaml {
      serde_yaml::from_str(&contents).map_err(|err| CatalogError::Yaml {
        path: path.to_path_buf(),
        source: err,
      })?
    } else {
      serde_json::from_str(&contents).map_err(|err| CatalogError::Json {
        path: path.to_path_buf(),
        source: err,
      })?
    };

    Ok(Self::from(file))
  }

  /// All works in authored order.
  pub fn works(&self) -> &[WorkItem] {
    &self.works
  }

  /// Number of works.
  pub fn len(&self) -> usize {
    self.works.len()
  }

  /// Returns `true` when the catalog holds no works.
  pub fn is_empty(&self) -> bool {
    self.works.is_empty()
  }

  /// Look up the work rendered at `/work/<slug>`. Matching is exact.
  pub fn find_by_slug(&self, slug: &str) -> Option<&WorkItem> {
    self.works.iter().find(|work| work.slug == slug)
  }

  /// Check the catalog for problems the type system cannot rule out.
  ///
  /// Repeated tags inside a single work are harmless for filtering and are only logged.
  pub fn validate(&self) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut ids: BTreeMap<&str, usize> = BTreeMap::new();
    let mut slugs: BTreeMap<&str, usize> = BTreeMap::new();

    for (index, work) in self.works.iter().enumerate() {
      let label = if work.id.trim().is_empty() {
        format!("#{index}")
      } else {
        work.id.clone()
      };

      for (field, value) in [
        ("id", &work.id),
        ("slug", &work.slug),
        ("title", &work.title),
        ("thumb", &work.thumb),
      ] {
        if value.trim().is_empty() {
          issues.push(CatalogIssue::EmptyField {
            work: label.clone(),
            field,
          });
        }
      }

      if !work.id.is_empty() && ids.insert(&work.id, index).is_some() {
        issues.push(CatalogIssue::DuplicateId(work.id.clone()));
      }
      if !work.slug.is_empty() && slugs.insert(&work.slug, index).is_some() {
        issues.push(CatalogIssue::DuplicateSlug(work.slug.clone()));
      }

      if let Some(video_id) = work.video_id() {
        if !is_valid_video_id(video_id) {
          issues.push(CatalogIssue::InvalidVideoId {
            work: label.clone(),
            video_id: video_id.to_string(),
          });
        }
      }

      for tag in repeated_tags(&work.tags) {
        warn!("work '{label}' lists tag '{tag}' more than once");
      }
    }

    issues
  }
}

impl From<CatalogFile> for Catalog {
  fn from(file: CatalogFile) -> Self {
    match file {
      CatalogFile::List(works) | CatalogFile::Wrapped { works } => Self::new(works),
    }
  }
}

impl<'a> IntoIterator for &'a Catalog {
  type Item = &'a WorkItem;
  type IntoIter = std::slice::Iter<'a, WorkItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.works.iter()
  }
}

impl std::fmt::Display for CatalogError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Json { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::Yaml { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for CatalogError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Json { source, .. } => Some(source),
      Self::Yaml { source, .. } => Some(source),
    }
  }
}

impl std::fmt::Display for CatalogIssue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::DuplicateId(id) => write!(f, "duplicate id '{id}'"),
      Self::DuplicateSlug(slug) => write!(f, "duplicate slug '{slug}'"),
      Self::EmptyField { work, field } => write!(f, "work '{work}' has an empty {field}"),
      Self::InvalidVideoId { work, video_id } => {
        write!(f, "work '{work}' has a malformed video id '{video_id}'")
      }
    }
  }
}

fn repeated_tags(tags: &[Tag]) -> Vec<Tag> {
  let mut repeated = Vec::new();
  for (index, tag) in tags.iter().enumerate() {
    if tags[..index].contains(tag) && !repeated.contains(tag) {
      repeated.push(*tag);
    }
  }
  repeated
}

fn work(
  id: &str,
  slug: &str,
  title: &str,
  tags: &[Tag],
  thumb: &str,
  youtube_id: &str,
) -> WorkItem {
  WorkItem {
    id: id.to_string(),
    slug: slug.to_string(),
    title: title.to_string(),
    tags: tags.to_vec(),
    thumb: thumb.to_string(),
    youtube_id: Some(youtube_id.to_string()),
  }
}

fn builtin_works() -> Vec<WorkItem> {
  use Tag::*;

  vec![
    work(
      "XEEKIN",
      "xeekin",
      "XEEKIN",
      &[Installation, Performance, Reality, RhythmGame, ProjectionMapping],
      "works/XEEKIN.jpg",
      "LNq-itphuMw",
    ),
    work(
      "NOISE CANCELLING",
      "noise-cancelling",
      "NOISE CANCELLING",
      &[ProjectionMapping, Reality, Installation, ProjectionMapping],
      "/works/NOISECANCELLING.png",
      "IXnayv0lLkQ",
    ),
    work(
      "The Unknown box",
      "the-unknown-box",
      "The Unknown box",
      &[Reality, Installation, ProjectionMapping],
      "/works/box2.png",
      "CJe59NjIhkM",
    ),
    work(
      "fog-screen",
      "fog-screen",
      "Fog Screen",
      &[Reality, ProjectionMapping],
      "/works/fog.png",
      "ZS0lAN9J2sw",
    ),
    work(
      "Groo",
      "groo",
      "Groo",
      &[Reality, Installation, ProjectionMapping],
      "/works/Groo.png",
      "iuovOa8r4Uw",
    ),
    work(
      "JangMaRoo",
      "jangMaRoo",
      "JangMaRoo",
      &[Reality, Performance, ProjectionMapping],
      "/works/JangMaRoo.png",
      "_-kpnAqf3mM",
    ),
    work(
      "3D Mapping",
      "3D-Mapping",
      "3D Mapping",
      &[Reality, ProjectionMapping, Develop],
      "/works/3d_mapping.png",
      "slSxIV_E_Ug",
    ),
    work(
      "Earth",
      "Earth",
      "Earth",
      &[Reality, Installation, Develop, ProjectionMapping],
      "/works/earth.png",
      "rGLacluUKhg",
    ),
    work(
      "Hokuyo",
      "Hokuyo",
      "Hokuyo",
      &[Reality, Develop],
      "/works/hokuyo.png",
      "i_-1t-jhpaY",
    ),
    work(
      "TD with instagram",
      "TD－with－instagram",
      "TD with instagram",
      &[Reality, Develop],
      "/works/TD_with_insta.png",
      "8gC-aMdRaJM",
    ),
    work(
      "타는목마름으로",
      "thirsty",
      "타는목마름으로",
      &[Reality, MotionGraphic],
      "/works/thirsty.png",
      "mbtMukyl4QU",
    ),
    work(
      "flee",
      "flee",
      "flee",
      &[Reality, MotionGraphic],
      "/works/flee.png",
      "qNJRGNJrtNA",
    ),
    work(
      "black pearl",
      "black-pearl",
      "black pearl",
      &[Reality, MotionGraphic],
      "/works/black_pearl.png",
      "pgZZhv96p0E",
    ),
    work(
      "show reel(~2020)",
      "show-reel",
      "show reel(~2020)",
      &[Reality, MotionGraphic],
      "/works/show_reel.png",
      "4Xbhyrb8EAY",
    ),
    work(
      "TD Diffusion",
      "TD-Diffusion",
      "TD Diffusion",
      &[Reality, Develop],
      "/works/TD_Diffusion.png",
      "8NXkAlqFgFo",
    ),
    work(
      "Moving Foster",
      "Moving-Foster",
      "Moving Foster",
      &[Reality, Develop, MotionGraphic],
      "/works/Moving_Foster.png",
      "8jTFZBbRUGo",
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn sample(id: &str, slug: &str) -> WorkItem {
    WorkItem {
      id: id.into(),
      slug: slug.into(),
      title: id.to_uppercase(),
      tags: vec![Tag::Reality],
      thumb: format!("/works/{slug}.png"),
      youtube_id: None,
    }
  }

  #[test]
  fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 16);
    assert_eq!(catalog.validate(), Vec::new());
  }

  #[test]
  fn builtin_catalog_keeps_authored_duplicate_tags() {
    let work = Catalog::builtin()
      .find_by_slug("noise-cancelling")
      .expect("noise-cancelling should exist");
    assert_eq!(work.tags.len(), 4);
    assert_eq!(repeated_tags(&work.tags), vec![Tag::ProjectionMapping]);
  }

  #[test]
  fn slug_lookup_is_exact() {
    let catalog = Catalog::builtin();
    assert_eq!(
      catalog.find_by_slug("jangMaRoo").map(|work| work.title.as_str()),
      Some("JangMaRoo")
    );
    assert!(catalog.find_by_slug("jangmaroo").is_none());
    assert!(catalog.find_by_slug("").is_none());
  }

  #[test]
  fn reports_duplicates_and_blank_fields() {
    let mut blank = sample("", "blank");
    blank.title = " ".into();
    let mut bad_video = sample("c", "c");
    bad_video.youtube_id = Some("not a video".into());

    let catalog = Catalog::new(vec![sample("a", "a"), sample("a", "a"), blank, bad_video]);
    let issues = catalog.validate();

    assert!(issues.contains(&CatalogIssue::DuplicateId("a".into())));
    assert!(issues.contains(&CatalogIssue::DuplicateSlug("a".into())));
    assert!(issues.contains(&CatalogIssue::EmptyField {
      work: "#2".into(),
      field: "id",
    }));
    assert!(issues.contains(&CatalogIssue::EmptyField {
      work: "#2".into(),
      field: "title",
    }));
    assert!(issues.contains(&CatalogIssue::InvalidVideoId {
      work: "c".into(),
      video_id: "not a video".into(),
    }));
    assert_eq!(issues.len(), 5);
  }

  #[test]
  fn loads_json_list() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("works.json");
    fs::write(
      &path,
      r#"[{"id":"a","slug":"a","title":"A","tags":["develop"],"thumb":"a.png","youtubeId":"8NXkAlqFgFo"}]"#,
    )
    .expect("failed to write catalog");

    let catalog = Catalog::load_from_path(&path).expect("catalog should load");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.works()[0].tags, vec![Tag::Develop]);
  }

  #[test]
  fn loads_wrapped_yaml() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("works.yaml");
    fs::write(
      &path,
      "works:\n  - id: a\n    slug: a\n    title: A\n    tags: [reality, motion_graphic]\n    thumb: /works/a.png\n",
    )
    .expect("failed to write catalog");

    let catalog = Catalog::load_from_path(&path).expect("catalog should load");
    assert_eq!(catalog.works()[0].tags, vec![Tag::Reality, Tag::MotionGraphic]);
    assert_eq!(catalog.works()[0].video_id(), None);
  }

  #[test]
  fn unknown_tags_fail_to_load() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("works.json");
    fs::write(
      &path,
      r#"[{"id":"a","slug":"a","title":"A","tags":["sculpture"],"thumb":"a.png"}]"#,
    )
    .expect("failed to write catalog");

    let err = Catalog::load_from_path(&path).expect_err("orphan tag should be rejected");
    assert!(matches!(err, CatalogError::Json { .. }));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let temp = tempdir().expect("failed to create temp dir");
    let err = Catalog::load_from_path(temp.path().join("missing.json"))
      .expect_err("missing file should fail");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read"));
  }
}
