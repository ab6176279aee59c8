//! Data structures describing the authored works shown on the site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of labels used to categorise works.
///
/// Declaration order is the order of the chips in the filter strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
  /// Mixed and extended reality pieces.
  Reality,
  /// Live performance work.
  Performance,
  /// Physical installations.
  Installation,
  /// Rhythm game mechanics.
  RhythmGame,
  /// Projection mapping.
  ProjectionMapping,
  /// Tooling and software development.
  Develop,
  /// Motion graphics.
  MotionGraphic,
}

impl Tag {
  /// Every tag in filter-strip display order.
  pub const ALL: [Tag; 7] = [
    Tag::Reality,
    Tag::Performance,
    Tag::Installation,
    Tag::RhythmGame,
    Tag::ProjectionMapping,
    Tag::Develop,
    Tag::MotionGraphic,
  ];

  /// Wire name of the tag, as written in authored catalog files.
  pub fn as_str(self) -> &'static str {
    match self {
      Tag::Reality => "reality",
      Tag::Performance => "performance",
      Tag::Installation => "installation",
      Tag::RhythmGame => "rhythm_game",
      Tag::ProjectionMapping => "projection_mapping",
      Tag::Develop => "develop",
      Tag::MotionGraphic => "motion_graphic",
    }
  }

  /// Chip label rendered in the filter strip.
  pub fn label(self) -> &'static str {
    self.as_str()
  }
}

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when a string does not name a known [`Tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown tag '{}'", self.0)
  }
}

impl std::error::Error for UnknownTag {}

impl FromStr for Tag {
  type Err = UnknownTag;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let value = value.trim();
    Tag::ALL
      .into_iter()
      .find(|tag| tag.as_str() == value)
      .ok_or_else(|| UnknownTag(value.to_string()))
  }
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
  /// Opaque identifier used as the render key.
  pub id: String,
  /// URL-safe identifier used by the detail route.
  pub slug: String,
  /// Display title.
  pub title: String,
  /// Tags in authored order. Duplicates are kept as written.
  pub tags: Vec<Tag>,
  /// Thumbnail path, root-relative or relative to the media folder.
  pub thumb: String,
  /// YouTube video identifier; blank means no video.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub youtube_id: Option<String>,
}

impl WorkItem {
  /// Trimmed video identifier, or `None` when the work has no video.
  pub fn video_id(&self) -> Option<&str> {
    self
      .youtube_id
      .as_deref()
      .map(str::trim)
      .filter(|id| !id.is_empty())
  }

  /// Returns `true` when `tag` appears anywhere in the tag list.
  pub fn has_tag(&self, tag: Tag) -> bool {
    self.tags.contains(&tag)
  }

  /// First authored tag, shown as the caption in the grid.
  pub fn primary_tag(&self) -> Option<Tag> {
    self.tags.first().copied()
  }
}

/// Optional frontmatter fields attached to a work's notes file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkNotesFrontmatter {
  /// Heading override for the notes section.
  pub title: Option<String>,
  /// Production year.
  pub year: Option<u16>,
  /// Role the author played on the work.
  pub role: Option<String>,
  /// Tools used during production.
  #[serde(default)]
  pub tools: Vec<String>,
  /// External links related to the work.
  #[serde(default)]
  pub links: Vec<String>,
}

/// Rendered "About this work" section for a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkNotes {
  /// Section heading taken from frontmatter or the first markdown heading.
  pub title: Option<String>,
  /// Parsed frontmatter.
  pub meta: WorkNotesFrontmatter,
  /// Markdown body rendered to HTML.
  pub body_html: String,
}
