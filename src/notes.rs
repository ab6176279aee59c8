//! Authored "About this work" notes: markdown files with YAML frontmatter.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gray_matter::{Matter, engine::YAML};
use log::warn;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

use crate::models::{WorkNotes, WorkNotesFrontmatter};

/// Errors that can occur while reading a notes file.
#[derive(Debug)]
pub struct NotesError {
  /// Path that caused the error.
  pub path: PathBuf,
  /// Source I/O error.
  pub source: std::io::Error,
}

impl std::fmt::Display for NotesError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "failed to read {}: {}", self.path.display(), self.source)
  }
}

impl std::error::Error for NotesError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.source)
  }
}

fn markdown_options() -> Options {
  let mut options = Options::empty();
  options.insert(Options::ENABLE_TABLES);
  options.insert(Options::ENABLE_FOOTNOTES);
  options.insert(Options::ENABLE_STRIKETHROUGH);
  options.insert(Options::ENABLE_SMART_PUNCTUATION);
  options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
  options
}

/// Parse a notes document. Unreadable or absent frontmatter yields default metadata.
pub fn parse_work_notes(content: &str) -> WorkNotes {
  let matter = Matter::<YAML>::new();
  let (meta, body) = match matter.parse(content) {
    Ok(parsed) => {
      let meta: WorkNotesFrontmatter = parsed
        .data
        .and_then(|yaml| serde_yaml::from_value::<WorkNotesFrontmatter>(yaml).ok())
        .unwrap_or_default();
      (meta, parsed.content)
    }
    Err(_) => (WorkNotesFrontmatter::default(), content.to_string()),
  };

  let title = meta.title.clone().or_else(|| extract_first_heading(&body));

  let mut body_html = String::new();
  html::push_html(&mut body_html, Parser::new_ext(&body, markdown_options()));

  WorkNotes {
    title,
    meta,
    body_html,
  }
}

/// Load `<dir>/<slug>.md`. A missing file means the work has no notes.
///
/// Slugs that could name a file outside `dir` never have notes.
pub fn load_work_notes(dir: &Path, slug: &str) -> Result<Option<WorkNotes>, NotesError> {
  if !is_plain_file_stem(slug) {
    warn!("refusing to load notes for slug '{slug}'");
    return Ok(None);
  }

  let path = dir.join(format!("{slug}.md"));
  match fs::read_to_string(&path) {
    Ok(content) => Ok(Some(parse_work_notes(&content))),
    Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
    Err(err) => Err(NotesError { path, source: err }),
  }
}

fn is_plain_file_stem(slug: &str) -> bool {
  !slug.trim().is_empty() && !slug.contains(['/', '\\']) && slug != "." && slug != ".."
}

fn extract_first_heading(body: &str) -> Option<String> {
  let parser = Parser::new_ext(body, markdown_options());
  let mut in_heading = false;
  let mut heading_text = String::new();

  for event in parser {
    match event {
      Event::Start(Tag::Heading { .. }) => {
        in_heading = true;
        heading_text.clear();
      }
      Event::End(TagEnd::Heading(_)) => {
        if in_heading && !heading_text.trim().is_empty() {
          return Some(heading_text.trim().to_string());
        }
        in_heading = false;
      }
      Event::Text(text) | Event::Code(text) if in_heading => {
        heading_text.push_str(&text);
      }
      _ => {}
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn parses_frontmatter_and_renders_body() {
    let notes = parse_work_notes(
      "---\nyear: 2021\nrole: Interaction design\ntools: [TouchDesigner, Unity]\n---\n# Fog Screen\n\nProjected onto *fog*.\n",
    );

    assert_eq!(notes.meta.year, Some(2021));
    assert_eq!(notes.meta.role.as_deref(), Some("Interaction design"));
    assert_eq!(notes.meta.tools, vec!["TouchDesigner", "Unity"]);
    assert_eq!(notes.title.as_deref(), Some("Fog Screen"));
    assert!(notes.body_html.contains("<em>fog</em>"));
  }

  #[test]
  fn frontmatter_title_wins_over_heading() {
    let notes = parse_work_notes("---\ntitle: About Groo\n---\n# Groo\n");
    assert_eq!(notes.title.as_deref(), Some("About Groo"));
  }

  #[test]
  fn plain_markdown_has_default_meta() {
    let notes = parse_work_notes("Just a paragraph.");
    assert_eq!(notes.meta, WorkNotesFrontmatter::default());
    assert_eq!(notes.title, None);
    assert!(notes.body_html.contains("<p>Just a paragraph.</p>"));
  }

  #[test]
  fn missing_notes_file_is_none() {
    let temp = tempdir().expect("failed to create temp dir");
    let notes = load_work_notes(temp.path(), "groo").expect("missing file is not an error");
    assert!(notes.is_none());
  }

  #[test]
  fn slugs_cannot_escape_notes_dir() {
    let temp = tempdir().expect("failed to create temp dir");
    let notes_dir = temp.path().join("notes");
    fs::create_dir(&notes_dir).expect("create notes dir");
    fs::write(temp.path().join("secret.md"), "# Secret").expect("write outside file");

    for slug in ["../secret", "..", ".", "", "a/b", "a\\b"] {
      let notes = load_work_notes(&notes_dir, slug).expect("unsafe slugs are not errors");
      assert!(notes.is_none(), "{slug}");
    }
    assert!(is_plain_file_stem("TD－with－instagram"));
  }

  #[test]
  fn loads_notes_by_slug() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(temp.path().join("groo.md"), "# Groo\n\nInstallation.").expect("write notes");
    let notes = load_work_notes(temp.path(), "groo")
      .expect("notes should load")
      .expect("notes should exist");
    assert_eq!(notes.title.as_deref(), Some("Groo"));
  }
}
