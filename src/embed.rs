//! Links out of the grid: detail routes and privacy-enhanced video embeds.

use std::sync::OnceLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Host serving YouTube embeds without tracking cookies.
pub const PRIVACY_EMBED_HOST: &str = "www.youtube-nocookie.com";

const EMBED_PARAMS: &str = "rel=0&modestbranding=1&playsinline=1";

/// Characters `encodeURIComponent` leaves unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

fn video_id_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("invalid video id regex"))
}

/// Returns `true` when `id` has the shape of a YouTube video id.
pub fn is_valid_video_id(id: &str) -> bool {
  video_id_pattern().is_match(id)
}

/// Build the privacy-enhanced embed URL for a video, or `None` for a blank id.
pub fn embed_url(video_id: &str) -> Option<String> {
  let id = video_id.trim();
  if id.is_empty() {
    return None;
  }
  Some(format!("https://{PRIVACY_EMBED_HOST}/embed/{id}?{EMBED_PARAMS}"))
}

/// Route of the detail page for a slug, with the slug percent-encoded.
pub fn work_path(slug: &str) -> String {
  format!("/work/{}", utf8_percent_encode(slug, URI_COMPONENT))
}
