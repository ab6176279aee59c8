//! Component-local state for walking a candidate chain after load failures.

use log::debug;

/// Position within an ordered list of candidate sources.
///
/// The cursor only moves forward, one step per reported failure, and stays on the last
/// candidate once the list is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCursor {
  sources: Vec<String>,
  index: usize,
}

impl SourceCursor {
  /// Start at the first of `sources`.
  pub fn new(sources: Vec<String>) -> Self {
    Self { sources, index: 0 }
  }

  /// Source currently displayed, `None` for an empty chain.
  pub fn current(&self) -> Option<&str> {
    self.sources.get(self.index).map(String::as_str)
  }

  /// Index of the current source.
  pub fn index(&self) -> usize {
    self.index
  }

  /// All candidates in order.
  pub fn sources(&self) -> &[String] {
    &self.sources
  }

  /// Returns `true` when no later candidate remains.
  pub fn is_exhausted(&self) -> bool {
    self.index + 1 >= self.sources.len()
  }

  /// React to a load failure of the current source.
  ///
  /// Returns `true` when the cursor moved to another candidate.
  pub fn advance(&mut self) -> bool {
    if self.is_exhausted() {
      return false;
    }
    self.index += 1;
    debug!("falling back to {:?}", self.current());
    true
  }

  /// Return to the first candidate, as on navigation.
  pub fn reset(&mut self) {
    self.index = 0;
  }
}

/// Ordered record of URLs that failed to load, shown by the debug overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetErrorLog {
  failed: Vec<String>,
}

impl AssetErrorLog {
  /// Create an empty log.
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a failed URL. Returns `false` when it was already recorded.
  pub fn record(&mut self, url: &str) -> bool {
    if self.failed.iter().any(|seen| seen == url) {
      return false;
    }
    self.failed.push(url.to_string());
    true
  }

  /// Failed URLs in the order they were first reported.
  pub fn entries(&self) -> &[String] {
    &self.failed
  }

  /// Returns `true` when nothing has failed.
  pub fn is_empty(&self) -> bool {
    self.failed.is_empty()
  }

  /// Forget all recorded failures.
  pub fn clear(&mut self) {
    self.failed.clear();
  }
}

/// Report a load failure of the cursor's current source to the log, then advance.
pub fn handle_load_error(cursor: &mut SourceCursor, log: &mut AssetErrorLog) -> bool {
  if let Some(url) = cursor.current() {
    log.record(url);
  }
  cursor.advance()
}
