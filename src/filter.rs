//! Tag filtering for the works grid.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::models::{Tag, UnknownTag, WorkItem};

/// Label of the chip that clears the filter.
pub const ALL_LABEL: &str = "All";

/// Trait describing items that carry a list of tags.
pub trait Tagged {
  /// Tag value type.
  type Tag: Ord + Clone;

  /// Tags attached to the item, in authored order.
  fn tags(&self) -> &[Self::Tag];
}

impl Tagged for WorkItem {
  type Tag = Tag;

  fn tags(&self) -> &[Tag] {
    &self.tags
  }
}

/// Active selection in the filter strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter<T> {
  /// Show every item.
  All,
  /// Show items carrying this tag.
  Only(T),
}

impl<T> Default for TagFilter<T> {
  fn default() -> Self {
    Self::All
  }
}

impl<T: PartialEq> TagFilter<T> {
  /// Returns `true` when `tags` passes this filter.
  pub fn matches(&self, tags: &[T]) -> bool {
    match self {
      Self::All => true,
      Self::Only(tag) => tags.contains(tag),
    }
  }
}

impl TagFilter<Tag> {
  /// Chips in display order, starting with [`ALL_LABEL`].
  pub fn strip() -> Vec<TagFilter<Tag>> {
    std::iter::once(TagFilter::All)
      .chain(Tag::ALL.into_iter().map(TagFilter::Only))
      .collect()
  }

  /// Label rendered on the chip.
  pub fn label(&self) -> &'static str {
    match self {
      Self::All => ALL_LABEL,
      Self::Only(tag) => tag.label(),
    }
  }
}

impl FromStr for TagFilter<Tag> {
  type Err = UnknownTag;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let value = value.trim();
    if value.is_empty() || value == ALL_LABEL {
      return Ok(Self::All);
    }
    value.parse().map(Self::Only)
  }
}

impl<T: fmt::Display> fmt::Display for TagFilter<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str(ALL_LABEL),
      Self::Only(tag) => fmt::Display::fmt(tag, f),
    }
  }
}

/// Union of the tags used across `items`.
pub fn unique_tags<I: Tagged>(items: &[I]) -> BTreeSet<I::Tag> {
  items
    .iter()
    .flat_map(|item| item.tags().iter().cloned())
    .collect()
}

/// Items passing `selected`, in their original order.
///
/// [`TagFilter::All`] yields every item unchanged.
pub fn filter_by_tag<'a, I: Tagged>(items: &'a [I], selected: &TagFilter<I::Tag>) -> Vec<&'a I> {
  items
    .iter()
    .filter(|item| selected.matches(item.tags()))
    .collect()
}
