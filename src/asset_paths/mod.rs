//! Helpers for turning short resource names into URLs the browser can try.
//!
//! The responsibilities are split so that the base-path handling, the candidate chain and the
//! reference filters can be tested independently. A site may be served from the domain root or
//! from a sub-path, and the media folder may be missing entirely; the candidate chain covers all
//! of those deployments from a single authored name.

mod base;
mod candidates;
mod filters;
mod media;

pub use base::{BASE_HREF_ENV, BasePath, MEDIA_DIR};
pub(crate) use base::read_env;
pub use candidates::{AssetResolver, resolve_candidates, resolve_primary};
pub use filters::{is_absolute_reference, strip_media_prefix};
pub use media::{MediaType, mime_from_extension};
