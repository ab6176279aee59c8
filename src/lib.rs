#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod catalog;
pub mod config;
pub mod embed;
pub mod fallback;
pub mod filter;
pub mod hero;
pub mod models;
pub mod motion;
pub mod notes;

pub use asset_paths::{AssetResolver, BasePath, MediaType, resolve_candidates, resolve_primary};
pub use catalog::{Catalog, CatalogError, CatalogIssue};
pub use config::SiteConfig;
pub use filter::{TagFilter, Tagged, filter_by_tag, unique_tags};
pub use models::{Tag, WorkItem};
pub use motion::{clamp_unit, format_blur_px, map_range_clamped};
