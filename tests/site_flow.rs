use std::collections::BTreeSet;

use portfolio_kit::embed::{embed_url, work_path};
use portfolio_kit::fallback::{AssetErrorLog, SourceCursor, handle_load_error};
use portfolio_kit::{
  AssetResolver, BasePath, Catalog, Tag, TagFilter, filter_by_tag, format_blur_px, unique_tags,
};

#[test]
fn grid_filter_and_detail_lookup() {
  let catalog = Catalog::builtin();
  let works = catalog.works();

  let all: TagFilter<Tag> = "All".parse().expect("All is a valid filter");
  let everything = filter_by_tag(works, &all);
  assert_eq!(everything.len(), works.len());

  let chosen = filter_by_tag(works, &TagFilter::Only(Tag::Performance));
  let slugs: Vec<&str> = chosen.iter().map(|work| work.slug.as_str()).collect();
  assert_eq!(slugs, vec!["xeekin", "jangMaRoo"]);

  let detail = catalog
    .find_by_slug(slugs[1])
    .expect("slug from the grid resolves to a detail page");
  assert_eq!(work_path(&detail.slug), "/work/jangMaRoo");
  assert_eq!(
    detail.video_id().and_then(embed_url).as_deref(),
    Some("https://www.youtube-nocookie.com/embed/_-kpnAqf3mM?rel=0&modestbranding=1&playsinline=1")
  );
}

#[test]
fn every_authored_tag_is_declared() {
  let declared: BTreeSet<Tag> = Tag::ALL.into_iter().collect();
  assert!(unique_tags(Catalog::builtin().works()).is_subset(&declared));
}

#[test]
fn thumbnail_falls_back_through_chain() {
  let resolver = AssetResolver::new(BasePath::from_href("/portfolio"));
  let xeekin = Catalog::builtin()
    .find_by_slug("xeekin")
    .expect("xeekin is authored");

  let mut cursor = SourceCursor::new(resolver.thumbnail_sources(&xeekin.thumb));
  let mut errors = AssetErrorLog::new();
  assert_eq!(cursor.current(), Some("/portfolio/media/works/XEEKIN.jpg"));

  assert!(handle_load_error(&mut cursor, &mut errors));
  assert_eq!(cursor.current(), Some("/media/works/XEEKIN.jpg"));
  assert!(handle_load_error(&mut cursor, &mut errors));
  assert!(!handle_load_error(&mut cursor, &mut errors));

  assert_eq!(cursor.current(), Some("/works/XEEKIN.jpg"));
  assert_eq!(errors.entries().len(), 3);
}

#[test]
fn blur_formatting_keeps_precision() {
  assert_eq!(format_blur_px(2.5), "blur(2.5px)");
  assert_eq!(format_blur_px(-3.0), "blur(0px)");
}
