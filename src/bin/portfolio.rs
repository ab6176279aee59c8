//! portfolio CLI: inspect the work catalog and asset resolution.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use portfolio_kit::asset_paths::mime_from_extension;
use portfolio_kit::embed::{embed_url, work_path};
use portfolio_kit::notes::load_work_notes;
use portfolio_kit::{AssetResolver, BasePath, Catalog, SiteConfig, Tag, TagFilter, filter_by_tag};

#[derive(Parser)]
#[command(name = "portfolio", about = "Inspect the portfolio work catalog")]
struct Cli {
  /// Catalog file (JSON or YAML) replacing the built-in works
  #[arg(long, global = true)]
  catalog: Option<PathBuf>,
  /// Directory holding portfolio.config.json
  #[arg(long, global = true, default_value = ".")]
  config_dir: PathBuf,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List works, optionally filtered by tag
  Works {
    /// Tag to filter by ("All" for every work)
    #[arg(long, default_value = "All")]
    tag: String,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
  },
  /// List filter chips and how many works each selects
  Tags,
  /// Show the candidate URLs for a resource name
  Assets {
    /// Resource name, e.g. hero.mp4
    name: String,
    /// Deployment base href overriding config and environment
    #[arg(long)]
    base: Option<String>,
  },
  /// Show a single work by slug
  Show {
    /// Work slug
    slug: String,
  },
  /// Validate the catalog
  Check,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cli = Cli::parse();
  let config = SiteConfig::discover(&cli.config_dir);
  let catalog = load_catalog(&cli, &config)?;

  match cli.command {
    Command::Works { tag, json } => {
      let filter: TagFilter<Tag> = tag.parse().with_context(|| format!("invalid tag '{tag}'"))?;
      let works = filter_by_tag(catalog.works(), &filter);
      if json {
        println!("{}", serde_json::to_string_pretty(&works)?);
      } else if works.is_empty() {
        println!("No works for the selected tag.");
      } else {
        for work in works {
          let caption = work.primary_tag().map(Tag::label).unwrap_or_default();
          println!("{:<24} {:<20} {}", work.slug, caption, work.title);
        }
      }
    }
    Command::Tags => {
      for chip in TagFilter::strip() {
        let count = filter_by_tag(catalog.works(), &chip).len();
        println!("{:<20} {}", chip.label(), count);
      }
    }
    Command::Assets { name, base } => {
      let resolver = match base {
        Some(href) => AssetResolver::new(BasePath::from_href(&href)),
        None => config.resolver(),
      };
      info!("resolving against base {}", resolver.base());
      for candidate in resolver.candidates(&name) {
        match mime_from_extension(&candidate) {
          Some(media_type) => println!("{candidate}  ({media_type})"),
          None => println!("{candidate}"),
        }
      }
    }
    Command::Show { slug } => {
      let Some(work) = catalog.find_by_slug(&slug) else {
        bail!("Work not found: {slug}");
      };
      let resolver = config.resolver();

      println!("{}", work.title);
      println!("route:  {}", work_path(&work.slug));
      println!(
        "tags:   {}",
        work.tags.iter().map(|tag| tag.label()).collect::<Vec<_>>().join(", ")
      );
      println!("thumb:  {}", resolver.thumbnail_sources(&work.thumb).join(" -> "));
      match work.video_id().and_then(embed_url) {
        Some(url) => println!("video:  {url}"),
        None => println!("video:  this work has no youtubeId yet"),
      }

      if let Some(dir) = config.notes_directory(&cli.config_dir) {
        if let Some(notes) = load_work_notes(&dir, &work.slug)? {
          println!();
          println!("{}", notes.title.as_deref().unwrap_or("About this work"));
          println!("{}", notes.body_html);
        }
      }
    }
    Command::Check => {
      let issues = catalog.validate();
      if issues.is_empty() {
        info!("catalog ok: {} works", catalog.len());
      } else {
        for issue in &issues {
          warn!("{issue}");
        }
        bail!("catalog has {} problem(s)", issues.len());
      }
    }
  }

  Ok(())
}

fn load_catalog(cli: &Cli, config: &SiteConfig) -> Result<Catalog> {
  let path = cli
    .catalog
    .clone()
    .or_else(|| config.catalog_file(&cli.config_dir));

  match path {
    Some(path) => {
      let catalog = Catalog::load_from_path(&path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))?;
      info!("loaded {} works from {}", catalog.len(), path.display());
      Ok(catalog)
    }
    None => Ok(Catalog::builtin().clone()),
  }
}
