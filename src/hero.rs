//! Presentation values for the scroll-animated hero and the about image.

use serde::{Deserialize, Serialize};

use crate::motion::{Keyframes, clamp_unit};

/// Returns `true` when a logo overlay source was provided.
pub fn is_logo_overlay_enabled(src: Option<&str>) -> bool {
  src.is_some_and(|value| !value.is_empty())
}

/// Blend the legacy MP4 logo only when no alpha-channel WebM is available.
pub fn should_use_blend(webm_alpha_src: Option<&str>) -> bool {
  !is_logo_overlay_enabled(webm_alpha_src)
}

/// How an image fills its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
  /// Fill the box, cropping overflow.
  Cover,
  /// Fit inside the box without cropping.
  Contain,
}

impl ObjectFit {
  /// Pick a fit from the image's natural size and the viewport size.
  ///
  /// Images narrower than the viewport are contained so portrait artwork is not cropped.
  /// A zero-height image or viewport is treated as square.
  pub fn for_aspect(width: f64, height: f64, viewport_width: f64, viewport_height: f64) -> Self {
    if aspect(width, height) < aspect(viewport_width, viewport_height) {
      Self::Contain
    } else {
      Self::Cover
    }
  }

  /// CSS keyword.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Cover => "cover",
      Self::Contain => "contain",
    }
  }
}

fn aspect(width: f64, height: f64) -> f64 {
  let ratio = width / height;
  if ratio.is_finite() && ratio > 0.0 {
    ratio
  } else {
    1.0
  }
}

/// Tunables for the hero backdrop and logo overlay.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSettings {
  /// Background video, resolved through the asset resolver.
  pub hero_video_src: String,
  /// Legacy MP4 logo.
  pub logo_video_src: String,
  /// WebM logo with alpha channel.
  pub logo_webm_alpha_src: String,
  /// Opacity of the logo overlay.
  pub logo_opacity: f64,
  /// Vertical offset of the logo overlay in percent; negative moves up.
  pub logo_offset_y_pct: f64,
  /// Opacity of the background video.
  pub bg_opacity: f64,
  /// Opacity of the hero page video; defaults to `bg_opacity`.
  pub hero_bg_opacity: Option<f64>,
  /// Darken the edges of the background video.
  pub show_vignette: bool,
}

impl Default for HeroSettings {
  fn default() -> Self {
    Self {
      hero_video_src: "hero.mp4".into(),
      logo_video_src: "logo.mp4".into(),
      logo_webm_alpha_src: "logo.webm".into(),
      logo_opacity: 1.0,
      logo_offset_y_pct: 0.0,
      bg_opacity: 0.3,
      hero_bg_opacity: None,
      show_vignette: false,
    }
  }
}

impl HeroSettings {
  /// Background opacity, clamped.
  pub fn background_opacity(&self) -> f64 {
    clamp_unit(self.bg_opacity)
  }

  /// Hero page opacity, falling back to the background opacity.
  pub fn hero_opacity(&self) -> f64 {
    clamp_unit(self.hero_bg_opacity.unwrap_or(self.bg_opacity))
  }

  /// Logo overlay opacity, clamped.
  pub fn logo_opacity(&self) -> f64 {
    clamp_unit(self.logo_opacity)
  }

  /// Whether the alpha WebM logo should be rendered.
  pub fn logo_overlay_enabled(&self) -> bool {
    is_logo_overlay_enabled(Some(self.logo_webm_alpha_src.as_str()))
  }
}

/// Transform values for the hero copy at a given scroll progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroFrame {
  /// Heading translate-y in pixels.
  pub heading_y: f64,
  /// Heading opacity.
  pub heading_opacity: f64,
  /// Heading scale.
  pub heading_scale: f64,
  /// Paragraph translate-y in pixels.
  pub paragraph_y: f64,
  /// Paragraph opacity.
  pub paragraph_opacity: f64,
}

impl HeroFrame {
  /// Sample the hero curves. `0` is the hero top at the viewport top, `1` its bottom there.
  pub fn at(progress: f64) -> Self {
    Self {
      heading_y: Keyframes::from_tables(&[0.0, 0.5, 1.0], &[24.0, 0.0, -32.0]).sample(progress),
      heading_opacity: Keyframes::from_tables(&[0.0, 0.15, 0.6, 1.0], &[0.0, 1.0, 0.92, 0.85])
        .sample(progress),
      heading_scale: Keyframes::from_tables(&[0.0, 1.0], &[1.02, 1.0]).sample(progress),
      paragraph_y: Keyframes::from_tables(&[0.0, 0.6, 1.0], &[16.0, 0.0, -20.0]).sample(progress),
      paragraph_opacity: Keyframes::from_tables(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 0.95, 0.9])
        .sample(progress),
    }
  }
}

/// Transform values for the about image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AboutFrame {
  /// Translate-y in pixels.
  pub y: f64,
  /// Opacity.
  pub opacity: f64,
  /// Scale.
  pub scale: f64,
}

impl AboutFrame {
  /// Sample the about-image curves.
  pub fn at(progress: f64) -> Self {
    Self {
      y: Keyframes::from_tables(&[0.0, 1.0], &[32.0, 0.0]).sample(progress),
      opacity: Keyframes::from_tables(&[0.0, 0.2, 1.0], &[0.0, 1.0, 1.0]).sample(progress),
      scale: Keyframes::from_tables(&[0.0, 1.0], &[1.05, 1.0]).sample(progress),
    }
  }
}
