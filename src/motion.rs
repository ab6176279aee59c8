//! Numeric helpers driving scroll-linked visual transforms.

/// Clamp `value` into `[0, 1]`. Non-finite input maps to `0`.
pub fn clamp_unit(value: f64) -> f64 {
  if value.is_finite() {
    value.clamp(0.0, 1.0)
  } else {
    0.0
  }
}

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The normalised position is clamped to `[0, 1]` before scaling, so the result never leaves
/// the output range. A degenerate input range, or a non-finite `x`/`in_min`/`in_max`, yields
/// `out_min` exactly.
pub fn map_range_clamped(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
  if !x.is_finite() || !in_min.is_finite() || !in_max.is_finite() || in_min == in_max {
    return out_min;
  }

  let t = ((x - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
  if t.is_nan() {
    return out_min;
  }
  out_min + (out_max - out_min) * t
}

/// Format a CSS blur filter. Negative or non-finite radii render as `0`.
///
/// Radii are written in plain positional notation, never with an exponent.
pub fn format_blur_px(px: f64) -> String {
  let radius = if px.is_finite() && px > 0.0 { px } else { 0.0 };
  format!("blur({radius}px)")
}

/// Piecewise-linear curve sampled by scroll progress.
///
/// Sampling before the first stop or after the last one holds the end values.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
  stops: Vec<(f64, f64)>,
}

impl Keyframes {
  /// Build a curve from `(input, output)` stops. Stops with a non-finite input are dropped and
  /// the rest are ordered by input.
  pub fn new(stops: impl IntoIterator<Item = (f64, f64)>) -> Self {
    let mut stops: Vec<(f64, f64)> = stops
      .into_iter()
      .filter(|(input, _)| input.is_finite())
      .collect();
    stops.sort_by(|a, b| a.0.total_cmp(&b.0));
    Self { stops }
  }

  /// Convenience constructor mirroring `inputs -> outputs` tables.
  pub fn from_tables(inputs: &[f64], outputs: &[f64]) -> Self {
    Self::new(inputs.iter().copied().zip(outputs.iter().copied()))
  }

  /// Sample the curve. An empty curve samples as `0`.
  pub fn sample(&self, progress: f64) -> f64 {
    let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
      return 0.0;
    };

    if progress.is_nan() || progress <= first.0 {
      return first.1;
    }
    if progress >= last.0 {
      return last.1;
    }

    self
      .stops
      .windows(2)
      .find(|pair| progress <= pair[1].0)
      .map(|pair| map_range_clamped(progress, pair[0].0, pair[1].0, pair[0].1, pair[1].1))
      .unwrap_or(last.1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clamp_unit_bounds_finite_values() {
    assert_eq!(clamp_unit(-5.0), 0.0);
    assert_eq!(clamp_unit(5.0), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
    for value in [-1e300, -1.0, -0.0, 0.0, 0.5, 1.0, 7.0, 1e300] {
      let clamped = clamp_unit(value);
      assert!((0.0..=1.0).contains(&clamped), "{value} -> {clamped}");
    }
  }

  #[test]
  fn clamp_unit_zeroes_non_finite() {
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(f64::INFINITY), 0.0);
    assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
  }

  #[test]
  fn map_range_maps_center_to_center() {
    assert_eq!(map_range_clamped(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
  }

  #[test]
  fn map_range_clamps_outside_input() {
    assert_eq!(map_range_clamped(-1.0, 0.0, 1.0, 10.0, 20.0), 10.0);
    assert_eq!(map_range_clamped(2.0, 0.0, 1.0, 10.0, 20.0), 20.0);
  }

  #[test]
  fn map_range_handles_degenerate_input() {
    for x in [-3.0, 0.5, 1.0, 42.0, f64::NAN] {
      assert_eq!(map_range_clamped(x, 1.0, 1.0, 10.0, 20.0), 10.0);
    }
    assert_eq!(map_range_clamped(f64::NAN, 0.0, 1.0, 10.0, 20.0), 10.0);
    assert_eq!(map_range_clamped(0.5, f64::INFINITY, 1.0, 10.0, 20.0), 10.0);
  }

  #[test]
  fn map_range_supports_descending_ranges() {
    assert_eq!(map_range_clamped(0.25, 1.0, 0.0, 0.0, 100.0), 75.0);
    assert_eq!(map_range_clamped(0.5, 0.0, 1.0, 24.0, 0.0), 12.0);
  }

  #[test]
  fn formats_blur() {
    assert_eq!(format_blur_px(-3.0), "blur(0px)");
    assert_eq!(format_blur_px(5.0), "blur(5px)");
    assert_eq!(format_blur_px(2.5), "blur(2.5px)");
    assert_eq!(format_blur_px(f64::NAN), "blur(0px)");
    assert_eq!(format_blur_px(f64::INFINITY), "blur(0px)");
    assert_eq!(format_blur_px(-0.0), "blur(0px)");
  }

  #[test]
  fn blur_uses_positional_notation_at_extremes() {
    assert_eq!(format_blur_px(1e21), "blur(1000000000000000000000px)");
    assert_eq!(format_blur_px(1e-7), "blur(0.0000001px)");
  }

  #[test]
  fn keyframes_interpolate_between_stops() {
    let curve = Keyframes::from_tables(&[0.0, 0.5, 1.0], &[24.0, 0.0, -32.0]);
    assert_eq!(curve.sample(0.0), 24.0);
    assert_eq!(curve.sample(0.25), 12.0);
    assert_eq!(curve.sample(0.5), 0.0);
    assert_eq!(curve.sample(0.75), -16.0);
    assert_eq!(curve.sample(1.0), -32.0);
  }

  #[test]
  fn keyframes_hold_end_values() {
    let curve = Keyframes::from_tables(&[0.2, 0.8], &[1.0, 3.0]);
    assert_eq!(curve.sample(-4.0), 1.0);
    assert_eq!(curve.sample(9.0), 3.0);
    assert_eq!(curve.sample(f64::NAN), 1.0);
  }

  #[test]
  fn keyframes_sort_and_drop_bad_stops() {
    let curve = Keyframes::new([(1.0, 10.0), (f64::NAN, 99.0), (0.0, 0.0)]);
    assert_eq!(curve.sample(0.5), 5.0);
    assert_eq!(Keyframes::new([]).sample(0.5), 0.0);
  }
}
