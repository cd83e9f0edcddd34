//! Per-channel interpolation over `[f64; 4]` channel arrays.
//!
//! The same two functions service RGBA and HSVA by parameterizing on each
//! shape's channel maxima: channels with a cyclic range (hue, 0..=255 RGB)
//! wrap modulo their maximum, channels capped at 1 (saturation, value,
//! alpha) are only guarded against going negative.

use crate::color::{ColorValue, Hsva, Rgba};

/// Hue rotation direction for HSV interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueArc {
    /// Increasing-hue traversal of the color wheel.
    #[default]
    Clockwise,
    /// Decreasing-hue (trigonometric) traversal.
    CounterClockwise,
    /// Whichever arc between the two hues is shorter.
    Short,
    /// Whichever arc between the two hues is longer.
    Long,
}

impl HueArc {
    /// Resolves the arc to a boolean direction for the given endpoint hues:
    /// `true` means counter-clockwise (trigonometric).
    pub fn trigonometric(self, h1: f64, h2: f64) -> bool {
        match self {
            HueArc::Clockwise => false,
            HueArc::CounterClockwise => true,
            HueArc::Short | HueArc::Long => {
                let trig_shortest = (h1 < h2 && h2 - h1 < 180.0) || (h1 > h2 && h1 - h2 > 180.0);
                match self {
                    HueArc::Long => trig_shortest,
                    _ => !trig_shortest,
                }
            }
        }
    }
}

/// Computes the per-channel step size between `start` and `end`.
///
/// `steps` may be fractional (the continuous-sampling path passes a scaled
/// segment width); zero steps yield zero deltas.
pub fn stepize(start: [f64; 4], end: [f64; 4], steps: f64) -> [f64; 4] {
    let mut delta = [0.0; 4];
    if steps != 0.0 {
        for k in 0..4 {
            delta[k] = (end[k] - start[k]) / steps;
        }
    }
    delta
}

/// Evaluates `start + delta * i` per channel, wrapped into each channel's
/// range.
///
/// A negative raw value is lifted by one full range; a channel whose maximum
/// is not 1 wraps modulo that maximum (hue past 360, RGB past 256); channels
/// with maximum 1 pass through unchanged.
pub fn interpolate(delta: [f64; 4], start: [f64; 4], i: f64, max: [f64; 4]) -> [f64; 4] {
    let mut color = [0.0; 4];
    for k in 0..4 {
        let raw = delta[k] * i + start[k];
        color[k] = if raw < 0.0 {
            raw + max[k]
        } else if max[k] != 1.0 {
            raw % max[k]
        } else {
            raw
        };
    }
    color
}

/// Computes the signed per-step hue delta between `h1` and `h2`.
///
/// The raw angular difference follows the requested direction around the
/// wheel; the sign is negative for counter-clockwise traversal so that
/// `interpolate` wraps hues below 0 back up through 360.
pub fn hue_delta(h1: f64, h2: f64, steps: f64, trigonometric: bool) -> f64 {
    let diff = if (h1 <= h2 && !trigonometric) || (h1 >= h2 && trigonometric) {
        h2 - h1
    } else if trigonometric {
        360.0 - h2 + h1
    } else {
        360.0 - h1 + h2
    };
    let sign = if trigonometric { -1.0 } else { 1.0 };
    sign * diff.abs() / steps
}

/// Interpolates one segment in RGBA space: `start` included, `end` excluded.
pub fn interpolate_rgb(start: ColorValue, end: ColorValue, steps: usize) -> Vec<ColorValue> {
    let from = start.to_rgba().to_array();
    let to = end.to_rgba().to_array();
    let delta = stepize(from, to, steps as f64);

    let mut segment = vec![start];
    for i in 1..steps {
        let channels = interpolate(delta, from, i as f64, Rgba::MAX);
        segment.push(ColorValue::from(Rgba::from_array(channels)));
    }
    segment
}

/// Interpolates one segment in HSVA space: `start` included, `end` excluded.
///
/// The hue channel's delta is recomputed from the requested direction; the
/// other channels step linearly.
pub fn interpolate_hsv(
    start: ColorValue,
    end: ColorValue,
    steps: usize,
    trigonometric: bool,
) -> Vec<ColorValue> {
    let from = start.to_hsva().to_array();
    let to = end.to_hsva().to_array();
    let mut delta = stepize(from, to, steps as f64);
    delta[0] = hue_delta(from[0], to[0], steps as f64, trigonometric);

    let mut segment = vec![start];
    for i in 1..steps {
        let channels = interpolate(delta, from, i as f64, Hsva::MAX);
        segment.push(ColorValue::from(Hsva::from_array(channels)));
    }
    segment
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- stepize --

    #[test]
    fn stepize_divides_channel_difference() {
        let delta = stepize([0.0, 100.0, 255.0, 1.0], [100.0, 0.0, 255.0, 0.0], 4.0);
        assert!(approx_eq(delta[0], 25.0));
        assert!(approx_eq(delta[1], -25.0));
        assert!(approx_eq(delta[2], 0.0));
        assert!(approx_eq(delta[3], -0.25));
    }

    #[test]
    fn stepize_zero_steps_gives_zero_deltas() {
        let delta = stepize([10.0, 20.0, 30.0, 1.0], [50.0, 60.0, 70.0, 0.0], 0.0);
        assert_eq!(delta, [0.0; 4]);
    }

    #[test]
    fn stepize_accepts_fractional_steps() {
        let delta = stepize([0.0, 0.0, 0.0, 0.0], [10.0, 0.0, 0.0, 0.0], 2.5);
        assert!(approx_eq(delta[0], 4.0));
    }

    // -- interpolate --

    #[test]
    fn interpolate_steps_linearly() {
        let start = [255.0, 0.0, 0.0, 1.0];
        let delta = stepize(start, [0.0, 0.0, 255.0, 1.0], 4.0);
        let mid = interpolate(delta, start, 2.0, Rgba::MAX);
        assert!(approx_eq(mid[0], 127.5), "r: {}", mid[0]);
        assert!(approx_eq(mid[2], 127.5), "b: {}", mid[2]);
    }

    #[test]
    fn interpolate_lifts_negative_values_by_one_range() {
        // delta drives the hue below zero: -30 wraps to 330
        let raw = interpolate([-40.0, 0.0, 0.0, 0.0], [10.0, 0.5, 0.5, 1.0], 1.0, Hsva::MAX);
        assert!(approx_eq(raw[0], 330.0), "h: {}", raw[0]);
    }

    #[test]
    fn interpolate_wraps_cyclic_channels_modulo_max() {
        let raw = interpolate([40.0, 0.0, 0.0, 0.0], [350.0, 0.5, 0.5, 1.0], 1.0, Hsva::MAX);
        assert!(approx_eq(raw[0], 30.0), "h: {}", raw[0]);
    }

    #[test]
    fn interpolate_never_wraps_unit_channels() {
        // saturation at exactly 1.0 must stay 1.0, not wrap to 0
        let raw = interpolate([0.0, 0.0, 0.0, 0.0], [180.0, 1.0, 1.0, 1.0], 1.0, Hsva::MAX);
        assert!(approx_eq(raw[1], 1.0), "s: {}", raw[1]);
        assert!(approx_eq(raw[2], 1.0), "v: {}", raw[2]);
        assert!(approx_eq(raw[3], 1.0), "a: {}", raw[3]);
    }

    // -- hue direction --

    #[test]
    fn hue_delta_clockwise_increasing() {
        // 30 -> 90 clockwise: +60 over 2 steps
        assert!(approx_eq(hue_delta(30.0, 90.0, 2.0, false), 30.0));
    }

    #[test]
    fn hue_delta_clockwise_through_360() {
        // 350 -> 10 clockwise wraps up through 360: diff 20
        assert!(approx_eq(hue_delta(350.0, 10.0, 2.0, false), 10.0));
    }

    #[test]
    fn hue_delta_trigonometric_decreasing() {
        // 90 -> 30 counter-clockwise is the direct descending arc: -60 over 2 steps
        assert!(approx_eq(hue_delta(90.0, 30.0, 2.0, true), -30.0));
    }

    #[test]
    fn hue_delta_trigonometric_through_zero() {
        // 10 -> 350 counter-clockwise passes through 0: diff 20, negative
        assert!(approx_eq(hue_delta(10.0, 350.0, 2.0, true), -10.0));
    }

    #[test]
    fn short_arc_picks_smaller_angle() {
        // 350 vs 10: direct clockwise distance is 20 -> not trigonometric
        assert!(!HueArc::Short.trigonometric(350.0, 10.0));
        // 10 vs 350: clockwise distance is 340 -> trigonometric is shorter
        assert!(HueArc::Short.trigonometric(10.0, 350.0));
        // 30 vs 90: clockwise 60 is already shortest
        assert!(!HueArc::Short.trigonometric(30.0, 90.0));
    }

    #[test]
    fn long_arc_is_opposite_of_short() {
        for (h1, h2) in [(350.0, 10.0), (10.0, 350.0), (30.0, 90.0), (200.0, 100.0)] {
            assert_ne!(
                HueArc::Short.trigonometric(h1, h2),
                HueArc::Long.trigonometric(h1, h2),
                "short and long must disagree for ({h1}, {h2})"
            );
        }
    }

    #[test]
    fn explicit_directions_ignore_hues() {
        assert!(!HueArc::Clockwise.trigonometric(10.0, 350.0));
        assert!(HueArc::CounterClockwise.trigonometric(350.0, 10.0));
    }

    #[test]
    fn default_arc_is_clockwise() {
        assert_eq!(HueArc::default(), HueArc::Clockwise);
    }

    // -- segment interpolators --

    #[test]
    fn interpolate_rgb_includes_start_excludes_end() {
        let red = ColorValue::parse("red").unwrap();
        let blue = ColorValue::parse("blue").unwrap();
        let segment = interpolate_rgb(red, blue, 4);

        assert_eq!(segment.len(), 4);
        assert_eq!(segment[0], red);
        // last element is one step short of blue
        let last = segment[3].to_rgba();
        assert!(approx_eq(last.r, 63.75), "r: {}", last.r);
        assert!(approx_eq(last.b, 191.25), "b: {}", last.b);
    }

    #[test]
    fn interpolate_rgb_red_to_blue_channel_ramp() {
        let red = ColorValue::parse("red").unwrap();
        let blue = ColorValue::parse("blue").unwrap();
        let segment = interpolate_rgb(red, blue, 4);

        let expected_r = [255, 191, 128, 64];
        for (color, want) in segment.iter().zip(expected_r) {
            assert_eq!(color.to_rgba8()[0], want);
        }
    }

    #[test]
    fn interpolate_hsv_respects_direction() {
        let red = ColorValue::parse("red").unwrap(); // h = 0
        let green = ColorValue::parse("#00ff00").unwrap(); // h = 120

        let clockwise = interpolate_hsv(red, green, 4, false);
        // hues climb 0 -> 30 -> 60 -> 90
        assert!(approx_eq(clockwise[1].to_hsva().h, 30.0));
        assert!(approx_eq(clockwise[2].to_hsva().h, 60.0));

        let counter = interpolate_hsv(red, green, 4, true);
        // hues descend through 360: 0 -> 300 -> 240 -> 180
        assert!(approx_eq(counter[1].to_hsva().h, 300.0), "h: {}", counter[1].to_hsva().h);
        assert!(approx_eq(counter[2].to_hsva().h, 240.0), "h: {}", counter[2].to_hsva().h);
    }

    #[test]
    fn interpolate_hsv_single_step_returns_only_start() {
        let a = ColorValue::parse("red").unwrap();
        let b = ColorValue::parse("lime").unwrap();
        let segment = interpolate_hsv(a, b, 1, false);
        assert_eq!(segment.len(), 1);
        assert_eq!(segment[0], a);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn interpolate_hue_stays_in_range(
                h1 in 0.0_f64..360.0,
                h2 in 0.0_f64..360.0,
                trig in any::<bool>(),
                i in 0_u32..8,
            ) {
                let delta = hue_delta(h1, h2, 8.0, trig);
                let start = [h1, 0.5, 0.5, 1.0];
                let out = interpolate([delta, 0.0, 0.0, 0.0], start, f64::from(i), Hsva::MAX);
                prop_assert!(
                    out[0] >= 0.0 && out[0] < 360.0,
                    "hue {} out of range for h1={h1} h2={h2} trig={trig} i={i}", out[0]
                );
            }

            #[test]
            fn hue_delta_sign_follows_direction(
                h1 in 0.0_f64..360.0,
                h2 in 0.0_f64..360.0,
            ) {
                prop_assert!(hue_delta(h1, h2, 4.0, false) >= 0.0);
                prop_assert!(hue_delta(h1, h2, 4.0, true) <= 0.0);
            }

            #[test]
            fn rgb_segment_has_requested_length(
                steps in 1_usize..64,
            ) {
                let a = ColorValue::parse("red").unwrap();
                let b = ColorValue::parse("teal").unwrap();
                prop_assert_eq!(interpolate_rgb(a, b, steps).len(), steps);
            }

            #[test]
            fn rgb_interpolation_stays_in_channel_range(
                r0 in 0.0_f64..=255.0, g0 in 0.0_f64..=255.0, b0 in 0.0_f64..=255.0,
                r1 in 0.0_f64..=255.0, g1 in 0.0_f64..=255.0, b1 in 0.0_f64..=255.0,
                i in 0_u32..8,
            ) {
                let start = [r0, g0, b0, 1.0];
                let end = [r1, g1, b1, 1.0];
                let delta = stepize(start, end, 8.0);
                let out = interpolate(delta, start, f64::from(i), Rgba::MAX);
                for (k, v) in out.iter().enumerate().take(3) {
                    prop_assert!(
                        *v >= 0.0 && *v < 256.0,
                        "channel {k} = {v} out of range"
                    );
                }
            }
        }
    }
}
