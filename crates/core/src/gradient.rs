//! Multi-stop gradients: normalized stop lists, substep allocation,
//! sequence generation, continuous sampling, and CSS output.
//!
//! A `Gradient` owns an ordered list of color stops anchored at strictly
//! increasing positions in [0, 1], fixed at construction. Every query reads
//! the stop list without mutating it, so a gradient is freely shared across
//! threads.

use crate::color::{ColorValue, Hsva, Rgba};
use crate::error::GradientError;
use crate::interp::{self, HueArc};

/// A color anchored at a normalized position along the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub color: ColorValue,
    pub pos: f64,
}

/// One stop as supplied to [`Gradient::new`]: a color with an optional
/// explicit position.
///
/// Within one construction call, either every input carries a position or
/// none does; mixing the two forms is rejected.
#[derive(Debug, Clone, Copy)]
pub struct StopInput {
    color: ColorValue,
    pos: Option<f64>,
}

impl StopInput {
    /// A bare color, to be spaced evenly across [0, 1].
    pub fn bare(color: impl Into<ColorValue>) -> Self {
        Self {
            color: color.into(),
            pos: None,
        }
    }

    /// A color anchored at an explicit position.
    pub fn at(color: impl Into<ColorValue>, pos: f64) -> Self {
        Self {
            color: color.into(),
            pos: Some(pos),
        }
    }
}

impl From<ColorValue> for StopInput {
    fn from(color: ColorValue) -> Self {
        Self::bare(color)
    }
}

/// Interpolation color space for sequence generation and sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Linear per-channel RGBA interpolation.
    Rgb,
    /// HSVA interpolation with the given hue rotation direction.
    Hsv(HueArc),
}

/// CSS gradient shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssShape {
    Linear,
    Radial,
}

impl CssShape {
    fn keyword(self) -> &'static str {
        match self {
            CssShape::Linear => "linear",
            CssShape::Radial => "radial",
        }
    }

    fn default_direction(self) -> &'static str {
        match self {
            CssShape::Linear => "to right",
            CssShape::Radial => "ellipse at center",
        }
    }
}

/// An ordered, immutable sequence of color stops.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<Stop>,
}

impl Gradient {
    /// Builds a gradient from stop inputs.
    ///
    /// Requires at least 2 inputs, all positioned or all bare. Positioned
    /// inputs must be in [0, 1] and strictly increasing; bare inputs are
    /// spaced evenly. If the extreme stops do not sit at 0 and 1, boundary
    /// stops are synthesized by duplicating the extreme colors.
    pub fn new(inputs: Vec<StopInput>) -> Result<Self, GradientError> {
        if inputs.len() < 2 {
            return Err(GradientError::InvalidStopCount(inputs.len()));
        }

        let positioned = inputs[0].pos.is_some();
        let count = inputs.len();
        let mut prev = f64::NEG_INFINITY;
        let mut stops = Vec::with_capacity(count + 2);

        for (i, input) in inputs.into_iter().enumerate() {
            if positioned != input.pos.is_some() {
                return Err(GradientError::MixedStopFormat);
            }
            let pos = match input.pos {
                Some(pos) => {
                    if !(0.0..=1.0).contains(&pos) {
                        return Err(GradientError::PositionOutOfRange(pos));
                    }
                    if pos <= prev {
                        return Err(GradientError::PositionOutOfOrder { prev, next: pos });
                    }
                    prev = pos;
                    pos
                }
                None => i as f64 / (count - 1) as f64,
            };
            stops.push(Stop {
                color: input.color,
                pos,
            });
        }

        if stops[0].pos != 0.0 {
            let first = stops[0].color;
            stops.insert(
                0,
                Stop {
                    color: first,
                    pos: 0.0,
                },
            );
        }
        let last = stops[stops.len() - 1];
        if last.pos != 1.0 {
            stops.push(Stop {
                color: last.color,
                pos: 1.0,
            });
        }

        Ok(Self { stops })
    }

    /// Builds a gradient from bare colors, spaced evenly across [0, 1].
    pub fn from_colors(colors: Vec<ColorValue>) -> Result<Self, GradientError> {
        Self::new(colors.into_iter().map(StopInput::from).collect())
    }

    /// Builds a gradient from explicitly positioned colors.
    pub fn from_stops(stops: Vec<(ColorValue, f64)>) -> Result<Self, GradientError> {
        Self::new(
            stops
                .into_iter()
                .map(|(color, pos)| StopInput::at(color, pos))
                .collect(),
        )
    }

    /// Returns the normalized stop list, including any synthesized boundary
    /// stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Allocates `steps` discrete output colors across the segments between
    /// consecutive stops, proportionally to segment width.
    ///
    /// Returns one count per segment; the counts plus 1 (the final endpoint)
    /// sum exactly to `steps`. Every segment receives at least one step, no
    /// matter how thin. `steps` must be at least 2 and at least the number
    /// of stops.
    pub fn compute_substeps(&self, steps: usize) -> Result<Vec<usize>, GradientError> {
        let stop_count = self.stops.len();
        if steps < 2 || steps < stop_count {
            return Err(GradientError::InvalidStepCount {
                steps,
                stops: stop_count,
            });
        }

        let mut substeps: Vec<usize> = self
            .stops
            .windows(2)
            .map(|pair| {
                let width = (steps - 1) as f64 * (pair[1].pos - pair[0].pos);
                (width.round() as usize).max(1)
            })
            .collect();

        // Rounding can leave the total off by a few steps; nudge the
        // smallest (or largest) segment one step at a time until it lands
        // exactly on the target.
        let mut total = 1 + substeps.iter().sum::<usize>();
        while total != steps {
            if total < steps {
                let i = index_of_min(&substeps);
                substeps[i] += 1;
                total += 1;
            } else {
                let i = index_of_max(&substeps);
                if substeps[i] <= 1 {
                    // All segments already at the floor of 1; unreachable
                    // while steps >= stop_count holds.
                    return Err(GradientError::InvalidStepCount {
                        steps,
                        stops: stop_count,
                    });
                }
                substeps[i] -= 1;
                total -= 1;
            }
        }

        Ok(substeps)
    }

    /// Generates exactly `steps` colors from the first stop to the last.
    ///
    /// Each segment contributes its substep allocation: the segment's start
    /// color plus interpolated intermediates, with the end color picked up
    /// as the next segment's start. In HSV space, a segment with an
    /// achromatic endpoint (zero saturation, hue undefined) falls back to
    /// RGB interpolation.
    pub fn to_sequence(
        &self,
        steps: usize,
        space: ColorSpace,
    ) -> Result<Vec<ColorValue>, GradientError> {
        let substeps = self.compute_substeps(steps)?;
        let mut sequence = Vec::with_capacity(steps);

        for (pair, &count) in self.stops.windows(2).zip(&substeps) {
            let (start, end) = (pair[0].color, pair[1].color);
            let segment = match space {
                ColorSpace::Rgb => interp::interpolate_rgb(start, end, count),
                ColorSpace::Hsv(arc) => {
                    let from = start.to_hsva();
                    let to = end.to_hsva();
                    if from.s == 0.0 || to.s == 0.0 {
                        interp::interpolate_rgb(start, end, count)
                    } else {
                        let trig = arc.trigonometric(from.h, to.h);
                        interp::interpolate_hsv(start, end, count, trig)
                    }
                }
            };
            sequence.extend(segment);
        }

        sequence.push(self.stops[self.stops.len() - 1].color);
        Ok(sequence)
    }

    /// Samples the gradient at `pos` in [0, 1].
    ///
    /// The enclosing segment is discretized onto a fixed 0-100 sub-scale
    /// regardless of its width, trading a small quantization error for
    /// simplicity. Sampling steps every channel linearly; the `HueArc`
    /// inside [`ColorSpace::Hsv`] only affects [`Gradient::to_sequence`].
    pub fn sample_at(&self, pos: f64, space: ColorSpace) -> Result<ColorValue, GradientError> {
        if !(0.0..=1.0).contains(&pos) {
            return Err(GradientError::PositionOutOfRange(pos));
        }

        // pos exactly at the final stop (or past every segment) degenerates
        // to a zero-width segment returning the final color unchanged.
        let last = self.stops[self.stops.len() - 1];
        let (start, end) = self
            .stops
            .windows(2)
            .find(|pair| pos >= pair[0].pos && pos < pair[1].pos)
            .map_or((last, last), |pair| (pair[0], pair[1]));

        let steps = (end.pos - start.pos) * 100.0;
        let i = ((pos - start.pos) * 100.0).round();

        Ok(match space {
            ColorSpace::Rgb => {
                let from = start.color.to_rgba().to_array();
                let to = end.color.to_rgba().to_array();
                let delta = interp::stepize(from, to, steps);
                ColorValue::from(Rgba::from_array(interp::interpolate(
                    delta,
                    from,
                    i,
                    Rgba::MAX,
                )))
            }
            ColorSpace::Hsv(_) => {
                let from = start.color.to_hsva().to_array();
                let to = end.color.to_hsva().to_array();
                let delta = interp::stepize(from, to, steps);
                ColorValue::from(Hsva::from_array(interp::interpolate(
                    delta,
                    from,
                    i,
                    Hsva::MAX,
                )))
            }
        })
    }

    /// Returns a new gradient with mirrored stop positions.
    ///
    /// Each position becomes `1 - pos` and the stop order is reversed; the
    /// original gradient is untouched. The mirrored stop list goes back
    /// through construction validation: stops so close together that their
    /// mirrored positions collide in floating point are reported as
    /// [`GradientError::PositionOutOfOrder`].
    pub fn reversed(&self) -> Result<Gradient, GradientError> {
        Self::from_stops(
            self.stops
                .iter()
                .rev()
                .map(|stop| (stop.color, 1.0 - stop.pos))
                .collect(),
        )
    }

    /// Emits a CSS gradient description listing every stop.
    ///
    /// `direction` defaults to `"to right"` for linear gradients and
    /// `"ellipse at center"` for radial ones.
    pub fn to_css_string(&self, shape: CssShape, direction: Option<&str>) -> String {
        let direction = direction.unwrap_or_else(|| shape.default_direction());
        let mut css = format!("{}-gradient({direction}", shape.keyword());
        for stop in &self.stops {
            css.push_str(&format!(
                ", {} {}%",
                stop.color.to_rgb_string(),
                stop.pos * 100.0
            ));
        }
        css.push(')');
        css
    }
}

/// Index of the smallest element, first occurrence on ties.
fn index_of_min(values: &[usize]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < values[best] {
            best = i;
        }
    }
    best
}

/// Index of the largest element, first occurrence on ties.
fn index_of_max(values: &[usize]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
