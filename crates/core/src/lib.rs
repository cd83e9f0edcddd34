#![deny(unsafe_code)]
//! Smooth multi-stop color gradients.
//!
//! A [`Gradient`] owns an ordered list of color stops, each anchored at a
//! normalized position in [0, 1]. It can generate a discrete sequence of N
//! colors ([`Gradient::to_sequence`]), sample the gradient continuously at
//! any position ([`Gradient::sample_at`]), reverse itself, and emit a CSS
//! gradient string. Interpolation runs in RGBA or HSVA space; HSV supports
//! four hue rotation modes ([`HueArc`]).
//!
//! ```
//! use tinygradient::{ColorSpace, ColorValue, Gradient};
//!
//! let gradient = Gradient::from_colors(vec![
//!     ColorValue::parse("red")?,
//!     ColorValue::parse("blue")?,
//! ])?;
//! let colors = gradient.to_sequence(5, ColorSpace::Rgb)?;
//! assert_eq!(colors.len(), 5);
//! assert_eq!(colors[0].to_rgb_string(), "rgb(255, 0, 0)");
//! # Ok::<(), tinygradient::GradientError>(())
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod interp;

pub use color::{ColorValue, Hsva, Rgba};
pub use error::GradientError;
pub use gradient::{ColorSpace, CssShape, Gradient, Stop, StopInput};
pub use interp::HueArc;
