//! Integration of tabulated data.
//!
//! These routines integrate a function known only at sample points
//! `(x[i], f[i])`. Sample spacing may be non-uniform, but `x` is expected to
//! be ordered. Each rule is available as a total ([`rectangle`],
//! [`trapezoid`]) or as a running sum ([`rectangle_cumulative`],
//! [`trapezoid_cumulative`]) paired with the coordinate each partial sum is
//! attributed to.

use thiserror::Error;

/// Which sample supplies the height of each rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Rule {
    /// Height `f[i]` over `[x[i], x[i+1]]`.
    Left,

    /// Height `f[i+1]` over `[x[i], x[i+1]]`.
    Right,

    /// Height `f[2k+1]` over `[x[2k], x[2k+2]]`.
    ///
    /// Samples are consumed in pairs of intervals, so the point count must be
    /// odd.
    #[default]
    Middle,
}

/// Errors that can occur when integrating tabulated data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("x has {x} samples but f has {f}")]
    LengthMismatch { x: usize, f: usize },

    #[error("need at least {required} samples, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("midpoint rule needs an odd number of samples, got {actual}")]
    EvenPointCount { actual: usize },
}

/// A running integral.
///
/// `integral[k]` is the integral accumulated up to and including the `k`-th
/// panel, and `x[k]` is the coordinate that panel is attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Cumulative {
    pub x: Vec<f64>,
    pub integral: Vec<f64>,
}

impl Cumulative {
    /// Returns the final accumulated value.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.integral.last().copied().unwrap_or(0.0)
    }
}

/// Integrates tabulated data with the rectangle rule.
///
/// # Errors
///
/// Returns an error if `x` and `f` differ in length, there are too few
/// samples, or [`Rule::Middle`] is used with an even sample count.
pub fn rectangle(x: &[f64], f: &[f64], rule: Rule) -> Result<f64, Error> {
    Ok(rectangle_panels(x, f, rule)?
        .map(|(_, area)| area)
        .sum())
}

/// Running rectangle-rule integral.
///
/// Coordinates are `x[..n-1]` for [`Rule::Left`], `x[1..]` for
/// [`Rule::Right`], and the odd samples `x[1], x[3], ...` for
/// [`Rule::Middle`].
///
/// # Errors
///
/// Returns an error under the same conditions as [`rectangle`].
pub fn rectangle_cumulative(x: &[f64], f: &[f64], rule: Rule) -> Result<Cumulative, Error> {
    Ok(accumulate(rectangle_panels(x, f, rule)?))
}

/// Integrates tabulated data with the trapezoid rule.
///
/// # Errors
///
/// Returns an error if `x` and `f` differ in length or there are fewer than
/// two samples.
pub fn trapezoid(x: &[f64], f: &[f64]) -> Result<f64, Error> {
    Ok(trapezoid_panels(x, f)?.map(|(_, area)| area).sum())
}

/// Running trapezoid-rule integral, attributed to interval midpoints.
///
/// # Errors
///
/// Returns an error under the same conditions as [`trapezoid`].
pub fn trapezoid_cumulative(x: &[f64], f: &[f64]) -> Result<Cumulative, Error> {
    Ok(accumulate(trapezoid_panels(x, f)?))
}

fn check_samples(x: &[f64], f: &[f64], required: usize) -> Result<(), Error> {
    if x.len() != f.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            f: f.len(),
        });
    }
    if x.len() < required {
        return Err(Error::TooFewPoints {
            required,
            actual: x.len(),
        });
    }
    Ok(())
}

/// Yields `(coordinate, area)` for each rectangle.
fn rectangle_panels<'a>(
    x: &'a [f64],
    f: &'a [f64],
    rule: Rule,
) -> Result<Box<dyn Iterator<Item = (f64, f64)> + 'a>, Error> {
    match rule {
        Rule::Left => {
            check_samples(x, f, 2)?;
            Ok(Box::new(
                x.windows(2)
                    .zip(f)
                    .map(|(edge, &height)| (edge[0], height * (edge[1] - edge[0]))),
            ))
        }
        Rule::Right => {
            check_samples(x, f, 2)?;
            Ok(Box::new(
                x.windows(2)
                    .zip(&f[1..])
                    .map(|(edge, &height)| (edge[1], height * (edge[1] - edge[0]))),
            ))
        }
        Rule::Middle => {
            check_samples(x, f, 3)?;
            if x.len() % 2 == 0 {
                return Err(Error::EvenPointCount { actual: x.len() });
            }
            Ok(Box::new(
                x.windows(3)
                    .step_by(2)
                    .zip(f[1..].iter().step_by(2))
                    .map(|(edge, &height)| (edge[1], height * (edge[2] - edge[0]))),
            ))
        }
    }
}

/// Yields `(midpoint, area)` for each trapezoid.
fn trapezoid_panels<'a>(
    x: &'a [f64],
    f: &'a [f64],
) -> Result<impl Iterator<Item = (f64, f64)> + 'a, Error> {
    check_samples(x, f, 2)?;
    Ok(x.windows(2).zip(f.windows(2)).map(|(edge, height)| {
        (
            0.5 * (edge[0] + edge[1]),
            0.5 * (height[0] + height[1]) * (edge[1] - edge[0]),
        )
    }))
}

fn accumulate(panels: impl Iterator<Item = (f64, f64)>) -> Cumulative {
    let (x, integral) = panels
        .scan(0.0, |running, (coordinate, area)| {
            *running += area;
            Some((coordinate, *running))
        })
        .unzip();

    Cumulative { x, integral }
}
