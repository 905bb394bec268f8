use std::fmt;

use rand::Rng;
use tracing::{debug, trace};

use super::{check_dimension, Window};
use crate::{utils, WindowError};

/// Axis-aligned box `[lo_1, hi_1] x ... x [lo_n, hi_n]`
#[derive(Debug, Clone, PartialEq)]
pub struct BoxWindow {
    bounds: Vec<[f64; 2]>,
}
impl BoxWindow {
    // Creation

    /// Create a box from one `[lo, hi]` pair per dimension.
    ///
    /// Zero-width segments are allowed, inverted or non-finite ones are not.
    pub fn new(bounds: Vec<[f64; 2]>) -> Result<Self, WindowError> {
        if bounds.is_empty() {
            return Err(WindowError::InvalidShape(
                "a box needs at least one dimension".to_string(),
            ));
        }
        for (i, &[lo, hi]) in bounds.iter().enumerate() {
            if !utils::all_finite(&[lo, hi]) {
                return Err(WindowError::InvalidShape(format!(
                    "bounds [{}, {}] of dimension {} are not finite",
                    lo, hi, i
                )));
            }
            if lo > hi {
                return Err(WindowError::InvalidShape(format!(
                    "lower bound {} exceeds upper bound {} in dimension {}",
                    lo, hi, i
                )));
            }
            if !(hi - lo).is_finite() {
                return Err(WindowError::InvalidShape(format!(
                    "length of [{}, {}] in dimension {} overflows",
                    lo, hi, i
                )));
            }
        }
        debug!(dimension = bounds.len(), "created box window");
        Ok(Self { bounds })
    }
    /// Create a box from an N x 2 table whose rows are not known to be pairs
    pub fn from_table<T: AsRef<[f64]>>(table: &[T]) -> Result<Self, WindowError> {
        let bounds = table
            .iter()
            .enumerate()
            .map(|(i, row)| match row.as_ref() {
                &[lo, hi] => Ok([lo, hi]),
                other => Err(WindowError::InvalidShape(format!(
                    "row {} of the bounds has {} values, expected 2",
                    i,
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(bounds)
    }

    // Getters

    /// The `[lo, hi]` pair of every dimension
    pub fn bounds(&self) -> &[[f64; 2]] {
        &self.bounds
    }
    /// Length of the box along every dimension
    pub fn lengths(&self) -> Vec<f64> {
        self.bounds.iter().map(|[lo, hi]| hi - lo).collect()
    }
    /// Midpoint of the box
    pub fn center(&self) -> Vec<f64> {
        self.bounds.iter().map(|[lo, hi]| (lo + hi) / 2.0).collect()
    }
}
impl Window for BoxWindow {
    fn dimension(&self) -> usize {
        self.bounds.len()
    }
    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        check_dimension(self.dimension(), point)?;
        Ok(self
            .bounds
            .iter()
            .zip(point)
            .all(|([lo, hi], x)| lo <= x && x <= hi))
    }
    fn volume(&self) -> f64 {
        self.bounds.iter().map(|[lo, hi]| hi - lo).product()
    }
    fn bounding_box(&self) -> BoxWindow {
        self.clone()
    }
    /// A box is the Cartesian product of its segments, so drawing every
    /// coordinate independently and uniformly on its own segment is uniform
    /// over the whole box.
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
        trace!(dimension = self.dimension(), count, "sampling box window");
        (0..count)
            .map(|_| {
                self.bounds
                    .iter()
                    .map(|[lo, hi]| rng.gen::<f64>() * (hi - lo) + lo)
                    .collect()
            })
            .collect()
    }
}
impl fmt::Display for BoxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = self
            .bounds
            .iter()
            .map(|bound| utils::format_coords(bound))
            .collect();
        write!(f, "BoxWindow: {}", segments.join(" x "))
    }
}

/// Box whose segments all have length 1, positioned by its center
#[derive(Debug, Clone, PartialEq)]
pub struct UnitBoxWindow(BoxWindow);
impl UnitBoxWindow {
    pub fn new(center: Vec<f64>) -> Result<Self, WindowError> {
        let bounds = center.iter().map(|c| [c - 0.5, c + 0.5]).collect();
        BoxWindow::new(bounds).map(Self)
    }
    pub fn as_box(&self) -> &BoxWindow {
        &self.0
    }
    pub fn into_inner(self) -> BoxWindow {
        self.0
    }
}
impl Window for UnitBoxWindow {
    fn dimension(&self) -> usize {
        self.0.dimension()
    }
    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        self.0.contains(point)
    }
    fn volume(&self) -> f64 {
        self.0.volume()
    }
    fn bounding_box(&self) -> BoxWindow {
        self.0.clone()
    }
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
        self.0.sample(count, rng)
    }
}
impl fmt::Display for UnitBoxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<UnitBoxWindow> for BoxWindow {
    fn from(value: UnitBoxWindow) -> Self {
        value.0
    }
}
