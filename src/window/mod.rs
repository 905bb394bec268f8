mod ball_window;
mod box_window;

pub use ball_window::{BallWindow, UnitBallWindow, MAX_BALL_DIMENSION};
pub use box_window::{BoxWindow, UnitBoxWindow};

use std::fmt;

use rand::Rng;
use tracing::trace;

use crate::{
    random::{get_random_number_generator, RandomSource},
    WindowError,
};

/// A bounded region of N-dimensional space.
///
/// Every window can test membership of a point, report its volume and draw
/// points uniformly at random from its interior. Points are plain coordinate
/// slices whose length must match [`Window::dimension`].
pub trait Window: fmt::Display {
    /// Number of coordinates of every point of the window
    fn dimension(&self) -> usize;

    /// Whether the window contains the point, boundary included.
    ///
    /// Fails with [`WindowError::DimensionMismatch`] if the point does not
    /// have [`Window::dimension`] coordinates.
    fn contains(&self, point: &[f64]) -> Result<bool, WindowError>;

    /// Indicator function of the window, same as [`Window::contains`]
    fn indicator_function(&self, point: &[f64]) -> Result<bool, WindowError> {
        self.contains(point)
    }

    /// Lebesgue measure of the window in its own dimension
    fn volume(&self) -> f64;

    /// Smallest axis-aligned box enclosing the window
    fn bounding_box(&self) -> BoxWindow;

    /// Draw `count` independent points uniformly distributed in the window.
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>>;

    /// Draw a single uniform point
    fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.sample(1, rng).remove(0)
    }

    /// Normalise `source` into a generator once, then [`Window::sample`] with it.
    fn sample_from(&self, count: usize, source: impl Into<RandomSource>) -> Vec<Vec<f64>>
    where
        Self: Sized,
    {
        let mut rng = get_random_number_generator(source);
        self.sample(count, &mut rng)
    }
}

/// Reject a point whose length differs from the window dimension
pub(crate) fn check_dimension(expected: usize, point: &[f64]) -> Result<(), WindowError> {
    if point.len() != expected {
        return Err(WindowError::DimensionMismatch {
            expected,
            found: point.len(),
        });
    }
    Ok(())
}

/// Any of the supported window shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box(BoxWindow),
    Ball(BallWindow),
}
impl Shape {
    /// Short lowercase name of the shape, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Box(_) => "box",
            Shape::Ball(_) => "ball",
        }
    }
}

impl Window for Shape {
    fn dimension(&self) -> usize {
        match self {
            Shape::Box(w) => w.dimension(),
            Shape::Ball(w) => w.dimension(),
        }
    }
    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        match self {
            Shape::Box(w) => w.contains(point),
            Shape::Ball(w) => w.contains(point),
        }
    }
    fn volume(&self) -> f64 {
        match self {
            Shape::Box(w) => w.volume(),
            Shape::Ball(w) => w.volume(),
        }
    }
    fn bounding_box(&self) -> BoxWindow {
        match self {
            Shape::Box(w) => w.bounding_box(),
            Shape::Ball(w) => w.bounding_box(),
        }
    }
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
        trace!(shape = self.kind(), count, "sampling shape");
        match self {
            Shape::Box(w) => w.sample(count, rng),
            Shape::Ball(w) => w.sample(count, rng),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Box(w) => write!(f, "{}", w),
            Shape::Ball(w) => write!(f, "{}", w),
        }
    }
}

impl From<BoxWindow> for Shape {
    fn from(value: BoxWindow) -> Self {
        Shape::Box(value)
    }
}
impl From<UnitBoxWindow> for Shape {
    fn from(value: UnitBoxWindow) -> Self {
        Shape::Box(value.into_inner())
    }
}
impl From<BallWindow> for Shape {
    fn from(value: BallWindow) -> Self {
        Shape::Ball(value)
    }
}
impl From<UnitBallWindow> for Shape {
    fn from(value: UnitBallWindow) -> Self {
        Shape::Ball(value.into_inner())
    }
}
