pub use super::error::WindowError;
pub use super::random::{get_random_number_generator, RandomSource};
pub use super::window::{BallWindow, BoxWindow, Shape, UnitBallWindow, UnitBoxWindow, Window};
