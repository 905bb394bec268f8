//! Bounded regions ("windows") of N-dimensional Euclidean space.
//!
//! A window answers three questions: does it contain a point, what is its
//! volume, and what does a uniformly random point inside it look like.
//! Two shapes are provided, axis-aligned boxes ([`BoxWindow`]) and Euclidean
//! balls of dimension 1 to 3 ([`BallWindow`]), plus their unit variants.
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use spatial_windows::prelude::*;
//!
//! let disk = BallWindow::new(vec![1.0, 3.0], 2.5)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! for point in disk.sample(100, &mut rng) {
//!     assert!(disk.contains(&point)?);
//! }
//! # Ok::<(), WindowError>(())
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod random;
pub mod utils;
pub mod window;

pub use config::{ExperimentConfig, WindowConfig};
pub use error::{ConfigError, WindowError};
pub use random::{get_random_number_generator, RandomSource};
pub use window::{BallWindow, BoxWindow, Shape, UnitBallWindow, UnitBoxWindow, Window};
