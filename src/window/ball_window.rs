use std::f64::consts::{PI, TAU};
use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, UnitSphere};
use tracing::{debug, trace};

use super::{check_dimension, BoxWindow, Window};
use crate::{utils, WindowError};

/// Largest dimension for which a ball is supported
pub const MAX_BALL_DIMENSION: usize = 3;

/// Closed Euclidean ball of dimension 1, 2 or 3
#[derive(Debug, Clone, PartialEq)]
pub struct BallWindow {
    center: Vec<f64>,
    radius: f64,
}
impl BallWindow {
    /// Create a ball from its center and a non-negative radius
    pub fn new(center: Vec<f64>, radius: f64) -> Result<Self, WindowError> {
        if center.is_empty() || center.len() > MAX_BALL_DIMENSION {
            return Err(WindowError::InvalidShape(format!(
                "ball dimension must be between 1 and {}, found {}",
                MAX_BALL_DIMENSION,
                center.len()
            )));
        }
        if !utils::all_finite(&center) {
            return Err(WindowError::InvalidShape(format!(
                "center {} is not finite",
                utils::format_coords(&center)
            )));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(WindowError::InvalidShape(format!(
                "radius must be finite and non-negative, found {}",
                radius
            )));
        }
        if center
            .iter()
            .any(|c| !utils::all_finite(&[c - radius, c + radius]))
        {
            return Err(WindowError::InvalidShape(format!(
                "ball of radius {} around {} overflows",
                radius,
                utils::format_coords(&center)
            )));
        }
        debug!(dimension = center.len(), radius, "created ball window");
        Ok(Self { center, radius })
    }
    /// Create a ball with the default radius of 1
    pub fn unit(center: Vec<f64>) -> Result<Self, WindowError> {
        Self::new(center, 1.0)
    }

    pub fn center(&self) -> &[f64] {
        &self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Draw one offset from the center, uniform over the ball.
    ///
    /// Each branch draws the radius by inverting the CDF of the distance to
    /// the center under a volume-uniform law, `F(rho) = (rho / r)^n`.
    fn sample_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let r = self.radius;
        match self.center.len() {
            // The segment [-r, r] is its own bounding box
            1 => vec![r * (2.0 * rng.gen::<f64>() - 1.0)],
            // F(rho) = rho^2 / r^2, so rho = r * sqrt(U), angle uniform on [0, 2pi)
            2 => {
                let rho = r * rng.gen::<f64>().sqrt();
                let (sin, cos) = rng.gen_range(0.0..TAU).sin_cos();
                vec![rho * cos, rho * sin]
            }
            // F(rho) = rho^3 / r^3, so rho = r * cbrt(U), direction uniform on the sphere
            3 => {
                let rho = r * rng.gen::<f64>().cbrt();
                let direction: [f64; 3] = UnitSphere.sample(rng);
                direction.iter().map(|d| rho * d).collect()
            }
            n => unreachable!("ball of dimension {} passed construction", n),
        }
    }
}
impl Window for BallWindow {
    fn dimension(&self) -> usize {
        self.center.len()
    }
    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        check_dimension(self.dimension(), point)?;
        Ok(utils::distance_squared(&self.center, point) <= self.radius * self.radius)
    }
    /// Closed-form volume: `2r`, `pi r^2` or `4/3 pi r^3`
    fn volume(&self) -> f64 {
        let r = self.radius;
        match self.center.len() {
            1 => 2.0 * r,
            2 => PI * r * r,
            3 => 4.0 / 3.0 * PI * r * r * r,
            n => unreachable!("ball of dimension {} passed construction", n),
        }
    }
    fn bounding_box(&self) -> BoxWindow {
        BoxWindow::new(
            self.center
                .iter()
                .map(|c| [c - self.radius, c + self.radius])
                .collect(),
        )
        .expect("a valid ball always has a valid bounding box")
    }
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
        trace!(
            dimension = self.dimension(),
            radius = self.radius,
            count,
            "sampling ball window"
        );
        (0..count)
            .map(|_| {
                self.sample_offset(rng)
                    .into_iter()
                    .zip(&self.center)
                    .map(|(offset, c)| c + offset)
                    .collect()
            })
            .collect()
    }
}
impl fmt::Display for BallWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BallWindow: center = {}, radius = {}",
            utils::format_coords(&self.center),
            self.radius
        )
    }
}

/// Ball of radius 1 around a given center
#[derive(Debug, Clone, PartialEq)]
pub struct UnitBallWindow(BallWindow);
impl UnitBallWindow {
    pub fn new(center: Vec<f64>) -> Result<Self, WindowError> {
        BallWindow::unit(center).map(Self)
    }
    pub fn as_ball(&self) -> &BallWindow {
        &self.0
    }
    pub fn into_inner(self) -> BallWindow {
        self.0
    }
}
impl Window for UnitBallWindow {
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
        self.0.bounding_box()
    }
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
        self.0.sample(count, rng)
    }
}
impl fmt::Display for UnitBallWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<UnitBallWindow> for BallWindow {
    fn from(value: UnitBallWindow) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_rejects_invalid_shapes() {
        assert!(matches!(
            BallWindow::new(vec![3.0, 4.0], -2.0),
            Err(WindowError::InvalidShape(_))
        ));
        assert!(matches!(
            BallWindow::unit(vec![1.0, 2.0, 3.0, 4.0]),
            Err(WindowError::InvalidShape(_))
        ));
        assert!(matches!(
            BallWindow::unit(Vec::new()),
            Err(WindowError::InvalidShape(_))
        ));
        assert!(matches!(
            BallWindow::new(vec![0.0], f64::NAN),
            Err(WindowError::InvalidShape(_))
        ));
        assert!(matches!(
            BallWindow::unit(vec![f64::INFINITY, 0.0]),
            Err(WindowError::InvalidShape(_))
        ));
        assert!(BallWindow::new(vec![0.0, 0.0], 0.0).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_extent() {
        assert!(matches!(
            BallWindow::new(vec![1e308], 1e308),
            Err(WindowError::InvalidShape(_))
        ));
        assert!(matches!(
            BallWindow::new(vec![0.0, -1.7e308], 1e308),
            Err(WindowError::InvalidShape(_))
        ));

        let wide = BallWindow::new(vec![1e307, -1e307], 1e307).unwrap();
        let bbox = wide.bounding_box();
        assert_eq!(bbox.bounds(), &[[0.0, 2e307], [-2e307, 0.0]]);
    }

    #[test]
    fn test_string_representation() {
        assert_eq!(
            BallWindow::new(vec![0.0], 4.0).unwrap().to_string(),
            "BallWindow: center = [0], radius = 4"
        );
        assert_eq!(
            BallWindow::new(vec![2.5, 2.5], 3.7).unwrap().to_string(),
            "BallWindow: center = [2.5, 2.5], radius = 3.7"
        );
        assert_eq!(
            UnitBallWindow::new(vec![-1.0, 5.0]).unwrap().to_string(),
            "BallWindow: center = [-1, 5], radius = 1"
        );
    }

    #[test]
    fn test_volume() {
        assert_relative_eq!(BallWindow::new(vec![0.0], 4.0).unwrap().volume(), 8.0);
        assert_relative_eq!(BallWindow::new(vec![1.0], 2.0).unwrap().volume(), 4.0);
        assert_relative_eq!(
            BallWindow::new(vec![1.0, 3.0], 2.5).unwrap().volume(),
            PI * 2.5 * 2.5
        );
        assert_relative_eq!(
            BallWindow::new(vec![1.4, 2.6, 3.9], 3.12).unwrap().volume(),
            4.0 / 3.0 * PI * 3.12_f64.powi(3),
            max_relative = 1e-12
        );
        assert_eq!(BallWindow::new(vec![1.0, 1.0], 0.0).unwrap().volume(), 0.0);
    }

    #[test]
    fn test_bounding_box_volume_is_not_ball_volume() {
        let ball = BallWindow::new(vec![1.0, 3.0], 2.5).unwrap();
        let bbox = ball.bounding_box();
        assert_eq!(bbox.bounds(), &[[-1.5, 3.5], [0.5, 5.5]]);
        assert_relative_eq!(bbox.volume(), 25.0);
        assert!(ball.volume() < bbox.volume());
    }

    #[test]
    fn test_contains_one_dimension() {
        let cases = [
            (1.0, 3.0, 2.0, true),
            (1.0, 3.0, 5.0, false),
            (3.5, 0.5, 4.0, true),
            (3.5, 0.5, 4.01, false),
            (-2.5, 1.5, -3.9, true),
            (-2.5, 1.5, 0.0, false),
            (0.0, 2.0, 0.0, true),
            (0.0, 2.0, 2.02, false),
        ];
        for (center, radius, point, expected) in cases {
            let ball = BallWindow::new(vec![center], radius).unwrap();
            assert_eq!(ball.contains(&[point]).unwrap(), expected, "{} / {}", ball, point);
        }
    }

    #[test]
    fn test_contains_two_and_three_dimensions() {
        let cases: [(Vec<f64>, f64, Vec<f64>, bool); 8] = [
            (vec![0.0, 0.0], 1.0, vec![0.5, 0.5], true),
            (vec![0.0, 0.0], 1.0, vec![1.0, 2.0], false),
            (vec![3.5, 2.5], 0.25, vec![3.25, 2.75], false),
            (vec![3.5, 2.5], 0.5, vec![3.5, 2.75], true),
            (vec![0.0, 0.0, 0.0], 1.0, vec![0.5, 0.5, 0.5], true),
            (vec![0.0, 0.0, 0.0], 1.0, vec![1.0, 2.0, 3.0], false),
            (vec![3.5, 2.5, 1.25], 0.25, vec![3.25, 2.75, 1.5], false),
            (vec![3.5, 2.5, 1.25], 0.5, vec![3.5, 2.75, 1.0], true),
        ];
        for (center, radius, point, expected) in cases {
            let ball = BallWindow::new(center, radius).unwrap();
            assert_eq!(ball.indicator_function(&point).unwrap(), expected);
        }
    }

    #[test]
    fn test_contains_dimension_mismatch() {
        let ball = BallWindow::new(vec![0.0, 0.0], 1.0).unwrap();
        assert_eq!(
            ball.contains(&[1.0, 2.0, 3.0]),
            Err(WindowError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_zero_radius_samples_center() {
        let ball = BallWindow::new(vec![1.0, -2.0, 0.5], 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for p in ball.sample(20, &mut rng) {
            assert_eq!(p, vec![1.0, -2.0, 0.5]);
        }
    }

    /// Empirical fraction of `values` lying in each of `bins` equal bins of [0, 1)
    fn histogram(values: &[f64], bins: usize) -> Vec<f64> {
        let mut counts = vec![0usize; bins];
        for &v in values {
            counts[((v * bins as f64) as usize).min(bins - 1)] += 1;
        }
        counts
            .into_iter()
            .map(|c| c as f64 / values.len() as f64)
            .collect()
    }

    #[test]
    fn test_disk_radius_is_area_uniform() {
        let r = 2.0;
        let ball = BallWindow::new(vec![0.0, 0.0], r).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let ratios: Vec<f64> = ball
            .sample(100_000, &mut rng)
            .iter()
            .map(|p| (p[0] * p[0] + p[1] * p[1]) / (r * r))
            .collect();

        let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
        let variance =
            ratios.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / ratios.len() as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean {}", mean);
        assert!((variance - 1.0 / 12.0).abs() < 0.005, "variance {}", variance);
        for (i, fraction) in histogram(&ratios, 10).into_iter().enumerate() {
            assert!((fraction - 0.1).abs() < 0.006, "bin {} holds {}", i, fraction);
        }
    }

    #[test]
    fn test_disk_angle_is_uniform() {
        let ball = BallWindow::new(vec![0.0, 0.0], 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let angles: Vec<f64> = ball
            .sample(100_000, &mut rng)
            .iter()
            .map(|p| (p[1].atan2(p[0]) + PI) / TAU)
            .collect();
        for (i, fraction) in histogram(&angles, 8).into_iter().enumerate() {
            assert!((fraction - 0.125).abs() < 0.006, "sector {} holds {}", i, fraction);
        }
    }

    #[test]
    fn test_sphere_radius_and_direction() {
        let r = 3.12;
        let center = vec![1.4, 2.6, 3.9];
        let ball = BallWindow::new(center.clone(), r).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let points = ball.sample(100_000, &mut rng);

        let ratios: Vec<f64> = points
            .iter()
            .map(|p| (utils::distance(p, &center) / r).powi(3))
            .collect();
        for (i, fraction) in histogram(&ratios, 10).into_iter().enumerate() {
            assert!((fraction - 0.1).abs() < 0.006, "shell {} holds {}", i, fraction);
        }

        // Offsets must average out along every axis
        for axis in 0..3 {
            let mean = points.iter().map(|p| p[axis] - center[axis]).sum::<f64>()
                / points.len() as f64;
            assert!(mean.abs() < 0.02 * r, "axis {} drifts by {}", axis, mean);
        }
    }

    #[test]
    fn test_segment_is_uniform() {
        let ball = BallWindow::new(vec![-1.0], 4.0).unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let positions: Vec<f64> = ball
            .sample(100_000, &mut rng)
            .iter()
            .map(|p| (p[0] + 5.0) / 8.0)
            .collect();
        for (i, fraction) in histogram(&positions, 10).into_iter().enumerate() {
            assert!((fraction - 0.1).abs() < 0.006, "bin {} holds {}", i, fraction);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_samples_are_members(
            center in prop::collection::vec(-50.0..50.0f64, 1..=3),
            radius in 0.0..20.0f64,
            seed in any::<u64>(),
        ) {
            let ball = BallWindow::new(center, radius).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            for p in ball.sample(50, &mut rng) {
                prop_assert_eq!(p.len(), ball.dimension());
                let d = utils::distance(&p, ball.center());
                prop_assert!(d <= radius * (1.0 + 1e-12) + 1e-12, "{} lies at {}", ball, d);
            }
        }
    }
}
