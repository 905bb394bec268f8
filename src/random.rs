//! Normalisation of caller-supplied randomness into a single generator.
//!
//! Windows never reach for a global generator: [`Window::sample`] takes an
//! explicit `&mut impl Rng`, and [`Window::sample_from`] funnels whatever the
//! caller has (nothing, a seed, or a generator) through
//! [`get_random_number_generator`] exactly once before drawing.
//!
//! [`Window::sample`]: crate::Window::sample
//! [`Window::sample_from`]: crate::Window::sample_from

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the randomness for a sampling call comes from.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// Seed a fresh generator from operating system entropy.
    #[default]
    Entropy,
    /// Seed a fresh generator deterministically.
    Seed(u64),
    /// Use this generator as is.
    Generator(StdRng),
}

impl From<u64> for RandomSource {
    fn from(seed: u64) -> Self {
        RandomSource::Seed(seed)
    }
}
impl From<Option<u64>> for RandomSource {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomSource::Seed(seed),
            None => RandomSource::Entropy,
        }
    }
}
impl From<StdRng> for RandomSource {
    fn from(rng: StdRng) -> Self {
        RandomSource::Generator(rng)
    }
}

/// Turn a seed, a generator or nothing at all into a generator.
///
/// The same seed always yields the same stream; a generator is handed back
/// untouched, so its stream continues where the caller left it.
///
/// ```rust
/// use rand::Rng;
/// use spatial_windows::random::get_random_number_generator;
///
/// let mut a = get_random_number_generator(7u64);
/// let mut b = get_random_number_generator(7u64);
/// assert_eq!(a.gen::<f64>(), b.gen::<f64>());
/// ```
pub fn get_random_number_generator(source: impl Into<RandomSource>) -> StdRng {
    match source.into() {
        RandomSource::Entropy => StdRng::from_entropy(),
        RandomSource::Seed(seed) => StdRng::seed_from_u64(seed),
        RandomSource::Generator(rng) => rng,
    }
}
