/// Group of useful computations
pub mod computations;

pub use computations::*;
