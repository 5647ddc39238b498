#[cfg(test)]
mod test;
mod activation;
mod vector;

pub use self::activation::*;
pub use self::vector::*;
use ndarray::NdFloat;
use num_traits::NumAssign;

/// A real-valued coefficient usable in vectors, neurons and layers.
pub trait Coeff: NdFloat + NumAssign {}

impl Coeff for f32 {}
impl Coeff for f64 {}
