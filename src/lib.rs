//! Forward pass of small dense feed-forward neural networks.
//!
//! Inputs are [`NumericVector`]s. A [`Neuron`] reduces an input vector to
//! `activation(weights · inputs + bias)`, a [`Layer`] runs every neuron on the
//! same input and collects the scalars in construction order, and a
//! [`Network`] chains layers. Every length mismatch fails with
//! [`Error::DimensionMismatch`].
extern crate itertools;
#[cfg(test)]
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate ndarray;
extern crate num_traits;

/// Builds a [`NumericVector`] from a literal list of reals.
#[macro_export]
macro_rules! vector {
    () => {
        $crate::NumericVector::new(Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::NumericVector::new(vec![$($x),+])
    };
}

mod error;
mod layers;
mod math;
mod network;
mod util;
#[cfg(test)]
mod tests;

pub use crate::error::*;
pub use crate::layers::*;
pub use crate::math::*;
pub use crate::network::*;
pub use crate::util::*;
