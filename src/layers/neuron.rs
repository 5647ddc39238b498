use super::Dimensions;
use crate::error::{ensure_len, Result};
use crate::math::{Activation, Coeff, NumericVector};

/// A single unit computing `activation(weights · inputs + bias)`.
#[derive(Clone, Debug)]
pub struct Neuron<T = f64>
where
    T: Coeff,
{
    weights: NumericVector<T>,
    bias: T,
    activation: Activation<T>,
}

impl<T> Neuron<T>
where
    T: Coeff,
{
    pub fn new(weights: NumericVector<T>, bias: T, activation: Activation<T>) -> Neuron<T> {
        trace!(
            "Create neuron with input-size: {}, bias: {}, activation: {}.",
            weights.len(),
            bias,
            activation.name()
        );
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Creates a placeholder neuron with all-zero weights, zero bias and the
    /// identity activation.
    pub fn zeroed(input_size: usize) -> Neuron<T> {
        Neuron::new(
            NumericVector::zeros(input_size),
            T::zero(),
            Activation::Identity,
        )
    }

    pub fn weights(&self) -> &NumericVector<T> {
        &self.weights
    }

    pub fn bias(&self) -> T {
        self.bias
    }

    pub fn activation(&self) -> Activation<T> {
        self.activation
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Reduces `inputs` to a single activated scalar.
    pub fn forward(&self, inputs: &NumericVector<T>) -> Result<T> {
        ensure_len("neuron forward", self.input_size(), inputs.len())?;
        let sum = self.weights.dot(inputs)? + self.bias;
        Ok(self.activation.apply(sum))
    }
}

impl<T> Dimensions for Neuron<T>
where
    T: Coeff,
{
    fn input_size(&self) -> usize {
        self.weights.len()
    }
    fn output_size(&self) -> usize {
        1
    }
}
