use super::Coeff;
use std::fmt;

/// Returns the input unchanged.
pub fn identity<T: Coeff>(x: T) -> T {
    x
}

/// Convert a negative value to zero
pub fn relu<T: Coeff>(x: T) -> T {
    x.max(T::zero())
}

pub fn sigmoid<T: Coeff>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

pub fn tanh<T: Coeff>(x: T) -> T {
    x.tanh()
}

/// A pure real -> real function applied to a neuron's weighted sum.
///
/// `Custom` accepts any function pointer, so new activations do not need a
/// new variant or any change to `Neuron` and `Layer`.
#[derive(Clone, Copy)]
pub enum Activation<T = f64>
where
    T: Coeff,
{
    Identity,
    Relu,
    Sigmoid,
    Tanh,
    Custom(fn(T) -> T),
}

impl<T> Activation<T>
where
    T: Coeff,
{
    pub fn apply(&self, x: T) -> T {
        match *self {
            Activation::Identity => identity(x),
            Activation::Relu => relu(x),
            Activation::Sigmoid => sigmoid(x),
            Activation::Tanh => tanh(x),
            Activation::Custom(f) => f(x),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Activation::Identity => "identity",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Custom(_) => "custom",
        }
    }
}

impl<T> Default for Activation<T>
where
    T: Coeff,
{
    fn default() -> Self {
        Activation::Identity
    }
}

impl<T> From<fn(T) -> T> for Activation<T>
where
    T: Coeff,
{
    fn from(f: fn(T) -> T) -> Self {
        Activation::Custom(f)
    }
}

impl<T> fmt::Debug for Activation<T>
where
    T: Coeff,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Activation({})", self.name())
    }
}
