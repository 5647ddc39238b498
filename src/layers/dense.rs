use super::{Dimensions, Neuron};
use crate::error::{ensure_len, Error, Result};
use crate::math::{Coeff, NumericVector};

/// A fully-connected layer: an ordered set of neurons sharing one input width.
///
/// The `i`th element of the output always belongs to the `i`th neuron in
/// construction order.
#[derive(Clone, Debug)]
pub struct Layer<T = f64>
where
    T: Coeff,
{
    neurons: Vec<Neuron<T>>,
}

impl<T> Layer<T>
where
    T: Coeff,
{
    /// Creates a layer of `output_size` zero-initialized neurons, each
    /// taking `input_size` inputs.
    pub fn new(input_size: usize, output_size: usize) -> Result<Layer<T>> {
        debug!(
            "Create dense-layer with input-size: {}, output-size: {}.",
            input_size, output_size
        );
        trace!(
            "\t↳ input: {0}, output: {1}, weights-size: {0}x{1} = {2}.",
            input_size,
            output_size,
            input_size * output_size
        );
        if output_size == 0 {
            return Err(Error::EmptyLayer);
        }
        Ok(Layer {
            neurons: vec![Neuron::zeroed(input_size); output_size],
        })
    }

    /// Creates a layer from explicitly parameterized neurons.
    pub fn from_neurons(neurons: Vec<Neuron<T>>) -> Result<Layer<T>> {
        let input_size = match neurons.first() {
            Some(first) => first.input_size(),
            None => return Err(Error::EmptyLayer),
        };
        for neuron in &neurons {
            ensure_len("layer construction", input_size, neuron.input_size())?;
        }
        debug!(
            "Create dense-layer from {} neurons with input-size: {}.",
            neurons.len(),
            input_size
        );
        Ok(Layer { neurons })
    }

    /// The shared input width of every neuron.
    pub fn input_size(&self) -> usize {
        // Construction guarantees at least one neuron
        self.neurons[0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    pub fn forward(&self, inputs: &NumericVector<T>) -> Result<NumericVector<T>> {
        ensure_len("layer forward", self.input_size(), inputs.len())?;
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }
}

impl<T> Dimensions for Layer<T>
where
    T: Coeff,
{
    fn input_size(&self) -> usize {
        Layer::input_size(self)
    }
    fn output_size(&self) -> usize {
        Layer::output_size(self)
    }
}
