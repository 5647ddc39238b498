
use crate::error::{Error, Result};
use crate::layers::{Dimensions, Layer};
use crate::math::{Coeff, NumericVector};

/// Topology of a zero-initialized network.
#[derive(Clone, Debug)]
pub struct HyperParams {
    /// Width of the input vector
    pub num_inputs: usize,
    /// Number of neurons in each layer, input side first
    pub layer_widths: Vec<usize>,
}

/// Verifies that the output width of each component matches the input width
/// of the next one.
pub fn verify_dimensions(components: &[&dyn Dimensions]) -> Result<()> {
    for pair in components.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.output_size() != next.input_size() {
            return Err(Error::DimensionMismatch {
                op: "network construction",
                expected: prev.output_size(),
                actual: next.input_size(),
            });
        }
    }
    Ok(())
}

/// A chain of dense layers, each feeding its output to the next.
#[derive(Clone, Debug)]
pub struct Network<T = f64>
where
    T: Coeff,
{
    layers: Vec<Layer<T>>,
}

impl<T> Network<T>
where
    T: Coeff,
{
    pub fn new(layers: Vec<Layer<T>>) -> Result<Network<T>> {
        if layers.is_empty() {
            return Err(Error::EmptyNetwork);
        }
        {
            let components = layers
                .iter()
                .map(|layer| layer as &dyn Dimensions)
                .collect::<Vec<_>>();
            verify_dimensions(&components)?;
        }
        debug!(
            "Create network with {} layers, input-size: {}, output-size: {}.",
            layers.len(),
            layers[0].input_size(),
            layers[layers.len() - 1].output_size()
        );
        Ok(Network { layers })
    }

    /// Creates a network of zero-initialized layers from a topology.
    pub fn from_params(params: &HyperParams) -> Result<Network<T>> {
        let mut layers = Vec::with_capacity(params.layer_widths.len());
        let mut num_in = params.num_inputs;
        for &num_out in &params.layer_widths {
            layers.push(Layer::new(num_in, num_out)?);
            num_in = num_out;
        }
        Network::new(layers)
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].output_size()
    }

    /// Runs `inputs` through every layer and returns the last layer's output.
    pub fn forward(&self, inputs: &NumericVector<T>) -> Result<NumericVector<T>> {
        trace!("Forward pass through {} layers.", self.layers.len());
        self.layers
            .iter()
            .try_fold(inputs.clone(), |activations, layer| {
                layer.forward(&activations)
            })
    }

    /// Like `forward`, but returns the output of every layer in order.
    pub fn forward_trace(&self, inputs: &NumericVector<T>) -> Result<Vec<NumericVector<T>>> {
        let mut outputs: Vec<NumericVector<T>> = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let out = match outputs.last() {
                Some(prev) => layer.forward(prev)?,
                None => layer.forward(inputs)?,
            };
            outputs.push(out);
        }
        Ok(outputs)
    }
}

impl<T> Dimensions for Network<T>
where
    T: Coeff,
{
    fn input_size(&self) -> usize {
        Network::input_size(self)
    }
    fn output_size(&self) -> usize {
        Network::output_size(self)
    }
}
