mod dense;
mod neuron;

pub use self::dense::*;
pub use self::neuron::*;

/// Input and output widths of a component in a feed-forward chain.
pub trait Dimensions {
    /// Gets the number of elements expected in the input vector
    fn input_size(&self) -> usize;
    /// Gets the number of elements in the output
    fn output_size(&self) -> usize;
}
