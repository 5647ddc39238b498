//! Failure kinds of vector arithmetic and forward passes.

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two operands, or an input and a declared size, have unequal lengths.
    #[error("dimension mismatch in {op}: expected length {expected}, got {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A layer was described with zero neurons.
    #[error("a layer must contain at least one neuron")]
    EmptyLayer,

    /// A network was described with zero layers.
    #[error("a network must contain at least one layer")]
    EmptyNetwork,
}

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn ensure_len(op: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch {
            op,
            expected,
            actual,
        });
    }
    Ok(())
}
