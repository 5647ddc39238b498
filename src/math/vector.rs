use super::Coeff;
use crate::error::{ensure_len, Result};
use itertools::Itertools;
use ndarray::Array1;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// A fixed-length, ordered sequence of reals.
///
/// The length is set at construction and never changes. Binary operations
/// require both operands to have the same length and fail with
/// `Error::DimensionMismatch` otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericVector<T = f64>
where
    T: Coeff,
{
    data: Array1<T>,
}

impl<T> NumericVector<T>
where
    T: Coeff,
{
    pub fn new(data: Vec<T>) -> NumericVector<T> {
        NumericVector {
            data: Array1::from(data),
        }
    }

    pub fn from_slice(data: &[T]) -> NumericVector<T> {
        NumericVector::new(data.to_vec())
    }

    /// Creates a vector of `len` zeros.
    pub fn zeros(len: usize) -> NumericVector<T> {
        NumericVector {
            data: Array1::zeros(len),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.data.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.data.get_mut(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Elementwise sum.
    pub fn add(&self, other: &NumericVector<T>) -> Result<NumericVector<T>> {
        ensure_len("vector add", self.len(), other.len())?;
        Ok(NumericVector {
            data: &self.data + &other.data,
        })
    }

    /// Sum of elementwise products.
    pub fn dot(&self, other: &NumericVector<T>) -> Result<T> {
        ensure_len("dot product", self.len(), other.len())?;
        Ok(self.data.dot(&other.data))
    }

    /// Applies `f` to every element, e.g. an activation over a whole vector.
    pub fn map<F>(&self, f: F) -> NumericVector<T>
    where
        F: Fn(T) -> T,
    {
        NumericVector {
            data: self.data.mapv(f),
        }
    }
}

impl<T> Index<usize> for NumericVector<T>
where
    T: Coeff,
{
    type Output = T;

    /// Panics when `idx >= len()`.
    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for NumericVector<T>
where
    T: Coeff,
{
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<T> From<Vec<T>> for NumericVector<T>
where
    T: Coeff,
{
    fn from(data: Vec<T>) -> Self {
        NumericVector::new(data)
    }
}

impl<'a, T> From<&'a [T]> for NumericVector<T>
where
    T: Coeff,
{
    fn from(data: &'a [T]) -> Self {
        NumericVector::from_slice(data)
    }
}

impl<T> FromIterator<T> for NumericVector<T>
where
    T: Coeff,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        NumericVector::new(iter.into_iter().collect())
    }
}

/// Renders as `(v0, v1, ..., vn-1)`; reals use the shortest exact decimal
/// form, so `1.0` prints as `1` and `-3.0` as `-3`.
impl<T> fmt::Display for NumericVector<T>
where
    T: Coeff,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.data.iter().join(", "))
    }
}
