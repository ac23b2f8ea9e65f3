//! Strided N-dimensional arrays.
//!
//! A [`StridedArray`] is a flat buffer plus a per-dimension extent (`span`)
//! and a per-dimension stride. Decoupling logical shape from physical stride
//! lets one buffer represent sub-views, transposed views, and padded views
//! without copying. All addressing is bounds-checked: an index outside
//! `[0, span)` in any dimension is a reported error, never a silent read.

use super::Container;
use crate::error::{FlowError, Result};
use crate::tags::TagSet;
use std::any::Any;

/// Compute the flat offset for `index`, or a bounds error.
fn strided_offset<const D: usize>(
    index: &[usize; D],
    span: &[usize; D],
    strides: &[usize; D],
) -> Result<usize> {
    let mut offset = 0usize;
    for i in 0..D {
        if index[i] >= span[i] {
            return Err(FlowError::OutOfBounds {
                index: index.to_vec(),
                span: span.to_vec(),
            });
        }
        offset += index[i] * strides[i];
    }
    Ok(offset)
}

/// An owned `D`-dimensional array over a flat buffer of `V`.
///
/// `strides[i]` is the element distance between neighbours along dimension
/// `i`. A stride of zero is allowed and denotes broadcasting (every index in
/// that dimension aliases the same elements). The array is never resized in
/// place; a new array replaces it.
#[derive(Debug, Clone)]
pub struct StridedArray<V, const D: usize> {
    data: Vec<V>,
    span: [usize; D],
    strides: [usize; D],
}

impl<V: Default + Clone, const D: usize> StridedArray<V, D> {
    /// Allocate a contiguous row-major array of the given span, filled with
    /// `V::default()`.
    pub fn contiguous(span: [usize; D]) -> Self {
        let mut strides = [0usize; D];
        let mut acc = 1usize;
        for i in (0..D).rev() {
            strides[i] = acc;
            acc *= span[i];
        }
        Self {
            data: vec![V::default(); acc],
            span,
            strides,
        }
    }
}

impl<V, const D: usize> StridedArray<V, D> {
    /// Build an array from an existing buffer and explicit strides.
    ///
    /// Fails if any in-bounds index would address past the end of `data`.
    pub fn from_parts(data: Vec<V>, span: [usize; D], strides: [usize; D]) -> Result<Self> {
        let empty = span.iter().any(|&s| s == 0);
        if !empty {
            // Largest reachable offset: every dimension at its last index.
            let max: usize = (0..D).map(|i| (span[i] - 1) * strides[i]).sum();
            if max >= data.len() {
                return Err(FlowError::InvalidStrides(format!(
                    "span {span:?} with strides {strides:?} addresses offset {max} \
                     in a buffer of {} elements",
                    data.len()
                )));
            }
        }
        Ok(Self { data, span, strides })
    }

    /// Per-dimension element counts.
    pub fn span(&self) -> &[usize; D] {
        &self.span
    }

    /// Per-dimension strides, in elements.
    pub fn strides(&self) -> &[usize; D] {
        &self.strides
    }

    /// Total number of logical elements (product of the span).
    pub fn span_len(&self) -> usize {
        self.span.iter().product()
    }

    /// Flat offset of a logical index, or a bounds error.
    pub fn offset(&self, index: &[usize; D]) -> Result<usize> {
        strided_offset(index, &self.span, &self.strides)
    }

    /// Element at a logical index.
    pub fn get(&self, index: &[usize; D]) -> Result<&V> {
        let off = self.offset(index)?;
        Ok(&self.data[off])
    }

    /// Mutable element at a logical index.
    pub fn get_mut(&mut self, index: &[usize; D]) -> Result<&mut V> {
        let off = self.offset(index)?;
        Ok(&mut self.data[off])
    }

    /// Store `value` at a logical index.
    pub fn set(&mut self, index: &[usize; D], value: V) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// The underlying flat buffer.
    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.data
    }

    /// A borrowed sub-view starting at `origin` with the given span, sharing
    /// this array's buffer and strides — no copy.
    pub fn view(&self, origin: [usize; D], span: [usize; D]) -> Result<StridedView<'_, V, D>> {
        for i in 0..D {
            if origin[i] + span[i] > self.span[i] {
                return Err(FlowError::OutOfBounds {
                    index: origin.to_vec(),
                    span: self.span.to_vec(),
                });
            }
        }
        let base: usize = (0..D).map(|i| origin[i] * self.strides[i]).sum();
        Ok(StridedView {
            data: &self.data,
            base,
            span,
            strides: self.strides,
        })
    }
}

/// A borrowed strided view into another array's buffer.
#[derive(Debug, Clone, Copy)]
pub struct StridedView<'a, V, const D: usize> {
    data: &'a [V],
    base: usize,
    span: [usize; D],
    strides: [usize; D],
}

impl<'a, V, const D: usize> StridedView<'a, V, D> {
    pub fn span(&self) -> &[usize; D] {
        &self.span
    }

    pub fn strides(&self) -> &[usize; D] {
        &self.strides
    }

    pub fn span_len(&self) -> usize {
        self.span.iter().product()
    }

    pub fn get(&self, index: &[usize; D]) -> Result<&'a V> {
        let off = strided_offset(index, &self.span, &self.strides)?;
        Ok(&self.data[self.base + off])
    }
}

/// A [`StridedArray`] packaged as a [`Container`] with a tag set.
#[derive(Debug)]
pub struct ArrayContainer<V: Send + 'static, const D: usize> {
    array: StridedArray<V, D>,
    tags: TagSet,
}

impl<V: Send + 'static, const D: usize> ArrayContainer<V, D> {
    pub fn new(array: StridedArray<V, D>, tags: TagSet) -> Self {
        Self { array, tags }
    }

    pub fn array(&self) -> &StridedArray<V, D> {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut StridedArray<V, D> {
        &mut self.array
    }
}

impl<const D: usize> ArrayContainer<f64, D> {
    /// A numeric array container tagged `#number#array`.
    pub fn numeric(array: StridedArray<f64, D>) -> Self {
        Self::new(array, TagSet::parse("#number#array"))
    }
}

impl<V: Send + 'static, const D: usize> Container for ArrayContainer<V, D> {
    fn tags(&self) -> &TagSet {
        &self.tags
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
