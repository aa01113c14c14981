//! Region labels: a strong id for accepted regions and the per-vertex
//! label storage.
//!
//! `RegionId` wraps a nonzero `u32`: 0 is reserved throughout the crate
//! as the unlabeled/background sentinel, so a `RegionId` always names a
//! real region. `LabelArray` is the dense per-vertex store, owned by
//! value and handed between passes explicitly; 0 entries mean unlabeled,
//! positive entries are 1-based region ids assigned in discovery order.

use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshSegmentError;

/// Identifier of an accepted region.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU32`: same size and alignment as a
/// `u32`, and `Option<RegionId>` is also `u32`-sized.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RegionId(NonZeroU32);

impl RegionId {
    /// Creates a `RegionId` from a raw label value.
    ///
    /// Fails with [`MeshSegmentError::InvalidRegionId`] when `raw == 0`,
    /// since 0 is the background sentinel.
    #[inline]
    pub fn new(raw: u32) -> Result<Self, MeshSegmentError> {
        NonZeroU32::new(raw)
            .map(RegionId)
            .ok_or(MeshSegmentError::InvalidRegionId)
    }

    /// Returns the raw label value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegionId").field(&self.get()).finish()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Dense per-vertex region labels.
///
/// Entry `v` is 0 while vertex `v` is unlabeled (background, rejected, or
/// untouched), and the 1-based id of its region otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelArray {
    labels: Vec<u32>,
}

impl LabelArray {
    /// An all-unlabeled array for `n` vertices.
    pub fn zeros(n: usize) -> Self {
        Self {
            labels: vec![0; n],
        }
    }

    /// Wraps an existing raw label vector.
    pub fn from_vec(labels: Vec<u32>) -> Self {
        Self { labels }
    }

    /// Number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the array covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Raw label of vertex `v` (0 = unlabeled).
    #[inline]
    pub fn get(&self, v: usize) -> u32 {
        self.labels[v]
    }

    /// Region of vertex `v`, or `None` while unlabeled.
    #[inline]
    pub fn region(&self, v: usize) -> Option<RegionId> {
        NonZeroU32::new(self.labels[v]).map(RegionId)
    }

    /// The maximum label value; equals the region count because labels
    /// are assigned contiguously from 1.
    pub fn region_count(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Number of vertices labeled `id`.
    pub fn stratum_size(&self, id: RegionId) -> usize {
        let raw = id.get();
        self.labels.iter().filter(|&&l| l == raw).count()
    }

    /// Vertices labeled `id`, in ascending index order.
    pub fn stratum_points(&self, id: RegionId) -> Vec<usize> {
        let raw = id.get();
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(v, &l)| (l == raw).then_some(v))
            .collect()
    }

    /// Borrows the raw labels.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Consumes the array into its raw label vector.
    pub fn into_vec(self) -> Vec<u32> {
        self.labels
    }

    /// Stamps `id` onto every vertex in `vertices`.
    pub(crate) fn assign(&mut self, vertices: &[usize], id: RegionId) {
        let raw = id.get();
        for &v in vertices {
            self.labels[v] = raw;
        }
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertions that the reserved-zero niche keeps
    //! `RegionId` and `Option<RegionId>` at `u32` size.
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(RegionId, u32);
    assert_eq_size!(Option<RegionId>, u32);
}
