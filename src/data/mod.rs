//! Per-vertex data containers.

pub mod labels;

pub use labels::{LabelArray, RegionId};
