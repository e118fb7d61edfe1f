//! Block-padded pixel storage
//!
//! This crate provides `Matrix`, the pixel store every image passes through
//! on its way to and from the transforms. Dimensions are padded to whole
//! blocks, and conversion to and from byte rasters happens at the edges.

pub mod blocks;
pub mod matrix;

#[cfg(feature = "image")]
pub mod interop;

pub use matrix::*;

#[cfg(feature = "image")]
pub use interop::*;
