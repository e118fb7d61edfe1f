//! Core types and utilities for the block transform pipeline
//!
//! This crate provides the data structures shared by the color, transform and
//! image crates: the error type, pixel formats, numeric grids and byte rasters.

pub mod consts;
pub mod error;
pub mod grid;
pub mod raster;
pub mod types;

pub use error::{JpegError, JpegResult};
pub use grid::*;
pub use raster::*;
pub use types::*;
