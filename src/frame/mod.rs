//! Frame buffers and the transforms applied to them
//!
//! This module contains:
//! - The pixel buffer capability (`raster`)
//! - The fixed-size `Frame` type and pure frame transforms (`transform`)

/// Pixel buffer creation, compositing, resampling and primitive drawing
pub mod raster;
/// Frame type and geometric transforms
pub mod transform;

pub use transform::Frame;
