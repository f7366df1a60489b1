//! Source adapters and layer output planning
//!
//! This module contains:
//! - The photo adapter deriving all facings from one cutout (`photo`)
//! - The procedural adapter drawing each layer from primitives (`procedural`)
//! - Layer naming and placeholder planning (`layers`)

/// Layer identifiers and output planning
pub mod layers;
/// Frames derived from a photographic cutout
pub mod photo;
/// Frames drawn from geometric primitives
pub mod procedural;

pub use layers::{DEFAULT_LAYERS, LayerId, OutputFile, plan_outputs};
pub use photo::{PhotoSource, ViewParams};
pub use procedural::{ProceduralLayer, ProceduralSource};
