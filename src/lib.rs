//! Deterministic sprite-sheet synthesis for layered game characters
//!
//! A character is turned into fixed-layout 672x192 sheets: idle and walk
//! frames for the front, back and right facings, plus a row of gesture
//! animations. Frames come either from a single photographic cutout, with the
//! other facings derived from it, or from procedurally drawn layers.

#![forbid(unsafe_code)]

/// Frame buffers and pure geometric transforms
pub mod frame;
/// Input/output operations, configuration and error handling
pub mod io;
/// Walk cycle and gesture animation tables
pub mod schedule;
/// Sheet grid layout and assembly
pub mod sheet;
/// Photo and procedural frame sources and layer output planning
pub mod source;

pub use io::error::{Result, SpriteError};
