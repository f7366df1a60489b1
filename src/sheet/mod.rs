//! Sheet grid layout and assembly
//!
//! This module contains:
//! - Grid constants, facings and cell addressing (`layout`)
//! - The sheet buffer, frame source capability and assembler (`assembler`)

/// Sheet buffer, frame sources and the assembler
pub mod assembler;
/// Facings, row assignment and cell addresses
pub mod layout;

pub use assembler::{FrameSource, Motion, Pose, Sheet, SheetAssembler};
pub use layout::{Cell, Facing};
