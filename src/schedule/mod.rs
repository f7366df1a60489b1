//! Declarative animation tables
//!
//! The walk cycle drives the directional rows and the gesture registry
//! drives the gesture row. Both are read-only once built.

/// Gesture schedules and their construction-time validation
pub mod registry;
/// Walk cycle bob schedule
pub mod walk;

pub use registry::{AnimationSchedule, Keyframe, ScheduleRegistry};
