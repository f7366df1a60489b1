//! Gesture animation registry
//!
//! Gestures are laid out back to back along the gesture row in registry
//! order. Their frame counts must add up to exactly the row width, which is
//! checked once when the registry is built rather than on every render.

use crate::io::configuration::GESTURE_FRAMES;
use crate::io::error::{Result, SpriteError, invalid_parameter};
use std::collections::HashSet;

/// Per-frame placement of a gesture frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    /// Horizontal offset in pixels, positive is right
    pub dx: i32,
    /// Vertical offset in pixels, positive is down
    pub dy: i32,
    /// Walk phase hint for sources that draw poses instead of shifting them
    pub phase: u32,
}

impl Keyframe {
    /// Keyframe with both offsets and a phase hint
    pub const fn new(dx: i32, dy: i32, phase: u32) -> Self {
        Self { dx, dy, phase }
    }

    /// Vertical-only keyframe
    pub const fn bob(dy: i32, phase: u32) -> Self {
        Self::new(0, dy, phase)
    }
}

/// Named, ordered list of keyframes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSchedule {
    name: &'static str,
    keyframes: Vec<Keyframe>,
}

impl AnimationSchedule {
    /// Create a schedule
    pub const fn new(name: &'static str, keyframes: Vec<Keyframe>) -> Self {
        Self { name, keyframes }
    }

    /// Animation name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Keyframes in playback order
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Number of frames, which is also the number of columns occupied
    pub const fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the schedule has no frames
    pub const fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

/// Validated set of gesture schedules in layout order
#[derive(Debug, Clone)]
pub struct ScheduleRegistry {
    schedules: Vec<AnimationSchedule>,
}

impl ScheduleRegistry {
    /// Build a registry, checking it fills the gesture row exactly
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A schedule has an empty name, no keyframes, or a duplicated name
    /// - The keyframe counts do not sum to the gesture row width
    pub fn new(schedules: Vec<AnimationSchedule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for schedule in &schedules {
            if schedule.name.is_empty() {
                return Err(invalid_parameter(
                    "schedule.name",
                    &"",
                    &"animation names must not be empty",
                ));
            }
            if schedule.is_empty() {
                return Err(invalid_parameter(
                    "schedule.keyframes",
                    &schedule.name,
                    &"animation has no frames",
                ));
            }
            if !seen.insert(schedule.name) {
                return Err(invalid_parameter(
                    "schedule.name",
                    &schedule.name,
                    &"animation registered twice",
                ));
            }
        }

        let actual: usize = schedules.iter().map(AnimationSchedule::len).sum();
        let expected = GESTURE_FRAMES as usize;
        if actual != expected {
            return Err(SpriteError::RegistryInconsistent { expected, actual });
        }

        Ok(Self { schedules })
    }

    /// The built-in gestures: jump, wave, bow, dance, clap
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in tables were edited inconsistently
    pub fn canonical() -> Result<Self> {
        Self::new(vec![
            AnimationSchedule::new(
                "jump",
                vec![
                    Keyframe::bob(0, 0),
                    Keyframe::bob(-2, 1),
                    Keyframe::bob(-3, 2),
                    Keyframe::bob(-1, 3),
                ],
            ),
            AnimationSchedule::new(
                "wave",
                vec![
                    Keyframe::new(0, 0, 0),
                    Keyframe::new(1, 0, 1),
                    Keyframe::new(0, 0, 2),
                    Keyframe::new(-1, 0, 3),
                ],
            ),
            AnimationSchedule::new(
                "bow",
                vec![Keyframe::bob(0, 0), Keyframe::bob(1, 0), Keyframe::bob(2, 0)],
            ),
            AnimationSchedule::new(
                "dance",
                vec![
                    Keyframe::new(0, 0, 0),
                    Keyframe::new(1, -1, 1),
                    Keyframe::new(-1, 0, 2),
                    Keyframe::new(0, -1, 3),
                    Keyframe::new(1, 0, 0),
                    Keyframe::new(-1, -1, 1),
                ],
            ),
            AnimationSchedule::new(
                "clap",
                vec![
                    Keyframe::bob(0, 0),
                    Keyframe::bob(-1, 1),
                    Keyframe::bob(0, 2),
                    Keyframe::bob(-1, 3),
                ],
            ),
        ])
    }

    /// Schedules in layout order
    pub fn schedules(&self) -> &[AnimationSchedule] {
        &self.schedules
    }

    /// Look a schedule up by name
    pub fn get(&self, name: &str) -> Option<&AnimationSchedule> {
        self.schedules.iter().find(|schedule| schedule.name == name)
    }

    /// Each schedule paired with the gesture-row column of its first frame
    pub fn spans(&self) -> impl Iterator<Item = (u32, &AnimationSchedule)> + '_ {
        self.schedules.iter().scan(0u32, |next_col, schedule| {
            let start = *next_col;
            *next_col += schedule.len() as u32;
            Some((start, schedule))
        })
    }

    /// Total gesture frames, equal to the gesture row width by construction
    pub fn frame_count(&self) -> usize {
        self.schedules.iter().map(AnimationSchedule::len).sum()
    }
}
