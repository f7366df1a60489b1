//! Procedural adapter: every layer drawn from filled primitives
//!
//! Coordinates are frame-relative with inclusive corners. Facial features are
//! skipped when the figure faces away.

use crate::frame::raster::{fill_ellipse, fill_rect, line, lower_arc, opaque};
use crate::frame::transform::{Frame, shift_offset};
use crate::io::configuration::SKIN_PALETTES;
use crate::io::error::{Result, invalid_parameter};
use crate::sheet::assembler::{FrameSource, Motion, Pose};
use crate::sheet::layout::Facing;
use crate::source::layers::LayerId;
use image::{Rgba, RgbaImage};

/// Drawable body part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Head, torso and legs
    Body,
    /// Short hair cap with side tufts
    Hair,
    /// Two round eyes
    Eyes,
    /// Two short brow lines
    Eyebrows,
    /// Button nose
    Nose,
    /// Smiling mouth
    Mouth,
    /// T-shirt with sleeves
    Top,
}

impl Feature {
    /// Whether the feature is only visible from the front or side
    pub const fn faces_viewer(self) -> bool {
        matches!(self, Self::Eyes | Self::Eyebrows | Self::Nose | Self::Mouth)
    }

    /// Paint the feature onto `canvas` with its origin at the top-left corner
    ///
    /// Leaves `canvas` untouched for facial features seen from the back.
    pub fn draw_into(self, canvas: &mut RgbaImage, facing: Facing, phase: u32, rgb: [u8; 3]) {
        if self.faces_viewer() && facing == Facing::Back {
            return;
        }
        let color = opaque(rgb);
        match self {
            Self::Body => draw_body(canvas, phase, color),
            Self::Hair => draw_hair(canvas, color),
            Self::Eyes => draw_eyes(canvas, facing, color),
            Self::Eyebrows => draw_eyebrows(canvas, facing, color),
            Self::Nose => draw_nose(canvas, facing, color),
            Self::Mouth => draw_mouth(canvas, facing, color),
            Self::Top => draw_top(canvas, color),
        }
    }
}

// Legs swap sides every step; idle stands straight
const fn leg_offset(phase: u32) -> i32 {
    if phase == 0 {
        0
    } else {
        (phase % 2) as i32 * 2 - 1
    }
}

fn draw_body(canvas: &mut RgbaImage, phase: u32, color: Rgba<u8>) {
    fill_rect(canvas, (8, 20), (24, 36), color);
    fill_ellipse(canvas, (8, 4), (24, 20), color);

    let offset = leg_offset(phase);
    let left = 10 + offset;
    let right = 18 - offset;
    fill_rect(canvas, (left, 36), (left + 4, 46), color);
    fill_rect(canvas, (right, 36), (right + 4, 46), color);
}

fn draw_hair(canvas: &mut RgbaImage, color: Rgba<u8>) {
    fill_ellipse(canvas, (7, 2), (25, 14), color);
    fill_rect(canvas, (6, 8), (9, 16), color);
    fill_rect(canvas, (23, 8), (26, 16), color);
}

fn draw_eyes(canvas: &mut RgbaImage, facing: Facing, color: Rgba<u8>) {
    let (first, second) = if facing == Facing::Right {
        (16, 22)
    } else {
        (11, 18)
    };
    fill_ellipse(canvas, (first, 12), (first + 3, 15), color);
    fill_ellipse(canvas, (second, 12), (second + 3, 15), color);
}

fn draw_eyebrows(canvas: &mut RgbaImage, facing: Facing, color: Rgba<u8>) {
    let ((a0, a1), (b0, b1)) = if facing == Facing::Right {
        ((15, 20), (22, 26))
    } else {
        ((10, 14), (18, 22))
    };
    line(canvas, (a0, 10), (a1, 10), color);
    line(canvas, (b0, 10), (b1, 10), color);
}

fn draw_nose(canvas: &mut RgbaImage, facing: Facing, color: Rgba<u8>) {
    let x = if facing == Facing::Right { 21 } else { 15 };
    fill_ellipse(canvas, (x, 15), (x + 2, 17), color);
}

fn draw_mouth(canvas: &mut RgbaImage, facing: Facing, color: Rgba<u8>) {
    let (x0, x1) = if facing == Facing::Right {
        (17, 24)
    } else {
        (12, 20)
    };
    lower_arc(canvas, (x0, 18), (x1, 22), color);
}

fn draw_top(canvas: &mut RgbaImage, color: Rgba<u8>) {
    fill_rect(canvas, (7, 20), (25, 37), color);
    fill_rect(canvas, (3, 20), (8, 28), color);
    fill_rect(canvas, (24, 20), (29, 28), color);
}

/// A drawn layer: which feature, in which color, written where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProceduralLayer {
    /// Output layer
    pub layer: LayerId,
    /// Feature painted on every frame
    pub feature: Feature,
    /// Fill color
    pub color: [u8; 3],
    /// Human readable summary for logs
    pub description: &'static str,
}

/// Skin tone for a palette index
///
/// # Errors
///
/// Returns an error if the index is past the end of the palette list
pub fn skin_palette(index: usize) -> Result<[u8; 3]> {
    SKIN_PALETTES.get(index).copied().ok_or_else(|| {
        invalid_parameter(
            "skin",
            &index,
            &format!("palette index must be below {}", SKIN_PALETTES.len()),
        )
    })
}

/// The seven default layers, with the body drawn in `skin`
pub const fn default_layers(skin: [u8; 3]) -> [ProceduralLayer; 7] {
    [
        ProceduralLayer {
            layer: LayerId::BODY,
            feature: Feature::Body,
            color: skin,
            description: "Default body (oval head + rectangular torso)",
        },
        ProceduralLayer {
            layer: LayerId::HAIR,
            feature: Feature::Hair,
            color: [101, 67, 33],
            description: "Short brown hair",
        },
        ProceduralLayer {
            layer: LayerId::EYES,
            feature: Feature::Eyes,
            color: [20, 20, 20],
            description: "Round black eyes",
        },
        ProceduralLayer {
            layer: LayerId::EYEBROWS,
            feature: Feature::Eyebrows,
            color: [80, 50, 20],
            description: "Natural eyebrows",
        },
        ProceduralLayer {
            layer: LayerId::NOSE,
            feature: Feature::Nose,
            color: [180, 130, 90],
            description: "Button nose",
        },
        ProceduralLayer {
            layer: LayerId::MOUTH,
            feature: Feature::Mouth,
            color: [200, 80, 80],
            description: "Smile mouth",
        },
        ProceduralLayer {
            layer: LayerId::TOP,
            feature: Feature::Top,
            color: [60, 120, 200],
            description: "Blue t-shirt",
        },
    ]
}

/// Frame source drawing one procedural layer
#[derive(Debug, Clone, Copy)]
pub struct ProceduralSource {
    layer: ProceduralLayer,
}

impl ProceduralSource {
    /// Create a source for a layer
    pub const fn new(layer: ProceduralLayer) -> Self {
        Self { layer }
    }

    /// Layer this source draws
    pub const fn layer(&self) -> &ProceduralLayer {
        &self.layer
    }

    /// Draw the layer for a facing and walk phase onto a blank frame
    pub fn draw(&self, facing: Facing, phase: u32) -> Frame {
        let mut frame = Frame::blank();
        self.layer
            .feature
            .draw_into(frame.image_mut(), facing, phase, self.layer.color);
        frame
    }
}

impl FrameSource for ProceduralSource {
    // Walk rows animate the legs instead of bobbing
    fn render(&self, pose: &Pose) -> Frame {
        let drawn = self.draw(pose.facing, pose.phase);
        match pose.motion {
            Motion::Walk { .. } => drawn,
            Motion::Gesture { dx, dy } => shift_offset(&drawn, dx, dy),
        }
    }
}
