//! Photo adapter: directional frames derived from a single cutout
//!
//! The cutout is trimmed and fitted into a frame to become the front view;
//! the back and right views are derived from it, and every cell is one of
//! those three frames moved by the pose offset.

use crate::frame::transform::{
    BackViewTint, Frame, SideViewSquish, derive_back_view, derive_side_view, fit_to_box,
    shift_bob, shift_offset, trim,
};
use crate::io::configuration::{FIT_PADDING, FRAME_HEIGHT, FRAME_WIDTH};
use crate::io::error::{Result, SpriteError};
use crate::sheet::assembler::{FrameSource, Motion, Pose};
use crate::sheet::layout::Facing;
use image::RgbaImage;
use std::path::Path;
use tracing::{debug, info};

/// Tunables for the derived back and side views
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewParams {
    /// Back view darkening and tint
    pub tint: BackViewTint,
    /// Side view compression
    pub squish: SideViewSquish,
}

/// Idle frames for each facing, derived from one photo
#[derive(Debug, Clone)]
pub struct PhotoSource {
    front: Frame,
    back: Frame,
    right: Frame,
}

impl PhotoSource {
    /// Decode an image file and derive the directional frames from it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No file exists at `path`
    /// - The file cannot be decoded as an image
    pub fn from_path<P: AsRef<Path>>(path: P, params: &ViewParams) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpriteError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let decoded = image::open(path).map_err(|e| SpriteError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "decoded source image"
        );

        Self::from_image(&decoded.to_rgba8(), params)
    }

    /// Derive the directional frames from an in-memory cutout
    ///
    /// # Errors
    ///
    /// Returns an error if the fitted front view does not come out frame sized
    pub fn from_image(source: &RgbaImage, params: &ViewParams) -> Result<Self> {
        let trimmed = trim(source);
        debug!(
            width = trimmed.width(),
            height = trimmed.height(),
            "trimmed transparent border"
        );

        let front = Frame::from_image(fit_to_box(
            &trimmed,
            FRAME_WIDTH,
            FRAME_HEIGHT,
            FIT_PADDING,
        ))?;
        let back = derive_back_view(&front, &params.tint);
        let right = derive_side_view(&front, &params.squish);

        Ok(Self { front, back, right })
    }

    /// Idle frame for a facing
    pub const fn base_frame(&self, facing: Facing) -> &Frame {
        match facing {
            Facing::Front => &self.front,
            Facing::Back => &self.back,
            Facing::Right => &self.right,
        }
    }
}

impl FrameSource for PhotoSource {
    fn render(&self, pose: &Pose) -> Frame {
        let base = self.base_frame(pose.facing);
        match pose.motion {
            Motion::Walk { bob } => shift_bob(base, bob),
            Motion::Gesture { dx, dy } => shift_offset(base, dx, dy),
        }
    }
}
