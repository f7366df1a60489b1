//! Pure frame transforms: trimming, fitting, derived views and offsets
//!
//! Every function here returns a fresh buffer and is total over its inputs.
//! Degenerate geometry (empty sources, offsets larger than a frame) yields a
//! transparent result instead of an error.

use crate::frame::raster::{self, TRANSPARENT};
use crate::io::configuration::{
    BACK_VIEW_BLUE_SHIFT, BACK_VIEW_BRIGHTNESS, BACK_VIEW_GREEN_SHIFT, BACK_VIEW_RED_SHIFT,
    FRAME_HEIGHT, FRAME_WIDTH, SIDE_VIEW_WIDTH_RATIO, SIDE_VIEW_X_NUDGE,
};
use crate::io::error::{Result, SpriteError};
use image::{Rgba, RgbaImage};

/// One sheet cell worth of pixels
///
/// A frame is always exactly [`FRAME_WIDTH`] x [`FRAME_HEIGHT`]; the
/// constructors refuse anything else, so every transform that takes a frame
/// can rely on the size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    /// Fully transparent frame
    pub fn blank() -> Self {
        Self {
            image: raster::blank(FRAME_WIDTH, FRAME_HEIGHT),
        }
    }

    /// Wrap a buffer that already has frame dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrame` if the buffer is not exactly one frame in size
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == FRAME_WIDTH && height == FRAME_HEIGHT {
            Ok(Self { image })
        } else {
            Err(SpriteError::InvalidFrame { width, height })
        }
    }

    /// Borrow the underlying pixels
    pub const fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the underlying pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // Drawing access for in-crate painters; the buffer must never be replaced
    pub(crate) const fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Pixel at `(x, y)`, `None` outside the frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Whether the frame holds no visible content
    pub fn is_transparent(&self) -> bool {
        raster::is_transparent(&self.image)
    }

    /// Bounding box of the visible content
    pub fn content_bounds(&self) -> Option<raster::Bounds> {
        raster::alpha_bounds(&self.image)
    }
}

/// Darkening and tint used to fake a figure seen from behind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackViewTint {
    /// Multiplier applied to each color channel before shifting
    pub brightness: f32,
    /// Added to red after darkening
    pub red_shift: i16,
    /// Added to green after darkening
    pub green_shift: i16,
    /// Added to blue after darkening
    pub blue_shift: i16,
}

impl Default for BackViewTint {
    fn default() -> Self {
        Self {
            brightness: BACK_VIEW_BRIGHTNESS,
            red_shift: BACK_VIEW_RED_SHIFT,
            green_shift: BACK_VIEW_GREEN_SHIFT,
            blue_shift: BACK_VIEW_BLUE_SHIFT,
        }
    }
}

impl BackViewTint {
    fn channel(self, value: u8, shift: i16) -> u8 {
        let darkened = (f32::from(value) * self.brightness).round().clamp(0.0, 255.0) as i16;
        (darkened + shift).clamp(0, 255) as u8
    }
}

/// Horizontal compression used to fake a side-on silhouette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideViewSquish {
    /// Fraction of the frame width the figure keeps
    pub width_ratio: f32,
    /// Pixels the compressed figure is moved right of center
    pub x_nudge: i64,
}

impl Default for SideViewSquish {
    fn default() -> Self {
        Self {
            width_ratio: SIDE_VIEW_WIDTH_RATIO,
            x_nudge: SIDE_VIEW_X_NUDGE,
        }
    }
}

/// Crop to the smallest rectangle holding any non-transparent pixel
///
/// Fully transparent input is returned unchanged.
pub fn trim(image: &RgbaImage) -> RgbaImage {
    raster::alpha_bounds(image).map_or_else(|| image.clone(), |bounds| raster::crop(image, bounds))
}

/// Scale into a box keeping aspect ratio, centered and bottom aligned
///
/// The content is scaled to fit `box - 2 * padding` on both axes, then sits
/// `padding` pixels above the bottom edge. The result is always exactly
/// `box_width` x `box_height`; a zero-area source yields a transparent box.
pub fn fit_to_box(image: &RgbaImage, box_width: u32, box_height: u32, padding: u32) -> RgbaImage {
    let mut boxed = raster::blank(box_width, box_height);
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return boxed;
    }

    let margin = padding.saturating_mul(2);
    let target_width = box_width.saturating_sub(margin).max(1);
    let target_height = box_height.saturating_sub(margin).max(1);

    let ratio = (f64::from(target_width) / f64::from(width))
        .min(f64::from(target_height) / f64::from(height));
    let new_width = ((f64::from(width) * ratio) as u32).clamp(1, target_width);
    let new_height = ((f64::from(height) * ratio) as u32).clamp(1, target_height);

    let resized = raster::resize(image, new_width, new_height);
    let x = (i64::from(box_width) - i64::from(new_width)) / 2;
    let y = i64::from(box_height) - i64::from(new_height) - i64::from(padding);
    raster::paste(&mut boxed, &resized, x, y);
    boxed
}

/// Darkened, blue-shifted rendition of a front frame
///
/// Transparent pixels stay transparent (and are normalized to all zeros).
pub fn derive_back_view(front: &Frame, tint: &BackViewTint) -> Frame {
    let mut image = front.image.clone();
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        *pixel = if a == 0 {
            TRANSPARENT
        } else {
            Rgba([
                tint.channel(r, tint.red_shift),
                tint.channel(g, tint.green_shift),
                tint.channel(b, tint.blue_shift),
                a,
            ])
        };
    }
    Frame { image }
}

/// Horizontally compressed rendition of a front frame
pub fn derive_side_view(front: &Frame, squish: &SideViewSquish) -> Frame {
    let squeezed_width =
        ((f64::from(FRAME_WIDTH) * f64::from(squish.width_ratio)) as u32).clamp(1, FRAME_WIDTH);
    let squeezed = raster::resize(&front.image, squeezed_width, FRAME_HEIGHT);

    let mut image = raster::blank(FRAME_WIDTH, FRAME_HEIGHT);
    let x = i64::from((FRAME_WIDTH - squeezed_width) / 2) + squish.x_nudge;
    raster::paste(&mut image, &squeezed, x, 0);
    Frame { image }
}

/// Move content vertically, positive `dy` is down
pub fn shift_bob(frame: &Frame, dy: i32) -> Frame {
    shift_offset(frame, 0, dy)
}

/// Move content by `(dx, dy)`, clipping at the frame edges
///
/// The vacated band is transparent. Offsets of a full frame or more on
/// either axis leave nothing visible.
pub fn shift_offset(frame: &Frame, dx: i32, dy: i32) -> Frame {
    if dx == 0 && dy == 0 {
        return frame.clone();
    }
    if dx.unsigned_abs() >= FRAME_WIDTH || dy.unsigned_abs() >= FRAME_HEIGHT {
        return Frame::blank();
    }

    let mut image = raster::blank(FRAME_WIDTH, FRAME_HEIGHT);
    raster::place(&mut image, &frame.image, i64::from(dx), i64::from(dy));
    Frame { image }
}
