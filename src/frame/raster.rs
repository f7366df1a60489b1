//! Pixel buffer capability backing every frame and sheet
//!
//! Thin layer over `image` and `imageproc`: transparent buffer creation,
//! alpha compositing, opaque placement, cropping, Lanczos resampling and the
//! handful of filled primitives the procedural layers are drawn from.
//! Rectangle and ellipse corners are inclusive, matching how layer geometry
//! is written down in [`crate::source::procedural`].
//!
//! Resampling works on premultiplied alpha so the color hidden under fully
//! transparent pixels never bleeds into visible edges.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

/// Fully transparent pixel value
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Arc sampling density; enough for arcs spanning a whole frame
const ARC_SAMPLES: u32 = 64;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Create a fully transparent buffer
pub fn blank(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, TRANSPARENT)
}

/// Opaque pixel for an RGB color
pub const fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

/// Smallest rectangle containing every pixel with non-zero alpha
///
/// Returns `None` for fully transparent or zero-area buffers.
pub fn alpha_bounds(image: &RgbaImage) -> Option<Bounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] > 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then_some(Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Copy a region out of a buffer
///
/// Regions reaching past the buffer edge are clipped.
pub fn crop(image: &RgbaImage, bounds: Bounds) -> RgbaImage {
    imageops::crop_imm(image, bounds.x, bounds.y, bounds.width, bounds.height).to_image()
}

/// Resample to the given size with a Lanczos3 filter
///
/// Channels are premultiplied by alpha before filtering and divided back
/// afterwards, so a figure keeps its hue right up to its anti-aliased edge.
pub fn resize(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premultiplied = Rgba32FImage::new(image.width(), image.height());
    for (source, target) in image.pixels().zip(premultiplied.pixels_mut()) {
        *target = premultiply(*source);
    }

    let filtered = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    let mut resized = blank(width, height);
    for (source, target) in filtered.pixels().zip(resized.pixels_mut()) {
        *target = unpremultiply(*source);
    }
    resized
}

fn premultiply(pixel: Rgba<u8>) -> Rgba<f32> {
    let Rgba([r, g, b, a]) = pixel;
    let alpha = f32::from(a) / 255.0;
    Rgba([
        f32::from(r) / 255.0 * alpha,
        f32::from(g) / 255.0 * alpha,
        f32::from(b) / 255.0 * alpha,
        alpha,
    ])
}

fn unpremultiply(pixel: Rgba<f32>) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;
    let alpha = to_channel(a);
    if alpha == 0 {
        return TRANSPARENT;
    }
    Rgba([
        to_channel(r / a),
        to_channel(g / a),
        to_channel(b / a),
        alpha,
    ])
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha-composite `top` onto `bottom` with its origin at `(x, y)`
pub fn paste(bottom: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(bottom, top, x, y);
}

/// Copy `top` into `bottom` at `(x, y)` without blending
///
/// Equivalent to [`paste`] whenever the covered region of `bottom` is fully
/// transparent, and exact to the bit.
pub fn place(bottom: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    imageops::replace(bottom, top, x, y);
}

/// Whether every pixel has zero alpha
pub fn is_transparent(image: &RgbaImage) -> bool {
    image.pixels().all(|pixel| pixel.0[3] == 0)
}

/// Fill the rectangle spanning `(x0, y0)` to `(x1, y1)`, corners inclusive
pub fn fill_rect(image: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(image, rect, color);
}

/// Fill the ellipse inscribed in the box `(x0, y0)`..`(x1, y1)`, corners inclusive
///
/// A pixel is filled when its center lies inside the ellipse spanning the
/// whole box, so even-sized boxes keep their full width and height.
pub fn fill_ellipse(image: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rx = (x1 - x0 + 1) as f32 / 2.0;
    let ry = (y1 - y0 + 1) as f32 / 2.0;
    let cx = x0 as f32 + rx;
    let cy = y0 as f32 + ry;

    for y in y0.max(0)..=y1 {
        let dy = (y as f32 + 0.5 - cy) / ry;
        for x in x0.max(0)..=x1 {
            let dx = (x as f32 + 0.5 - cx) / rx;
            if dx.mul_add(dx, dy * dy) > 1.0 {
                continue;
            }
            if let Some(pixel) = image.get_pixel_mut_checked(x as u32, y as u32) {
                *pixel = color;
            }
        }
    }
}

/// Draw a one pixel wide line segment
pub fn line(image: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    draw_line_segment_mut(
        image,
        (from.0 as f32, from.1 as f32),
        (to.0 as f32, to.1 as f32),
        color,
    );
}

/// Draw the lower half of the ellipse outline inscribed in a box
pub fn lower_arc(image: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = (x1 - x0) as f32 / 2.0;
    let ry = (y1 - y0) as f32 / 2.0;

    for step in 0..=ARC_SAMPLES {
        let angle = std::f32::consts::PI * step as f32 / ARC_SAMPLES as f32;
        let px = angle.cos().mul_add(rx, cx).round();
        let py = angle.sin().mul_add(ry, cy).round();
        if px < 0.0 || py < 0.0 {
            continue;
        }
        if let Some(pixel) = image.get_pixel_mut_checked(px as u32, py as u32) {
            *pixel = color;
        }
    }
}
