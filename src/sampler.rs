//! Region sampling over the atlas image

use image::RgbaImage;
use thiserror::Error;

use crate::models::Rect;

/// Error type for region sampling failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The rectangle extends past the image edge
    #[error("rect {x},{y} {w}x{h} lies outside the {width}x{height} atlas image",
        x = .rect.x, y = .rect.y, w = .rect.w, h = .rect.h)]
    OutOfBounds {
        rect: Rect,
        width: u32,
        height: u32,
    },
}

/// Mean RGB over the rectangle's pixels with nonzero alpha.
///
/// A rectangle with no opaque pixels (fully transparent, or zero area)
/// averages to black rather than failing. A rectangle outside the image
/// bounds is an error; the caller attaches the frame name.
pub fn average_color(image: &RgbaImage, rect: &Rect) -> Result<(f64, f64, f64), SampleError> {
    let (width, height) = image.dimensions();
    let fits = rect
        .x
        .checked_add(rect.w)
        .is_some_and(|right| right <= width)
        && rect
            .y
            .checked_add(rect.h)
            .is_some_and(|bottom| bottom <= height);
    if !fits {
        return Err(SampleError::OutOfBounds {
            rect: *rect,
            width,
            height,
        });
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    let mut opaque = 0u64;
    for y in rect.y..rect.y + rect.h {
        for x in rect.x..rect.x + rect.w {
            let pixel = image.get_pixel(x, y).0;
            if pixel[3] > 0 {
                r += u64::from(pixel[0]);
                g += u64::from(pixel[1]);
                b += u64::from(pixel[2]);
                opaque += 1;
            }
        }
    }

    if opaque == 0 {
        return Ok((0.0, 0.0, 0.0));
    }
    let n = opaque as f64;
    Ok((r as f64 / n, g as f64 / n, b as f64 / n))
}
