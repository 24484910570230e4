use crate::error::{PrintcropError, Result};

/// Which way the source photo is oriented. Decides whether the 3:2 print
/// ratio is applied as width:height or height:width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape iff strictly wider than tall; square images count as
    /// portrait, matching the 1/1.5 ratio branch.
    pub fn of(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Scaled, centered placement of a source image inside a viewport.
///
/// `width`/`height` are the scaled display dimensions; `offset_x`/`offset_y`
/// center that box within the viewport. A single uniform scale factor maps
/// source pixels to display pixels on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayFit {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub orientation: Orientation,
}

impl DisplayFit {
    /// Right edge of the displayed image in viewport coordinates.
    pub fn right(&self) -> f32 {
        self.offset_x + self.width
    }

    /// Bottom edge of the displayed image in viewport coordinates.
    pub fn bottom(&self) -> f32 {
        self.offset_y + self.height
    }
}

/// Scale `source` to the largest size that fits entirely inside `viewport`
/// while preserving aspect ratio, and center it.
///
/// The scaled image touches the viewport on at least one axis. Display
/// dimensions are rounded to whole pixels; the centering offsets may be
/// half-integral.
pub fn compute_fit(
    source_w: u32,
    source_h: u32,
    viewport_w: u32,
    viewport_h: u32,
) -> Result<DisplayFit> {
    if source_w == 0 || source_h == 0 {
        return Err(PrintcropError::InvalidDimension {
            width: source_w,
            height: source_h,
        });
    }
    if viewport_w == 0 || viewport_h == 0 {
        return Err(PrintcropError::InvalidDimension {
            width: viewport_w,
            height: viewport_h,
        });
    }

    let (sw, sh) = (source_w as f32, source_h as f32);
    let (vw, vh) = (viewport_w as f32, viewport_h as f32);

    // Bind to whichever axis runs out of room first.
    let (width, height) = if vw / sw < vh / sh {
        (vw, (vw * sh / sw).round())
    } else {
        ((vh * sw / sh).round(), vh)
    };

    Ok(DisplayFit {
        width,
        height,
        offset_x: (vw - width) / 2.0,
        offset_y: (vh - height) / 2.0,
        orientation: Orientation::of(source_w, source_h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_square_is_portrait() {
        assert_eq!(Orientation::of(500, 500), Orientation::Portrait);
        assert_eq!(Orientation::of(501, 500), Orientation::Landscape);
        assert_eq!(Orientation::of(500, 501), Orientation::Portrait);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(compute_fit(0, 100, 800, 600).is_err());
        assert!(compute_fit(100, 0, 800, 600).is_err());
        assert!(compute_fit(100, 100, 0, 600).is_err());
        assert!(compute_fit(100, 100, 800, 0).is_err());
    }
}
