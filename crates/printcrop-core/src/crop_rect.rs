use crate::consts::TARGET_RATIO;
use crate::error::{PrintcropError, Result};
use crate::fit::{DisplayFit, Orientation};

/// Fixed-size crop rectangle in display-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CropRect {
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Crop rectangle corners mapped back into source-image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceCropBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl SourceCropBox {
    /// Integer pixel region for the actual crop, clamped to source bounds
    /// to absorb rounding.
    pub fn to_pixel_rect(&self, source_w: u32, source_h: u32) -> PixelCropRect {
        let x1 = self.x1.round().clamp(0.0, source_w as f32) as u32;
        let y1 = self.y1.round().clamp(0.0, source_h as f32) as u32;
        let x2 = self.x2.round().clamp(0.0, source_w as f32) as u32;
        let y2 = self.y2.round().clamp(0.0, source_h as f32) as u32;

        PixelCropRect {
            x: x1,
            y: y1,
            width: x2.saturating_sub(x1).max(1),
            height: y2.saturating_sub(y1).max(1),
        }
    }
}

/// Integer crop region in source pixels, as consumed by the codec layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelCropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Owns the per-image crop rectangle and keeps it fully inside the
/// displayed image bounds through every move.
///
/// The rectangle's size is fixed at construction (the largest 3:2 box that
/// fits the displayed image); only its position changes afterwards. One
/// controller exists per image and is discarded on advance.
#[derive(Clone, Debug)]
pub struct CropController {
    rect: CropRect,
    fit: DisplayFit,
}

impl CropController {
    /// Build the largest rectangle of the target ratio that fits the
    /// displayed image, centered.
    ///
    /// Fails with `InvalidDisplayFit` on a degenerate fit so the caller can
    /// skip the image instead of aborting the session.
    pub fn new(fit: DisplayFit) -> Result<Self> {
        if fit.width <= 0.0 || fit.height <= 0.0 {
            return Err(PrintcropError::InvalidDisplayFit {
                width: fit.width,
                height: fit.height,
            });
        }

        let (rect_w, rect_h) = match fit.orientation {
            Orientation::Landscape => {
                if fit.width / TARGET_RATIO <= fit.height {
                    (fit.width, fit.width / TARGET_RATIO)
                } else {
                    (fit.height * TARGET_RATIO, fit.height)
                }
            }
            Orientation::Portrait => {
                if fit.height / TARGET_RATIO <= fit.width {
                    (fit.height / TARGET_RATIO, fit.height)
                } else {
                    (fit.width, fit.width * TARGET_RATIO)
                }
            }
        };

        let x1 = fit.offset_x + (fit.width - rect_w) / 2.0;
        let y1 = fit.offset_y + (fit.height - rect_h) / 2.0;

        Ok(Self {
            rect: CropRect {
                x1,
                y1,
                x2: x1 + rect_w,
                y2: y1 + rect_h,
            },
            fit,
        })
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn fit(&self) -> &DisplayFit {
        &self.fit
    }

    /// Move the rectangle's center to `(cx, cy)`, pulling the target back
    /// per axis so no edge leaves the displayed image. Size is invariant;
    /// only position changes.
    pub fn drag_to(&mut self, cx: f32, cy: f32) {
        let half_w = self.rect.width() / 2.0;
        let half_h = self.rect.height() / 2.0;

        let mut cx = cx;
        let mut cy = cy;
        if cx - half_w < self.fit.offset_x {
            cx = self.fit.offset_x + half_w;
        }
        if cy - half_h < self.fit.offset_y {
            cy = self.fit.offset_y + half_h;
        }
        if cx + half_w > self.fit.right() {
            cx = self.fit.right() - half_w;
        }
        if cy + half_h > self.fit.bottom() {
            cy = self.fit.bottom() - half_h;
        }

        self.rect = CropRect {
            x1: cx - half_w,
            y1: cy - half_h,
            x2: cx + half_w,
            y2: cy + half_h,
        };
    }

    /// Shift the rectangle by `(dx, dy)`, shrinking each axis delta to the
    /// largest magnitude that keeps all four edges within bounds. A nudge
    /// into a boundary the rectangle is already flush against applies zero
    /// on that axis.
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        let mut dx = dx;
        let mut dy = dy;
        if self.rect.x1 + dx < self.fit.offset_x {
            dx = self.fit.offset_x - self.rect.x1;
        }
        if self.rect.y1 + dy < self.fit.offset_y {
            dy = self.fit.offset_y - self.rect.y1;
        }
        if self.rect.x2 + dx > self.fit.right() {
            dx = self.fit.right() - self.rect.x2;
        }
        if self.rect.y2 + dy > self.fit.bottom() {
            dy = self.fit.bottom() - self.rect.y2;
        }

        self.rect = CropRect {
            x1: self.rect.x1 + dx,
            y1: self.rect.y1 + dy,
            x2: self.rect.x2 + dx,
            y2: self.rect.y2 + dy,
        };
    }

    /// Map the rectangle's corners back into source pixel coordinates.
    ///
    /// No clamping: the rectangle invariant already keeps the box inside
    /// the displayed image, hence inside the source after scaling (up to
    /// rounding, absorbed by [`SourceCropBox::to_pixel_rect`]).
    pub fn to_source_space(&self, source_w: u32) -> SourceCropBox {
        let scale = source_w as f32 / self.fit.width;
        SourceCropBox {
            x1: (self.rect.x1 - self.fit.offset_x) * scale,
            y1: (self.rect.y1 - self.fit.offset_y) * scale,
            x2: (self.rect.x2 - self.fit.offset_x) * scale,
            y2: (self.rect.y2 - self.fit.offset_y) * scale,
        }
    }
}
