use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// A rectangle in logical coordinates, given by its four edges.
///
/// Edge order defines axis direction: `bottom < top` gives a Y-up system,
/// `bottom > top` gives the usual Y-down screen convention.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportWindow {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl ViewportWindow {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Like [`ViewportWindow::new`], but rejects windows with zero extent on either axis.
    pub fn try_new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self, CanvasError> {
        let window = Self::new(left, right, bottom, top);
        if window.width() == 0.0 || window.height() == 0.0 {
            return Err(CanvasError::DegenerateWindow {
                left,
                right,
                bottom,
                top,
            });
        }
        Ok(window)
    }

    /// Signed horizontal extent, `right - left`.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Signed vertical extent, `bottom - top`.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) * 0.5,
            (self.bottom + self.top) * 0.5,
        )
    }

    /// Height over width, always non-negative.
    pub fn aspect_ratio(&self) -> f64 {
        (self.height() / self.width()).abs()
    }

    /// The corner that maps to the surface origin.
    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// The corner that maps to `(width, height)` on the surface.
    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.right, self.bottom)
    }
}

/// Size of the physical drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Like [`SurfaceSize::new`], but rejects a zero width or height.
    pub fn try_new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::DegenerateSurface { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(f64::from(self.width), f64::from(self.height))
    }

    /// Height over width.
    pub fn aspect_ratio(&self) -> f64 {
        (f64::from(self.height) / f64::from(self.width)).abs()
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Corners of a `size`-sized quad anchored at the origin, clockwise from the origin
/// in a Y-down space.
pub fn quad_corners(size: DVec2) -> [DVec2; 4] {
    [
        DVec2::ZERO,
        DVec2::new(size.x, 0.0),
        size,
        DVec2::new(0.0, size.y),
    ]
}
