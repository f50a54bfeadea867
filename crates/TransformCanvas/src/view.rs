//! # Viewport System
//!
//! Maps a logical coordinate window onto the physical drawing surface.
//! Everything the painter emits is expressed through the transform computed here.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

use crate::math::{SurfaceSize, ViewportWindow};

/// Result of mapping a logical window onto a surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportMapping {
    /// Logical -> surface pixels. Scale factors are negative on a flipped axis.
    pub transform: DAffine2,
    /// The larger of the logical width and height covered by one physical pixel.
    /// Useful for expressing stroke widths in logical units.
    pub pixel_size: f64,
    /// The logical window actually mapped, after any aspect adjustment.
    pub window: ViewportWindow,
}

impl ViewportMapping {
    /// Converts a point from **Logical Space** to **Surface Space** (pixels).
    pub fn to_surface(&self, logical: DVec2) -> DVec2 {
        self.transform.transform_point2(logical)
    }

    /// Converts a point from **Surface Space** (pixels) back to **Logical Space**.
    pub fn to_logical(&self, surface: DVec2) -> DVec2 {
        self.transform.inverse().transform_point2(surface)
    }
}

/// Computes the window-to-viewport transform for `window` drawn on `surface`.
///
/// With `preserve_aspect` set, the window is grown symmetrically about its
/// center along whichever axis is too short, so that its aspect ratio matches
/// the surface. It is never cropped.
///
/// No validation happens here: a zero-width window or surface yields a
/// non-finite transform. Use [`ViewportWindow::try_new`] and
/// [`SurfaceSize::try_new`] when the inputs are not known to be sound.
pub fn compute_transform(
    surface: SurfaceSize,
    window: ViewportWindow,
    preserve_aspect: bool,
) -> ViewportMapping {
    let width = f64::from(surface.width);
    let height = f64::from(surface.height);

    let window = if preserve_aspect {
        fit_aspect(window, surface.aspect_ratio())
    } else {
        window
    };

    // Translate into the window first, then scale into pixels.
    let transform = DAffine2::from_scale(DVec2::new(
        width / window.width(),
        height / window.height(),
    )) * DAffine2::from_translation(-window.top_left());

    let pixel_width = (window.width() / width).abs();
    let pixel_height = (window.height() / height).abs();

    ViewportMapping {
        transform,
        pixel_size: pixel_width.max(pixel_height),
        window,
    }
}

fn fit_aspect(window: ViewportWindow, display_aspect: f64) -> ViewportWindow {
    let ViewportWindow {
        mut left,
        mut right,
        mut bottom,
        mut top,
    } = window;
    let requested_aspect = window.aspect_ratio();

    if display_aspect > requested_aspect {
        // Too short vertically.
        let excess = (bottom - top) * (display_aspect / requested_aspect - 1.0);
        bottom += excess / 2.0;
        top -= excess / 2.0;
    } else if display_aspect < requested_aspect {
        // Too narrow horizontally.
        let excess = (right - left) * (requested_aspect / display_aspect - 1.0);
        right += excess / 2.0;
        left -= excess / 2.0;
    }

    ViewportWindow::new(left, right, bottom, top)
}
