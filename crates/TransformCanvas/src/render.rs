//! # Rendering System
//!
//! The Stage does not draw. It outputs a display list of `DrawCommand`s and the
//! host application (macroquad, WGPU, a canvas element...) turns them into pixels.

use glam::{DAffine2, Vec4};
use serde::{Deserialize, Serialize};

use crate::sprite::ImageId;

/// A single drawing primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear {
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// Draw a bitmap through an affine transform.
    Image {
        image: ImageId,
        /// Maps image pixel coordinates (origin at the top-left pixel, +Y down
        /// the rows) into **Surface Space** pixels. Hosts map the four corners
        /// of the bitmap through this and draw a textured quad.
        transform: DAffine2,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
