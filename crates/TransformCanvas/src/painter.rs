use glam::DAffine2;

use crate::animation::FramePose;
use crate::config::AnimationConfig;
use crate::render::{DrawCommand, RenderList};
use crate::view::ViewportMapping;

/// Converts a frame pose into concrete drawing commands.
///
/// Every sprite is drawn with the same pose. The sprite's own offset is applied
/// after the pose translation and before the rotation, so offsets are not rotated.
pub struct Painter;

impl Painter {
    /// Generates the display list for one frame.
    ///
    /// # Arguments
    /// * `mapping` - Logical to surface transform for this surface size.
    /// * `config` - Sprites and background color.
    /// * `pose` - The frame's translation, rotation and scale.
    pub fn draw_frame(
        mapping: &ViewportMapping,
        config: &AnimationConfig,
        pose: &FramePose,
    ) -> RenderList {
        let mut draw_list = Vec::with_capacity(config.sprites.len() + 1);

        draw_list.push(DrawCommand::Clear {
            color: config.style.background_color,
        });

        let placement = pose.placement();
        let shape = pose.shape();

        for sprite in &config.sprites {
            let transform = mapping.transform
                * placement
                * DAffine2::from_translation(sprite.offset)
                * shape;

            draw_list.push(DrawCommand::Image {
                image: sprite.image,
                transform,
            });
        }

        draw_list
    }
}
