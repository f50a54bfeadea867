use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The three bitmaps the animation draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageId {
    Beaker,
    Cross,
    WelderMask,
}

impl ImageId {
    pub const ALL: [ImageId; 3] = [ImageId::Beaker, ImageId::Cross, ImageId::WelderMask];

    /// File name under the host's asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ImageId::Beaker => "beaker.png",
            ImageId::Cross => "cross.png",
            ImageId::WelderMask => "welder_mask.png",
        }
    }
}

/// An image placed at a fixed logical offset from the frame translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub image: ImageId,
    pub offset: DVec2,
}

impl Sprite {
    pub const fn new(image: ImageId, offset: DVec2) -> Self {
        Self { image, offset }
    }
}

/// Beaker at the origin, cross up-left, welder mask down-right (in a Y-up window).
pub fn default_sprites() -> Vec<Sprite> {
    vec![
        Sprite::new(ImageId::Beaker, DVec2::ZERO),
        Sprite::new(ImageId::Cross, DVec2::new(-30.0, 30.0)),
        Sprite::new(ImageId::WelderMask, DVec2::new(30.0, -30.0)),
    ]
}
