//! # Configuration
//!
//! The compiled-in constants that drive the animation, gathered in one struct.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::QuarterTurn;
use crate::clock::DEFAULT_INTERVAL;
use crate::math::ViewportWindow;
use crate::sprite::{self, Sprite};

/// Configuration parameters for the Stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Logical window mapped onto the surface. Default: x and y in -75..75, Y-up.
    pub window: ViewportWindow,
    /// Grow the window to match the surface aspect ratio. Default: true.
    pub preserve_aspect: bool,
    /// Time each frame stays on screen, in milliseconds. Default: 1000.
    pub tick_interval_ms: u64,
    /// Angle used by the clockwise quarter-turn frame. Default: -π/2.
    #[serde(default)]
    pub quarter_turn: QuarterTurn,
    /// Sprites in draw order.
    pub sprites: Vec<Sprite>,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: StageStyle,
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            window: ViewportWindow::new(-75.0, 75.0, -75.0, 75.0),
            preserve_aspect: true,
            tick_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            quarter_turn: QuarterTurn::default(),
            sprites: sprite::default_sprites(),
            style: StageStyle::default(),
        }
    }
}

/// Visual styling configuration.
///
/// Colors are `glam::Vec4` RGBA in 0.0 - 1.0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageStyle {
    /// Fill applied to the whole surface before the sprites.
    pub background_color: glam::Vec4,
}

impl Default for StageStyle {
    fn default() -> Self {
        Self {
            background_color: glam::Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}
