//! # TransformCanvas
//!
//! `transform_canvas` is a headless 2D transform animator. It maps a logical
//! coordinate window onto a physical surface, steps through a fixed cycle of
//! translate / rotate / scale poses on a cooperative clock, and hands the host
//! a display list to render.
//!
//! ## Core Architecture
//! - **View (`src/view.rs`)**: Window-to-viewport mapping (Logical <-> Surface).
//! - **Animation (`src/animation.rs`)**: Immutable per-frame poses.
//! - **Clock (`src/clock.rs`)**: Fixed-interval frame advance driven by the host loop.
//! - **Render (`src/render.rs`)**: Outputs a list of `DrawCommand`s for the host to render.

pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod math;
pub mod painter;
pub mod render;
pub mod sprite;
pub mod view;

use std::time::Duration;

use animation::{AnimationTimeline, FramePose};
use clock::FrameClock;
use render::RenderList;
use view::ViewportMapping;

// Re-exports for convenience
pub use config::AnimationConfig;
pub use error::CanvasError;
pub use math::{SurfaceSize, ViewportWindow};

/// Something the host may want to react to, besides the frame itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageEvent {
    /// The clock ticked and the animation moved to `frame`. Implies a redraw.
    FrameAdvanced { frame: usize },
}

/// Everything the host needs to draw the current frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub index: usize,
    pub pose: FramePose,
    pub mapping: ViewportMapping,
    pub commands: RenderList,
}

/// The main entry point for the library.
///
/// Owns the clock and the timeline. Intended to be created once and updated
/// every iteration of the host's loop.
pub struct Stage {
    config: AnimationConfig,
    timeline: AnimationTimeline,
    clock: FrameClock,
}

impl Stage {
    /// Creates a Stage running the classroom timeline.
    pub fn new(config: AnimationConfig) -> Result<Self, CanvasError> {
        let timeline = AnimationTimeline::classroom(config.quarter_turn);
        Self::with_timeline(config, timeline)
    }

    /// Creates a Stage running a caller-supplied timeline.
    pub fn with_timeline(
        config: AnimationConfig,
        timeline: AnimationTimeline,
    ) -> Result<Self, CanvasError> {
        let clock = FrameClock::new(config.tick_interval(), timeline.len())?;
        tracing::info!(
            frames = timeline.len(),
            interval_ms = config.tick_interval_ms,
            quarter_turn = ?config.quarter_turn,
            "Stage created"
        );
        Ok(Self {
            config,
            timeline,
            clock,
        })
    }

    /// The core update loop.
    ///
    /// Feeds `dt` to the clock, then paints the current frame for `surface`.
    /// Call once per host frame; the surface size is re-read every time.
    pub fn update(&mut self, dt: Duration, surface: SurfaceSize) -> (Frame, Vec<StageEvent>) {
        let mut events = Vec::new();

        // 1. Advance the clock, one event per tick
        for frame in self.clock.advance(dt) {
            tracing::debug!(frame, "Frame advanced");
            events.push(StageEvent::FrameAdvanced { frame });
        }

        // 2. Render
        (self.render(surface), events)
    }

    /// Paints the current frame without touching the clock.
    pub fn render(&self, surface: SurfaceSize) -> Frame {
        let index = self.clock.frame();
        let pose = self.timeline.pose(index);
        let mapping = view::compute_transform(
            surface,
            self.config.window,
            self.config.preserve_aspect,
        );
        let commands = painter::Painter::draw_frame(&mapping, &self.config, &pose);

        Frame {
            index,
            pose,
            mapping,
            commands,
        }
    }

    /// Configuration the Stage was built with. The clock interval and quarter
    /// turn are fixed at construction, so the config is read-only afterwards.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn frame(&self) -> usize {
        self.clock.frame()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn timeline(&self) -> &AnimationTimeline {
        &self.timeline
    }
}
