//! # Animation Timeline
//!
//! Each frame of the cycle owns an immutable [`FramePose`]. Poses are computed
//! once, up front, by folding the keyframe steps in order, so rendering a frame
//! any number of times always yields the same pose.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// Translation, rotation and scale shared by every sprite in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FramePose {
    /// Offset in logical units.
    pub translation: DVec2,
    /// Radians. Positive turns +X toward +Y.
    pub rotation: f64,
    pub scale: DVec2,
}

impl FramePose {
    pub const IDENTITY: Self = Self {
        translation: DVec2::ZERO,
        rotation: 0.0,
        scale: DVec2::ONE,
    };

    /// Translate, then rotate, then scale (the scale acts first on the image).
    pub fn to_affine(&self) -> DAffine2 {
        self.placement() * self.shape()
    }

    /// The translation part alone.
    pub fn placement(&self) -> DAffine2 {
        DAffine2::from_translation(self.translation)
    }

    /// Rotation after scale, about the origin.
    pub fn shape(&self) -> DAffine2 {
        DAffine2::from_angle(self.rotation) * DAffine2::from_scale(self.scale)
    }
}

impl Default for FramePose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// How one frame derives its pose from the frame before it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum KeyframeStep {
    /// Back to the identity pose.
    Reset,
    /// Absolute translation and scale, rotation cleared.
    Place { translation: DVec2, scale: DVec2 },
    /// Adds to the previous rotation, in radians.
    Rotate(f64),
    /// Replaces the scale, keeping translation and rotation.
    Stretch(DVec2),
}

impl KeyframeStep {
    pub fn apply(&self, previous: FramePose) -> FramePose {
        match *self {
            KeyframeStep::Reset => FramePose::IDENTITY,
            KeyframeStep::Place { translation, scale } => FramePose {
                translation,
                rotation: 0.0,
                scale,
            },
            KeyframeStep::Rotate(delta) => FramePose {
                rotation: previous.rotation + delta,
                ..previous
            },
            KeyframeStep::Stretch(scale) => FramePose { scale, ..previous },
        }
    }
}

/// The angle used for the "quarter turn clockwise" frame.
///
/// `Radians` is a true quarter turn, -π/2. `LegacyNinetyRadians` applies a bare
/// `-90` radians, for comparison against renderings made with that constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuarterTurn {
    #[default]
    Radians,
    LegacyNinetyRadians,
}

impl QuarterTurn {
    pub fn clockwise_angle(self) -> f64 {
        match self {
            QuarterTurn::Radians => -FRAC_PI_2,
            QuarterTurn::LegacyNinetyRadians => -90.0,
        }
    }
}

/// A cyclic sequence of precomputed poses. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTimeline {
    steps: Vec<KeyframeStep>,
    poses: Vec<FramePose>,
}

impl AnimationTimeline {
    /// Folds `steps` into poses, starting from the identity pose.
    pub fn new(steps: Vec<KeyframeStep>) -> Result<Self, CanvasError> {
        if steps.is_empty() {
            return Err(CanvasError::EmptyTimeline);
        }

        let poses = fold_poses(&steps);

        Ok(Self { steps, poses })
    }

    /// The five-frame cycle: reset, move, turn 45° counter-clockwise,
    /// turn a quarter clockwise, stretch.
    pub fn classroom(turn: QuarterTurn) -> Self {
        let steps = vec![
            KeyframeStep::Reset,
            KeyframeStep::Place {
                translation: DVec2::new(-5.0, 7.0),
                scale: DVec2::ONE,
            },
            KeyframeStep::Rotate(FRAC_PI_4),
            KeyframeStep::Rotate(turn.clockwise_angle()),
            KeyframeStep::Stretch(DVec2::new(2.0, 0.5)),
        ];

        let poses = fold_poses(&steps);

        Self { steps, poses }
    }

    /// Pose for `frame`, wrapping past the end of the cycle.
    pub fn pose(&self, frame: usize) -> FramePose {
        self.poses[frame % self.poses.len()]
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn steps(&self) -> &[KeyframeStep] {
        &self.steps
    }

    pub fn poses(&self) -> &[FramePose] {
        &self.poses
    }
}

fn fold_poses(steps: &[KeyframeStep]) -> Vec<FramePose> {
    steps
        .iter()
        .scan(FramePose::IDENTITY, |pose, step| {
            *pose = step.apply(*pose);
            Some(*pose)
        })
        .collect()
}
