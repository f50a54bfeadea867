use thiserror::Error;

/// Errors raised when constructing canvas values from caller-supplied numbers.
///
/// The viewport mapper itself never returns these; it trusts its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("viewport window has zero extent: left={left}, right={right}, bottom={bottom}, top={top}")]
    DegenerateWindow {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
    #[error("surface has zero extent: {width}x{height}")]
    DegenerateSurface { width: u32, height: u32 },
    #[error("frame clock interval must be greater than zero")]
    ZeroInterval,
    #[error("animation timeline has no frames")]
    EmptyTimeline,
}
