//! # Frame Clock
//!
//! A cooperative tick source. The host feeds it elapsed time from its own loop;
//! every whole interval crossed advances the frame counter by one, wrapping at
//! the frame count. Nothing here spawns a thread or sleeps.

use std::time::Duration;

use crate::error::CanvasError;

/// Default time each frame stays on screen.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: Duration,
    frame_count: usize,
    frame: usize,
    /// Time fed in since the last tick.
    pending: Duration,
    elapsed: Duration,
}

impl FrameClock {
    pub fn new(interval: Duration, frame_count: usize) -> Result<Self, CanvasError> {
        if interval.is_zero() {
            return Err(CanvasError::ZeroInterval);
        }
        if frame_count == 0 {
            return Err(CanvasError::EmptyTimeline);
        }
        Ok(Self {
            interval,
            frame_count,
            frame: 0,
            pending: Duration::ZERO,
            elapsed: Duration::ZERO,
        })
    }

    /// Feeds `dt` into the clock and returns the frame reached by each tick,
    /// in order. A non-empty result means the host should redraw.
    ///
    /// At most one full cycle of ticks is replayed per call. Any older
    /// intervals still move the counter, so the final frame is the same as if
    /// every tick had been replayed.
    pub fn advance(&mut self, dt: Duration) -> Vec<usize> {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.pending = self.pending.saturating_add(dt);

        let interval = self.interval.as_nanos();
        let pending = self.pending.as_nanos();
        let ticks = pending / interval;
        if ticks == 0 {
            return Vec::new();
        }
        self.pending = duration_from_nanos(pending % interval);

        let count = self.frame_count as u128;
        let replayed = ticks.min(count);
        let skipped = ticks - replayed;
        self.frame = ((self.frame as u128 + skipped) % count) as usize;

        (0..replayed).map(|_| self.tick()).collect()
    }

    /// Fires one tick immediately, independent of accumulated time.
    pub fn tick(&mut self) -> usize {
        self.frame = (self.frame + 1) % self.frame_count;
        self.frame
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total time fed through [`FrameClock::advance`].
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
