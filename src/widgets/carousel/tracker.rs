// SPDX-License-Identifier: MPL-2.0

//! Derives drag releases from the positions reported by the scrollable.
//!
//! The scrollable only tells us where it is. A release is inferred once the
//! position stops changing for [`SETTLE_AFTER`], with the release velocity
//! measured over the last [`VELOCITY_WINDOW`] of movement.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples older than this (relative to the newest one) do not count
/// towards the release velocity.
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(100);
/// Quiet period after which a gesture is considered released.
pub const SETTLE_AFTER: Duration = Duration::from_millis(150);
/// Reported offsets this close to a programmatic target are its echo.
const ECHO_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    offset: f32,
    at: Instant,
}

/// A gesture that has come to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Signed velocity in content units per second; positive moves towards
    /// later items.
    pub velocity: f32,
    /// Where the content would come to rest on its own.
    pub proposed_offset: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    samples: VecDeque<Sample>,
    programmatic_target: Option<f32>,
}

impl ScrollTracker {
    /// Remembers an offset we are about to apply ourselves, so that the
    /// scrollable reporting it back is not mistaken for a user gesture.
    pub fn expect_programmatic(&mut self, offset: f32) {
        self.samples.clear();
        self.programmatic_target = Some(offset);
    }

    /// Records a reported offset. The echo of a programmatic scroll is
    /// dropped.
    pub fn record(&mut self, offset: f32, at: Instant) {
        if let Some(target) = self.programmatic_target.take() {
            if (offset - target).abs() <= ECHO_TOLERANCE {
                return;
            }
        }

        self.samples.push_back(Sample { offset, at });

        // Only the newest window matters for the velocity.
        while let Some(front) = self.samples.front() {
            if at.saturating_duration_since(front.at) > VELOCITY_WINDOW && self.samples.len() > 1 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Whether a gesture is in progress and [`poll`](Self::poll) should be
    /// driven.
    pub fn is_tracking(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Velocity over the newest samples, or `0.0` with fewer than two.
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };

        let elapsed = last.at.saturating_duration_since(first.at).as_secs_f32();
        if self.samples.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }

        (last.offset - first.offset) / elapsed
    }

    /// Emits the release once the gesture has been quiet long enough.
    pub fn poll(&mut self, now: Instant) -> Option<DragRelease> {
        let last = *self.samples.back()?;
        if now.saturating_duration_since(last.at) < SETTLE_AFTER {
            return None;
        }

        let release = DragRelease {
            velocity: self.velocity(),
            proposed_offset: last.offset,
        };
        self.samples.clear();
        Some(release)
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.programmatic_target = None;
    }
}
