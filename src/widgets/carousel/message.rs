// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the carousel widget and the events its state reacts to.

use std::time::Instant;

/// Messages emitted by the carousel widget.
///
/// These should be wrapped by the parent's message type and passed to
/// [`CarouselState::update`](super::CarouselState::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    /// The strip's scrollable reported a new offset.
    Scrolled {
        /// Horizontal offset as reported by the scrollable.
        surface_offset: f32,
    },

    /// Periodic tick while a gesture is being tracked, used to detect its end.
    Tick(Instant),

    /// Move one item towards the start or the end, as from the keyboard.
    Step(StepDirection),
}

/// Direction of a single-item step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Previous,
    Next,
}

impl StepDirection {
    /// Velocity of the release a step is equivalent to.
    pub fn velocity(self) -> f32 {
        match self {
            StepDirection::Previous => -1.0,
            StepDirection::Next => 1.0,
        }
    }
}

/// Events from the scroll surface, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// The content moved.
    PositionChanged { offset: f32 },

    /// A drag is ending. The state replaces the proposed resting offset
    /// with one that centers a cell.
    DragWillEnd { velocity: f32, proposed_offset: f32 },
}
