// SPDX-License-Identifier: MPL-2.0

//! Errors reported by the carousel widget.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// The allocated region leaves no room for a cell once the zoom space
    /// and page indicator are subtracted.
    #[error("carousel height {height} must exceed {required} to fit a cell")]
    InsufficientHeight { height: f32, required: f32 },
}
