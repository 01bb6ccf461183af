// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Vista application.

pub mod carousel;

pub use carousel::{
    Carousel, CarouselMessage, CarouselModel, CarouselState, SetupPhase, StepDirection,
};
