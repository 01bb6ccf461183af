// SPDX-License-Identifier: MPL-2.0

//! Horizontally scrolling image carousel with a center focus lens.
//!
//! The cells form an edge-to-edge strip above a page indicator. The cell
//! closest to the visible center grows up to 20% larger and is drawn above
//! its neighbours; when a gesture ends the strip snaps so that exactly one
//! cell is centered.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::carousel::{self, Carousel, CarouselMessage, CarouselModel, CarouselState};
//!
//! // In your app state
//! struct AppModel {
//!     carousel: CarouselState,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Carousel(CarouselMessage),
//! }
//!
//! // Once the allocated bounds are known (and whenever they change)
//! if let Some(offset) = self.carousel.set_bounds(width, height)? {
//!     return carousel::snap_to(offset);
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     Carousel::new(&self.carousel, Message::Carousel).into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Carousel(carousel_msg) => {
//!             if let Some(offset) = self.carousel.update(carousel_msg) {
//!                 return carousel::snap_to(offset);
//!             }
//!         }
//!     }
//!     Task::none()
//! }
//! ```
//!
//! While [`CarouselState::is_tracking`] is true the parent should send
//! [`CarouselMessage::Tick`] periodically so the end of a gesture is noticed.

mod error;
mod message;
mod metrics;
mod model;
mod state;
mod tracker;
mod widget;

pub use message::{CarouselMessage, StepDirection};
pub use model::CarouselModel;
pub use state::{CarouselState, SetupPhase};
pub use widget::{Carousel, snap_to};
