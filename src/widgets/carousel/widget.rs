// SPDX-License-Identifier: MPL-2.0

//! Carousel widget builder and rendering.

use super::message::CarouselMessage;
use super::metrics::{CORNER_RADIUS, CarouselMetrics, PAGING_CONTROL_HEIGHT};
use super::state::{CarouselState, CellVisual};
use crate::assets::ImageSource;
use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar};
use cosmic::iced::widget::Stack;
use cosmic::iced::{Alignment, Color, ContentFit, Length, Padding};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Widget id of the scrollable strip.
const STRIP_ID: &str = "carousel-strip";

/// Tint of the page indicator dots that are not current.
const INACTIVE_DOT: Color = Color::from_rgba(0.83, 0.83, 0.83, 0.8);

/// Returns the id of the carousel's scrollable strip.
pub fn strip_id() -> widget::Id {
    widget::Id::new(STRIP_ID)
}

/// Moves the strip to a scrollable offset returned by [`CarouselState`].
pub fn snap_to<T>(surface_offset: f32) -> Task<T>
where
    T: Send + 'static,
{
    cosmic::iced::widget::scrollable::scroll_to(
        strip_id(),
        AbsoluteOffset {
            x: surface_offset,
            y: 0.0,
        },
    )
}

/// Builder for the carousel widget.
///
/// # Example
///
/// ```ignore
/// Carousel::new(&self.carousel, Message::Carousel)
///     .image_source(&self.catalog)
///     .into()
/// ```
pub struct Carousel<'a, Message>
where
    Message: Clone + 'static,
{
    state: &'a CarouselState,
    on_message: Box<dyn Fn(CarouselMessage) -> Message + 'a>,
    images: Option<&'a dyn ImageSource>,
    placeholder_view: Option<Box<dyn Fn(&str, f32) -> Element<'a, Message> + 'a>>,
}

impl<'a, Message> Carousel<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new carousel widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The carousel state (owned by parent)
    /// - `on_message`: Function to wrap `CarouselMessage` into the parent's `Message` type
    pub fn new(
        state: &'a CarouselState,
        on_message: impl Fn(CarouselMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            on_message: Box::new(on_message),
            images: None,
            placeholder_view: None,
        }
    }

    /// Sets the service used to resolve item identifiers to images.
    ///
    /// Without one, every cell shows the placeholder.
    pub fn image_source(mut self, images: &'a dyn ImageSource) -> Self {
        self.images = Some(images);
        self
    }

    /// Sets a custom view for items whose image cannot be resolved.
    ///
    /// The function receives the item identifier and the cell's side length.
    pub fn placeholder_view<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&str, f32) -> Element<'a, Message> + 'a,
    {
        self.placeholder_view = Some(Box::new(renderer));
        self
    }

    fn default_placeholder_view(size: f32) -> Element<'a, Message> {
        widget::container(icon::from_name("image-missing-symbolic").size(48))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .class(cosmic::style::Container::Card)
            .into()
    }

    /// Renders one cell at its scaled size.
    fn render_cell(&self, item: &str, size: f32, scale: f32) -> Element<'a, Message> {
        let Some(handle) = self.images.and_then(|images| images.lookup(item)) else {
            return match self.placeholder_view {
                Some(ref renderer) => renderer(item, size),
                None => Self::default_placeholder_view(size),
            };
        };

        widget::container(
            widget::image(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .border_radius([CORNER_RADIUS * scale; 4]),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .clip(true)
        .into()
    }

    /// Renders a cell as a full-size layer of the strip, shifted so the
    /// scaled cell stays centered on its slot.
    fn render_layer(&self, metrics: &CarouselMetrics, cell: CellVisual) -> Element<'a, Message> {
        let size = metrics.item_size() * cell.scale;
        let left = metrics.inset() + metrics.cell_center_x(cell.index) - size / 2.0;
        let item = &self.state.model().items()[cell.index];

        widget::container(self.render_cell(item, size, cell.scale))
            .padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left,
            })
            .width(Length::Fixed(strip_width(metrics, self.state.page_count())))
            .height(Length::Fixed(metrics.strip_height()))
            .align_y(Vertical::Center)
            .into()
    }

    /// Renders the page indicator; hidden when there is at most one page.
    fn render_indicator(&self, metrics: &CarouselMetrics) -> Element<'a, Message> {
        let pages = indicator_pages(self.state.page_count(), self.state.current_page());

        let mut dots = widget::row::with_capacity(pages.len())
            .spacing(8)
            .align_y(Alignment::Center);

        for current in pages {
            let dot = widget::text::body("●");
            dots = dots.push(if current {
                dot
            } else {
                dot.class(cosmic::theme::Text::Color(INACTIVE_DOT))
            });
        }

        widget::container(dots)
            .width(Length::Fixed(metrics.width()))
            .height(Length::Fixed(PAGING_CONTROL_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        let Some(metrics) = self.state.metrics().copied() else {
            // Nothing to lay out before the first bounds arrive.
            return widget::column::with_capacity(0).into();
        };

        let content_width = strip_width(&metrics, self.state.page_count());
        let layers: Vec<Element<'a, Message>> = self
            .state
            .cells()
            .into_iter()
            .map(|cell| self.render_layer(&metrics, cell))
            .collect();
        let indicator = self.render_indicator(&metrics);

        let content = Stack::with_children(layers)
            .width(Length::Fixed(content_width))
            .height(Length::Fixed(metrics.strip_height()));

        let on_message = self.on_message;
        let strip = widget::scrollable(content)
            .id(strip_id())
            .direction(Direction::Horizontal(
                Scrollbar::new().width(0.0).scroller_width(0.0),
            ))
            .on_scroll(move |viewport| {
                on_message(CarouselMessage::Scrolled {
                    surface_offset: viewport.absolute_offset().x,
                })
            })
            .width(Length::Fixed(metrics.width()))
            .height(Length::Fixed(metrics.strip_height()));

        widget::column::with_capacity(2)
            .push(strip)
            .push(indicator)
            .width(Length::Fixed(metrics.width()))
            .height(Length::Fixed(metrics.height()))
            .into()
    }
}

/// One entry per indicator dot, `true` for the current page. Empty when
/// there is at most one page.
fn indicator_pages(count: usize, current: usize) -> Vec<bool> {
    if count <= 1 {
        return Vec::new();
    }

    (0..count).map(|page| page == current).collect()
}

/// Total scrollable width: every cell plus both insets.
fn strip_width(metrics: &CarouselMetrics, count: usize) -> f32 {
    2.0 * metrics.inset() + metrics.content_width(count)
}

impl<'a, Message> From<Carousel<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(carousel: Carousel<'a, Message>) -> Self {
        carousel.build()
    }
}
