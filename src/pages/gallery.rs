// SPDX-License-Identifier: MPL-2.0

//! Gallery page: mounts the carousel in the region allocated by the app.

use crate::app::{AppModel, Message};
use crate::fl;
use crate::widgets::{Carousel, SetupPhase};
use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// View for the Gallery page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::column::with_capacity(2)
        .push(widget::text::title1(fl!("gallery")))
        .push(widget::text::caption(fl!("gallery-hint")))
        .spacing(space_s);

    let body: Element<'_, Message> = if app.carousel.page_count() == 0 {
        notice(fl!("gallery-empty"), None, space_m)
    } else if let Some(error) = &app.layout_error {
        notice(error.clone(), None, space_m)
    } else {
        let mut carousel =
            Carousel::new(&app.carousel, Message::Carousel).placeholder_view(placeholder);
        if let Some(catalog) = &app.catalog {
            carousel = carousel.image_source(catalog);
        }

        let focused = match app.carousel.phase() {
            SetupPhase::AwaitingLayout => None,
            SetupPhase::Ready => app.carousel.model().focused_item().cloned(),
        };

        widget::column::with_capacity(2)
            .push(carousel)
            .push_maybe(focused.map(|name| widget::text::title4(name)))
            .spacing(space_s)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    };

    let mut content = widget::column::with_capacity(3)
        .push(header)
        .push(body)
        .spacing(space_m)
        .width(Length::Fill);

    if let Some(error) = &app.catalog_error {
        content = content.push(notice(
            fl!("assets-unavailable"),
            Some(error.clone()),
            space_m,
        ));
    }

    content.into()
}

/// Cell shown for an item without an image: an icon and the item's name.
fn placeholder<'a>(name: &str, size: f32) -> Element<'a, Message> {
    widget::container(
        widget::column::with_capacity(2)
            .push(icon::from_name("image-missing-symbolic").size(48))
            .push(widget::text::caption(fl!("image-missing", name = name)))
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .clip(true)
    .class(cosmic::style::Container::Card)
    .into()
}

/// A card with an icon, a message and an optional detail line.
fn notice(message: String, detail: Option<String>, space_m: u16) -> Element<'static, Message> {
    let text = widget::column::with_capacity(2)
        .push(widget::text::body(message))
        .push_maybe(detail.map(|detail| widget::text::caption(detail)))
        .spacing(2);

    widget::container(
        widget::row::with_capacity(2)
            .push(icon::from_name("dialog-information-symbolic").size(20))
            .push(text)
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(space_m)
    .width(Length::Fill)
    .class(cosmic::style::Container::Card)
    .into()
}
