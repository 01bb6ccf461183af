// SPDX-License-Identifier: MPL-2.0

use crate::assets::AssetCatalog;
use crate::config::Config;
use crate::fl;
use crate::helpers;
use crate::pages;
use crate::widgets::carousel;
use crate::widgets::{CarouselMessage, CarouselModel, CarouselState, StepDirection};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::keyboard::{self, Key, key::Named};
use cosmic::iced::{Event, Length, Size, Subscription, event, time, window};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, menu};
use std::collections::HashMap;
use std::time::Duration;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// How often a gesture in progress is checked for its end.
const GESTURE_TICK: Duration = Duration::from_millis(50);

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,

    // === App-specific state ===
    /// The carousel mounted on the gallery page
    pub carousel: CarouselState,
    /// Images found for the carousel items
    pub catalog: Option<AssetCatalog>,
    /// Error message when scanning the asset directory fails
    pub catalog_error: Option<String>,
    /// Error message when the carousel does not fit its region
    pub layout_error: Option<String>,
    /// Last known size of the main window
    window_size: Option<Size>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),
    WindowResized(Size),

    // Assets
    CatalogLoaded(Result<AssetCatalog, String>),

    // Carousel
    Carousel(CarouselMessage),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.mmurphy.Vista";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for why in errors {
                        tracing::warn!(%why, "invalid config entry, using default");
                    }
                    config
                }
            })
            .unwrap_or_default();

        let carousel = CarouselState::new(CarouselModel::new(config.items.clone()));

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            config,
            carousel,
            catalog: None,
            catalog_error: None,
            layout_error: None,
            window_size: None,
        };

        // Set the window title and start looking for the images.
        let command = Task::batch([app.update_title(), app.load_catalog()]);

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        widget::container(pages::gallery::view(self, space_s, space_m))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let mut subscriptions = vec![
            // Watch for application configuration changes.
            self.core()
                .watch_config::<Config>(Self::APP_ID)
                .map(|update| Message::UpdateConfig(update.config)),
            // Window bounds drive the carousel layout; unhandled arrow keys step it.
            event::listen_with(|event, status, _id| match event {
                Event::Window(window::Event::Opened { size, .. })
                | Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(named),
                    ..
                }) if status == event::Status::Ignored => match named {
                    Named::ArrowLeft => {
                        Some(Message::Carousel(CarouselMessage::Step(StepDirection::Previous)))
                    }
                    Named::ArrowRight => {
                        Some(Message::Carousel(CarouselMessage::Step(StepDirection::Next)))
                    }
                    _ => None,
                },
                _ => None,
            }),
        ];

        // Only tick while a gesture may still end.
        if self.carousel.is_tracking() {
            subscriptions.push(
                time::every(GESTURE_TICK)
                    .map(|instant| Message::Carousel(CarouselMessage::Tick(instant))),
            );
        }

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                let items_changed = config.items != self.config.items;
                let assets_changed = items_changed || config.asset_dir != self.config.asset_dir;
                self.config = config;

                if items_changed {
                    self.carousel =
                        CarouselState::new(CarouselModel::new(self.config.items.clone()));
                }

                let reload = if assets_changed {
                    self.load_catalog()
                } else {
                    Task::none()
                };

                // The carousel height may have changed too.
                return Task::batch([reload, self.apply_bounds()]);
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    tracing::error!("failed to open {url:?}: {err}");
                }
            },

            Message::WindowResized(size) => {
                self.window_size = Some(size);
                return self.apply_bounds();
            }

            Message::CatalogLoaded(result) => match result {
                Ok(catalog) => {
                    tracing::info!(
                        dir = %catalog.dir().display(),
                        found = catalog.len(),
                        items = self.carousel.page_count(),
                        "asset catalog loaded"
                    );
                    if catalog.is_empty() {
                        tracing::warn!(
                            dir = %catalog.dir().display(),
                            "no images found; showing placeholders"
                        );
                    }
                    self.catalog = Some(catalog);
                    self.catalog_error = None;
                }
                Err(err) => {
                    tracing::warn!("failed to load assets: {err}");
                    self.catalog = None;
                    self.catalog_error = Some(err);
                }
            },

            Message::Carousel(carousel_msg) => {
                if let Some(offset) = self.carousel.update(carousel_msg) {
                    return carousel::snap_to(offset);
                }
            }
        }

        Task::none()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = fl!("app-title");

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Region allocated to the carousel: the window's width inside the page
    /// padding, and the configured height (capped).
    pub fn carousel_bounds(&self) -> Option<Size> {
        let window = self.window_size?;
        let padding = f32::from(cosmic::theme::spacing().space_m);

        Some(Size::new(
            (window.width - 2.0 * padding).max(0.0),
            self.config.carousel_height(),
        ))
    }

    /// Hands the allocated region to the carousel and applies the offset it
    /// asks for.
    fn apply_bounds(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(bounds) = self.carousel_bounds() else {
            return Task::none();
        };

        match self.carousel.set_bounds(bounds.width, bounds.height) {
            Ok(offset) => {
                self.layout_error = None;
                offset.map_or_else(Task::none, carousel::snap_to)
            }
            Err(err) => {
                tracing::warn!(%err, "carousel does not fit its region");
                self.layout_error = Some(err.to_string());
                Task::none()
            }
        }
    }

    /// Scans the asset directory for the configured items.
    fn load_catalog(&self) -> Task<cosmic::Action<Message>> {
        let dir = self.config.asset_dir.clone();
        let items = self.config.items.clone();

        cosmic::task::future(async move {
            let result = helpers::load_catalog(dir, items).await;
            cosmic::Action::App(Message::CatalogLoaded(result))
        })
    }
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
