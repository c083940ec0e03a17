use iced::widget::container;
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod gallery;
mod state;
mod ui;

use config::AppConfig;
use gallery::{Gallery, MountId};
use state::data::AssetsOptions;
use state::library::DirectoryLibrary;

/// Layout shell: fills the window and hosts the gallery screen
struct PhotoFinder {
    gallery: Gallery,
    /// Current window size, the grid divides its width
    viewport: Size,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Gallery(gallery::Message),
    WindowResized(Size),
}

impl PhotoFinder {
    /// Mount the gallery and start loading the photo library
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let root = config.library_root();
        info!(root = %root.display(), page_size = config.page_size, "Opening photo library");

        let library = Arc::new(DirectoryLibrary::new(root));
        let options = AssetsOptions {
            first: config.page_size,
            ..AssetsOptions::default()
        };

        const FIRST_MOUNT: MountId = 1;
        let (gallery, load) = Gallery::mount(FIRST_MOUNT, library, options);

        (
            PhotoFinder {
                gallery,
                viewport: Size::new(config.window_width, config.window_height),
            },
            load.map(Message::Gallery),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.gallery.update(message),
            Message::WindowResized(size) => self.viewport = size,
        }

        Task::none()
    }

    fn view(&self) -> Element<Message> {
        container(self.gallery.view(self.viewport.width).map(Message::Gallery))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::shell)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Pick the log filter: a usable RUST_LOG value wins over the configured level
fn log_filter(rust_log: Option<&str>, configured: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(configured))
}

/// Install the tracing subscriber
fn init_logging(config: &AppConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref(), &config.log_level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> iced::Result {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let config = config.with_env_overrides();

    init_logging(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting PhotoFinder");
    if let Some(e) = config_error {
        warn!(error = %e, "Ignoring configuration file");
    }

    let window_size = Size::new(config.window_width, config.window_height);

    iced::application(gallery::TITLE, PhotoFinder::update, PhotoFinder::view)
        .subscription(PhotoFinder::subscription)
        .theme(PhotoFinder::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || PhotoFinder::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_over_config() {
        let filter = log_filter(Some("debug"), "info");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_config_level_without_rust_log() {
        assert_eq!(log_filter(None, "warn").to_string(), "warn");
        assert_eq!(log_filter(Some("  "), "warn").to_string(), "warn");
    }
}
