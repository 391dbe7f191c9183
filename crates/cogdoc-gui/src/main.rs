//! cogdocs viewer - Desktop GUI Application

use std::path::PathBuf;

use cogdoc_gui::app::App;
use cogdoc_gui::component::icon::LUCIDE_FONT_BYTES;
use iced::Size;
use iced::window;

/// Application entry point.
///
/// An optional first argument names a documentation file to open on start.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting cogdocs viewer");

    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    iced::application(move || App::new(initial.clone()), App::update, App::view)
        .title(App::title)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(900.0, 720.0),
            min_size: Some(Size::new(480.0, 360.0)),
            ..Default::default()
        })
        .run()
}
