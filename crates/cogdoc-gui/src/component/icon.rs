//! Icon helpers using iced_fonts with Lucide icons.
//!
//! See <https://lucide.dev/icons/> for the icon catalog.

use cogdoc_core::Caret;
use iced::widget::Text;

// Re-export the Lucide font bytes for loading in main.rs
pub use iced_fonts::LUCIDE_FONT_BYTES;

/// Chevron for a collapsible section header.
pub fn icon_caret(caret: Caret) -> Text<'static> {
    match caret {
        Caret::Right => iced_fonts::lucide::chevron_right(),
        Caret::Down => iced_fonts::lucide::chevron_down(),
    }
}

/// Folder open icon - for the Open button
pub fn icon_folder_open() -> Text<'static> {
    iced_fonts::lucide::folder_open()
}

/// Refresh icon - for the Reload button
pub fn icon_refresh() -> Text<'static> {
    iced_fonts::lucide::refresh_cw()
}

/// Alert icon - for the status line
pub fn icon_alert() -> Text<'static> {
    iced_fonts::lucide::triangle_alert()
}
