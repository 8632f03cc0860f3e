//! Colors and global stylesheet

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

use colors::*;

/// `:root` custom properties for both themes.
pub fn root_variables() -> String {
    format!(
        ":root {{ \
           --accent-blue: {ACCENT_BLUE}; --accent-orange: {ACCENT_ORANGE}; \
           --success: {SUCCESS}; --danger: {DANGER}; \
           --bg: {DARK_BACKGROUND}; --surface: {DARK_SURFACE}; --border: {DARK_BORDER}; \
           --text: {DARK_TEXT}; --text-muted: {DARK_TEXT_MUTED}; \
         }} \
         [data-theme=\"light\"] {{ \
           --bg: {LIGHT_BACKGROUND}; --surface: {LIGHT_SURFACE}; --border: {LIGHT_BORDER}; \
           --text: {LIGHT_TEXT}; --text-muted: {LIGHT_TEXT_MUTED}; \
         }}"
    )
}
