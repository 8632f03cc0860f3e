//! Site palette.
//!
//! Exposed to the stylesheet and the template fragments as CSS custom
//! properties on `:root`; the light theme overrides the surface colors.

// === ACCENTS ===
pub const ACCENT_BLUE: &str = "#38bdf8";
pub const ACCENT_ORANGE: &str = "#fb923c";

// === DARK (default) ===
pub const DARK_BACKGROUND: &str = "#050816";
pub const DARK_SURFACE: &str = "#0f172a";
pub const DARK_BORDER: &str = "rgba(148, 163, 184, 0.2)";
pub const DARK_TEXT: &str = "#e2e8f0";
pub const DARK_TEXT_MUTED: &str = "rgba(226, 232, 240, 0.65)";

// === LIGHT ===
pub const LIGHT_BACKGROUND: &str = "#f8fafc";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_BORDER: &str = "rgba(15, 23, 42, 0.12)";
pub const LIGHT_TEXT: &str = "#0f172a";
pub const LIGHT_TEXT_MUTED: &str = "rgba(15, 23, 42, 0.6)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#22c55e";
pub const DANGER: &str = "#ef4444";
