use log::Level;

pub const SITE_TITLE: &str = "Kalpi Capital";
pub const SITE_DESCRIPTION: &str = "India's first systematic quant investing platform";

pub const LOGO_PATH: &str = "/kalpilogo.jpeg";
pub const LOGO_ALT: &str = "Kalpi Capital Logo";

/// localStorage key holding the persisted theme token.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class put on `<html>` while the dark theme is active.
pub const DARK_MARKER_CLASS: &str = "dark";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
