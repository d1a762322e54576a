use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: i32 = 50;
pub const MAX_ZOOM: i32 = 300;
pub const MIN_WINDOW_WIDTH: i32 = 900;
pub const MIN_WINDOW_HEIGHT: i32 = 600;
pub const DEFAULT_WINDOW_WIDTH: i32 = 1024;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 768;
pub const DEFAULT_ZOOM: i32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

// Unknown theme names fall back to light instead of rejecting the whole file.
impl From<String> for Theme {
    fn from(value: String) -> Self {
        match value.as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    pub width: i32,
    pub height: i32,
    pub maximized: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            maximized: false,
        }
    }
}

/// Display preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub theme: Theme,
    #[serde(rename = "zoom")]
    pub zoom_percent: i32,
    pub window: WindowState,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            zoom_percent: DEFAULT_ZOOM,
            window: WindowState::default(),
        }
    }
}

impl UserSettings {
    /// Clamp zoom into range and reset undersized window geometry.
    pub fn sanitized(mut self) -> Self {
        self.zoom_percent = self.zoom_percent.clamp(MIN_ZOOM, MAX_ZOOM);
        if self.window.width < MIN_WINDOW_WIDTH {
            self.window.width = DEFAULT_WINDOW_WIDTH;
        }
        if self.window.height < MIN_WINDOW_HEIGHT {
            self.window.height = DEFAULT_WINDOW_HEIGHT;
        }
        self
    }
}
