//! Bridge configuration
//!
//! `BridgeConfig` selects the optional behaviours of the bridge. It can be
//! built in code or loaded from a `.toml` / `.ron` file through [`Config`].

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// How vertex data reaches the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexUpload {
    /// Describe the UI vertex layout when the renderer supports it, copy otherwise
    #[default]
    Auto,
    /// Always convert into host vertices
    Copy,
}

/// Default analog dead zone on the signed 16-bit gamepad axis range
pub const DEFAULT_GAMEPAD_DEAD_ZONE: i16 = 8000;

/// Options for one bridge instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Platform backend name reported to the UI library
    pub platform_name: String,
    /// Renderer backend name reported to the UI library
    pub renderer_name: String,
    /// Feed gamepad events into navigation inputs
    pub nav_enable_gamepad: bool,
    /// Let the UI library change the host cursor shape
    pub mouse_cursor_changes: bool,
    /// The UI library draws its own cursor; the host cursor is hidden
    pub mouse_draw_cursor: bool,
    /// Vertex upload strategy
    pub vertex_upload: VertexUpload,
    /// Axis values whose magnitude does not exceed this are treated as rest
    pub gamepad_dead_zone: i16,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            platform_name: "ui_bridge".to_string(),
            renderer_name: "ui_bridge".to_string(),
            nav_enable_gamepad: false,
            mouse_cursor_changes: true,
            mouse_draw_cursor: false,
            vertex_upload: VertexUpload::Auto,
            gamepad_dead_zone: DEFAULT_GAMEPAD_DEAD_ZONE,
        }
    }
}

impl Config for BridgeConfig {}

impl BridgeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable gamepad navigation
    #[must_use]
    pub const fn with_gamepad(mut self, enabled: bool) -> Self {
        self.nav_enable_gamepad = enabled;
        self
    }

    /// Allow or forbid cursor shape changes
    #[must_use]
    pub const fn with_cursor_changes(mut self, enabled: bool) -> Self {
        self.mouse_cursor_changes = enabled;
        self
    }

    /// Let the UI library draw its own cursor
    #[must_use]
    pub const fn with_mouse_draw_cursor(mut self, enabled: bool) -> Self {
        self.mouse_draw_cursor = enabled;
        self
    }

    /// Set the vertex upload strategy
    #[must_use]
    pub const fn with_vertex_upload(mut self, upload: VertexUpload) -> Self {
        self.vertex_upload = upload;
        self
    }

    /// Set the gamepad dead zone
    #[must_use]
    pub const fn with_gamepad_dead_zone(mut self, dead_zone: i16) -> Self {
        self.gamepad_dead_zone = dead_zone;
        self
    }
}
