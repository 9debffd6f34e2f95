//! Serializable icon settings for live editing and persistence by hosts.
//!
//! An [`IconProfile`] carries any subset of the icon settings as JSON.
//! Applying it touches only the fields that are present, which is how a
//! settings form pushes single edits into a running icon.
//!
//! # Example
//!
//! ```
//! use hamburger_toggle::{Configurable, GlyphStyle, IconProfile, IconRenderer};
//!
//! let mut renderer = IconRenderer::default();
//! let profile = IconProfile::from_json(r##"{"style":"caret","openColor":"#ff2196f3"}"##).unwrap();
//! renderer.apply_profile(&profile);
//! assert_eq!(renderer.config().style, GlyphStyle::Caret);
//!
//! let json = renderer.export_profile().to_json().unwrap();
//! assert!(json.contains("\"rounded\":false"));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::geometry::GlyphStyle;
use crate::renderer::IconRenderer;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Types whose settings can be read from and written to an [`IconProfile`].
pub trait Configurable {
    /// Applies every field present in `profile`.
    fn apply_profile(&mut self, profile: &IconProfile);

    /// Exports all current settings.
    fn export_profile(&self) -> IconProfile;
}

// ============================================================================
// IconProfile
// ============================================================================

/// Icon settings, every field optional.
///
/// # JSON Format
///
/// ```json
/// {
///   "width": 48,
///   "height": 48,
///   "paddingLeftRight": 8,
///   "paddingTopBottom": 10,
///   "barHeight": 2,
///   "rounded": true,
///   "style": "arrow",
///   "closedColor": "#ffffffff",
///   "openColor": "#ff2196f3"
/// }
/// ```
///
/// Colors accept `#RGB`, `#RRGGBB` and `#AARRGGBB`. Unknown style names
/// select `cross`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left_right: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top_bottom: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "Option<String>"))]
    pub style: Option<GlyphStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_color: Option<String>,
}

impl IconProfile {
    /// Creates an empty profile that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_padding(mut self, padding_lr: u32, padding_tb: u32) -> Self {
        self.padding_left_right = Some(padding_lr);
        self.padding_top_bottom = Some(padding_tb);
        self
    }

    pub fn with_bar_height(mut self, bar_height: u32) -> Self {
        self.bar_height = Some(bar_height);
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = Some(rounded);
        self
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the closed color from text; validation happens on apply.
    pub fn with_closed_color(mut self, color: impl Into<String>) -> Self {
        self.closed_color = Some(color.into());
        self
    }

    /// Sets the open color from text; validation happens on apply.
    pub fn with_open_color(mut self, color: impl Into<String>) -> Self {
        self.open_color = Some(color.into());
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parses a profile color, logging and discarding text that is not a color.
fn parse_color(field: &str, text: &str) -> Option<Color> {
    match Color::from_hex(text) {
        Ok(color) => Some(color),
        Err(e) => {
            log::warn!("ignoring {field}: {e}");
            None
        }
    }
}

impl Configurable for IconRenderer {
    fn apply_profile(&mut self, profile: &IconProfile) {
        let mut config = *self.config();

        if let Some(width) = profile.width {
            config.size.width = width;
        }
        if let Some(height) = profile.height {
            config.size.height = height;
        }
        if let Some(padding) = profile.padding_left_right {
            config.padding_lr = padding;
        }
        if let Some(padding) = profile.padding_top_bottom {
            config.padding_tb = padding;
        }
        if let Some(bar_height) = profile.bar_height {
            config.bar_height = bar_height;
        }
        if let Some(rounded) = profile.rounded {
            config.rounded = rounded;
        }
        if let Some(style) = profile.style {
            config.style = style;
        }
        if let Some(color) = profile.closed_color.as_deref().and_then(|c| parse_color("closedColor", c)) {
            config.closed_color = color;
        }
        if let Some(color) = profile.open_color.as_deref().and_then(|c| parse_color("openColor", c)) {
            config.open_color = color;
        }

        if config != *self.config() {
            self.configure(config);
        }
    }

    fn export_profile(&self) -> IconProfile {
        let config = self.config();
        IconProfile {
            width: Some(config.size.width),
            height: Some(config.size.height),
            padding_left_right: Some(config.padding_lr),
            padding_top_bottom: Some(config.padding_tb),
            bar_height: Some(config.bar_height),
            rounded: Some(config.rounded),
            style: Some(config.style),
            closed_color: Some(config.closed_color.to_hex()),
            open_color: Some(config.open_color.to_hex()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
