//! The host chrome slot that shows the navigation icon.
//!
//! Hosts differ in what their chrome can do. Each capability tier is one
//! [`HostChrome`] implementation; the toggle only ever talks to the trait.

use crate::icon::{IconImage, SizePx};
use crate::svg::render_svg;

/// Identifier of a host accessibility string resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptionId(pub u32);

/// What the chrome should show in its navigation slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeIcon {
    /// The animated glyph. The host draws it with the toggle's renderer.
    Indicator,
    /// The host theme's own icon, or nothing if the theme has none.
    ThemeDefault(Option<IconImage>),
}

/// Access to the host chrome's navigation icon slot.
pub trait HostChrome {
    /// The theme's default navigation icon at `size`, if there is one.
    fn default_icon(&self, size: SizePx) -> Option<IconImage>;

    /// Installs `icon`, replacing the accessibility description.
    /// `None` clears any override.
    fn set_icon(&mut self, icon: ChromeIcon, description: Option<DescriptionId>);

    /// Updates only the accessibility description.
    fn set_description(&mut self, description: DescriptionId);
}

// ============================================================================
// NoChrome
// ============================================================================

/// Tier for hosts without any chrome: nothing to read, nothing to install.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChrome;

impl HostChrome for NoChrome {
    fn default_icon(&self, _size: SizePx) -> Option<IconImage> {
        None
    }

    fn set_icon(&mut self, _icon: ChromeIcon, _description: Option<DescriptionId>) {}

    fn set_description(&mut self, _description: DescriptionId) {}
}

// ============================================================================
// ThemedChrome
// ============================================================================

/// Tier for hosts whose chrome slot can be set directly.
///
/// The theme icon comes from SVG markup. The installed icon and
/// description are kept so the host can read them back when it lays out
/// its chrome.
#[derive(Debug, Clone, Default)]
pub struct ThemedChrome {
    theme_svg: Option<String>,
    supports_description: bool,
    icon: Option<ChromeIcon>,
    description: Option<DescriptionId>,
}

impl ThemedChrome {
    /// Full capability: icon and description.
    pub fn new(theme_svg: Option<String>) -> Self {
        Self {
            theme_svg,
            supports_description: true,
            icon: None,
            description: None,
        }
    }

    /// Chrome that can swap the icon but has no description API.
    pub fn icon_only(theme_svg: Option<String>) -> Self {
        Self {
            supports_description: false,
            ..Self::new(theme_svg)
        }
    }

    /// Replaces the theme markup, e.g. after a configuration change.
    pub fn set_theme_svg(&mut self, theme_svg: Option<String>) {
        self.theme_svg = theme_svg;
    }

    pub fn icon(&self) -> Option<&ChromeIcon> {
        self.icon.as_ref()
    }

    pub fn description(&self) -> Option<DescriptionId> {
        self.description
    }

    pub fn supports_description(&self) -> bool {
        self.supports_description
    }
}

impl HostChrome for ThemedChrome {
    fn default_icon(&self, size: SizePx) -> Option<IconImage> {
        let svg = self.theme_svg.as_deref()?;
        match render_svg(svg, size) {
            Ok(icon) => Some(icon),
            Err(e) => {
                log::warn!("theme icon unavailable: {e}");
                None
            }
        }
    }

    fn set_icon(&mut self, icon: ChromeIcon, description: Option<DescriptionId>) {
        self.icon = Some(icon);
        if self.supports_description {
            self.description = description;
        } else if description.is_some() {
            log::warn!("chrome cannot set a content description");
        }
    }

    fn set_description(&mut self, description: DescriptionId) {
        if self.supports_description {
            self.description = Some(description);
        } else {
            log::warn!("chrome cannot set a content description");
        }
    }
}
