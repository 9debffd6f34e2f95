//! Ties a sliding panel, the host chrome and the animated icon together.

use crate::chrome::{ChromeIcon, DescriptionId, HostChrome};
use crate::controller::PositionController;
use crate::icon::IconImage;
use crate::renderer::IconRenderer;

/// The sliding panel the icon belongs to.
pub trait DrawerPanel {
    /// True when the panel is fully open.
    fn is_open(&self) -> bool;

    /// True when any part of the panel is on screen.
    fn is_visible(&self) -> bool;

    /// Starts opening. The host reports progress through the toggle's
    /// slide and opened callbacks.
    fn open(&mut self);

    /// Starts closing.
    fn close(&mut self);
}

/// Motion state reported by the panel. Carried for completeness; the
/// toggle does not react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Dragging,
    Settling,
}

/// Host-facing event surface for the navigation icon.
///
/// The host forwards its panel callbacks (`on_slide`, `on_opened`,
/// `on_closed`, `on_state_changed`), calls [`sync_state`](Self::sync_state)
/// once its views are restored, and routes navigation-item taps through
/// [`on_options_item_selected`](Self::on_options_item_selected).
pub struct DrawerToggle<P, C> {
    panel: P,
    chrome: C,
    controller: PositionController,
    open_description: DescriptionId,
    close_description: DescriptionId,
    indicator_enabled: bool,
    theme_icon: Option<IconImage>,
}

impl<P: DrawerPanel, C: HostChrome> DrawerToggle<P, C> {
    /// `open_description` announces the action of opening the panel and is
    /// shown while it is closed; `close_description` the reverse.
    pub fn new(
        panel: P,
        chrome: C,
        renderer: IconRenderer,
        open_description: DescriptionId,
        close_description: DescriptionId,
    ) -> Self {
        let theme_icon = chrome.default_icon(renderer.config().size);
        Self {
            panel,
            chrome,
            controller: PositionController::new(renderer),
            open_description,
            close_description,
            indicator_enabled: true,
            theme_icon,
        }
    }

    pub fn renderer(&self) -> &IconRenderer {
        self.controller.renderer()
    }

    /// Mutable access for live configuration changes.
    pub fn renderer_mut(&mut self) -> &mut IconRenderer {
        self.controller.renderer_mut()
    }

    pub fn position(&self) -> f32 {
        self.controller.position()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut C {
        &mut self.chrome
    }

    /// The theme icon resolved at construction or the last configuration change.
    pub fn theme_icon(&self) -> Option<&IconImage> {
        self.theme_icon.as_ref()
    }

    pub fn is_indicator_enabled(&self) -> bool {
        self.indicator_enabled
    }

    /// Shows the glyph (true) or the theme's own icon (false) in the chrome.
    pub fn set_indicator_enabled(&mut self, enabled: bool) {
        if enabled == self.indicator_enabled {
            return;
        }
        if enabled {
            let description = self.current_description();
            self.chrome.set_icon(ChromeIcon::Indicator, Some(description));
        } else {
            self.chrome
                .set_icon(ChromeIcon::ThemeDefault(self.theme_icon.clone()), None);
        }
        self.indicator_enabled = enabled;
        log::debug!("drawer indicator enabled: {enabled}");
    }

    /// Re-reads the panel state and reinstalls the glyph.
    pub fn sync_state(&mut self) {
        let is_open = self.panel.is_open();
        self.controller.on_sync(is_open);
        if self.indicator_enabled {
            let description = self.current_description();
            self.chrome.set_icon(ChromeIcon::Indicator, Some(description));
        }
        log::debug!("drawer toggle synced, open: {is_open}");
    }

    /// Theme or density changed: resolve the theme icon again and resync.
    pub fn on_configuration_changed(&mut self) {
        self.theme_icon = self.chrome.default_icon(self.renderer().config().size);
        self.sync_state();
    }

    /// Handles a tap on a chrome item. Returns true if it was consumed.
    pub fn on_options_item_selected(&mut self, is_home_item: bool) -> bool {
        if is_home_item && self.indicator_enabled {
            self.toggle();
            true
        } else {
            false
        }
    }

    /// Asks the panel to close if it is showing, open otherwise. The
    /// position follows later through the panel's callbacks.
    pub fn toggle(&mut self) {
        if self.panel.is_visible() {
            log::debug!("toggle: closing drawer");
            self.panel.close();
        } else {
            log::debug!("toggle: opening drawer");
            self.panel.open();
        }
    }

    pub fn on_slide(&mut self, slide_offset: f32) {
        self.controller.on_slide(slide_offset);
    }

    pub fn on_opened(&mut self) {
        self.controller.on_opened();
        if self.indicator_enabled {
            self.chrome.set_description(self.close_description);
        }
        log::debug!("drawer opened");
    }

    pub fn on_closed(&mut self) {
        self.controller.on_closed();
        if self.indicator_enabled {
            self.chrome.set_description(self.open_description);
        }
        log::debug!("drawer closed");
    }

    pub fn on_state_changed(&mut self, _state: PanelState) {}

    fn current_description(&self) -> DescriptionId {
        if self.panel.is_open() {
            self.close_description
        } else {
            self.open_description
        }
    }
}
