//! Maps panel drag and open/close events onto the icon position.
//!
//! While the panel opens the icon holds at closed for the first half of
//! the drag and then catches up over the second half; while it closes the
//! mirror image applies. Reversing direction mid-drag never makes the
//! position jump.

use crate::renderer::IconRenderer;

/// Next position for a drag report of `slide_offset` given the current
/// position.
///
/// Above 0.5 the position can only rise, to `2 * (offset - 0.5)`; at or
/// below 0.5 it can only fall, to `2 * offset`. At exactly 0.5 the
/// position is unchanged.
pub fn slide_position(current: f32, slide_offset: f32) -> f32 {
    if slide_offset > 0.5 {
        current.max((slide_offset - 0.5).max(0.0) * 2.0)
    } else {
        current.min(slide_offset * 2.0)
    }
}

/// Drives an [`IconRenderer`]'s position from panel events.
///
/// Purely reactive: smooth motion comes from the host reporting
/// [`on_slide`](Self::on_slide) at frame rate, not from any timer here.
#[derive(Debug, Clone, Default)]
pub struct PositionController {
    renderer: IconRenderer,
}

impl PositionController {
    pub fn new(renderer: IconRenderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &IconRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut IconRenderer {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> IconRenderer {
        self.renderer
    }

    pub fn position(&self) -> f32 {
        self.renderer.position()
    }

    /// Applies a drag report. Offsets are clamped to `[0, 1]`; NaN is ignored.
    pub fn on_slide(&mut self, slide_offset: f32) {
        if slide_offset.is_nan() {
            log::debug!("ignoring NaN slide offset");
            return;
        }
        let next = slide_position(self.renderer.position(), slide_offset.clamp(0.0, 1.0));
        self.renderer.set_position(next);
    }

    /// The panel finished opening.
    pub fn on_opened(&mut self) {
        self.renderer.set_position(1.0);
    }

    /// The panel finished closing.
    pub fn on_closed(&mut self) {
        self.renderer.set_position(0.0);
    }

    /// Snaps to the panel's actual state without animating.
    pub fn on_sync(&mut self, is_open: bool) {
        self.renderer.set_position(if is_open { 1.0 } else { 0.0 });
    }
}
