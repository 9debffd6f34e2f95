//! The animated icon: configuration, position and drawing.

use crate::color::{Color, transition_color};
use crate::geometry::{BarLayout, BarSet, GlyphStyle, compute_bars};
use crate::icon::{IconImage, SizePx};
use crate::surface::{DrawSurface, PixmapSurface};

// ============================================================================
// IconConfig
// ============================================================================

/// Everything besides the position that determines what the icon looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconConfig {
    pub size: SizePx,
    pub padding_lr: u32,
    pub padding_tb: u32,
    /// Thickness of each of the three bars.
    pub bar_height: u32,
    /// Draw bars with corner radius `bar_height / 2`.
    pub rounded: bool,
    pub style: GlyphStyle,
    /// Bar color at position 0.
    pub closed_color: Color,
    /// Bar color at position 1.
    pub open_color: Color,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: SizePx::new(48, 48),
            padding_lr: 8,
            padding_tb: 10,
            bar_height: 2,
            rounded: false,
            style: GlyphStyle::Cross,
            closed_color: Color::WHITE,
            open_color: Color::WHITE,
        }
    }
}

impl IconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = SizePx::new(width, height);
        self
    }

    pub fn with_padding(mut self, padding_lr: u32, padding_tb: u32) -> Self {
        self.padding_lr = padding_lr;
        self.padding_tb = padding_tb;
        self
    }

    pub fn with_bar_height(mut self, bar_height: u32) -> Self {
        self.bar_height = bar_height;
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_colors(mut self, closed: Color, open: Color) -> Self {
        self.closed_color = closed;
        self.open_color = open;
        self
    }

    pub fn layout(&self) -> BarLayout {
        BarLayout {
            size: self.size,
            padding_lr: self.padding_lr,
            padding_tb: self.padding_tb,
            bar_height: self.bar_height,
        }
    }

    /// Corner radius for rounded bars, `None` for square ends.
    pub fn corner_radius(&self) -> Option<f32> {
        self.rounded.then(|| (self.bar_height / 2) as f32)
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Owns the icon configuration and the animation position.
///
/// Every mutation bumps [`version`](Self::version), raises the repaint
/// request and drops the cached frame, so hosts can poll
/// [`take_repaint_request`](Self::take_repaint_request) from their redraw
/// loop. [`draw`](Self::draw) itself never changes state.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    config: IconConfig,
    position: f32,
    base: Option<IconImage>,
    version: u64,
    repaint_requested: bool,
    frame: Option<(IconImage, u64)>,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(IconConfig::default())
    }
}

impl IconRenderer {
    /// Creates a closed icon with the given configuration.
    pub fn new(config: IconConfig) -> Self {
        Self {
            config,
            position: 0.0,
            base: None,
            version: 0,
            repaint_requested: false,
            frame: None,
        }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    pub fn configure(&mut self, config: IconConfig) -> &mut Self {
        self.config = config;
        self.invalidate()
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.config.size = SizePx::new(width, height);
        self.invalidate()
    }

    pub fn set_padding_lr(&mut self, padding: u32) -> &mut Self {
        self.config.padding_lr = padding;
        self.invalidate()
    }

    pub fn set_padding_tb(&mut self, padding: u32) -> &mut Self {
        self.config.padding_tb = padding;
        self.invalidate()
    }

    pub fn set_bar_height(&mut self, bar_height: u32) -> &mut Self {
        self.config.bar_height = bar_height;
        self.invalidate()
    }

    pub fn set_rounded(&mut self, rounded: bool) -> &mut Self {
        self.config.rounded = rounded;
        self.invalidate()
    }

    pub fn set_closed_color(&mut self, color: Color) -> &mut Self {
        self.config.closed_color = color;
        self.invalidate()
    }

    pub fn set_open_color(&mut self, color: Color) -> &mut Self {
        self.config.open_color = color;
        self.invalidate()
    }

    pub fn set_style(&mut self, style: GlyphStyle) -> &mut Self {
        self.config.style = style;
        self.invalidate()
    }

    /// Sets the style from its numeric code; unknown codes select `Cross`.
    pub fn set_style_code(&mut self, code: i32) -> &mut Self {
        self.set_style(GlyphStyle::from_code(code))
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Stores `position` clamped to `[0, 1]`. NaN is treated as closed.
    pub fn set_position(&mut self, position: f32) -> &mut Self {
        self.position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        self.invalidate()
    }

    /// The host-provided image drawn over the bars, if any.
    pub fn base_image(&self) -> Option<&IconImage> {
        self.base.as_ref()
    }

    pub fn set_base_image(&mut self, image: Option<IconImage>) -> &mut Self {
        self.base = image;
        self.invalidate()
    }

    /// Incremented on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if a mutation happened since the last
    /// [`take_repaint_request`](Self::take_repaint_request).
    pub fn needs_repaint(&self) -> bool {
        self.repaint_requested
    }

    /// Returns and clears the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn invalidate(&mut self) -> &mut Self {
        self.version = self.version.wrapping_add(1);
        self.repaint_requested = true;
        self.frame = None;
        self
    }

    /// Bar placement for the current state.
    pub fn bars(&self) -> BarSet {
        compute_bars(self.config.style, self.position, &self.config.layout())
    }

    /// Bar color for the current position, before any middle-bar fade.
    pub fn current_color(&self) -> Color {
        transition_color(
            self.position,
            self.config.closed_color,
            self.config.open_color,
        )
    }

    /// Emits the three bars top to bottom, then the base image on top.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let color = self.current_color();
        let radius = self.config.corner_radius();

        let bars = self.bars();
        for bar in bars.as_array() {
            let color = faded(color, bar.fade);
            match radius {
                Some(radius) => surface.fill_round_rect(bar.rect, radius, bar.transform, color),
                None => surface.fill_rect(bar.rect, bar.transform, color),
            }
        }

        if let Some(base) = &self.base {
            surface.draw_image(base);
        }
    }

    /// Rasterizes the current frame at the configured size.
    ///
    /// The frame is cached until the next mutation. Returns `None` if the
    /// configured size has a zero dimension.
    pub fn render_image(&mut self) -> Option<IconImage> {
        if let Some((frame, version)) = &self.frame
            && *version == self.version
        {
            return Some(frame.clone());
        }

        let mut surface = PixmapSurface::new(self.config.size)?;
        self.draw(&mut surface);
        let frame = surface.into_image(1.0);
        self.frame = Some((frame.clone(), self.version));
        Some(frame)
    }
}

fn faded(color: Color, fade: u8) -> Color {
    if fade == u8::MAX {
        return color;
    }
    color.with_alpha((u32::from(color.a) * u32::from(fade) / 255) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::RectF;
    use crate::surface::{DrawCommand, RecordingSurface};
    use image::RgbaImage;

    fn record(renderer: &IconRenderer) -> Vec<DrawCommand> {
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface);
        surface.commands
    }

    #[test]
    fn set_position_clamps() {
        let mut renderer = IconRenderer::default();
        renderer.set_position(-1.0);
        assert_eq!(renderer.position(), 0.0);
        renderer.set_position(2.0);
        assert_eq!(renderer.position(), 1.0);
        renderer.set_position(0.25);
        assert_eq!(renderer.position(), 0.25);
        renderer.set_position(f32::NAN);
        assert_eq!(renderer.position(), 0.0);
    }

    #[test]
    fn every_setter_requests_repaint() {
        let mut renderer = IconRenderer::default();
        assert!(!renderer.take_repaint_request());

        let setters: Vec<fn(&mut IconRenderer)> = vec![
            |r| {
                r.set_size(32, 32);
            },
            |r| {
                r.set_padding_lr(4);
            },
            |r| {
                r.set_padding_tb(4);
            },
            |r| {
                r.set_bar_height(3);
            },
            |r| {
                r.set_rounded(true);
            },
            |r| {
                r.set_closed_color(Color::BLACK);
            },
            |r| {
                r.set_open_color(Color::BLACK);
            },
            |r| {
                r.set_style(GlyphStyle::Arrow);
            },
            |r| {
                r.set_style_code(2);
            },
            |r| {
                r.set_position(0.5);
            },
            |r| {
                r.configure(IconConfig::default());
            },
            |r| {
                r.set_base_image(None);
            },
        ];

        for (i, setter) in setters.into_iter().enumerate() {
            let before = renderer.version();
            setter(&mut renderer);
            assert!(renderer.version() > before, "setter {i}");
            assert!(renderer.needs_repaint(), "setter {i}");
            assert!(renderer.take_repaint_request(), "setter {i}");
            assert!(!renderer.needs_repaint(), "setter {i}");
        }
    }

    #[test]
    fn setters_chain() {
        let mut renderer = IconRenderer::default();
        renderer
            .set_padding_lr(6)
            .set_padding_tb(12)
            .set_bar_height(4)
            .set_rounded(true)
            .set_style(GlyphStyle::Caret);

        let config = renderer.config();
        assert_eq!(config.padding_lr, 6);
        assert_eq!(config.padding_tb, 12);
        assert_eq!(config.bar_height, 4);
        assert!(config.rounded);
        assert_eq!(config.style, GlyphStyle::Caret);
    }

    #[test]
    fn invalid_style_code_draws_cross() {
        let mut renderer = IconRenderer::default();
        renderer.set_style(GlyphStyle::Arrow).set_style_code(99);
        renderer.set_position(1.0);

        assert_eq!(renderer.config().style, GlyphStyle::Cross);
        let expected = compute_bars(GlyphStyle::Cross, 1.0, &renderer.config().layout());
        assert_eq!(renderer.bars(), expected);
    }

    #[test]
    fn draw_emits_three_rects_then_base() {
        let mut renderer = IconRenderer::default();
        renderer.set_base_image(Some(IconImage::new(RgbaImage::new(48, 48), 1.0)));

        let commands = record(&renderer);
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[1], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[2], DrawCommand::FillRect { .. }));
        assert_eq!(
            commands[3],
            DrawCommand::Image {
                size: SizePx::new(48, 48)
            }
        );
    }

    #[test]
    fn rounded_bars_use_half_bar_height() {
        let mut renderer = IconRenderer::new(IconConfig::default().with_bar_height(5).with_rounded(true));
        renderer.set_position(0.3);

        for command in record(&renderer) {
            match command {
                DrawCommand::FillRoundRect { radius, .. } => assert_eq!(radius, 2.0),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn draw_is_idempotent() {
        let mut renderer = IconRenderer::new(
            IconConfig::default()
                .with_style(GlyphStyle::Caret)
                .with_colors(Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)),
        );
        renderer.set_position(0.4);
        renderer.take_repaint_request();
        let version = renderer.version();

        let first = record(&renderer);
        let second = record(&renderer);
        assert_eq!(first, second);
        assert_eq!(renderer.version(), version);
        assert!(!renderer.needs_repaint());
    }

    #[test]
    fn colors_interpolate_and_middle_bar_fades() {
        let mut renderer = IconRenderer::new(
            IconConfig::default().with_colors(Color::rgb(0, 0, 0), Color::rgb(200, 100, 0)),
        );
        renderer.set_position(0.5);

        let colors: Vec<_> = record(&renderer).iter().filter_map(DrawCommand::color).collect();
        assert_eq!(colors[0], Color::rgb(100, 50, 0));
        assert_eq!(colors[1], Color::rgba(100, 50, 0, 128));
        assert_eq!(colors[2], Color::rgb(100, 50, 0));

        renderer.set_position(1.0);
        let colors: Vec<_> = record(&renderer).iter().filter_map(DrawCommand::color).collect();
        assert_eq!(colors[1].a, 0);
    }

    #[test]
    fn arrow_middle_bar_stays_opaque() {
        let mut renderer = IconRenderer::new(IconConfig::default().with_style(GlyphStyle::Arrow));
        renderer.set_position(1.0);
        let colors: Vec<_> = record(&renderer).iter().filter_map(DrawCommand::color).collect();
        assert_eq!(colors[1].a, 255);
    }

    #[test]
    fn translucent_colors_scale_with_fade() {
        assert_eq!(faded(Color::rgba(1, 2, 3, 128), 255).a, 128);
        assert_eq!(faded(Color::rgba(1, 2, 3, 128), 128).a, 64);
        assert_eq!(faded(Color::rgba(1, 2, 3, 255), 0).a, 0);
    }

    #[test]
    fn closed_frame_draws_hamburger() {
        let mut renderer = IconRenderer::new(IconConfig::default().with_bar_height(4));
        let frame = renderer.render_image().unwrap();

        // rows at 10, 22 and 34, four pixels tall
        for y in [11, 23, 35] {
            assert_eq!(frame.data.get_pixel(24, y).0, [255, 255, 255, 255], "row {y}");
        }
        assert_eq!(frame.data.get_pixel(24, 18).0[3], 0);
        assert_eq!(frame.data.get_pixel(4, 11).0[3], 0);
    }

    #[test]
    fn open_cross_frame_clears_rows() {
        let mut renderer = IconRenderer::new(IconConfig::default().with_bar_height(4));
        renderer.set_position(1.0);
        let frame = renderer.render_image().unwrap();

        // The X passes through the center but not the old row ends.
        assert_eq!(frame.data.get_pixel(24, 24).0[3], 255);
        assert_eq!(frame.data.get_pixel(9, 11).0[3], 0);
        assert_eq!(frame.data.get_pixel(39, 35).0[3], 0);

        // Its arms reach toward the corners.
        let bars = renderer.bars();
        let corners = bars.top.corners();
        let RectF { left, top, .. } = bars.top.rect;
        assert_eq!(corners[0], bars.top.transform.map_point(left, top));
    }

    #[test]
    fn frame_cache_follows_version() {
        let mut renderer = IconRenderer::default();
        let first = renderer.render_image().unwrap();
        assert_eq!(renderer.render_image().unwrap(), first);

        renderer.set_closed_color(Color::rgb(255, 0, 0));
        let second = renderer.render_image().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn huge_padding_or_bar_height_still_draws() {
        let mut renderer = IconRenderer::default();
        renderer.set_position(0.5).set_padding_tb(1 << 30);
        let commands = record(&renderer);
        assert_eq!(commands.len(), 3);
        assert!(renderer.render_image().is_some());

        let mut renderer = IconRenderer::new(IconConfig::default().with_style(GlyphStyle::Caret));
        renderer.set_position(1.0).set_bar_height(1 << 30);
        for command in record(&renderer) {
            let DrawCommand::FillRect { rect, .. } = command else {
                panic!("unexpected {command:?}");
            };
            assert!(rect.top.is_finite() && rect.bottom.is_finite());
        }
    }

    #[test]
    fn caret_scenario_draws_rounded_bars() {
        let mut renderer = IconRenderer::new(
            IconConfig::default()
                .with_size(48, 34)
                .with_padding(8, 10)
                .with_bar_height(4)
                .with_rounded(true)
                .with_style(GlyphStyle::Caret),
        );
        renderer.set_position(1.0);

        let commands = record(&renderer);
        assert_eq!(commands.len(), 3);
        let mut rects = Vec::new();
        for command in &commands {
            match command {
                DrawCommand::FillRoundRect {
                    rect,
                    radius,
                    transform,
                    ..
                } => {
                    assert_eq!(*radius, 2.0);
                    rects.push((*rect, *transform));
                }
                other => panic!("unexpected {other:?}"),
            }
        }

        let (top, top_t) = rects[0];
        let (middle, _) = rects[1];
        let (bottom, bottom_t) = rects[2];
        assert_eq!(top.top, 15.0);
        assert_eq!(top_t.rotation_degrees, -40.0);
        assert_eq!(bottom.top, 13.0);
        assert_eq!(bottom_t.rotation_degrees, 40.0);
        assert_eq!(bottom_t.pivot, (8.0, 17.0));
        assert_eq!(middle, RectF::from_ltrb(8.0, 15.0, 40.0, 19.0));
        assert_eq!(commands[1].color().map(|c| c.a), Some(0));
    }

    #[test]
    fn zero_size_renders_nothing() {
        let mut renderer = IconRenderer::new(IconConfig::default().with_size(0, 48));
        assert!(renderer.render_image().is_none());
        // Drawing to a recording surface still works.
        assert_eq!(record(&renderer).len(), 3);
    }
}
