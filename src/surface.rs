//! Draw-primitive sinks for [`IconRenderer::draw`](crate::IconRenderer::draw).
//!
//! [`RecordingSurface`] keeps the primitives as data, which is what hosts
//! with their own canvas and the tests consume. [`PixmapSurface`]
//! rasterizes them with tiny-skia.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{
    ColorU8, FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};

use crate::color::Color;
use crate::geometry::BarTransform;
use crate::icon::{IconImage, RectF, SizePx};

// ============================================================================
// DrawSurface
// ============================================================================

/// Receives the primitives that make up one frame of the icon.
pub trait DrawSurface {
    /// Fills `rect` placed by `transform`.
    fn fill_rect(&mut self, rect: RectF, transform: BarTransform, color: Color);

    /// Fills `rect` with all four corners rounded by `radius`.
    fn fill_round_rect(&mut self, rect: RectF, radius: f32, transform: BarTransform, color: Color);

    /// Composites `image` over everything drawn so far, at the origin.
    fn draw_image(&mut self, image: &IconImage);
}

// ============================================================================
// RecordingSurface
// ============================================================================

/// A primitive captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: RectF,
        transform: BarTransform,
        color: Color,
    },
    FillRoundRect {
        rect: RectF,
        radius: f32,
        transform: BarTransform,
        color: Color,
    },
    /// A base image, identified by its pixel size.
    Image { size: SizePx },
}

impl DrawCommand {
    /// The fill color, or `None` for images.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::FillRect { color, .. } | Self::FillRoundRect { color, .. } => Some(*color),
            Self::Image { .. } => None,
        }
    }
}

/// Collects draw primitives in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: RectF, transform: BarTransform, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            transform,
            color,
        });
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, transform: BarTransform, color: Color) {
        self.commands.push(DrawCommand::FillRoundRect {
            rect,
            radius,
            transform,
            color,
        });
    }

    fn draw_image(&mut self, image: &IconImage) {
        self.commands.push(DrawCommand::Image {
            size: image.dimensions(),
        });
    }
}

// ============================================================================
// PixmapSurface
// ============================================================================

/// Cubic Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Anti-aliased rasterizer backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Creates a transparent surface. Returns `None` for a zero-sized icon.
    pub fn new(size: SizePx) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(size.width, size.height)?,
        })
    }

    pub fn size(&self) -> SizePx {
        SizePx::new(self.pixmap.width(), self.pixmap.height())
    }

    /// Converts the surface into a straight-alpha image.
    pub fn into_image(self, scale: f32) -> IconImage {
        IconImage::new(pixmap_to_rgba_image(&self.pixmap), scale)
    }

    fn fill_path(&mut self, path: &Path, transform: BarTransform, color: Color) {
        self.pixmap.fill_path(
            path,
            &paint_for(color),
            FillRule::Winding,
            to_skia(transform),
            None,
        );
    }
}

impl DrawSurface for PixmapSurface {
    fn fill_rect(&mut self, rect: RectF, transform: BarTransform, color: Color) {
        let Some(rect) = Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint_for(color), to_skia(transform), None);
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, transform: BarTransform, color: Color) {
        match round_rect_path(rect, radius) {
            Some(path) => self.fill_path(&path, transform, color),
            None => self.fill_rect(rect, transform, color),
        }
    }

    fn draw_image(&mut self, image: &IconImage) {
        let Some(source) = rgba_image_to_pixmap(&image.data) else {
            return;
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

/// Rotation about the pivot first, then the vertical shift.
fn to_skia(t: BarTransform) -> Transform {
    let (px, py) = t.pivot;
    Transform::from_translate(0.0, t.translate_y)
        .pre_concat(Transform::from_rotate_at(t.rotation_degrees, px, py))
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Builds a rounded rectangle. The radius is capped at half the shorter
/// side; returns `None` when nothing is left to round or the rect is empty.
fn round_rect_path(rect: RectF, radius: f32) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if r <= 0.0 {
        return None;
    }

    let RectF {
        left: l,
        top: t,
        right: rt,
        bottom: b,
    } = rect;
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}

// ============================================================================
// Pixel Conversion
// ============================================================================

fn rgba_image_to_pixmap(img: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(img.width(), img.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Converts a tiny-skia pixmap to an `image::RgbaImage`.
pub(crate) fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        // tiny-skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        img.put_pixel(x, y, Rgba([r, g, b, a]));
    }

    img
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
