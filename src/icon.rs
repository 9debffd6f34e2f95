//! Pixel-space primitives shared by the geometry and the rasterizer.

use image::RgbaImage;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// An axis-aligned rectangle in local icon coordinates.
///
/// Edges are stored rather than origin and extent so bar geometry can be
/// given as left, top, right, bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the center point as `(x, y)`.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Returns true if the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }
}

/// A raster image with its display scale.
///
/// Used both for host-provided base drawables and for frames rasterized by
/// [`IconRenderer::render_image`](crate::IconRenderer::render_image).
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in straight (non-premultiplied) RGBA.
    pub data: RgbaImage,

    /// The display scale factor.
    ///
    /// The "logical" size of the image is `dimensions / scale`.
    pub scale: f32,
}

impl IconImage {
    pub fn new(data: RgbaImage, scale: f32) -> Self {
        Self { data, scale }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns the logical size of the image (dimensions / scale).
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.data.width() as f32 / self.scale,
            self.data.height() as f32 / self.scale,
        )
    }
}
