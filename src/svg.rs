//! SVG rasterization for host theme icons, using resvg/usvg.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};
use crate::icon::{IconImage, SizePx};
use crate::surface::pixmap_to_rgba_image;

/// Renders SVG markup into an image of exactly `size` pixels.
///
/// The drawing is scaled uniformly to fit and centered, so non-square
/// sources keep their aspect ratio inside a square icon.
pub fn render_svg(svg_data: &str, size: SizePx) -> Result<IconImage> {
    let tree = Tree::from_str(svg_data, &Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let mut pixmap = Pixmap::new(size.width, size.height)
        .ok_or_else(|| Error::Svg(format!("cannot allocate {}x{} pixmap", size.width, size.height)))?;

    let svg_size = tree.size();
    let scale = (size.width as f32 / svg_size.width()).min(size.height as f32 / svg_size.height());
    let dx = (size.width as f32 - svg_size.width() * scale) / 2.0;
    let dy = (size.height as f32 - svg_size.height() * scale) / 2.0;

    let transform = Transform::from_translate(dx, dy).pre_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(IconImage::new(pixmap_to_rgba_image(&pixmap), 1.0))
}
