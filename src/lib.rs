//! hamburger-toggle: an animated navigation icon for sliding panels
//!
//! The icon is three horizontal bars that morph into a cross, an arrow or
//! a caret as a position travels from closed (0) to open (1). The position
//! follows a host panel's drag and open/close events.
//!
//! # Example
//!
//! ```
//! use hamburger_toggle::{
//!     Color, GlyphStyle, IconConfig, IconRenderer, PositionController, RecordingSurface,
//! };
//!
//! let config = IconConfig::default()
//!     .with_style(GlyphStyle::Arrow)
//!     .with_colors(Color::WHITE, Color::rgb(33, 150, 243));
//! let mut controller = PositionController::new(IconRenderer::new(config));
//!
//! // The panel is dragged three quarters open.
//! controller.on_slide(0.75);
//! assert_eq!(controller.position(), 0.5);
//!
//! // Draw into any surface; here the primitives are just recorded.
//! let mut surface = RecordingSurface::new();
//! controller.renderer().draw(&mut surface);
//! assert_eq!(surface.commands.len(), 3);
//!
//! // Or rasterize the frame.
//! let frame = controller.renderer_mut().render_image().unwrap();
//! assert_eq!(frame.dimensions().width, 48);
//! ```
//!
//! # Host Integration
//!
//! [`DrawerToggle`] wires a [`DrawerPanel`] and a [`HostChrome`] to the
//! icon and exposes the callbacks a host forwards from its panel and its
//! chrome.

mod chrome;
mod color;
mod controller;
mod error;
mod geometry;
mod icon;
mod profile;
mod renderer;
mod surface;
mod svg;
mod toggle;

pub use chrome::{ChromeIcon, DescriptionId, HostChrome, NoChrome, ThemedChrome};
pub use color::{Color, transition_color};
pub use controller::{PositionController, slide_position};
pub use error::{Error, Result};
pub use geometry::{Bar, BarLayout, BarSet, BarTransform, GlyphStyle, compute_bars};
pub use icon::{IconImage, RectF, SizePx};
pub use profile::{Configurable, IconProfile};
pub use renderer::{IconConfig, IconRenderer};
pub use surface::{DrawCommand, DrawSurface, PixmapSurface, RecordingSurface};
pub use svg::render_svg;
pub use toggle::{DrawerPanel, DrawerToggle, PanelState};
