//! Bar placement for the three glyph styles.
//!
//! Everything here is a pure function of [`GlyphStyle`], the animation
//! position and a [`BarLayout`]. Layout terms (bar spacing, halves of the
//! icon height, bar height and bar width) use truncating integer pixel
//! arithmetic; only the position-scaled terms are fractional.

use serde::{Deserialize, Serialize};

use crate::icon::{RectF, SizePx};

// ============================================================================
// GlyphStyle
// ============================================================================

/// The shape the icon morphs into at position 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum GlyphStyle {
    /// Top and bottom bars cross into an X, middle bar fades out.
    #[default]
    Cross,
    /// Left-pointing arrow; the middle bar stays as the shaft.
    Arrow,
    /// Left-pointing chevron, middle bar fades out.
    Caret,
}

impl GlyphStyle {
    pub const ALL: [Self; 3] = [Self::Cross, Self::Arrow, Self::Caret];

    /// Numeric code used by hosts that configure the style as an integer.
    pub const fn code(self) -> i32 {
        match self {
            Self::Cross => 0,
            Self::Arrow => 1,
            Self::Caret => 2,
        }
    }

    /// Maps a numeric code to a style. Unknown codes fall back to `Cross`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Cross,
            1 => Self::Arrow,
            2 => Self::Caret,
            other => {
                log::debug!("unknown glyph style code {other}, using cross");
                Self::Cross
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Arrow => "arrow",
            Self::Caret => "caret",
        }
    }

    /// Maps a case-insensitive name to a style. Unknown names fall back to `Cross`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                log::debug!("unknown glyph style {name:?}, using cross");
                Self::Cross
            })
    }
}

impl From<String> for GlyphStyle {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<GlyphStyle> for String {
    fn from(style: GlyphStyle) -> Self {
        style.name().to_string()
    }
}

// ============================================================================
// BarLayout
// ============================================================================

/// Icon size, insets and stroke thickness, all in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    pub size: SizePx,
    pub padding_lr: u32,
    pub padding_tb: u32,
    pub bar_height: u32,
}

/// Integer layout terms shared by all styles.
struct Rows {
    width: i64,
    height: i64,
    padding_lr: i64,
    bar: i64,
    space: i64,
    y0: i64,
    y1: i64,
    y2: i64,
}

impl BarLayout {
    /// Vertical gap between two adjacent bars. Negative when the padding
    /// and bars do not fit in the icon height.
    ///
    /// Evaluated in `i64` so every `u32` setting stays in range.
    pub fn space_between_bars(&self) -> i64 {
        let height = i64::from(self.size.height);
        (height - 2 * i64::from(self.padding_tb) - 3 * i64::from(self.bar_height)) / 2
    }

    fn rows(&self) -> Rows {
        let bar = i64::from(self.bar_height);
        let space = self.space_between_bars();
        let y0 = i64::from(self.padding_tb);
        let y1 = y0 + bar + space;
        let y2 = y1 + bar + space;
        Rows {
            width: i64::from(self.size.width),
            height: i64::from(self.size.height),
            padding_lr: i64::from(self.padding_lr),
            bar,
            space,
            y0,
            y1,
            y2,
        }
    }
}

// ============================================================================
// Bar
// ============================================================================

/// Placement of a bar rectangle: rotate by `rotation_degrees` (clockwise,
/// y down) about `pivot`, then shift down by `translate_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTransform {
    pub rotation_degrees: f32,
    pub pivot: (f32, f32),
    pub translate_y: f32,
}

impl BarTransform {
    pub const IDENTITY: Self = Self {
        rotation_degrees: 0.0,
        pivot: (0.0, 0.0),
        translate_y: 0.0,
    };

    /// Rotation about `pivot` with no translation.
    pub fn rotate_at(degrees: f32, pivot: (f32, f32)) -> Self {
        Self {
            rotation_degrees: degrees,
            pivot,
            translate_y: 0.0,
        }
    }

    /// Maps a point of the untransformed rectangle to icon coordinates.
    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation_degrees.to_radians().sin_cos();
        let (px, py) = self.pivot;
        let (dx, dy) = (x - px, y - py);
        (
            px + dx * cos - dy * sin,
            py + dx * sin + dy * cos + self.translate_y,
        )
    }

    pub fn is_identity(&self) -> bool {
        self.rotation_degrees == 0.0 && self.translate_y == 0.0
    }
}

/// One stroke of the icon, ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// The stroke before `transform` is applied.
    pub rect: RectF,
    pub transform: BarTransform,
    /// Opacity multiplier for the bar's color alpha, 255 = unchanged.
    pub fade: u8,
}

impl Bar {
    fn plain(rect: RectF) -> Self {
        Self {
            rect,
            transform: BarTransform::IDENTITY,
            fade: u8::MAX,
        }
    }

    /// The four corners after transformation, clockwise from top-left.
    pub fn corners(&self) -> [(f32, f32); 4] {
        let r = self.rect;
        let t = &self.transform;
        [
            t.map_point(r.left, r.top),
            t.map_point(r.right, r.top),
            t.map_point(r.right, r.bottom),
            t.map_point(r.left, r.bottom),
        ]
    }
}

/// The three bars of the icon, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSet {
    pub top: Bar,
    pub middle: Bar,
    pub bottom: Bar,
}

impl BarSet {
    /// Bars in draw order.
    pub fn as_array(&self) -> [&Bar; 3] {
        [&self.top, &self.middle, &self.bottom]
    }
}

// ============================================================================
// Computation
// ============================================================================

/// Computes the three bars for `style` at `position`.
///
/// At position 0 every style yields the same three full-width horizontal
/// bars.
pub fn compute_bars(style: GlyphStyle, position: f32, layout: &BarLayout) -> BarSet {
    let rows = layout.rows();
    match style {
        GlyphStyle::Cross => cross(position, &rows),
        GlyphStyle::Arrow => arrow(position, &rows),
        GlyphStyle::Caret => caret(position, &rows),
    }
}

fn full_width(rows: &Rows, y: i64) -> RectF {
    RectF::from_ltrb(
        rows.padding_lr as f32,
        y as f32,
        (rows.width - rows.padding_lr) as f32,
        (y + rows.bar) as f32,
    )
}

fn fade_out(p: f32) -> u8 {
    (255 - (255.0 * p) as i32).clamp(0, 255) as u8
}

/// Right edge of the top and bottom bars, pulled halfway in at p = 1.
fn shrunk_right(p: f32, rows: &Rows) -> f32 {
    let bar_width = rows.width - 2 * rows.padding_lr;
    (rows.width - rows.padding_lr) as f32 - (bar_width / 2) as f32 * p
}

fn cross(p: f32, rows: &Rows) -> BarSet {
    let center_x = (rows.width / 2) as f32;
    let tilted = |y: i64, degrees: f32| {
        let mid_y = y + rows.bar / 2;
        Bar {
            transform: BarTransform {
                rotation_degrees: degrees * p,
                pivot: (center_x, mid_y as f32),
                translate_y: p * (rows.height / 2 - mid_y) as f32,
            },
            ..Bar::plain(full_width(rows, y))
        }
    };

    BarSet {
        top: tilted(rows.y0, 45.0),
        middle: Bar {
            fade: fade_out(p),
            ..Bar::plain(full_width(rows, rows.y1))
        },
        bottom: tilted(rows.y2, -45.0),
    }
}

fn arrow(p: f32, rows: &Rows) -> BarSet {
    wing_bars(p, rows, 35.0, (rows.space + rows.bar) as f32, false)
}

fn caret(p: f32, rows: &Rows) -> BarSet {
    let lift = (rows.space + rows.bar + rows.bar / 2) as f32;
    wing_bars(p, rows, 40.0, lift, true)
}

/// Shared shape of ARROW and CARET: both outer bars shorten from the right,
/// slide toward the middle row and swing about their left corners.
fn wing_bars(p: f32, rows: &Rows, degrees: f32, bottom_lift: f32, fade_middle: bool) -> BarSet {
    let left = rows.padding_lr as f32;
    let right = shrunk_right(p, rows);
    let bar = rows.bar as f32;

    let top_y = rows.y0 as f32 + (rows.bar + rows.space) as f32 * p;
    let top_rect = RectF::from_ltrb(left, top_y, right, top_y + bar);

    let bottom_y = rows.y2 as f32 - bottom_lift * p;
    let bottom_rect = RectF::from_ltrb(left, bottom_y, right, bottom_y + bar);

    let middle = Bar::plain(full_width(rows, rows.y1));

    BarSet {
        top: Bar {
            transform: BarTransform::rotate_at(-degrees * p, (left, top_rect.top)),
            ..Bar::plain(top_rect)
        },
        middle: if fade_middle {
            Bar {
                fade: fade_out(p),
                ..middle
            }
        } else {
            middle
        },
        bottom: Bar {
            transform: BarTransform::rotate_at(degrees * p, (left, bottom_rect.bottom)),
            ..Bar::plain(bottom_rect)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn layout(width: u32, height: u32, padding_lr: u32, padding_tb: u32, bar: u32) -> BarLayout {
        BarLayout {
            size: SizePx::new(width, height),
            padding_lr,
            padding_tb,
            bar_height: bar,
        }
    }

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn spacing_uses_integer_division() {
        assert_eq!(layout(48, 34, 8, 10, 4).space_between_bars(), 1);
        // (35 - 20 - 12) / 2 = 1.5 truncates to 1
        assert_eq!(layout(48, 35, 8, 10, 4).space_between_bars(), 1);
        // Bars that do not fit give a negative gap rather than a panic.
        assert_eq!(layout(48, 10, 8, 10, 4).space_between_bars(), -11);
    }

    #[test]
    fn closed_hamburger_is_identical_across_styles() {
        let l = layout(48, 48, 8, 10, 4);
        let reference = compute_bars(GlyphStyle::Cross, 0.0, &l);

        for style in GlyphStyle::ALL {
            let bars = compute_bars(style, 0.0, &l);
            for (bar, expected) in bars.as_array().into_iter().zip(reference.as_array()) {
                assert_eq!(bar.rect, expected.rect, "{style:?}");
                assert_eq!(bar.fade, 255, "{style:?}");
                assert!(bar.transform.is_identity(), "{style:?}");
            }
        }

        // (48 - 20 - 12) / 2 = 8: rows at 10, 22 and 34
        assert_eq!(reference.top.rect, RectF::from_ltrb(8.0, 10.0, 40.0, 14.0));
        assert_eq!(reference.middle.rect, RectF::from_ltrb(8.0, 22.0, 40.0, 26.0));
        assert_eq!(reference.bottom.rect, RectF::from_ltrb(8.0, 34.0, 40.0, 38.0));
    }

    #[test]
    fn cross_forms_an_x_at_center() {
        let l = layout(48, 48, 8, 10, 4);
        let bars = compute_bars(GlyphStyle::Cross, 1.0, &l);

        assert_eq!(bars.top.transform.rotation_degrees, 45.0);
        assert_eq!(bars.bottom.transform.rotation_degrees, -45.0);
        assert_eq!(bars.top.transform.pivot, (24.0, 12.0));
        assert_eq!(bars.bottom.transform.pivot, (24.0, 36.0));
        assert_eq!(bars.top.transform.translate_y, 12.0);
        assert_eq!(bars.bottom.transform.translate_y, -12.0);
        assert_eq!(bars.middle.fade, 0);

        // Both bar centers land on the icon center.
        let (cx, cy) = bars.top.rect.center();
        assert!(close(bars.top.transform.map_point(cx, cy), (24.0, 24.0)));
        let (cx, cy) = bars.bottom.rect.center();
        assert!(close(bars.bottom.transform.map_point(cx, cy), (24.0, 24.0)));
    }

    #[test]
    fn cross_halfway() {
        let l = layout(48, 48, 8, 10, 4);
        let bars = compute_bars(GlyphStyle::Cross, 0.5, &l);
        assert_eq!(bars.top.transform.rotation_degrees, 22.5);
        assert_eq!(bars.top.transform.translate_y, 6.0);
        // 255 - trunc(127.5)
        assert_eq!(bars.middle.fade, 128);
    }

    #[test]
    fn arrow_shrinks_and_keeps_shaft() {
        let l = layout(48, 48, 8, 10, 4);
        let bars = compute_bars(GlyphStyle::Arrow, 1.0, &l);

        // bar width 32, right edge pulled in by 16
        assert_eq!(bars.top.rect, RectF::from_ltrb(8.0, 22.0, 24.0, 26.0));
        assert_eq!(bars.bottom.rect, RectF::from_ltrb(8.0, 22.0, 24.0, 26.0));
        assert_eq!(bars.top.transform.rotation_degrees, -35.0);
        assert_eq!(bars.bottom.transform.rotation_degrees, 35.0);
        assert_eq!(bars.top.transform.pivot, (8.0, 22.0));
        assert_eq!(bars.bottom.transform.pivot, (8.0, 26.0));

        assert_eq!(bars.middle.rect, RectF::from_ltrb(8.0, 22.0, 40.0, 26.0));
        assert_eq!(bars.middle.fade, 255);
        assert!(bars.middle.transform.is_identity());
    }

    #[test]
    fn arrow_wings_point_away_from_tip() {
        let l = layout(48, 48, 8, 10, 4);
        let bars = compute_bars(GlyphStyle::Arrow, 1.0, &l);

        let top_end = bars.top.transform.map_point(bars.top.rect.right, bars.top.rect.top);
        let bottom_end = bars.bottom.transform.map_point(bars.bottom.rect.right, bars.bottom.rect.bottom);
        assert!(top_end.1 < 22.0, "top wing rises: {top_end:?}");
        assert!(bottom_end.1 > 26.0, "bottom wing drops: {bottom_end:?}");
    }

    #[test]
    fn caret_scenario() {
        let l = layout(48, 34, 8, 10, 4);
        assert_eq!(l.space_between_bars(), 1);

        let bars = compute_bars(GlyphStyle::Caret, 1.0, &l);
        assert_eq!(bars.top.transform.rotation_degrees, -40.0);
        assert_eq!(bars.bottom.transform.rotation_degrees, 40.0);
        assert_eq!(bars.middle.fade, 0);

        // top slides down by B + space = 5
        assert_eq!(bars.top.rect.top, 15.0);
        // bottom row at 20, lifted by space + B + B/2 = 7
        assert_eq!(bars.bottom.rect.top, 13.0);
        assert_eq!(bars.bottom.transform.pivot, (8.0, 17.0));
        // middle bar keeps its full-width rectangle
        assert_eq!(bars.middle.rect, RectF::from_ltrb(8.0, 15.0, 40.0, 19.0));
    }

    #[test]
    fn oversized_settings_do_not_overflow() {
        let l = layout(48, 48, 8, 1 << 30, 2);
        assert_eq!(l.space_between_bars(), (48 - (1_i64 << 31) - 6) / 2);
        let bars = compute_bars(GlyphStyle::Cross, 1.0, &l);
        assert_eq!(bars.top.rect.top, (1_u32 << 30) as f32);

        let l = layout(u32::MAX, u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        for style in GlyphStyle::ALL {
            for bar in compute_bars(style, 0.5, &l).as_array() {
                assert!(bar.rect.left.is_finite() && bar.rect.bottom.is_finite());
            }
        }
    }

    #[test]
    fn odd_widths_truncate_half_bar_width() {
        // bar width 33, half truncates to 16
        let l = layout(49, 48, 8, 10, 4);
        let bars = compute_bars(GlyphStyle::Caret, 1.0, &l);
        assert_eq!(bars.top.rect.right, 25.0);
        // cross pivot uses truncated W / 2
        let cross = compute_bars(GlyphStyle::Cross, 1.0, &l);
        assert_eq!(cross.top.transform.pivot.0, 24.0);
    }

    #[test]
    fn style_codes_fall_back_to_cross() {
        assert_eq!(GlyphStyle::from_code(0), GlyphStyle::Cross);
        assert_eq!(GlyphStyle::from_code(1), GlyphStyle::Arrow);
        assert_eq!(GlyphStyle::from_code(2), GlyphStyle::Caret);
        assert_eq!(GlyphStyle::from_code(99), GlyphStyle::Cross);
        assert_eq!(GlyphStyle::from_code(-1), GlyphStyle::Cross);
        for style in GlyphStyle::ALL {
            assert_eq!(GlyphStyle::from_code(style.code()), style);
        }
    }

    #[test]
    fn style_names_fall_back_to_cross() {
        assert_eq!(GlyphStyle::from_name("Arrow"), GlyphStyle::Arrow);
        assert_eq!(GlyphStyle::from_name(" caret "), GlyphStyle::Caret);
        assert_eq!(GlyphStyle::from_name("hexagon"), GlyphStyle::Cross);

        let parsed: GlyphStyle = serde_json::from_str("\"chevron\"").unwrap();
        assert_eq!(parsed, GlyphStyle::Cross);
        assert_eq!(serde_json::to_string(&GlyphStyle::Caret).unwrap(), "\"caret\"");
    }
}
