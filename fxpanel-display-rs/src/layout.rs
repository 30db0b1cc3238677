//! Pure layout math.
//!
//! Every rectangle and point the renderer draws at is computed here from
//! [`Theme`] metrics alone, so geometry is testable without a canvas.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ╭──────────────────────────────────────────╮ │
//! │ │ CHORUS                  ╭─[icon] ACTIVE╮ │ │  ← header + badge
//! │ ╰──────────────────────────────────────────╯ │
//! │ ╭─■ □ □─╮                                    │  ← page pill
//! │                                              │
//! │ ╭──────────╮ ╭──────────╮ ╭──────────╮       │
//! │ │ LABEL    │ │ LABEL    │ │ LABEL    │       │  ← label rect
//! │ │  visual  │ │  visual  │ │  visual  │       │  ← visual rect
//! │ │   035    │ │    B     │ │   OFF    │       │  ← value rect
//! │ ╰──────────╯ ╰──────────╯ ╰──────────╯       │
//! └──────────────────────────────────────────────┘
//! ```

use core::f32::consts::PI;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use fxpanel::model::{MAX_PAGES, TILES_PER_PAGE};
use heapless::Vec;
use libm::{cosf, sinf};

use crate::theme::Theme;

/// Rectangle from signed geometry. Negative sizes collapse to zero.
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w.max(0) as u32, h.max(0) as u32))
}

fn width(r: &Rectangle) -> i32 {
    r.size.width as i32
}

fn height(r: &Rectangle) -> i32 {
    r.size.height as i32
}

fn radius(r: i32) -> u32 {
    r.max(0) as u32
}

// ── Screen regions ───────────────────────────────────────────────────────

/// Whole logical screen.
pub fn screen_rect(theme: &Theme) -> Rectangle {
    rect(0, 0, theme.width, theme.height)
}

/// Header bar holding the effect name and the badge.
pub fn header_rect(theme: &Theme) -> Rectangle {
    rect(
        theme.header_x,
        theme.header_y,
        theme.width - 2 * theme.header_x,
        theme.header_h,
    )
}

/// Region cleared before the page indicator is redrawn. Spans the full
/// content width because the pill width depends on the page count.
pub fn page_region(theme: &Theme) -> Rectangle {
    rect(
        theme.header_x,
        theme.pagebox_y,
        theme.width - 2 * theme.header_x,
        theme.pagebox_h,
    )
}

// ── Badge ────────────────────────────────────────────────────────────────

/// Placement of the ACTIVE/BYPASS badge inside the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeGeometry {
    pub badge: Rectangle,
    pub icon: Rectangle,
    /// Top-left of the badge text.
    pub text: Point,
}

/// Badge icon size: `badge_h - 8` tall, six pixels wider than tall.
pub fn badge_icon_size(theme: &Theme) -> Size {
    let icon_h = theme.badge_h - 8;
    Size::new((icon_h + 6).max(0) as u32, icon_h.max(0) as u32)
}

/// Right-aligned badge for a label `text_w` pixels wide.
pub fn badge_geometry(theme: &Theme, header: &Rectangle, text_w: i32) -> BadgeGeometry {
    let icon = badge_icon_size(theme);
    let (icon_w, icon_h) = (icon.width as i32, icon.height as i32);
    let (hx, hy) = (header.top_left.x, header.top_left.y);

    let bw = text_w + theme.badge_pad_x * 2 + icon_w + theme.badge_gap;
    let bx = hx + width(header) - bw - theme.badge_margin;
    let by = hy + (height(header) - theme.badge_h) / 2;

    let ix = bx + theme.badge_pad_x;
    let iy = by + (theme.badge_h - icon_h) / 2;

    BadgeGeometry {
        badge: rect(bx, by, bw, theme.badge_h),
        icon: rect(ix, iy, icon_w, icon_h),
        text: Point::new(ix + icon_w + theme.badge_gap, by + theme.badge_text_dy),
    }
}

// ── Page indicator ───────────────────────────────────────────────────────

/// Top-left of the page indicator pill.
pub fn page_slots_pos(theme: &Theme) -> Point {
    Point::new(theme.header_x, theme.pagebox_y)
}

/// Pill and one square slot per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlotsGeometry {
    pub pill: Rectangle,
    pub slots: Vec<Rectangle, MAX_PAGES>,
}

/// Lay out `n_pages` slots starting at `origin`.
///
/// Slots prefer `page_slots_pref_box..=page_slots_max_box` pixels and
/// shrink (never below `page_slots_min_box`) so the pill fits inside the
/// content width. `n_pages` is clamped to `1..=MAX_PAGES`.
pub fn page_slots_geometry(theme: &Theme, origin: Point, n_pages: usize) -> PageSlotsGeometry {
    let n = n_pages.clamp(1, MAX_PAGES) as i32;
    let pad_x = theme.page_slots_pad_x;
    let gap = theme.page_slots_gap;

    let inner_h = theme.pagebox_h - 2 * theme.page_slots_pad_y;
    let mut box_h = inner_h
        .min(theme.page_slots_max_box)
        .max(theme.page_slots_pref_box);
    let mut box_w = box_h;

    let max_pill_w = theme.width - 2 * theme.header_x;
    let needed_w = pad_x * 2 + n * box_w + (n - 1) * gap;
    if needed_w > max_pill_w {
        box_w = ((max_pill_w - pad_x * 2 - (n - 1) * gap) / n).max(theme.page_slots_min_box);
        box_h = box_h.min(box_w);
    }

    let pill_w = pad_x * 2 + n * box_w + (n - 1) * gap;
    let sx = origin.x + pad_x;
    let sy = origin.y + (theme.pagebox_h - box_h) / 2;

    let mut slots = Vec::new();
    for i in 0..n {
        // n <= MAX_PAGES, so the push always fits.
        let _ = slots.push(rect(sx + i * (box_w + gap), sy, box_w, box_h));
    }

    PageSlotsGeometry {
        pill: rect(origin.x, origin.y, pill_w, theme.pagebox_h),
        slots,
    }
}

// ── Tiles ────────────────────────────────────────────────────────────────

/// The row of tiles, centred horizontally.
pub fn tile_rects(theme: &Theme) -> [Rectangle; TILES_PER_PAGE] {
    let n = TILES_PER_PAGE as i32;
    let total_w = theme.tile_w * n + theme.tile_gap * (n - 1);
    let start_x = (theme.width - total_w) / 2;

    core::array::from_fn(|i| {
        let x = start_x + i as i32 * (theme.tile_w + theme.tile_gap);
        rect(x, theme.tiles_y, theme.tile_w, theme.tile_h)
    })
}

/// Label, visual and value areas of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSplit {
    pub label: Rectangle,
    pub visual: Rectangle,
    pub value: Rectangle,
}

pub fn split_tile(theme: &Theme, tile: &Rectangle) -> TileSplit {
    let (x, y) = (tile.top_left.x, tile.top_left.y);
    let (w, h) = (width(tile), height(tile));
    let pad = theme.tile_pad;
    let label_h = theme.tile_label_h;
    let value_h = theme.tile_value_h;

    TileSplit {
        label: rect(x + pad, y + pad, w - 2 * pad, label_h),
        visual: rect(x + pad, y + pad + label_h, w - 2 * pad, h - 2 * pad - label_h - value_h),
        value: rect(x + pad, y + h - value_h - pad, w - 2 * pad, value_h),
    }
}

/// X that centres an item `item_w` wide inside `area`.
pub fn center_x(area: &Rectangle, item_w: i32) -> i32 {
    area.top_left.x + (width(area) - item_w) / 2
}

/// Y that centres an item `item_h` tall inside `area`.
pub fn center_y(area: &Rectangle, item_h: i32) -> i32 {
    area.top_left.y + (height(area) - item_h) / 2
}

// ── Dial ─────────────────────────────────────────────────────────────────

/// Centre and radius of the dial drawn in a tile's visual area.
pub fn dial_center_radius(theme: &Theme, visual: &Rectangle) -> (Point, i32) {
    let (w, h) = (width(visual), height(visual));
    let r = w.min(h) / 2 - theme.dial_radius_pad;
    let center = Point::new(
        visual.top_left.x + w / 2,
        visual.top_left.y + h / 2 + theme.dial_center_y_offset,
    );
    (center, r)
}

/// Position of `value` in `vmin..=vmax` as a fraction in `[0, 1]`.
///
/// `0` when the range is empty. Inverted ranges run backwards.
pub fn dial_fraction(value: i32, vmin: i32, vmax: i32) -> f32 {
    if vmin == vmax {
        return 0.0;
    }
    let t = (i64::from(value) - i64::from(vmin)) as f32 / (i64::from(vmax) - i64::from(vmin)) as f32;
    t.clamp(0.0, 1.0)
}

/// Dial angle in degrees for fraction `t`. `t = 0` is the start angle.
pub fn dial_angle(theme: &Theme, t: f32) -> f32 {
    theme.dial_start_deg - theme.dial_sweep_deg * t
}

/// Square bounding box of the dial ring, for the arc.
pub fn dial_bounds(center: Point, r: i32) -> Rectangle {
    rect(center.x - r, center.y - r, 2 * r, 2 * r)
}

pub fn radians(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Point `r` pixels from `center` at `deg` degrees counter-clockwise
/// from 3 o'clock, on a y-down screen. Offsets truncate toward zero.
pub fn polar(center: Point, r: i32, deg: f32) -> Point {
    let (r, a) = (r as f32, radians(deg));
    Point::new(
        center.x + (r * cosf(a)) as i32,
        center.y - (r * sinf(a)) as i32,
    )
}

// ── Placeholder ──────────────────────────────────────────────────────────

const PLACEHOLDER_DASH_HALF: i32 = 8;

/// Ends of the dash drawn across the visual centre of an empty slot.
pub fn placeholder_dash(theme: &Theme, tile: &Rectangle) -> (Point, Point) {
    let c = split_tile(theme, tile).visual.center();
    (
        Point::new(c.x - PLACEHOLDER_DASH_HALF, c.y),
        Point::new(c.x + PLACEHOLDER_DASH_HALF, c.y),
    )
}

// ── Button LED ───────────────────────────────────────────────────────────

/// Concentric circles of the button LED, all centred on `center` except
/// the specular highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedGeometry {
    pub center: Point,
    pub radius: u32,
    /// Glow ring around a lit LED.
    pub glow_r: u32,
    /// Lens rim when lit, dark fill when off.
    pub lens_r: u32,
    /// Focus halo.
    pub halo_r: u32,
    pub specular: Point,
    pub specular_r: u32,
}

pub fn led_geometry(theme: &Theme, visual: &Rectangle) -> LedGeometry {
    let c = visual.center();
    let led_r = theme
        .btn_led_min_r
        .max(width(visual).min(height(visual)) / theme.btn_led_div.max(1));

    LedGeometry {
        center: c,
        radius: radius(led_r),
        glow_r: radius(led_r + theme.btn_led_glow_pad),
        lens_r: radius((led_r - 2).max(2)),
        halo_r: radius(led_r + theme.btn_led_halo_pad),
        specular: Point::new(c.x - led_r / 3, c.y - led_r / 3),
        specular_r: radius((led_r / theme.btn_led_spec_div.max(1)).max(2)),
    }
}

// ── Switch ───────────────────────────────────────────────────────────────

/// Lever position of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lever {
    Up,
    Middle,
    Down,
}

/// Two options throw up and down; three add the middle. A single option
/// (or none) sits in the middle.
pub fn lever_for(idx: usize, n: usize) -> Lever {
    match n {
        0 | 1 => Lever::Middle,
        2 if idx == 0 => Lever::Up,
        2 => Lever::Down,
        _ => match idx {
            0 => Lever::Up,
            1 => Lever::Middle,
            _ => Lever::Down,
        },
    }
}

/// Toggle switch: a rounded socket plate with the lever on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchGeometry {
    pub center: Point,
    pub plate: Rectangle,
    pub plate_r: u32,
    pub inner: Rectangle,
    pub inner_r: u32,
    pub lever: LeverGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeverGeometry {
    /// Lever seen end-on: a ringed socket with a hollow pip.
    Centered {
        socket_r: u32,
        hub_r: u32,
        ring_inner_r: u32,
        pip_r: u32,
        pip_hole_r: u32,
    },
    /// Lever thrown past the plate edge, stem running back to the centre.
    Thrown {
        socket_r: u32,
        socket_inner_r: u32,
        stem_from: Point,
        end_dot_r: u32,
        knob: Point,
        knob_r: u32,
        knob_rim_r: u32,
    },
}

pub fn switch_geometry(theme: &Theme, visual: &Rectangle, lever: Lever) -> SwitchGeometry {
    let c = visual.center();
    let plate_w = (width(visual) * 42 / 100).max(18);
    let plate_h = (height(visual) * 62 / 100).max(28);
    let px = c.x - plate_w / 2;
    let py = c.y - plate_h / 2;
    let pr = plate_w / 2;

    let lever = match lever {
        Lever::Middle => {
            let socket_r = (plate_w * 25 / 100).max(8);
            let pip_r = (socket_r / 3).max(3);
            LeverGeometry::Centered {
                socket_r: radius(socket_r),
                hub_r: radius((socket_r - 4).max(2)),
                ring_inner_r: radius((socket_r - 5).max(2)),
                pip_r: radius(pip_r),
                pip_hole_r: radius((pip_r - 2).max(1)),
            }
        }
        Lever::Up | Lever::Down => {
            let socket_r = (plate_w * 20 / 100).max(6);
            let knob_r = (plate_w * 24 / 100).max(7);
            let (knob_y, stem_y) = if lever == Lever::Up {
                let knob_y = py - knob_r / 4;
                (knob_y, knob_y + (knob_r - 2))
            } else {
                let knob_y = py + plate_h + knob_r / 4;
                (knob_y, knob_y - (knob_r - 2))
            };
            LeverGeometry::Thrown {
                socket_r: radius(socket_r),
                socket_inner_r: radius((socket_r - 3).max(2)),
                stem_from: Point::new(c.x, stem_y),
                end_dot_r: radius((knob_r / theme.sw_end_dot_div.max(1)).max(3)),
                knob: Point::new(c.x, knob_y),
                knob_r: radius(knob_r),
                knob_rim_r: radius((knob_r - 3).max(2)),
            }
        }
    };

    SwitchGeometry {
        center: c,
        plate: rect(px, py, plate_w, plate_h),
        plate_r: radius(pr),
        inner: rect(px + 3, py + 3, plate_w - 6, plate_h - 6),
        inner_r: radius((pr - 3).max(2)),
        lever,
    }
}

// ── Enum selector ────────────────────────────────────────────────────────

/// Midline and centred frame drawn for an enum selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumFallbackGeometry {
    pub midline: (Point, Point),
    pub frame: Rectangle,
}

pub fn enum_fallback_geometry(theme: &Theme, visual: &Rectangle) -> EnumFallbackGeometry {
    let (vx, vy) = (visual.top_left.x, visual.top_left.y);
    let (vw, vh) = (width(visual), height(visual));
    let mid_y = vy + vh / 2;
    let fw = vw * theme.enum_fallback_pct / 100;
    let fh = vh * theme.enum_fallback_pct / 100;

    EnumFallbackGeometry {
        midline: (
            Point::new(vx + theme.enum_midline_pad, mid_y),
            Point::new(vx + vw - theme.enum_midline_pad, mid_y),
        ),
        frame: rect(vx + (vw - fw) / 2, vy + (vh - fh) / 2, fw, fh),
    }
}

// ── Badge icon ───────────────────────────────────────────────────────────

/// Pedal silhouette inside the badge icon box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeIconGeometry {
    pub body: Rectangle,
    pub body_r: u32,
    pub knobs: [Point; 2],
    pub knob_r: u32,
    pub foot: Point,
    pub foot_r: u32,
}

/// Pedal body inset one pixel into `icon`, at 70 % of its width and
/// 80 % of its height.
pub fn badge_icon_geometry(icon: &Rectangle) -> BadgeIconGeometry {
    let (x, y) = (icon.top_left.x + 1, icon.top_left.y + 1);
    let (w, h) = (width(icon) - 2, height(icon) - 2);

    let pw = (w * 70 / 100).max(14);
    let ph = (h * 80 / 100).max(10);
    let px = x + (w - pw) / 2;
    let py = y + (h - ph) / 2;

    BadgeIconGeometry {
        body: rect(px, py, pw, ph),
        body_r: 4,
        knobs: [
            Point::new(px + pw * 30 / 100, py + ph / 4),
            Point::new(px + pw * 70 / 100, py + ph / 4),
        ],
        knob_r: 2,
        foot: Point::new(px + pw / 2, py + ph * 70 / 100),
        foot_r: 3,
    }
}
// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::ContainsPoint;

    // ── Regions ──────────────────────────────────────────────────────

    #[test]
    fn header_spans_content_width() {
        let t = Theme::default();
        assert_eq!(header_rect(&t), rect(12, 12, 216, 40));
        assert_eq!(page_region(&t), rect(12, 58, 216, 24));
        assert_eq!(screen_rect(&t), rect(0, 0, 240, 280));
    }

    #[test]
    fn negative_sizes_collapse() {
        assert_eq!(rect(5, 5, -3, 4).size, Size::new(0, 4));
    }

    // ── Badge ────────────────────────────────────────────────────────

    #[test]
    fn badge_is_right_aligned_in_header() {
        let t = Theme::default();
        let header = header_rect(&t);
        let geo = badge_geometry(&t, &header, 36);

        assert_eq!(geo.badge, rect(132, 19, 90, 26));
        assert_eq!(geo.icon, rect(143, 23, 24, 18));
        assert_eq!(geo.text, Point::new(175, 25));
        // 6 px margin to the header's right edge
        assert_eq!(
            geo.badge.top_left.x + geo.badge.size.width as i32 + 6,
            header.top_left.x + header.size.width as i32
        );
    }

    #[test]
    fn wider_text_moves_badge_left() {
        let t = Theme::default();
        let header = header_rect(&t);
        let narrow = badge_geometry(&t, &header, 30);
        let wide = badge_geometry(&t, &header, 50);
        assert_eq!(narrow.badge.top_left.x - wide.badge.top_left.x, 20);
        assert_eq!(narrow.badge.top_left.y, wide.badge.top_left.y);
    }

    // ── Page slots ───────────────────────────────────────────────────

    #[test]
    fn page_slots_default_size() {
        let t = Theme::default();
        let geo = page_slots_geometry(&t, page_slots_pos(&t), 4);
        assert_eq!(geo.slots.len(), 4);
        assert_eq!(geo.pill, rect(12, 58, 88, 24));
        assert_eq!(geo.slots[0], rect(22, 63, 14, 14));
        assert_eq!(geo.slots[3], rect(76, 63, 14, 14));
    }

    #[test]
    fn page_slots_shrink_to_fit() {
        let t = Theme {
            width: 100,
            ..Theme::default()
        };
        // content width 76: (76 - 20 - 7 * 4) / 8 = 3, raised to min 6
        let geo = page_slots_geometry(&t, page_slots_pos(&t), 8);
        assert_eq!(geo.slots[0].size, Size::new(6, 6));
        assert_eq!(geo.pill.size.width, 20 + 8 * 6 + 7 * 4);

        let t = Theme {
            width: 160,
            ..Theme::default()
        };
        // content width 136: (136 - 20 - 28) / 8 = 11
        let geo = page_slots_geometry(&t, page_slots_pos(&t), 8);
        assert_eq!(geo.slots[0].size, Size::new(11, 11));
        assert!(geo.pill.size.width as i32 <= 136);
    }

    #[test]
    fn page_slots_clamp_page_count() {
        let t = Theme::default();
        assert_eq!(page_slots_geometry(&t, Point::zero(), 0).slots.len(), 1);
        assert_eq!(
            page_slots_geometry(&t, Point::zero(), 99).slots.len(),
            MAX_PAGES
        );
    }

    // ── Tiles ────────────────────────────────────────────────────────

    #[test]
    fn tiles_are_centred() {
        let t = Theme::default();
        let tiles = tile_rects(&t);
        assert_eq!(tiles[0], rect(10, 125, 70, 110));
        assert_eq!(tiles[1], rect(85, 125, 70, 110));
        assert_eq!(tiles[2], rect(160, 125, 70, 110));
    }

    #[test]
    fn split_tile_stacks_label_visual_value() {
        let t = Theme::default();
        let split = split_tile(&t, &rect(10, 125, 70, 110));
        assert_eq!(split.label, rect(16, 131, 58, 18));
        assert_eq!(split.visual, rect(16, 149, 58, 58));
        assert_eq!(split.value, rect(16, 207, 58, 22));
    }

    #[test]
    fn centering_helpers() {
        let area = rect(10, 20, 50, 30);
        assert_eq!(center_x(&area, 10), 30);
        assert_eq!(center_y(&area, 10), 30);
    }

    // ── Dial ─────────────────────────────────────────────────────────

    #[test]
    fn dial_center_and_radius() {
        let t = Theme::default();
        let (c, r) = dial_center_radius(&t, &rect(16, 149, 58, 58));
        assert_eq!(c, Point::new(45, 180));
        assert_eq!(r, 27);
    }

    #[test]
    fn dial_fraction_clamps_and_handles_empty_range() {
        assert_eq!(dial_fraction(50, 0, 100), 0.5);
        assert_eq!(dial_fraction(-5, 0, 100), 0.0);
        assert_eq!(dial_fraction(500, 0, 100), 1.0);
        assert_eq!(dial_fraction(7, 7, 7), 0.0);
        assert_eq!(dial_fraction(0, -12, 12), 0.5);
        assert_eq!(dial_fraction(10, 10, 0), 0.0);
    }

    #[test]
    fn dial_angle_sweeps_clockwise_from_start() {
        let t = Theme::default();
        assert_eq!(dial_angle(&t, 0.0), 225.0);
        assert_eq!(dial_angle(&t, 0.5), 90.0);
        assert_eq!(dial_angle(&t, 1.0), -45.0);
    }

    #[test]
    fn polar_is_y_down() {
        let c = Point::new(100, 100);
        assert_eq!(polar(c, 20, 0.0), Point::new(120, 100));
        assert_eq!(polar(c, 20, 90.0), Point::new(100, 80));
        assert_eq!(polar(c, 20, 180.0), Point::new(80, 100));
        assert_eq!(polar(c, 27, 225.0), Point::new(81, 119));
        assert_eq!(polar(c, 27, -45.0), Point::new(119, 119));
    }

    #[test]
    fn dial_bounds_enclose_ring() {
        assert_eq!(dial_bounds(Point::new(45, 180), 27), rect(18, 153, 54, 54));
    }

    // ── Placeholder and LED ──────────────────────────────────────────

    fn visual() -> Rectangle {
        split_tile(&Theme::default(), &rect(10, 125, 70, 110)).visual
    }

    #[test]
    fn placeholder_dash_is_centred() {
        let t = Theme::default();
        let (from, to) = placeholder_dash(&t, &rect(10, 125, 70, 110));
        assert_eq!(from, Point::new(36, 177));
        assert_eq!(to, Point::new(52, 177));
    }

    #[test]
    fn led_scales_with_visual() {
        let t = Theme::default();
        let led = led_geometry(&t, &visual());
        assert_eq!(led.center, Point::new(44, 177));
        // 58 / 5
        assert_eq!(led.radius, 11);
        assert_eq!(led.glow_r, 14);
        assert_eq!(led.lens_r, 9);
        assert_eq!(led.halo_r, 17);
        assert_eq!(led.specular, Point::new(41, 174));
        assert_eq!(led.specular_r, 2);
    }

    #[test]
    fn small_led_keeps_minimum_radius() {
        let t = Theme::default();
        let led = led_geometry(&t, &rect(0, 0, 20, 20));
        assert_eq!(led.radius, t.btn_led_min_r as u32);
        assert_eq!(led.lens_r, 5);
    }

    // ── Switch ───────────────────────────────────────────────────────

    #[test]
    fn switch_lever_positions() {
        assert_eq!(lever_for(0, 3), Lever::Up);
        assert_eq!(lever_for(1, 3), Lever::Middle);
        assert_eq!(lever_for(2, 3), Lever::Down);
        assert_eq!(lever_for(0, 2), Lever::Up);
        assert_eq!(lever_for(1, 2), Lever::Down);
        assert_eq!(lever_for(0, 1), Lever::Middle);
        assert_eq!(lever_for(0, 0), Lever::Middle);
    }

    #[test]
    fn switch_plate_is_centred() {
        let t = Theme::default();
        let sw = switch_geometry(&t, &visual(), Lever::Middle);
        assert_eq!(sw.center, Point::new(44, 177));
        assert_eq!(sw.plate, rect(32, 160, 24, 35));
        assert_eq!(sw.plate_r, 12);
        assert_eq!(sw.inner, rect(35, 163, 18, 29));
        assert_eq!(sw.inner_r, 9);
        assert_eq!(
            sw.lever,
            LeverGeometry::Centered {
                socket_r: 8,
                hub_r: 4,
                ring_inner_r: 3,
                pip_r: 3,
                pip_hole_r: 1,
            }
        );
    }

    #[test]
    fn thrown_lever_knob_overhangs_plate() {
        let t = Theme::default();
        let up = switch_geometry(&t, &visual(), Lever::Up);
        assert_eq!(
            up.lever,
            LeverGeometry::Thrown {
                socket_r: 6,
                socket_inner_r: 3,
                stem_from: Point::new(44, 164),
                end_dot_r: 3,
                knob: Point::new(44, 159),
                knob_r: 7,
                knob_rim_r: 4,
            }
        );

        let down = switch_geometry(&t, &visual(), Lever::Down);
        let LeverGeometry::Thrown { knob, stem_from, .. } = down.lever else {
            panic!("down lever is thrown");
        };
        assert_eq!(knob, Point::new(44, 196));
        assert_eq!(stem_from, Point::new(44, 191));
        // plate does not move with the lever
        assert_eq!(down.plate, up.plate);
    }

    // ── Enum selector and badge icon ─────────────────────────────────

    #[test]
    fn enum_fallback_frame_and_midline() {
        let t = Theme::default();
        let geo = enum_fallback_geometry(&t, &visual());
        assert_eq!(geo.midline, (Point::new(22, 178), Point::new(68, 178)));
        // 55 % of 58
        assert_eq!(geo.frame, rect(29, 162, 31, 31));
    }

    #[test]
    fn badge_icon_fits_icon_box() {
        let t = Theme::default();
        let icon = badge_geometry(&t, &header_rect(&t), 36).icon;
        let geo = badge_icon_geometry(&icon);
        assert_eq!(geo.body, rect(147, 26, 15, 12));
        assert_eq!(geo.knobs, [Point::new(151, 29), Point::new(157, 29)]);
        assert_eq!(geo.foot, Point::new(154, 34));
        assert!(icon.contains(geo.body.top_left));
        assert!(icon.contains(geo.foot));
    }
}
