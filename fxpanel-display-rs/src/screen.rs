//! Editor screen composition driven by the dirty mask.
//!
//! | Dirty bits     | Redrawn                                         |
//! |----------------|-------------------------------------------------|
//! | `ALL`          | background fill, header, page pill, every tile  |
//! | `HEADER`       | header bar, effect name, badge                  |
//! | `PAGE`         | page indicator pill                             |
//! | `TILES`        | all three tiles                                 |
//! | `TILE(i)`      | tile `i` only                                   |
//!
//! Each region is cleared with a flat background fill before it is
//! redrawn so nothing from the previous frame shows through.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use fxpanel::model::{DirtyMask, Effect};

use crate::canvas::{Canvas, FontKey, Paint};
use crate::layout::{
    badge_geometry, badge_icon_geometry, header_rect, page_region, page_slots_geometry,
    page_slots_pos, tile_rects,
};
use crate::theme::Theme;
use crate::tiles::draw_slot;

/// Redraw the regions named by `dirty`. Does nothing for an empty mask.
pub fn render_editor<C: Canvas + ?Sized>(
    canvas: &mut C,
    fx: &Effect,
    theme: &Theme,
    dirty: DirtyMask,
) {
    if dirty.is_all() {
        render_full(canvas, fx, theme);
        return;
    }

    if dirty.contains(DirtyMask::HEADER) {
        canvas.clear_rect(header_rect(theme), theme.palette.background);
        draw_header(canvas, fx, theme);
    }
    if dirty.contains(DirtyMask::PAGE) {
        canvas.clear_rect(page_region(theme), theme.palette.background);
        draw_page_slots(canvas, fx, theme);
    }

    let tiles = tile_rects(theme);
    for (i, tile) in tiles.iter().enumerate() {
        if dirty.has_tile(i) {
            canvas.clear_rect(*tile, theme.palette.background);
            draw_tile(canvas, fx, theme, i, tile);
        }
    }
}

/// Clear the screen and draw everything.
pub fn render_full<C: Canvas + ?Sized>(canvas: &mut C, fx: &Effect, theme: &Theme) {
    canvas.fill(theme.palette.background);
    draw_header(canvas, fx, theme);
    draw_page_slots(canvas, fx, theme);
    for (i, tile) in tile_rects(theme).iter().enumerate() {
        draw_tile(canvas, fx, theme, i, tile);
    }
}

fn draw_tile<C: Canvas + ?Sized>(
    canvas: &mut C,
    fx: &Effect,
    theme: &Theme,
    index: usize,
    tile: &Rectangle,
) {
    let slot = &fx.current_page().slots()[index];
    let focused = slot.is_active() && index == fx.control_index();
    draw_slot(canvas, theme, tile, slot, focused, &fx.params);
}

// ── Header ───────────────────────────────────────────────────────────────

/// Header bar with the effect name and the ACTIVE/BYPASS badge.
pub fn draw_header<C: Canvas + ?Sized>(canvas: &mut C, fx: &Effect, theme: &Theme) {
    let palette = &theme.palette;
    let header = header_rect(theme);
    canvas.rounded_rect(header, theme.header_radius, palette.header, Paint::Fill);
    canvas.text(
        FontKey::Large,
        header.top_left.x + theme.header_text_dx,
        header.top_left.y + theme.header_text_dy,
        fx.name,
        palette.foreground,
    );

    let (label, color) = if fx.enabled {
        ("ACTIVE", palette.foreground)
    } else {
        ("BYPASS", palette.dim)
    };
    let text_w = canvas.text_size(FontKey::Small, label).width as i32;
    let geo = badge_geometry(theme, &header, text_w);

    canvas.rounded_rect(geo.badge, theme.badge_radius, palette.header, Paint::Fill);
    canvas.rounded_rect(
        geo.badge,
        theme.badge_radius,
        color,
        Paint::Stroke(theme.badge_outline_w),
    );
    draw_badge_icon(canvas, &geo.icon, fx.enabled, color);
    canvas.text(FontKey::Small, geo.text.x, geo.text.y, label, color);
}

/// Pedal silhouette: two knobs and a footswitch, filled when active,
/// hollow when bypassed.
fn draw_badge_icon<C: Canvas + ?Sized>(
    canvas: &mut C,
    icon: &Rectangle,
    active: bool,
    color: Rgb565,
) {
    let geo = badge_icon_geometry(icon);
    canvas.rounded_rect(geo.body, geo.body_r, color, Paint::Stroke(2));
    for knob in geo.knobs {
        canvas.circle(knob, geo.knob_r, color, Paint::Fill);
    }
    let paint = if active { Paint::Fill } else { Paint::Stroke(2) };
    canvas.circle(geo.foot, geo.foot_r, color, paint);
}

// ── Page indicator ───────────────────────────────────────────────────────

/// Page pill: the current page's slot is filled, the others outlined.
pub fn draw_page_slots<C: Canvas + ?Sized>(canvas: &mut C, fx: &Effect, theme: &Theme) {
    let palette = &theme.palette;
    let geo = page_slots_geometry(theme, page_slots_pos(theme), fx.page_count());
    let active = fx.page_index().min(geo.slots.len().saturating_sub(1));

    canvas.rounded_rect(geo.pill, theme.pagebox_radius, palette.header, Paint::Fill);

    let outline = Paint::Stroke(theme.page_slots_outline_w);
    for (i, slot) in geo.slots.iter().enumerate() {
        if i == active {
            canvas.rounded_rect(*slot, theme.page_slots_radius, palette.foreground, Paint::Fill);
            canvas.rounded_rect(*slot, theme.page_slots_radius, palette.foreground, outline);
        } else {
            canvas.rounded_rect(*slot, theme.page_slots_radius, palette.dim, outline);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingCanvas};
    use fxpanel::controls::Control;
    use fxpanel::model::{Page, ParamStore, ParamValue};
    use fxpanel::{apply_event, UiEvent};

    fn chorus() -> Effect {
        let main = Page::new(
            "MAIN",
            &[
                Control::dial("rate", "RATE", -12, 12),
                Control::switch("mode", "MODE", &["A", "B", "C"]),
                Control::button("sync", "SYNC"),
            ],
        )
        .unwrap();
        let tune = Page::new("TUNE", &[Control::dial("detune", "DETUNE", 0, 100)]).unwrap();
        let params = ParamStore::from_pairs(&[("rate", ParamValue::Int(3))]).unwrap();
        Effect::new("CHORUS", &[main, tune], params).unwrap()
    }

    fn render(fx: &Effect, dirty: DirtyMask) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        render_editor(&mut canvas, fx, &Theme::default(), dirty);
        canvas
    }

    // ── Region selection ─────────────────────────────────────────────

    #[test]
    fn empty_mask_draws_nothing() {
        assert!(render(&chorus(), DirtyMask::NONE).ops.is_empty());
    }

    #[test]
    fn all_fills_background_first() {
        let t = Theme::default();
        let canvas = render(&chorus(), DirtyMask::ALL);
        assert_eq!(canvas.ops[0], Op::Fill(t.palette.background));
        assert!(canvas.clears().is_empty());
        let texts = canvas.texts();
        assert!(texts.contains(&"CHORUS"));
        assert!(texts.contains(&"ACTIVE"));
        assert!(texts.contains(&"RATE"));
        assert!(texts.contains(&"SYNC"));
    }

    #[test]
    fn all_supersedes_other_bits() {
        let fx = chorus();
        assert_eq!(
            render(&fx, DirtyMask::ALL | DirtyMask::TILE1).ops,
            render(&fx, DirtyMask::ALL).ops
        );
    }

    #[test]
    fn header_bit_redraws_header_only() {
        let t = Theme::default();
        let canvas = render(&chorus(), DirtyMask::HEADER);
        assert_eq!(canvas.clears(), [header_rect(&t)]);
        assert_eq!(canvas.texts(), ["CHORUS", "ACTIVE"]);
    }

    #[test]
    fn bypassed_badge_is_dim() {
        let t = Theme::default();
        let mut fx = chorus();
        fx.enabled = false;
        let canvas = render(&fx, DirtyMask::HEADER);
        assert!(canvas.ops.contains(&Op::Text {
            font: FontKey::Small,
            pos: badge_geometry(&t, &header_rect(&t), 36).text,
            text: "BYPASS".into(),
            color: t.palette.dim,
        }));
    }

    #[test]
    fn badge_icon_foot_hollow_when_bypassed() {
        let t = Theme::default();
        let icon = badge_geometry(&t, &header_rect(&t), 36).icon;
        let foot = badge_icon_geometry(&icon).foot;
        let foot_op = |color, paint| Op::Circle {
            center: foot,
            radius: 3,
            color,
            paint,
        };

        let canvas = render(&chorus(), DirtyMask::HEADER);
        assert!(canvas.ops.contains(&foot_op(t.palette.foreground, Paint::Fill)));

        let mut fx = chorus();
        fx.enabled = false;
        let canvas = render(&fx, DirtyMask::HEADER);
        assert!(canvas.ops.contains(&foot_op(t.palette.dim, Paint::Stroke(2))));
    }

    #[test]
    fn page_bit_redraws_pill() {
        let t = Theme::default();
        let canvas = render(&chorus(), DirtyMask::PAGE);
        assert_eq!(canvas.clears(), [page_region(&t)]);
        // clear, pill, active slot (fill and outline), inactive slot
        assert_eq!(canvas.ops.len(), 1 + 1 + 2 + 1);
    }

    #[test]
    fn single_tile_bits_clear_only_their_tiles() {
        let t = Theme::default();
        let tiles = tile_rects(&t);
        let canvas = render(&chorus(), DirtyMask::TILE0 | DirtyMask::TILE2);
        assert_eq!(canvas.clears(), [tiles[0], tiles[2]]);
        assert_eq!(canvas.texts(), ["RATE", "003", "SYNC", "OFF"]);
    }

    #[test]
    fn tiles_bit_redraws_every_tile() {
        let t = Theme::default();
        let canvas = render(&chorus(), DirtyMask::TILES);
        assert_eq!(canvas.clears(), tile_rects(&t));
    }

    // ── Focus and placeholders ───────────────────────────────────────

    #[test]
    fn short_page_draws_placeholders() {
        let t = Theme::default();
        let mut fx = chorus();
        apply_event(&mut fx, UiEvent::PageNext);
        let canvas = render(&fx, DirtyMask::TILES);
        let tiles = tile_rects(&t);
        for tile in &tiles[1..] {
            assert!(canvas.ops.contains(&Op::RoundedRect {
                rect: *tile,
                radius: t.tile_radius,
                color: t.palette.dim,
                paint: Paint::Stroke(1),
            }));
        }
        assert_eq!(canvas.texts(), ["DETUNE", "000"]);
    }

    #[test]
    fn focus_outline_follows_cursor() {
        let t = Theme::default();
        let mut fx = chorus();
        let out = apply_event(&mut fx, UiEvent::NavRight);
        let canvas = render(&fx, out.dirty);
        let tiles = tile_rects(&t);
        let outline = |i: usize| Op::RoundedRect {
            rect: tiles[i],
            radius: t.tile_radius,
            color: t.palette.foreground,
            paint: Paint::Stroke(t.tile_focus_w),
        };
        assert!(canvas.ops.contains(&outline(1)));
        assert!(!canvas.ops.contains(&outline(0)));
    }
}
