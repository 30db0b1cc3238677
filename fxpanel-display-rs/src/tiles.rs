//! Tile drawing for each control variant.
//!
//! Every tile is split into label (top), visual (middle) and value
//! (bottom). The focused tile gets a rounded outline and bright colours;
//! the others draw dim. Empty slots draw a placeholder and are never
//! focused.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use fxpanel::controls::{Control, ControlKind, Dial, Options, ValueText};
use fxpanel::model::{ParamStore, TileSlot};

use crate::canvas::{Canvas, FontKey, Paint};
use crate::layout::{
    center_x, center_y, dial_angle, dial_bounds, dial_center_radius, dial_fraction,
    enum_fallback_geometry, led_geometry, lever_for, placeholder_dash, polar, radians,
    split_tile, switch_geometry, LeverGeometry,
};
use crate::theme::Theme;

/// Draw one tile slot. The caller clears the tile area first.
pub fn draw_slot<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    tile: &Rectangle,
    slot: &TileSlot,
    focused: bool,
    store: &ParamStore,
) {
    match slot {
        TileSlot::Active(ctrl) => draw_control(canvas, theme, tile, ctrl, focused, store),
        TileSlot::Empty => draw_placeholder(canvas, theme, tile),
    }
}

/// Draw `ctrl` into `tile`.
pub fn draw_control<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    tile: &Rectangle,
    ctrl: &Control,
    focused: bool,
    store: &ParamStore,
) {
    if focused {
        canvas.rounded_rect(
            *tile,
            theme.tile_radius,
            theme.palette.foreground,
            Paint::Stroke(theme.tile_focus_w),
        );
    }

    let split = split_tile(theme, tile);
    let (accent, ring) = theme.tile_colors(focused);

    match &ctrl.kind {
        ControlKind::Dial(dial) => {
            let value = store.int_or_zero(ctrl.key);
            draw_dial_visual(canvas, theme, &split.visual, value, dial, ring, accent);
            canvas.text(
                FontKey::Small,
                split.label.top_left.x,
                split.label.top_left.y,
                ctrl.label,
                ring,
            );
            draw_dial_value(canvas, theme, &split.value, value, ring);
        }
        ControlKind::Button(_) => {
            let on = store.flag_or_false(ctrl.key);
            draw_led(canvas, theme, &split.visual, on, focused, ring, accent);
            draw_label_and_value(canvas, ctrl, &split.label, &split.value, store, ring);
        }
        ControlKind::Switch(opts) => {
            let idx = ctrl.selected_index(store).unwrap_or(0);
            draw_switch(canvas, theme, &split.visual, idx, opts, ring, accent);
            draw_label_and_value(canvas, ctrl, &split.label, &split.value, store, ring);
        }
        ControlKind::EnumSelect(_) => {
            draw_enum_fallback(canvas, theme, &split.visual, ring, accent);
            draw_label_and_value(canvas, ctrl, &split.label, &split.value, store, ring);
        }
        ControlKind::TextSelect(_) => {
            canvas.text(
                FontKey::Small,
                split.label.top_left.x,
                split.label.top_left.y,
                ctrl.label,
                ring,
            );
            let text = ctrl.display_text(store);
            let size = canvas.text_size(FontKey::Large, &text);
            canvas.text(
                FontKey::Large,
                center_x(&split.visual, size.width as i32),
                center_y(&split.visual, size.height as i32),
                &text,
                if focused { accent } else { ring },
            );
        }
    }
}

/// Dim outline with a dash in the middle, for slots without a control.
pub fn draw_placeholder<C: Canvas + ?Sized>(canvas: &mut C, theme: &Theme, tile: &Rectangle) {
    let dim = theme.palette.dim;
    canvas.rounded_rect(*tile, theme.tile_radius, dim, Paint::Stroke(1));

    let (from, to) = placeholder_dash(theme, tile);
    canvas.line(from, to, dim, 2);
}

fn draw_label_and_value<C: Canvas + ?Sized>(
    canvas: &mut C,
    ctrl: &Control,
    label: &Rectangle,
    value: &Rectangle,
    store: &ParamStore,
    color: Rgb565,
) {
    canvas.text(FontKey::Small, label.top_left.x, label.top_left.y, ctrl.label, color);

    let text = ctrl.display_text(store);
    let width = canvas.text_size(FontKey::Medium, &text).width as i32;
    canvas.text(FontKey::Medium, center_x(value, width), value.top_left.y, &text, color);
}

// ── Dial ─────────────────────────────────────────────────────────────────

/// 270° dial with tick fill up to the value, a needle, and a zero marker
/// when the range crosses zero.
pub fn draw_dial_visual<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    visual: &Rectangle,
    value: i32,
    dial: &Dial,
    ring: Rgb565,
    accent: Rgb565,
) {
    let (c, r) = dial_center_radius(theme, visual);
    let start_deg = theme.dial_start_deg;
    let end_deg = start_deg - theme.dial_sweep_deg;

    canvas.circle(c, r.max(0) as u32, ring, Paint::Stroke(theme.dial_outer_circle_w));
    canvas.arc(
        dial_bounds(c, r),
        radians(end_deg),
        radians(start_deg),
        ring,
        theme.dial_arc_w,
    );

    let ang = dial_angle(theme, dial_fraction(value, dial.vmin, dial.vmax));

    let step = theme.dial_step_deg;
    if step > 0.0 {
        let inner = r - theme.dial_tick_inset;
        let mut a = start_deg;
        while a >= ang {
            canvas.line(
                polar(c, inner, a),
                polar(c, inner - theme.dial_tick_len, a),
                accent,
                theme.dial_tick_w,
            );
            a -= step;
        }
    }

    canvas.line(c, polar(c, r - theme.dial_needle_inset, ang), accent, theme.dial_needle_w);

    if dial.vmin < 0 && 0 < dial.vmax {
        let a0 = dial_angle(theme, dial_fraction(0, dial.vmin, dial.vmax));
        canvas.line(
            polar(c, r - 1, a0),
            polar(c, r - 1 - theme.dial_zero_tick_len, a0),
            ring,
            theme.dial_zero_tick_w,
        );
    }
}

/// Three digits centred in the value rect; a minus sign, if any, hangs
/// off to the left so the digits never shift.
fn draw_dial_value<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    value_rect: &Rectangle,
    value: i32,
    color: Rgb565,
) {
    let mut digits = ValueText::new();
    let _ = write!(digits, "{:03}", value.unsigned_abs());

    let digits_w = canvas.text_size(FontKey::Medium, &digits).width as i32;
    let x = center_x(value_rect, digits_w);
    let y = value_rect.top_left.y;
    canvas.text(FontKey::Medium, x, y, &digits, color);

    if value < 0 {
        let minus_w = canvas.text_size(FontKey::Medium, "-").width as i32;
        canvas.text(FontKey::Medium, x - minus_w - theme.dial_minus_gap, y, "-", color);
    }
}

// ── Button ───────────────────────────────────────────────────────────────

fn draw_led<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    visual: &Rectangle,
    on: bool,
    focused: bool,
    ring: Rgb565,
    accent: Rgb565,
) {
    let led = led_geometry(theme, visual);
    let c = led.center;
    let bg = theme.palette.background;

    if on {
        canvas.circle(c, led.glow_r, accent, Paint::Stroke(theme.btn_led_glow_w));
        canvas.circle(c, led.radius, accent, Paint::Fill);
        canvas.circle(c, led.lens_r, bg, Paint::Stroke(theme.btn_led_lens_rim_w));
        canvas.circle(led.specular, led.specular_r, theme.palette.foreground, Paint::Fill);
    } else {
        canvas.circle(c, led.radius, ring, Paint::Stroke(theme.btn_led_ring_w));
        canvas.circle(c, led.lens_r, bg, Paint::Fill);
    }

    if focused {
        canvas.circle(c, led.halo_r, accent, Paint::Stroke(theme.btn_led_halo_w));
    }
}

// ── Switch ───────────────────────────────────────────────────────────────

fn draw_switch<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    visual: &Rectangle,
    idx: usize,
    opts: &Options,
    ring: Rgb565,
    accent: Rgb565,
) {
    let sw = switch_geometry(theme, visual, lever_for(idx, opts.len()));
    let c = sw.center;
    let bg = theme.palette.background;

    canvas.rounded_rect(sw.plate, sw.plate_r, ring, Paint::Stroke(theme.sw_outer_w));
    canvas.rounded_rect(sw.inner, sw.inner_r, ring, Paint::Stroke(theme.sw_inner_w));

    match sw.lever {
        LeverGeometry::Centered {
            socket_r,
            hub_r,
            ring_inner_r,
            pip_r,
            pip_hole_r,
        } => {
            canvas.circle(c, socket_r, ring, Paint::Fill);
            canvas.circle(c, hub_r, bg, Paint::Fill);
            canvas.circle(c, socket_r, accent, Paint::Stroke(theme.sw_socket_ring_w));
            canvas.circle(c, ring_inner_r, ring, Paint::Stroke(theme.sw_socket_inner_w));
            canvas.circle(c, pip_r, accent, Paint::Fill);
            canvas.circle(c, pip_hole_r, bg, Paint::Fill);
        }
        LeverGeometry::Thrown {
            socket_r,
            socket_inner_r,
            stem_from,
            end_dot_r,
            knob,
            knob_r,
            knob_rim_r,
        } => {
            canvas.circle(c, socket_r, ring, Paint::Stroke(theme.sw_socket_ring_w));
            canvas.circle(c, socket_inner_r, ring, Paint::Stroke(theme.sw_socket_inner_w));
            canvas.line(stem_from, c, accent, theme.sw_stem_w);
            canvas.circle(c, end_dot_r, accent, Paint::Fill);
            canvas.circle(knob, knob_r, accent, Paint::Fill);
            canvas.circle(knob, knob_rim_r, bg, Paint::Stroke(theme.sw_knob_inner_rim_w));
        }
    }
}

// ── Enum selector ────────────────────────────────────────────────────────

fn draw_enum_fallback<C: Canvas + ?Sized>(
    canvas: &mut C,
    theme: &Theme,
    visual: &Rectangle,
    ring: Rgb565,
    accent: Rgb565,
) {
    let geo = enum_fallback_geometry(theme, visual);
    let (from, to) = geo.midline;
    canvas.line(from, to, ring, theme.enum_midline_w);
    canvas.rounded_rect(
        geo.frame,
        theme.enum_fallback_radius,
        accent,
        Paint::Stroke(theme.enum_fallback_w),
    );
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rect;
    use crate::testing::{Op, RecordingCanvas};
    use fxpanel::model::ParamValue;

    fn tile() -> Rectangle {
        rect(10, 125, 70, 110)
    }

    // ── Frame and focus ──────────────────────────────────────────────

    #[test]
    fn focused_tile_gets_outline() {
        let t = Theme::default();
        let ctrl = Control::dial("rate", "RATE", 0, 100);
        let store = ParamStore::new();

        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, true, &store);
        assert_eq!(
            canvas.ops[0],
            Op::RoundedRect {
                rect: tile(),
                radius: t.tile_radius,
                color: t.palette.foreground,
                paint: Paint::Stroke(2),
            }
        );

        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, false, &store);
        assert!(!canvas.ops.contains(&Op::RoundedRect {
            rect: tile(),
            radius: t.tile_radius,
            color: t.palette.foreground,
            paint: Paint::Stroke(2),
        }));
    }

    #[test]
    fn placeholder_is_dim_and_unfocused() {
        let t = Theme::default();
        let mut canvas = RecordingCanvas::default();
        draw_slot(&mut canvas, &t, &tile(), &TileSlot::Empty, true, &ParamStore::new());
        assert_eq!(canvas.ops.len(), 2);
        assert!(canvas.ops.iter().all(|op| op.color() == Some(t.palette.dim)));
        assert!(canvas.texts().is_empty());
    }

    // ── Dial ─────────────────────────────────────────────────────────

    #[test]
    fn negative_dial_value_draws_minus_separately() {
        let t = Theme::default();
        let ctrl = Control::dial("rate", "RATE", -12, 12);
        let store = ParamStore::from_pairs(&[("rate", ParamValue::Int(-7))]).unwrap();
        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, false, &store);
        assert_eq!(canvas.texts(), ["RATE", "007", "-"]);
    }

    #[test]
    fn dial_zero_marker_only_when_range_crosses_zero() {
        let t = Theme::default();
        let visual = split_tile(&t, &tile()).visual;
        let (ring, accent) = (t.palette.dim, t.palette.accent_idle);

        let mut canvas = RecordingCanvas::default();
        let crossing = Dial { vmin: -12, vmax: 12, step: 1 };
        draw_dial_visual(&mut canvas, &t, &visual, 0, &crossing, ring, accent);
        let ring_lines = canvas.lines_with(ring);

        let mut canvas = RecordingCanvas::default();
        let positive = Dial { vmin: 0, vmax: 100, step: 1 };
        draw_dial_visual(&mut canvas, &t, &visual, 0, &positive, ring, accent);
        assert_eq!(ring_lines, canvas.lines_with(ring) + 1);
    }

    #[test]
    fn dial_arc_leaves_gap_at_bottom() {
        let t = Theme::default();
        let visual = split_tile(&t, &tile()).visual;
        let dial = Dial { vmin: 0, vmax: 100, step: 1 };
        let mut canvas = RecordingCanvas::default();
        draw_dial_visual(&mut canvas, &t, &visual, 50, &dial, t.palette.dim, t.palette.accent_idle);

        let arcs: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Arc { rect, start_rad, end_rad, .. } => Some((*rect, *start_rad, *end_rad)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 1);

        let (bounds, start, end) = arcs[0];
        let (c, r) = dial_center_radius(&t, &visual);
        assert_eq!(bounds, dial_bounds(c, r));
        // counter-clockwise from 4:30 round the top to 7:30
        assert!((start - (-45.0f32).to_radians()).abs() < 1e-5, "start {start}");
        assert!((end - 225.0f32.to_radians()).abs() < 1e-5, "end {end}");
    }

    #[test]
    fn dial_tick_count_follows_value() {
        let t = Theme::default();
        let visual = split_tile(&t, &tile()).visual;
        let dial = Dial { vmin: 0, vmax: 100, step: 1 };
        let accent = t.palette.accent_idle;

        let ticks = |value| {
            let mut canvas = RecordingCanvas::default();
            draw_dial_visual(&mut canvas, &t, &visual, value, &dial, t.palette.dim, accent);
            // every accent line except the needle is a tick
            canvas.lines_with(accent) - 1
        };
        assert_eq!(ticks(0), 1);
        assert_eq!(ticks(100), 91);
        assert!(ticks(50) > ticks(10));
    }

    // ── Button / switch / selectors ──────────────────────────────────

    #[test]
    fn button_led_fills_only_when_on() {
        let t = Theme::default();
        let ctrl = Control::button("sync", "SYNC");
        let mut store = ParamStore::new();

        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, false, &store);
        assert!(!canvas.has_filled_circle(t.palette.accent_idle));
        assert_eq!(canvas.texts(), ["SYNC", "OFF"]);

        store.set("sync", ParamValue::Bool(true)).unwrap();
        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, false, &store);
        assert!(canvas.has_filled_circle(t.palette.accent_idle));
        assert_eq!(canvas.texts(), ["SYNC", "ON"]);
    }

    #[test]
    fn switch_shows_selected_option() {
        let t = Theme::default();
        let ctrl = Control::switch("mode", "MODE", &["A", "B", "C"]);
        let store = ParamStore::from_pairs(&[("mode", ParamValue::Index(2))]).unwrap();
        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, true, &store);
        assert_eq!(canvas.texts(), ["MODE", "C"]);
    }

    #[test]
    fn enum_select_draws_fallback_box() {
        let t = Theme::default();
        let ctrl = Control::enum_select("wave", "WAVE", &["SINE", "TRI"]);
        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, false, &ParamStore::new());
        assert!(canvas.ops.iter().any(|op| matches!(
            op,
            Op::RoundedRect { paint: Paint::Stroke(3), color, .. } if *color == t.palette.accent_idle
        )));
        assert_eq!(canvas.texts(), ["WAVE", "SINE"]);
    }

    #[test]
    fn text_select_has_no_value_line() {
        let t = Theme::default();
        let ctrl = Control::text_select("div", "DIV", &["1/4", "1/8"]);
        let store = ParamStore::from_pairs(&[("div", ParamValue::Index(1))]).unwrap();
        let mut canvas = RecordingCanvas::default();
        draw_control(&mut canvas, &t, &tile(), &ctrl, true, &store);
        assert_eq!(canvas.texts(), ["DIV", "1/8"]);
        assert!(canvas.ops.iter().any(|op| matches!(
            op,
            Op::Text { font: FontKey::Large, color, .. } if *color == t.palette.accent_focus
        )));
    }
}
