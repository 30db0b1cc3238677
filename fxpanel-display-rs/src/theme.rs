//! Theme: every geometry, colour and timing constant the renderer reads.
//!
//! All layout geometry lives here; there are no module-level layout
//! constants. [`Theme::default()`] reproduces the 240×280 design.

use embedded_graphics::pixelcolor::Rgb565;

/// Convert 8-bit RGB to the nearest-below RGB565 colour.
pub fn rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    let scale = |c: u8, max: u16| (u16::from(c) * max / 255) as u8;
    Rgb565::new(scale(r, 31), scale(g, 63), scale(b, 31))
}

/// Colours used by the editor screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub foreground: Rgb565,
    pub dim: Rgb565,
    /// Header bar, badge and page pill fill.
    pub header: Rgb565,
    /// Accent of the focused tile.
    pub accent_focus: Rgb565,
    /// Accent of unfocused tiles.
    pub accent_idle: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: rgb565(10, 10, 12),
            foreground: rgb565(240, 240, 245),
            dim: rgb565(130, 130, 140),
            header: rgb565(25, 25, 30),
            accent_focus: rgb565(80, 200, 255),
            accent_idle: rgb565(200, 200, 210),
        }
    }
}

/// Screen, layout and styling configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    // ── Screen ───────────────────────────────────────────────────────
    /// Logical width in pixels. Default: 240.
    pub width: i32,
    /// Logical height in pixels. Default: 280.
    pub height: i32,
    /// Frame rate of the editor loop. Default: 15.
    pub fps: u32,

    pub palette: Palette,

    // ── Header ───────────────────────────────────────────────────────
    pub header_x: i32,
    pub header_y: i32,
    pub header_h: i32,
    pub header_radius: u32,
    /// Effect name offset inside the header bar.
    pub header_text_dx: i32,
    pub header_text_dy: i32,

    // ── Badge ────────────────────────────────────────────────────────
    pub badge_pad_x: i32,
    pub badge_h: i32,
    pub badge_radius: u32,
    /// Gap between badge icon and text.
    pub badge_gap: i32,
    /// Distance from the badge to the header's right edge.
    pub badge_margin: i32,
    pub badge_text_dy: i32,
    pub badge_outline_w: u32,

    // ── Page indicator ───────────────────────────────────────────────
    pub pagebox_y: i32,
    pub pagebox_h: i32,
    pub pagebox_radius: u32,
    pub page_slots_pad_x: i32,
    pub page_slots_pad_y: i32,
    pub page_slots_gap: i32,
    pub page_slots_min_box: i32,
    /// Preferred lower bound on slot size before shrinking to fit.
    pub page_slots_pref_box: i32,
    pub page_slots_max_box: i32,
    pub page_slots_radius: u32,
    pub page_slots_outline_w: u32,

    // ── Tiles ────────────────────────────────────────────────────────
    pub tiles_y: i32,
    pub tile_w: i32,
    pub tile_h: i32,
    pub tile_gap: i32,
    pub tile_radius: u32,
    pub tile_pad: i32,
    pub tile_label_h: i32,
    pub tile_value_h: i32,
    pub tile_focus_w: u32,

    // ── Dial ─────────────────────────────────────────────────────────
    /// Angle of the range minimum, counter-clockwise from 3 o'clock.
    pub dial_start_deg: f32,
    pub dial_sweep_deg: f32,
    /// Angular spacing of the fill ticks.
    pub dial_step_deg: f32,
    pub dial_outer_circle_w: u32,
    pub dial_arc_w: u32,
    pub dial_tick_w: u32,
    pub dial_tick_len: i32,
    pub dial_tick_inset: i32,
    pub dial_needle_w: u32,
    pub dial_needle_inset: i32,
    pub dial_zero_tick_w: u32,
    pub dial_zero_tick_len: i32,
    pub dial_center_y_offset: i32,
    pub dial_radius_pad: i32,
    pub dial_minus_gap: i32,

    // ── Button LED ───────────────────────────────────────────────────
    pub btn_led_min_r: i32,
    /// LED radius is `min(w, h) / btn_led_div`.
    pub btn_led_div: i32,
    pub btn_led_glow_pad: i32,
    pub btn_led_glow_w: u32,
    pub btn_led_ring_w: u32,
    pub btn_led_lens_rim_w: u32,
    pub btn_led_spec_div: i32,
    pub btn_led_halo_pad: i32,
    pub btn_led_halo_w: u32,

    // ── Switch ───────────────────────────────────────────────────────
    pub sw_outer_w: u32,
    pub sw_inner_w: u32,
    pub sw_socket_ring_w: u32,
    pub sw_socket_inner_w: u32,
    pub sw_stem_w: u32,
    pub sw_end_dot_div: i32,
    pub sw_knob_inner_rim_w: u32,

    // ── Enum selector ────────────────────────────────────────────────
    pub enum_midline_pad: i32,
    pub enum_midline_w: u32,
    /// Fallback box size as a percentage of the visual area.
    pub enum_fallback_pct: i32,
    pub enum_fallback_radius: u32,
    pub enum_fallback_w: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            width: 240,
            height: 280,
            fps: 15,

            palette: Palette::default(),

            header_x: 12,
            header_y: 12,
            header_h: 40,
            header_radius: 12,
            header_text_dx: 10,
            header_text_dy: 6,

            badge_pad_x: 11,
            badge_h: 26,
            badge_radius: 13,
            badge_gap: 8,
            badge_margin: 6,
            badge_text_dy: 6,
            badge_outline_w: 2,

            pagebox_y: 58,
            pagebox_h: 24,
            pagebox_radius: 12,
            page_slots_pad_x: 10,
            page_slots_pad_y: 5,
            page_slots_gap: 4,
            page_slots_min_box: 6,
            page_slots_pref_box: 10,
            page_slots_max_box: 14,
            page_slots_radius: 3,
            page_slots_outline_w: 2,

            tiles_y: 125,
            tile_w: 70,
            tile_h: 110,
            tile_gap: 5,
            tile_radius: 14,
            tile_pad: 6,
            tile_label_h: 18,
            tile_value_h: 22,
            tile_focus_w: 2,

            dial_start_deg: 225.0,
            dial_sweep_deg: 270.0,
            dial_step_deg: 3.0,
            dial_outer_circle_w: 2,
            dial_arc_w: 2,
            dial_tick_w: 3,
            dial_tick_len: 8,
            dial_tick_inset: 2,
            dial_needle_w: 3,
            dial_needle_inset: 6,
            dial_zero_tick_w: 2,
            dial_zero_tick_len: 12,
            dial_center_y_offset: 2,
            dial_radius_pad: 2,
            dial_minus_gap: 2,

            btn_led_min_r: 7,
            btn_led_div: 5,
            btn_led_glow_pad: 3,
            btn_led_glow_w: 2,
            btn_led_ring_w: 2,
            btn_led_lens_rim_w: 2,
            btn_led_spec_div: 4,
            btn_led_halo_pad: 6,
            btn_led_halo_w: 1,

            sw_outer_w: 3,
            sw_inner_w: 2,
            sw_socket_ring_w: 3,
            sw_socket_inner_w: 2,
            sw_stem_w: 3,
            sw_end_dot_div: 3,
            sw_knob_inner_rim_w: 2,

            enum_midline_pad: 6,
            enum_midline_w: 1,
            enum_fallback_pct: 55,
            enum_fallback_radius: 10,
            enum_fallback_w: 3,
        }
    }
}

impl Theme {
    /// Frame period in milliseconds.
    ///
    /// Formula: `1000 / fps`, with `fps` raised to at least 1.
    pub fn frame_period_ms(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }

    /// Accent and ring colours for a tile.
    pub fn tile_colors(&self, focused: bool) -> (Rgb565, Rgb565) {
        if focused {
            (self.palette.accent_focus, self.palette.foreground)
        } else {
            (self.palette.accent_idle, self.palette.dim)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
