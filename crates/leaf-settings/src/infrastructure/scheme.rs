//! Random color scheme generation.
//!
//! Every scheme is built from one random hue.  The three surface colors share
//! that hue and step in brightness (background darkest for a dark scheme,
//! lightest for a light one), and the text is white or near-black depending
//! on how bright the menu items are.

use std::sync::{Mutex, PoisonError};

use leaf_core::{Color, ColorScheme, SchemeGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DARK_VALUES: [f32; 3] = [0.16, 0.26, 0.40];
const LIGHT_VALUES: [f32; 3] = [0.96, 0.86, 0.74];

const LIGHT_TEXT: Color = Color::opaque(0xF5, 0xF5, 0xF5);
const DARK_TEXT: Color = Color::opaque(0x14, 0x14, 0x14);

/// Generates a new random scheme on every call.
pub struct RandomSchemeGenerator {
    rng: Mutex<StdRng>,
}

impl RandomSchemeGenerator {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSchemeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeGenerator for RandomSchemeGenerator {
    fn generate(&self) -> ColorScheme {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let hue = rng.gen_range(0.0..360.0);
        let saturation = rng.gen_range(0.30..0.65);
        let values = if rng.gen_bool(0.5) { DARK_VALUES } else { LIGHT_VALUES };

        let [background, base, base_focus] = values.map(|v| hsv_to_color(hue, saturation, v));
        let text = if luminance(base) > 0.5 { DARK_TEXT } else { LIGHT_TEXT };

        ColorScheme {
            background,
            base,
            base_focus,
            text,
        }
    }
}

/// Converts HSV (`h` in degrees, `s` and `v` in `0..=1`) to an opaque color.
fn hsv_to_color(h: f32, s: f32, v: f32) -> Color {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::opaque(to_u8(r), to_u8(g), to_u8(b))
}

/// Relative luminance in `0..=1` (Rec. 709 weights, no gamma).
fn luminance(color: Color) -> f32 {
    (0.2126 * f32::from(color.r) + 0.7152 * f32::from(color.g) + 0.0722 * f32::from(color.b)) / 255.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
