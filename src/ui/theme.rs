//! Theme palettes and layout constants.
//!
//! There is no global theme: the shell picks a [`Theme`] from the current
//! [`ThemeMode`] and hands `&Theme` to every render function.

use gpui::{Rgba, rgb};

use crate::config::ThemeMode;
use crate::domain::Square;

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.8; // glyph size relative to square
pub const GHOST_OPACITY: f32 = 0.4;
pub const MIN_SQUARE: f32 = 30.0;

/// Board used by lesson diagrams
pub const DIAGRAM_SQUARE: f32 = 52.0;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: u32,
    pub surface: u32,
    pub surface_muted: u32,
    pub border: u32,
    pub text_primary: u32,
    pub text_secondary: u32,
    pub accent: u32,
    pub error: u32,
    pub light_square: u32,
    pub dark_square: u32,
    /// Dot drawn on highlighted empty squares
    pub highlight: u32,
    /// Ring drawn around highlighted occupied squares
    pub highlight_ring: u32,
    pub active_square: u32,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        mode: ThemeMode::Light,
        background: 0xffffff,
        surface: 0xf8fafc,
        surface_muted: 0xf1f5f9,
        border: 0xe2e8f0,
        text_primary: 0x0f172a,
        text_secondary: 0x64748b,
        accent: 0x2563eb,
        error: 0xdc2626,
        light_square: 0xffffff,
        dark_square: 0x3182ce,
        highlight: 0x4ade80,
        highlight_ring: 0x15803d,
        active_square: 0xfacc15,
    };

    pub const DARK: Theme = Theme {
        mode: ThemeMode::Dark,
        background: 0x1e1e1e,
        surface: 0x2a2a2a,
        surface_muted: 0x333333,
        border: 0x4a4a4a,
        text_primary: 0xffffff,
        text_secondary: 0x888888,
        accent: 0x60a5fa,
        error: 0xf87171,
        light_square: 0xefd9b5,
        dark_square: 0xb48764,
        highlight: 0x4ade80,
        highlight_ring: 0x166534,
        active_square: 0xeab308,
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }

    pub fn square_color(&self, sq: Square) -> Rgba {
        if sq.is_light() {
            rgb(self.light_square)
        } else {
            rgb(self.dark_square)
        }
    }
}
