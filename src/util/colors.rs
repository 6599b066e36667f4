use ratatui::style::Color;

use crate::model::AccentPreference;

pub const NEUTRAL: Color = Color::from_u32(0x00808080);
pub const MUTED: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const FOREGROUND: Color = Color::from_u32(0x00e6e6e6);
pub const HEART: Color = Color::from_u32(0x00ff5c7a);

pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> (u8, u8, u8) {
    let h = f32::from(h % 360);
    let s = f32::from(s.min(100)) / 100.0;
    let l = f32::from(l.min(100)) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u16 {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

pub fn accent(pref: AccentPreference) -> Color {
    let (r, g, b) = hsl_to_rgb(pref.h, pref.s, pref.l);
    Color::Rgb(r, g, b)
}
