//! HSL color conversion.
//!
//! Entities carry a hue angle so neighboring fireworks drift smoothly
//! through the spectrum; backends want RGBA.

use glam::Vec4;

/// Convert an HSLA color to linear RGBA.
///
/// `hue` is in degrees and wraps at 360; `saturation`, `lightness` and
/// `alpha` are in `[0, 1]`.
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Vec4 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = lightness - c * 0.5;
    Vec4::new(r + m, g + m, b + m, alpha)
}
