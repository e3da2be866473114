//! WCAG contrast math for picking readable text colors.
//!
//! Ratios are measured in sRGB relative luminance (the WCAG definition);
//! adjustments such as [`emphasize`] move OKLCH lightness instead, because
//! equal steps there look equal on screen.

use crate::color::{Color, srgb_to_linear};

/// Relative luminance of a color per WCAG 2.1, in `[0.0, 1.0]`.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Alpha is ignored; composite first with [`Color::blend_over`] if needed.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG 2.1 contrast ratio between two opaque colors, in `[1.0, 21.0]`.
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of `foreground` drawn on `background`, where either may be
/// translucent.
///
/// `background` is first composited over `canvas` (the surface it will
/// actually sit on), then `foreground` over the result.
#[must_use]
pub fn contrast_ratio_on(foreground: Color, background: Color, canvas: Color) -> f64 {
    let bg = background.blend_over(&canvas);
    let fg = foreground.blend_over(&bg);
    contrast_ratio(fg, bg)
}

/// Push a color away from its luminance extreme: light colors get darker,
/// dark colors get lighter. `amount` is in OKLCH lightness units.
///
/// Used for hover shades, where the shade must stay visible on both
/// light and dark surfaces.
#[must_use]
pub fn emphasize(color: Color, amount: f32) -> Color {
    if relative_luminance(color) > 0.5 {
        color.darken(amount)
    } else {
        color.lighten(amount)
    }
}
