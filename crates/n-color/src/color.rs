// SPDX-License-Identifier: MIT
//
// n-color — OKLCH color values for design tokens.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) follow the
// usual color-science notation.
#![allow(clippy::many_single_char_names)]
//
// Every token color in a theme is stored in OKLCH. Lightness adjustments
// (hover shades, emphasis) happen in perceptual space so that "a bit darker"
// looks the same amount darker for every hue.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ hex string
//
// Alpha compositing happens in linear sRGB.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space with alpha.
///
/// Tokens are authored as hex strings and parsed once at resolution time;
/// afterwards every operation is pure float math on this value.
///
/// # Examples
///
/// ```
/// use n_color::Color;
///
/// let blue: Color = "#3d71d9".parse().unwrap();
/// let hover = blue.darken(0.03);
/// let tint = blue.with_alpha(0.15);
///
/// assert!(hover.l < blue.l);
/// assert_eq!(tint.to_hex().len(), 9);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma: 0.0 (gray) to roughly 0.37 at the edge of sRGB.
    pub c: f32,

    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f32,

    /// Opacity: 0.0 (transparent) to 1.0 (opaque).
    pub alpha: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from OKLCH values with alpha.
    #[inline]
    #[must_use]
    pub const fn oklcha(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    /// Create a color from sRGB channels in 0.0–1.0.
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB channels with alpha.
    #[must_use]
    pub fn srgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h, alpha }
    }

    /// Create a color from 8-bit sRGB channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit sRGBA channels.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::srgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parse a hex color: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    /// The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] when the string has the wrong length or
    /// contains a non-hex digit.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::oklcha(0.0, 0.0, 0.0, 0.0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Whether alpha is at least 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether alpha is at most 0.0.
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// Whether the color carries no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Increase lightness by `amount`, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount`, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite this color over `dst` (Porter-Duff "source over").
    #[must_use]
    pub fn blend_over(self, dst: &Self) -> Self {
        if self.is_opaque() || dst.is_transparent() {
            return self;
        }
        if self.is_transparent() {
            return *dst;
        }

        let (sr, sg, sb) = self.to_linear_srgb();
        let sa = self.alpha;
        let (dr, dg, db) = dst.to_linear_srgb();
        let da = dst.alpha;

        let out_a = da.mul_add(1.0 - sa, sa);
        if out_a < 1e-6 {
            return Self::TRANSPARENT;
        }

        let inv_sa = 1.0 - sa;
        let r = linear_to_srgb(sr.mul_add(sa, dr * da * inv_sa) / out_a);
        let g = linear_to_srgb(sg.mul_add(sa, dg * da * inv_sa) / out_a);
        let b = linear_to_srgb(sb.mul_add(sa, db * da * inv_sa) / out_a);
        let (l, c, h) = srgb_to_oklch(r, g, b);

        Self { l, c, h, alpha: out_a }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to sRGB, clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    fn to_linear_srgb(self) -> (f32, f32, f32) {
        let (a, b) = oklch_to_oklab_ab(self.c, self.h);
        let (r, g, bl) = oklab_to_linear_srgb(self.l, a, b);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), bl.clamp(0.0, 1.0))
    }

    /// Hex string: `#rrggbb`, or `#rrggbbaa` when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha.clamp(0.0, 1.0));
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Color::oklcha({:.4}, {:.4}, {:.1}, {:.2})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

// Token files carry colors as hex strings, so that is the serde form too.
// The hex form has 8 bits per channel: a color read back from its own
// serialization is within 1/255 per channel and alpha of the original, not
// `==` to it.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color `{0}` must have 3, 4, 6 or 8 digits")]
    InvalidLength(String),
    #[error("hex color `{input}` contains non-hex digit `{digit}`")]
    InvalidDigit { input: String, digit: char },
}

// ─── Color Space Math ────────────────────────────────────────────────────────
//
// Oklab by Björn Ottosson: https://bottosson.github.io/posts/oklab/

fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    if c < 1e-8 {
        // Achromatic: hue is undefined.
        return (c, 0.0);
    }
    let h = b.atan2(a).to_degrees();
    (c, if h < 0.0 { h + 360.0 } else { h })
}

#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

/// sRGB gamma encode of one linear channel.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// sRGB gamma decode of one channel.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) =
        linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let digits = input.trim().strip_prefix('#').unwrap_or_else(|| input.trim());

    let mut nibbles = Vec::with_capacity(8);
    for ch in digits.chars() {
        let value = ch.to_digit(16).ok_or_else(|| ParseColorError::InvalidDigit {
            input: input.to_string(),
            digit: ch,
        })?;
        // to_digit(16) is always < 16.
        #[allow(clippy::cast_possible_truncation)]
        nibbles.push(value as u8);
    }

    let short = |n: u8| n << 4 | n;
    let byte = |i: usize| nibbles[i] << 4 | nibbles[i + 1];

    match nibbles.len() {
        3 => Ok(Color::rgb8(short(nibbles[0]), short(nibbles[1]), short(nibbles[2]))),
        4 => Ok(Color::rgba8(
            short(nibbles[0]),
            short(nibbles[1]),
            short(nibbles[2]),
            short(nibbles[3]),
        )),
        6 => Ok(Color::rgb8(byte(0), byte(2), byte(4))),
        8 => Ok(Color::rgba8(byte(0), byte(2), byte(4), byte(6))),
        _ => Err(ParseColorError::InvalidLength(input.to_string())),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // The clamp keeps the value within 0..=255 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
