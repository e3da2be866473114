//! Palette resolution — from a partial [`PaletteInput`] to a complete
//! [`Palette`].
//!
//! Each [`ThemeMode`] carries a base token set (text, backgrounds, borders,
//! actions and six rich colors). The input overrides that base field by
//! field; anything neither side supplies is derived from the rich color's
//! `main` (hover shade, translucent tint, readable contrast text).

use std::fmt;

use n_color::{Color, contrast_ratio_on, emphasize};
use serde::{Deserialize, Serialize};

/// Ratio max-contrast text must reach against a rich color before it is
/// used as that color's contrast text.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 3.0;

/// Lightness step for derived hover shades.
pub const DEFAULT_HOVER_FACTOR: f32 = 0.03;

/// Tonal offset recorded on the palette for consumers building tonal ramps.
pub const DEFAULT_TONAL_OFFSET: f32 = 0.15;

/// Alpha of the derived `transparent` tint of a rich color.
const TRANSPARENT_ALPHA: f32 = 0.15;

// ---------------------------------------------------------------------------
// ThemeMode
// ---------------------------------------------------------------------------

/// Light/dark classification of a palette.
///
/// Modes other than `dark` and `light` are kept verbatim in
/// [`ThemeMode::Other`]; such palettes are built from the dark base tokens
/// and classify as neither dark nor light. Classification goes by the mode
/// string, so `Other("dark")` is dark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    Other(String),
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Other(mode) => mode.as_str(),
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.as_str() == "dark"
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.as_str() == "light"
    }

    /// The same mode with `Other("dark")` and `Other("light")` folded into
    /// their named variants.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from(String::from(self))
    }
}

impl From<String> for ThemeMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            _ => Self::Other(mode),
        }
    }
}

impl From<&str> for ThemeMode {
    fn from(mode: &str) -> Self {
        Self::from(mode.to_string())
    }
}

impl From<ThemeMode> for String {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Other(mode) => mode,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Token groups
// ---------------------------------------------------------------------------

/// Declares a resolved token group together with its partial input twin,
/// where every field is optional and `None` keeps the base value.
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        $name:ident, $input:ident {
            $( $(#[$fmeta:meta])* $field:ident: $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        #[doc = concat!("Partial override for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $input {
            $( pub $field: Option<$ty>, )+
        }

        impl $name {
            fn merge(self, input: $input) -> Self {
                Self {
                    $( $field: input.$field.unwrap_or(self.$field), )+
                }
            }
        }
    };
}

token_group! {
    /// Foreground colors for text.
    TextColors, TextColorsInput {
        /// Body text.
        primary: Color,
        /// Labels, captions, secondary content.
        secondary: Color,
        /// Disabled controls.
        disabled: Color,
        /// Hyperlinks.
        link: Color,
        /// Strongest text color the mode offers.
        max_contrast: Color,
    }
}

token_group! {
    /// Surface colors, from the page canvas up to raised panels.
    BackgroundColors, BackgroundColorsInput {
        canvas: Color,
        primary: Color,
        secondary: Color,
    }
}

token_group! {
    /// Divider and outline colors by strength.
    BorderColors, BorderColorsInput {
        weak: Color,
        medium: Color,
        strong: Color,
    }
}

token_group! {
    /// Interaction-state overlays.
    ActionColors, ActionColorsInput {
        hover: Color,
        selected: Color,
        focus: Color,
        hover_opacity: f32,
        disabled_text: Color,
        disabled_background: Color,
        disabled_opacity: f32,
    }
}

// ---------------------------------------------------------------------------
// Rich colors
// ---------------------------------------------------------------------------

/// A semantic color with everything a component needs to draw with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichColor {
    /// Role name: `primary`, `error`, ...
    pub name: String,
    pub main: Color,
    /// Hover/pressed variant of `main`.
    pub shade: Color,
    /// `main` tuned for use as text on the mode's backgrounds.
    pub text: Color,
    pub border: Color,
    /// Translucent tint of `main` for highlighted surfaces.
    pub transparent: Color,
    /// Text color to put on top of `main`.
    pub contrast_text: Color,
}

/// Partial override for a [`RichColor`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RichColorInput {
    pub name: Option<String>,
    pub main: Option<Color>,
    pub shade: Option<Color>,
    pub text: Option<Color>,
    pub border: Option<Color>,
    pub transparent: Option<Color>,
    pub contrast_text: Option<Color>,
}

impl RichColorInput {
    /// Shorthand for an override that only replaces `main`.
    #[must_use]
    pub fn main(main: Color) -> Self {
        Self {
            main: Some(main),
            ..Self::default()
        }
    }
}

/// Base definition of a rich color; `main` is always known.
#[derive(Debug, Clone, Copy)]
struct RichBase {
    main: Color,
    shade: Option<Color>,
    text: Option<Color>,
}

impl RichBase {
    const fn new(main: Color, text: Color) -> Self {
        Self {
            main,
            shade: None,
            text: Some(text),
        }
    }
}

// ---------------------------------------------------------------------------
// Palette input
// ---------------------------------------------------------------------------

/// Partial palette overrides. The empty record selects the dark palette
/// with its stock tokens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteInput {
    pub mode: Option<ThemeMode>,
    pub primary: Option<RichColorInput>,
    pub secondary: Option<RichColorInput>,
    pub info: Option<RichColorInput>,
    pub error: Option<RichColorInput>,
    pub success: Option<RichColorInput>,
    pub warning: Option<RichColorInput>,
    pub text: Option<TextColorsInput>,
    pub background: Option<BackgroundColorsInput>,
    pub border: Option<BorderColorsInput>,
    pub action: Option<ActionColorsInput>,
    pub contrast_threshold: Option<f64>,
    pub hover_factor: Option<f32>,
    pub tonal_offset: Option<f32>,
}

impl PaletteInput {
    /// Input that only selects a mode.
    #[must_use]
    pub fn with_mode(mode: impl Into<ThemeMode>) -> Self {
        Self {
            mode: Some(mode.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A fully resolved color palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: RichColor,
    pub secondary: RichColor,
    pub info: RichColor,
    pub error: RichColor,
    pub success: RichColor,
    pub warning: RichColor,
    pub text: TextColors,
    pub background: BackgroundColors,
    pub border: BorderColors,
    pub action: ActionColors,
    pub contrast_threshold: f64,
    pub hover_factor: f32,
    pub tonal_offset: f32,
}

impl Palette {
    /// Text color to draw on `background`: the dark mode's max-contrast
    /// text (white) when it reaches the palette's contrast threshold,
    /// otherwise the light mode's (black).
    ///
    /// Translucent backgrounds are measured over `background.primary`.
    #[must_use]
    pub fn get_contrast_text(&self, background: Color) -> Color {
        contrast_text(background, self.background.primary, self.contrast_threshold)
    }

    /// Hover variant of `color`, using the palette's hover factor.
    #[must_use]
    pub fn emphasize(&self, color: Color, factor: Option<f32>) -> Color {
        emphasize(color, factor.unwrap_or(self.hover_factor))
    }
}

fn contrast_text(background: Color, canvas: Color, threshold: f64) -> Color {
    if contrast_ratio_on(Color::WHITE, background, canvas) >= threshold {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Resolve a palette from partial overrides.
#[must_use]
pub fn create_palette(input: PaletteInput) -> Palette {
    let mode = input.mode.unwrap_or_default().normalized();
    let base = if mode.is_light() {
        PaletteBase::light()
    } else {
        PaletteBase::dark()
    };
    tracing::trace!(mode = %mode, "resolving palette");

    let contrast_threshold = input.contrast_threshold.unwrap_or(DEFAULT_CONTRAST_THRESHOLD);
    let hover_factor = input.hover_factor.unwrap_or(DEFAULT_HOVER_FACTOR);
    let tonal_offset = input.tonal_offset.unwrap_or(DEFAULT_TONAL_OFFSET);
    let background = base.background.merge(input.background.unwrap_or_default());
    let canvas = background.primary;

    let rich = |name: &str, base: RichBase, input: Option<RichColorInput>| {
        let input = input.unwrap_or_default();
        let main = input.main.unwrap_or(base.main);
        let text = input.text.or(base.text).unwrap_or(main);
        RichColor {
            name: input.name.unwrap_or_else(|| name.to_string()),
            main,
            shade: input
                .shade
                .or(base.shade)
                .unwrap_or_else(|| emphasize(main, hover_factor)),
            text,
            border: input.border.unwrap_or(text),
            transparent: input
                .transparent
                .unwrap_or_else(|| main.with_alpha(TRANSPARENT_ALPHA)),
            contrast_text: input.contrast_text.unwrap_or_else(|| {
                contrast_text(main, canvas, contrast_threshold)
            }),
        }
    };

    Palette {
        primary: rich("primary", base.primary, input.primary),
        secondary: rich("secondary", base.secondary, input.secondary),
        info: rich("info", base.primary, input.info),
        error: rich("error", base.error, input.error),
        success: rich("success", base.success, input.success),
        warning: rich("warning", base.warning, input.warning),
        text: base.text.merge(input.text.unwrap_or_default()),
        border: base.border.merge(input.border.unwrap_or_default()),
        action: base.action.merge(input.action.unwrap_or_default()),
        background,
        mode,
        contrast_threshold,
        hover_factor,
        tonal_offset,
    }
}

// ---------------------------------------------------------------------------
// Base token sets
// ---------------------------------------------------------------------------

struct PaletteBase {
    text: TextColors,
    background: BackgroundColors,
    border: BorderColors,
    action: ActionColors,
    primary: RichBase,
    secondary: RichBase,
    error: RichBase,
    success: RichBase,
    warning: RichBase,
}

/// `rgba(r, g, b, alpha)` with a fractional alpha.
fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    Color::rgb8(r, g, b).with_alpha(alpha)
}

impl PaletteBase {
    fn dark() -> Self {
        // Text is a cool off-white; translucent variants of it form the
        // borders and action overlays.
        let (r, g, b) = (204, 204, 220);
        let primary = RichBase::new(Color::rgb8(0x3d, 0x71, 0xd9), Color::rgb8(0x6e, 0x9f, 0xff));
        let text = TextColors {
            primary: Color::rgb8(r, g, b),
            secondary: rgba(r, g, b, 0.65),
            disabled: rgba(r, g, b, 0.6),
            link: primary.text.unwrap_or(primary.main),
            max_contrast: Color::WHITE,
        };

        Self {
            background: BackgroundColors {
                canvas: Color::rgb8(0x11, 0x12, 0x17),
                primary: Color::rgb8(0x18, 0x1b, 0x1f),
                secondary: Color::rgb8(0x22, 0x25, 0x2b),
            },
            border: BorderColors {
                weak: rgba(r, g, b, 0.07),
                medium: rgba(r, g, b, 0.15),
                strong: rgba(r, g, b, 0.25),
            },
            action: ActionColors {
                hover: rgba(r, g, b, 0.16),
                selected: rgba(r, g, b, 0.12),
                focus: rgba(r, g, b, 0.16),
                hover_opacity: 0.08,
                disabled_text: text.disabled,
                disabled_background: rgba(r, g, b, 0.04),
                disabled_opacity: 0.38,
            },
            primary,
            secondary: RichBase {
                main: rgba(r, g, b, 0.16),
                shade: Some(rgba(r, g, b, 0.20)),
                text: Some(text.primary),
            },
            error: RichBase::new(Color::rgb8(0xd1, 0x0e, 0x5c), Color::rgb8(0xff, 0x52, 0x86)),
            success: RichBase::new(Color::rgb8(0x1a, 0x7f, 0x4b), Color::rgb8(0x6c, 0xcf, 0x8e)),
            warning: RichBase::new(Color::rgb8(0xf5, 0xb7, 0x3d), Color::rgb8(0xfb, 0xad, 0x37)),
            text,
        }
    }

    fn light() -> Self {
        // Text is a near-black slate; same translucent-overlay scheme as dark.
        let (r, g, b) = (36, 41, 46);
        let primary = RichBase::new(Color::rgb8(0x38, 0x71, 0xdc), Color::rgb8(0x1f, 0x62, 0xe0));
        let text = TextColors {
            primary: Color::rgb8(r, g, b),
            secondary: rgba(r, g, b, 0.75),
            disabled: rgba(r, g, b, 0.50),
            link: primary.text.unwrap_or(primary.main),
            max_contrast: Color::BLACK,
        };

        Self {
            background: BackgroundColors {
                canvas: Color::rgb8(0xf4, 0xf5, 0xf5),
                primary: Color::WHITE,
                secondary: Color::rgb8(0xf4, 0xf5, 0xf5),
            },
            border: BorderColors {
                weak: rgba(r, g, b, 0.12),
                medium: rgba(r, g, b, 0.20),
                strong: rgba(r, g, b, 0.30),
            },
            action: ActionColors {
                hover: rgba(r, g, b, 0.12),
                selected: rgba(r, g, b, 0.08),
                focus: rgba(r, g, b, 0.12),
                hover_opacity: 0.08,
                disabled_text: text.disabled,
                disabled_background: rgba(r, g, b, 0.04),
                disabled_opacity: 0.38,
            },
            primary,
            secondary: RichBase {
                main: rgba(r, g, b, 0.16),
                shade: Some(rgba(r, g, b, 0.20)),
                text: Some(text.primary),
            },
            error: RichBase::new(Color::rgb8(0xe0, 0x22, 0x6e), Color::rgb8(0xcf, 0x0e, 0x5b)),
            success: RichBase::new(Color::rgb8(0x1b, 0x85, 0x5e), Color::rgb8(0x0a, 0x76, 0x4e)),
            warning: RichBase::new(Color::rgb8(0xfb, 0xad, 0x37), Color::rgb8(0xbd, 0x4b, 0x00)),
            text,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    #[test]
    fn empty_input_is_dark() {
        let p = create_palette(PaletteInput::default());
        assert_eq!(p.mode, ThemeMode::Dark);
        assert!(p.background.primary.l < 0.3);
        assert_eq!(p.text.max_contrast, Color::WHITE);
    }

    #[test]
    fn light_mode_uses_light_base() {
        let p = create_palette(PaletteInput::with_mode("light"));
        assert_eq!(p.mode, ThemeMode::Light);
        assert_eq!(p.background.primary, Color::WHITE);
        assert_eq!(p.text.max_contrast, Color::BLACK);
    }

    #[test]
    fn unknown_mode_is_kept_and_uses_dark_base() {
        let p = create_palette(PaletteInput::with_mode("dim"));
        assert_eq!(p.mode, ThemeMode::Other("dim".to_string()));
        assert!(!p.mode.is_dark());
        assert!(!p.mode.is_light());

        let dark = create_palette(PaletteInput::default());
        assert_eq!(p.background, dark.background);
        assert_eq!(p.primary, dark.primary);
    }

    #[test]
    fn tunables_default() {
        let p = create_palette(PaletteInput::default());
        assert!((p.contrast_threshold - DEFAULT_CONTRAST_THRESHOLD).abs() < f64::EPSILON);
        assert!((p.hover_factor - DEFAULT_HOVER_FACTOR).abs() < f32::EPSILON);
        assert!((p.tonal_offset - DEFAULT_TONAL_OFFSET).abs() < f32::EPSILON);
    }

    #[test]
    fn rich_colors_carry_role_names() {
        let p = create_palette(PaletteInput::default());
        let names: Vec<&str> = [&p.primary, &p.secondary, &p.info, &p.error, &p.success, &p.warning]
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["primary", "secondary", "info", "error", "success", "warning"]);
    }

    #[test]
    fn info_defaults_to_primary_colors() {
        let p = create_palette(PaletteInput::default());
        assert_eq!(p.info.main, p.primary.main);
        assert_eq!(p.info.text, p.primary.text);
    }

    #[test]
    fn overriding_main_rederives_dependents() {
        let red = hex("#ff0000");
        let p = create_palette(PaletteInput {
            primary: Some(RichColorInput::main(red)),
            ..PaletteInput::default()
        });
        assert_eq!(p.primary.main, red);
        assert_eq!(p.primary.transparent, red.with_alpha(TRANSPARENT_ALPHA));
        assert_eq!(p.primary.shade, emphasize(red, DEFAULT_HOVER_FACTOR));
        // Text comes from the base, border follows text.
        assert_eq!(p.primary.border, p.primary.text);
    }

    #[test]
    fn explicit_rich_fields_win() {
        let input = RichColorInput {
            name: Some("brand".to_string()),
            main: Some(hex("#123456")),
            text: Some(hex("#abcdef")),
            border: Some(hex("#000000")),
            ..RichColorInput::default()
        };
        let p = create_palette(PaletteInput {
            warning: Some(input),
            ..PaletteInput::default()
        });
        assert_eq!(p.warning.name, "brand");
        assert_eq!(p.warning.text, hex("#abcdef"));
        assert_eq!(p.warning.border, hex("#000000"));
    }

    #[test]
    fn contrast_text_picks_white_on_dark_and_black_on_light() {
        let p = create_palette(PaletteInput::default());
        assert_eq!(p.get_contrast_text(hex("#111111")), Color::WHITE);
        assert_eq!(p.get_contrast_text(hex("#fafafa")), Color::BLACK);
    }

    #[test]
    fn token_groups_merge_field_by_field() {
        let canvas = hex("#000000");
        let p = create_palette(PaletteInput {
            background: Some(BackgroundColorsInput {
                canvas: Some(canvas),
                ..BackgroundColorsInput::default()
            }),
            ..PaletteInput::default()
        });
        let stock = create_palette(PaletteInput::default());
        assert_eq!(p.background.canvas, canvas);
        assert_eq!(p.background.primary, stock.background.primary);
        assert_eq!(p.background.secondary, stock.background.secondary);
    }

    #[test]
    fn emphasize_uses_hover_factor_by_default() {
        let p = create_palette(PaletteInput::default());
        let c = hex("#202020");
        assert_eq!(p.emphasize(c, None), emphasize(c, p.hover_factor));
        assert!(p.emphasize(c, Some(0.2)).l > p.emphasize(c, None).l);
    }

    #[test]
    fn other_holding_a_named_mode_classifies_by_string() {
        let dark = ThemeMode::Other("dark".to_string());
        assert!(dark.is_dark());
        assert!(!dark.is_light());
        assert_eq!(dark.clone().normalized(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Other("light".to_string()).normalized(), ThemeMode::Light);
        assert_eq!(
            ThemeMode::Other("dim".to_string()).normalized(),
            ThemeMode::Other("dim".to_string())
        );

        let p = create_palette(PaletteInput::with_mode(dark));
        assert_eq!(p, create_palette(PaletteInput::default()));
    }

    #[test]
    fn mode_serde_round_trips_unknown_strings() {
        let mode: ThemeMode = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(mode, ThemeMode::Other("sepia".to_string()));
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"sepia\"");
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn input_rejects_unknown_keys() {
        let err = serde_json::from_str::<PaletteInput>(r#"{"moode": "light"}"#).unwrap_err();
        assert!(err.to_string().contains("moode"));
    }

    #[test]
    fn deterministic() {
        let input = PaletteInput::with_mode("light");
        assert_eq!(create_palette(input.clone()), create_palette(input));
    }
}
