//! Theme composition — one options record in, one resolved [`Theme`] out.
//!
//! Every token category is resolved by its own resolver from its own slice
//! of the options; the composer only applies per-field defaults, derives
//! the dark/light flags from the resolved palette, and assembles the result.

use n_theme::{
    Breakpoints, ComponentTokens, Palette, Shape, Spacing, ThemeMode, create_breakpoints,
    create_components, create_palette, create_shape, create_spacing,
};
use serde::Serialize;

use crate::options::{DEFAULT_THEME_NAME, ThemeOptions};

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A fully resolved theme.
///
/// Built only by [`compose`]. Fields are private so `is_dark`/`is_light`
/// can never drift from `palette.mode`; token trees are owned, so a caller
/// that wants to tweak one works on its own clone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    name: String,
    is_dark: bool,
    is_light: bool,
    palette: Palette,
    breakpoints: Breakpoints,
    spacing: Spacing,
    shape: Shape,
    components: ComponentTokens,
}

impl Theme {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the palette mode is `dark`.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Whether the palette mode is `light`.
    #[must_use]
    pub const fn is_light(&self) -> bool {
        self.is_light
    }

    #[must_use]
    pub const fn mode(&self) -> &ThemeMode {
        &self.palette.mode
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    #[must_use]
    pub const fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub const fn components(&self) -> &ComponentTokens {
        &self.components
    }
}

impl Default for Theme {
    /// The theme composed from empty options.
    fn default() -> Self {
        compose(None)
    }
}

// ---------------------------------------------------------------------------
// compose
// ---------------------------------------------------------------------------

/// Resolve `options` into a complete theme.
///
/// `None` and `ThemeOptions::default()` are the same request. Never fails:
/// each resolver falls back to its own defaults for whatever the options
/// leave out.
///
/// ```
/// use n_tokens::{ThemeOptions, compose};
/// use n_theme::PaletteInput;
///
/// let theme = compose(
///     ThemeOptions::new()
///         .with_name("Custom")
///         .with_palette(PaletteInput::with_mode("light")),
/// );
/// assert_eq!(theme.name(), "Custom");
/// assert!(theme.is_light());
/// assert!(!theme.is_dark());
/// ```
#[must_use]
pub fn compose(options: impl Into<Option<ThemeOptions>>) -> Theme {
    let ThemeOptions {
        name,
        palette: palette_input,
        spacing: spacing_input,
        shape: shape_input,
    } = options.into().unwrap_or_default();

    let name = name.unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());
    let _span = tracing::debug_span!("compose_theme", name = %name).entered();

    let palette = create_palette(palette_input.unwrap_or_default());
    let breakpoints = create_breakpoints();
    let spacing = create_spacing(spacing_input.unwrap_or_default());
    let shape = create_shape(shape_input.unwrap_or_default());
    let components = create_components();

    let is_dark = palette.mode.is_dark();
    let is_light = palette.mode.is_light();
    if let ThemeMode::Other(mode) = &palette.mode {
        tracing::debug!(mode = %mode, "palette mode is neither dark nor light");
    }
    tracing::debug!(mode = %palette.mode, is_dark, is_light, "theme composed");

    Theme {
        name,
        is_dark,
        is_light,
        palette,
        breakpoints,
        spacing,
        shape,
        components,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
