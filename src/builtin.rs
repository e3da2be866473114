//! Named preset themes.

use n_theme::PaletteInput;

use crate::options::ThemeOptions;
use crate::theme::{Theme, compose};

/// Options behind a builtin theme name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_options(name: &str) -> Option<ThemeOptions> {
    Some(match name {
        "default" | "dark" => ThemeOptions::default(),
        "light" => ThemeOptions::new()
            .with_name("Light")
            .with_palette(PaletteInput::with_mode("light")),
        _ => return None,
    })
}

/// Compose a builtin theme by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    builtin_options(name).map(compose)
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "dark", "light"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
