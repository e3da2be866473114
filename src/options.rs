//! Caller-facing theme options.

use n_theme::{PaletteInput, ShapeInput, SpacingInput};
use serde::{Deserialize, Serialize};

/// Name given to a theme whose options leave it out.
pub const DEFAULT_THEME_NAME: &str = "Dark";

/// Partial theme overrides. Every field is optional and defaults on its
/// own: a missing `name` becomes [`DEFAULT_THEME_NAME`], a missing input
/// becomes that resolver's empty record.
///
/// Breakpoints and component tokens take no overrides, so there are no
/// fields for them; option files that mention them are rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOptions {
    pub name: Option<String>,
    pub palette: Option<PaletteInput>,
    pub spacing: Option<SpacingInput>,
    pub shape: Option<ShapeInput>,
}

impl ThemeOptions {
    /// Empty options; same as `ThemeOptions::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PaletteInput) -> Self {
        self.palette = Some(palette);
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: SpacingInput) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ShapeInput) -> Self {
        self.shape = Some(shape);
        self
    }
}
