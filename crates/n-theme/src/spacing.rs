//! Spacing scale — every gap in the UI is a multiple of one grid size.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid size used when the input leaves it out, in pixels.
pub const DEFAULT_GRID_SIZE: f32 = 8.0;

/// CSS shorthand takes at most four values (top, right, bottom, left).
const MAX_ARGS: usize = 4;

/// Partial spacing overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingInput {
    /// Pixel size of one spacing unit.
    pub grid_size: Option<f32>,
}

impl SpacingInput {
    #[must_use]
    pub const fn with_grid_size(grid_size: f32) -> Self {
        Self {
            grid_size: Some(grid_size),
        }
    }
}

/// One argument to [`Spacing::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpacingArg {
    /// A multiple of the grid size.
    Units(f32),
    /// A literal CSS value (`"auto"`, `"50%"`) used as-is.
    Raw(String),
}

impl From<f32> for SpacingArg {
    fn from(units: f32) -> Self {
        Self::Units(units)
    }
}

impl From<u16> for SpacingArg {
    fn from(units: u16) -> Self {
        Self::Units(f32::from(units))
    }
}

impl From<&str> for SpacingArg {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpacingError {
    #[error("too many spacing arguments: expected between 0 and 4, got {0}")]
    TooManyArguments(usize),
}

/// The resolved spacing scale. `xN` is `N` grid units as a pixel string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spacing {
    pub grid_size: f32,
    pub x0: String,
    pub x0_25: String,
    pub x0_5: String,
    pub x1: String,
    pub x1_5: String,
    pub x2: String,
    pub x2_5: String,
    pub x3: String,
    pub x4: String,
    pub x5: String,
}

impl Spacing {
    /// `units` grid units as a pixel string: `of(2.0)` is `"16px"` on an
    /// 8px grid.
    #[must_use]
    pub fn of(&self, units: f32) -> String {
        px(self.grid_size * units)
    }

    /// CSS shorthand built from up to four arguments, e.g.
    /// `[1, 2]` → `"8px 16px"`. No arguments means one unit.
    ///
    /// # Errors
    ///
    /// [`SpacingError::TooManyArguments`] when given more than four.
    pub fn apply(&self, args: &[SpacingArg]) -> Result<String, SpacingError> {
        if args.len() > MAX_ARGS {
            return Err(SpacingError::TooManyArguments(args.len()));
        }
        if args.is_empty() {
            return Ok(self.of(1.0));
        }

        let parts: Vec<String> = args
            .iter()
            .map(|arg| match arg {
                SpacingArg::Units(units) => self.of(*units),
                SpacingArg::Raw(raw) => raw.clone(),
            })
            .collect();
        Ok(parts.join(" "))
    }
}

fn px(value: f32) -> String {
    format!("{value}px")
}

/// Resolve the spacing scale from partial overrides.
#[must_use]
pub fn create_spacing(input: SpacingInput) -> Spacing {
    let grid_size = input.grid_size.unwrap_or(DEFAULT_GRID_SIZE);
    tracing::trace!(grid_size, "resolving spacing");
    let unit = |n: f32| px(grid_size * n);

    Spacing {
        grid_size,
        x0: unit(0.0),
        x0_25: unit(0.25),
        x0_5: unit(0.5),
        x1: unit(1.0),
        x1_5: unit(1.5),
        x2: unit(2.0),
        x2_5: unit(2.5),
        x3: unit(3.0),
        x4: unit(4.0),
        x5: unit(5.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_grid_is_eight() {
        let s = create_spacing(SpacingInput::default());
        assert!((s.grid_size - DEFAULT_GRID_SIZE).abs() < f32::EPSILON);
        assert_eq!(s.x1, "8px");
        assert_eq!(s.x0_25, "2px");
        assert_eq!(s.x2_5, "20px");
        assert_eq!(s.x0, "0px");
    }

    #[test]
    fn custom_grid_scales_everything() {
        let s = create_spacing(SpacingInput::with_grid_size(4.0));
        assert_eq!(s.x1, "4px");
        assert_eq!(s.x5, "20px");
        assert_eq!(s.of(3.0), "12px");
    }

    #[test]
    fn apply_builds_shorthand() {
        let s = create_spacing(SpacingInput::default());
        assert_eq!(s.apply(&[1u16.into(), 2u16.into()]).unwrap(), "8px 16px");
        assert_eq!(
            s.apply(&[0u16.into(), "auto".into(), 0.5f32.into()]).unwrap(),
            "0px auto 4px"
        );
    }

    #[test]
    fn apply_without_args_is_one_unit() {
        let s = create_spacing(SpacingInput::default());
        assert_eq!(s.apply(&[]).unwrap(), "8px");
    }

    #[test]
    fn apply_rejects_five_args() {
        let s = create_spacing(SpacingInput::default());
        let args: Vec<SpacingArg> = (0..5u16).map(SpacingArg::from).collect();
        assert_eq!(s.apply(&args), Err(SpacingError::TooManyArguments(5)));
    }

    #[test]
    fn equal_inputs_give_equal_scales() {
        let a = create_spacing(SpacingInput::with_grid_size(4.0));
        let b = create_spacing(SpacingInput::with_grid_size(4.0));
        assert_eq!(a, b);
    }
}
