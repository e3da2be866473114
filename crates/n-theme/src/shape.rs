//! Shape tokens — corner radii.

use serde::{Deserialize, Serialize};

/// Base corner radius when the input leaves it out, in pixels.
pub const DEFAULT_BORDER_RADIUS: f32 = 2.0;

/// Partial shape overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeInput {
    /// Pixel radius of one "unit" of rounding.
    pub border_radius: Option<f32>,
}

impl ShapeInput {
    #[must_use]
    pub const fn with_border_radius(border_radius: f32) -> Self {
        Self {
            border_radius: Some(border_radius),
        }
    }
}

/// Named radii for common shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Radius {
    /// The base radius.
    pub default: String,
    /// Fully rounded ends on any rectangle.
    pub pill: String,
    pub circle: String,
}

/// The resolved shape tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub base_border_radius: f32,
    pub radius: Radius,
}

impl Shape {
    /// `amount` multiples of the base radius as a pixel string; `None`
    /// means one.
    #[must_use]
    pub fn border_radius(&self, amount: Option<f32>) -> String {
        format!("{}px", amount.unwrap_or(1.0) * self.base_border_radius)
    }
}

/// Resolve shape tokens from partial overrides.
#[must_use]
pub fn create_shape(input: ShapeInput) -> Shape {
    let base_border_radius = input.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS);
    tracing::trace!(base_border_radius, "resolving shape");

    Shape {
        base_border_radius,
        radius: Radius {
            default: format!("{base_border_radius}px"),
            pill: "9999px".to_string(),
            circle: "100%".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_radius() {
        let shape = create_shape(ShapeInput::default());
        assert_eq!(shape.border_radius(None), "2px");
        assert_eq!(shape.radius.default, "2px");
    }

    #[test]
    fn amount_multiplies_base() {
        let shape = create_shape(ShapeInput::with_border_radius(3.0));
        assert_eq!(shape.border_radius(Some(2.0)), "6px");
        assert_eq!(shape.border_radius(Some(0.5)), "1.5px");
    }

    #[test]
    fn fixed_radii_ignore_input() {
        let a = create_shape(ShapeInput::default());
        let b = create_shape(ShapeInput::with_border_radius(10.0));
        assert_eq!(a.radius.pill, b.radius.pill);
        assert_eq!(a.radius.circle, "100%");
    }
}
