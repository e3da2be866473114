//! Responsive breakpoints — one fixed, canonical set.
//!
//! There is no input: every theme gets the same widths, so layouts written
//! against one theme behave identically under another.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named viewport width thresholds, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointKey {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl BreakpointKey {
    /// All keys in ascending width order.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum width of each breakpoint, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BreakpointValues {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
}

/// The resolved breakpoint set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Breakpoints {
    pub values: BreakpointValues,
    /// CSS unit appended to every value.
    pub unit: &'static str,
}

impl Breakpoints {
    /// Minimum width of `key`.
    #[must_use]
    pub const fn value(&self, key: BreakpointKey) -> u32 {
        let v = &self.values;
        match key {
            BreakpointKey::Xs => v.xs,
            BreakpointKey::Sm => v.sm,
            BreakpointKey::Md => v.md,
            BreakpointKey::Lg => v.lg,
            BreakpointKey::Xl => v.xl,
            BreakpointKey::Xxl => v.xxl,
        }
    }

    /// Keys in ascending order.
    #[must_use]
    pub const fn keys(&self) -> &'static [BreakpointKey] {
        &BreakpointKey::ALL
    }

    /// Media query matching viewports at least as wide as `key`.
    #[must_use]
    pub fn up(&self, key: BreakpointKey) -> String {
        format!("@media (min-width:{}{})", self.value(key), self.unit)
    }

    /// Media query matching viewports narrower than `key`.
    ///
    /// The bound sits 0.05 below the threshold so `up(k)` and `down(k)`
    /// never both match.
    #[must_use]
    pub fn down(&self, key: BreakpointKey) -> String {
        // Hundredths of a pixel, so the bound prints exactly.
        let bound = i64::from(self.value(key)) * 100 - 5;
        let sign = if bound < 0 { "-" } else { "" };
        let bound = bound.abs();
        format!(
            "@media (max-width:{sign}{}.{:02}{})",
            bound / 100,
            bound % 100,
            self.unit
        )
    }
}

/// The canonical breakpoint set.
#[must_use]
pub const fn create_breakpoints() -> Breakpoints {
    Breakpoints {
        values: BreakpointValues {
            xs: 0,
            sm: 544,
            md: 769,
            lg: 992,
            xl: 1200,
            xxl: 1440,
        },
        unit: "px",
    }
}
