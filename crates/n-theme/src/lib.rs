//! # n-theme — token resolvers
//!
//! Each token category of a theme has its own resolver. A resolver takes a
//! partial override record (or nothing) and returns one fully resolved
//! token tree, applying only its own defaults.
//!
//! ```text
//! PaletteInput ──▶ palette.rs      ──▶ Palette          (mode, rich colors, text, surfaces)
//!              ──▶ breakpoints.rs  ──▶ Breakpoints      (fixed)
//! SpacingInput ──▶ spacing.rs      ──▶ Spacing          (grid-based scale)
//! ShapeInput   ──▶ shape.rs        ──▶ Shape            (corner radii)
//!              ──▶ components.rs   ──▶ ComponentTokens  (fixed)
//! ```
//!
//! No resolver reads another's output, so each can be tested and swapped
//! on its own.

// Type names repeat their module (`spacing::SpacingInput`).
#![allow(clippy::module_name_repetitions)]

pub mod breakpoints;
pub mod components;
pub mod palette;
pub mod shape;
pub mod spacing;

pub use breakpoints::{BreakpointKey, Breakpoints, create_breakpoints};
pub use components::{ComponentTokens, create_components};
pub use palette::{Palette, PaletteInput, RichColor, RichColorInput, ThemeMode, create_palette};
pub use shape::{Shape, ShapeInput, create_shape};
pub use spacing::{Spacing, SpacingArg, SpacingError, SpacingInput, create_spacing};
