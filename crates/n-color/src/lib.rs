//! # n-color — perceptual color values for design tokens
//!
//! The palette resolver authors its tokens as hex strings, parses them into
//! [`Color`] (OKLCH + alpha) and derives hover shades, translucent tints and
//! readable contrast text from there.
//!
//! ```text
//! "#3d71d9" ──parse──▶ Color (OKLCH) ──darken/lighten/with_alpha──▶ Color
//!                          │
//!                          ▼
//!                 contrast.rs: WCAG luminance + ratio
//! ```

pub mod color;
pub mod contrast;

pub use color::{Color, ParseColorError};
pub use contrast::{contrast_ratio, contrast_ratio_on, emphasize, relative_luminance};
