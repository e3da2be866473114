//! # n-tokens — theme composition engine
//!
//! Turns one partial [`ThemeOptions`] record into one fully resolved,
//! immutable [`Theme`]: a tree of design tokens (palette, breakpoints,
//! spacing, shape, component tokens) for a rendering layer to style with.
//!
//! # Architecture
//!
//! ```text
//! ThemeOptions { name?, palette?, spacing?, shape? }
//!     │
//!     ▼
//! theme.rs: per-field defaults ("Dark", empty inputs)
//!     │
//!     ├─▶ n_theme::create_palette(palette)     ─┐
//!     ├─▶ n_theme::create_breakpoints()        │
//!     ├─▶ n_theme::create_spacing(spacing)     ├─▶ Theme
//!     ├─▶ n_theme::create_shape(shape)         │   is_dark / is_light
//!     └─▶ n_theme::create_components()        ─┘   from palette.mode
//! ```
//!
//! Composition is pure: no I/O, no shared state, no caching. Equal options
//! always give equal themes, and any number of threads may compose at once.
//! Options can also come from a TOML file ([`ThemeOptions::load`]).

pub mod builtin;
pub mod config;
pub mod options;
pub mod theme;

pub use builtin::{builtin_names, builtin_options, builtin_theme};
pub use config::ConfigError;
pub use options::{DEFAULT_THEME_NAME, ThemeOptions};
pub use theme::{Theme, compose};
