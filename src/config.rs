//! Loading [`ThemeOptions`] from TOML.
//!
//! ```toml
//! name = "Ocean"
//!
//! [palette]
//! mode = "light"
//! primary = { main = "#0077b6" }
//!
//! [spacing]
//! grid_size = 4
//! ```
//!
//! Colors are hex strings. Keys the options do not know (including
//! `breakpoints`) are rejected, as are malformed colors; those errors come
//! straight from the TOML deserializer.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::ThemeOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme options from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme options: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ThemeOptions {
    /// Parse options from a TOML document. An empty document gives
    /// `ThemeOptions::default()`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the document is not valid TOML or does
    /// not have the shape of [`ThemeOptions`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML options file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`ThemeOptions::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded theme options");
        Ok(options)
    }
}
