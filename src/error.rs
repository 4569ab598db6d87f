//! Error types for palette generation.

use thiserror::Error;

/// Main error type for the palette pipeline.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Invalid hex color '{input}': expected '#' followed by 3 or 6 hex digits")]
    InvalidColorFormat { input: String },

    #[error("Unknown shade level {shade}: not part of the fixed scale")]
    UnknownShadeLevel { shade: u16 },

    #[error("Unknown named color '{name}'")]
    UnknownNamedColor { name: String },

    #[error("Named color '{name}' has no {shade} entry")]
    MissingNamedShade { name: String, shade: u16 },

    #[error("Palette store is full ({max} palettes)")]
    StoreFull { max: usize },
}

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
