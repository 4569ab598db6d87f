//! Bounded in-memory palette list.

use tracing::warn;

use crate::config::MAX_PALETTES;
use crate::error::{PaletteError, Result};
use crate::model::Palette;

/// Ordered list of generated palettes, bounded to [`MAX_PALETTES`].
///
/// Palettes are immutable once added; the store only appends and
/// removes whole entries.
#[derive(Debug, Default)]
pub struct PaletteStore {
    palettes: Vec<Palette>,
}

impl PaletteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a palette, rejecting when the store is full.
    pub fn add(&mut self, palette: Palette) -> Result<()> {
        if self.palettes.len() >= MAX_PALETTES {
            warn!(max = MAX_PALETTES, "palette store full, rejecting add");
            return Err(PaletteError::StoreFull { max: MAX_PALETTES });
        }
        self.palettes.push(palette);
        Ok(())
    }

    /// Remove and return the palette at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<Palette> {
        if index < self.palettes.len() {
            Some(self.palettes.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.palettes.len() >= MAX_PALETTES
    }
}
