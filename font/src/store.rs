use std::{path::Path, sync::Arc};

use anyhow::{Context, Result, bail};
use cosmic_text::{
    FontSystem, Weight,
    fontdb::{self, Source},
};

use crate::Face;

pub use fontdb::ID as FontId;

/// Owns the font database and every face handed out from it.
///
/// The store starts empty on purpose: an atlas is built from one explicitly
/// supplied font file, so no system font scan and no fallback chain.
pub struct FontStore {
    font_system: FontSystem,
}

impl FontStore {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new_with_locale_and_db(
                "en-US".into(),
                fontdb::Database::new(),
            ),
        }
    }

    /// Loads all faces of a font file and returns the id of the first one.
    ///
    /// An unreadable file or one containing no parseable face is a fatal
    /// resource error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<FontId> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .with_context(|| format!("reading font file {}", path.display()))?;

        let ids = self
            .font_system
            .db_mut()
            .load_font_source(Source::Binary(Arc::new(data)))
            .to_vec();

        match ids.first() {
            Some(id) => {
                log::info!("loaded {} face(s) from {}", ids.len(), path.display());
                Ok(*id)
            }
            None => bail!("{} contains no usable font face", path.display()),
        }
    }

    /// Fixes a loaded face at a pixel size, ready to rasterize glyphs.
    pub fn face(&mut self, id: FontId, pixel_size: f32) -> Result<Face> {
        if pixel_size <= 0.0 {
            bail!("pixel size must be positive, got {pixel_size}");
        }
        let font = self
            .font_system
            .get_font(id, Weight::NORMAL)
            .with_context(|| format!("face {id:?} is not usable"))?;
        Ok(Face::new(font, pixel_size))
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}
