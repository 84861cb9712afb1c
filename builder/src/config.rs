use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use typecase_atlas::CharacterSet;

/// TOML charset configuration.
///
/// ```toml
/// pixel_size = 96.0
/// columns = 16
/// rows = ["ABCDEFGHIJKLMN", "OPQRSTUVWXYZab"]
/// ```
///
/// `pixel_size` and `columns` are optional and lose against their command
/// line counterparts.
#[derive(Debug, Deserialize)]
pub struct CharsetFile {
    #[serde(default)]
    pub pixel_size: Option<f32>,
    #[serde(default)]
    pub columns: Option<u32>,
    pub rows: Vec<String>,
}

impl CharsetFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading charset config {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("parsing charset config {}", path.display()))
    }

    pub fn character_set(&self) -> CharacterSet {
        CharacterSet::new(self.rows.iter().map(|row| row.chars()))
    }
}
