use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use image::GrayImage;
use serde::Serialize;
use typecase_atlas::{AtlasPlan, AtlasSurface, GlyphRecordTable};

/// On-disk companion of the atlas image: enough geometry to sample it
/// without re-deriving the plan, plus the per-glyph records.
#[derive(Serialize)]
struct Manifest<'a> {
    pixel_size: f32,
    width_px: u32,
    height_px: u32,
    cell_width: u32,
    cell_height: u32,
    glyphs: &'a GlyphRecordTable,
}

/// Writes `atlas.png` (8-bit grayscale coverage) and `atlas.json` into `dir`.
pub fn write(
    dir: &Path,
    surface: &AtlasSurface,
    table: &GlyphRecordTable,
    plan: &AtlasPlan,
    pixel_size: f32,
) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let image = GrayImage::from_raw(surface.width(), surface.height(), surface.data().to_vec())
        .context("atlas buffer does not match its dimensions")?;
    let png_path = dir.join("atlas.png");
    image
        .save(&png_path)
        .with_context(|| format!("writing {}", png_path.display()))?;
    log::info!("wrote {}", png_path.display());

    let manifest = Manifest {
        pixel_size,
        width_px: plan.width_px,
        height_px: plan.height_px,
        cell_width: plan.cell_width,
        cell_height: plan.cell_height,
        glyphs: table,
    };
    let json_path = dir.join("atlas.json");
    let writer = BufWriter::new(
        File::create(&json_path).with_context(|| format!("creating {}", json_path.display()))?,
    );
    serde_json::to_writer_pretty(writer, &manifest)
        .with_context(|| format!("writing {}", json_path.display()))?;
    log::info!("wrote {} with {} glyph records", json_path.display(), table.len());

    Ok(())
}
