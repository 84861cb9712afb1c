//! Builds a glyph atlas from a font file and writes it to disk as a grayscale
//! PNG plus a JSON glyph record table.

mod config;
mod export;

use std::path::PathBuf;

use anyhow::Result;
use typecase_atlas::{AtlasPlan, CharacterSet, GlyphSource, PlanConfig, pack};
use typecase_font::FontStore;

/// Large enough that packed glyphs stay usable when scaled down.
const DEFAULT_PIXEL_SIZE: f32 = 150.0;

fn main() -> Result<()> {
    env_logger::init();

    let Some(args) = Args::parse(std::env::args().skip(1)) else {
        print_usage();
        return Ok(());
    };

    let (charset, pixel_size, plan_config) = charset_and_policy(&args)?;

    let mut store = FontStore::new();
    let id = store.load_file(&args.font_path)?;
    let mut face = store.face(id, pixel_size)?;

    let metrics = face.metrics();
    let plan = AtlasPlan::new(&metrics, &charset, &plan_config)?;
    log::info!(
        "planned a {}x{} atlas, {}x{} cells of {}x{} px",
        plan.width_px,
        plan.height_px,
        plan.columns,
        plan.rows,
        plan.cell_width,
        plan.cell_height
    );

    let (surface, table) = pack(&mut face, &plan, &charset);

    let total = charset.code_points().count();
    if table.len() < total {
        log::warn!("{} of {total} code points had no glyph", total - table.len());
    }

    export::write(&args.out_dir, &surface, &table, &plan, pixel_size)
}

/// Resolves the character set, pixel size, and layout policy from the
/// command line and the optional charset file.
fn charset_and_policy(args: &Args) -> Result<(CharacterSet, f32, PlanConfig)> {
    let mut pixel_size = None;
    let mut columns = None;

    let charset = match &args.charset_path {
        Some(path) if path.extension().is_some_and(|e| e == "toml") => {
            let file = config::CharsetFile::load(path)?;
            pixel_size = file.pixel_size;
            columns = file.columns;
            file.character_set()
        }
        // Any other file is plain text, one atlas row per line. Decoding the
        // bytes to code points is itself a configuration failure point.
        Some(path) => CharacterSet::from_utf8(&std::fs::read(path)?)?,
        None => CharacterSet::default(),
    };

    Ok((
        charset,
        args.pixel_size.or(pixel_size).unwrap_or(DEFAULT_PIXEL_SIZE),
        args.columns
            .or(columns)
            .map(|columns| PlanConfig { columns })
            .unwrap_or_default(),
    ))
}

#[derive(Debug)]
struct Args {
    font_path: PathBuf,
    pixel_size: Option<f32>,
    columns: Option<u32>,
    charset_path: Option<PathBuf>,
    out_dir: PathBuf,
}

impl Args {
    /// Hand-rolled parser: `-ff` is required, unknown arguments are ignored.
    /// Returns `None` for anything malformed; the caller prints usage and
    /// exits cleanly.
    fn parse(mut args: impl Iterator<Item = String>) -> Option<Args> {
        let mut font_path = None;
        let mut pixel_size = None;
        let mut columns = None;
        let mut charset_path = None;
        let mut out_dir = PathBuf::from(".");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-ff" => font_path = Some(PathBuf::from(args.next()?)),
                "--size" => pixel_size = Some(args.next()?.parse().ok()?),
                "--columns" => columns = Some(args.next()?.parse().ok()?),
                "--charset" => charset_path = Some(PathBuf::from(args.next()?)),
                "--out" => out_dir = PathBuf::from(args.next()?),
                _ => {}
            }
        }

        Some(Args {
            font_path: font_path?,
            pixel_size,
            columns,
            charset_path,
            out_dir,
        })
    }
}

fn print_usage() {
    println!("Usage: typecase-builder -ff <font.ttf> [options]");
    println!();
    println!("Options:");
    println!("  -ff <path>        font file to build the atlas from (required)");
    println!("  --size <px>       pixel size, default {DEFAULT_PIXEL_SIZE}");
    println!("  --columns <n>     atlas cell columns including the border, default 16");
    println!("  --charset <path>  .toml config or plain text, one atlas row per line");
    println!("  --out <dir>       output directory for atlas.png and atlas.json, default .");
}
