//! Packs a fixed set of characters into a single-channel glyph atlas.
//!
//! The pipeline is a pure data transform: an [`AtlasPlan`] is derived from
//! face metrics and a [`CharacterSet`], then [`pack`] drives a [`GlyphSource`]
//! over the set and produces an [`AtlasSurface`] plus a [`GlyphRecordTable`].
//! Font rasterization stays behind the [`GlyphSource`] capability; this crate
//! never touches a font engine directly.

mod charset;
mod error;
mod packer;
mod plan;
mod records;
mod source;
mod surface;

pub use charset::CharacterSet;
pub use error::AtlasError;
pub use packer::pack;
pub use plan::{AtlasPlan, PlanConfig};
pub use records::{GlyphRecord, GlyphRecordTable};
pub use source::{FaceMetrics, GlyphBitmap, GlyphSource};
pub use surface::{AtlasSurface, PixelRect};
