/// Scalar measurements of a face at a fixed pixel size.
///
/// Produced once by the glyph source when a face is loaded and read-only from
/// then on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub pixel_size: f32,
    /// Widest advance of any glyph in the face. For a monospace face this is
    /// the advance of every glyph.
    pub max_advance: f32,
    /// Ascent + descent + line gap.
    pub line_height: f32,
    /// Distance from the top of a line to the baseline.
    pub ascent: f32,
}

/// A single rasterized glyph: 8-bit coverage plus placement metrics.
///
/// Owned by the packer for the duration of one packing step, then discarded
/// after its pixels are copied into the atlas surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    /// `width * height` coverage bytes, row-major.
    pub data: Vec<u8>,
    /// Horizontal offset from the pen position to the bitmap's left edge.
    pub bearing_left: i32,
    /// Vertical offset from the baseline up to the bitmap's top edge.
    pub bearing_top: i32,
    pub advance: f32,
}

impl GlyphBitmap {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Capability contract of the font rasterization collaborator.
///
/// Implementations must be deterministic: the same code point at the same
/// pixel size yields the same bitmap, which makes packing idempotent.
pub trait GlyphSource {
    fn metrics(&self) -> FaceMetrics;

    /// Rasterizes one code point at the face's configured pixel size.
    ///
    /// `None` is the recoverable per-character failure (code point not mapped
    /// by the face, or rasterization failed); the packer skips the character
    /// and keeps going.
    fn load_glyph(&mut self, code_point: char) -> Option<GlyphBitmap>;
}
