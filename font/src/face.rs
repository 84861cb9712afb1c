use std::sync::Arc;

use cosmic_text::Font;
use swash::{
    scale::{Render, ScaleContext, Source, StrikeWith},
    zeno::Format,
};
use typecase_atlas::{FaceMetrics, GlyphBitmap, GlyphSource};

/// A loaded face fixed at one pixel size.
///
/// Rasterization is deterministic for a given face and pixel size, which is
/// what makes repeated packing runs bit-identical.
pub struct Face {
    font: Arc<Font>,
    pixel_size: f32,
    metrics: FaceMetrics,
    scale_context: ScaleContext,
}

impl Face {
    pub(crate) fn new(font: Arc<Font>, pixel_size: f32) -> Self {
        let swash = font.as_swash();
        let scaled = swash.metrics(&[]).scale(pixel_size);
        let metrics = FaceMetrics {
            pixel_size,
            max_advance: scaled.max_width,
            line_height: scaled.ascent + scaled.descent + scaled.leading,
            ascent: scaled.ascent,
        };

        Self {
            font,
            pixel_size,
            metrics,
            scale_context: ScaleContext::new(),
        }
    }
}

impl GlyphSource for Face {
    fn metrics(&self) -> FaceMetrics {
        self.metrics
    }

    fn load_glyph(&mut self, code_point: char) -> Option<GlyphBitmap> {
        let swash = self.font.as_swash();

        let glyph_id = swash.charmap().map(code_point);
        if glyph_id == 0 {
            // Not mapped by this face.
            return None;
        }

        let advance = swash
            .glyph_metrics(&[])
            .scale(self.pixel_size)
            .advance_width(glyph_id);

        let mut scaler = self
            .scale_context
            .builder(swash)
            .size(self.pixel_size)
            .hint(true)
            .build();

        let image = Render::new(&[
            Source::ColorOutline(0),
            Source::ColorBitmap(StrikeWith::BestFit),
            Source::Outline,
        ])
        .format(Format::Alpha)
        .render(&mut scaler, glyph_id)?;

        Some(GlyphBitmap {
            width: image.placement.width,
            height: image.placement.height,
            data: image.data,
            bearing_left: image.placement.left,
            bearing_top: image.placement.top,
            advance,
        })
    }
}
