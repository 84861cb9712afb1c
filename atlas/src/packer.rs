use crate::{
    AtlasPlan, AtlasSurface, CharacterSet, GlyphBitmap, GlyphRecord, GlyphRecordTable, GlyphSource,
    surface::PixelRect,
};

/// Packs the character set into a freshly allocated atlas surface.
///
/// One sequential pass, row-major, cursor starting at the interior cell (1, 1)
/// so the border row and column stay empty. A code point the source can't
/// rasterize is skipped but still consumes its cell, which keeps the rest of
/// the row aligned. Rerunning with the same inputs produces a byte-identical
/// surface and an equal record table.
pub fn pack<S: GlyphSource>(
    source: &mut S,
    plan: &AtlasPlan,
    charset: &CharacterSet,
) -> (AtlasSurface, GlyphRecordTable) {
    let mut surface = AtlasSurface::new(plan.width_px, plan.height_px);
    let mut table = GlyphRecordTable::default();

    // Normalized units per pixel, [-1,1] across the full surface.
    let sx = 2.0 / plan.width_px as f32;
    let sy = 2.0 / plan.height_px as f32;

    for (row_index, row) in charset.rows().iter().enumerate() {
        let cell_top = (row_index as u32 + 1) * plan.cell_height;
        let baseline = (cell_top + plan.ascent_px) as i32;

        for (column_index, &code_point) in row.iter().enumerate() {
            let pen_x = ((column_index as u32 + 1) * plan.cell_width) as i32;

            let Some(bitmap) = source.load_glyph(code_point) else {
                log::debug!("no glyph for {code_point:?}, leaving its cell empty");
                continue;
            };

            let record = place_glyph(
                &mut surface,
                plan,
                &bitmap,
                code_point,
                pen_x,
                baseline,
                sx,
                sy,
            );
            table.insert(record);
        }
    }

    (surface, table)
}

/// Blits one glyph at its bearing-adjusted position and derives its record
/// from the rectangle that was actually written, so every quad is contained
/// in the surface no matter what the bitmap claimed.
#[allow(clippy::too_many_arguments)]
fn place_glyph(
    surface: &mut AtlasSurface,
    plan: &AtlasPlan,
    bitmap: &GlyphBitmap,
    code_point: char,
    pen_x: i32,
    baseline: i32,
    sx: f32,
    sy: f32,
) -> GlyphRecord {
    let dest_x = pen_x + bitmap.bearing_left;
    let dest_y = baseline - bitmap.bearing_top;

    match surface.blit(bitmap, dest_x, dest_y) {
        Some(written) => {
            if spills_cell(plan, pen_x, baseline, &written) {
                log::warn!(
                    "glyph {code_point:?} ({}x{}) exceeds its {}x{} cell, pixel size too \
                     large for this face",
                    bitmap.width,
                    bitmap.height,
                    plan.cell_width,
                    plan.cell_height
                );
            }
            GlyphRecord {
                code_point,
                x: -1.0 + written.x as f32 * sx,
                y: 1.0 - written.y as f32 * sy,
                width: written.width as f32 * sx,
                height: written.height as f32 * sy,
                advance: bitmap.advance,
            }
        }
        // Nothing was written: either an empty bitmap (spaces and other
        // ink-less glyphs) or one that fell entirely off the surface. The
        // record still exists, with a zero-sized quad at the pen, so the
        // advance stays available to a text renderer.
        None => {
            if !bitmap.is_empty() {
                log::warn!("glyph {code_point:?} was positioned entirely off the atlas");
            }
            GlyphRecord {
                code_point,
                x: -1.0 + pen_x as f32 * sx,
                y: 1.0 - baseline as f32 * sy,
                width: 0.0,
                height: 0.0,
                advance: bitmap.advance,
            }
        }
    }
}

/// True when a written rectangle reaches outside the cell whose pen produced
/// it. Bearings make slight spill into the neighboring border padding normal;
/// spilling past a full neighbor cell is what this catches.
fn spills_cell(plan: &AtlasPlan, pen_x: i32, baseline: i32, written: &PixelRect) -> bool {
    let cell_left = (pen_x - plan.cell_width as i32).max(0) as u32;
    let cell_right = pen_x as u32 + 2 * plan.cell_width;
    let cell_top = (baseline - plan.ascent_px as i32 - plan.cell_height as i32).max(0) as u32;
    let cell_bottom = baseline as u32 + 2 * plan.cell_height;

    written.x < cell_left
        || written.x + written.width > cell_right
        || written.y < cell_top
        || written.y + written.height > cell_bottom
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{FaceMetrics, PlanConfig};

    use super::*;

    /// Deterministic stand-in for a font engine: every glyph is a lit 6x10
    /// box with fixed bearings, except the code points told to fail and the
    /// space, which has an advance but no ink.
    struct FakeSource {
        metrics: FaceMetrics,
        missing: HashSet<char>,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                metrics: FaceMetrics {
                    pixel_size: 16.0,
                    max_advance: 10.0,
                    line_height: 20.0,
                    ascent: 16.0,
                },
                missing: HashSet::new(),
            }
        }

        fn without(mut self, code_point: char) -> Self {
            self.missing.insert(code_point);
            self
        }
    }

    impl GlyphSource for FakeSource {
        fn metrics(&self) -> FaceMetrics {
            self.metrics
        }

        fn load_glyph(&mut self, code_point: char) -> Option<GlyphBitmap> {
            if self.missing.contains(&code_point) {
                return None;
            }
            if code_point == ' ' {
                return Some(GlyphBitmap {
                    width: 0,
                    height: 0,
                    data: Vec::new(),
                    bearing_left: 0,
                    bearing_top: 0,
                    advance: self.metrics.max_advance,
                });
            }
            Some(GlyphBitmap {
                width: 6,
                height: 10,
                data: vec![0xff; 60],
                bearing_left: 1,
                bearing_top: 8,
                advance: self.metrics.max_advance,
            })
        }
    }

    fn plan_for(source: &FakeSource, charset: &CharacterSet, columns: u32) -> AtlasPlan {
        AtlasPlan::new(&source.metrics(), charset, &PlanConfig { columns }).unwrap()
    }

    #[test]
    fn two_glyph_row_lands_in_interior_cells() {
        let mut source = FakeSource::new();
        let charset = CharacterSet::parse("AB");
        let plan = plan_for(&source, &charset, 3);

        // 3 columns of 10px, 1 data row + border of 20px.
        assert_eq!((plan.width_px, plan.height_px), (30, 40));

        let (surface, table) = pack(&mut source, &plan, &charset);
        assert_eq!(table.len(), 2);

        let sx = 2.0 / 30.0;
        let sy = 2.0 / 40.0;

        // 'A' in cell (1,1): pen 10, baseline 20 + 16, bearings (1, 8).
        let a = table.lookup('A').unwrap();
        assert_eq!(a.x, -1.0 + 11.0 * sx);
        assert_eq!(a.y, 1.0 - 28.0 * sy);
        assert_eq!(a.width, 6.0 * sx);
        assert_eq!(a.height, 10.0 * sy);
        assert_eq!(a.advance, 10.0);

        // 'B' one cell to the right.
        let b = table.lookup('B').unwrap();
        assert_eq!(b.x, -1.0 + 21.0 * sx);
        assert_eq!(b.y, a.y);

        // Ink where the bitmaps were blitted, border untouched.
        assert_eq!(surface.pixel(11, 28), 0xff);
        assert_eq!(surface.pixel(21, 28), 0xff);
        assert_eq!(surface.pixel(0, 0), 0);
        assert_eq!(surface.pixel(5, 35), 0);
    }

    #[test]
    fn failed_glyph_still_consumes_its_cell() {
        let mut source = FakeSource::new().without('B');
        let charset = CharacterSet::parse("ABC");
        let plan = plan_for(&source, &charset, 5);

        let (_, table) = pack(&mut source, &plan, &charset);
        assert_eq!(table.len(), 2);
        assert!(table.lookup('B').is_none());

        // 'C' sits in the third interior cell even though 'B' failed.
        let sx = 2.0 / plan.width_px as f32;
        let c = table.lookup('C').unwrap();
        assert_eq!(c.x, -1.0 + 31.0 * sx);
    }

    #[test]
    fn cursor_advances_one_cell_per_character() {
        let mut source = FakeSource::new();
        let charset = CharacterSet::parse("ABCD");
        let plan = plan_for(&source, &charset, 6);

        let (_, table) = pack(&mut source, &plan, &charset);
        let sx = 2.0 / plan.width_px as f32;
        let xs: Vec<f32> = "ABCD".chars().map(|c| table.lookup(c).unwrap().x).collect();
        for (i, &x) in xs.iter().enumerate() {
            assert_eq!(x, -1.0 + (10.0 * (i as f32 + 1.0) + 1.0) * sx);
        }
    }

    #[test]
    fn packing_is_idempotent() {
        let charset = CharacterSet::parse("AB\nCß");
        let mut first = FakeSource::new().without('C');
        let plan = plan_for(&first, &charset, 4);

        let (surface_a, table_a) = pack(&mut first, &plan, &charset);
        let mut second = FakeSource::new().without('C');
        let (surface_b, table_b) = pack(&mut second, &plan, &charset);

        assert_eq!(surface_a, surface_b);
        assert_eq!(table_a, table_b);
    }

    #[test]
    fn all_quads_are_contained_in_the_atlas() {
        let mut source = FakeSource::new().without('x');
        let charset = CharacterSet::parse("ABC ö\nqrsxyz");
        let plan = plan_for(&source, &charset, 8);

        let (_, table) = pack(&mut source, &plan, &charset);
        for record in table.iter() {
            assert!(record.x >= -1.0 && record.x + record.width <= 1.0, "{record:?}");
            assert!(record.y <= 1.0 && record.y - record.height >= -1.0, "{record:?}");
        }
    }

    #[test]
    fn space_gets_a_record_without_ink() {
        let mut source = FakeSource::new();
        let charset = CharacterSet::parse("A B");
        let plan = plan_for(&source, &charset, 5);

        let (surface, table) = pack(&mut source, &plan, &charset);
        let space = table.lookup(' ').unwrap();
        assert_eq!((space.width, space.height), (0.0, 0.0));
        assert_eq!(space.advance, 10.0);

        // The space's cell stayed blank.
        for y in 20..40 {
            for x in 20..30 {
                assert_eq!(surface.pixel(x, y), 0);
            }
        }
    }

    #[test]
    fn oversized_bitmap_is_clipped_to_the_surface() {
        struct Oversized(FakeSource);
        impl GlyphSource for Oversized {
            fn metrics(&self) -> FaceMetrics {
                self.0.metrics()
            }
            fn load_glyph(&mut self, _: char) -> Option<GlyphBitmap> {
                Some(GlyphBitmap {
                    width: 100,
                    height: 100,
                    data: vec![0xff; 100 * 100],
                    bearing_left: 0,
                    bearing_top: 8,
                    advance: 10.0,
                })
            }
        }

        let charset = CharacterSet::parse("A");
        let mut source = Oversized(FakeSource::new());
        let plan = plan_for(&source.0, &charset, 3);
        let (_, table) = pack(&mut source, &plan, &charset);

        let a = table.lookup('A').unwrap();
        assert!(a.x + a.width <= 1.0);
        assert!(a.y - a.height >= -1.0);
    }
}
