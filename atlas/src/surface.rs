use crate::GlyphBitmap;

/// A pixel rectangle on the atlas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The single-channel pixel buffer glyphs are packed into.
///
/// Allocated once at the planned size, zero-initialized, and mutated only
/// through [`AtlasSurface::blit`] during the packing pass. Afterwards it is
/// read-only; a renderer uploads it to a GPU texture in one batch instead of
/// one round-trip per glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AtlasSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major coverage bytes, one per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Copies a glyph bitmap to `(x, y)` (its top-left corner, which may be
    /// negative through bearings), clipped to the surface bounds. Returns the
    /// rectangle actually written, or `None` when nothing lands on the
    /// surface. The caller decides whether clipping is worth a warning.
    pub fn blit(&mut self, bitmap: &GlyphBitmap, x: i32, y: i32) -> Option<PixelRect> {
        if bitmap.is_empty() {
            return None;
        }

        let src_left = (-x).clamp(0, bitmap.width as i32) as u32;
        let src_top = (-y).clamp(0, bitmap.height as i32) as u32;
        let dst_left = x.max(0) as u32;
        let dst_top = y.max(0) as u32;

        let width = (bitmap.width - src_left).min(self.width.saturating_sub(dst_left));
        let height = (bitmap.height - src_top).min(self.height.saturating_sub(dst_top));
        if width == 0 || height == 0 {
            return None;
        }

        for line in 0..height {
            let src_offset = ((src_top + line) * bitmap.width + src_left) as usize;
            let dst_offset = ((dst_top + line) * self.width + dst_left) as usize;
            self.data[dst_offset..dst_offset + width as usize]
                .copy_from_slice(&bitmap.data[src_offset..src_offset + width as usize]);
        }

        Some(PixelRect {
            x: dst_left,
            y: dst_top,
            width,
            height,
        })
    }
}
