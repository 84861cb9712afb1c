use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where one glyph landed on the atlas, in normalized device coordinates.
///
/// `(x, y)` is the quad's top-left corner in [-1, 1] with y pointing up; the
/// quad spans `width` to the right and `height` downwards, so its bottom edge
/// sits at `y - height`. `advance` is in pixels at the face's pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub code_point: char,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub advance: f32,
}

/// Per-code-point placement records, the second output of a packing pass.
///
/// Read-only once built. A miss is a legitimate outcome for code points the
/// glyph source couldn't rasterize; a text renderer substitutes a fallback
/// glyph or drops the character, it never fails the whole render over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecordTable {
    records: BTreeMap<char, GlyphRecord>,
}

impl GlyphRecordTable {
    pub(crate) fn insert(&mut self, record: GlyphRecord) {
        let previous = self.records.insert(record.code_point, record);
        // Duplicates are rejected when the plan is derived.
        debug_assert!(previous.is_none());
    }

    pub fn lookup(&self, code_point: char) -> Option<&GlyphRecord> {
        self.records.get(&code_point)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in code point order.
    pub fn iter(&self) -> impl Iterator<Item = &GlyphRecord> {
        self.records.values()
    }
}
