use derive_more::{Display, Error};

/// Configuration errors that abort atlas building before any packing starts.
///
/// Per-character failures are not represented here. A code point the glyph
/// source can't rasterize is skipped by the packer and simply has no record.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum AtlasError {
    #[display("pixel size must be positive, got {pixel_size}")]
    InvalidPixelSize {
        #[error(not(source))]
        pixel_size: f32,
    },

    #[display("character set is empty")]
    EmptyCharacterSet,

    #[display("character row {row} is empty")]
    EmptyRow {
        #[error(not(source))]
        row: usize,
    },

    #[display("character row {row} holds {len} code points, the atlas fits {capacity} per row")]
    RowTooLong {
        row: usize,
        len: usize,
        capacity: usize,
    },

    #[display("code point {code_point:?} appears more than once in the character set")]
    DuplicateCodePoint {
        #[error(not(source))]
        code_point: char,
    },

    #[display("face resolves to a degenerate {cell_width}x{cell_height} cell")]
    DegenerateCell { cell_width: u32, cell_height: u32 },

    #[display("character set is not valid UTF-8: {_0}")]
    CharsetDecode(std::str::Utf8Error),
}

impl From<std::str::Utf8Error> for AtlasError {
    fn from(error: std::str::Utf8Error) -> Self {
        AtlasError::CharsetDecode(error)
    }
}
