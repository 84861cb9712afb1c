use crate::AtlasError;

/// The ordered rows of code points the atlas is built for.
///
/// Row and column order is semantically significant: it determines where each
/// glyph lands in the atlas, not just iteration order. Validation (empty rows,
/// duplicates, row capacity) happens when an [`crate::AtlasPlan`] is derived,
/// so a `CharacterSet` itself is just the ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    rows: Vec<Vec<char>>,
}

impl CharacterSet {
    pub fn new(rows: impl IntoIterator<Item = impl IntoIterator<Item = char>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        }
    }

    /// One row per non-empty line.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines().filter(|l| !l.is_empty()).map(|l| l.chars()))
    }

    /// Decodes a raw byte buffer (e.g. a charset file read from disk) into
    /// rows of code points. The decode step is a configuration failure point:
    /// bytes that aren't valid UTF-8 abort atlas building.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, AtlasError> {
        Ok(Self::parse(std::str::from_utf8(bytes)?))
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The longest row, in code points.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().copied()
    }
}

impl Default for CharacterSet {
    /// The classic fixed alphabet: Latin letters, digits, punctuation, and
    /// German umlauts, 14 code points per row.
    fn default() -> Self {
        Self::parse(
            "ABCDEFGHIJKLMN\n\
             OPQRSTUVWXYZab\n\
             cdefghijklmnop\n\
             qrstuvwxyz1234\n\
             567890&@.,?!'\"\n\
             ()*-_ßöäüÖÄÜ",
        )
    }
}
