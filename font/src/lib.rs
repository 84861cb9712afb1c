//! Font loading and glyph rasterization behind the `GlyphSource` capability.
//!
//! Built on cosmic-text's font database and swash scaling. The [`FontStore`]
//! owns all font state for the duration of one atlas build; dropping it (or a
//! [`Face`]) releases everything, there is no process-global library handle.

mod face;
mod store;

pub use face::Face;
pub use store::{FontId, FontStore};
