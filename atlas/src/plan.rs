use std::collections::HashSet;

use crate::{AtlasError, CharacterSet, FaceMetrics};

/// Layout policy that doesn't come from the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConfig {
    /// Total cell columns, including the single border column. Fixed rather
    /// than derived from row lengths so layout math stays font-agnostic; rows
    /// may hold at most `columns - 1` code points.
    pub columns: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self { columns: 16 }
    }
}

/// Atlas dimensions and cell geometry derived once from face metrics and the
/// character set shape.
///
/// Invariant: `width_px == columns * cell_width` and
/// `height_px == rows * cell_height`, all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasPlan {
    pub cell_width: u32,
    pub cell_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub width_px: u32,
    pub height_px: u32,
    /// Baseline offset from a cell's top edge, for baseline-aligned blits.
    pub ascent_px: u32,
}

impl AtlasPlan {
    /// Plans the atlas grid: one cell per code point, plus one border row and
    /// the border column budgeted inside `config.columns`. The border keeps
    /// linear-filtered sampling from bleeding across the atlas edge.
    ///
    /// Pure function of its inputs. Fails on configuration errors only:
    /// non-positive pixel size, a degenerate cell, an empty set or row, a row
    /// exceeding the column budget, or a duplicated code point (a record
    /// table keyed by code point cannot hold two placements).
    pub fn new(
        metrics: &FaceMetrics,
        charset: &CharacterSet,
        config: &PlanConfig,
    ) -> Result<AtlasPlan, AtlasError> {
        if metrics.pixel_size <= 0.0 {
            return Err(AtlasError::InvalidPixelSize {
                pixel_size: metrics.pixel_size,
            });
        }

        let cell_width = metrics.max_advance.ceil() as u32;
        let cell_height = metrics.line_height.ceil() as u32;
        if cell_width == 0 || cell_height == 0 {
            return Err(AtlasError::DegenerateCell {
                cell_width,
                cell_height,
            });
        }

        if charset.row_count() == 0 {
            return Err(AtlasError::EmptyCharacterSet);
        }

        let capacity = config.columns.saturating_sub(1) as usize;
        for (row, code_points) in charset.rows().iter().enumerate() {
            if code_points.is_empty() {
                return Err(AtlasError::EmptyRow { row });
            }
            if code_points.len() > capacity {
                return Err(AtlasError::RowTooLong {
                    row,
                    len: code_points.len(),
                    capacity,
                });
            }
        }

        let mut seen = HashSet::new();
        for code_point in charset.code_points() {
            if !seen.insert(code_point) {
                return Err(AtlasError::DuplicateCodePoint { code_point });
            }
        }

        let columns = config.columns;
        let rows = charset.row_count() as u32 + 1;

        Ok(AtlasPlan {
            cell_width,
            cell_height,
            columns,
            rows,
            width_px: columns * cell_width,
            height_px: rows * cell_height,
            ascent_px: metrics.ascent.ceil() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(max_advance: f32, line_height: f32) -> FaceMetrics {
        FaceMetrics {
            pixel_size: 32.0,
            max_advance,
            line_height,
            ascent: line_height * 0.8,
        }
    }

    #[test]
    fn grid_dimensions_are_exact() {
        let charset = CharacterSet::parse("AB\nCD\nEF");
        let config = PlanConfig { columns: 4 };
        let plan = AtlasPlan::new(&metrics(10.0, 20.0), &charset, &config).unwrap();

        assert_eq!(plan.columns, 4);
        assert_eq!(plan.rows, 4); // 3 data rows + border
        assert_eq!(plan.width_px, plan.columns * plan.cell_width);
        assert_eq!(plan.height_px, plan.rows * plan.cell_height);
        assert_eq!(plan.width_px, 40);
        assert_eq!(plan.height_px, 80);
    }

    #[test]
    fn fractional_metrics_round_up() {
        let charset = CharacterSet::parse("A");
        let plan =
            AtlasPlan::new(&metrics(9.2, 19.5), &charset, &PlanConfig::default()).unwrap();
        assert_eq!(plan.cell_width, 10);
        assert_eq!(plan.cell_height, 20);
    }

    #[test]
    fn rejects_non_positive_pixel_size() {
        let charset = CharacterSet::parse("A");
        let mut m = metrics(10.0, 20.0);
        m.pixel_size = 0.0;
        assert_eq!(
            AtlasPlan::new(&m, &charset, &PlanConfig::default()),
            Err(AtlasError::InvalidPixelSize { pixel_size: 0.0 })
        );
    }

    #[test]
    fn rejects_degenerate_cell() {
        let charset = CharacterSet::parse("A");
        let result = AtlasPlan::new(&metrics(0.0, 20.0), &charset, &PlanConfig::default());
        assert_eq!(
            result,
            Err(AtlasError::DegenerateCell {
                cell_width: 0,
                cell_height: 20
            })
        );
    }

    #[test]
    fn rejects_empty_set_and_empty_row() {
        let empty = CharacterSet::new(Vec::<Vec<char>>::new());
        assert_eq!(
            AtlasPlan::new(&metrics(10.0, 20.0), &empty, &PlanConfig::default()),
            Err(AtlasError::EmptyCharacterSet)
        );

        let with_empty_row = CharacterSet::new([vec!['A'], vec![]]);
        assert_eq!(
            AtlasPlan::new(&metrics(10.0, 20.0), &with_empty_row, &PlanConfig::default()),
            Err(AtlasError::EmptyRow { row: 1 })
        );
    }

    #[test]
    fn rejects_row_exceeding_column_budget() {
        let charset = CharacterSet::parse("ABC");
        let config = PlanConfig { columns: 3 };
        assert_eq!(
            AtlasPlan::new(&metrics(10.0, 20.0), &charset, &config),
            Err(AtlasError::RowTooLong {
                row: 0,
                len: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn rejects_duplicate_code_points_across_rows() {
        let charset = CharacterSet::parse("AB\nCA");
        assert_eq!(
            AtlasPlan::new(&metrics(10.0, 20.0), &charset, &PlanConfig::default()),
            Err(AtlasError::DuplicateCodePoint { code_point: 'A' })
        );
    }
}
