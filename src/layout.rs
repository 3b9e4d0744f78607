//! Grid geometry: square cells in a fixed number of columns, separated and
//! surrounded by a constant margin.

use crate::config::GridConfig;
use crate::error::LayoutError;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Same rectangle shifted up by the scroll offset.
    pub fn to_screen(self, scroll_offset: f64) -> Self {
        Self {
            y: self.y - scroll_offset,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub total_tiles: usize,
    pub margin: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub rows: usize,
    /// Scrollable height that fits every row plus margins.
    pub content_height: f64,
}

impl GridLayout {
    pub fn compute(config: &GridConfig, viewport_width: f64) -> Result<Self, LayoutError> {
        let columns = config.columns;
        if columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        let margin = config.margin;

        let available_width = viewport_width - margin * (columns as f64 + 1.0);
        // A viewport narrower than the margins collapses cells instead of flipping them.
        let cell_width = (available_width / columns as f64).max(0.0);
        let cell_height = cell_width;

        let rows = config.total_tiles.div_ceil(columns);
        let content_height = rows as f64 * (cell_height + margin) + margin;

        Ok(Self {
            columns,
            total_tiles: config.total_tiles,
            margin,
            cell_width,
            cell_height,
            rows,
            content_height,
        })
    }

    pub fn tile_rect(&self, index: usize) -> Rect {
        let column = index % self.columns;
        let row = index / self.columns;
        Rect {
            x: self.margin + column as f64 * (self.cell_width + self.margin),
            y: self.margin + row as f64 * (self.cell_height + self.margin),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.total_tiles).map(|i| self.tile_rect(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_layout(width: f64) -> GridLayout {
        GridLayout::compute(&GridConfig::default(), width).unwrap()
    }

    #[test]
    fn demo_dimensions() {
        let layout = demo_layout(980.0);
        assert_eq!(layout.cell_width, 300.0);
        assert_eq!(layout.cell_height, 300.0);
        assert_eq!(layout.rows, 13);
        assert_eq!(layout.content_height, 4180.0);
    }

    #[test]
    fn tiles_fill_rows_left_to_right() {
        let layout = demo_layout(980.0);
        assert_eq!(layout.tile_rect(0), Rect::new(20.0, 20.0, 300.0, 300.0));
        assert_eq!(layout.tile_rect(2), Rect::new(660.0, 20.0, 300.0, 300.0));
        assert_eq!(layout.tile_rect(3), Rect::new(20.0, 340.0, 300.0, 300.0));
        assert_eq!(layout.rects().count(), 37);
        // last tile sits alone in row 12
        assert_eq!(layout.tile_rect(36), Rect::new(20.0, 20.0 + 12.0 * 320.0, 300.0, 300.0));
    }

    #[test]
    fn recompute_is_stable() {
        let a: Vec<_> = demo_layout(1234.0).rects().collect();
        let b: Vec<_> = demo_layout(1234.0).rects().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn exact_multiple_of_columns() {
        let config = GridConfig {
            total_tiles: 9,
            ..GridConfig::default()
        };
        let layout = GridLayout::compute(&config, 980.0).unwrap();
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.content_height, 3.0 * 320.0 + 20.0);
    }

    #[test]
    fn narrow_viewport_collapses_cells() {
        let layout = demo_layout(50.0);
        assert_eq!(layout.cell_width, 0.0);
        assert_eq!(layout.content_height, 13.0 * 20.0 + 20.0);
    }

    #[test]
    fn zero_columns_rejected() {
        let config = GridConfig {
            columns: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            GridLayout::compute(&config, 980.0),
            Err(LayoutError::ZeroColumns)
        );
    }

    #[test]
    fn screen_rect_follows_scroll() {
        let rect = Rect::new(20.0, 340.0, 300.0, 300.0);
        assert_eq!(rect.to_screen(100.0), Rect::new(20.0, 240.0, 300.0, 300.0));
    }
}
