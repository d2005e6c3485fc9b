//! The brick wall
//!
//! Bricks are stored in construction order: columns outer, rows inner. That
//! order is also the collision order, so it decides which brick is checked
//! first when several overlap the ball in the same tick.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Brick;
use crate::consts::*;

/// Grid parameters for building a brick wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: u32,
    pub cols: u32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Gap between neighbouring bricks, both axes
    pub padding: f32,
    /// Distance from the top of the field to the first row
    pub top_offset: f32,
    /// Distance from the left of the field to the first column
    pub left_offset: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            cell_width: BRICK_WIDTH,
            cell_height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            top_offset: BRICK_TOP_OFFSET,
            left_offset: 0.0,
        }
    }
}

impl BrickLayout {
    /// Number of bricks this layout produces
    pub fn brick_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Geometry of the brick at (col, row)
    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            self.left_offset + col as f32 * (self.cell_width + self.padding),
            self.top_offset + row as f32 * (self.cell_height + self.padding),
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Fixed grid of bricks; only statuses change after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    layout: BrickLayout,
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out a fresh wall with every brick intact
    pub fn build(layout: BrickLayout) -> Self {
        let mut bricks = Vec::with_capacity(layout.brick_count());
        for col in 0..layout.cols {
            for row in 0..layout.rows {
                bricks.push(Brick::new(layout.cell_rect(col, row)));
            }
        }
        Self { layout, bricks }
    }

    pub fn layout(&self) -> &BrickLayout {
        &self.layout
    }

    /// All bricks in grid order, destroyed ones included
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Brick at grid position, if inside the grid
    pub fn get(&self, col: u32, row: u32) -> Option<&Brick> {
        if col >= self.layout.cols || row >= self.layout.rows {
            return None;
        }
        self.bricks.get(col as usize * self.layout.rows as usize + row as usize)
    }

    /// Intact bricks in grid order
    pub fn live(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Visit intact bricks in grid order
    pub fn for_each_live<F: FnMut(&Brick)>(&self, mut f: F) {
        for brick in self.live() {
            f(brick);
        }
    }

    /// Visit intact bricks in grid order with their grid index, allowing the
    /// visitor to destroy them
    ///
    /// Liveness is checked right before each visit, so a brick destroyed
    /// earlier in the same pass is skipped.
    pub fn for_each_live_mut<F: FnMut(usize, &mut Brick)>(&mut self, mut f: F) {
        for (index, brick) in self.bricks.iter_mut().enumerate() {
            if brick.is_live() {
                f(index, brick);
            }
        }
    }

    /// Win condition: every brick destroyed
    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.is_live())
    }

    /// Restore every brick without touching geometry
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BrickStatus;
    use proptest::prelude::*;

    #[test]
    fn test_build_default_wall() {
        let field = BrickField::build(BrickLayout::default());
        assert_eq!(field.len(), 32);
        assert_eq!(field.live_count(), 32);
        assert!(!field.all_destroyed());

        // Columns outer, rows inner
        assert_eq!(*field.bricks()[0].rect(), Rect::new(0.0, 30.0, 50.0, 20.0));
        assert_eq!(*field.bricks()[1].rect(), Rect::new(0.0, 60.0, 50.0, 20.0));
        assert_eq!(*field.bricks()[4].rect(), Rect::new(60.0, 30.0, 50.0, 20.0));
        assert_eq!(*field.bricks()[31].rect(), Rect::new(420.0, 120.0, 50.0, 20.0));
    }

    #[test]
    fn test_get_matches_grid_order() {
        let field = BrickField::build(BrickLayout::default());
        let brick = field.get(2, 3).unwrap();
        assert_eq!(*brick.rect(), Rect::new(120.0, 120.0, 50.0, 20.0));
        assert!(field.get(8, 0).is_none());
        assert!(field.get(0, 4).is_none());
    }

    #[test]
    fn test_for_each_live_skips_destroyed() {
        let mut field = BrickField::build(BrickLayout::default());
        field.for_each_live_mut(|_, b| {
            if b.rect().x == 0.0 {
                b.destroy();
            }
        });
        assert_eq!(field.live_count(), 28);

        let mut seen = Vec::new();
        field.for_each_live(|b| seen.push(b.rect().x));
        assert_eq!(seen.len(), 28);
        assert!(seen.iter().all(|&x| x > 0.0));
        // Still grid order
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_all_destroyed_and_reset() {
        let mut field = BrickField::build(BrickLayout::default());
        let geometry: Vec<Rect> = field.bricks().iter().map(|b| *b.rect()).collect();

        field.for_each_live_mut(|_, b| {
            b.destroy();
        });
        assert!(field.all_destroyed());
        // Reading the win condition does not change anything
        assert!(field.all_destroyed());
        assert!(field.bricks().iter().all(|b| b.status() == BrickStatus::Destroyed));

        field.reset();
        assert_eq!(field.live_count(), 32);
        let after: Vec<Rect> = field.bricks().iter().map(|b| *b.rect()).collect();
        assert_eq!(geometry, after);
    }

    #[test]
    fn test_empty_layout_is_already_cleared() {
        let field = BrickField::build(BrickLayout {
            rows: 0,
            ..Default::default()
        });
        assert!(field.is_empty());
        assert!(field.all_destroyed());
    }

    proptest! {
        #[test]
        fn prop_cardinality_is_rows_times_cols(rows in 0u32..12, cols in 0u32..16) {
            let mut field = BrickField::build(BrickLayout {
                rows,
                cols,
                ..Default::default()
            });
            prop_assert_eq!(field.len(), (rows * cols) as usize);
            field.for_each_live_mut(|_, b| { b.destroy(); });
            field.reset();
            prop_assert_eq!(field.len(), (rows * cols) as usize);
            prop_assert_eq!(field.live_count(), (rows * cols) as usize);
        }
    }
}
