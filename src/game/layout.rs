//! Heart-shaped board layout.
//!
//! A fixed 7x9 template. Each cell either shows a deck slot or stays empty,
//! and the 36 occupied cells trace a heart.

use super::deck::{Deck, SlotId};

const ROWS: usize = 7;
const COLS: usize = 9;
const E: i8 = -1;

#[rustfmt::skip]
const HEART: [[i8; COLS]; ROWS] = [
    [ E,  E,  0,  1,  E,  2,  3,  E,  E],
    [ E,  4,  5,  6,  7,  8,  9, 10,  E],
    [11, 12, 13, 14, 15, 16, 17, 18, 19],
    [ E, 20, 21, 22, 23, 24, 25, 26,  E],
    [ E,  E, 27, 28, 29, 30, 31,  E,  E],
    [ E,  E,  E, 32, 33, 34,  E,  E,  E],
    [ E,  E,  E,  E, 35,  E,  E,  E,  E],
];

/// One cell of the layout grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutCell {
    pub row: usize,
    pub col: usize,
    pub slot: Option<SlotId>,
}

/// Static mapping from grid positions to deck slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutMask {
    grid: &'static [[i8; COLS]; ROWS],
}

impl Default for LayoutMask {
    fn default() -> Self {
        Self::heart()
    }
}

impl LayoutMask {
    /// The heart arrangement used by the 18-pair board.
    #[must_use]
    pub const fn heart() -> Self {
        Self { grid: &HEART }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        ROWS
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        COLS
    }

    /// The slot shown at a grid position, if any.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<SlotId> {
        let raw = *self.grid.get(row)?.get(col)?;
        (raw >= 0).then(|| SlotId::new(raw as u32))
    }

    /// Number of slot-bearing cells.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&raw| raw >= 0).count()
    }

    /// Grid position of a slot.
    #[must_use]
    pub fn position_of(&self, slot: SlotId) -> Option<(usize, usize)> {
        self.cells()
            .find(|cell| cell.slot == Some(slot))
            .map(|cell| (cell.row, cell.col))
    }

    /// All cells in row-major order, including empty ones.
    pub fn cells(&self) -> impl Iterator<Item = LayoutCell> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().map(move |(col, &raw)| LayoutCell {
                row,
                col,
                slot: (raw >= 0).then(|| SlotId::new(raw as u32)),
            })
        })
    }

    /// Cells whose slot exists in `deck`; other cells render as empty.
    pub fn cells_for<'a>(&'a self, deck: &'a Deck) -> impl Iterator<Item = LayoutCell> + 'a {
        self.cells().map(move |cell| LayoutCell {
            slot: cell.slot.filter(|&slot| deck.contains(slot)),
            ..cell
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ImageId;

    #[test]
    fn test_heart_dimensions() {
        let mask = LayoutMask::heart();
        assert_eq!(mask.rows(), 7);
        assert_eq!(mask.cols(), 9);
        assert_eq!(mask.slot_count(), 36);
        assert_eq!(mask.cells().count(), 63);
    }

    #[test]
    fn test_every_slot_appears_once() {
        let mask = LayoutMask::heart();
        let mut slots: Vec<_> = mask.cells().filter_map(|c| c.slot).collect();
        slots.sort();
        let expected: Vec<_> = (0..36).map(SlotId::new).collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn test_cell_lookup() {
        let mask = LayoutMask::heart();
        assert_eq!(mask.cell(0, 0), None);
        assert_eq!(mask.cell(0, 2), Some(SlotId::new(0)));
        assert_eq!(mask.cell(2, 0), Some(SlotId::new(11)));
        assert_eq!(mask.cell(6, 4), Some(SlotId::new(35)));
        assert_eq!(mask.cell(7, 0), None);
        assert_eq!(mask.cell(0, 9), None);
    }

    #[test]
    fn test_position_of() {
        let mask = LayoutMask::heart();
        assert_eq!(mask.position_of(SlotId::new(35)), Some((6, 4)));
        assert_eq!(mask.position_of(SlotId::new(4)), Some((1, 1)));
        assert_eq!(mask.position_of(SlotId::new(36)), None);
    }

    #[test]
    fn test_cells_for_short_deck() {
        let mask = LayoutMask::heart();
        let deck = Deck::from_slots(vec![ImageId(0); 4]);
        let shown = mask.cells_for(&deck).filter(|c| c.slot.is_some()).count();
        assert_eq!(shown, 4);
    }
}
