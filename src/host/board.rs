//! Render model of the heart-shaped board.

use crate::game::{CardFace, LayoutMask, MatchingGame, SlotId};
use crate::pool::ImageId;

/// What the renderer needs to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    pub slot: SlotId,
    pub image: ImageId,
    pub face: CardFace,
    /// The mismatch cue is attached.
    pub mismatch: bool,
}

/// One grid cell; `card` is `None` for the empty cells around the heart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell {
    pub row: usize,
    pub col: usize,
    pub card: Option<CardView>,
}

/// Lay the game's cards out on `layout`.
///
/// An empty deck renders nothing at all.
#[must_use]
pub fn board_cells(game: &MatchingGame, layout: &LayoutMask) -> Vec<BoardCell> {
    let deck = game.deck();
    if deck.is_empty() {
        return Vec::new();
    }

    layout
        .cells_for(deck)
        .map(|cell| BoardCell {
            row: cell.row,
            col: cell.col,
            card: cell.slot.and_then(|slot| {
                deck.image_at(slot).map(|image| CardView {
                    slot,
                    image,
                    face: game.card_face(slot),
                    mismatch: game.is_flagged_mismatch(slot),
                })
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::Deck;

    #[test]
    fn test_empty_deck_renders_nothing() {
        let game = MatchingGame::new(Deck::default(), GameConfig::default());
        assert!(board_cells(&game, &LayoutMask::heart()).is_empty());
    }

    #[test]
    fn test_cards_reflect_game_state() {
        let slots: Vec<_> = (0..18).flat_map(|i| [ImageId(i), ImageId(i)]).collect();
        let mut game = MatchingGame::new(Deck::from_slots(slots), GameConfig::default());
        game.reveal(SlotId::new(0));
        game.reveal(SlotId::new(1));
        game.reveal(SlotId::new(2));

        let cells = board_cells(&game, &LayoutMask::heart());
        assert_eq!(cells.len(), 63);
        assert_eq!(cells.iter().filter(|c| c.card.is_some()).count(), 36);

        let card = |slot: u32| {
            cells
                .iter()
                .filter_map(|c| c.card)
                .find(|card| card.slot == SlotId::new(slot))
                .unwrap()
        };
        assert_eq!(card(0).face, CardFace::Matched);
        assert_eq!(card(2).face, CardFace::FaceUp);
        assert_eq!(card(3).face, CardFace::Hidden);
        assert_eq!(card(35).image, ImageId(17));
    }
}
