//! Named filters over the reference set.

use crate::card::Card;

/// A pre-made filter for building a deck from the reference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// All 54 cards, jokers included.
    #[default]
    FullDeck,
    /// The 52 suited cards.
    NoJokers,
    /// No cards at all.
    Empty,
}

impl Preset {
    /// Returns whether a deck built with this preset takes `card`.
    #[must_use]
    pub const fn accepts(self, card: &Card) -> bool {
        match self {
            Self::FullDeck => true,
            Self::NoJokers => !card.is_joker(),
            Self::Empty => false,
        }
    }
}
