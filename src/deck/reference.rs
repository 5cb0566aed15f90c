//! The canonical 54-card reference set.

use crate::card::{Card, Rank, Suit};

/// Number of suited cards in the reference set.
pub const SUITED_CARDS: usize = Rank::STANDARD.len() * Suit::ALL.len();

/// Number of jokers in the reference set.
pub const JOKERS: usize = 2;

/// Number of cards in the reference set.
pub const REFERENCE_SIZE: usize = SUITED_CARDS + JOKERS;

/// Every card of a standard deck, jokers included.
///
/// Cards are grouped by suit in code order, ranks ascending within a suit,
/// and the two jokers come last. Standard decks are only ever built by
/// filtering this table.
pub static REFERENCE_DECK: [Card; REFERENCE_SIZE] = build_reference();

const fn build_reference() -> [Card; REFERENCE_SIZE] {
    let mut cards = [Card::joker(); REFERENCE_SIZE];
    let mut index = 0;
    let mut suit = 0;
    while suit < Suit::ALL.len() {
        let mut rank = 0;
        while rank < Rank::STANDARD.len() {
            cards[index] = Card::new(Rank::STANDARD[rank], Suit::ALL[suit]);
            index += 1;
            rank += 1;
        }
        suit += 1;
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suits_are_grouped_in_code_order() {
        assert_eq!(REFERENCE_DECK[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(REFERENCE_DECK[12], Card::new(Rank::King, Suit::Spades));
        assert_eq!(REFERENCE_DECK[13], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(REFERENCE_DECK[51], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn jokers_close_the_table() {
        assert!(REFERENCE_DECK[SUITED_CARDS..].iter().all(Card::is_joker));
        assert!(!REFERENCE_DECK[..SUITED_CARDS].iter().any(Card::is_joker));
    }
}
