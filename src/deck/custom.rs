//! A deck without the reference-set restriction.

use core::fmt;
use core::ops::{Deref, DerefMut};

use alloc::vec::Vec;
use log::debug;

use crate::card::Card;

use super::{Deck, JOKERS, Preset};

/// A more permissive [`Deck`].
///
/// Any card can be put into a custom deck, duplicates included, and the card
/// list is reachable through [`CustomDeck::cards_mut`]. All [`Deck`]
/// operations are available through deref, and a custom deck can be the
/// target of a move or deal from a regular deck.
///
/// # Example
///
/// ```
/// use cardstack::{Card, CustomDeck, Rank, Suit};
///
/// let mut pile = CustomDeck::new();
/// pile.put_on_top(Card::new(Rank::Ace, Suit::Spades))
///     .put_on_top(Card::new(Rank::Ace, Suit::Spades))
///     .put_on_bottom(Card::joker());
///
/// assert_eq!(pile.len(), 3);
/// assert_eq!(pile.draw(), Some(Card::new(Rank::Ace, Suit::Spades)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomDeck {
    deck: Deck,
}

impl CustomDeck {
    /// Creates an empty custom deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { deck: Deck::new() }
    }

    /// Builds a custom deck from the reference cards accepted by `predicate`.
    #[must_use]
    pub fn from_predicate(predicate: impl FnMut(&Card) -> bool) -> Self {
        Self {
            deck: Deck::from_predicate(predicate),
        }
    }

    /// Builds a custom deck from one of the named presets.
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            deck: Deck::from_preset(preset),
        }
    }

    /// Returns the live card list, bottom first.
    pub const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.deck.cards
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` when the deck is empty; callers that need a card should
    /// check the size first.
    pub fn draw(&mut self) -> Option<Card> {
        self.deck.cards.pop()
    }

    /// Puts `card` on top of the deck.
    pub fn put_on_top(&mut self, card: Card) -> &mut Self {
        self.deck.cards.push(card);
        self
    }

    /// Puts `card` at the bottom of the deck.
    ///
    /// This shifts every card already in the deck, so prefer
    /// [`put_on_top`](Self::put_on_top) for large decks when order allows.
    pub fn put_on_bottom(&mut self, card: Card) -> &mut Self {
        self.deck.cards.insert(0, card);
        self
    }

    /// Returns the cards as a [`Deck`] if they could have come from the
    /// reference set.
    ///
    /// Returns `None` if a suited card appears more than once or there are
    /// more than [`JOKERS`] jokers.
    #[must_use]
    pub fn into_deck(self) -> Option<Deck> {
        // encodings use bits 0-5 only
        let mut seen = [0_usize; 64];
        for card in &self.deck.cards {
            let count = &mut seen[usize::from(card.to_byte())];
            *count += 1;
            let allowed = if card.is_joker() { JOKERS } else { 1 };
            if *count > allowed {
                debug!("conversion refused: too many copies of {card}");
                return None;
            }
        }
        Some(self.deck)
    }
}

impl Deref for CustomDeck {
    type Target = Deck;

    fn deref(&self) -> &Deck {
        &self.deck
    }
}

impl DerefMut for CustomDeck {
    fn deref_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}

impl AsRef<Deck> for CustomDeck {
    fn as_ref(&self) -> &Deck {
        &self.deck
    }
}

impl AsMut<Deck> for CustomDeck {
    fn as_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}

impl From<Deck> for CustomDeck {
    fn from(deck: Deck) -> Self {
        Self { deck }
    }
}

impl FromIterator<Card> for CustomDeck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            deck: Deck::from_vec(iter.into_iter().collect()),
        }
    }
}

impl Extend<Card> for CustomDeck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.deck.cards.extend(iter);
    }
}

impl fmt::Display for CustomDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.deck.write_top_down(f, "CustomDeck")
    }
}
