//! Card stacks and the move, deal, and shuffle protocol.
//!
//! A [`Deck`] can only hold cards taken from the [`REFERENCE_DECK`]; use a
//! [`CustomDeck`] when another card set is needed. Index 0 of a deck is the
//! bottom of the stack and the last index is the top.

use core::fmt;

use alloc::vec::Vec;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

mod custom;
mod preset;
mod reference;

pub use custom::CustomDeck;
pub use preset::Preset;
pub use reference::{JOKERS, REFERENCE_DECK, REFERENCE_SIZE, SUITED_CARDS};

/// A stack of cards drawn from the standard reference set.
///
/// The card list is not exposed for direct mutation. Cards only leave a deck
/// through a method that names the destination, so they cannot be lost or
/// duplicated by accident.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    /// Cards in the deck, bottom first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a deck from the reference cards accepted by `predicate`.
    ///
    /// Accepted cards keep their reference order, so the first suit ends up
    /// at the bottom and the jokers on top.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{Deck, Rank};
    ///
    /// let faces = Deck::from_predicate(|card| {
    ///     matches!(card.rank(), Rank::Jack | Rank::Queen | Rank::King)
    /// });
    /// assert_eq!(faces.len(), 12);
    /// ```
    #[must_use]
    pub fn from_predicate(mut predicate: impl FnMut(&Card) -> bool) -> Self {
        let cards = REFERENCE_DECK
            .iter()
            .filter(|card| predicate(card))
            .copied()
            .collect();
        Self { cards }
    }

    /// Builds a deck from one of the named presets.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{Deck, Preset};
    ///
    /// assert_eq!(Deck::from_preset(Preset::NoJokers).len(), 52);
    /// ```
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        Self::from_predicate(|card| preset.accepts(card))
    }

    pub(crate) const fn from_vec(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an owned copy of the cards, bottom first.
    ///
    /// Changing the returned list does not affect the deck.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Returns an iterator over the cards, bottom first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the deck holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Shuffles the deck with the given random number generator.
    ///
    /// Every permutation is equally likely.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    ///
    /// The same seed and the same starting order always give the same result.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{Deck, Preset};
    ///
    /// let mut a = Deck::from_preset(Preset::FullDeck);
    /// let mut b = Deck::from_preset(Preset::FullDeck);
    /// a.shuffle_seeded(7);
    /// b.shuffle_seeded(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(&mut self, seed: u64) -> &mut Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng)
    }

    /// Shuffles the deck with the thread-local generator.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Returns `true` if this deck holds at least `count` cards.
    #[must_use]
    pub fn can_move(&self, count: usize) -> bool {
        self.cards.len() >= count
    }

    /// Moves the first card equal to `card` onto the top of `target`.
    ///
    /// Returns `false` and leaves both decks untouched if this deck has no
    /// such card.
    pub fn move_card(&mut self, card: &Card, target: &mut Self) -> bool {
        let Some(index) = self.cards.iter().position(|held| held == card) else {
            debug!("move refused: {card} is not in the deck");
            return false;
        };
        let card = self.cards.remove(index);
        target.cards.push(card);
        true
    }

    /// Moves the top card onto the top of `target`.
    ///
    /// Returns `false` only if this deck is empty.
    pub fn move_top(&mut self, target: &mut Self) -> bool {
        if !self.can_move(1) {
            debug!("move refused: deck is empty");
            return false;
        }
        self.move_top_unchecked(target);
        true
    }

    /// Deals one card from the top of this deck to each target, in order.
    ///
    /// Returns `false` without moving anything if this deck holds fewer cards
    /// than there are targets.
    pub fn deal(&mut self, targets: &mut [&mut Self]) -> bool {
        if !self.can_move(targets.len()) {
            debug!(
                "deal refused: {} targets, {} cards available",
                targets.len(),
                self.len()
            );
            return false;
        }
        self.deal_round(targets);
        true
    }

    /// Deals `count` cards to each target, one card per target per round.
    ///
    /// Returns `false` without moving anything if this deck holds fewer than
    /// `count * targets.len()` cards.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{Deck, Preset};
    ///
    /// let mut stock = Deck::from_preset(Preset::NoJokers);
    /// let mut north = Deck::new();
    /// let mut south = Deck::new();
    ///
    /// assert!(stock.deal_rounds(&mut [&mut north, &mut south], 5));
    /// assert_eq!(stock.len(), 42);
    /// assert_eq!(north.len(), 5);
    /// ```
    pub fn deal_rounds(&mut self, targets: &mut [&mut Self], count: usize) -> bool {
        let Some(needed) = count.checked_mul(targets.len()) else {
            debug!("deal refused: {count} rounds to {} targets overflows", targets.len());
            return false;
        };
        if !self.can_move(needed) {
            debug!("deal refused: {needed} cards needed, {} available", self.len());
            return false;
        }
        for _ in 0..count {
            self.deal_round(targets);
        }
        true
    }

    /// Deals one round without checking the deck size.
    fn deal_round(&mut self, targets: &mut [&mut Self]) {
        for target in targets.iter_mut() {
            self.move_top_unchecked(target);
        }
    }

    /// Moves the top card without checking the deck size.
    fn move_top_unchecked(&mut self, target: &mut Self) {
        if let Some(card) = self.cards.pop() {
            trace!("moving {card}");
            target.cards.push(card);
        }
    }

    /// Writes the cards top to bottom behind `label`.
    fn write_top_down(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        write!(f, "{label}[")?;
        for (position, card) in self.cards.iter().rev().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_top_down(f, "Deck")
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
