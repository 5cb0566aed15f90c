//! Playing cards and card stacks for building card games, with optional
//! `no_std` support.
//!
//! The crate provides a [`Card`] type with a one-byte encoding, the canonical
//! 54-card [`REFERENCE_DECK`], and [`Deck`] / [`CustomDeck`] stacks that move,
//! deal, and shuffle cards. Game rules live outside the crate behind the
//! [`Game`] trait.
//!
//! # Example
//!
//! ```
//! use cardstack::{Deck, Preset};
//!
//! let mut stock = Deck::from_preset(Preset::NoJokers);
//! stock.shuffle_seeded(42);
//!
//! let mut hands = [Deck::new(), Deck::new(), Deck::new()];
//! let [a, b, c] = &mut hands;
//! assert!(stock.deal_rounds(&mut [a, b, c], 5));
//! assert_eq!(stock.len(), 37);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{CustomDeck, Deck, JOKERS, Preset, REFERENCE_DECK, REFERENCE_SIZE, SUITED_CARDS};
pub use error::{CardError, DecodeError, LibraryError};
pub use game::{Game, GameLibrary};
