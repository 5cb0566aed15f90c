//! Error types for card decoding, card construction, and game selection.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur while decoding a card from its byte encoding.
///
/// These signal corrupted data or a programming mistake, not an expected
/// runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No rank code matches the byte.
    #[error("no rank matches encoding {0:#010b}")]
    InvalidRank(u8),
    /// No suit code matches the byte.
    #[error("no suit matches encoding {0:#010b}")]
    InvalidSuit(u8),
}

/// Errors that can occur while constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// A non-joker rank was given without a suit.
    #[error("{0} requires a suit")]
    MissingSuit(Rank),
}

/// Errors that can occur while registering or selecting a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A game with the same name is already registered.
    #[error("a game named {0:?} is already registered")]
    DuplicateName(alloc::string::String),
    /// No game with the requested name is registered.
    #[error("no game named {0:?} is registered")]
    UnknownGame(alloc::string::String),
}
