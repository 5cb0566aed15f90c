//! Card types and the one-byte card encoding.
//!
//! A card packs into a single byte: bits 0-3 hold the rank code
//! (`Ace = 0` through `King = 12`, `Joker = 13`) and bits 4-5 hold the suit
//! code (`Spades = 0`, `Hearts = 1`, `Diamonds = 2`, `Clubs = 3`). Jokers
//! never set the suit bits.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{CardError, DecodeError};

/// Returns the highest-coded variant whose code is a bit subset of `byte`.
///
/// `variants` must be sorted by ascending code. A zero code matches every
/// byte, so it has to be tried last.
fn masked_scan<T: Copy>(variants: &[T], code: impl Fn(T) -> u8, byte: u8) -> Option<T> {
    variants
        .iter()
        .rev()
        .copied()
        .find(|&variant| code(variant) & byte == code(variant))
}

/// Card rank, including the joker marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 0b0000,
    /// Two.
    Two = 0b0001,
    /// Three.
    Three = 0b0010,
    /// Four.
    Four = 0b0011,
    /// Five.
    Five = 0b0100,
    /// Six.
    Six = 0b0101,
    /// Seven.
    Seven = 0b0110,
    /// Eight.
    Eight = 0b0111,
    /// Nine.
    Nine = 0b1000,
    /// Ten.
    Ten = 0b1001,
    /// Jack.
    Jack = 0b1010,
    /// Queen.
    Queen = 0b1011,
    /// King.
    King = 0b1100,
    /// Joker. Jokers carry no suit.
    Joker = 0b1101,
}

impl Rank {
    /// Every rank in ascending code order.
    pub const ALL: [Self; 14] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Joker,
    ];

    /// The thirteen ranks that pair with a suit.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the 4-bit code of this rank.
    #[must_use]
    pub const fn encode(self) -> u8 {
        self as u8
    }

    /// Decodes the rank stored in the low bits of `byte`.
    ///
    /// Ranks are tried from the highest code down and the first one whose
    /// code is fully set in `byte` wins.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRank`] if no rank code matches.
    pub fn decode(byte: u8) -> Result<Self, DecodeError> {
        masked_scan(&Self::ALL, Self::encode, byte).ok_or(DecodeError::InvalidRank(byte))
    }

    /// Returns the display name, such as `"Ace"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        }
    }

    /// Returns whether this is the joker marker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::decode(byte)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0b0000_0000,
    /// Hearts.
    Hearts = 0b0001_0000,
    /// Diamonds.
    Diamonds = 0b0010_0000,
    /// Clubs.
    Clubs = 0b0011_0000,
}

impl Suit {
    /// Every suit in ascending code order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit code, already shifted into bits 4-5.
    #[must_use]
    pub const fn encode(self) -> u8 {
        self as u8
    }

    /// Decodes the suit stored in bits 4-5 of `byte`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidSuit`] if no suit code matches.
    pub fn decode(byte: u8) -> Result<Self, DecodeError> {
        masked_scan(&Self::ALL, Self::encode, byte).ok_or(DecodeError::InvalidSuit(byte))
    }

    /// Returns the display name, such as `"Spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::decode(byte)
    }
}

/// A playing card.
///
/// The suit is absent if and only if the rank is [`Rank::Joker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
}

impl Card {
    /// Creates a new card.
    ///
    /// The suit is discarded when `rank` is [`Rank::Joker`].
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        let suit = match rank {
            Rank::Joker => None,
            _ => Some(suit),
        };
        Self { rank, suit }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
        }
    }

    /// Creates a card from a rank and an optional suit.
    ///
    /// Jokers ignore `suit`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingSuit`] if `rank` is not a joker and `suit`
    /// is `None`.
    pub const fn try_new(rank: Rank, suit: Option<Suit>) -> Result<Self, CardError> {
        match (rank, suit) {
            (Rank::Joker, _) => Ok(Self::joker()),
            (_, Some(suit)) => Ok(Self::new(rank, suit)),
            (_, None) => Err(CardError::MissingSuit(rank)),
        }
    }

    /// Decodes a card from its one-byte encoding.
    ///
    /// Rank and suit are decoded independently from the same byte, so any
    /// byte whose low nibble is 13 yields a joker whatever its suit bits hold.
    ///
    /// # Errors
    ///
    /// Returns an error if either the rank or the suit fails to decode.
    pub fn decode(byte: u8) -> Result<Self, DecodeError> {
        let rank = Rank::decode(byte)?;
        let suit = Suit::decode(byte)?;
        Ok(Self::new(rank, suit))
    }

    /// Encodes the card as a one-byte sequence.
    #[must_use]
    pub const fn encode(&self) -> [u8; 1] {
        [self.to_byte()]
    }

    /// Returns the single encoding byte of the card.
    #[must_use]
    pub const fn to_byte(&self) -> u8 {
        match self.suit {
            // rank and suit codes occupy disjoint bits
            Some(suit) => suit.encode() ^ self.rank.encode(),
            None => self.rank.encode(),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Returns whether the card has the given rank.
    #[must_use]
    pub fn matches_rank(&self, rank: Rank) -> bool {
        self.rank == rank
    }

    /// Returns whether the card has the given suit. Always `false` for jokers.
    #[must_use]
    pub fn matches_suit(&self, suit: Suit) -> bool {
        self.suit == Some(suit)
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.to_byte());
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {}", self.rank, suit),
            None => write!(f, "{}", self.rank),
        }
    }
}

impl TryFrom<u8> for Card {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::decode(byte)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_scan_prefers_highest_matching_code() {
        let codes = [0b000_u8, 0b010, 0b110];
        assert_eq!(masked_scan(&codes, |c| c, 0b111), Some(0b110));
        assert_eq!(masked_scan(&codes, |c| c, 0b011), Some(0b010));
        assert_eq!(masked_scan(&codes, |c| c, 0b001), Some(0b000));
    }

    #[test]
    fn masked_scan_without_zero_code_can_fail() {
        let codes = [0b01_u8, 0b10];
        assert_eq!(masked_scan(&codes, |c| c, 0b100), None);
    }

    #[test]
    fn rank_codes_are_dense() {
        for (code, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.encode(), code as u8);
            assert_eq!(Rank::decode(code as u8), Ok(*rank));
        }
    }

    #[test]
    fn suit_codes_sit_in_bits_four_and_five() {
        for (index, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.encode(), (index as u8) << 4);
            assert_eq!(Suit::decode(suit.encode()), Ok(*suit));
        }
    }

    #[test]
    fn unused_low_nibbles_decode_by_mask() {
        assert_eq!(Rank::decode(0b1110), Ok(Rank::King));
        assert_eq!(Rank::decode(0b1111), Ok(Rank::Joker));
    }

    #[test]
    fn high_bits_are_ignored() {
        assert_eq!(Suit::decode(0b1100_0000), Ok(Suit::Spades));
        assert_eq!(Rank::decode(0b1100_0101), Ok(Rank::Six));
    }

    #[test]
    fn joker_drops_suit() {
        let card = Card::new(Rank::Joker, Suit::Hearts);
        assert_eq!(card.suit(), None);
        assert_eq!(card, Card::joker());
        assert_eq!(card.to_byte(), 0b0000_1101);
    }

    #[test]
    fn try_new_rejects_missing_suit() {
        assert_eq!(
            Card::try_new(Rank::Queen, None),
            Err(CardError::MissingSuit(Rank::Queen))
        );
        assert_eq!(Card::try_new(Rank::Joker, None), Ok(Card::joker()));
        assert_eq!(
            Card::try_new(Rank::Two, Some(Suit::Diamonds)),
            Ok(Card::new(Rank::Two, Suit::Diamonds))
        );
    }

    #[test]
    fn display_names() {
        use alloc::string::ToString;

        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
        assert_eq!(Card::joker().to_string(), "Joker");
        assert_eq!(Rank::Queen.to_string(), "Queen");
        assert_eq!(Suit::Diamonds.to_string(), "Diamonds");
    }

    #[test]
    fn matches_rank_and_suit() {
        let card = Card::new(Rank::Ten, Suit::Hearts);
        assert!(card.matches_rank(Rank::Ten));
        assert!(!card.matches_rank(Rank::Nine));
        assert!(card.matches_suit(Suit::Hearts));
        assert!(!card.matches_suit(Suit::Clubs));
        assert!(!Card::joker().matches_suit(Suit::Spades));
    }
}
