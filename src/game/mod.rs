//! The contract between this crate and the card games built on it.
//!
//! A game owns its decks and rules; this crate only asks for a display name
//! and a setup hook. [`GameLibrary`] is a minimal host that lists games by
//! name and initializes the one a player picks.

mod library;

pub use library::GameLibrary;

/// A card game, such as poker.
///
/// Hosts call [`name`](Game::name) before anything else, and call
/// [`initialize`](Game::initialize) once the game has been selected.
///
/// # Example
///
/// ```
/// use cardstack::{Deck, Game, Preset};
///
/// struct War {
///     stock: Deck,
///     hands: [Deck; 2],
/// }
///
/// impl Game for War {
///     fn initialize(&mut self) {
///         self.stock = Deck::from_preset(Preset::NoJokers);
///         self.stock.shuffle_seeded(1);
///         let [a, b] = &mut self.hands;
///         self.stock.deal_rounds(&mut [a, b], 26);
///     }
///
///     fn name(&self) -> &str {
///         "War"
///     }
/// }
///
/// let mut war = War { stock: Deck::new(), hands: [Deck::new(), Deck::new()] };
/// war.initialize();
/// assert!(war.stock.is_empty());
/// assert_eq!(war.hands[0].len(), 26);
/// ```
pub trait Game {
    /// Sets up everything the game needs before play starts.
    fn initialize(&mut self);

    /// Returns the display name of the game.
    fn name(&self) -> &str;
}
