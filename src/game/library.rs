//! Name-indexed registry of games.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::info;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::LibraryError;

use super::Game;

/// A set of games a player can pick from.
///
/// Games are listed in registration order and looked up by name.
#[derive(Default)]
pub struct GameLibrary {
    /// Registered games.
    games: Vec<Box<dyn Game>>,
    /// Game name -> index into `games`.
    by_name: HashMap<String, usize>,
}

impl GameLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a game under the name it reports.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::DuplicateName`] if a game with the same name is
    /// already registered.
    pub fn register(&mut self, game: Box<dyn Game>) -> Result<(), LibraryError> {
        let name = game.name().to_owned();
        if self.by_name.contains_key(&name) {
            return Err(LibraryError::DuplicateName(name));
        }
        self.by_name.insert(name, self.games.len());
        self.games.push(game);
        Ok(())
    }

    /// Returns the names of the registered games in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.games.iter().map(|game| game.name())
    }

    /// Returns the number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Returns whether no game is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Initializes the game called `name` and returns it for play.
    ///
    /// Every call runs [`Game::initialize`], so selecting the same game again
    /// starts it over.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UnknownGame`] if no game has that name.
    pub fn select(&mut self, name: &str) -> Result<&mut dyn Game, LibraryError> {
        let index = *self
            .by_name
            .get(name)
            .ok_or_else(|| LibraryError::UnknownGame(name.to_owned()))?;
        let game = &mut self.games[index];
        info!("initializing {name}");
        game.initialize();
        Ok(&mut **game)
    }
}
