//! Game contract integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use cardstack::{CustomDeck, Deck, Game, GameLibrary, LibraryError, Preset};

/// Records every call a host makes.
struct Recorder {
    name: &'static str,
    calls: Rc<RefCell<Vec<String>>>,
}

impl Game for Recorder {
    fn initialize(&mut self) {
        self.calls.borrow_mut().push(format!("init {}", self.name));
    }

    fn name(&self) -> &str {
        self.calls.borrow_mut().push(format!("name {}", self.name));
        self.name
    }
}

/// Deals two five-card hands and discards a card from each.
struct Draw {
    stock: Deck,
    hands: [Deck; 2],
    discard: CustomDeck,
}

impl Draw {
    fn new() -> Self {
        Self {
            stock: Deck::new(),
            hands: [Deck::new(), Deck::new()],
            discard: CustomDeck::new(),
        }
    }
}

impl Game for Draw {
    fn initialize(&mut self) {
        self.stock = Deck::from_preset(Preset::NoJokers);
        self.stock.shuffle_seeded(17);
        let [first, second] = &mut self.hands;
        assert!(self.stock.deal_rounds(&mut [first, second], 5));
        for hand in &mut self.hands {
            assert!(hand.move_top(&mut self.discard));
        }
    }

    fn name(&self) -> &str {
        "Five Card Draw"
    }
}

fn recorder(name: &'static str, calls: &Rc<RefCell<Vec<String>>>) -> Box<Recorder> {
    Box::new(Recorder {
        name,
        calls: Rc::clone(calls),
    })
}

#[test]
fn names_are_listed_in_registration_order() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut library = GameLibrary::new();
    library.register(recorder("Poker", &calls)).unwrap();
    library.register(recorder("Hearts", &calls)).unwrap();

    let names: Vec<&str> = library.names().collect();
    assert_eq!(names, ["Poker", "Hearts"]);
    assert_eq!(library.len(), 2);
    assert!(!calls.borrow().iter().any(|call| call.starts_with("init")));
}

#[test]
fn name_is_queried_before_initialize() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut library = GameLibrary::new();
    library.register(recorder("Solitaire", &calls)).unwrap();

    let game = library.select("Solitaire").unwrap();
    assert_eq!(game.name(), "Solitaire");

    let calls = calls.borrow();
    assert_eq!(calls.first().map(String::as_str), Some("name Solitaire"));
    assert_eq!(
        calls.iter().filter(|call| *call == "init Solitaire").count(),
        1
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut library = GameLibrary::new();
    library.register(recorder("Rummy", &calls)).unwrap();

    assert_eq!(
        library.register(recorder("Rummy", &calls)).unwrap_err(),
        LibraryError::DuplicateName("Rummy".to_owned())
    );
    assert_eq!(library.len(), 1);
}

#[test]
fn unknown_game_is_an_error() {
    let mut library = GameLibrary::new();
    assert!(library.is_empty());
    assert!(matches!(
        library.select("Bridge"),
        Err(LibraryError::UnknownGame(name)) if name == "Bridge"
    ));
}

#[test]
fn initialize_sets_up_decks() {
    let mut game = Draw::new();
    assert_eq!(game.name(), "Five Card Draw");
    game.initialize();

    assert_eq!(game.stock.len(), 42);
    assert_eq!(game.hands[0].len(), 4);
    assert_eq!(game.hands[1].len(), 4);
    assert_eq!(game.discard.len(), 2);

    let mut seen: Vec<u8> = game
        .stock
        .iter()
        .chain(game.hands.iter().flat_map(Deck::iter))
        .chain(game.discard.iter())
        .map(|card| card.to_byte())
        .collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 52);
}

#[test]
fn every_selection_initializes_again() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut library = GameLibrary::new();
    library.register(recorder("Euchre", &calls)).unwrap();

    assert!(library.select("Euchre").is_ok());
    assert!(library.select("Euchre").is_ok());
    assert_eq!(
        calls.borrow().iter().filter(|call| *call == "init Euchre").count(),
        2
    );
}

#[test]
fn library_hosts_real_games() {
    let mut library = GameLibrary::new();
    library.register(Box::new(Draw::new())).unwrap();
    let game = library.select("Five Card Draw").unwrap();
    assert_eq!(game.name(), "Five Card Draw");
}
