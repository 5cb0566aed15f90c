//! CLI dealing example.
//!
//! Shuffles a deck, deals hands, and lets the player trade cards with a
//! discard pile. Set `RUST_LOG=debug` to see refused moves.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardstack::{Card, CustomDeck, Deck, Game, Preset};

struct Table {
    stock: Deck,
    hands: Vec<Deck>,
    discard: CustomDeck,
    seed: u64,
}

impl Table {
    fn new(players: usize, seed: u64) -> Self {
        Self {
            stock: Deck::new(),
            hands: (0..players).map(|_| Deck::new()).collect(),
            discard: CustomDeck::new(),
            seed,
        }
    }
}

impl Game for Table {
    fn initialize(&mut self) {
        self.stock = Deck::from_preset(Preset::FullDeck);
        self.stock.shuffle_seeded(self.seed);

        let mut targets: Vec<&mut Deck> = self.hands.iter_mut().collect();
        if !self.stock.deal_rounds(&mut targets, 5) {
            println!("Not enough cards for {} players.", self.hands.len());
        }
    }

    fn name(&self) -> &str {
        "Deal Hands"
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let players = prompt_usize("Players (1-10): ").unwrap_or(2).clamp(1, 10);

    let mut table = Table::new(players, seed);
    println!("{} (seed {seed})", table.name());
    table.initialize();

    loop {
        for (index, hand) in table.hands.iter().enumerate() {
            println!("Hand {}: {}", index + 1, format_hand(hand));
        }
        println!("Stock: {} cards, discard: {}", table.stock.len(), table.discard);

        let Some(player) = prompt_usize("Discard from hand (0 to quit): ") else {
            break;
        };
        if player == 0 {
            println!("Goodbye.");
            break;
        }
        let Some(hand) = table.hands.get_mut(player - 1) else {
            println!("No such hand.");
            continue;
        };

        let Some(position) = prompt_usize("Card position (1 = top): ") else {
            break;
        };
        let Some(card) = position
            .checked_sub(1)
            .and_then(|offset| hand.cards().iter().rev().nth(offset).copied())
        else {
            println!("No such card.");
            continue;
        };

        if !hand.move_card(&card, &mut table.discard) {
            println!("Could not discard {card}.");
            continue;
        }
        if !table.stock.move_top(hand) {
            println!("Stock is empty.");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" {
            return None;
        }
        match input.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}

fn format_hand(hand: &Deck) -> String {
    hand.cards()
        .iter()
        .rev()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: &Card) -> String {
    let [byte] = card.encode();
    format!("{card} ({byte:#04x})")
}
