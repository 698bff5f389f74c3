//! CLI War example: watches the computer play the player to the end.
//!
//! Pass a seed as the first argument to replay a game.

use std::time::{SystemTime, UNIX_EPOCH};

use warsim::{
    Card, Game, GameOptions, GameOutcome, Presenter, RoundOutcome, RoundResult, Side, Suit,
};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Let's start a game of War! (seed {seed})");

    let game = Game::new(GameOptions::default(), seed);
    let mut presenter = TextPresenter { options: game.options };

    if let Err(err) = game.simulate_game_with(&mut presenter) {
        println!("Simulation stopped: {err}");
    }
}

struct TextPresenter {
    options: GameOptions,
}

impl Presenter for TextPresenter {
    fn game_started(&mut self, player_cards: usize, computer_cards: usize) {
        println!(
            "{} gets {player_cards} cards, {} gets {computer_cards} cards",
            self.options.player_name, self.options.computer_name
        );
    }

    fn round_played(&mut self, round: &RoundResult) {
        println!("\nRound {}", round.number);
        print_cards(&[Some(round.player_card)], &[Some(round.computer_card)]);

        for war in &round.wars {
            println!("{}", colorize(" Tie! It's time for war", "93"));
            print_cards(
                &[None, None, Some(war.player_card)],
                &[Some(war.computer_card), None, None],
            );
        }

        match round.outcome {
            RoundOutcome::Won(side) => {
                println!("The {} wins the round!", self.options.name(side));
            }
            RoundOutcome::InsufficientCards { loser } => {
                println!(
                    "{}",
                    colorize(
                        &format!(
                            " The {} does not have enough cards for the war",
                            self.options.name(loser)
                        ),
                        "91",
                    )
                );
            }
        }

        for side in Side::BOTH {
            println!(
                "{}: {} cards left",
                self.options.name(side),
                round.cards_left(side)
            );
        }
    }

    fn game_over(&mut self, outcome: &GameOutcome) {
        println!(
            "{}",
            colorize(
                &format!(
                    " The {} has won the game after {} rounds! ({outcome})",
                    self.options.name(outcome.winner),
                    outcome.rounds
                ),
                "94",
            )
        );
    }
}

/// Prints the player's cards next to the computer's. `None` is a face-down card.
fn print_cards(player: &[Option<Card>], computer: &[Option<Card>]) {
    let arts: Vec<[String; 5]> = player
        .iter()
        .chain(computer.iter())
        .map(|card| card_art(card.as_ref()))
        .collect();

    let gap = " ".repeat(8);
    let player_width = player.len() * 8;
    println!(" {:<player_width$}{gap}COMPUTER", "PLAYER");
    for row in 0..5 {
        let (left, right) = arts.split_at(player.len());
        let left: Vec<&str> = left.iter().map(|art| art[row].as_str()).collect();
        let right: Vec<&str> = right.iter().map(|art| art[row].as_str()).collect();
        println!("{}{gap}{}", left.join(" "), right.join(" "));
    }
}

fn card_art(card: Option<&Card>) -> [String; 5] {
    let (rank, suit) = card.map_or_else(
        || ("?".to_string(), "?".to_string()),
        |card| (card.rank.to_string(), format_suit(card.suit)),
    );

    [
        " _____  ".to_string(),
        format!("|{rank:<2}   | "),
        format!("|  {suit}  | "),
        format!("|   {rank:>2}| "),
        " ‾‾‾‾‾  ".to_string(),
    ]
}

fn format_suit(suit: Suit) -> String {
    let color_code = match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&suit.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
