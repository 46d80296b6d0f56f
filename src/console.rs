//! Terminal front end.
//!
//! One [`Console`] is shared by every human seat and by the [`ConsoleSink`],
//! so hot-seat players take turns at the same keyboard. All prompts are
//! numbered menus; anything other than a listed number is answered with a
//! hint and the menu is shown again.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::cards::{Card, Character, Room, Scenario, Weapon};
use crate::core::PlayerId;
use crate::game::{EventSink, GameEvent};
use crate::players::{InputProvider, TurnChoice, TurnView};
use crate::rules::Suggestion;

/// A line-oriented terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// A console shared between seats and the narration sink.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) {
        if let Err(err) = writeln!(self.output, "{line}") {
            warn!(%err, "Console write failed");
        }
    }

    /// Show a numbered menu and return the chosen item. `items` must not be
    /// empty. Once input is exhausted the first item is chosen.
    pub fn menu<T: Display + Copy>(&mut self, title: &str, items: &[T]) -> T {
        loop {
            self.say(title);
            for (i, item) in items.iter().enumerate() {
                self.say(format_args!("  {}. {item}", i + 1));
            }
            if let Err(err) = write!(self.output, "> ").and_then(|()| self.output.flush()) {
                warn!(%err, "Console write failed");
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    warn!(choice = %items[0], "Input closed; taking the first option");
                    return items[0];
                }
                Ok(_) => {}
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return items[n - 1],
                _ => self.say(format_args!(
                    "Please enter a number from 1 to {}.",
                    items.len()
                )),
            }
        }
    }

    /// Consume the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// A hand as one line, grouped by category: suspects, weapons, then rooms.
pub fn hand_line(cards: &[Card]) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human decisions typed at the console.
pub struct ConsoleInput<R, W> {
    console: SharedConsole<R, W>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn choose_action(&mut self, view: &TurnView<'_>) -> TurnChoice {
        let mut console = self.console.borrow_mut();
        console.say(format_args!(
            "\n{} ({}), you are in the {}.",
            view.me, view.character, view.room
        ));
        console.say(format_args!("Your cards: {}", hand_line(view.hand)));

        const ACTIONS: [&str; 2] = ["Move", "Make an accusation"];
        match console.menu("What will you do?", &ACTIONS) {
            "Move" => TurnChoice::Move,
            _ => TurnChoice::Accuse,
        }
    }

    fn choose_move(&mut self, _view: &TurnView<'_>, options: &[Room]) -> Room {
        self.console.borrow_mut().menu("Where do you want to go?", options)
    }

    fn choose_suggestion(&mut self, view: &TurnView<'_>) -> (Character, Weapon) {
        let mut console = self.console.borrow_mut();
        console.say(format_args!("Make a suggestion in the {}.", view.room));
        let character = console.menu("Who did it?", &Character::ALL);
        let weapon = console.menu("With what?", &Weapon::ALL);
        (character, weapon)
    }

    fn choose_accusation(&mut self, _view: &TurnView<'_>) -> Scenario {
        let mut console = self.console.borrow_mut();
        console.say("Make your accusation. A wrong one puts you out of the game.");
        let character = console.menu("Who did it?", &Character::ALL);
        let weapon = console.menu("With what?", &Weapon::ALL);
        let room = console.menu("Where?", &Room::ALL);
        Scenario::new(character, weapon, room)
    }

    fn choose_card_to_show(
        &mut self,
        shower: PlayerId,
        suggestion: &Suggestion,
        candidates: &[Card],
    ) -> Card {
        let mut console = self.console.borrow_mut();
        console.say(format_args!(
            "\n{shower}, {} suggested {}.",
            suggestion.suggester, suggestion.scenario
        ));
        console.menu("Which card will you show?", candidates)
    }

    fn reject(&mut self, message: &str) {
        self.console.borrow_mut().say(message);
    }
}

/// Narrates the game to the console.
///
/// Private events are only printed when they belong to a human seat.
pub struct ConsoleSink<R, W> {
    console: SharedConsole<R, W>,
    humans: FxHashSet<PlayerId>,
}

impl<R: BufRead, W: Write> ConsoleSink<R, W> {
    pub fn new(console: SharedConsole<R, W>, humans: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            console,
            humans: humans.into_iter().collect(),
        }
    }
}

impl<R: BufRead, W: Write> EventSink for ConsoleSink<R, W> {
    fn notify(&mut self, event: &GameEvent) {
        match event.private_to() {
            Some(player) if self.humans.contains(&player) => {
                self.console.borrow_mut().say(format_args!("[{player}] {event}"));
            }
            Some(_) => {}
            None => self.console.borrow_mut().say(event),
        }
    }
}
