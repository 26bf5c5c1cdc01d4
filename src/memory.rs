//! Musical memory game: find pairs of solfège notes.
//!
//! Flips are resolved explicitly: after the second choice the pair stays
//! face up until the caller invokes [`MemoryGame::resolve_turn`].

use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::palette::Palette;

/// A note printed on the cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolfegeNote {
    pub name: &'static str,
    /// Natural letter whose palette colour the card uses.
    pub letter: char,
    /// Playback pitch in Hz, C4 to B4.
    pub frequency: f64,
}

pub static SOLFEGE_NOTES: [SolfegeNote; 7] = [
    SolfegeNote { name: "DÓ", letter: 'C', frequency: 261.63 },
    SolfegeNote { name: "RÉ", letter: 'D', frequency: 293.66 },
    SolfegeNote { name: "MI", letter: 'E', frequency: 329.63 },
    SolfegeNote { name: "FÁ", letter: 'F', frequency: 349.23 },
    SolfegeNote { name: "SOL", letter: 'G', frequency: 392.00 },
    SolfegeNote { name: "LÁ", letter: 'A', frequency: 440.00 },
    SolfegeNote { name: "SI", letter: 'B', frequency: 493.88 },
];

impl SolfegeNote {
    pub fn color<'a>(&self, palette: &'a Palette) -> &'a str {
        palette.color_for_letter(self.letter)
    }
}

pub const MAX_PLAYERS: usize = 4;
pub const MAX_MULTIPLIER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Card {
    pub note: &'static SolfegeNote,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// First card of the turn is face up.
    First,
    /// Second card is face up; call `resolve_turn`.
    PairPending,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The active player found a pair and plays again.
    Match,
    /// No pair; the turn passed on.
    Mismatch,
    /// No pair was pending.
    NoPair,
}

pub struct MemoryGame<R: Rng> {
    rng: R,
    players: usize,
    multiplier: usize,
    cards: Vec<Card>,
    scores: [u32; MAX_PLAYERS],
    active_player: usize,
    first: Option<usize>,
    second: Option<usize>,
}

impl MemoryGame<ThreadRng> {
    pub fn new(players: usize, multiplier: usize) -> Self {
        Self::with_rng(players, multiplier, rand::rng())
    }
}

impl<R: Rng> MemoryGame<R> {
    /// `players` is clamped to 1..=4 and `multiplier` to 1..=3; the deck
    /// holds `14 * multiplier` cards.
    pub fn with_rng(players: usize, multiplier: usize, rng: R) -> Self {
        let clamped_players = players.clamp(1, MAX_PLAYERS);
        let clamped_multiplier = multiplier.clamp(1, MAX_MULTIPLIER);
        if clamped_players != players || clamped_multiplier != multiplier {
            warn!(
                "memory game settings {}x{} out of range, using {}x{}",
                players, multiplier, clamped_players, clamped_multiplier
            );
        }

        let mut game = Self {
            rng,
            players: clamped_players,
            multiplier: clamped_multiplier,
            cards: Vec::new(),
            scores: [0; MAX_PLAYERS],
            active_player: 0,
            first: None,
            second: None,
        };
        game.restart();
        game
    }

    /// Fresh shuffled deck, scores reset, first player to move.
    pub fn restart(&mut self) {
        self.cards = (0..self.multiplier * 2)
            .flat_map(|_| SOLFEGE_NOTES.iter())
            .map(|note| Card { note, matched: false })
            .collect();
        self.cards.shuffle(&mut self.rng);
        self.scores = [0; MAX_PLAYERS];
        self.active_player = 0;
        self.first = None;
        self.second = None;
        debug!("memory game dealt {} cards for {} players", self.cards.len(), self.players);
    }

    /// Flip card `index`. Returns the note to play on success.
    pub fn choose(&mut self, index: usize) -> (ChoiceOutcome, Option<&'static SolfegeNote>) {
        let pending = self.second.is_some();
        let Some(card) = self.cards.get(index) else {
            return (ChoiceOutcome::Ignored, None);
        };
        if pending || card.matched || self.first == Some(index) {
            return (ChoiceOutcome::Ignored, None);
        }

        let note = card.note;
        if self.first.is_some() {
            self.second = Some(index);
            (ChoiceOutcome::PairPending, Some(note))
        } else {
            self.first = Some(index);
            (ChoiceOutcome::First, Some(note))
        }
    }

    /// Settle the face-up pair. A match marks every card of that note as
    /// matched and scores for the active player, who keeps the turn.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        let (Some(a), Some(b)) = (self.first, self.second) else {
            return TurnOutcome::NoPair;
        };
        self.first = None;
        self.second = None;

        let note = self.cards[a].note;
        if note.name == self.cards[b].note.name {
            for card in self.cards.iter_mut().filter(|c| c.note.name == note.name) {
                card.matched = true;
            }
            self.scores[self.active_player] += 1;
            if self.is_won() {
                info!("memory game won, scores {:?}", self.scores());
            }
            TurnOutcome::Match
        } else {
            self.active_player = (self.active_player + 1) % self.players;
            TurnOutcome::Mismatch
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether card `index` is currently shown.
    pub fn is_face_up(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|c| c.matched)
            || self.first == Some(index)
            || self.second == Some(index)
    }

    pub fn active_player(&self) -> usize {
        self.active_player
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores[..self.players]
    }

    pub fn is_won(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }
}
