//! Chord quiz: name the guitar chord in the diagram.

use log::debug;
use rand::rngs::ThreadRng;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::Serialize;

use crate::catalog::GUITAR_CHORDS;
use crate::config::RenderOptions;
use crate::error::{Result, StudioError};
use crate::model::Snapshot;
use crate::renderer::render_guitar_chord;

/// Answer buttons per level.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Idle,
    Correct,
    /// Carries the option that was picked.
    Wrong(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// The level is already solved, or the guess is not one of the options.
    Ignored,
}

pub struct ChordQuiz<R: Rng> {
    rng: R,
    names: Vec<&'static str>,
    target: &'static str,
    options: [&'static str; OPTION_COUNT],
    score: u32,
    feedback: Feedback,
}

impl ChordQuiz<ThreadRng> {
    /// Quiz over the guitar catalog using the thread-local generator.
    pub fn new() -> Result<Self> {
        Self::with_rng(rand::rng())
    }
}

impl<R: Rng> ChordQuiz<R> {
    pub fn with_rng(rng: R) -> Result<Self> {
        Self::with_catalog(GUITAR_CHORDS.iter().map(|c| c.name).collect(), rng)
    }

    /// Quiz over `names`, which must hold at least four distinct chords.
    pub fn with_catalog(mut names: Vec<&'static str>, rng: R) -> Result<Self> {
        names.sort_unstable();
        names.dedup();
        if names.len() < OPTION_COUNT {
            return Err(StudioError::CatalogTooSmall {
                needed: OPTION_COUNT,
                available: names.len(),
            });
        }

        let mut quiz = Self {
            rng,
            target: names[0],
            options: [names[0]; OPTION_COUNT],
            names,
            score: 0,
            feedback: Feedback::Idle,
        };
        quiz.next_level();
        Ok(quiz)
    }

    /// Draw a new target plus three distinct distractors, in random order.
    pub fn next_level(&mut self) {
        let picked = index::sample(&mut self.rng, self.names.len(), OPTION_COUNT);
        for (slot, i) in self.options.iter_mut().zip(picked.iter()) {
            *slot = self.names[i];
        }
        self.target = self.options[0];
        self.options.shuffle(&mut self.rng);
        self.feedback = Feedback::Idle;
        debug!("quiz level: {} among {:?}", self.target, self.options);
    }

    pub fn guess(&mut self, option: &str) -> GuessOutcome {
        if self.feedback == Feedback::Correct || !self.options.iter().any(|o| *o == option) {
            return GuessOutcome::Ignored;
        }
        if option == self.target {
            self.score += 1;
            self.feedback = Feedback::Correct;
            GuessOutcome::Correct
        } else {
            self.feedback = Feedback::Wrong(option.to_string());
            GuessOutcome::Wrong
        }
    }

    /// Drop a wrong-answer highlight so the player can try again.
    pub fn clear_feedback(&mut self) {
        if matches!(self.feedback, Feedback::Wrong(_)) {
            self.feedback = Feedback::Idle;
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn options(&self) -> &[&'static str; OPTION_COUNT] {
        &self.options
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// The target diagram, drawn without its title.
    pub fn render_target(&self, options: &RenderOptions) -> Snapshot {
        render_guitar_chord(self.target, &options.untitled())
    }
}
