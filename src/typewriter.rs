//! Type-writer text cycling.
//!
//! Each [`TypeWriter::tick`] produces the text to display and how long to
//! wait before the next tick. One character is typed or deleted per tick;
//! the word holds for a long pause once fully typed and a short one once
//! fully deleted, then the next phrase starts (wrapping to the first).

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::TypeWriterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub full_pause_ms: u32,
    pub empty_pause_ms: u32,
}

impl From<&TypeWriterConfig> for Timing {
    fn from(config: &TypeWriterConfig) -> Self {
        Self {
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            full_pause_ms: config.full_pause_ms,
            empty_pause_ms: config.empty_pause_ms,
        }
    }
}

/// Where the effect is after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    PausingAtFull,
    Deleting,
    PausingAtEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
    pub phase: Phase,
}

#[derive(Clone, Debug)]
pub struct TypeWriter {
    phrases: Vec<String>,
    timing: Timing,
    word: usize,
    chars: usize,
    deleting: bool,
}

impl TypeWriter {
    /// Build a type-writer over the non-empty `phrases`.
    ///
    /// Returns `None` when no phrase has any text to type.
    #[must_use]
    pub fn new(phrases: Vec<String>, timing: Timing) -> Option<Self> {
        let phrases = phrases.into_iter().filter(|p| !p.is_empty()).collect::<Vec<_>>();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, timing, word: 0, chars: 0, deleting: false })
    }

    #[must_use]
    pub fn from_config(config: &TypeWriterConfig) -> Option<Self> {
        Self::new(config.phrases.clone(), Timing::from(config))
    }

    /// Index of the phrase currently being typed or deleted.
    #[must_use]
    pub fn current_phrase(&self) -> usize {
        self.word
    }

    /// Advance by one character and report what to show.
    pub fn tick(&mut self) -> Tick {
        let word = &self.phrases[self.word];
        let len = word.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text = word.chars().take(self.chars).collect::<String>();

        let (delay_ms, phase) = if !self.deleting && self.chars == len {
            self.deleting = true;
            (self.timing.full_pause_ms, Phase::PausingAtFull)
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.phrases.len();
            (self.timing.empty_pause_ms, Phase::PausingAtEmpty)
        } else if self.deleting {
            (self.timing.delete_ms, Phase::Deleting)
        } else {
            (self.timing.type_ms, Phase::Typing)
        };

        Tick { text, delay_ms, phase }
    }
}
