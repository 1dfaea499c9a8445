//! Type-ahead search: jump to an item by typing its leading characters.
//!
//! Keystrokes accumulate into a lowercased word. Every keystroke re-arms
//! the `search` debounce timer; only when the user pauses for the full
//! delay is the word looked up, and the buffer is cleared whether or not
//! anything matched.

use crate::debounce::Timers;
use crate::list::Navigator;
use bubbletea_rs::Cmd;
use std::time::Duration;

/// Timer name used for type-ahead.
pub const SEARCH_TIMER: &str = "search";

/// Default quiet period before the buffered word is looked up.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Buffered type-ahead word.
#[derive(Debug, Clone, Default)]
pub struct TypeAhead {
    word: String,
}

impl TypeAhead {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The word typed so far.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Appends `c` and re-arms the search timer.
    pub fn push(&mut self, c: char, timers: &mut Timers, delay: Duration) -> Cmd {
        self.word.extend(c.to_lowercase());
        tracing::trace!(target: "bubbletea_dropdown::typeahead", word = %self.word, "type-ahead");
        timers.arm(SEARCH_TIMER, delay)
    }

    /// Takes the buffered word and looks up the next match after `anchor`.
    pub fn resolve<N: Navigator + ?Sized>(&mut self, list: &N, anchor: Option<usize>) -> Option<usize> {
        let word = std::mem::take(&mut self.word);
        list.next(anchor, Some(&word))
    }

    /// Drops the buffered word without searching.
    pub fn clear(&mut self) {
        self.word.clear();
    }
}
