//! Single-snapshot positional repetition guard.
//!
//! Only the position that preceded the last accepted placement is kept. A
//! placement whose result equals it is a ko retake; cycles longer than that
//! are not detected.

use crate::board::{Board, Snapshot};

#[derive(Clone, Debug, Default)]
pub struct KoGuard {
    previous: Option<Snapshot>,
}

impl KoGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would `board` recreate the retained position?
    pub fn repeats(&self, board: &Board) -> bool {
        self.previous
            .as_ref()
            .is_some_and(|prev| *prev == board.snapshot())
    }

    /// Retain `snapshot` in place of the current one.
    pub fn remember(&mut self, snapshot: Snapshot) {
        self.previous = Some(snapshot);
    }
}
