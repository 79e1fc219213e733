//! Linear undo/redo over whole spline snapshots.

use log::trace;
use std::mem;

use crate::spline::Spline;

/// Undo/redo stacks of [`Spline`] snapshots.
///
/// The live spline is owned by the caller. Before mutating it the caller pushes a copy
/// of its current state; undo and redo then swap the live spline with a stored one.
#[derive(Clone, Debug, Default)]
pub struct History {
    back: Vec<Spline>,
    forward: Vec<Spline>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        History::default()
    }

    /// Records `snapshot` as the state before an edit.
    ///
    /// Any redo states are discarded since the edit starts a new branch.
    pub fn push(&mut self, snapshot: Spline) {
        self.back.push(snapshot);
        self.forward.clear();
        trace!("History push: {} undo states", self.back.len());
    }

    /// Replaces `spline` with the most recent snapshot and keeps `spline` for [`redo`](History::redo).
    ///
    /// Returns `false` and leaves `spline` untouched if there is nothing to undo.
    pub fn undo(&mut self, spline: &mut Spline) -> bool {
        let swapped = Self::swap(&mut self.back, &mut self.forward, spline);
        trace!("History undo: {}", swapped);
        swapped
    }

    /// Replaces `spline` with the most recently undone state and keeps `spline` for [`undo`](History::undo).
    ///
    /// Returns `false` and leaves `spline` untouched if there is nothing to redo.
    pub fn redo(&mut self, spline: &mut Spline) -> bool {
        let swapped = Self::swap(&mut self.forward, &mut self.back, spline);
        trace!("History redo: {}", swapped);
        swapped
    }

    fn swap(from: &mut Vec<Spline>, to: &mut Vec<Spline>, spline: &mut Spline) -> bool {
        match from.pop() {
            Some(snapshot) => {
                to.push(mem::replace(spline, snapshot));
                true
            }
            None => false,
        }
    }

    /// Forgets all undo and redo states.
    pub fn clear(&mut self) {
        self.back.clear();
        self.forward.clear();
    }

    /// Checks whether [`undo`](History::undo) would do anything.
    pub fn can_undo(&self) -> bool {
        !self.back.is_empty()
    }

    /// Checks whether [`redo`](History::redo) would do anything.
    pub fn can_redo(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Number of states available to undo
    pub fn undo_len(&self) -> usize {
        self.back.len()
    }

    /// Number of states available to redo
    pub fn redo_len(&self) -> usize {
        self.forward.len()
    }
}
