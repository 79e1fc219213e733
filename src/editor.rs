//! Headless editing session.
//!
//! [`Editor`] owns one [`Spline`] and its [`History`] and turns pointer and key input into
//! edits. It knows nothing about windows or drawing: positions are passed in spline
//! coordinates and notifications come back as [`EditorEvent`]s.
//!
//! Every edit records the spline's previous state first, so each of them can be undone.
//! Dragging a dot counts as a single edit no matter how often the pointer moves.

use log::{info, warn};
use nalgebra::Vector2;
use std::path::Path;

use crate::dot::Dot;
use crate::error::{IndexError, Result};
use crate::format;
use crate::history::History;
use crate::spline::Spline;

/// Maximum manhattan distance between pointer and dot for the dot to become hot.
pub const HOT_DOT_RADIUS: f64 = 10.0;

/// Notifications for whoever displays the selected dot's parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditorEvent {
    /// A dot was selected or the selected dot changed.
    Selected(Dot),
    /// The selection was cleared.
    Deselected,
}

/// Pending insertion while insert mode is active.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InsertTarget {
    /// Index the new dot will be inserted before
    pub index: usize,
    /// Position of the new dot
    pub position: Vector2<f64>,
}

/// Editing session around a single spline.
#[derive(Debug, Default)]
pub struct Editor {
    spline: Spline,
    history: History,
    hot: Option<usize>,
    selected: Option<usize>,
    insert: Option<InsertTarget>,
    primary_down: bool,
    dragging: bool,
}

impl Editor {
    /// Creates a session with an empty spline.
    pub fn new() -> Self {
        Editor::default()
    }

    /// Creates a session editing `spline`.
    pub fn with_spline(spline: Spline) -> Self {
        Editor {
            spline,
            ..Editor::default()
        }
    }

    /// The spline being edited
    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    /// The interpolated curve of the spline being edited
    pub fn curve(&mut self) -> &[Vector2<f64>] {
        self.spline.curve()
    }

    /// The undo/redo history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the dot under the pointer
    pub fn hot(&self) -> Option<usize> {
        self.hot
    }

    /// Index of the selected dot
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Where a dot would be inserted, if insert mode is active
    pub fn insert_target(&self) -> Option<InsertTarget> {
        self.insert
    }

    /// Checks whether a dot is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handles pointer movement.
    ///
    /// While the primary button is held on a hot dot, the dot follows the pointer.
    /// Otherwise the hot dot is updated to the closest one within [`HOT_DOT_RADIUS`].
    pub fn pointer_moved(&mut self, position: Vector2<f64>) -> Vec<EditorEvent> {
        let mut events = Vec::new();

        if self.primary_down && self.hot.is_some() && !self.dragging {
            self.history.push(self.spline.clone());
            self.dragging = true;
        }

        match self.hot.filter(|_| self.dragging) {
            Some(index) => {
                if let Some(dot) = self.spline.dot(index).map(|dot| dot.moved_to(position)) {
                    if self.spline.replace(index, dot).is_ok() {
                        events.push(EditorEvent::Selected(dot));
                    }
                }
            }
            None => self.hot = self.pick(position),
        }

        if self.insert.is_some() {
            self.update_insert(position);
        }

        events
    }

    /// Handles a press of the primary button.
    ///
    /// In insert mode this inserts a dot, otherwise it selects the hot dot and
    /// prepares dragging it, or clears the selection when clicking next to all dots.
    pub fn press_primary(&mut self) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        self.primary_down = true;

        if let Some(target) = self.insert {
            self.edit(|spline| spline.insert(target.index, Dot::at(target.position)));
            self.deselect(&mut events);
            self.update_insert(target.position);
        } else if self.selected.is_some() && self.hot.is_none() {
            self.deselect(&mut events);
        } else if let Some(index) = self.hot {
            self.selected = Some(index);
            if let Some(dot) = self.spline.dot(index) {
                events.push(EditorEvent::Selected(*dot));
            }
        }

        events
    }

    /// Handles a press of the secondary button, removing the hot dot.
    pub fn press_secondary(&mut self) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        if self.selected.is_some() && self.hot.is_none() {
            self.deselect(&mut events);
        } else {
            self.delete_hot_into(&mut events);
        }
        events
    }

    /// Handles releasing any button, ending a drag.
    pub fn release(&mut self) {
        self.primary_down = false;
        self.dragging = false;
    }

    /// Removes the hot dot.
    pub fn delete_hot(&mut self) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        self.delete_hot_into(&mut events);
        events
    }

    fn delete_hot_into(&mut self, events: &mut Vec<EditorEvent>) {
        let Some(index) = self.hot else {
            return;
        };
        if !self.edit(|spline| spline.remove(index).map(|_| ())) {
            return;
        }
        self.hot = None;
        match self.selected {
            Some(selected) if selected == index => self.deselect(events),
            Some(selected) if selected > index => self.selected = Some(selected - 1),
            _ => {}
        }
    }

    /// Clears the selection.
    pub fn escape(&mut self) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        self.deselect(&mut events);
        events
    }

    /// Enters insert mode with the pointer at `position`.
    pub fn begin_insert(&mut self, position: Vector2<f64>) {
        self.update_insert(position);
    }

    /// Leaves insert mode.
    pub fn end_insert(&mut self) {
        self.insert = None;
    }

    fn update_insert(&mut self, position: Vector2<f64>) {
        let index = self
            .spline
            .find_closest(position)
            .map_or(0, |(index, _)| index);
        self.insert = Some(InsertTarget { index, position });
    }

    /// Replaces the selected dot, e.g. after its parameters were edited.
    ///
    /// Does nothing if no dot is selected.
    pub fn update_selected(&mut self, dot: Dot) {
        if let Some(index) = self.selected {
            self.edit(|spline| spline.replace(index, dot));
        }
    }

    /// Restores the state before the last edit.
    pub fn undo(&mut self) -> Vec<EditorEvent> {
        self.history.undo(&mut self.spline);
        self.reset_interaction()
    }

    /// Restores the state undone last.
    pub fn redo(&mut self) -> Vec<EditorEvent> {
        self.history.redo(&mut self.spline);
        self.reset_interaction()
    }

    /// Starts over with `spline`, forgetting all history.
    pub fn set_spline(&mut self, spline: Spline) -> Vec<EditorEvent> {
        self.spline = spline;
        self.history.clear();
        self.reset_interaction()
    }

    /// Starts over with an empty spline.
    pub fn new_document(&mut self) -> Vec<EditorEvent> {
        self.set_spline(Spline::new())
    }

    /// Replaces the spline with the one stored at `path`.
    ///
    /// On error the current spline and its history stay as they are.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Vec<EditorEvent>> {
        let spline = format::load(path)?;
        Ok(self.set_spline(spline))
    }

    /// Saves the spline to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        format::save(path, &self.spline)
    }

    /// Applies an edit to the spline, recording the previous state if it succeeds.
    fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Spline) -> std::result::Result<(), IndexError>,
    {
        let snapshot = self.spline.clone();
        match f(&mut self.spline) {
            Ok(()) => {
                self.history.push(snapshot);
                true
            }
            Err(error) => {
                warn!("Rejected edit: {}", error);
                false
            }
        }
    }

    fn reset_interaction(&mut self) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        self.hot = None;
        self.dragging = false;
        if let Some(target) = self.insert {
            self.update_insert(target.position);
        }
        self.deselect(&mut events);
        info!("Editing {} dots", self.spline.len());
        events
    }

    fn deselect(&mut self, events: &mut Vec<EditorEvent>) {
        if self.selected.take().is_some() {
            events.push(EditorEvent::Deselected);
        }
    }

    fn pick(&self, position: Vector2<f64>) -> Option<usize> {
        self.spline
            .find_closest(position)
            .filter(|&(_, distance)| distance <= HOT_DOT_RADIUS)
            .map(|(index, _)| index)
    }
}
