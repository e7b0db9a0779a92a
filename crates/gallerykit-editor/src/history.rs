//! Bounded undo/redo history.
//!
//! An explicit double stack owned by the editor session and handed to
//! it by value (no globals), so it can be unit-tested against a bare
//! [`Document`]. Executing a command clears the redo stack; exceeding
//! capacity evicts the oldest undo step.

use std::collections::VecDeque;

use gallerykit_core::constants::HISTORY_CAPACITY;

use crate::command::EditorCommand;
use crate::document::Document;

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(HISTORY_CAPACITY)
    }

    /// Applies the command to the document and records it.
    pub fn execute(&mut self, mut cmd: EditorCommand, doc: &mut Document) {
        cmd.apply(doc);
        tracing::debug!(command = %cmd.description(), "executed");
        self.undo_stack.push_back(cmd);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
    }

    /// Reverts the most recent command. No-op when empty.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        match self.undo_stack.pop_back() {
            Some(mut cmd) => {
                cmd.undo(doc);
                self.redo_stack.push(cmd);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone command. No-op when empty.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(mut cmd) => {
                cmd.apply(doc);
                self.undo_stack.push_back(cmd);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the command `undo` would revert, for menu items.
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|c| c.description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.description())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
