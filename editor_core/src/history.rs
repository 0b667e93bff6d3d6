//! Undo/Redo history system.

use crate::buffer::{LineBuffer, OutOfRange};
use crate::command::EditCommand;

/// Default maximum number of undo levels.
const DEFAULT_MAX_DEPTH: usize = 1000;

/// Mediates all mutations of a [`LineBuffer`] through reversible
/// [`EditCommand`]s.
///
/// The stack owns the buffer exclusively; callers route every mutation
/// through [`insert_line`](Self::insert_line) and
/// [`remove_line`](Self::remove_line) so that each change is recorded for
/// potential reversal. Applying a new command discards any redo-able
/// future: once the history diverges, the old future is unreachable.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    /// The document being edited.
    buffer: LineBuffer,
    /// Commands that can be undone, most-recent-last.
    undo_stack: Vec<EditCommand>,
    /// Commands that can be redone, most-recent-last.
    redo_stack: Vec<EditCommand>,
    /// Whether the document changed since the last acknowledgement.
    changed: bool,
    /// Maximum number of undo levels.
    max_depth: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack {
    /// Creates a history stack over an empty document.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a history stack with the given maximum undo depth.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            buffer: LineBuffer::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            changed: false,
            max_depth,
        }
    }

    // ==================== Mutations ====================

    /// Inserts `text` as a new line at `position` and records the edit.
    ///
    /// On `OutOfRange` nothing is recorded and the dirty flag is untouched.
    pub fn insert_line(&mut self, position: usize, text: &str) -> Result<(), OutOfRange> {
        let cmd = EditCommand::insert(position, text);
        cmd.redo(&mut self.buffer)?;
        self.push_undo(cmd);
        self.changed = true;
        Ok(())
    }

    /// Removes the line at `position` and records the edit, capturing the
    /// removed text so undo can restore it.
    pub fn remove_line(&mut self, position: usize) -> Result<(), OutOfRange> {
        let cmd = EditCommand::remove(&self.buffer, position)?;
        cmd.redo(&mut self.buffer)?;
        self.push_undo(cmd);
        self.changed = true;
        Ok(())
    }

    /// Pushes a freshly applied command onto the undo stack.
    fn push_undo(&mut self, cmd: EditCommand) {
        self.undo_stack.push(cmd);
        // Clear redo stack on new edit
        self.redo_stack.clear();
        // Enforce depth limit, dropping the oldest entry first
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    // ==================== Undo/Redo ====================

    /// Reverses the most recent edit.
    ///
    /// With nothing to undo this is a defined no-op that resets the dirty
    /// flag. A successful undo leaves the flag untouched: the document is
    /// still different from the last acknowledged state.
    ///
    /// An `OutOfRange` during replay means history and buffer have
    /// desynchronized; it is surfaced, never swallowed. It cannot happen
    /// while all mutations go through this stack.
    pub fn undo(&mut self) -> Result<(), OutOfRange> {
        if let Some(cmd) = self.undo_stack.pop() {
            cmd.undo(&mut self.buffer)?;
            self.redo_stack.push(cmd);
        } else {
            self.changed = false;
        }
        Ok(())
    }

    /// Re-applies the most recently undone edit. A pure no-op when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Result<(), OutOfRange> {
        if let Some(cmd) = self.redo_stack.pop() {
            cmd.redo(&mut self.buffer)?;
            self.undo_stack.push(cmd);
        }
        Ok(())
    }

    /// Returns true if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops all history without touching the buffer or the dirty flag.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    // ==================== Dirty flag ====================

    /// Returns whether the document has unacknowledged changes.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Acknowledges all changes, e.g. after the caller persisted the
    /// document. Never touches history.
    pub fn reset(&mut self) {
        self.changed = false;
    }

    // ==================== Read-only views ====================

    /// Returns the current line count.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the document holds no lines.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the full ordered sequence of lines as a read-only view.
    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    /// Returns the line at `position`, bounds-checked.
    pub fn line(&self, position: usize) -> Result<&str, OutOfRange> {
        self.buffer.line(position)
    }
}
