//! Reversible edit commands.

use crate::buffer::{LineBuffer, OutOfRange};

/// A single reversible mutation of a [`LineBuffer`].
///
/// The set of mutation kinds is closed: `redo` and `undo` are exhaustive
/// matches, so adding a variant is a compile-checked change everywhere.
/// Applying `redo` and then `undo` reproduces the pre-apply buffer state
/// exactly, content and positions both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert `text` so that it occupies `position`.
    Insert { position: usize, text: String },
    /// Remove the line at `position`; `text` holds the removed content
    /// so the command can restore it on undo.
    Remove { position: usize, text: String },
}

impl EditCommand {
    /// Builds an insert command. Construction does not apply the insert;
    /// application happens on the first `redo` call.
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            position,
            text: text.into(),
        }
    }

    /// Builds a remove command, capturing the current text at `position`
    /// before anything is deleted.
    pub fn remove(buffer: &LineBuffer, position: usize) -> Result<Self, OutOfRange> {
        let text = buffer.line(position)?.to_string();
        Ok(Self::Remove { position, text })
    }

    /// Applies the forward effect to `buffer`.
    pub fn redo(&self, buffer: &mut LineBuffer) -> Result<(), OutOfRange> {
        match self {
            Self::Insert { position, text } => buffer.insert(*position, text),
            Self::Remove { position, .. } => buffer.remove(*position),
        }
    }

    /// Applies the exact inverse of [`redo`](Self::redo) to `buffer`.
    pub fn undo(&self, buffer: &mut LineBuffer) -> Result<(), OutOfRange> {
        match self {
            Self::Insert { position, .. } => buffer.remove(*position),
            Self::Remove { position, text } => buffer.insert(*position, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_redo_then_undo_round_trips() {
        let mut buf = LineBuffer::new();
        buf.insert(0, "a").unwrap();
        buf.insert(1, "b").unwrap();
        let before = buf.clone();

        let cmd = EditCommand::insert(1, "between");
        cmd.redo(&mut buf).unwrap();
        assert_eq!(buf.lines(), &["a", "between", "b"]);

        cmd.undo(&mut buf).unwrap();
        assert_eq!(buf, before);
    }

    #[test]
    fn test_remove_captures_text_at_construction() {
        let mut buf = LineBuffer::new();
        buf.insert(0, "keep").unwrap();
        buf.insert(1, "victim").unwrap();

        let cmd = EditCommand::remove(&buf, 1).unwrap();
        cmd.redo(&mut buf).unwrap();
        assert_eq!(buf.lines(), &["keep"]);

        // Undo restores the exact original content, not a placeholder.
        cmd.undo(&mut buf).unwrap();
        assert_eq!(buf.lines(), &["keep", "victim"]);
    }

    #[test]
    fn test_remove_construction_out_of_range() {
        let buf = LineBuffer::new();
        let err = EditCommand::remove(&buf, 0).unwrap_err();
        assert_eq!(err, OutOfRange { position: 0, len: 0 });
    }

    #[test]
    fn test_redo_propagates_buffer_error() {
        let mut buf = LineBuffer::new();
        let cmd = EditCommand::insert(3, "nowhere");
        assert_eq!(
            cmd.redo(&mut buf),
            Err(OutOfRange { position: 3, len: 0 })
        );
        assert!(buf.is_empty());
    }
}
