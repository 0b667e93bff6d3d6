//! Linedit Core - Reversible line editing engine.
//!
//! This crate contains the document state and undo/redo behavior without
//! any dependencies on terminal handling or rendering systems.

pub mod buffer;
pub mod command;
pub mod history;

pub use buffer::{LineBuffer, OutOfRange};
pub use command::EditCommand;
pub use history::HistoryStack;
