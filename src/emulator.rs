//!
//! Emulates a plain single-line text input as host.
//!
//! Each command is applied to the displayed text the way an
//! unformatted input would do it, the result is then reported to the
//! [ReformatState] as an edit. Good for replaying keystroke traces.
//!
//! ```
//! use rat_reformat::emulator::{InputCommand, InputEmulator};
//! use rat_reformat::formats::Grouping;
//! use rat_reformat::Reformat;
//!
//! let mut input = InputEmulator::new(Reformat::new(Grouping::default()));
//! input.exec(InputCommand::Put("1234".into())).expect("edit");
//! assert_eq!(input.render(), "1,234|");
//! input.exec(InputCommand::MoveCaret(-4)).expect("edit");
//! input.exec(InputCommand::Put("9".into())).expect("edit");
//! assert_eq!(input.render(), "19|,234");
//! ```
//!

use crate::input_state::{EditOutcome, ReformatState};
use crate::reconcile::Reformat;
use crate::{ReformatError, chars};

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Type or paste the text at the caret.
    Put(String),
    /// Remove the char before the caret.
    Backspace,
    /// Remove the char after the caret.
    Delete,
    /// Move the caret, clamped to the text.
    MoveCaret(i32),
}

/// Host emulation around a [ReformatState].
#[derive(Debug, Clone)]
pub struct InputEmulator {
    pub state: ReformatState,
}

impl InputEmulator {
    pub fn new(format: Reformat) -> Self {
        Self {
            state: ReformatState::new(format),
        }
    }

    pub fn with_value(format: Reformat, raw: &str) -> Self {
        Self {
            state: ReformatState::with_value(format, raw),
        }
    }

    /// Current text with a `|` at the caret.
    pub fn render(&self) -> String {
        self.state.state().render()
    }

    /// Apply one command.
    pub fn exec(&mut self, cmd: InputCommand) -> Result<EditOutcome, ReformatError> {
        let text = self.state.text();
        let caret = self.state.caret();
        match cmd {
            InputCommand::Put(s) => {
                let raw = chars::insert_at(text, caret, &s);
                let raw_caret = caret + chars::len(&s);
                self.state.handle_edit(&raw, raw_caret)
            }
            InputCommand::Backspace => {
                if caret == 0 {
                    return Ok(EditOutcome::Unchanged);
                }
                let raw = chars::remove_at(text, caret - 1);
                self.state.handle_edit(&raw, caret - 1)
            }
            InputCommand::Delete => {
                if caret >= self.state.len() {
                    return Ok(EditOutcome::Unchanged);
                }
                let raw = chars::remove_at(text, caret);
                self.state.handle_edit(&raw, caret)
            }
            InputCommand::MoveCaret(delta) => Ok(self.state.move_caret(delta)),
        }
    }

    /// Type the text.
    pub fn put(&mut self, s: &str) -> Result<EditOutcome, ReformatError> {
        self.exec(InputCommand::Put(s.to_string()))
    }

    pub fn backspace(&mut self) -> Result<EditOutcome, ReformatError> {
        self.exec(InputCommand::Backspace)
    }

    pub fn delete(&mut self) -> Result<EditOutcome, ReformatError> {
        self.exec(InputCommand::Delete)
    }

    pub fn move_caret(&mut self, delta: i32) -> Result<EditOutcome, ReformatError> {
        self.exec(InputCommand::MoveCaret(delta))
    }
}
