//!
//! Holds the current text and caret of one input between edits.
//!
//! The host feeds every edit it sees via [ReformatState::handle_edit]
//! and renders whatever [ReformatState::text] and
//! [ReformatState::caret] report afterwards. Edits must arrive in
//! order, there is no buffering or sequencing here.
//!

use crate::reconcile::Reformat;
use crate::{ReformatError, TextState, upos_type};
use log::debug;

/// Result of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EditOutcome {
    /// Nothing changed.
    Unchanged,
    /// Only the caret moved.
    Changed,
    /// Text content has changed.
    TextChanged,
}

impl EditOutcome {
    fn between(before: &TextState, after: &TextState) -> EditOutcome {
        if before.text() != after.text() {
            EditOutcome::TextChanged
        } else if before.caret() != after.caret() {
            EditOutcome::Changed
        } else {
            EditOutcome::Unchanged
        }
    }
}

// Useful for caret moves.
impl From<bool> for EditOutcome {
    fn from(value: bool) -> Self {
        if value {
            EditOutcome::Changed
        } else {
            EditOutcome::Unchanged
        }
    }
}

/// State of one formatted input.
#[derive(Debug, Clone)]
pub struct ReformatState {
    format: Reformat,
    state: TextState,
}

impl ReformatState {
    /// Empty input.
    pub fn new(format: Reformat) -> Self {
        Self {
            format,
            state: TextState::default(),
        }
    }

    /// Input with an initial raw value. It runs through filter
    /// and formatter once, the caret is at the end.
    pub fn with_value(format: Reformat, raw: &str) -> Self {
        let state = format.initial(raw);
        Self { format, state }
    }

    #[inline]
    pub fn reformat(&self) -> &Reformat {
        &self.format
    }

    /// Current text and caret.
    #[inline]
    pub fn state(&self) -> &TextState {
        &self.state
    }

    /// Display text.
    #[inline]
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Caret as char offset.
    #[inline]
    pub fn caret(&self) -> upos_type {
        self.state.caret()
    }

    /// Only the significant chars of the display text.
    pub fn value(&self) -> String {
        self.format.filter().filter(self.state.text())
    }

    /// Length in chars.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.state.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Reset to empty.
    pub fn clear(&mut self) -> EditOutcome {
        let old = std::mem::take(&mut self.state);
        EditOutcome::between(&old, &self.state)
    }

    /// Replace the value programmatically. The caret is
    /// placed at the end.
    pub fn set_value(&mut self, raw: &str) -> EditOutcome {
        let next = self.format.initial(raw);
        let old = std::mem::replace(&mut self.state, next);
        EditOutcome::between(&old, &self.state)
    }

    /// Host moved the caret. Clamps to the text.
    pub fn set_caret(&mut self, caret: upos_type) -> EditOutcome {
        self.state.set_caret(caret).into()
    }

    /// Move the caret by some offset. Clamps to the text.
    pub fn move_caret(&mut self, delta: i32) -> EditOutcome {
        let caret = (self.state.caret() as i64 + delta as i64).max(0);
        let caret = caret.min(upos_type::MAX as i64) as upos_type;
        self.set_caret(caret)
    }

    /// The host reports an edit.
    ///
    /// * raw: full text of the host input after the edit.
    /// * caret: the host caret inside raw.
    ///
    /// A caret beyond the end of raw is a contract violation by
    /// the host and leaves the state untouched.
    pub fn handle_edit(
        &mut self,
        raw: &str,
        caret: upos_type,
    ) -> Result<EditOutcome, ReformatError> {
        let next = self.format.reformat(&self.state, raw, caret)?;
        debug!("edit {:?} -> {:?}", self.state, next);
        let old = std::mem::replace(&mut self.state, next);
        Ok(EditOutcome::between(&old, &self.state))
    }
}
