//!
//! Caret reconciliation.
//!
//! The host reports the raw text after an edit together with its caret.
//! From that the next display text is formatted and the caret is placed
//! behind the same number of significant chars as it was in the raw text.
//! Separators that come and go left of the caret don't move it off the
//! digit the user just typed.
//!
//! ```
//! use rat_reformat::{Reformat, TextState, format_fn};
//!
//! let fmt = Reformat::new(format_fn(|s: &str| {
//!     s.chars()
//!         .enumerate()
//!         .flat_map(|(i, c)| if i == 2 { vec!['-', c] } else { vec![c] })
//!         .collect()
//! }));
//!
//! let prev = TextState::at_end("12");
//! let next = fmt.reformat(&prev, "123", 3).expect("valid caret");
//! assert_eq!(next.text(), "12-3");
//! assert_eq!(next.caret(), 4);
//! ```
//!

use crate::filter::{CharFilter, CharRule};
use crate::format::Format;
use crate::mask::{Condition, trim_template};
use crate::{ReformatError, TextState, chars, upos_type};
use log::debug;
use std::borrow::Cow;

/// What to do if a deletion only removed decoration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Remove the nearest significant char in the direction of
    /// the deletion instead.
    #[default]
    RemoveAdjacent,
    /// Leave the text as is and move the caret across the
    /// decoration.
    StepOver,
}

/// Kind of edit, derived from the lengths of the previous and
/// the raw text and the carets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Text got longer.
    Insert,
    /// Text got shorter, caret moved left.
    Backspace,
    /// Text got shorter, caret stayed.
    Delete,
    /// Same length.
    Replace,
}

impl EditKind {
    pub fn classify(prev: &TextState, raw_text: &str, raw_caret: upos_type) -> EditKind {
        let raw_len = chars::len(raw_text);
        let prev_len = prev.len();
        if raw_len > prev_len {
            EditKind::Insert
        } else if raw_len < prev_len {
            if raw_caret < prev.caret() {
                EditKind::Backspace
            } else {
                EditKind::Delete
            }
        } else {
            EditKind::Replace
        }
    }

    #[inline]
    pub fn is_deletion(self) -> bool {
        matches!(self, EditKind::Backspace | EditKind::Delete)
    }
}

/// Filter, formatter and policies for one input.
#[derive(Debug, Clone)]
pub struct Reformat {
    filter: CharFilter,
    format: Box<dyn Format>,
    mask: Condition,
    overwrite: Condition,
    delete_mode: DeleteMode,
    jump_template: bool,
}

impl Reformat {
    /// New with the given formatter. Accepts ascii digits as
    /// significant chars.
    pub fn new(format: impl Format + 'static) -> Self {
        Self {
            filter: CharFilter::accept(CharRule::AsciiDigit),
            format: Box::new(format),
            mask: Condition::Never,
            overwrite: Condition::Never,
            delete_mode: DeleteMode::RemoveAdjacent,
            jump_template: false,
        }
    }

    /// Chars matching the rule are significant.
    pub fn accept(mut self, rule: CharRule) -> Self {
        self.filter = CharFilter::accept(rule);
        self
    }

    /// Chars matching the rule are decoration.
    pub fn refuse(mut self, rule: CharRule) -> Self {
        self.filter = CharFilter::refuse(rule);
        self
    }

    /// Trim trailing template chars that are not yet covered
    /// by input.
    pub fn mask(mut self, mask: impl Into<Condition>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Typing replaces the next significant char instead of inserting.
    /// Evaluated against the state before the edit.
    pub fn overwrite(mut self, overwrite: impl Into<Condition>) -> Self {
        self.overwrite = overwrite.into();
        self
    }

    pub fn delete_mode(mut self, mode: DeleteMode) -> Self {
        self.delete_mode = mode;
        self
    }

    /// After typing move the caret across any template chars
    /// directly following it.
    pub fn jump_template(mut self, jump: bool) -> Self {
        self.jump_template = jump;
        self
    }

    #[inline]
    pub fn filter(&self) -> &CharFilter {
        &self.filter
    }

    #[inline]
    pub fn formatter(&self) -> &dyn Format {
        self.format.as_ref()
    }

    #[inline]
    pub fn delete_mode_value(&self) -> DeleteMode {
        self.delete_mode
    }

    /// Formats some raw text from scratch. The caret is placed
    /// at the end.
    pub fn initial(&self, raw_text: &str) -> TextState {
        let significant = self.filter.filter(raw_text);
        let n = chars::len(&significant);
        TextState::at_end(self.display(&significant, n).0)
    }

    /// Next state after an edit. See [reconcile].
    #[inline]
    pub fn reformat(
        &self,
        prev: &TextState,
        raw_text: &str,
        raw_caret: upos_type,
    ) -> Result<TextState, ReformatError> {
        reconcile(self, prev, raw_text, raw_caret)
    }

    /// Format and apply the mask. Returns the text and the caret
    /// behind `before` significant chars.
    ///
    /// The mask is evaluated against the untrimmed text with this caret.
    fn display(&self, significant: &str, before: upos_type) -> (String, upos_type) {
        let text = self.format.format(significant);
        let caret = self.place_caret(&text, chars::len(significant), before);
        let candidate = TextState { text, caret };
        if self.mask.eval(&candidate) {
            let text = trim_template(&self.filter, &candidate.text, chars::len(significant));
            let caret = caret.min(chars::len(&text));
            (text, caret)
        } else {
            (candidate.text, candidate.caret)
        }
    }

    /// Caret in the formatted text.
    ///
    /// Counted from the left as a rule. If the formatter added
    /// significant chars of its own (padding zeros) they end up in front
    /// of the input, so the count is taken from the right instead.
    fn place_caret(&self, text: &str, significant: upos_type, before: upos_type) -> upos_type {
        if self.filter.count(text) > significant {
            let after = significant - before;
            debug!("formatter added significant chars, keep {} after caret", after);
            self.filter.position_before_last(text, after).unwrap_or(0)
        } else {
            match self.filter.position_after(text, before) {
                Some(pos) => pos,
                None => {
                    debug!(
                        "formatter kept fewer than {} significant chars, clamp caret",
                        before
                    );
                    chars::len(text)
                }
            }
        }
    }
}

/// Computes the next display text and caret.
///
/// * prev: what is currently shown.
/// * raw_text: the text as the host has it after the edit, with the
///   user's change applied to the previous display text.
/// * raw_caret: the host's caret inside raw_text.
///
/// The caret ends up behind as many significant chars as there are
/// before raw_caret in raw_text. If the formatter dropped some of them
/// the caret is clamped to the end. If the formatter added some, the
/// caret keeps the significant chars behind raw_caret after it instead.
///
/// If the result looks exactly like the previous text, the previous
/// state is returned as is, so rejected chars never move the caret.
/// The exception are deletions with [DeleteMode::StepOver].
///
/// Fails if raw_caret is beyond the end of raw_text.
pub fn reconcile(
    fmt: &Reformat,
    prev: &TextState,
    raw_text: &str,
    raw_caret: upos_type,
) -> Result<TextState, ReformatError> {
    let raw_len = chars::len(raw_text);
    if raw_caret > raw_len {
        return Err(ReformatError::CaretOutOfBounds(raw_caret, raw_len));
    }

    let filter = &fmt.filter;
    let kind = EditKind::classify(prev, raw_text, raw_caret);

    let mut raw = Cow::Borrowed(raw_text);
    let mut caret = raw_caret;

    let decoration_only =
        kind.is_deletion() && filter.filter(raw_text) == filter.filter(prev.text());

    if decoration_only && fmt.delete_mode == DeleteMode::RemoveAdjacent {
        let adjacent = if kind == EditKind::Backspace {
            filter.prev_significant(&raw, caret)
        } else {
            filter.next_significant(&raw, caret)
        };
        if let Some(pos) = adjacent {
            debug!("only decoration deleted, remove significant char at {}", pos);
            raw = Cow::Owned(chars::remove_at(&raw, pos));
            if kind == EditKind::Backspace {
                caret = pos;
            }
        }
    }

    if kind == EditKind::Insert && fmt.overwrite.eval(prev) {
        let significant = filter.filter(&raw);
        let before = filter.count_before(&raw, caret);
        if fmt.display(&significant, before).0 != prev.text() {
            if let Some(pos) = filter.next_significant(&raw, caret) {
                debug!("overwrite significant char at {}", pos);
                raw = Cow::Owned(chars::remove_at(&raw, pos));
            }
        }
    }

    let before = filter.count_before(&raw, caret);
    let significant = filter.filter(&raw);
    let (text, pos) = fmt.display(&significant, before);
    let len = chars::len(&text);

    if text == prev.text() {
        if fmt.delete_mode == DeleteMode::StepOver && kind.is_deletion() {
            let caret = if kind == EditKind::Delete {
                (prev.caret() + 1 + filter.decoration_run(&raw, caret)).min(len)
            } else {
                pos
            };
            debug!("step over {:?} -> {}", kind, caret);
            return Ok(TextState { text, caret });
        }
        return Ok(prev.clone());
    }

    let mut caret = pos;
    if fmt.jump_template && matches!(kind, EditKind::Insert | EditKind::Delete) {
        caret += filter.decoration_run(&text, caret);
    }

    Ok(TextState { text, caret })
}
