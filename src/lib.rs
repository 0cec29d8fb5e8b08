#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod emulator;
pub mod filter;
pub mod format;
pub mod formats;
pub mod input_state;
pub mod mask;
pub mod reconcile;

mod chars;

pub use filter::{CharFilter, CharRule};
pub use format::{Format, FormatFn, format_fn};
pub use input_state::{EditOutcome, ReformatState};
pub use mask::Condition;
pub use reconcile::{DeleteMode, EditKind, Reformat, reconcile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReformatError {
    /// A caret was beyond the end of its text.
    ///
    /// Contains the caret and the length of the text in chars,
    /// in that order.
    CaretOutOfBounds(upos_type, upos_type),
    /// Feeding the formatted text back through filter and format
    /// produced something else.
    ///
    /// Contains the first and the second formatted text.
    FormatNotIdempotent(String, String),
}

impl Display for ReformatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ReformatError {}

/// Caret type. Counts chars, not bytes.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

/// Displayed text and the caret position within.
///
/// The caret is always in `0..=len`, where len is the number
/// of chars of the text.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct TextState {
    text: String,
    caret: upos_type,
}

impl Debug for TextState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.render())
    }
}

impl TextState {
    /// Empty text, caret at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// New state.
    ///
    /// Fails if the caret is beyond the end of the text.
    pub fn with_caret(
        text: impl Into<String>,
        caret: upos_type,
    ) -> Result<TextState, ReformatError> {
        let text = text.into();
        let len = chars::len(&text);
        if caret > len {
            return Err(ReformatError::CaretOutOfBounds(caret, len));
        }
        Ok(Self { text, caret })
    }

    /// New state with the caret at the end of the text.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = chars::len(&text);
        Self { text, caret }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn caret(&self) -> upos_type {
        self.caret
    }

    /// Length in chars.
    #[inline]
    pub fn len(&self) -> upos_type {
        chars::len(&self.text)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sets the caret. Clamps to the end of the text.
    ///
    /// Returns true if the caret changed.
    pub fn set_caret(&mut self, caret: upos_type) -> bool {
        let caret = caret.min(self.len());
        let old = self.caret;
        self.caret = caret;
        old != caret
    }

    /// Text with a `|` inserted at the caret position.
    pub fn render(&self) -> String {
        let split = chars::byte_pos(&self.text, self.caret);
        let mut out = String::with_capacity(self.text.len() + 1);
        out.push_str(&self.text[..split]);
        out.push('|');
        out.push_str(&self.text[split..]);
        out
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
