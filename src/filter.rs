//!
//! Classifies chars as significant input or as decoration.
//!
//! Significant chars are handed to the formatter, everything else
//! is dropped before formatting. The classification is either given
//! as an accept-rule or as a refuse-rule, the latter just inverts the
//! result.
//!

use crate::{chars, upos_type};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Rule for a single char.
#[derive(Clone)]
#[non_exhaustive]
pub enum CharRule {
    /// 0-9
    AsciiDigit,
    /// 0-9 and the given extra chars.
    AsciiDigitAnd(Box<str>),
    /// Any letter or digit.
    Alphanumeric,
    /// Only the given chars.
    OneOf(Box<str>),
    /// Custom predicate. Must be pure.
    Predicate(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl Debug for CharRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CharRule::AsciiDigit => write!(f, "AsciiDigit"),
            CharRule::AsciiDigitAnd(s) => write!(f, "AsciiDigitAnd({:?})", s),
            CharRule::Alphanumeric => write!(f, "Alphanumeric"),
            CharRule::OneOf(s) => write!(f, "OneOf({:?})", s),
            CharRule::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

impl Default for CharRule {
    fn default() -> Self {
        CharRule::AsciiDigit
    }
}

impl CharRule {
    /// Rule from a predicate.
    pub fn predicate(f: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        CharRule::Predicate(Arc::new(f))
    }

    /// 0-9 and the extra chars.
    pub fn digits_and(extra: impl Into<Box<str>>) -> Self {
        CharRule::AsciiDigitAnd(extra.into())
    }

    /// Only these chars.
    pub fn one_of(chars: impl Into<Box<str>>) -> Self {
        CharRule::OneOf(chars.into())
    }

    /// Does the rule match?
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharRule::AsciiDigit => c.is_ascii_digit(),
            CharRule::AsciiDigitAnd(extra) => c.is_ascii_digit() || extra.contains(c),
            CharRule::Alphanumeric => c.is_alphanumeric(),
            CharRule::OneOf(s) => s.contains(c),
            CharRule::Predicate(f) => f(c),
        }
    }
}

/// Accept or refuse filter over a [CharRule].
#[derive(Debug, Default, Clone)]
pub struct CharFilter {
    rule: CharRule,
    refuse: bool,
}

impl CharFilter {
    /// Chars matching the rule are significant.
    pub fn accept(rule: CharRule) -> Self {
        Self {
            rule,
            refuse: false,
        }
    }

    /// Chars matching the rule are decoration, everything else
    /// is significant.
    pub fn refuse(rule: CharRule) -> Self {
        Self { rule, refuse: true }
    }

    #[inline]
    pub fn rule(&self) -> &CharRule {
        &self.rule
    }

    /// Refuse polarity?
    #[inline]
    pub fn is_refuse(&self) -> bool {
        self.refuse
    }

    /// Is this char significant input?
    #[inline]
    pub fn is_significant(&self, c: char) -> bool {
        self.rule.matches(c) != self.refuse
    }

    /// Only the significant chars, in order.
    pub fn filter(&self, text: &str) -> String {
        text.chars().filter(|c| self.is_significant(*c)).collect()
    }

    /// Number of significant chars.
    pub fn count(&self, text: &str) -> upos_type {
        text.chars().filter(|c| self.is_significant(*c)).count() as upos_type
    }

    /// Number of significant chars strictly before the position.
    pub fn count_before(&self, text: &str, pos: upos_type) -> upos_type {
        text.chars()
            .take(pos as usize)
            .filter(|c| self.is_significant(*c))
            .count() as upos_type
    }

    /// Position directly after the n-th significant char.
    ///
    /// 0 for n == 0. None if the text has fewer than n
    /// significant chars.
    pub fn position_after(&self, text: &str, n: upos_type) -> Option<upos_type> {
        if n == 0 {
            return Some(0);
        }
        let mut seen = 0;
        for (i, c) in text.chars().enumerate() {
            if self.is_significant(c) {
                seen += 1;
                if seen == n {
                    return Some(i as upos_type + 1);
                }
            }
        }
        None
    }

    /// Position with exactly n significant chars after it.
    ///
    /// For n == 0 this is directly after the last significant char.
    /// Otherwise it is directly in front of the n-th significant char
    /// counted from the end. None if the text has fewer than n
    /// significant chars.
    pub fn position_before_last(&self, text: &str, n: upos_type) -> Option<upos_type> {
        let total = self.count(text);
        if n > total {
            None
        } else if n == 0 {
            self.position_after(text, total)
        } else {
            self.position_after(text, total - n + 1).map(|v| v - 1)
        }
    }

    /// Nearest significant char at or after pos.
    pub fn next_significant(&self, text: &str, pos: upos_type) -> Option<upos_type> {
        text.chars()
            .enumerate()
            .skip(pos as usize)
            .find(|(_, c)| self.is_significant(*c))
            .map(|(i, _)| i as upos_type)
    }

    /// Nearest significant char strictly before pos.
    pub fn prev_significant(&self, text: &str, pos: upos_type) -> Option<upos_type> {
        text.chars()
            .take(pos as usize)
            .enumerate()
            .filter(|(_, c)| self.is_significant(*c))
            .last()
            .map(|(i, _)| i as upos_type)
    }

    /// Number of decorative chars directly at pos.
    pub fn decoration_run(&self, text: &str, pos: upos_type) -> upos_type {
        text.chars()
            .skip(pos as usize)
            .take_while(|c| !self.is_significant(*c))
            .count() as upos_type
    }

    /// Shortest prefix that still contains n significant chars.
    ///
    /// If the text holds fewer than n significant chars the
    /// whole text is returned.
    pub fn prefix_with<'a>(&self, text: &'a str, n: upos_type) -> &'a str {
        match self.position_after(text, n) {
            Some(pos) => &text[..chars::byte_pos(text, pos)],
            None => text,
        }
    }
}
