//!
//! Mask policy.
//!
//! A formatter may emit template chars ahead of the input, e.g. the
//! closing `) ` of a phone number after the third digit. With the mask
//! active these trailing chars are cut until enough significant input
//! exists to reach them.
//!

use crate::TextState;
use crate::filter::CharFilter;
use crate::upos_type;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A flag that is either fixed or evaluated for each edit.
#[derive(Clone, Default)]
pub enum Condition {
    Always,
    #[default]
    Never,
    /// Evaluated against a state on every edit. Not cached.
    When(Arc<dyn Fn(&TextState) -> bool + Send + Sync>),
}

impl Debug for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "Always"),
            Condition::Never => write!(f, "Never"),
            Condition::When(_) => write!(f, "When(..)"),
        }
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        if value {
            Condition::Always
        } else {
            Condition::Never
        }
    }
}

impl Condition {
    /// Condition from a predicate.
    pub fn when(f: impl Fn(&TextState) -> bool + Send + Sync + 'static) -> Self {
        Condition::When(Arc::new(f))
    }

    /// Evaluate for this state.
    #[inline]
    pub fn eval(&self, state: &TextState) -> bool {
        match self {
            Condition::Always => true,
            Condition::Never => false,
            Condition::When(f) => f(state),
        }
    }
}

/// Cuts the display text after the n-th significant char.
///
/// Returns the text unchanged if it has fewer significant chars.
pub fn trim_template(filter: &CharFilter, display: &str, n: upos_type) -> String {
    filter.prefix_with(display, n).to_string()
}
