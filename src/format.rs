//!
//! Adapter for the formatting function.
//!
//! The formatter gets only the significant chars and returns the
//! complete display text. It must be pure and deterministic, apart
//! from that it can do as it likes: insert separators, drop excess
//! input, restructure the value.
//!

use crate::ReformatError;
use crate::filter::CharFilter;
use dyn_clone::DynClone;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Formats a string of significant chars for display.
pub trait Format: DynClone + Debug {
    fn format(&self, significant: &str) -> String;
}

dyn_clone::clone_trait_object!(Format);

/// Wraps a plain function or closure as [Format].
#[derive(Clone)]
pub struct FormatFn<F> {
    name: &'static str,
    f: F,
}

impl<F> Debug for FormatFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatFn").field("name", &self.name).finish()
    }
}

impl<F> Format for FormatFn<F>
where
    F: Fn(&str) -> String + Clone,
{
    #[inline]
    fn format(&self, significant: &str) -> String {
        (self.f)(significant)
    }
}

/// Use a closure as formatter.
pub fn format_fn<F>(f: F) -> FormatFn<F>
where
    F: Fn(&str) -> String + Clone,
{
    FormatFn {
        name: "format_fn",
        f,
    }
}

impl<F> FormatFn<F> {
    /// Name for debug output.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

/// No formatting at all, displays the significant chars.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Format for Identity {
    fn format(&self, significant: &str) -> String {
        significant.to_string()
    }
}

/// Checks that the formatter is stable for its own output.
///
/// `format(filter(format(x)))` must equal `format(x)`. Formatters that
/// fail this will make the caret wander, this is meant for tests of a
/// formatter, not for use at runtime.
pub fn verify_idempotent(
    filter: &CharFilter,
    format: &dyn Format,
    significant: &str,
) -> Result<(), ReformatError> {
    let first = format.format(significant);
    let second = format.format(&filter.filter(&first));
    if first != second {
        return Err(ReformatError::FormatNotIdempotent(first, second));
    }
    Ok(())
}
