//!
//! Some ready-made formatters.
//!
//! Each of them expects only significant chars as input, the
//! [CharFilter](crate::filter::CharFilter) of the input must not let
//! their separators through. Except for the decimal separator of a
//! [Grouping] with fraction: that one must be accepted as
//! significant.
//!

use crate::format::Format;
use format_num_pattern::{Locale, NumberSymbols};

/// Groups the integer digits by thousands.
///
/// Leading zeros are removed. With a decimal separator the first one
/// splits integer and fraction, any further ones are dropped.
#[derive(Debug, Clone)]
pub struct Grouping {
    grp: Option<char>,
    dec: Option<char>,
    frac: Option<usize>,
}

impl Default for Grouping {
    fn default() -> Self {
        Self {
            grp: Some(','),
            dec: None,
            frac: None,
        }
    }
}

impl Grouping {
    /// Integer grouping with this separator.
    pub fn new(grp: char) -> Self {
        Self {
            grp: Some(grp),
            dec: None,
            frac: None,
        }
    }

    /// Separators from the number symbols. Includes the decimal
    /// separator.
    pub fn from_symbols(sym: &NumberSymbols) -> Self {
        Self {
            grp: sym.decimal_grp,
            dec: Some(sym.decimal_sep),
            frac: None,
        }
    }

    /// Monetary separators of the locale.
    pub fn from_locale(locale: Locale) -> Self {
        Self::from_symbols(&NumberSymbols::monetary(locale))
    }

    /// Allow a fraction with at most `max` digits.
    pub fn fraction(mut self, dec: char, max: usize) -> Self {
        self.dec = Some(dec);
        self.frac = Some(max);
        self
    }

    #[inline]
    pub fn grouping_sep(&self) -> Option<char> {
        self.grp
    }

    #[inline]
    pub fn decimal_sep(&self) -> Option<char> {
        self.dec
    }

    fn group(&self, int: &str, out: &mut String) {
        let digits = int.trim_start_matches('0');
        let digits = if digits.is_empty() && !int.is_empty() {
            "0"
        } else {
            digits
        };
        let n = digits.chars().count();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (n - i) % 3 == 0 {
                if let Some(grp) = self.grp {
                    out.push(grp);
                }
            }
            out.push(c);
        }
    }
}

impl Format for Grouping {
    fn format(&self, significant: &str) -> String {
        let mut out = String::new();

        let split = self.dec.and_then(|dec| {
            significant
                .char_indices()
                .find(|(_, c)| *c == dec)
                .map(|(i, c)| (i, i + c.len_utf8(), c))
        });

        match split {
            None => {
                let int: String = significant.chars().filter(|c| c.is_ascii_digit()).collect();
                self.group(&int, &mut out);
            }
            Some((start, end, dec)) => {
                let int: String = significant[..start]
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect();
                if int.is_empty() {
                    out.push('0');
                } else {
                    self.group(&int, &mut out);
                }
                out.push(dec);
                let max = self.frac.unwrap_or(usize::MAX);
                out.extend(
                    significant[end..]
                        .chars()
                        .filter(|c| c.is_ascii_digit())
                        .take(max),
                );
            }
        }

        out
    }
}

/// Fixed number of fraction digits, the separator moves with
/// the input.
#[derive(Debug, Clone)]
pub struct FixedPoint {
    scale: usize,
    sep: char,
}

impl Default for FixedPoint {
    fn default() -> Self {
        Self { scale: 2, sep: '.' }
    }
}

impl FixedPoint {
    pub fn new(scale: usize, sep: char) -> Self {
        Self { scale, sep }
    }
}

impl Format for FixedPoint {
    fn format(&self, significant: &str) -> String {
        let digits: String = significant.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return String::new();
        }

        let mut padded = String::new();
        for _ in digits.len()..self.scale + 1 {
            padded.push('0');
        }
        padded.push_str(digits);

        let split = padded.len() - self.scale;
        let mut out = String::with_capacity(padded.len() + 1);
        out.push_str(&padded[..split]);
        if self.scale > 0 {
            out.push(self.sep);
            out.push_str(&padded[split..]);
        }
        out
    }
}

/// Fills the slots of a template with the input.
///
/// The literal chars after the last filled slot are emitted too,
/// "(###) ###-####" gives "(123) " for "123". Input beyond the
/// last slot is dropped.
#[derive(Debug, Clone)]
pub struct Template {
    pattern: Box<str>,
    slot: char,
}

impl Template {
    /// Template with `#` as slot.
    pub fn new(pattern: impl Into<Box<str>>) -> Self {
        Self {
            pattern: pattern.into(),
            slot: '#',
        }
    }

    /// Use a different slot char.
    pub fn slot(mut self, slot: char) -> Self {
        self.slot = slot;
        self
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.pattern.chars().filter(|c| *c == self.slot).count()
    }
}

impl Format for Template {
    fn format(&self, significant: &str) -> String {
        if significant.is_empty() {
            return String::new();
        }

        let mut input = significant.chars();
        let mut out = String::new();
        let mut literal = String::new();
        for t in self.pattern.chars() {
            if t == self.slot {
                let Some(c) = input.next() else {
                    break;
                };
                out.push_str(&literal);
                literal.clear();
                out.push(c);
            } else {
                literal.push(t);
            }
        }
        out.push_str(&literal);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CharFilter, CharRule};
    use crate::format::verify_idempotent;

    #[test]
    fn test_grouping() {
        let g = Grouping::default();
        assert_eq!(g.format(""), "");
        assert_eq!(g.format("1"), "1");
        assert_eq!(g.format("1234"), "1,234");
        assert_eq!(g.format("123456"), "123,456");
        assert_eq!(g.format("0012"), "12");
        assert_eq!(g.format("000"), "0");
        assert_eq!(g.format("1234567"), "1,234,567");
    }

    #[test]
    fn test_grouping_fraction() {
        let g = Grouping::new('’').fraction('.', 2);
        assert_eq!(g.format("12345.00"), "12’345.00");
        assert_eq!(g.format("1234.500"), "1’234.50");
        assert_eq!(g.format("12.34.50"), "12.34");
        assert_eq!(g.format(".34"), "0.34");
        assert_eq!(g.format("034"), "34");
        assert_eq!(g.format("123456789.12"), "123’456’789.12");
    }

    #[test]
    fn test_fixed_point() {
        let f = FixedPoint::default();
        assert_eq!(f.format(""), "");
        assert_eq!(f.format("123"), "1.23");
        assert_eq!(f.format("23"), "0.23");
        assert_eq!(f.format("5"), "0.05");
        assert_eq!(f.format("00123"), "1.23");
        assert_eq!(FixedPoint::new(0, '.').format("12"), "12");
    }

    #[test]
    fn test_template() {
        let t = Template::new("(###) ###-####");
        assert_eq!(t.capacity(), 10);
        assert_eq!(t.format(""), "");
        assert_eq!(t.format("1"), "(1");
        assert_eq!(t.format("123"), "(123) ");
        assert_eq!(t.format("1234"), "(123) 4");
        assert_eq!(t.format("123456"), "(123) 456-");
        assert_eq!(t.format("1234567890"), "(123) 456-7890");
        assert_eq!(t.format("123456789012"), "(123) 456-7890");
        assert_eq!(Template::new("__/__").slot('_').format("1"), "1");
    }

    #[test]
    fn test_idempotent() {
        let digits = CharFilter::default();
        let decimal = CharFilter::accept(CharRule::digits_and("."));
        for s in ["", "1", "0012", "1234567"] {
            verify_idempotent(&digits, &Grouping::default(), s).unwrap();
            verify_idempotent(&digits, &FixedPoint::default(), s).unwrap();
            verify_idempotent(&digits, &Template::new("(###) ###-####"), s).unwrap();
        }
        for s in ["12.3", ".5", "1.2.3", "1234.5678"] {
            verify_idempotent(&decimal, &Grouping::new('’').fraction('.', 2), s).unwrap();
        }
    }

    #[test]
    fn test_locale() {
        let g = Grouping::from_locale(Locale::de_DE);
        assert_eq!(g.decimal_sep(), Some(','));
    }
}
