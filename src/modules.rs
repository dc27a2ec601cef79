use core::{fmt, iter, str::FromStr};

use crate::error::{Error, Result};
use crate::tables::pattern_modules;

/// A string of width digits, one per bar or space, alternating and starting
/// with a bar. Produced by the encoder or validated with [ModuleWidths::parse].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleWidths {
    widths: String,
    modules: u32,
}

impl ModuleWidths {
    /// Concatenates width patterns taken from the symbol table.
    pub(crate) fn from_patterns<'p>(patterns: impl IntoIterator<Item = &'p str>) -> Self {
        let mut widths = String::new();
        let mut modules = 0;
        for pattern in patterns {
            widths.push_str(pattern);
            modules += pattern_modules(pattern);
        }
        Self { widths, modules }
    }

    /// Validates a module-width string coming from outside of the encoder.
    /// Every character must be a single digit between 1 and 9.
    pub fn parse(s: &str) -> Result<Self> {
        let mut modules = 0;
        for (position, digit) in s.chars().enumerate() {
            match digit.to_digit(10) {
                Some(w @ 1..=9) => modules += w,
                _ => return Err(Error::InvalidModuleWidth { digit, position }),
            }
        }
        Ok(Self { widths: s.to_owned(), modules })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.widths
    }

    /// Number of width digits (bars and spaces).
    #[inline]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Total number of modules, the sum of every width digit.
    #[inline]
    pub const fn module_count(&self) -> u32 {
        self.modules
    }

    /// Number of modules that belong to a bar.
    pub fn bar_count(&self) -> u32 {
        self.widths.bytes()
            .step_by(2)
            .map(|w| (w - b'0') as u32)
            .sum()
    }

    /// Iterates over the binary module sequence, `true` for a bar module.
    pub fn modules(&self) -> Modules<'_> {
        Modules {
            widths: self.widths.as_bytes(),
            bar: false,
            next_bar: true,
            run: 0,
            remaining: self.modules as usize,
        }
    }

    pub fn into_string(self) -> String {
        self.widths
    }
}

impl AsRef<str> for ModuleWidths {
    fn as_ref(&self) -> &str {
        &self.widths
    }
}

impl fmt::Display for ModuleWidths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.widths)
    }
}

impl FromStr for ModuleWidths {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a ModuleWidths {
    type Item = bool;
    type IntoIter = Modules<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules()
    }
}

/// Expands width digits into one boolean per module.
#[derive(Debug, Clone)]
pub struct Modules<'a> {
    widths: &'a [u8],
    bar: bool,
    next_bar: bool,
    run: u8,
    remaining: usize,
}

impl<'a> iter::Iterator for Modules<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        while self.run == 0 {
            let (&w, rest) = self.widths.split_first()?;
            self.widths = rest;
            // even positions are bars, odd positions are spaces
            self.bar = self.next_bar;
            self.next_bar = !self.next_bar;
            self.run = w - b'0';
        }

        self.run -= 1;
        self.remaining -= 1;
        Some(self.bar)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> iter::ExactSizeIterator for Modules<'a> {}
impl<'a> iter::FusedIterator for Modules<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let widths = ModuleWidths::parse("2114").unwrap();
        assert_eq!(widths.len(), 4);
        assert_eq!(widths.module_count(), 8);
        assert_eq!(widths.bar_count(), 3);
        assert_eq!(widths.as_str(), "2114");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(ModuleWidths::parse("2104"), Err(Error::InvalidModuleWidth { digit: '0', position: 2 }));
        assert_eq!("21x".parse::<ModuleWidths>(), Err(Error::InvalidModuleWidth { digit: 'x', position: 2 }));
    }

    #[test]
    fn test_modules() {
        let widths = ModuleWidths::parse("2114").unwrap();
        let bits: Vec<bool> = widths.modules().collect();
        assert_eq!(bits, [true, true, false, true, false, false, false, false]);
    }

    #[test]
    fn test_modules_size_hint() {
        let widths = ModuleWidths::parse("2331112").unwrap();
        let mut modules = widths.modules();
        assert_eq!(modules.len(), 13);
        modules.next();
        modules.next();
        modules.next();
        assert_eq!(modules.len(), 10);
        assert_eq!(modules.count(), 10);
    }

    #[test]
    fn test_empty() {
        let widths = ModuleWidths::parse("").unwrap();
        assert!(widths.is_empty());
        assert_eq!(widths.module_count(), 0);
        assert_eq!(widths.modules().next(), None);
    }
}
