//! Payload to Code128 symbol conversion functions

use crate::error::{Error, Result};
use crate::modules::ModuleWidths;
use crate::tables::{self, CHECKSUM_MODULO, START_CODE, STOP_CODE};

#[inline]
fn value_at(position: usize, symbol: char) -> Result<u8> {
    tables::symbol_value(symbol).ok_or(Error::UnsupportedSymbol { symbol, position })
}

/// Returns the index of `symbol` in the Code128 table. As the character is
/// looked up on its own, a failure reports position 0.
pub fn lookup_index(symbol: char) -> Result<u8> {
    value_at(0, symbol)
}

/// Computes the check symbol of a payload: the sum of every symbol value
/// weighted by its 1-based position, modulo 103.
pub fn checksum(payload: &str) -> Result<u8> {
    Ok(Ean128Encoder::new().append_str(payload)?.checksum())
}

/// Encodes a payload to its symbol sequence (start, payload, check, stop).
pub fn encode_symbols(payload: &str) -> Result<Symbols> {
    Ok(Ean128Encoder::new().append_str(payload)?.seal())
}

/// Encodes a payload to its module-width string.
pub fn encode(payload: &str) -> Result<ModuleWidths> {
    encode_symbols(payload).map(|symbols| symbols.module_widths())
}

/// Use an Ean128Encoder to append payload segments one after the other and
/// seal them into a [Symbols] sequence. The check symbol is accumulated as
/// segments are appended.
#[derive(Debug, Clone, Default)]
pub struct Ean128Encoder {
    values: Vec<u8>,
    sum: u32,
}

impl Ean128Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of payload symbols already appended.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Appends a single character. Fails if the character is neither `%`
    /// nor an ASCII digit; the reported position is relative to the whole
    /// payload appended so far.
    pub fn append_char(mut self, symbol: char) -> Result<Self> {
        let value = value_at(self.values.len(), symbol)?;
        self.push(value);
        Ok(self)
    }

    /// Appends every character of `s`. Nothing is appended if one of them
    /// is not supported.
    pub fn append_str(mut self, s: &str) -> Result<Self> {
        let offset = self.values.len();
        let values = s.chars()
            .enumerate()
            .map(|(i, c)| value_at(offset + i, c))
            .collect::<Result<Vec<u8>>>()?;

        for value in values {
            self.push(value);
        }
        Ok(self)
    }

    /// Appends the decimal digits of `n`.
    pub fn append_num(mut self, n: u64) -> Self {
        let mut digits = [0u8; 20];
        let mut count = 0;
        let mut n = n;
        loop {
            digits[count] = (n % 10) as u8;
            count += 1;
            n /= 10;
            if n == 0 { break; }
        }

        for &d in digits[..count].iter().rev() {
            self.push(16 + d);
        }
        self
    }

    /// Returns the check symbol of the payload appended so far.
    pub fn checksum(&self) -> u8 {
        self.sum as u8
    }

    /// Seals the payload between the start symbol and the check and stop
    /// symbols.
    pub fn seal(self) -> Symbols {
        let checksum = self.checksum();
        let mut values = Vec::with_capacity(self.values.len() + 3);
        values.push(START_CODE);
        values.extend_from_slice(&self.values);
        values.push(checksum);
        values.push(STOP_CODE);

        tracing::trace!(payload = self.values.len(), checksum, "sealed ean128 symbols");
        Symbols { values }
    }

    fn push(&mut self, value: u8) {
        self.values.push(value);
        // Start A has the value 103 and therefore never shows up modulo 103.
        let weight = (self.values.len() % CHECKSUM_MODULO as usize) as u32;
        self.sum = (self.sum + weight * value as u32) % CHECKSUM_MODULO;
    }
}

/// The encoded symbol sequence: start symbol, one symbol per payload
/// character, check symbol and stop symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbols {
    values: Vec<u8>,
}

impl Symbols {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    /// Returns the symbols of the payload only.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.values[1..self.values.len() - 2]
    }

    #[inline]
    pub fn checksum(&self) -> u8 {
        self.values[self.values.len() - 2]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, a sealed sequence holds at least the start, check and
    /// stop symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Concatenates the width pattern of every symbol.
    pub fn module_widths(&self) -> ModuleWidths {
        ModuleWidths::from_patterns(self.values.iter().map(|&v| tables::pattern(v)))
    }
}
