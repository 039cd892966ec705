use std::fmt;
use std::str::FromStr;

use crate::AlignerError;

/// Owned, immutable symbol sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    /// Wrap raw symbols as-is. No validation or case folding.
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Parse user input: surrounding whitespace is trimmed, letters are
    /// uppercased, and anything that is not an ASCII letter is rejected.
    pub fn parse(input: &str) -> Result<Self, AlignerError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AlignerError::EmptyInput);
        }

        let mut data = Vec::with_capacity(trimmed.len());
        for (position, symbol) in trimmed.chars().enumerate() {
            if !symbol.is_ascii_alphabetic() {
                return Err(AlignerError::InvalidSymbol { symbol, position });
            }
            data.push(symbol.to_ascii_uppercase() as u8);
        }
        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl FromStr for Sequence {
    type Err = AlignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}
