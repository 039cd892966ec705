use std::fmt;
use std::str::FromStr;

use crate::AlignerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    Global, // Needleman-Wunsch
    Local,  // Smith-Waterman
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentMode::Global => write!(f, "global"),
            AlignmentMode::Local => write!(f, "local"),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = AlignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "nw" | "needleman-wunsch" => Ok(AlignmentMode::Global),
            "local" | "sw" | "smith-waterman" => Ok(AlignmentMode::Local),
            _ => Err(AlignerError::UnknownMode(s.to_string())),
        }
    }
}

/// Flat linear scoring. All three values are added as-is, so penalties are
/// expected to be negative; a positive `gap_penalty` is accepted and acts as a
/// bonus.
///
/// There is intentionally no `Default`: callers pick the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    pub gap_penalty: i32,
}

impl ScoringConfig {
    pub fn new(match_score: i32, mismatch_penalty: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
        }
    }

    /// Score for aligning `a` against `b`.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_penalty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_names() {
        assert_eq!("global".parse::<AlignmentMode>().unwrap(), AlignmentMode::Global);
        assert_eq!("Local".parse::<AlignmentMode>().unwrap(), AlignmentMode::Local);
        assert_eq!("sw".parse::<AlignmentMode>().unwrap(), AlignmentMode::Local);
        assert!(matches!(
            "semiglobal".parse::<AlignmentMode>(),
            Err(AlignerError::UnknownMode(name)) if name == "semiglobal"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            assert_eq!(mode.to_string().parse::<AlignmentMode>().unwrap(), mode);
        }
    }

    #[test]
    fn substitution_uses_exact_byte_equality() {
        let scoring = ScoringConfig::new(2, -3, -1);
        assert_eq!(scoring.substitution(b'A', b'A'), 2);
        assert_eq!(scoring.substitution(b'A', b'C'), -3);
        assert_eq!(scoring.substitution(b'a', b'A'), -3);
    }
}
