use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod alignment_mode;
pub mod config;
pub mod matrix;
pub mod report;
pub mod scoring;
pub mod sequence;
pub mod traceback;

pub use crate::alignment_mode::{AlignmentMode, ScoringConfig};
pub use crate::matrix::{build_matrix, FilledMatrix};
pub use crate::scoring::{AlignmentStats, BestCell, Position, ScoreMatrix};
pub use crate::sequence::Sequence;
pub use crate::traceback::{
    reconstruct, AlignmentResult, BacktraceGrid, BacktracePointer, TracebackOperation, GAP,
};

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("Sequence is empty")]
    EmptyInput,
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("Unknown alignment mode: {0}")]
    UnknownMode(String),
    #[error("Matrix is {rows}x{cols}, sequences need {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Start cell ({i}, {j}) outside {rows}x{cols} matrix")]
    StartOutOfBounds {
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Traceback stopped early at ({i}, {j})")]
    InvalidBacktrace { i: usize, j: usize },
}

/// Needleman-Wunsch alignment of `seq1` against `seq2`.
pub fn align_global(
    seq1: &[u8],
    seq2: &[u8],
    match_score: i32,
    mismatch_penalty: i32,
    gap_penalty: i32,
) -> AlignmentResult {
    Aligner::new(ScoringConfig::new(match_score, mismatch_penalty, gap_penalty))
        .with_alignment_mode(AlignmentMode::Global)
        .align(seq1, seq2)
}

/// Smith-Waterman alignment of `seq1` against `seq2`. Returns an empty
/// alignment with score 0 when no cell scores above zero.
pub fn align_local(
    seq1: &[u8],
    seq2: &[u8],
    match_score: i32,
    mismatch_penalty: i32,
    gap_penalty: i32,
) -> AlignmentResult {
    Aligner::new(ScoringConfig::new(match_score, mismatch_penalty, gap_penalty))
        .with_alignment_mode(AlignmentMode::Local)
        .align(seq1, seq2)
}

/// Reusable alignment settings. Holds no matrix storage, so one aligner can be
/// shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligner {
    scoring: ScoringConfig,
    mode: AlignmentMode,
}

impl Aligner {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            mode: AlignmentMode::Global,
        }
    }

    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Fill pass only, for callers that want the matrix without a traceback.
    pub fn build(&self, seq1: &[u8], seq2: &[u8]) -> FilledMatrix {
        build_matrix(seq1, seq2, &self.scoring, self.mode)
    }

    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> AlignmentResult {
        self.align_with_matrix(seq1, seq2).0
    }

    pub fn align_sequences(&self, seq1: &Sequence, seq2: &Sequence) -> AlignmentResult {
        self.align(seq1.as_bytes(), seq2.as_bytes())
    }

    /// Alignment plus the matrix it was traced through.
    pub fn align_with_matrix(&self, seq1: &[u8], seq2: &[u8]) -> (AlignmentResult, FilledMatrix) {
        let start_time = Instant::now();

        let filled = self.build(seq1, seq2);
        let result = traceback::walk(
            &filled.scores,
            &filled.backtrace,
            seq1,
            seq2,
            self.mode,
            filled.traceback_start(),
        );

        debug!(
            "{} alignment {}x{} scored {} in {:?}",
            self.mode,
            seq1.len(),
            seq2.len(),
            result.score,
            start_time.elapsed()
        );

        (result, filled)
    }
}
