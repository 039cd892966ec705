use log::debug;

use crate::{AlignerError, AlignmentMode, AlignmentStats, Position, ScoreMatrix};

/// Gap marker written into aligned sequences.
pub const GAP: u8 = b'-';

/// Which recurrence candidate produced a cell's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacktracePointer {
    Diagonal,
    Up,
    Left,
    /// Boundary cells, and local cells floored to zero.
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// `seq1` symbol against a gap.
    Deletion,
    /// Gap against a `seq2` symbol.
    Insertion,
}

/// One reconstructed alignment.
///
/// Positions are named by alignment order, not walk order: `start_position`
/// is the top-left end of the alignment, where the backward walk stopped, and
/// `end_position` is the bottom-right end, the cell the walk began from
/// (`(n, m)` in global mode, the maximum-score cell in local mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    /// Visited cells in left-to-right order, one per alignment column.
    pub path: Vec<Position>,
    pub operations: Vec<TracebackOperation>,
    /// Where the alignment begins: the origin, or a zero cell in local mode.
    pub start_position: Position,
    /// Where the alignment ends.
    pub end_position: Position,
    pub stats: AlignmentStats,
}

impl AlignmentResult {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn aligned_strings(&self) -> (String, String) {
        (
            String::from_utf8_lossy(&self.aligned_seq1).into_owned(),
            String::from_utf8_lossy(&self.aligned_seq2).into_owned(),
        )
    }
}

/// Per-cell backtrace pointers, same shape and layout as the [`ScoreMatrix`]
/// they were recorded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktraceGrid {
    data: Vec<BacktracePointer>,
    rows: usize,
    cols: usize,
}

impl BacktraceGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![BacktracePointer::None; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pointer: BacktracePointer) {
        self.data[row * self.cols + col] = pointer;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> BacktracePointer {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Walk backtrace pointers and rebuild the alignment.
///
/// `start` defaults to the bottom-right cell in global mode and to the first
/// maximum-score cell in local mode. Global walks continue until the origin,
/// consuming a leftover prefix against gaps once either boundary is hit; local
/// walks stop at the first zero cell.
pub fn reconstruct(
    matrix: &ScoreMatrix,
    backtrace: &BacktraceGrid,
    seq1: &[u8],
    seq2: &[u8],
    mode: AlignmentMode,
    start: Option<Position>,
) -> Result<AlignmentResult, AlignerError> {
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    for (got_rows, got_cols) in [
        (matrix.rows(), matrix.cols()),
        (backtrace.rows(), backtrace.cols()),
    ] {
        if (got_rows, got_cols) != (rows, cols) {
            return Err(AlignerError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: got_rows,
                cols: got_cols,
            });
        }
    }

    let start = match (start, mode) {
        (Some(pos), _) => pos,
        (None, AlignmentMode::Global) => Position::new(seq1.len(), seq2.len()),
        (None, AlignmentMode::Local) => matrix.max_cell().position,
    };
    if !matrix.contains(start) {
        return Err(AlignerError::StartOutOfBounds {
            i: start.i,
            j: start.j,
            rows,
            cols,
        });
    }

    let result = walk(matrix, backtrace, seq1, seq2, mode, start);

    let stop = result.start_position;
    let complete = match mode {
        AlignmentMode::Global => stop == Position::new(0, 0),
        AlignmentMode::Local => matrix.at(stop) <= 0,
    };
    if !complete {
        return Err(AlignerError::InvalidBacktrace { i: stop.i, j: stop.j });
    }

    Ok(result)
}

/// Unchecked walk shared by [`reconstruct`] and the aligner. A missing pointer
/// or one leading outside the matrix ends the walk early.
pub(crate) fn walk(
    matrix: &ScoreMatrix,
    backtrace: &BacktraceGrid,
    seq1: &[u8],
    seq2: &[u8],
    mode: AlignmentMode,
    start: Position,
) -> AlignmentResult {
    let mut aligned_seq1 = Vec::new();
    let mut aligned_seq2 = Vec::new();
    let mut operations = Vec::new();
    let mut path = Vec::new();
    let mut stats = AlignmentStats::default();

    let (mut i, mut j) = (start.i, start.j);

    loop {
        let pointer = match mode {
            AlignmentMode::Global => {
                if i == 0 && j == 0 {
                    break;
                }
                if i == 0 {
                    BacktracePointer::Left
                } else if j == 0 {
                    BacktracePointer::Up
                } else {
                    backtrace.get(i, j)
                }
            }
            AlignmentMode::Local => {
                if matrix.get(i, j) <= 0 {
                    break;
                }
                backtrace.get(i, j)
            }
        };

        match pointer {
            BacktracePointer::Diagonal if i > 0 && j > 0 => {
                path.push(Position::new(i, j));
                let (a, b) = (seq1[i - 1], seq2[j - 1]);
                aligned_seq1.push(a);
                aligned_seq2.push(b);
                if a == b {
                    operations.push(TracebackOperation::Match);
                    stats.matches += 1;
                } else {
                    operations.push(TracebackOperation::Mismatch);
                    stats.mismatches += 1;
                }
                i -= 1;
                j -= 1;
            }
            BacktracePointer::Up if i > 0 => {
                path.push(Position::new(i, j));
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(GAP);
                operations.push(TracebackOperation::Deletion);
                stats.gaps += 1;
                i -= 1;
            }
            BacktracePointer::Left if j > 0 => {
                path.push(Position::new(i, j));
                aligned_seq1.push(GAP);
                aligned_seq2.push(seq2[j - 1]);
                operations.push(TracebackOperation::Insertion);
                stats.gaps += 1;
                j -= 1;
            }
            _ => break,
        }
    }

    // Built from the end backwards
    aligned_seq1.reverse();
    aligned_seq2.reverse();
    operations.reverse();
    path.reverse();

    debug!(
        "{} traceback from ({}, {}) to ({}, {}): {} columns",
        mode,
        start.i,
        start.j,
        i,
        j,
        path.len()
    );

    AlignmentResult {
        score: matrix.at(start),
        aligned_seq1,
        aligned_seq2,
        path,
        operations,
        start_position: Position::new(i, j),
        end_position: start,
        stats,
    }
}
