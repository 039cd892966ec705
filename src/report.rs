//! Plain-text rendering of alignment results for terminal output.

use std::collections::HashSet;
use std::fmt;

use crate::{AlignmentResult, Position, ScoreMatrix, TracebackOperation};

/// Marker appended to matrix cells on the traceback path.
pub const PATH_MARKER: char = '*';

/// The two aligned rows with a midline (`|` match, `.` mismatch, blank for a
/// gap) followed by score and identity.
pub struct AlignmentReport<'a>(pub &'a AlignmentResult);

impl fmt::Display for AlignmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let (top, bottom) = result.aligned_strings();
        let midline: String = result
            .operations
            .iter()
            .map(|op| match op {
                TracebackOperation::Match => '|',
                TracebackOperation::Mismatch => '.',
                TracebackOperation::Deletion | TracebackOperation::Insertion => ' ',
            })
            .collect();

        let stats = &result.stats;
        writeln!(f, "Sequence 1: {}", top)?;
        writeln!(f, "            {}", midline)?;
        writeln!(f, "Sequence 2: {}", bottom)?;
        writeln!(f, "Score: {}", result.score)?;
        writeln!(
            f,
            "Identity: {}/{} ({:.1}%), gaps: {}",
            stats.matches,
            stats.columns(),
            stats.identity() * 100.0,
            stats.gaps
        )
    }
}

/// Score matrix as a table. Row headers are `-` followed by `seq1`, column
/// headers `-` followed by `seq2`; cells listed in `path` get [`PATH_MARKER`].
pub struct MatrixReport<'a> {
    pub matrix: &'a ScoreMatrix,
    pub seq1: &'a [u8],
    pub seq2: &'a [u8],
    pub path: &'a [Position],
}

fn header_label(idx: usize, seq: &[u8]) -> char {
    match idx {
        0 => '-',
        k => seq.get(k - 1).map(|&b| b as char).unwrap_or('?'),
    }
}

impl fmt::Display for MatrixReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_path: HashSet<Position> = self.path.iter().copied().collect();
        let width = self
            .matrix
            .iter_rows()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        write!(f, "  ")?;
        for j in 0..self.matrix.cols() {
            write!(f, " {:>width$} ", header_label(j, self.seq2), width = width)?;
        }
        writeln!(f)?;

        for (i, row) in self.matrix.iter_rows().enumerate() {
            write!(f, "{} ", header_label(i, self.seq1))?;
            for (j, value) in row.iter().enumerate() {
                let marker = if on_path.contains(&Position::new(i, j)) {
                    PATH_MARKER
                } else {
                    ' '
                };
                write!(f, " {:>width$}{}", value, marker, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn format_alignment(result: &AlignmentResult) -> String {
    AlignmentReport(result).to_string()
}

pub fn format_matrix(
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    path: &[Position],
) -> String {
    MatrixReport {
        matrix,
        seq1,
        seq2,
        path,
    }
    .to_string()
}

/// Traceback path as `(row, col)` pairs in alignment order.
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "(empty)".to_string();
    }
    path.iter()
        .map(|p| format!("({}, {})", p.i, p.j))
        .collect::<Vec<_>>()
        .join(" -> ")
}
