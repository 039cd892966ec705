use log::{debug, trace};

use crate::{
    AlignmentMode, BacktraceGrid, BacktracePointer, BestCell, Position, ScoreMatrix,
    ScoringConfig,
};

/// Output of the fill pass: scores, the pointers recorded alongside them, and
/// in local mode the first cell holding the matrix-wide maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledMatrix {
    pub scores: ScoreMatrix,
    pub backtrace: BacktraceGrid,
    /// `Some` only in [`AlignmentMode::Local`]. The origin with score 0 when no
    /// cell is positive.
    pub best: Option<BestCell>,
}

impl FilledMatrix {
    /// Cell the traceback starts from for `mode`.
    pub fn traceback_start(&self) -> Position {
        match self.best {
            Some(best) => best.position,
            None => Position::new(self.scores.rows() - 1, self.scores.cols() - 1),
        }
    }
}

/// Cost of aligning a prefix of `len` symbols against gaps only.
#[inline]
fn boundary_score(len: usize, gap: i32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX).saturating_mul(gap)
}

/// Fill the `(len(seq1)+1) x (len(seq2)+1)` score matrix and its backtrace
/// pointers.
///
/// Cells are filled row by row, left to right, so the up, left and diagonal
/// neighbours are final before a cell is scored. Equal candidates resolve as
/// diagonal, then up, then left. In local mode every candidate is floored at
/// zero and a zero cell gets [`BacktracePointer::None`].
///
/// Scores saturate at `i32::MIN`/`i32::MAX` instead of wrapping.
pub fn build_matrix(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringConfig,
    mode: AlignmentMode,
) -> FilledMatrix {
    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;
    let gap = scoring.gap_penalty;

    debug!("filling {} matrix {}x{}", mode, rows, cols);

    let mut scores = ScoreMatrix::new(rows, cols);
    let mut backtrace = BacktraceGrid::new(rows, cols);

    if mode == AlignmentMode::Global {
        for i in 1..rows {
            scores.set(i, 0, boundary_score(i, gap));
        }
        for j in 1..cols {
            scores.set(0, j, boundary_score(j, gap));
        }
    }

    let mut best = BestCell::default();

    for i in 1..rows {
        let a = seq1[i - 1];
        for j in 1..cols {
            let diagonal = scores
                .get(i - 1, j - 1)
                .saturating_add(scoring.substitution(a, seq2[j - 1]));
            let up = scores.get(i - 1, j).saturating_add(gap);
            let left = scores.get(i, j - 1).saturating_add(gap);

            let (mut score, mut pointer) = (diagonal, BacktracePointer::Diagonal);
            if up > score {
                score = up;
                pointer = BacktracePointer::Up;
            }
            if left > score {
                score = left;
                pointer = BacktracePointer::Left;
            }

            if mode == AlignmentMode::Local {
                if score <= 0 {
                    score = 0;
                    pointer = BacktracePointer::None;
                } else if best.offer(score, Position::new(i, j)) {
                    trace!("new local maximum {} at ({}, {})", score, i, j);
                }
            }

            scores.set(i, j, score);
            backtrace.set(i, j, pointer);
        }
    }

    let best = match mode {
        AlignmentMode::Global => None,
        AlignmentMode::Local => {
            debug!(
                "local maximum {} at ({}, {})",
                best.score, best.position.i, best.position.j
            );
            Some(best)
        }
    };

    FilledMatrix {
        scores,
        backtrace,
        best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring() -> ScoringConfig {
        ScoringConfig::new(1, -1, -2)
    }

    #[test]
    fn global_matrix_values() {
        let fill = build_matrix(b"ACGTG", b"ACTG", &scoring(), AlignmentMode::Global);
        let rows: Vec<&[i32]> = fill.scores.iter_rows().collect();
        assert_eq!(
            rows,
            vec![
                &[0, -2, -4, -6, -8][..],
                &[-2, 1, -1, -3, -5],
                &[-4, -1, 2, 0, -2],
                &[-6, -3, 0, 1, 1],
                &[-8, -5, -2, 1, 0],
                &[-10, -7, -4, -1, 2],
            ]
        );
        assert_eq!(fill.best, None);
        assert_eq!(fill.traceback_start(), Position::new(5, 4));
    }

    #[test]
    fn boundary_cells_have_no_pointer() {
        let fill = build_matrix(b"AC", b"GT", &scoring(), AlignmentMode::Global);
        for k in 0..3 {
            assert_eq!(fill.backtrace.get(k, 0), BacktracePointer::None);
            assert_eq!(fill.backtrace.get(0, k), BacktracePointer::None);
        }
    }

    #[test]
    fn ties_prefer_diagonal_then_up() {
        // (2,1): diagonal = -2 + 1 and up = 1 - 2 tie at -1.
        let fill = build_matrix(b"AA", b"A", &scoring(), AlignmentMode::Global);
        assert_eq!(fill.scores.get(2, 1), -1);
        assert_eq!(fill.backtrace.get(2, 1), BacktracePointer::Diagonal);

        // Up beats left on a tie: zero-cost gaps make up and left equal at (1,1)
        // while the mismatch keeps diagonal below them.
        let free_gaps = ScoringConfig::new(1, -5, 0);
        let fill = build_matrix(b"A", b"C", &free_gaps, AlignmentMode::Global);
        assert_eq!(fill.scores.get(1, 1), 0);
        assert_eq!(fill.backtrace.get(1, 1), BacktracePointer::Up);
    }

    #[test]
    fn local_floor_and_maximum() {
        let fill = build_matrix(b"FKHMPLNE", b"FMDTPLNE", &scoring(), AlignmentMode::Local);
        assert!(fill.scores.iter_rows().flatten().all(|&v| v >= 0));
        assert_eq!(fill.scores.row(0).iter().sum::<i32>(), 0);
        assert_eq!(fill.scores.get(8, 8), 4);
        assert_eq!(
            fill.best,
            Some(BestCell {
                score: 4,
                position: Position::new(8, 8)
            })
        );
        // Floored cells carry no pointer
        assert_eq!(fill.scores.get(2, 2), 0);
        assert_eq!(fill.backtrace.get(2, 2), BacktracePointer::None);
    }

    #[test]
    fn local_maximum_keeps_first_in_fill_order() {
        // "A" matches at (1,1) and (1,3) with the same score.
        let fill = build_matrix(b"A", b"ACA", &scoring(), AlignmentMode::Local);
        assert_eq!(fill.scores.row(1), &[0, 1, 0, 1]);
        assert_eq!(fill.best.map(|b| b.position), Some(Position::new(1, 1)));
    }

    #[test]
    fn all_zero_local_matrix_reports_origin() {
        let fill = build_matrix(b"AAA", b"CCC", &scoring(), AlignmentMode::Local);
        assert_eq!(fill.best, Some(BestCell::default()));
        assert_eq!(fill.traceback_start(), Position::new(0, 0));
    }

    #[test]
    fn empty_inputs_give_boundary_only_matrix() {
        let fill = build_matrix(b"", b"", &scoring(), AlignmentMode::Global);
        assert_eq!((fill.scores.rows(), fill.scores.cols()), (1, 1));
        assert_eq!(fill.scores.get(0, 0), 0);

        let fill = build_matrix(b"", b"ACG", &scoring(), AlignmentMode::Global);
        assert_eq!(fill.scores.row(0), &[0, -2, -4, -6]);

        let fill = build_matrix(b"ACG", b"", &scoring(), AlignmentMode::Local);
        assert!(fill.scores.iter_rows().flatten().all(|&v| v == 0));
    }

    #[test]
    fn extreme_scores_saturate() {
        let huge_gap = ScoringConfig::new(1, -1, i32::MIN / 2 - 1);
        let fill = build_matrix(b"AA", b"", &huge_gap, AlignmentMode::Global);
        assert_eq!(fill.scores.get(1, 0), i32::MIN / 2 - 1);
        assert_eq!(fill.scores.get(2, 0), i32::MIN);

        let fill = build_matrix(b"AA", b"A", &huge_gap, AlignmentMode::Global);
        assert_eq!(fill.scores.get(2, 1), i32::MIN / 2);

        let huge_match = ScoringConfig::new(i32::MAX / 2 + 1, -1, -1);
        let fill = build_matrix(b"AA", b"AA", &huge_match, AlignmentMode::Local);
        assert_eq!(fill.scores.get(1, 1), i32::MAX / 2 + 1);
        assert_eq!(fill.scores.get(2, 2), i32::MAX);
        assert_eq!(fill.best.map(|b| b.position), Some(Position::new(2, 2)));
    }

    #[test]
    fn positive_gap_is_added_as_given() {
        let bonus = ScoringConfig::new(1, -1, 2);
        let fill = build_matrix(b"GA", b"GA", &bonus, AlignmentMode::Global);
        assert_eq!(fill.scores.row(0), &[0, 2, 4]);
        assert_eq!(fill.scores.get(2, 2), 8);
    }
}
