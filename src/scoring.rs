/// Matrix coordinate: `i` indexes rows (`seq1`), `j` indexes columns (`seq2`).
/// Row and column 0 are the empty-prefix boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// Counts derived from the operations of one alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

impl AlignmentStats {
    pub fn columns(&self) -> u32 {
        self.matches + self.mismatches + self.gaps
    }

    /// Fraction of alignment columns that are matches; 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        match self.columns() {
            0 => 0.0,
            n => self.matches as f64 / n as f64,
        }
    }
}

/// Dynamic-programming score table of `rows x cols` cells in a single
/// row-major buffer. Only the matrix builder writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn at(&self, pos: Position) -> i32 {
        self.get(pos.i, pos.j)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.i < self.rows && pos.j < self.cols
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks(self.cols)
    }

    /// First cell in row-major order holding the largest value.
    pub fn max_cell(&self) -> BestCell {
        let mut best = BestCell::default();
        for (idx, &score) in self.data.iter().enumerate() {
            best.offer(score, Position::new(idx / self.cols, idx % self.cols));
        }
        best
    }
}

/// Running maximum over matrix cells. Ties keep the earliest offer, which in
/// row-major fill order is the lowest row, then the lowest column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestCell {
    pub score: i32,
    pub position: Position,
}

impl Default for BestCell {
    fn default() -> Self {
        Self {
            score: 0,
            position: Position::new(0, 0),
        }
    }
}

impl BestCell {
    /// Returns true when `score` replaced the current best.
    #[inline]
    pub fn offer(&mut self, score: i32, position: Position) -> bool {
        if score > self.score {
            self.score = score;
            self.position = position;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_row_major() {
        let mut m = ScoreMatrix::new(2, 3);
        m.set(1, 2, 7);
        m.set(0, 1, -4);
        assert_eq!(m.row(0), &[0, -4, 0]);
        assert_eq!(m.row(1), &[0, 0, 7]);
        assert_eq!(m.at(Position::new(1, 2)), 7);
        assert_eq!(m.iter_rows().count(), 2);
        assert!(m.contains(Position::new(1, 2)));
        assert!(!m.contains(Position::new(2, 0)));
    }

    #[test]
    fn max_cell_keeps_first_of_ties() {
        let mut m = ScoreMatrix::new(3, 3);
        m.set(1, 2, 5);
        m.set(2, 0, 5);
        m.set(2, 2, 4);
        let best = m.max_cell();
        assert_eq!(best.score, 5);
        assert_eq!(best.position, Position::new(1, 2));
    }

    #[test]
    fn max_cell_of_non_positive_matrix_is_origin() {
        let mut m = ScoreMatrix::new(2, 2);
        m.set(1, 1, -3);
        assert_eq!(m.max_cell(), BestCell::default());
    }

    #[test]
    fn best_cell_only_replaces_on_strict_improvement() {
        let mut best = BestCell::default();
        assert!(!best.offer(0, Position::new(1, 1)));
        assert!(best.offer(3, Position::new(2, 2)));
        assert!(!best.offer(3, Position::new(3, 3)));
        assert_eq!(best.position, Position::new(2, 2));
    }

    #[test]
    fn stats_identity() {
        let stats = AlignmentStats {
            matches: 3,
            mismatches: 0,
            gaps: 1,
        };
        assert_eq!(stats.columns(), 4);
        assert!((stats.identity() - 0.75).abs() < f64::EPSILON);
        assert_eq!(AlignmentStats::default().identity(), 0.0);
    }
}
