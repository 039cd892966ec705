use crate::{AlignmentMode, ScoringConfig};

// Front-end defaults. The core takes scores explicitly and has none of its own.
pub const DEFAULT_MATCH_SCORE: i32 = 1;
pub const DEFAULT_MISMATCH_PENALTY: i32 = -1;
pub const DEFAULT_GAP_PENALTY: i32 = -2;

/// Settings for one run of the command-line front-end.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: AlignmentMode,
    pub scoring: ScoringConfig,
    pub show_matrix: bool,
    pub show_path: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: AlignmentMode::Global,
            scoring: ScoringConfig::new(
                DEFAULT_MATCH_SCORE,
                DEFAULT_MISMATCH_PENALTY,
                DEFAULT_GAP_PENALTY,
            ),
            show_matrix: false,
            show_path: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_is_global_with_front_end_scores() {
        let config = RunConfig::default();
        assert_eq!(config.mode, AlignmentMode::Global);
        assert_eq!(config.scoring, ScoringConfig::new(1, -1, -2));
        assert!(!config.show_matrix && !config.show_path);
    }
}
