use clap::Parser;
use log::info;

use pairwise_aligner::config::{
    RunConfig, DEFAULT_GAP_PENALTY, DEFAULT_MATCH_SCORE, DEFAULT_MISMATCH_PENALTY,
};
use pairwise_aligner::report::{format_alignment, format_matrix, format_path};
use pairwise_aligner::{Aligner, AlignmentMode, ScoringConfig, Sequence};

#[derive(Parser)]
#[command(name = "pairwise_aligner")]
#[command(about = "Global and local pairwise sequence alignment", long_about = None)]
struct Cli {
    /// First sequence (matrix rows)
    seq1: Sequence,

    /// Second sequence (matrix columns)
    seq2: Sequence,

    /// Alignment mode: global (Needleman-Wunsch) or local (Smith-Waterman)
    #[arg(long, default_value_t = AlignmentMode::Global)]
    mode: AlignmentMode,

    /// Score for identical aligned symbols
    #[arg(long = "match", default_value_t = DEFAULT_MATCH_SCORE, allow_negative_numbers = true)]
    match_score: i32,

    /// Score for differing aligned symbols
    #[arg(long, default_value_t = DEFAULT_MISMATCH_PENALTY, allow_negative_numbers = true)]
    mismatch: i32,

    /// Score for each gap column, added as given
    #[arg(long, default_value_t = DEFAULT_GAP_PENALTY, allow_negative_numbers = true)]
    gap: i32,

    /// Print the score matrix with the traceback path marked
    #[arg(long)]
    show_matrix: bool,

    /// Print the traceback path coordinates
    #[arg(long)]
    show_path: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            mode: self.mode,
            scoring: ScoringConfig::new(self.match_score, self.mismatch, self.gap),
            show_matrix: self.show_matrix,
            show_path: self.show_path,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.run_config();

    info!(
        "{} alignment of {} x {} symbols, scoring {:?}",
        config.mode,
        cli.seq1.len(),
        cli.seq2.len(),
        config.scoring
    );

    let aligner = Aligner::new(config.scoring).with_alignment_mode(config.mode);
    let (result, filled) = aligner.align_with_matrix(cli.seq1.as_bytes(), cli.seq2.as_bytes());

    if config.show_matrix {
        println!("Alignment matrix:");
        print!(
            "{}",
            format_matrix(
                &filled.scores,
                cli.seq1.as_bytes(),
                cli.seq2.as_bytes(),
                &result.path
            )
        );
        println!();
    }

    print!("{}", format_alignment(&result));

    if config.show_path {
        println!("Traceback path: {}", format_path(&result.path));
    }

    Ok(())
}
