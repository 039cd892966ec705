use pairwise_aligner::report::{format_alignment, format_matrix};
use pairwise_aligner::{Aligner, AlignmentMode, ScoringConfig, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scoring = ScoringConfig::new(1, -1, -2);

    let seq1 = Sequence::parse("fkhmplne")?;
    let seq2 = Sequence::parse("fmdtplne")?;

    for mode in [AlignmentMode::Global, AlignmentMode::Local] {
        let aligner = Aligner::new(scoring).with_alignment_mode(mode);
        let (result, filled) = aligner.align_with_matrix(seq1.as_bytes(), seq2.as_bytes());

        println!("== {} ==", mode);
        print!(
            "{}",
            format_matrix(&filled.scores, seq1.as_bytes(), seq2.as_bytes(), &result.path)
        );
        print!("{}", format_alignment(&result));
        println!("Operations: {:?}", result.operations);
        println!();
    }

    Ok(())
}
