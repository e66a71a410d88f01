//! Check-seed command - validate a seed file without serving it

use std::path::Path;

use trivia::adapters::SeedData;
use trivia::output::{OutputMode, SeedSummary};

/// Load a seed file and print its summary
pub fn check_seed(file: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let seed = SeedData::load(file)?;
    let summary = SeedSummary::of(&seed);
    if !summary.orphaned_questions.is_empty() {
        log::warn!(
            "{} question(s) reference a category missing from the seed",
            summary.orphaned_questions.len()
        );
    }
    println!("{}", summary.render(output_mode)?);
    Ok(())
}
