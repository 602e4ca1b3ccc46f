//! Score command - one outfit against one wardrobe

use std::path::Path;

use anyhow::Context;

use fitcheck::adapters::file::{load_outfit, load_wardrobe};
use fitcheck::core::services::{CompatibilityScorer, ScoreOptions};
use fitcheck::output::{OutputMode, ScoreReport};

/// Score an outfit file against a wardrobe file
pub fn score(
    outfit_path: &Path,
    wardrobe_path: &Path,
    options: ScoreOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let outfit = load_outfit(outfit_path)
        .with_context(|| format!("could not load outfit {}", outfit_path.display()))?;
    let wardrobe = load_wardrobe(wardrobe_path)
        .with_context(|| format!("could not load wardrobe {}", wardrobe_path.display()))?;

    let percentage = CompatibilityScorer::new(options).score(&outfit, &wardrobe);

    let report = ScoreReport {
        outfit: outfit.label().to_string(),
        owner: wardrobe.owner.clone(),
        percentage,
        rounding: options.rounding.to_string(),
    };
    report.render(mode);

    Ok(())
}
