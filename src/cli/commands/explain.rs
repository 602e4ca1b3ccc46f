//! Explain command - per-slot breakdown of a score

use std::path::Path;

use anyhow::Context;

use fitcheck::adapters::file::{load_outfit, load_wardrobe};
use fitcheck::core::services::{CompatibilityScorer, ScoreOptions};
use fitcheck::output::{ExplainReport, OutputMode};

/// Show which wardrobe items cover each slot of an outfit
pub fn explain(
    outfit_path: &Path,
    wardrobe_path: &Path,
    options: ScoreOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let outfit = load_outfit(outfit_path)
        .with_context(|| format!("could not load outfit {}", outfit_path.display()))?;
    let wardrobe = load_wardrobe(wardrobe_path)
        .with_context(|| format!("could not load wardrobe {}", wardrobe_path.display()))?;

    let detailed = CompatibilityScorer::new(options).score_detailed(&outfit, &wardrobe);

    ExplainReport::from_detailed(&outfit, &wardrobe, &detailed, options.rounding.to_string())
        .render(mode);

    Ok(())
}
