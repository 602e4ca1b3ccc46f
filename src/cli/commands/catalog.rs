//! Catalog command - score several outfits against one user's wardrobe

use std::path::PathBuf;

use fitcheck::adapters::file::FileCatalog;
use fitcheck::core::ports::{OutfitSource, WardrobeSource};
use fitcheck::core::services::{CompatibilityScorer, ScoreOptions};
use fitcheck::output::{CatalogEntry, CatalogReport, OutputMode};

/// Score catalog outfits for a user, reported in the order requested
pub fn catalog(
    root: PathBuf,
    user: &str,
    ids: &[String],
    options: ScoreOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let catalog = FileCatalog::new(root);
    let scorer = CompatibilityScorer::new(options);

    let wardrobe = catalog.wardrobe_for(user)?;
    let outfits = catalog.outfits(ids)?;

    let results = ids
        .iter()
        .zip(&outfits)
        .map(|(id, outfit)| CatalogEntry {
            id: id.clone(),
            found: outfit.is_some(),
            percentage: scorer.score_available(outfit.as_ref(), wardrobe.as_ref()),
        })
        .collect();

    let report = CatalogReport {
        owner: user.to_string(),
        wardrobe_found: wardrobe.is_some(),
        results,
    };
    report.render(mode);

    Ok(())
}
