//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{MatchTier, Outfit, Percentage, Wardrobe};
use crate::core::services::DetailedScore;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of scoring one outfit
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    /// Outfit label
    pub outfit: String,
    /// Wardrobe owner, if known
    pub owner: Option<String>,
    /// Compatibility percentage
    pub percentage: Percentage,
    /// Rounding mode used
    pub rounding: String,
}

/// Per-slot breakdown of one outfit
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    /// Outfit label
    pub outfit: String,
    /// Compatibility percentage
    pub percentage: Percentage,
    /// Filled slots counted in the score
    pub counted_slots: usize,
    /// Sum of slot credits
    pub total_credit: u64,
    /// Rounding mode used
    pub rounding: String,
    /// One entry per outfit slot
    pub slots: Vec<SlotReport>,
}

/// One slot in an explain report
#[derive(Debug, Serialize)]
pub struct SlotReport {
    /// Slot position (0-based)
    pub slot: usize,
    /// The requested item, `None` for an empty slot
    pub item: Option<String>,
    /// "exact", "loose", "unmatched" or "empty"
    pub tier: String,
    /// Credit units earned
    pub credit: u64,
    /// Wardrobe items qualifying at the achieved tier
    pub matches: Vec<MatchedItem>,
}

/// A wardrobe item that qualified for a slot
#[derive(Debug, Serialize)]
pub struct MatchedItem {
    /// Index in the wardrobe
    pub index: usize,
    /// Item description
    pub item: String,
}

/// Scores of several outfits against one wardrobe, in requested order
#[derive(Debug, Serialize)]
pub struct CatalogReport {
    /// Wardrobe owner
    pub owner: String,
    /// Whether the owner's wardrobe was found
    pub wardrobe_found: bool,
    /// One entry per requested outfit
    pub results: Vec<CatalogEntry>,
}

/// One outfit in a catalog report
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    /// Requested outfit id
    pub id: String,
    /// Whether the outfit was found
    pub found: bool,
    /// Compatibility percentage (zero when missing)
    pub percentage: Percentage,
}

impl ExplainReport {
    /// Build a report from a detailed score
    #[must_use]
    pub fn from_detailed(
        outfit: &Outfit,
        wardrobe: &Wardrobe,
        detailed: &DetailedScore,
        rounding: String,
    ) -> Self {
        let slots = detailed
            .slots
            .iter()
            .map(|s| SlotReport {
                slot: s.slot,
                item: outfit.slots.get(s.slot).and_then(Option::as_ref).map(ToString::to_string),
                tier: tier_label(s.tier),
                credit: s.credit(),
                matches: s
                    .items
                    .iter()
                    .filter_map(|&i| {
                        wardrobe.get(i).map(|d| MatchedItem {
                            index: i,
                            item: d.to_string(),
                        })
                    })
                    .collect(),
            })
            .collect();

        Self {
            outfit: outfit.label().to_string(),
            percentage: detailed.percentage,
            counted_slots: detailed.counted_slots,
            total_credit: detailed.total_credit,
            rounding,
            slots,
        }
    }
}

fn colored_percentage(p: Percentage) -> String {
    let text = p.to_string();
    match p.value() {
        80..=100 => text.green().bold().to_string(),
        40..=79 => text.yellow().bold().to_string(),
        _ => text.red().bold().to_string(),
    }
}

fn colored_tier(tier: &str) -> String {
    match tier {
        "exact" => tier.green().to_string(),
        "loose" => tier.yellow().to_string(),
        "unmatched" => tier.red().to_string(),
        _ => tier.dimmed().to_string(),
    }
}

impl ScoreReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.owner {
            Some(owner) => {
                println!(
                    "{}: {} (wardrobe of {owner})",
                    self.outfit,
                    colored_percentage(self.percentage)
                );
            },
            None => println!("{}: {}", self.outfit, colored_percentage(self.percentage)),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ExplainReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Outfit: {}\n", self.outfit);

        for s in &self.slots {
            let Some(item) = &s.item else {
                println!("  [{}] {}", s.slot, colored_tier(&s.tier));
                continue;
            };

            println!("  [{}] {} -> {} (+{})", s.slot, item, colored_tier(&s.tier), s.credit);
            for m in &s.matches {
                println!("          #{} {}", m.index, m.item);
            }
        }

        println!();
        if self.counted_slots == 0 {
            println!("No filled slots. Score: {}", colored_percentage(self.percentage));
        } else {
            println!(
                "Score: {} ({} credit over {} slot(s), {})",
                colored_percentage(self.percentage),
                self.total_credit,
                self.counted_slots,
                self.rounding
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CatalogReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.wardrobe_found {
            println!("No wardrobe found for {}. All outfits score 0%.\n", self.owner);
        }

        for r in &self.results {
            if r.found {
                println!("  {:<24} {}", r.id, colored_percentage(r.percentage));
            } else {
                println!("  {:<24} {} (not found)", r.id, colored_percentage(r.percentage));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Tier label used in reports
#[must_use]
pub fn tier_label(tier: Option<MatchTier>) -> String {
    tier.map_or_else(|| "empty".to_string(), |t| t.to_string())
}
