//! Summary statistics over the cilia-related slice of the table.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::GeneRecord;

/// Localization keyword buckets, checked in order; the first bucket with a
/// matching keyword wins.
pub const CILIA_CATEGORIES: &[(&str, &[&str])] = &[
    ("cilia", &["cilia", "cilium", "ciliary"]),
    ("transition zone", &["transition zone", "transition-zone"]),
    ("basal body", &["basal body", "basal-body", "centriole"]),
    ("flagella", &["flagella", "flagellum"]),
    (
        "cilia associated",
        &[
            "cilia associated",
            "ciliary associated",
            "cilia-associated",
            "ciliary-associated",
        ],
    ),
];

/// Category for a raw localization value, or `None` if the gene is not
/// cilia-related.
pub fn cilia_category(localization: &str) -> Option<&'static str> {
    let loc = localization.trim().to_lowercase();
    if loc.is_empty() {
        return None;
    }
    CILIA_CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| loc.contains(k)))
        .map(|(name, _)| *name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsReport {
    pub total_cilia_genes: usize,
    pub unique_categories: usize,
    pub with_omim: usize,
    pub with_references: usize,
    /// Category name and gene count, count descending.
    pub category_counts: Vec<(String, usize)>,
}

pub fn run(records: &[GeneRecord]) -> Result<CmdResult> {
    let report = build_report(records);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} cilia-related genes across {} localization categories",
        report.total_cilia_genes, report.unique_categories
    )));
    Ok(result.with_stats(report))
}

pub fn build_report(records: &[GeneRecord]) -> StatsReport {
    let cilia_genes: Vec<(&GeneRecord, &'static str)> = records
        .iter()
        .filter_map(|r| cilia_category(&r.localization).map(|c| (r, c)))
        .collect();

    let mut category_counts: Vec<(String, usize)> = Vec::new();
    for (_, category) in &cilia_genes {
        match category_counts.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => category_counts.push((category.to_string(), 1)),
        }
    }
    category_counts.sort_by(|a, b| b.1.cmp(&a.1));

    StatsReport {
        total_cilia_genes: cilia_genes.len(),
        unique_categories: category_counts.len(),
        with_omim: cilia_genes
            .iter()
            .filter(|(r, _)| !r.omim_id.trim().is_empty())
            .count(),
        with_references: cilia_genes
            .iter()
            .filter(|(r, _)| !r.reference.trim().is_empty())
            .count(),
        category_counts,
    }
}
