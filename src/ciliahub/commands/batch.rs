//! Batch lookup: many gene names or IDs at once.
//!
//! Tokens match the `gene`, `ensembl_id` and `omim_id` fields exactly
//! (case-insensitive) and the `synonym` field by substring. Every token is
//! counted in the usage counters whether or not it matched anything.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CiliaHubError, Result};
use crate::model::GeneRecord;
use crate::normalize::normalize_text;
use crate::usage::UsageCounters;

pub fn run(
    records: &[GeneRecord],
    counters: &mut UsageCounters,
    input: &str,
) -> Result<CmdResult> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(CiliaHubError::EmptyBatchInput);
    }

    for token in &tokens {
        counters.record(token);
    }

    let matched: Vec<GeneRecord> = records
        .iter()
        .filter(|record| tokens.iter().any(|token| token_matches(record, token)))
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_records(matched);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info("No matching genes found."));
    }
    Ok(result)
}

/// Split on runs of whitespace, commas and newlines; lowercase each token.
fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(normalize_text)
        .collect()
}

fn token_matches(record: &GeneRecord, token: &str) -> bool {
    normalize_text(&record.gene) == token
        || normalize_text(&record.ensembl_id) == token
        || normalize_text(&record.omim_id) == token
        || (!record.synonym.is_empty() && normalize_text(&record.synonym).contains(token))
}
