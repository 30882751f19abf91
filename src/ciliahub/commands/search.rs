//! The filter/sort engine: one pure pass over the table.
//!
//! All active predicates must pass (inactive predicates are vacuously
//! true), then the surviving records are sorted stably by the query's sort
//! key. A query with no active predicate yields the prompt state, not the
//! full table — the search-only display is the contract, not a defect.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{GeneRecord, OmimFilter, PresenceFilter, QueryState, SortKey};
use crate::normalize::{localization_key, normalize_text};

pub const SEARCH_PROMPT: &str = "Enter a search term to explore the CiliaHub table.";

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalOutcome {
    /// No predicate active; show a prompt instead of the full table.
    Prompt,
    Results(Vec<GeneRecord>),
}

pub fn run(records: &[GeneRecord], query: &QueryState) -> Result<CmdResult> {
    match evaluate(records, query) {
        EvalOutcome::Prompt => {
            let mut result = CmdResult::default().with_prompt();
            result.add_message(CmdMessage::info(SEARCH_PROMPT));
            Ok(result)
        }
        EvalOutcome::Results(matched) => Ok(CmdResult::default().with_listed_records(matched)),
    }
}

/// Filter the table by the query's active predicates and sort the result.
/// Never errors: malformed or missing fields simply fail to match.
pub fn evaluate(records: &[GeneRecord], query: &QueryState) -> EvalOutcome {
    if query.is_blank() {
        return EvalOutcome::Prompt;
    }

    let mut matched: Vec<GeneRecord> = records
        .iter()
        .filter(|r| record_matches(r, query))
        .cloned()
        .collect();
    sort_records(&mut matched, query);
    EvalOutcome::Results(matched)
}

fn record_matches(record: &GeneRecord, query: &QueryState) -> bool {
    text_matches(record, &query.text)
        && localization_matches(record, &query.localization_filter)
        && omim_matches(record, query.omim)
        && presence_matches(&record.reference, query.reference)
        && synonym_matches(record, &query.synonym_substring)
}

/// Free-text predicate: the normalized query appears in at least one of the
/// seven searchable fields.
fn text_matches(record: &GeneRecord, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    [
        &record.gene,
        &record.ensembl_id,
        &record.synonym,
        &record.omim_id,
        &record.description,
        &record.reference,
        &record.localization,
    ]
    .iter()
    .any(|field| field_contains(field, text))
}

fn field_contains(field: &str, needle: &str) -> bool {
    !field.is_empty() && normalize_text(field).contains(needle)
}

/// Exact match on the normalized localization key, never substring:
/// "basal-body" does not match a record localized to "Basal Body, Cilia".
fn localization_matches(record: &GeneRecord, filter: &str) -> bool {
    filter.is_empty() || localization_key(&record.localization) == filter
}

fn omim_matches(record: &GeneRecord, filter: OmimFilter) -> bool {
    let omim = record.omim_id.trim();
    match filter {
        OmimFilter::Any => true,
        OmimFilter::HasValue => !omim.is_empty(),
        OmimFilter::NoValue => omim.is_empty(),
        OmimFilter::Range { min, max } => omim
            .parse::<u32>()
            .map(|id| id >= min && id <= max)
            .unwrap_or(false),
    }
}

fn presence_matches(field: &str, filter: PresenceFilter) -> bool {
    match filter {
        PresenceFilter::Any => true,
        PresenceFilter::HasValue => !field.trim().is_empty(),
        PresenceFilter::NoValue => field.trim().is_empty(),
    }
}

fn synonym_matches(record: &GeneRecord, substring: &str) -> bool {
    substring.is_empty() || field_contains(&record.synonym, substring)
}

fn sort_records(records: &mut [GeneRecord], query: &QueryState) {
    match query.sort {
        SortKey::Gene => {
            records.sort_by(|a, b| a.gene.to_lowercase().cmp(&b.gene.to_lowercase()));
        }
        SortKey::Omim => {
            records.sort_by_key(omim_number);
        }
        SortKey::Localization => {
            records.sort_by(|a, b| a.localization.cmp(&b.localization));
        }
        SortKey::Relevance => {
            records.sort_by(|a, b| {
                relevance_score(b, &query.text)
                    .cmp(&relevance_score(a, &query.text))
                    .then_with(|| a.gene.to_lowercase().cmp(&b.gene.to_lowercase()))
            });
        }
    }
}

/// Missing or unparseable OMIM IDs sort lowest.
fn omim_number(record: &GeneRecord) -> u32 {
    record.omim_id.trim().parse().unwrap_or(0)
}

/// Additive relevance heuristic, 0..=23 per record. Zero for every record
/// when the query text is empty.
pub fn relevance_score(record: &GeneRecord, text: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let mut score = 0;
    let gene = normalize_text(&record.gene);
    if gene.contains(text) {
        score += 10;
    }
    if gene.starts_with(text) {
        score += 5;
    }
    if field_contains(&record.description, text) {
        score += 3;
    }
    if field_contains(&record.synonym, text) {
        score += 2;
    }
    if field_contains(&record.ensembl_id, text) {
        score += 2;
    }
    if field_contains(&record.omim_id, text) {
        score += 1;
    }
    score
}
