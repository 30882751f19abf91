//! Search-as-you-type suggestions from an index built once per session.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::GeneRecord;
use crate::normalize::normalize_text;
use std::collections::HashSet;

const MAX_SUGGESTIONS: usize = 8;
const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Gene,
    Synonym,
    Ensembl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}

/// Deduplicated, insertion-ordered pools of suggestible strings.
#[derive(Debug, Default)]
pub struct SuggestionIndex {
    genes: Vec<String>,
    synonyms: Vec<String>,
    ensembl_ids: Vec<String>,
}

impl SuggestionIndex {
    pub fn build(records: &[GeneRecord]) -> Self {
        let mut index = Self::default();
        let mut seen = HashSet::new();

        for record in records {
            if !record.gene.is_empty() && seen.insert(record.gene.clone()) {
                index.genes.push(record.gene.clone());
            }
            for synonym in record.synonym.split(',') {
                let synonym = synonym.trim();
                if !synonym.is_empty() && seen.insert(synonym.to_string()) {
                    index.synonyms.push(synonym.to_string());
                }
            }
            if !record.ensembl_id.is_empty() && seen.insert(record.ensembl_id.clone()) {
                index.ensembl_ids.push(record.ensembl_id.clone());
            }
        }
        index
    }

    /// Case-insensitive substring suggestions, genes before synonyms before
    /// Ensembl IDs, capped at eight. Queries under two characters suggest
    /// nothing.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = normalize_text(query);
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        let pools = [
            (&self.genes, SuggestionKind::Gene),
            (&self.synonyms, SuggestionKind::Synonym),
            (&self.ensembl_ids, SuggestionKind::Ensembl),
        ];
        for (pool, kind) in pools {
            for candidate in pool {
                if suggestions.len() >= MAX_SUGGESTIONS {
                    return suggestions;
                }
                if candidate.to_lowercase().contains(&query) {
                    suggestions.push(Suggestion {
                        text: candidate.clone(),
                        kind,
                    });
                }
            }
        }
        suggestions
    }
}

pub fn run(index: &SuggestionIndex, query: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_suggestions(index.suggest(query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_table;

    #[test]
    fn short_queries_suggest_nothing() {
        let table = sample_table();
        let index = SuggestionIndex::build(table.records());
        assert!(index.suggest("").is_empty());
        assert!(index.suggest("b").is_empty());
        assert!(!index.suggest("bb").is_empty());
    }

    #[test]
    fn genes_come_before_synonyms_and_ensembl_ids() {
        let table = sample_table();
        let index = SuggestionIndex::build(table.records());

        let suggestions = index.suggest("bbs");
        let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["BBS1", "BBS2L2", "BBS14"]);
        assert_eq!(suggestions[0].kind, SuggestionKind::Gene);
        assert_eq!(suggestions[1].kind, SuggestionKind::Synonym);
    }

    #[test]
    fn suggestions_are_capped_at_eight() {
        let records: Vec<GeneRecord> = (0..20)
            .map(|i| GeneRecord {
                gene: format!("CFAP{}", i),
                ..GeneRecord::default()
            })
            .collect();
        let index = SuggestionIndex::build(&records);
        assert_eq!(index.suggest("cfap").len(), 8);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let table = sample_table();
        let index = SuggestionIndex::build(table.records());

        let suggestions = index.suggest("00000327");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].text, "ENSG00000032742");
        assert_eq!(suggestions[0].kind, SuggestionKind::Ensembl);
    }

    #[test]
    fn index_deduplicates_across_records() {
        let records = vec![
            GeneRecord {
                gene: "BBS1".into(),
                synonym: "SHARED".into(),
                ..GeneRecord::default()
            },
            GeneRecord {
                gene: "BBS1".into(),
                synonym: "SHARED".into(),
                ..GeneRecord::default()
            },
        ];
        let index = SuggestionIndex::build(&records);
        assert_eq!(index.suggest("bbs1").len(), 1);
        assert_eq!(index.suggest("shared").len(), 1);
    }
}
