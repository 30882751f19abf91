//! End-to-end exercises of the public API over a small table, mirroring the
//! behavior the CLI depends on.

use ciliahub::api::CiliaHub;
use ciliahub::dataset::GeneTable;
use ciliahub::model::{GeneRecord, OmimFilter, QueryState, SortKey};
use ciliahub::store::memory::InMemoryStore;

fn table() -> GeneTable {
    GeneTable::new(vec![
        GeneRecord {
            gene: "BBS1".to_string(),
            omim_id: "209900".to_string(),
            synonym: "BBS2L2".to_string(),
            localization: "Basal Body".to_string(),
            ..GeneRecord::default()
        },
        GeneRecord {
            gene: "IFT88".to_string(),
            localization: "Basal Body, Cilia".to_string(),
            ..GeneRecord::default()
        },
    ])
}

fn hub() -> CiliaHub<InMemoryStore> {
    CiliaHub::new(table(), InMemoryStore::new()).unwrap()
}

#[test]
fn omim_presence_returns_only_records_with_ids() {
    let mut hub = hub();
    let result = hub
        .search(&QueryState::default().with_omim(OmimFilter::HasValue))
        .unwrap();
    let genes: Vec<&str> = result
        .listed_records
        .iter()
        .map(|r| r.gene.as_str())
        .collect();
    assert_eq!(genes, vec!["BBS1"]);
}

#[test]
fn text_query_matches_gene_substring() {
    let mut hub = hub();
    let result = hub.search(&QueryState::default().with_text("bbs")).unwrap();
    let genes: Vec<&str> = result
        .listed_records
        .iter()
        .map(|r| r.gene.as_str())
        .collect();
    assert_eq!(genes, vec!["BBS1"]);
}

#[test]
fn blank_query_is_a_prompt_not_the_full_table() {
    let mut hub = hub();
    let result = hub.search(&QueryState::default()).unwrap();
    assert!(result.prompt);
    assert!(result.listed_records.is_empty());
}

#[test]
fn batch_lookup_matches_both_and_counts_tokens() {
    let mut hub = hub();
    let result = hub.batch("BBS1, ift88").unwrap();
    assert_eq!(result.listed_records.len(), 2);
    assert_eq!(hub.counters().count_of("bbs1"), 1);
    assert_eq!(hub.counters().count_of("ift88"), 1);
}

#[test]
fn localization_filter_uses_exact_normalized_keys() {
    let mut hub = hub();

    // "basal-body" matches the record whose raw localization is "Basal Body"...
    let result = hub
        .search(&QueryState::default().with_localization("basal-body"))
        .unwrap();
    let genes: Vec<&str> = result
        .listed_records
        .iter()
        .map(|r| r.gene.as_str())
        .collect();
    assert_eq!(genes, vec!["BBS1"]);

    // ...and not the one localized to "Basal Body, Cilia" (different key).
    let result = hub
        .search(&QueryState::default().with_localization("basal-body-cilia"))
        .unwrap();
    let genes: Vec<&str> = result
        .listed_records
        .iter()
        .map(|r| r.gene.as_str())
        .collect();
    assert_eq!(genes, vec!["IFT88"]);
}

#[test]
fn relevance_sort_prefers_gene_hits() {
    let mut hub = hub();
    let result = hub
        .search(
            &QueryState::default()
                .with_text("bbs2l2")
                .with_sort(SortKey::Relevance),
        )
        .unwrap();
    assert_eq!(result.listed_records.len(), 1);
    assert_eq!(result.listed_records[0].gene, "BBS1");
}
