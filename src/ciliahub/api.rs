//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every query against the gene table, regardless of the
//! UI driving it.
//!
//! One [`CiliaHub`] instance is constructed per session. It owns the
//! immutable gene table, the suggestion index built from it, and the usage
//! counters — the module-level globals of earlier prototypes, made
//! explicit. It is generic over [`UsageStore`] so the counters can live in
//! a file (production) or in memory (tests).
//!
//! The facade records queries and persists counters; the actual filtering,
//! sorting, export and stats logic lives in `commands/*.rs`.

use crate::commands;
use crate::commands::suggest::SuggestionIndex;
use crate::dataset::GeneTable;
use crate::error::Result;
use crate::model::QueryState;
use crate::store::UsageStore;
use crate::usage::UsageCounters;
use std::path::PathBuf;

pub struct CiliaHub<S: UsageStore> {
    table: GeneTable,
    suggestions: SuggestionIndex,
    counters: UsageCounters,
    store: S,
}

impl<S: UsageStore> CiliaHub<S> {
    /// Build a session over an already-loaded table, restoring whatever
    /// counters the store holds.
    pub fn new(table: GeneTable, store: S) -> Result<Self> {
        let counters = store.load()?;
        let suggestions = SuggestionIndex::build(table.records());
        Ok(Self {
            table,
            suggestions,
            counters,
            store,
        })
    }

    pub fn table(&self) -> &GeneTable {
        &self.table
    }

    pub fn counters(&self) -> &UsageCounters {
        &self.counters
    }

    /// Evaluate a query. Non-empty free text is counted as a search before
    /// evaluation, matched or not.
    pub fn search(&mut self, query: &QueryState) -> Result<commands::CmdResult> {
        if !query.text.is_empty() {
            self.counters.record(&query.text);
            self.store.save(&self.counters)?;
        }
        commands::search::run(self.table.records(), query)
    }

    /// Batch lookup over a raw block of gene names/IDs. Every token counts
    /// toward usage, matched or not.
    pub fn batch(&mut self, input: &str) -> Result<commands::CmdResult> {
        let result = commands::batch::run(self.table.records(), &mut self.counters, input)?;
        self.store.save(&self.counters)?;
        Ok(result)
    }

    /// Export the full table as CSV.
    pub fn export(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(self.table.records(), false, output)
    }

    /// Evaluate a query and export the result set as CSV. A blank query
    /// exports nothing (prompt contract applies to exports too).
    pub fn export_filtered(
        &mut self,
        query: &QueryState,
        output: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        let evaluated = self.search(query)?;
        if evaluated.prompt {
            return Ok(evaluated);
        }
        commands::export::run(&evaluated.listed_records, true, output)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(self.table.records())
    }

    pub fn popular(&self, n: usize) -> Result<commands::CmdResult> {
        commands::popular::run(&self.counters, n)
    }

    pub fn reset_counters(&mut self) -> Result<commands::CmdResult> {
        commands::popular::reset(&mut self.counters, &mut self.store)
    }

    pub fn suggest(&self, query: &str) -> Result<commands::CmdResult> {
        commands::suggest::run(&self.suggestions, query)
    }
}

pub use commands::search::{EvalOutcome, SEARCH_PROMPT};
pub use commands::stats::StatsReport;
pub use commands::suggest::{Suggestion, SuggestionKind};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_table;
    use crate::store::memory::InMemoryStore;

    fn session() -> CiliaHub<InMemoryStore> {
        CiliaHub::new(sample_table(), InMemoryStore::new()).unwrap()
    }

    #[test]
    fn search_counts_and_persists_free_text_queries() {
        let mut hub = session();
        hub.search(&QueryState::default().with_text("BBS1")).unwrap();
        hub.search(&QueryState::default().with_text("bbs1")).unwrap();
        assert_eq!(hub.counters().count_of("bbs1"), 2);

        // Counters survived into the store, not just this instance.
        assert_eq!(hub.store.load().unwrap().count_of("bbs1"), 2);
    }

    #[test]
    fn filter_only_queries_are_not_counted() {
        let mut hub = session();
        hub.search(&QueryState::default().with_localization("basal-body"))
            .unwrap();
        assert!(hub.counters().is_empty());
    }

    #[test]
    fn batch_tokens_land_in_the_counters() {
        let mut hub = session();
        // Three records: BBS1, IFT88, and CEP290 via the synonym BBS14.
        let result = hub.batch("BBS1, ift88").unwrap();
        assert_eq!(result.listed_records.len(), 3);
        assert_eq!(hub.counters().count_of("bbs1"), 1);
        assert_eq!(hub.counters().count_of("ift88"), 1);
    }

    #[test]
    fn counters_are_restored_from_the_store() {
        let mut store = InMemoryStore::new();
        let mut counters = UsageCounters::new();
        counters.record("cep290");
        store.save(&counters).unwrap();

        let hub = CiliaHub::new(sample_table(), store).unwrap();
        assert_eq!(hub.counters().count_of("cep290"), 1);
    }

    #[test]
    fn blank_filtered_export_keeps_the_prompt() {
        let mut hub = session();
        let result = hub
            .export_filtered(&QueryState::default(), Some("/tmp/never-written.csv".into()))
            .unwrap();
        assert!(result.prompt);
        assert!(result.written_path.is_none());
    }

    #[test]
    fn reset_clears_session_and_store() {
        let mut hub = session();
        hub.batch("BBS1").unwrap();
        hub.reset_counters().unwrap();
        assert!(hub.counters().is_empty());
        assert!(hub.store.load().unwrap().is_empty());
    }
}
