use super::UsageStore;
use crate::error::Result;
use crate::usage::UsageCounters;

/// In-memory usage-counter store for testing and development.
/// Does NOT persist data beyond its own lifetime.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<UsageCounters>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageStore for InMemoryStore {
    fn load(&self) -> Result<UsageCounters> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, counters: &UsageCounters) -> Result<()> {
        self.saved = Some(counters.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.saved = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::dataset::GeneTable;
    use crate::model::GeneRecord;

    fn record(
        gene: &str,
        ensembl_id: &str,
        description: &str,
        synonym: &str,
        omim_id: &str,
        reference: &str,
        localization: &str,
    ) -> GeneRecord {
        GeneRecord {
            gene: gene.to_string(),
            ensembl_id: ensembl_id.to_string(),
            description: description.to_string(),
            synonym: synonym.to_string(),
            omim_id: omim_id.to_string(),
            reference: reference.to_string(),
            localization: localization.to_string(),
        }
    }

    /// A small, realistic slice of the CiliaHub table covering every
    /// combination the predicates care about: present/absent OMIM IDs and
    /// references, multi-part localizations, and overlapping synonyms.
    pub fn sample_table() -> GeneTable {
        GeneTable::new(vec![
            record(
                "BBS1",
                "ENSG00000174483",
                "Bardet-Biedl syndrome 1 protein",
                "BBS2L2, FLJ23590",
                "209901",
                "12118255; 10.1038/nature12345",
                "Basal Body",
            ),
            record(
                "IFT88",
                "ENSG00000032742",
                "Intraflagellar transport protein 88",
                "TG737, TTC10",
                "600595",
                "",
                "Axoneme",
            ),
            record(
                "CEP290",
                "ENSG00000198707",
                "Centrosomal protein of 290 kDa",
                "NPHP6, BBS14",
                "610142",
                "17345604",
                "Transition Zone",
            ),
            record(
                "ARL13B",
                "ENSG00000169379",
                "ADP-ribosylation factor-like protein 13B",
                "",
                "",
                "https://doi.org/10.1083/jcb.201012116",
                "Basal Body, Cilia",
            ),
            record("NPHP1", "", "Nephrocystin-1", "JBTS4", "", "", ""),
        ])
    }
}
