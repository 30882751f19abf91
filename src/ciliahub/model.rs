use crate::error::CiliaHubError;
use crate::normalize::{localization_key, normalize_text};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One row of the CiliaHub table.
///
/// Every field may be absent in the source JSON; absent fields deserialize
/// to the empty string and never match any predicate. External sources use
/// both snake_case and camelCase for the two ID fields, so both spellings
/// are accepted; the canonical naming is snake_case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneRecord {
    #[serde(default)]
    pub gene: String,
    #[serde(default, alias = "ensemblId")]
    pub ensembl_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub synonym: String,
    #[serde(default, alias = "omimId")]
    pub omim_id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub localization: String,
}

/// Presence/absence predicate over an optional field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresenceFilter {
    #[default]
    Any,
    HasValue,
    NoValue,
}

impl FromStr for PresenceFilter {
    type Err = CiliaHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "any" => Ok(Self::Any),
            "has" => Ok(Self::HasValue),
            "no" => Ok(Self::NoValue),
            other => Err(CiliaHubError::InvalidFilter(
                other.to_string(),
                "any, has or no",
            )),
        }
    }
}

/// OMIM predicate: presence/absence like [`PresenceFilter`], plus an
/// inclusive numeric `min-max` range over the parsed OMIM ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OmimFilter {
    #[default]
    Any,
    HasValue,
    NoValue,
    Range {
        min: u32,
        max: u32,
    },
}

impl FromStr for OmimFilter {
    type Err = CiliaHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "any" => return Ok(Self::Any),
            "has" => return Ok(Self::HasValue),
            "no" => return Ok(Self::NoValue),
            _ => {}
        }
        if let Some((lo, hi)) = s.split_once('-') {
            if let (Ok(min), Ok(max)) = (lo.trim().parse(), hi.trim().parse()) {
                return Ok(Self::Range { min, max });
            }
        }
        Err(CiliaHubError::InvalidFilter(
            s.to_string(),
            "any, has, no or MIN-MAX",
        ))
    }
}

/// Sort order for the filtered result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Gene,
    Omim,
    Localization,
    Relevance,
}

impl FromStr for SortKey {
    type Err = CiliaHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gene" => Ok(Self::Gene),
            "omim" => Ok(Self::Omim),
            "localization" => Ok(Self::Localization),
            "relevance" => Ok(Self::Relevance),
            other => Err(CiliaHubError::InvalidSortKey(other.to_string())),
        }
    }
}

/// The full query state for one evaluation: free-text query, field filters
/// and sort key. Text-like fields are stored normalized; the builder
/// methods apply the normalization so callers can pass raw user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub localization_filter: String,
    pub omim: OmimFilter,
    pub reference: PresenceFilter,
    pub synonym_substring: String,
    pub sort: SortKey,
}

impl QueryState {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = normalize_text(text);
        self
    }

    pub fn with_localization(mut self, localization: &str) -> Self {
        self.localization_filter = localization_key(localization);
        self
    }

    pub fn with_omim(mut self, omim: OmimFilter) -> Self {
        self.omim = omim;
        self
    }

    pub fn with_reference(mut self, reference: PresenceFilter) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_synonym(mut self, synonym: &str) -> Self {
        self.synonym_substring = normalize_text(synonym);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True iff no predicate is active. The engine answers such a query
    /// with the "prompt" state rather than the full table.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
            && self.localization_filter.is_empty()
            && self.omim == OmimFilter::Any
            && self.reference == PresenceFilter::Any
            && self.synonym_substring.is_empty()
    }
}
