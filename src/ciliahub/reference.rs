//! Classification of the semicolon-delimited `reference` field.
//!
//! A bare number is a PubMed ID, a `10.`-prefixed token or a doi.org URL is
//! a DOI, anything else starting with `http(s)://` is a generic URL, and
//! everything else renders literally. Pure function, unit-tested on its own
//! so renderers can rely on it without a DOM in sight.

use once_cell::sync::Lazy;
use regex::Regex;

static PUBMED_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static BARE_DOI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^10\.\d{4,}").unwrap());

const DOI_RESOLVER: &str = "https://doi.org/";
const PUBMED_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// One classified citation token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Pubmed(String),
    /// Bare DOI, resolver prefix stripped.
    Doi(String),
    Url(String),
    Plain(String),
}

impl Reference {
    pub fn classify(token: &str) -> Self {
        if PUBMED_ID.is_match(token) {
            return Self::Pubmed(token.to_string());
        }
        if let Some(doi) = token.strip_prefix(DOI_RESOLVER) {
            return Self::Doi(doi.to_string());
        }
        if BARE_DOI.is_match(token) {
            return Self::Doi(token.to_string());
        }
        if token.starts_with("http://") || token.starts_with("https://") {
            return Self::Url(token.to_string());
        }
        Self::Plain(token.to_string())
    }

    /// The text a renderer should display for this token.
    pub fn label(&self) -> &str {
        match self {
            Self::Pubmed(id) => id,
            Self::Doi(doi) => doi,
            Self::Url(url) => url,
            Self::Plain(text) => text,
        }
    }

    /// The link target, if this token has one.
    pub fn link(&self) -> Option<String> {
        match self {
            Self::Pubmed(id) => Some(format!("{}{}/", PUBMED_BASE, id)),
            Self::Doi(doi) => Some(format!("{}{}", DOI_RESOLVER, doi)),
            Self::Url(url) => Some(url.clone()),
            Self::Plain(_) => None,
        }
    }
}

/// Split a raw `reference` field into classified tokens. Empty tokens
/// disappear; an empty or missing field yields an empty list.
pub fn parse_references(field: &str) -> Vec<Reference> {
    field
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Reference::classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_is_pubmed() {
        let r = Reference::classify("20080638");
        assert_eq!(r, Reference::Pubmed("20080638".into()));
        assert_eq!(
            r.link().unwrap(),
            "https://pubmed.ncbi.nlm.nih.gov/20080638/"
        );
    }

    #[test]
    fn doi_forms_normalize_to_bare_doi() {
        let bare = Reference::classify("10.1038/nature12345");
        let prefixed = Reference::classify("https://doi.org/10.1038/nature12345");
        assert_eq!(bare, Reference::Doi("10.1038/nature12345".into()));
        assert_eq!(bare, prefixed);
        assert_eq!(bare.link().unwrap(), "https://doi.org/10.1038/nature12345");
    }

    #[test]
    fn short_registrant_is_not_a_doi() {
        // `10.\d{4,}` needs at least four digits after the dot.
        assert_eq!(
            Reference::classify("10.12/x"),
            Reference::Plain("10.12/x".into())
        );
    }

    #[test]
    fn http_token_is_url() {
        let r = Reference::classify("https://www.example.org/paper");
        assert_eq!(r, Reference::Url("https://www.example.org/paper".into()));
        assert_eq!(r.link().unwrap(), "https://www.example.org/paper");
    }

    #[test]
    fn anything_else_is_literal() {
        let r = Reference::classify("Smith et al. 2019");
        assert_eq!(r, Reference::Plain("Smith et al. 2019".into()));
        assert_eq!(r.link(), None);
    }

    #[test]
    fn parse_splits_on_semicolons_and_drops_empties() {
        let refs = parse_references("20080638; 10.1038/nature12345;; https://example.org ;");
        assert_eq!(refs.len(), 3);
        assert!(matches!(refs[0], Reference::Pubmed(_)));
        assert!(matches!(refs[1], Reference::Doi(_)));
        assert!(matches!(refs[2], Reference::Url(_)));
        assert!(parse_references("").is_empty());
    }
}
