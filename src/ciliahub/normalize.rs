//! The two normalization functions shared by filtering and indexing.
//!
//! Both sides of every comparison go through the same function: query text
//! and record fields through [`normalize_text`], the localization filter
//! value and each record's localization through [`localization_key`]. If the
//! two sides ever normalized differently, exact-match localization filtering
//! would silently return zero rows.

/// Trim and lowercase. Applied to query text and every searchable field
/// before substring comparison.
pub fn normalize_text(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Stable filter key for a localization value: lowercase, then collapse
/// every run of whitespace and/or commas into a single hyphen.
///
/// "Basal Body, Cilia" and "basal  body,cilia" both map to
/// "basal-body-cilia". Idempotent: hyphens pass through untouched.
pub fn localization_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    let mut pending_sep = false;
    for c in s.trim().chars() {
        if c.is_whitespace() || c == ',' {
            pending_sep = true;
            continue;
        }
        if pending_sep {
            key.push('-');
            pending_sep = false;
        }
        for lc in c.to_lowercase() {
            key.push(lc);
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_trims_and_lowercases() {
        assert_eq!(normalize_text("  BBS1 "), "bbs1");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn localization_key_collapses_separator_runs() {
        assert_eq!(localization_key("Basal Body"), "basal-body");
        assert_eq!(localization_key("Basal Body, Cilia"), "basal-body-cilia");
        assert_eq!(localization_key("Transition  Zone"), "transition-zone");
        assert_eq!(localization_key(" Axoneme "), "axoneme");
    }

    #[test]
    fn localization_key_is_idempotent() {
        for raw in ["Basal Body, Cilia", "  Transition Zone ", "axoneme", ""] {
            let once = localization_key(raw);
            assert_eq!(localization_key(&once), once);
        }
    }

    #[test]
    fn localization_key_keeps_existing_hyphens() {
        assert_eq!(localization_key("basal-body"), "basal-body");
    }
}
