//! The fixed reference catalog and framework summaries.

use crate::error::{CatalogError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Accepts "Basel II", "basel-ii", "BASEL_2", "baselii", ...
static BASEL_II_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*basel[\s_-]*(ii|2)\s*$").expect("Invalid regex: Basel II name")
});

const BASEL_II_SUMMARY: &str = "Basel II Capital Accord is an international banking regulation that requires financial institutions \
to maintain sufficient capital to cover their risks. It focuses on three pillars: \
1) Minimum capital requirements, 2) Supervisory review, and 3) Market discipline. \
For credit risk, financial institutions must evaluate borrower risk accurately to avoid default.";

/// Authoring order matters: `list_references` returns entries in this order.
const REFERENCES: [(&str, &str); 5] = [
    (
        "Statistica Reference",
        "https://www3.stat.sinica.edu.tw/statistica/oldpdf/A28n535.pdf",
    ),
    (
        "HKMA Alternative Credit Scoring",
        "https://www.hkma.gov.hk/media/eng/doc/key-functions/financial-infrastructure/alternative_credit_scoring.pdf",
    ),
    (
        "World Bank Credit Scoring Guidelines",
        "https://thedocs.worldbank.org/en/doc/935891585869698451-0130022020/original/CREDITSCORINGAPPROACHESGUIDELINESFINALWEB.pdf",
    ),
    (
        "Towards Data Science Credit Risk Modeling",
        "https://towardsdatascience.com/how-to-develop-a-credit-risk-model-and-scorecard-91335fc01f03",
    ),
    (
        "Credit Risk in Finance",
        "https://corporatefinanceinstitute.com/resources/commercial-lending/credit-risk/",
    ),
];

/// A named link to a reading on credit risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub url: String,
}

/// Regulatory frameworks the catalog can summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    /// The Basel II Capital Accord.
    BaselII,
}

impl Framework {
    /// Human-readable name of the framework.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BaselII => "Basel II",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Framework {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        if BASEL_II_PATTERN.is_match(s) {
            Ok(Self::BaselII)
        } else {
            Err(CatalogError::UnknownFramework(s.trim().to_string()))
        }
    }
}

/// Static holder for credit-risk reading material and framework summaries.
///
/// The reference list is built once in [`ReferenceCatalog::new`] and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    references: Vec<ReferenceEntry>,
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceCatalog {
    /// Build the catalog with its fixed reference list.
    pub fn new() -> Self {
        let references = REFERENCES
            .iter()
            .map(|(name, url)| ReferenceEntry {
                name: (*name).to_string(),
                url: (*url).to_string(),
            })
            .collect();

        Self { references }
    }

    /// Canned summary of a regulatory framework.
    pub fn summarize(&self, framework: Framework) -> &'static str {
        match framework {
            Framework::BaselII => BASEL_II_SUMMARY,
        }
    }

    /// Shorthand for `summarize(Framework::BaselII)`.
    pub fn summarize_basel_ii(&self) -> &'static str {
        self.summarize(Framework::BaselII)
    }

    /// Summarize a framework given by name, e.g. `"Basel II"`.
    pub fn summarize_named(&self, name: &str) -> Result<&'static str> {
        name.parse::<Framework>().map(|framework| self.summarize(framework))
    }

    /// All references, in authoring order.
    pub fn list_references(&self) -> &[ReferenceEntry] {
        &self.references
    }

    /// Look up the URL of a reference by its exact name.
    pub fn url_for(&self, name: &str) -> Option<&str> {
        self.references
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.url.as_str())
    }

    /// Number of references in the catalog.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    // ==================== list_references tests ====================

    #[test]
    fn test_list_references_fixed_set() {
        let catalog = ReferenceCatalog::new();
        let names: Vec<&str> = catalog
            .list_references()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec![
                "Statistica Reference",
                "HKMA Alternative Credit Scoring",
                "World Bank Credit Scoring Guidelines",
                "Towards Data Science Credit Risk Modeling",
                "Credit Risk in Finance",
            ]
        );
    }

    #[test]
    fn test_list_references_well_formed() {
        let catalog = ReferenceCatalog::new();
        for entry in catalog.list_references() {
            assert!(!entry.name.trim().is_empty());
            let rest = entry
                .url
                .strip_prefix("https://")
                .expect("reference URLs use https");
            let host = rest.split('/').next().unwrap_or("");
            assert!(host.contains('.'), "bad host in {}", entry.url);
            assert!(!entry.url.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_list_references_unique_names() {
        let catalog = ReferenceCatalog::new();
        let unique: HashSet<&str> = catalog
            .list_references()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(unique.len(), catalog.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_url_for() {
        let catalog = ReferenceCatalog::new();
        assert_eq!(
            catalog.url_for("Credit Risk in Finance"),
            Some("https://corporatefinanceinstitute.com/resources/commercial-lending/credit-risk/")
        );
        assert_eq!(catalog.url_for("credit risk in finance"), None);
    }

    // ==================== summarize tests ====================

    #[test]
    fn test_summarize_basel_ii_mentions_pillars() {
        let catalog = ReferenceCatalog::new();
        let summary = catalog.summarize(Framework::BaselII);

        assert!(summary.contains("three pillars"));
        assert!(summary.contains("Minimum capital requirements"));
        assert!(summary.contains("Supervisory review"));
        assert!(summary.contains("Market discipline"));
        assert_eq!(summary, catalog.summarize_basel_ii());
    }

    #[test]
    fn test_summarize_named() {
        let catalog = ReferenceCatalog::new();
        assert!(catalog.summarize_named("Basel II").is_ok());
        assert_eq!(
            catalog.summarize_named("Basel III"),
            Err(CatalogError::UnknownFramework("Basel III".to_string()))
        );
    }

    // ==================== Framework parsing tests ====================

    #[test]
    fn test_framework_from_str_variants() {
        for name in ["Basel II", "basel-ii", "BASEL_2", "baselii", "  Basel 2 "] {
            assert_eq!(name.parse::<Framework>(), Ok(Framework::BaselII), "{name}");
        }
    }

    #[test]
    fn test_framework_from_str_unknown() {
        assert!("Basel".parse::<Framework>().is_err());
        assert!("Basel IV".parse::<Framework>().is_err());
        assert!("".parse::<Framework>().is_err());
    }

    #[test]
    fn test_framework_display() {
        assert_eq!(Framework::BaselII.to_string(), "Basel II");
    }

    #[test]
    fn test_catalog_serialization_keeps_order() {
        let catalog = ReferenceCatalog::new();
        let json = serde_json::to_string(&catalog).unwrap();
        let statistica = json.find("Statistica Reference").unwrap();
        let cfi = json.find("Credit Risk in Finance").unwrap();
        assert!(statistica < cfi);
    }
}
