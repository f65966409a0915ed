//! The Newcastle-Ottawa criteria taxonomy.
//!
//! Process-wide, immutable, defined once per design as static tables (see
//! `data.rs`). A criterion belongs to exactly one domain, and criterion keys
//! are unique across all domains of a design, so a flat key index per design
//! is resolved once at first use and shared afterwards.

mod data;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::{DomainName, StudyDesign};
use crate::errors::{NosError, NosResult};

/// Stars obtainable in the Comparability domain, per the instrument: its
/// single criterion can award up to two stars.
pub const COMPARABILITY_MAX_STARS: u32 = 2;

/// Key of the two-star comparability criterion present in every design
pub const COMPARABILITY_KEY: &str = "comparability";

/// One answer option with its star weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: &'static str,
    pub label: &'static str,
    pub stars: u32,
}

/// A single assessable question with a fixed set of answer options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub key: &'static str,
    pub question: &'static str,
    pub options: &'static [AnswerOption],
}

impl Criterion {
    /// Star weight of the selected option, if the option exists
    pub fn stars_for(&self, option_key: &str) -> Option<u32> {
        self.options
            .iter()
            .find(|o| o.key == option_key)
            .map(|o| o.stars)
    }

    /// Highest weight among this criterion's options
    pub fn max_stars(&self) -> u32 {
        self.options.iter().map(|o| o.stars).max().unwrap_or(0)
    }
}

/// An ordered group of criteria under one domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainCriteria {
    pub name: DomainName,
    pub criteria: &'static [Criterion],
}

impl DomainCriteria {
    /// Stars obtainable in this domain: one per criterion, except
    /// Comparability which is capped at [`COMPARABILITY_MAX_STARS`].
    pub fn max_stars(&self) -> u32 {
        if self.name == DomainName::Comparability {
            COMPARABILITY_MAX_STARS
        } else {
            self.criteria.len() as u32
        }
    }
}

/// Read-only lookup over the three design taxonomies
#[derive(Debug)]
pub struct CriteriaCatalog {
    cohort: &'static [DomainCriteria],
    case_control: &'static [DomainCriteria],
    cross_sectional: &'static [DomainCriteria],
}

static CATALOG: CriteriaCatalog = CriteriaCatalog {
    cohort: data::COHORT,
    case_control: data::CASE_CONTROL,
    cross_sectional: data::CROSS_SECTIONAL,
};

static CRITERION_INDEX: Lazy<HashMap<(StudyDesign, &'static str), DomainName>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for design in StudyDesign::ALL {
        for domain in CATALOG.domains_for(design) {
            for criterion in domain.criteria {
                index.insert((design, criterion.key), domain.name);
            }
        }
    }
    log::debug!("criteria index resolved: {} entries", index.len());
    index
});

/// The process-wide criteria catalog
pub fn catalog() -> &'static CriteriaCatalog {
    &CATALOG
}

impl CriteriaCatalog {
    /// Ordered domains (with their criteria) for a design
    pub fn domains_for(&self, design: StudyDesign) -> &'static [DomainCriteria] {
        match design {
            StudyDesign::Cohort => self.cohort,
            StudyDesign::CaseControl => self.case_control,
            StudyDesign::CrossSectional => self.cross_sectional,
        }
    }

    /// Ordered criteria of one domain; fails when the design has no such
    /// domain (e.g. Exposure for a cohort study).
    pub fn criteria_for(
        &self,
        design: StudyDesign,
        domain: DomainName,
    ) -> NosResult<&'static [Criterion]> {
        self.domains_for(design)
            .iter()
            .find(|d| d.name == domain)
            .map(|d| d.criteria)
            .ok_or(NosError::UnknownDomain { design, domain })
    }

    /// The domain a criterion key belongs to, if any
    pub fn domain_of(&self, design: StudyDesign, criterion_key: &str) -> Option<DomainName> {
        CRITERION_INDEX.get(&(design, criterion_key)).copied()
    }

    /// Total number of criteria across all domains of a design
    pub fn criteria_count(&self, design: StudyDesign) -> usize {
        self.domains_for(design)
            .iter()
            .map(|d| d.criteria.len())
            .sum()
    }
}
