//! In-memory study collection.

use im::Vector;

use crate::aggregation::{aggregate, PortfolioStats};
use crate::core::{Study, StudyDesign};

/// Sort orders for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    TotalStars,
    QualityTier,
    AssessmentDate,
}

/// The owned collection of assessed studies.
///
/// Backed by a persistent vector so [`Portfolio::snapshot`] is O(1): the
/// aggregator always observes a consistent set even if the portfolio is
/// mutated while a snapshot is being consumed. Storage order is insertion
/// order; any presentation ordering goes through [`Portfolio::sorted`].
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    studies: Vector<Study>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, study: Study) {
        log::debug!(
            "study added: {} ({})",
            study.metadata.study_name,
            study.study_design
        );
        self.studies.push_back(study);
    }

    /// Remove and return the study at `index`, if it exists
    pub fn remove(&mut self, index: usize) -> Option<Study> {
        if index >= self.studies.len() {
            return None;
        }
        let study = self.studies.remove(index);
        log::debug!("study removed: {}", study.metadata.study_name);
        Some(study)
    }

    pub fn clear(&mut self) {
        self.studies.clear();
    }

    pub fn len(&self) -> usize {
        self.studies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Study> {
        self.studies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Study> {
        self.studies.iter()
    }

    /// O(1) persistent copy of the current study set
    pub fn snapshot(&self) -> Vector<Study> {
        self.studies.clone()
    }

    /// Aggregate statistics over a snapshot of the current studies
    pub fn stats(&self) -> PortfolioStats {
        let snapshot = self.snapshot();
        aggregate(snapshot.iter())
    }

    /// Case-insensitive substring search across study name, authors, and
    /// journal.
    pub fn search(&self, term: &str) -> Vec<&Study> {
        let needle = term.to_lowercase();
        self.studies
            .iter()
            .filter(|study| {
                study.metadata.study_name.to_lowercase().contains(&needle)
                    || study.metadata.authors.to_lowercase().contains(&needle)
                    || study.metadata.journal.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn with_design(&self, design: StudyDesign) -> Vec<&Study> {
        self.studies
            .iter()
            .filter(|study| study.study_design == design)
            .collect()
    }

    /// Studies in presentation order: names ascending, stars descending,
    /// tiers best-first, dates newest-first.
    pub fn sorted(&self, key: SortKey) -> Vec<&Study> {
        let mut studies: Vec<&Study> = self.studies.iter().collect();
        match key {
            SortKey::Name => studies.sort_by(|a, b| {
                a.metadata
                    .study_name
                    .to_lowercase()
                    .cmp(&b.metadata.study_name.to_lowercase())
            }),
            SortKey::TotalStars => studies.sort_by(|a, b| b.total_stars.cmp(&a.total_stars)),
            SortKey::QualityTier => studies.sort_by(|a, b| a.quality_tier.cmp(&b.quality_tier)),
            SortKey::AssessmentDate => studies.sort_by(|a, b| b.assessed_at.cmp(&a.assessed_at)),
        }
        studies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Assessment, StudyMetadata};
    use chrono::{TimeZone, Utc};

    fn study(name: &str, journal: &str, design: StudyDesign, stars_answer: bool) -> Study {
        let mut assessment = Assessment::new();
        if stars_answer {
            assessment.select("comparability", "additional_factor");
        }
        Study::assess_at(
            StudyMetadata {
                study_name: name.to_string(),
                authors: "Lee A, Chen B".to_string(),
                publication_year: 2020,
                journal: journal.to_string(),
                ..Default::default()
            },
            design,
            assessment,
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn add_remove_roundtrip() {
        let mut portfolio = Portfolio::new();
        portfolio.add(study("A", "BMJ", StudyDesign::Cohort, false));
        portfolio.add(study("B", "Lancet", StudyDesign::CaseControl, false));
        assert_eq!(portfolio.len(), 2);

        let removed = portfolio.remove(0).unwrap();
        assert_eq!(removed.metadata.study_name, "A");
        assert_eq!(portfolio.len(), 1);
        assert!(portfolio.remove(5).is_none());
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut portfolio = Portfolio::new();
        portfolio.add(study("A", "BMJ", StudyDesign::Cohort, false));

        let snapshot = portfolio.snapshot();
        portfolio.add(study("B", "Lancet", StudyDesign::Cohort, false));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(portfolio.len(), 2);
    }

    #[test]
    fn stats_reflect_current_studies() {
        let mut portfolio = Portfolio::new();
        assert_eq!(portfolio.stats().total_studies, 0);

        portfolio.add(study("A", "BMJ", StudyDesign::Cohort, true));
        let stats = portfolio.stats();
        assert_eq!(stats.total_studies, 1);
        assert_eq!(stats.star_distribution[&2], 1);
    }

    #[test]
    fn search_matches_name_authors_journal() {
        let mut portfolio = Portfolio::new();
        portfolio.add(study("Hypertension cohort", "BMJ", StudyDesign::Cohort, false));
        portfolio.add(study("Diabetes sample", "Lancet", StudyDesign::CrossSectional, false));

        assert_eq!(portfolio.search("hyperten").len(), 1);
        assert_eq!(portfolio.search("LANCET").len(), 1);
        assert_eq!(portfolio.search("chen").len(), 2);
        assert!(portfolio.search("zebrafish").is_empty());
    }

    #[test]
    fn filter_and_sort() {
        let mut portfolio = Portfolio::new();
        portfolio.add(study("b-study", "BMJ", StudyDesign::Cohort, false));
        portfolio.add(study("A-study", "Lancet", StudyDesign::CaseControl, true));

        assert_eq!(portfolio.with_design(StudyDesign::Cohort).len(), 1);

        let by_name = portfolio.sorted(SortKey::Name);
        assert_eq!(by_name[0].metadata.study_name, "A-study");

        let by_stars = portfolio.sorted(SortKey::TotalStars);
        assert_eq!(by_stars[0].total_stars, 2);
    }
}
