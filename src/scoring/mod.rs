//! Star tallying for a single assessment.
//!
//! Pure functions of (assessment, design, catalog); no hidden state, so
//! scoring the same input twice always yields the same result.

use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, Criterion, COMPARABILITY_KEY};
use crate::core::{Assessment, DomainName, StudyDesign};

/// Stars earned in one domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBreakdown {
    pub name: DomainName,
    pub stars: u32,
    pub max_stars: u32,
}

impl DomainBreakdown {
    pub fn percentage(&self) -> f64 {
        if self.max_stars == 0 {
            0.0
        } else {
            f64::from(self.stars) / f64::from(self.max_stars) * 100.0
        }
    }
}

/// Scorer output for one study, ordered as the catalog orders domains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub domains: Vec<DomainBreakdown>,
    pub total_stars: u32,
}

impl ScoreResult {
    pub fn domain(&self, name: DomainName) -> Option<&DomainBreakdown> {
        self.domains.iter().find(|d| d.name == name)
    }
}

/// Tally stars for an assessment against the design's catalog.
///
/// Criteria missing from the assessment score zero stars. Answer keys that
/// do not belong to any criterion of the design are ignored on purpose:
/// extra metadata may travel in the answer map without failing the scorer.
pub fn score(assessment: &Assessment, design: StudyDesign) -> ScoreResult {
    let mut domains = Vec::new();
    let mut total_stars = 0;

    for domain in catalog().domains_for(design) {
        let stars: u32 = domain
            .criteria
            .iter()
            .filter_map(|criterion| {
                assessment
                    .response(criterion.key)
                    .map(|option| criterion_stars(criterion, option))
            })
            .sum();

        total_stars += stars;
        domains.push(DomainBreakdown {
            name: domain.name,
            stars,
            max_stars: domain.max_stars(),
        });
    }

    ScoreResult {
        domains,
        total_stars,
    }
}

/// Weight of the selected option.
///
/// The `comparability` criterion awards exactly 1 star for `most_important`
/// and exactly 2 for `additional_factor` in every design, independent of
/// the literal weight table. An option key absent from the table scores 0.
fn criterion_stars(criterion: &Criterion, option_key: &str) -> u32 {
    if criterion.key == COMPARABILITY_KEY {
        match option_key {
            "most_important" => return 1,
            "additional_factor" => return 2,
            _ => {}
        }
    }
    criterion.stars_for(option_key).unwrap_or(0)
}

/// Completion state of a partially entered assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProgress {
    pub completed: usize,
    pub total: usize,
}

impl AssessmentProgress {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Count answered criteria for the design. Answers that do not match a
/// catalog criterion do not count toward completion.
pub fn assessment_progress(assessment: &Assessment, design: StudyDesign) -> AssessmentProgress {
    let total = catalog().criteria_count(design);
    let completed = assessment
        .iter()
        .filter(|(key, _)| catalog().domain_of(design, key).is_some())
        .count();
    AssessmentProgress { completed, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_assessment_scores_zero_everywhere() {
        for design in StudyDesign::ALL {
            let result = score(&Assessment::new(), design);
            assert_eq!(result.total_stars, 0);
            for domain in &result.domains {
                assert_eq!(domain.stars, 0);
            }
        }
    }

    #[test]
    fn comparability_domain_max_is_always_two() {
        for design in StudyDesign::ALL {
            let result = score(&Assessment::new(), design);
            let comparability = result.domain(DomainName::Comparability).unwrap();
            assert_eq!(comparability.max_stars, 2);
        }
    }

    #[test]
    fn comparability_override_awards_two_stars() {
        for design in StudyDesign::ALL {
            let assessment = Assessment::new().with("comparability", "additional_factor");
            let result = score(&assessment, design);
            assert_eq!(result.total_stars, 2);
            assert_eq!(result.domain(DomainName::Comparability).unwrap().stars, 2);
        }
    }

    #[test]
    fn comparability_most_important_awards_one_star() {
        let assessment = Assessment::new().with("comparability", "most_important");
        let result = score(&assessment, StudyDesign::CaseControl);
        assert_eq!(result.total_stars, 1);
    }

    #[test]
    fn unknown_option_key_scores_zero() {
        let assessment = Assessment::new().with("comparability", "not_an_option");
        let result = score(&assessment, StudyDesign::Cohort);
        assert_eq!(result.total_stars, 0);
    }

    #[test]
    fn unknown_criterion_key_is_ignored() {
        let base = Assessment::new().with("outcome_not_present", "yes");
        let with_extra = base.clone().with("reviewer_initials", "KB");

        assert_eq!(
            score(&base, StudyDesign::Cohort),
            score(&with_extra, StudyDesign::Cohort)
        );
    }

    #[test]
    fn criterion_of_another_design_is_ignored() {
        // same_method only exists for case-control studies
        let assessment = Assessment::new().with("same_method", "yes");
        assert_eq!(score(&assessment, StudyDesign::Cohort).total_stars, 0);
        assert_eq!(score(&assessment, StudyDesign::CaseControl).total_stars, 1);
    }

    #[test]
    fn domain_percentage_zero_guard() {
        let breakdown = DomainBreakdown {
            name: DomainName::Selection,
            stars: 0,
            max_stars: 0,
        };
        assert_eq!(breakdown.percentage(), 0.0);
    }

    #[test]
    fn progress_counts_only_catalog_criteria() {
        let assessment = Assessment::new()
            .with("representativeness", "truly_representative")
            .with("comparability", "most_important")
            .with("free_text_note", "anything");
        let progress = assessment_progress(&assessment, StudyDesign::Cohort);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 8);
        assert!((progress.percentage() - 25.0).abs() < f64::EPSILON);
        assert!(!progress.is_complete());
    }

    #[test]
    fn progress_reaches_complete() {
        let mut assessment = Assessment::new();
        for domain in catalog().domains_for(StudyDesign::CrossSectional) {
            for criterion in domain.criteria {
                assessment.select(criterion.key, criterion.options[0].key);
            }
        }
        let progress = assessment_progress(&assessment, StudyDesign::CrossSectional);
        assert_eq!(progress.completed, 7);
        assert!(progress.is_complete());
    }
}
