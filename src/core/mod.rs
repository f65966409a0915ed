//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::NosError;
use crate::scoring::{self, ScoreResult};
use crate::tiers::{self, QualityTier};

/// The three study designs the instrument covers.
///
/// The design determines which criteria apply and where the quality-tier
/// cut-offs sit. It is fixed at study creation; a design change means a new
/// assessment against a different criteria set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StudyDesign {
    #[serde(rename = "Cohort Studies")]
    Cohort,
    #[serde(rename = "Case-Control Studies")]
    CaseControl,
    #[serde(rename = "Cross-Sectional Studies")]
    CrossSectional,
}

impl StudyDesign {
    pub const ALL: [StudyDesign; 3] = [
        StudyDesign::Cohort,
        StudyDesign::CaseControl,
        StudyDesign::CrossSectional,
    ];

    /// Maximum achievable total stars for this design
    pub fn max_stars(&self) -> u32 {
        match self {
            StudyDesign::Cohort | StudyDesign::CaseControl => 9,
            StudyDesign::CrossSectional => 8,
        }
    }

    /// Get the display name for this design
    pub fn display_name(&self) -> &'static str {
        match self {
            StudyDesign::Cohort => "Cohort Studies",
            StudyDesign::CaseControl => "Case-Control Studies",
            StudyDesign::CrossSectional => "Cross-Sectional Studies",
        }
    }
}

impl fmt::Display for StudyDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StudyDesign {
    type Err = NosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cohort Studies" | "Cohort" => Ok(StudyDesign::Cohort),
            "Case-Control Studies" | "Case-Control" => Ok(StudyDesign::CaseControl),
            "Cross-Sectional Studies" | "Cross-Sectional" => Ok(StudyDesign::CrossSectional),
            other => Err(NosError::UnknownDesign(other.to_string())),
        }
    }
}

/// Thematic criterion groupings.
///
/// Domains are keyed by name when aggregating across designs, so the Outcome
/// domain of a cohort study and the Outcome domain of a cross-sectional
/// study accumulate into the same bucket even though their criteria differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DomainName {
    Selection,
    Comparability,
    Outcome,
    Exposure,
}

impl DomainName {
    /// Get display name for this domain
    pub fn display_name(&self) -> &'static str {
        match self {
            DomainName::Selection => "Selection",
            DomainName::Comparability => "Comparability",
            DomainName::Outcome => "Outcome",
            DomainName::Exposure => "Exposure",
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Selected option keys per criterion for a single study.
///
/// A criterion missing from the map is "not yet scored" and contributes no
/// stars; keys that do not match any criterion of the study's design are
/// carried along but ignored by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assessment {
    responses: BTreeMap<String, String>,
}

impl Assessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option for a criterion, replacing any earlier
    /// selection.
    pub fn select(&mut self, criterion: impl Into<String>, option: impl Into<String>) {
        self.responses.insert(criterion.into(), option.into());
    }

    /// Builder-style variant of [`Assessment::select`]
    pub fn with(mut self, criterion: impl Into<String>, option: impl Into<String>) -> Self {
        self.select(criterion, option);
        self
    }

    /// The selected option key for a criterion, if one was recorded
    pub fn response(&self, criterion: &str) -> Option<&str> {
        self.responses.get(criterion).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.responses
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Identifying metadata for one study.
///
/// Free text throughout; the core performs no cross-validation of these
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMetadata {
    pub study_name: String,
    pub authors: String,
    pub publication_year: i32,
    pub journal: String,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pmid: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sample_size: Option<u32>,
    #[serde(default)]
    pub funding: Option<String>,
    #[serde(default)]
    pub follow_up_duration: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub strengths: Option<String>,
    #[serde(default)]
    pub limitations: Option<String>,
    #[serde(default)]
    pub assessor_name: Option<String>,
}

impl StudyMetadata {
    /// The first listed author (text before the first comma)
    pub fn first_author(&self) -> &str {
        self.authors.split(',').next().unwrap_or("").trim()
    }

    /// Citation-style reference: "First et al. (year)" for multi-author
    /// studies, "Author (year)" otherwise.
    pub fn reference(&self) -> String {
        if self.authors.contains(',') {
            format!("{} et al. ({})", self.first_author(), self.publication_year)
        } else {
            format!("{} ({})", self.authors, self.publication_year)
        }
    }
}

/// One assessed study with its derived scores.
///
/// `total_stars` and `quality_tier` are computed when the study is built and
/// never silently recomputed; replacing the whole value via
/// [`Study::reassess`] is the only way scores change, which keeps the
/// derived fields from going stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    #[serde(flatten)]
    pub metadata: StudyMetadata,
    pub study_design: StudyDesign,
    pub assessment: Assessment,
    pub total_stars: u32,
    pub quality_tier: QualityTier,
    pub assessed_at: DateTime<Utc>,
}

impl Study {
    /// Score the assessment and build the study record, stamped with the
    /// current time.
    pub fn assess(metadata: StudyMetadata, design: StudyDesign, assessment: Assessment) -> Self {
        Self::assess_at(metadata, design, assessment, Utc::now())
    }

    /// Score the assessment with an explicit timestamp
    pub fn assess_at(
        metadata: StudyMetadata,
        design: StudyDesign,
        assessment: Assessment,
        assessed_at: DateTime<Utc>,
    ) -> Self {
        let result = scoring::score(&assessment, design);
        let quality_tier = tiers::classify_quality(result.total_stars, design);
        Study {
            metadata,
            study_design: design,
            assessment,
            total_stars: result.total_stars,
            quality_tier,
            assessed_at,
        }
    }

    /// Replace the assessment, recomputing the derived fields and the
    /// timestamp.
    pub fn reassess(self, assessment: Assessment) -> Self {
        Study::assess(self.metadata, self.study_design, assessment)
    }

    /// Per-domain star breakdown, recomputed from the raw answers
    pub fn score_breakdown(&self) -> ScoreResult {
        scoring::score(&self.assessment, self.study_design)
    }

    /// Total stars as a percentage of this design's own maximum
    pub fn quality_percentage(&self) -> f64 {
        f64::from(self.total_stars) / f64::from(self.study_design.max_stars()) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> StudyMetadata {
        StudyMetadata {
            study_name: "Framingham offspring analysis".to_string(),
            authors: "Smith J, Jones K, Patel R".to_string(),
            publication_year: 2019,
            journal: "Int J Epidemiol".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn design_parses_instrument_labels() {
        assert_eq!(
            "Cohort Studies".parse::<StudyDesign>().unwrap(),
            StudyDesign::Cohort
        );
        assert_eq!(
            "Case-Control Studies".parse::<StudyDesign>().unwrap(),
            StudyDesign::CaseControl
        );
        assert_eq!(
            "Cross-Sectional".parse::<StudyDesign>().unwrap(),
            StudyDesign::CrossSectional
        );
    }

    #[test]
    fn unknown_design_label_is_an_error() {
        let err = "Randomized Trials".parse::<StudyDesign>().unwrap_err();
        assert_eq!(err, NosError::UnknownDesign("Randomized Trials".to_string()));
    }

    #[test]
    fn max_stars_per_design() {
        assert_eq!(StudyDesign::Cohort.max_stars(), 9);
        assert_eq!(StudyDesign::CaseControl.max_stars(), 9);
        assert_eq!(StudyDesign::CrossSectional.max_stars(), 8);
    }

    #[test]
    fn assessment_select_replaces_earlier_choice() {
        let mut assessment = Assessment::new();
        assessment.select("comparability", "most_important");
        assessment.select("comparability", "additional_factor");
        assert_eq!(assessment.response("comparability"), Some("additional_factor"));
        assert_eq!(assessment.len(), 1);
    }

    #[test]
    fn reference_formatting() {
        let meta = sample_metadata();
        assert_eq!(meta.first_author(), "Smith J");
        assert_eq!(meta.reference(), "Smith J et al. (2019)");

        let single = StudyMetadata {
            authors: "Nguyen T".to_string(),
            publication_year: 2021,
            ..Default::default()
        };
        assert_eq!(single.reference(), "Nguyen T (2021)");
    }

    #[test]
    fn assess_derives_stars_and_tier_at_creation() {
        let assessment = Assessment::new().with("comparability", "additional_factor");
        let study = Study::assess(sample_metadata(), StudyDesign::Cohort, assessment);
        assert_eq!(study.total_stars, 2);
        assert_eq!(study.quality_tier, QualityTier::Poor);
    }

    #[test]
    fn reassess_replaces_derived_fields() {
        let study = Study::assess(sample_metadata(), StudyDesign::Cohort, Assessment::new());
        assert_eq!(study.total_stars, 0);

        let updated = study.reassess(Assessment::new().with("outcome_not_present", "yes"));
        assert_eq!(updated.total_stars, 1);
        assert_eq!(updated.study_design, StudyDesign::Cohort);
    }

    #[test]
    fn quality_percentage_uses_design_maximum() {
        let mut study = Study::assess(sample_metadata(), StudyDesign::CrossSectional, Assessment::new());
        study.total_stars = 4;
        assert!((study.quality_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn study_serializes_with_flat_metadata() {
        let study = Study::assess(sample_metadata(), StudyDesign::Cohort, Assessment::new());
        let value = serde_json::to_value(&study).unwrap();
        assert_eq!(value["study_name"], "Framingham offspring analysis");
        assert_eq!(value["study_design"], "Cohort Studies");
        assert_eq!(value["quality_tier"], "Poor Quality");
    }
}
