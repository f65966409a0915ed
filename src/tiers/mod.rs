//! Quality-tier classification from total stars.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::StudyDesign;
use crate::errors::{NosError, NosResult};

/// Derived quality classification for one study
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    #[serde(rename = "Good Quality")]
    Good,
    #[serde(rename = "Fair Quality")]
    Fair,
    #[serde(rename = "Poor Quality")]
    Poor,
}

impl QualityTier {
    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Good => "Good Quality",
            QualityTier::Fair => "Fair Quality",
            QualityTier::Poor => "Poor Quality",
        }
    }

    /// Get short tier label
    pub fn short_label(&self) -> &'static str {
        match self {
            QualityTier::Good => "Good",
            QualityTier::Fair => "Fair",
            QualityTier::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Star cut-offs per design family.
///
/// Defaults are the published thresholds: Good at 7+ of 9 stars for cohort
/// and case-control studies, 6+ of 8 for cross-sectional; Fair from 5 and 4
/// respectively. Custom values support sensitivity analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_cohort_good_min")]
    pub cohort_good_min: u32,

    #[serde(default = "default_cohort_fair_min")]
    pub cohort_fair_min: u32,

    #[serde(default = "default_cross_sectional_good_min")]
    pub cross_sectional_good_min: u32,

    #[serde(default = "default_cross_sectional_fair_min")]
    pub cross_sectional_fair_min: u32,
}

fn default_cohort_good_min() -> u32 {
    7
}

fn default_cohort_fair_min() -> u32 {
    5
}

fn default_cross_sectional_good_min() -> u32 {
    6
}

fn default_cross_sectional_fair_min() -> u32 {
    4
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            cohort_good_min: default_cohort_good_min(),
            cohort_fair_min: default_cohort_fair_min(),
            cross_sectional_good_min: default_cross_sectional_good_min(),
            cross_sectional_fair_min: default_cross_sectional_fair_min(),
        }
    }
}

impl TierThresholds {
    fn good_min(&self, design: StudyDesign) -> u32 {
        match design {
            StudyDesign::Cohort | StudyDesign::CaseControl => self.cohort_good_min,
            StudyDesign::CrossSectional => self.cross_sectional_good_min,
        }
    }

    fn fair_min(&self, design: StudyDesign) -> u32 {
        match design {
            StudyDesign::Cohort | StudyDesign::CaseControl => self.cohort_fair_min,
            StudyDesign::CrossSectional => self.cross_sectional_fair_min,
        }
    }
}

/// Classify a study's total stars with the published thresholds.
///
/// Total over all inputs: every star count maps to exactly one tier.
pub fn classify_quality(total_stars: u32, design: StudyDesign) -> QualityTier {
    classify_quality_with(total_stars, design, &TierThresholds::default())
}

/// Classify with custom thresholds
pub fn classify_quality_with(
    total_stars: u32,
    design: StudyDesign,
    thresholds: &TierThresholds,
) -> QualityTier {
    if total_stars >= thresholds.good_min(design) {
        QualityTier::Good
    } else if total_stars >= thresholds.fair_min(design) {
        QualityTier::Fair
    } else {
        QualityTier::Poor
    }
}

/// Checked classification for totals supplied from outside the scorer.
///
/// The scorer never produces a negative total, so a negative here is a
/// caller contract violation and is surfaced rather than defaulted.
pub fn try_classify(total_stars: i64, design: StudyDesign) -> NosResult<QualityTier> {
    let stars = u32::try_from(total_stars).map_err(|_| NosError::InvalidScore(total_stars))?;
    Ok(classify_quality(stars, design))
}
