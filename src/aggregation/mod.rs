//! Portfolio-wide summary statistics.
//!
//! Aggregation is computed on demand from a snapshot of the study set and
//! is never maintained incrementally, so the output always reflects exactly
//! the studies passed in. Portfolios are small (hundreds of studies), so a
//! full recomputation per call is cheap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{DomainName, Study, StudyDesign};
use crate::tiers::QualityTier;

/// Fixed 9-star denominator of the overall quality index, applied to every
/// design, cross-sectional (max 8) included. Historical reports are
/// computed against this constant.
pub const OVERALL_SCORE_DENOMINATOR: u32 = 9;

/// Studies per quality tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl TierCounts {
    pub fn for_tier(&self, tier: QualityTier) -> usize {
        match tier {
            QualityTier::Good => self.good,
            QualityTier::Fair => self.fair,
            QualityTier::Poor => self.poor,
        }
    }

    fn record(&mut self, tier: QualityTier) {
        match tier {
            QualityTier::Good => self.good += 1,
            QualityTier::Fair => self.fair += 1,
            QualityTier::Poor => self.poor += 1,
        }
    }
}

/// Tier shares as percentages of the portfolio (all zero when empty)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierPercentages {
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

/// Accumulated per-domain totals with their derived averages.
///
/// Domains are merged by name across designs, so studies of different
/// designs sharing a domain name contribute to the same entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainPerformance {
    pub total_stars: u32,
    pub total_possible: u32,
    pub studies: usize,
    pub average_percentage: f64,
    pub average_stars: f64,
}

#[derive(Default)]
struct DomainAccumulator {
    stars: u32,
    possible: u32,
    studies: usize,
}

impl DomainAccumulator {
    fn finish(self) -> DomainPerformance {
        let average_percentage = if self.possible > 0 {
            f64::from(self.stars) / f64::from(self.possible) * 100.0
        } else {
            0.0
        };
        let average_stars = if self.studies > 0 {
            f64::from(self.stars) / self.studies as f64
        } else {
            0.0
        };
        DomainPerformance {
            total_stars: self.stars,
            total_possible: self.possible,
            studies: self.studies,
            average_percentage,
            average_stars,
        }
    }
}

/// Aggregated snapshot over a set of studies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_studies: usize,
    pub quality_tier_counts: TierCounts,
    pub quality_tier_percentages: TierPercentages,
    pub design_distribution: BTreeMap<StudyDesign, usize>,
    pub star_distribution: BTreeMap<u32, usize>,
    pub domain_performance: BTreeMap<DomainName, DomainPerformance>,
    pub overall_quality_score: f64,
}

impl PortfolioStats {
    /// The well-defined result for zero studies
    pub fn empty() -> Self {
        PortfolioStats {
            total_studies: 0,
            quality_tier_counts: TierCounts::default(),
            quality_tier_percentages: TierPercentages::default(),
            design_distribution: BTreeMap::new(),
            star_distribution: BTreeMap::new(),
            domain_performance: BTreeMap::new(),
            overall_quality_score: 0.0,
        }
    }
}

/// Compute portfolio statistics over a snapshot of studies.
///
/// Accepts any iterable of study references; an empty input yields
/// [`PortfolioStats::empty`] rather than failing. The result depends only
/// on the multiset of studies, not their order.
pub fn aggregate<'a, I>(studies: I) -> PortfolioStats
where
    I: IntoIterator<Item = &'a Study>,
{
    let mut total_studies = 0;
    let mut counts = TierCounts::default();
    let mut design_distribution = BTreeMap::new();
    let mut star_distribution = BTreeMap::new();
    let mut accumulators: BTreeMap<DomainName, DomainAccumulator> = BTreeMap::new();
    let mut star_sum: u64 = 0;

    for study in studies {
        total_studies += 1;
        counts.record(study.quality_tier);
        *design_distribution.entry(study.study_design).or_insert(0) += 1;
        *star_distribution.entry(study.total_stars).or_insert(0) += 1;
        star_sum += u64::from(study.total_stars);

        for domain in study.score_breakdown().domains {
            let acc = accumulators.entry(domain.name).or_default();
            acc.stars += domain.stars;
            acc.possible += domain.max_stars;
            acc.studies += 1;
        }
    }

    if total_studies == 0 {
        return PortfolioStats::empty();
    }

    let denom = total_studies as f64;
    let quality_tier_percentages = TierPercentages {
        good: counts.good as f64 / denom * 100.0,
        fair: counts.fair as f64 / denom * 100.0,
        poor: counts.poor as f64 / denom * 100.0,
    };

    let domain_performance = accumulators
        .into_iter()
        .map(|(name, acc)| (name, acc.finish()))
        .collect();

    let overall_quality_score =
        star_sum as f64 / (denom * f64::from(OVERALL_SCORE_DENOMINATOR)) * 100.0;

    PortfolioStats {
        total_studies,
        quality_tier_counts: counts,
        quality_tier_percentages,
        design_distribution,
        star_distribution,
        domain_performance,
        overall_quality_score,
    }
}
