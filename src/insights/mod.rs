//! Methodological insight derivation over aggregated statistics.
//!
//! Turns a [`PortfolioStats`] snapshot into domain strength bandings, the
//! weak-domain list, and recommendation text a report renderer can show
//! verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregation::PortfolioStats;
use crate::core::DomainName;

/// Domain strength banding from the domain's average percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainStatus {
    Strong,   // >= 75%
    Moderate, // >= 50%
    Weak,     // < 50%
}

impl DomainStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            DomainStatus::Strong
        } else if percentage >= 50.0 {
            DomainStatus::Moderate
        } else {
            DomainStatus::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DomainStatus::Strong => "Strong",
            DomainStatus::Moderate => "Moderate",
            DomainStatus::Weak => "Weak",
        }
    }
}

/// Evidence-base banding from the overall quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioStatus {
    HighQuality,      // >= 75
    ModerateQuality,  // >= 50
    NeedsImprovement, // < 50
}

impl PortfolioStatus {
    pub fn from_score(overall_quality_score: f64) -> Self {
        if overall_quality_score >= 75.0 {
            PortfolioStatus::HighQuality
        } else if overall_quality_score >= 50.0 {
            PortfolioStatus::ModerateQuality
        } else {
            PortfolioStatus::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioStatus::HighQuality => "High Quality Portfolio",
            PortfolioStatus::ModerateQuality => "Moderate Quality Portfolio",
            PortfolioStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Derived insight values for one portfolio snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioInsights {
    pub domain_statuses: BTreeMap<DomainName, DomainStatus>,
    pub weak_domains: Vec<DomainName>,
    pub recommendations: Vec<String>,
    pub overall_status: PortfolioStatus,
    pub overall_recommendation: String,
}

/// Derive statuses and recommendation text from aggregated statistics
pub fn generate_insights(stats: &PortfolioStats) -> PortfolioInsights {
    let domain_statuses: BTreeMap<DomainName, DomainStatus> = stats
        .domain_performance
        .iter()
        .map(|(name, perf)| (*name, DomainStatus::from_percentage(perf.average_percentage)))
        .collect();

    let weak_domains: Vec<DomainName> = domain_statuses
        .iter()
        .filter(|(_, status)| **status == DomainStatus::Weak)
        .map(|(name, _)| *name)
        .collect();

    let recommendations = weak_domains
        .iter()
        .map(|domain| domain_recommendation(*domain).to_string())
        .collect();

    let overall_status = PortfolioStatus::from_score(stats.overall_quality_score);

    PortfolioInsights {
        domain_statuses,
        weak_domains,
        recommendations,
        overall_status,
        overall_recommendation: overall_recommendation(overall_status).to_string(),
    }
}

fn domain_recommendation(domain: DomainName) -> &'static str {
    match domain {
        DomainName::Selection => {
            "Improve participant selection and representativeness documentation"
        }
        DomainName::Comparability => {
            "Enhance control for confounding factors in design or analysis"
        }
        DomainName::Outcome => {
            "Strengthen outcome assessment methods and follow-up procedures"
        }
        DomainName::Exposure => "Improve exposure assessment reliability and consistency",
    }
}

fn overall_recommendation(status: PortfolioStatus) -> &'static str {
    match status {
        PortfolioStatus::HighQuality => {
            "The included studies demonstrate good methodological quality. \
             Consider highlighting this strength in your discussion and recommendations."
        }
        PortfolioStatus::ModerateQuality => {
            "The evidence base shows moderate quality. Consider discussing limitations \
             and the need for higher-quality studies in future research."
        }
        PortfolioStatus::NeedsImprovement => {
            "Significant methodological limitations identified. Results should be \
             interpreted with caution, and future high-quality studies are needed."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::DomainPerformance;

    fn stats_with_domain(percentage: f64, overall: f64) -> PortfolioStats {
        let mut stats = PortfolioStats::empty();
        stats.total_studies = 1;
        stats.overall_quality_score = overall;
        stats.domain_performance.insert(
            DomainName::Selection,
            DomainPerformance {
                total_stars: 0,
                total_possible: 4,
                studies: 1,
                average_percentage: percentage,
                average_stars: 0.0,
            },
        );
        stats
    }

    #[test]
    fn domain_status_bands() {
        assert_eq!(DomainStatus::from_percentage(80.0), DomainStatus::Strong);
        assert_eq!(DomainStatus::from_percentage(75.0), DomainStatus::Strong);
        assert_eq!(DomainStatus::from_percentage(60.0), DomainStatus::Moderate);
        assert_eq!(DomainStatus::from_percentage(49.9), DomainStatus::Weak);
    }

    #[test]
    fn portfolio_status_bands() {
        assert_eq!(PortfolioStatus::from_score(90.0), PortfolioStatus::HighQuality);
        assert_eq!(PortfolioStatus::from_score(50.0), PortfolioStatus::ModerateQuality);
        assert_eq!(
            PortfolioStatus::from_score(10.0),
            PortfolioStatus::NeedsImprovement
        );
    }

    #[test]
    fn weak_domains_carry_recommendations() {
        let insights = generate_insights(&stats_with_domain(30.0, 30.0));
        assert_eq!(insights.weak_domains, [DomainName::Selection]);
        assert_eq!(insights.recommendations.len(), 1);
        assert!(insights.recommendations[0].contains("participant selection"));
        assert_eq!(insights.overall_status, PortfolioStatus::NeedsImprovement);
    }

    #[test]
    fn strong_domains_produce_no_recommendations() {
        let insights = generate_insights(&stats_with_domain(90.0, 80.0));
        assert!(insights.weak_domains.is_empty());
        assert!(insights.recommendations.is_empty());
        assert_eq!(insights.overall_status, PortfolioStatus::HighQuality);
        assert!(insights
            .overall_recommendation
            .contains("good methodological quality"));
    }

    #[test]
    fn empty_stats_yield_empty_domain_insights() {
        let insights = generate_insights(&PortfolioStats::empty());
        assert!(insights.domain_statuses.is_empty());
        assert!(insights.weak_domains.is_empty());
        assert_eq!(insights.overall_status, PortfolioStatus::NeedsImprovement);
    }
}
