use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::profile::CampaignType;
use super::scoring::ScoredCandidate;

/// Number of candidates returned per requested slot, leaving selection headroom downstream.
pub const SHORTLIST_BUFFER_MULTIPLIER: usize = 3;

pub fn shortlist_limit(required_count: usize) -> usize {
    required_count.saturating_mul(SHORTLIST_BUFFER_MULTIPLIER)
}

/// Highest final score first; ties go to the larger audience.
pub fn compare_ranked(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.final_score()
        .total_cmp(&a.final_score())
        .then_with(|| b.followers().cmp(&a.followers()))
}

/// Stable sort by [`compare_ranked`] followed by truncation to the shortlist limit.
pub(crate) fn rank_and_truncate(
    mut eligible: Vec<ScoredCandidate>,
    required_count: usize,
) -> Vec<ScoredCandidate> {
    eligible.sort_by(compare_ranked);
    eligible.truncate(shortlist_limit(required_count));
    eligible
}

/// Counts describing one shortlist run, mirrored in the dashboard's matching summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShortlistReport {
    pub total_candidates: usize,
    pub eligible_candidates: usize,
    pub returned_candidates: usize,
    pub requested_count: usize,
    pub shortlist_limit: usize,
    pub exclusions: BTreeMap<&'static str, usize>,
}

impl ShortlistReport {
    pub fn excluded(&self) -> usize {
        self.exclusions.values().sum()
    }
}

/// Ranked candidates for a campaign plus the run summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortlist {
    pub campaign_type: CampaignType,
    pub report: ShortlistReport,
    pub candidates: Vec<ScoredCandidate>,
}

impl Shortlist {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn into_candidates(self) -> Vec<ScoredCandidate> {
        self.candidates
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            format!(
                "no matching influencers among {} candidates",
                self.report.total_candidates
            )
        } else {
            format!(
                "{} of {} eligible candidates shortlisted for {} campaign",
                self.report.returned_candidates,
                self.report.eligible_candidates,
                self.campaign_type.label().to_lowercase()
            )
        }
    }
}
