//! Influencer matching: scores analysis records against a campaign profile and returns a
//! ranked, filtered shortlist.
//!
//! The engine is a pure computation over borrowed inputs. Malformed candidate fields are
//! coerced to neutral defaults during deserialization, so scoring itself never fails; an
//! empty shortlist is an ordinary outcome the caller presents as "no matches".

pub mod candidate;
pub(crate) mod coerce;
pub mod filter;
pub mod import;
pub mod profile;
pub mod router;
pub mod scoring;
pub mod shortlist;
pub mod weights;

#[cfg(test)]
mod tests;

pub use candidate::{
    AuthenticityLevel, Candidate, CommentAuthenticityAnalysis, FollowNetworkAnalysis,
    RatioEstimation,
};
pub use filter::Exclusion;
pub use import::{load_profile, load_weight_table, CandidateImportError, CandidateImporter};
pub use profile::{CampaignProfile, CampaignType};
pub use router::matching_router;
pub use scoring::{ScoreBreakdown, ScoredCandidate};
pub use shortlist::{Shortlist, ShortlistReport, SHORTLIST_BUFFER_MULTIPLIER};
pub use weights::{WeightSet, WeightTable};

use tracing::{debug, trace};

pub const DEFAULT_MAX_REQUIRED_COUNT: usize = 100;

/// Stateless ranker holding the per-campaign-type weight table.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    weights: WeightTable,
    max_required_count: usize,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(WeightTable::default())
    }
}

impl MatchingEngine {
    pub fn new(weights: WeightTable) -> Self {
        Self {
            weights,
            max_required_count: DEFAULT_MAX_REQUIRED_COUNT,
        }
    }

    pub fn with_max_required_count(mut self, max_required_count: usize) -> Self {
        self.max_required_count = max_required_count.max(1);
        self
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn max_required_count(&self) -> usize {
        self.max_required_count
    }

    /// Guards the outer surfaces; the ranking itself accepts any count.
    pub fn validate_required_count(&self, required_count: usize) -> Result<(), ShortlistError> {
        if required_count == 0 || required_count > self.max_required_count {
            return Err(ShortlistError::RequiredCountOutOfRange {
                requested: required_count,
                max: self.max_required_count,
            });
        }
        Ok(())
    }

    pub fn shortlist(
        &self,
        profile: &CampaignProfile,
        candidates: &[Candidate],
        required_count: usize,
    ) -> Shortlist {
        shortlist_with(profile, &self.weights, candidates, required_count)
    }
}

/// Scores, filters, ranks and truncates `candidates` for the campaign.
///
/// Returns at most `required_count * 3` candidates; see [`SHORTLIST_BUFFER_MULTIPLIER`].
pub fn rank(
    profile: &CampaignProfile,
    weights_by_type: &WeightTable,
    candidates: &[Candidate],
    required_count: usize,
) -> Vec<ScoredCandidate> {
    shortlist_with(profile, weights_by_type, candidates, required_count).into_candidates()
}

fn shortlist_with(
    profile: &CampaignProfile,
    weights_by_type: &WeightTable,
    candidates: &[Candidate],
    required_count: usize,
) -> Shortlist {
    let weights = weights_by_type.for_campaign_type(&profile.campaign_type);
    let mut report = ShortlistReport {
        total_candidates: candidates.len(),
        requested_count: required_count,
        shortlist_limit: shortlist::shortlist_limit(required_count),
        ..ShortlistReport::default()
    };

    let mut eligible = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let scored = scoring::score_candidate(profile, &weights, candidate);
        match filter::check(profile, &scored) {
            Ok(()) => eligible.push(scored),
            Err(exclusion) => {
                trace!(
                    candidate = candidate.display_name(),
                    reason = exclusion.key(),
                    detail = %exclusion.summary(),
                    "candidate excluded"
                );
                *report.exclusions.entry(exclusion.key()).or_default() += 1;
            }
        }
    }

    report.eligible_candidates = eligible.len();
    let ranked = shortlist::rank_and_truncate(eligible, required_count);
    report.returned_candidates = ranked.len();

    debug!(
        campaign_type = %profile.campaign_type,
        category = %profile.recommended_category,
        total = report.total_candidates,
        eligible = report.eligible_candidates,
        returned = report.returned_candidates,
        "influencer shortlist ranked"
    );

    Shortlist {
        campaign_type: profile.kind(),
        report,
        candidates: ranked,
    }
}

/// Request-level problems raised before ranking starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortlistError {
    #[error("required_count must be between 1 and {max} (got {requested})")]
    RequiredCountOutOfRange { requested: usize, max: usize },
}
