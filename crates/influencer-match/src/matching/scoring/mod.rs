//! Per-candidate scoring: trust, category fit, derived fits and the weighted final score.

mod fit;
mod trust;

pub use fit::{
    brand_fit, branding_fit, conversion_fit, seeding_fit, SECONDARY_AFFINITY_CATEGORIES,
};
pub use trust::{
    authenticity_bonus, comment_trust, composite_trust, follow_ratio_bonus, network_trust,
};

use serde::Serialize;

use super::candidate::Candidate;
use super::profile::CampaignProfile;
use super::weights::WeightSet;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derived scores attached to a candidate for one campaign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub network_trust: f64,
    pub comment_trust: f64,
    pub trust: f64,
    pub brand_fit: f64,
    pub conversion_fit: f64,
    pub branding_fit: f64,
    pub seeding_fit: f64,
    pub growth_potential: f64,
    pub final_score: f64,
}

/// A candidate together with the scores computed for the campaign under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(flatten)]
    pub scores: ScoreBreakdown,
}

impl ScoredCandidate {
    pub fn final_score(&self) -> f64 {
        self.scores.final_score
    }

    pub fn trust(&self) -> f64 {
        self.scores.trust
    }

    pub fn followers(&self) -> u64 {
        self.candidate.followers
    }
}

/// Analysis component scores, held to the 0-10 scale the analysis store promises.
struct ComponentScores {
    engagement: f64,
    activity: f64,
    overall: f64,
    growth: f64,
}

impl From<&Candidate> for ComponentScores {
    fn from(candidate: &Candidate) -> Self {
        Self {
            engagement: clamp_score(candidate.engagement_score),
            activity: clamp_score(candidate.activity_score),
            overall: clamp_score(candidate.overall_score),
            growth: clamp_score(candidate.growth_potential_score),
        }
    }
}

pub fn score_breakdown(
    profile: &CampaignProfile,
    weights: &WeightSet,
    candidate: &Candidate,
) -> ScoreBreakdown {
    let components = ComponentScores::from(candidate);

    let network_trust = network_trust(&candidate.follow_network_analysis);
    let comment_trust = comment_trust(&candidate.comment_authenticity_analysis);
    let trust = composite_trust(network_trust, comment_trust);

    let brand_fit = brand_fit(&candidate.category, &profile.recommended_category);

    let conversion_fit = conversion_fit(components.engagement, components.overall, trust);
    let branding_fit = branding_fit(
        brand_fit,
        components.activity,
        components.engagement,
        trust,
    );
    let seeding_fit = seeding_fit(trust, brand_fit, components.activity, components.growth);

    let final_score = round2(weights.blend(
        conversion_fit,
        branding_fit,
        trust,
        components.growth,
    ));

    ScoreBreakdown {
        network_trust,
        comment_trust,
        trust,
        brand_fit,
        conversion_fit,
        branding_fit,
        seeding_fit,
        growth_potential: components.growth,
        final_score,
    }
}

pub fn score_candidate(
    profile: &CampaignProfile,
    weights: &WeightSet,
    candidate: &Candidate,
) -> ScoredCandidate {
    ScoredCandidate {
        candidate: candidate.clone(),
        scores: score_breakdown(profile, weights, candidate),
    }
}
