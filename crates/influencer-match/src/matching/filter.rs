use serde::Serialize;

use super::profile::CampaignProfile;
use super::scoring::ScoredCandidate;

/// Reason a scored candidate was left off the shortlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Exclusion {
    BelowMinFollowers { required: u64, actual: u64 },
    BelowMinTrust { required: f64, actual: f64 },
    CategoryMismatch { required: String, actual: String },
}

impl Exclusion {
    pub const fn key(&self) -> &'static str {
        match self {
            Exclusion::BelowMinFollowers { .. } => "below_min_followers",
            Exclusion::BelowMinTrust { .. } => "below_min_trust",
            Exclusion::CategoryMismatch { .. } => "category_mismatch",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Exclusion::BelowMinFollowers { required, actual } => {
                format!("{actual} followers below minimum {required}")
            }
            Exclusion::BelowMinTrust { required, actual } => {
                format!("trust {actual:.2} below minimum {required:.2}")
            }
            Exclusion::CategoryMismatch { required, actual } => {
                if actual.is_empty() {
                    format!("no category, campaign requires '{required}'")
                } else {
                    format!("category '{actual}' does not match '{required}'")
                }
            }
        }
    }
}

/// Applies the campaign thresholds in order and reports the first one that fails.
pub fn check(profile: &CampaignProfile, scored: &ScoredCandidate) -> Result<(), Exclusion> {
    let followers = scored.followers();
    if followers < profile.min_followers {
        return Err(Exclusion::BelowMinFollowers {
            required: profile.min_followers,
            actual: followers,
        });
    }

    if let Some(threshold) = profile.trust_threshold() {
        if scored.trust() < threshold {
            return Err(Exclusion::BelowMinTrust {
                required: threshold,
                actual: scored.trust(),
            });
        }
    }

    if profile.filters_by_category() && scored.candidate.category != profile.recommended_category
    {
        return Err(Exclusion::CategoryMismatch {
            required: profile.recommended_category.clone(),
            actual: scored.candidate.category.clone(),
        });
    }

    Ok(())
}
