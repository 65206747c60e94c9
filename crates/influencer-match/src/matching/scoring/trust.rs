use super::{clamp_score, round2};
use crate::matching::candidate::{
    AuthenticityLevel, CommentAuthenticityAnalysis, FollowNetworkAnalysis,
};

const NETWORK_SHARE: f64 = 0.6;
const COMMENT_SHARE: f64 = 0.4;
const NEUTRAL_FOLLOW_RATIO: f64 = 1.0;

/// Network trust on a 0-10 scale from the 0-100 authenticity score plus a ratio bonus.
pub fn network_trust(analysis: &FollowNetworkAnalysis) -> f64 {
    let raw = analysis.influence_authenticity_score;
    let base = if raw > 0.0 { raw / 10.0 } else { 0.0 };
    let ratio = analysis
        .ratio_followers_to_followings
        .unwrap_or(NEUTRAL_FOLLOW_RATIO);

    clamp_score(base + follow_ratio_bonus(ratio))
}

/// `+1` for a healthy follower/following ratio, `0` for a tolerable one, `-1` otherwise.
pub fn follow_ratio_bonus(ratio: f64) -> f64 {
    if (0.5..=3.0).contains(&ratio) {
        1.0
    } else if (0.3..=5.0).contains(&ratio) {
        0.0
    } else {
        -1.0
    }
}

pub fn comment_trust(analysis: &CommentAuthenticityAnalysis) -> f64 {
    let base = analysis.ratio_estimation.authentic_comments_ratio * 10.0;
    clamp_score(base + authenticity_bonus(analysis.authenticity_level))
}

pub fn authenticity_bonus(level: AuthenticityLevel) -> f64 {
    match level {
        AuthenticityLevel::High => 2.0,
        AuthenticityLevel::Low => -2.0,
        AuthenticityLevel::Medium | AuthenticityLevel::Unrecognized => 0.0,
    }
}

pub fn composite_trust(network_trust: f64, comment_trust: f64) -> f64 {
    round2(NETWORK_SHARE * network_trust + COMMENT_SHARE * comment_trust)
}
