use axum::response::Response;
use serde_json::Value;

use crate::matching::candidate::{
    AuthenticityLevel, Candidate, CommentAuthenticityAnalysis, FollowNetworkAnalysis,
    RatioEstimation,
};
use crate::matching::profile::CampaignProfile;
use crate::matching::weights::{WeightSet, WeightTable};
use crate::matching::CampaignType;

pub(super) fn candidate(name: &str, followers: u64, category: &str) -> Candidate {
    Candidate {
        alias: Some(format!("{name}_official")),
        name: name.to_string(),
        platform: "instagram".to_string(),
        sns_id: format!("@{name}"),
        followers,
        followings: followers / 2,
        posts_count: 240,
        category: category.to_string(),
        engagement_score: 7.0,
        activity_score: 6.0,
        overall_score: 6.5,
        growth_potential_score: 3.0,
        follow_network_analysis: FollowNetworkAnalysis {
            influence_authenticity_score: 70.0,
            ratio_followers_to_followings: Some(2.0),
        },
        comment_authenticity_analysis: CommentAuthenticityAnalysis {
            ratio_estimation: RatioEstimation {
                authentic_comments_ratio: 0.5,
            },
            authenticity_level: AuthenticityLevel::Medium,
        },
    }
}

/// Candidate with only the network block filled in, as in a partially analyzed account.
pub(super) fn network_only(authenticity: f64, ratio: f64) -> Candidate {
    Candidate {
        name: "network-only".to_string(),
        follow_network_analysis: FollowNetworkAnalysis {
            influence_authenticity_score: authenticity,
            ratio_followers_to_followings: Some(ratio),
        },
        ..Candidate::default()
    }
}

/// Deterministic roster with spread-out scores and a few tied final scores.
pub(super) fn roster(size: usize, category: &str) -> Vec<Candidate> {
    (0..size)
        .map(|index| {
            let name = format!("creator{index:02}");
            let mut member = candidate(&name, 1_000 + index as u64, category);
            member.engagement_score = (index % 7) as f64 + 2.0;
            member.overall_score = (index % 5) as f64 + 4.0;
            member.growth_potential_score = (index % 3) as f64 * 2.0;
            member
        })
        .collect()
}

pub(super) fn beauty_profile() -> CampaignProfile {
    CampaignProfile::new("sales", "뷰티")
}

pub(super) fn weight_table() -> WeightTable {
    WeightTable::new()
        .with(CampaignType::Sales, WeightSet::DEFAULT)
        .with(CampaignType::Branding, WeightSet::new(0.2, 0.5, 0.2, 0.1))
        .with(CampaignType::Seeding, WeightSet::new(0.2, 0.2, 0.3, 0.3))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
