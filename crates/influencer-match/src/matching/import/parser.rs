use std::io::Read;

use serde::Deserialize;

use crate::matching::candidate::{
    AuthenticityLevel, Candidate, CommentAuthenticityAnalysis, FollowNetworkAnalysis,
    RatioEstimation,
};
use crate::matching::coerce::{parse_count, parse_f64, parse_ratio};

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<CandidateRow>() {
        let row = record?;
        candidates.push(row.into_candidate());
    }

    Ok(candidates)
}

/// Flat analysis export; nested analysis fields appear as their own columns.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateRow {
    alias: Option<String>,
    name: Option<String>,
    platform: Option<String>,
    sns_id: Option<String>,
    followers: Option<String>,
    followings: Option<String>,
    posts_count: Option<String>,
    category: Option<String>,
    engagement_score: Option<String>,
    activity_score: Option<String>,
    overall_score: Option<String>,
    growth_potential_score: Option<String>,
    influence_authenticity_score: Option<String>,
    ratio_followers_to_followings: Option<String>,
    authentic_comments_ratio: Option<String>,
    authenticity_level: Option<String>,
}

impl CandidateRow {
    fn into_candidate(self) -> Candidate {
        let score = |value: &Option<String>| value.as_deref().and_then(parse_f64).unwrap_or(0.0);
        let count = |value: &Option<String>| value.as_deref().and_then(parse_count).unwrap_or(0);

        Candidate {
            alias: self.alias.filter(|alias| !alias.is_empty()),
            name: self.name.unwrap_or_default(),
            platform: self.platform.unwrap_or_default(),
            sns_id: self.sns_id.unwrap_or_default(),
            followers: count(&self.followers),
            followings: count(&self.followings),
            posts_count: count(&self.posts_count),
            category: self.category.unwrap_or_default(),
            engagement_score: score(&self.engagement_score),
            activity_score: score(&self.activity_score),
            overall_score: score(&self.overall_score),
            growth_potential_score: score(&self.growth_potential_score),
            follow_network_analysis: FollowNetworkAnalysis {
                influence_authenticity_score: score(&self.influence_authenticity_score),
                ratio_followers_to_followings: self
                    .ratio_followers_to_followings
                    .as_deref()
                    .and_then(parse_f64),
            },
            comment_authenticity_analysis: CommentAuthenticityAnalysis {
                ratio_estimation: RatioEstimation {
                    authentic_comments_ratio: self
                        .authentic_comments_ratio
                        .as_deref()
                        .and_then(parse_ratio)
                        .unwrap_or(0.0),
                },
                authenticity_level: self
                    .authenticity_level
                    .as_deref()
                    .map(AuthenticityLevel::parse)
                    .unwrap_or_default(),
            },
        }
    }
}
