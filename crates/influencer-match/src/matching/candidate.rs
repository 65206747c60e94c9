use serde::{Deserialize, Deserializer, Serialize};

use super::coerce::{
    lenient_block, lenient_count, lenient_f64, lenient_optional_f64, lenient_optional_string,
    lenient_ratio, lenient_string,
};

/// Influencer analysis record considered for a campaign shortlist.
///
/// Deserialization is the only coercion pass: numeric fields that are missing or unreadable
/// land on `0` / `0.0`, nested blocks on their defaults, and unknown fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sns_id: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub followers: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub followings: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub posts_count: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub engagement_score: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub activity_score: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub overall_score: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub growth_potential_score: f64,
    #[serde(default, deserialize_with = "lenient_block")]
    pub follow_network_analysis: FollowNetworkAnalysis,
    #[serde(default, deserialize_with = "lenient_block")]
    pub comment_authenticity_analysis: CommentAuthenticityAnalysis,
}

impl Candidate {
    pub fn display_name(&self) -> &str {
        match self.alias.as_deref() {
            Some(alias) if !alias.trim().is_empty() => alias,
            _ => &self.name,
        }
    }
}

/// Follower/following network signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowNetworkAnalysis {
    /// 0-100 scale.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub influence_authenticity_score: f64,
    /// `None` when absent or unreadable; scoring treats that as a neutral 1.0.
    #[serde(default, deserialize_with = "lenient_optional_f64")]
    pub ratio_followers_to_followings: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthenticityAnalysis {
    #[serde(default, deserialize_with = "lenient_block")]
    pub ratio_estimation: RatioEstimation,
    #[serde(default, deserialize_with = "authenticity_level")]
    pub authenticity_level: AuthenticityLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioEstimation {
    /// 0-1 share of comments judged authentic.
    #[serde(default, deserialize_with = "lenient_ratio")]
    pub authentic_comments_ratio: f64,
}

/// Qualitative authenticity grade attached by the comment analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticityLevel {
    High,
    Medium,
    Low,
    #[default]
    Unrecognized,
}

impl AuthenticityLevel {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "높음" | "high" => Self::High,
            "중간" | "medium" => Self::Medium,
            "낮음" | "low" => Self::Low,
            _ => Self::Unrecognized,
        }
    }
}

fn authenticity_level<'de, D>(deserializer: D) -> Result<AuthenticityLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer)?;
    Ok(AuthenticityLevel::parse(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_numbers_fall_back_to_neutral_defaults() {
        let candidate: Candidate = serde_json::from_value(json!({
            "name": "mina",
            "followers": "not-a-number",
            "followings": null,
            "posts_count": "312",
            "engagement_score": "7.5",
            "activity_score": {"nested": true},
            "overall_score": null,
        }))
        .expect("record deserializes");

        assert_eq!(candidate.followers, 0);
        assert_eq!(candidate.followings, 0);
        assert_eq!(candidate.posts_count, 312);
        assert_eq!(candidate.engagement_score, 7.5);
        assert_eq!(candidate.activity_score, 0.0);
        assert_eq!(candidate.overall_score, 0.0);
        assert_eq!(candidate.growth_potential_score, 0.0);
        assert_eq!(candidate.follow_network_analysis, FollowNetworkAnalysis::default());
    }

    #[test]
    fn comment_analysis_reads_korean_levels_and_percent_ratios() {
        let candidate: Candidate = serde_json::from_value(json!({
            "comment_authenticity_analysis": {
                "authenticity_level": "높음",
                "ratio_estimation": {"authentic_comments_ratio": "약 80%"}
            }
        }))
        .expect("record deserializes");

        let analysis = candidate.comment_authenticity_analysis;
        assert_eq!(analysis.authenticity_level, AuthenticityLevel::High);
        assert_eq!(analysis.ratio_estimation.authentic_comments_ratio, 0.8);
    }

    #[test]
    fn unknown_levels_are_unrecognized() {
        assert_eq!(AuthenticityLevel::parse("중간"), AuthenticityLevel::Medium);
        assert_eq!(AuthenticityLevel::parse(" LOW "), AuthenticityLevel::Low);
        assert_eq!(AuthenticityLevel::parse("매우 높음"), AuthenticityLevel::Unrecognized);
        assert_eq!(AuthenticityLevel::parse(""), AuthenticityLevel::Unrecognized);
    }

    #[test]
    fn display_name_prefers_alias() {
        let mut candidate = Candidate {
            name: "Kim Mina".to_string(),
            alias: Some("mina_daily".to_string()),
            ..Candidate::default()
        };
        assert_eq!(candidate.display_name(), "mina_daily");

        candidate.alias = None;
        assert_eq!(candidate.display_name(), "Kim Mina");
    }
}
