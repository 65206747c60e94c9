use serde::{Deserialize, Serialize};

use super::coerce::{lenient_count, lenient_optional_f64, lenient_string};

/// Campaign requirements produced by the upstream campaign analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignProfile {
    #[serde(default = "default_campaign_type", deserialize_with = "lenient_string")]
    pub campaign_type: String,
    /// Empty means "no category filter".
    #[serde(default, alias = "category", deserialize_with = "lenient_string")]
    pub recommended_category: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub min_followers: u64,
    /// 0-100 scale, compared against the 0-10 trust score after dividing by 10.
    #[serde(default, deserialize_with = "lenient_optional_f64")]
    pub min_trust_score: Option<f64>,
}

fn default_campaign_type() -> String {
    CampaignType::Sales.key().to_string()
}

impl CampaignProfile {
    pub fn new(campaign_type: impl Into<String>, recommended_category: impl Into<String>) -> Self {
        Self {
            campaign_type: campaign_type.into(),
            recommended_category: recommended_category.into(),
            min_followers: 0,
            min_trust_score: None,
        }
    }

    pub fn with_min_followers(mut self, min_followers: u64) -> Self {
        self.min_followers = min_followers;
        self
    }

    pub fn with_min_trust_score(mut self, min_trust_score: f64) -> Self {
        self.min_trust_score = Some(min_trust_score);
        self
    }

    pub fn kind(&self) -> CampaignType {
        CampaignType::parse(&self.campaign_type)
    }

    /// Trust threshold on the 0-10 scale, if the campaign sets one.
    pub fn trust_threshold(&self) -> Option<f64> {
        self.min_trust_score.map(|score| score / 10.0)
    }

    pub fn filters_by_category(&self) -> bool {
        !self.recommended_category.is_empty()
    }
}

/// Known campaign flavours; anything else is treated as a sales campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    Sales,
    Branding,
    Seeding,
}

impl CampaignType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Sales, Self::Branding, Self::Seeding]
    }

    pub fn parse(raw: &str) -> Self {
        match normalize_key(raw).as_str() {
            "branding" => Self::Branding,
            "seeding" => Self::Seeding,
            _ => Self::Sales,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Branding => "branding",
            Self::Seeding => "seeding",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Branding => "Branding",
            Self::Seeding => "Seeding",
        }
    }
}

pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
