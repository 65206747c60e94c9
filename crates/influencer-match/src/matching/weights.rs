use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coerce::lenient_optional_f64;
use super::profile::{normalize_key, CampaignType};

/// Blend weights applied to the derived fit scores. They are not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawWeightSet")]
pub struct WeightSet {
    pub conversion_fit_weight: f64,
    pub branding_fit_weight: f64,
    pub trust_weight: f64,
    pub growth_potential_weight: f64,
}

/// Wire form of a weight set; missing or unreadable weights take the default value.
#[derive(Deserialize)]
struct RawWeightSet {
    #[serde(default, deserialize_with = "lenient_optional_f64")]
    conversion_fit_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_f64")]
    branding_fit_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_f64")]
    trust_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_f64")]
    growth_potential_weight: Option<f64>,
}

impl From<RawWeightSet> for WeightSet {
    fn from(raw: RawWeightSet) -> Self {
        let defaults = WeightSet::DEFAULT;
        WeightSet::new(
            raw.conversion_fit_weight
                .unwrap_or(defaults.conversion_fit_weight),
            raw.branding_fit_weight.unwrap_or(defaults.branding_fit_weight),
            raw.trust_weight.unwrap_or(defaults.trust_weight),
            raw.growth_potential_weight
                .unwrap_or(defaults.growth_potential_weight),
        )
    }
}

impl WeightSet {
    pub const DEFAULT: WeightSet = WeightSet {
        conversion_fit_weight: 0.5,
        branding_fit_weight: 0.2,
        trust_weight: 0.2,
        growth_potential_weight: 0.1,
    };

    pub fn new(conversion: f64, branding: f64, trust: f64, growth: f64) -> Self {
        Self {
            conversion_fit_weight: conversion,
            branding_fit_weight: branding,
            trust_weight: trust,
            growth_potential_weight: growth,
        }
        .non_negative()
    }

    pub fn sum(&self) -> f64 {
        self.conversion_fit_weight
            + self.branding_fit_weight
            + self.trust_weight
            + self.growth_potential_weight
    }

    /// Linear blend shared by every campaign type.
    pub fn blend(&self, conversion_fit: f64, branding_fit: f64, trust: f64, growth: f64) -> f64 {
        self.conversion_fit_weight * conversion_fit
            + self.branding_fit_weight * branding_fit
            + self.trust_weight * trust
            + self.growth_potential_weight * growth
    }

    fn non_negative(self) -> Self {
        Self {
            conversion_fit_weight: self.conversion_fit_weight.max(0.0),
            branding_fit_weight: self.branding_fit_weight.max(0.0),
            trust_weight: self.trust_weight.max(0.0),
            growth_potential_weight: self.growth_potential_weight.max(0.0),
        }
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Weight sets keyed by campaign type. Keys are trimmed and lowercased on insert and lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightTable {
    entries: BTreeMap<String, WeightSet>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, campaign_type: &str, weights: WeightSet) -> Option<WeightSet> {
        self.entries
            .insert(normalize_key(campaign_type), weights.non_negative())
    }

    pub fn with(mut self, campaign_type: CampaignType, weights: WeightSet) -> Self {
        self.insert(campaign_type.key(), weights);
        self
    }

    pub fn get(&self, campaign_type: &str) -> Option<&WeightSet> {
        self.entries.get(&normalize_key(campaign_type))
    }

    /// Weights for the campaign type, or [`WeightSet::DEFAULT`] when the table has none.
    pub fn for_campaign_type(&self, campaign_type: &str) -> WeightSet {
        self.get(campaign_type).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeightSet)> {
        self.entries.iter().map(|(key, weights)| (key.as_str(), weights))
    }
}

impl<'de> Deserialize<'de> for WeightTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, WeightSet>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl<K: AsRef<str>> FromIterator<(K, WeightSet)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (K, WeightSet)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (campaign_type, weights) in iter {
            table.insert(campaign_type.as_ref(), weights);
        }
        table
    }
}
