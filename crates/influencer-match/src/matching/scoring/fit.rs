use super::round2;

/// Categories that pair well with most campaigns even without an exact match.
pub const SECONDARY_AFFINITY_CATEGORIES: [&str; 3] = ["웰빙", "푸드", "스포츠"];

const EXACT_MATCH_FIT: f64 = 10.0;
const SECONDARY_AFFINITY_FIT: f64 = 7.0;
const BASELINE_FIT: f64 = 4.0;

pub fn brand_fit(candidate_category: &str, recommended_category: &str) -> f64 {
    if candidate_category == recommended_category {
        EXACT_MATCH_FIT
    } else if SECONDARY_AFFINITY_CATEGORIES.contains(&candidate_category) {
        SECONDARY_AFFINITY_FIT
    } else {
        BASELINE_FIT
    }
}

pub fn conversion_fit(engagement: f64, overall: f64, trust: f64) -> f64 {
    round2(0.4 * engagement + 0.3 * overall + 0.3 * trust)
}

pub fn branding_fit(brand_fit: f64, activity: f64, engagement: f64, trust: f64) -> f64 {
    round2(0.4 * brand_fit + 0.3 * activity + 0.2 * engagement + 0.1 * trust)
}

pub fn seeding_fit(trust: f64, brand_fit: f64, activity: f64, growth: f64) -> f64 {
    round2(0.35 * trust + 0.25 * brand_fit + 0.2 * activity + 0.2 * growth)
}
