use crate::infra::{default_weight_table, load_weights, parse_required_count};
use chrono::{DateTime, Utc};
use clap::Args;
use influencer_match::config::AppConfig;
use influencer_match::error::AppError;
use influencer_match::matching::{
    load_profile, CampaignProfile, CandidateImporter, MatchingEngine, Shortlist,
};
use influencer_match::telemetry;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ShortlistArgs {
    /// Campaign profile JSON (campaign_type, recommended_category, thresholds)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Candidate export; `.csv` files are read as CSV, anything else as JSON
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Weight table JSON. Defaults to MATCHING_WEIGHTS_PATH, then the built-in table.
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
    /// Number of influencers the campaign needs; up to three times as many are returned
    #[arg(long, value_parser = parse_required_count)]
    pub(crate) required_count: usize,
    /// Print the shortlist as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of influencers the demo campaign needs
    #[arg(long, default_value = "2", value_parser = parse_required_count)]
    pub(crate) required_count: usize,
    /// Campaign type to rank for
    #[arg(long, default_value = "sales", value_parser = ["sales", "branding", "seeding"])]
    pub(crate) campaign_type: String,
}

#[derive(Serialize)]
struct ShortlistOutput<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    shortlist: &'a Shortlist,
}

pub(crate) fn run_shortlist(args: ShortlistArgs) -> Result<(), AppError> {
    let ShortlistArgs {
        profile,
        candidates,
        weights,
        required_count,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_cli(&config.telemetry)?;

    let profile = load_profile(&profile)?;
    let candidates = CandidateImporter::from_path(&candidates)?;
    let weights_path = weights.or(config.matching.weights_path);
    let engine = MatchingEngine::new(load_weights(weights_path.as_deref())?);

    let shortlist = engine.shortlist(&profile, &candidates, required_count);
    info!(summary = %shortlist.summary(), "shortlist complete");

    let generated_at = Utc::now();
    if json {
        let output = ShortlistOutput {
            generated_at,
            shortlist: &shortlist,
        };
        let payload = serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        print!("{}", render_shortlist(&shortlist, generated_at));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        required_count,
        campaign_type,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_cli(&config.telemetry)?;

    let profile = demo_profile(&campaign_type);

    println!("Influencer matching demo");
    println!(
        "Campaign: {} | category {} | min followers {} | min trust {}",
        profile.kind().label(),
        profile.recommended_category,
        profile.min_followers,
        profile
            .min_trust_score
            .map(|score| format!("{score:.0}/100"))
            .unwrap_or_else(|| "none".to_string())
    );
    let shortlist = demo_shortlist(&profile, required_count);
    println!(
        "Synthetic roster: {} analyzed accounts\n",
        shortlist.report.total_candidates
    );
    print!("{}", render_shortlist(&shortlist, Utc::now()));

    Ok(())
}

fn demo_shortlist(profile: &CampaignProfile, required_count: usize) -> Shortlist {
    let candidates = CandidateImporter::from_values(synthetic_roster());
    MatchingEngine::new(default_weight_table()).shortlist(profile, &candidates, required_count)
}

fn demo_profile(campaign_type: &str) -> CampaignProfile {
    CampaignProfile::new(campaign_type, "뷰티")
        .with_min_followers(1_000)
        .with_min_trust_score(40.0)
}

/// Analysis records in the loose shape the upstream store produces.
fn synthetic_roster() -> Vec<Value> {
    vec![
        json!({
            "alias": "mina_daily", "name": "Kim Mina", "platform": "instagram",
            "followers": "52,000", "category": "뷰티",
            "engagement_score": 8, "activity_score": 7, "overall_score": 7.5,
            "growth_potential_score": 6,
            "follow_network_analysis": {"influence_authenticity_score": 85, "ratio_followers_to_followings": 2.1},
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": 0.82}, "authenticity_level": "높음"}
        }),
        json!({
            "name": "glow.seoul", "platform": "youtube",
            "followers": 18400, "category": "뷰티",
            "engagement_score": "6.8", "activity_score": 8, "overall_score": 6.9,
            "growth_potential_score": 8.5,
            "follow_network_analysis": "{\"influence_authenticity_score\": 74, \"ratio_followers_to_followings\": 0.9}",
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": "약 70%"}, "authenticity_level": "중간"}
        }),
        json!({
            "name": "jun.moves", "platform": "instagram",
            "followers": 31000, "category": "웰빙",
            "engagement_score": 7, "activity_score": 8, "overall_score": 7,
            "growth_potential_score": 8,
            "follow_network_analysis": {"influence_authenticity_score": 72, "ratio_followers_to_followings": 1.2},
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": 0.65}, "authenticity_level": "중간"}
        }),
        json!({
            "name": "skin.notes", "platform": "blog",
            "followers": 9600, "category": "뷰티",
            "engagement_score": 5.5, "activity_score": 6, "overall_score": 6,
            "growth_potential_score": 4,
            "follow_network_analysis": {"influence_authenticity_score": 66, "ratio_followers_to_followings": 3.8},
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": 0.58}}
        }),
        json!({
            "name": "bulk.beauty", "platform": "instagram",
            "followers": 90000, "category": "뷰티",
            "engagement_score": 6, "activity_score": 5, "overall_score": 5,
            "growth_potential_score": 2,
            "follow_network_analysis": {"influence_authenticity_score": 20, "ratio_followers_to_followings": 12},
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": 0.2}, "authenticity_level": "낮음"}
        }),
        json!({
            "name": "tiny.tint", "platform": "instagram",
            "followers": 640, "category": "뷰티",
            "engagement_score": 9, "activity_score": 9, "overall_score": 8,
            "growth_potential_score": 9,
            "follow_network_analysis": {"influence_authenticity_score": 88, "ratio_followers_to_followings": 1.1},
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": 0.9}, "authenticity_level": "높음"}
        }),
        json!({
            "name": "gadget.lab", "platform": "youtube",
            "followers": 15000, "category": "테크",
            "engagement_score": 7, "activity_score": 6, "overall_score": 6,
            "growth_potential_score": 5,
            "follow_network_analysis": {"influence_authenticity_score": 75, "ratio_followers_to_followings": 1.5},
            "comment_authenticity_analysis": {"ratio_estimation": {"authentic_comments_ratio": 0.7}, "authenticity_level": "중간"}
        }),
        json!({
            "name": "daily.dew", "platform": "tiktok",
            "followers": "12,500", "category": "뷰티",
            "engagement_score": "7.2", "activity_score": "6.4", "overall_score": null,
            "growth_potential_score": "7",
            "follow_network_analysis": {"influence_authenticity_score": "68", "ratio_followers_to_followings": "1.9"},
            "comment_authenticity_analysis": "not analyzed"
        }),
    ]
}

pub(crate) fn render_shortlist(shortlist: &Shortlist, generated_at: DateTime<Utc>) -> String {
    let report = &shortlist.report;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} campaign shortlist (generated {})",
        shortlist.campaign_type.label(),
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        out,
        "- {} scored | {} eligible | {} returned (requested {}, limit {})",
        report.total_candidates,
        report.eligible_candidates,
        report.returned_candidates,
        report.requested_count,
        report.shortlist_limit
    );

    if shortlist.is_empty() {
        let _ = writeln!(out, "{}", shortlist.summary());
    } else {
        let _ = writeln!(out, "Ranked candidates:");
        for (position, entry) in shortlist.candidates.iter().enumerate() {
            let candidate = &entry.candidate;
            let platform = if candidate.platform.is_empty() {
                "-"
            } else {
                candidate.platform.as_str()
            };
            let category = if candidate.category.is_empty() {
                "-"
            } else {
                candidate.category.as_str()
            };
            let _ = writeln!(
                out,
                "  {}. {} ({}) - {} [final {:.2}] [trust {:.2}] [followers {}]",
                position + 1,
                candidate.display_name(),
                platform,
                category,
                entry.final_score(),
                entry.trust(),
                candidate.followers
            );
        }
    }

    if report.exclusions.is_empty() {
        let _ = writeln!(out, "Exclusions: none");
    } else {
        let _ = writeln!(out, "Exclusions:");
        for (reason, count) in &report.exclusions {
            let _ = writeln!(out, "  - {reason}: {count}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn demo_roster_ranks_beauty_creators_for_sales() {
        let shortlist = demo_shortlist(&demo_profile("sales"), 2);

        assert_eq!(shortlist.report.total_candidates, 8);
        assert_eq!(shortlist.report.eligible_candidates, 4);
        assert_eq!(shortlist.report.exclusions.get("below_min_followers"), Some(&1));
        assert_eq!(shortlist.report.exclusions.get("below_min_trust"), Some(&1));
        assert_eq!(shortlist.report.exclusions.get("category_mismatch"), Some(&2));

        let ranked: Vec<(&str, f64)> = shortlist
            .candidates
            .iter()
            .map(|entry| (entry.candidate.display_name(), entry.final_score()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("mina_daily", 8.45),
                ("glow.seoul", 7.7),
                ("skin.notes", 6.1),
                ("daily.dew", 5.34),
            ]
        );
    }

    #[test]
    fn branding_demo_truncates_to_three_per_slot() {
        let shortlist = demo_shortlist(&demo_profile("branding"), 1);
        assert_eq!(shortlist.len(), 3);
        assert_eq!(shortlist.candidates[2].candidate.name, "skin.notes");
        assert_eq!(shortlist.candidates[2].final_score(), 6.6);
    }

    #[test]
    fn render_lists_candidates_and_exclusions() {
        let shortlist = demo_shortlist(&demo_profile("sales"), 2);
        let text = render_shortlist(&shortlist, fixed_time());

        assert!(text.starts_with("Sales campaign shortlist (generated 2024-05-01 09:30 UTC)"));
        assert!(text.contains("- 8 scored | 4 eligible | 4 returned (requested 2, limit 6)"));
        assert!(text.contains(
            "  1. mina_daily (instagram) - 뷰티 [final 8.45] [trust 9.70] [followers 52000]"
        ));
        assert!(text.contains(
            "  2. glow.seoul (youtube) - 뷰티 [final 7.70] [trust 7.84] [followers 18400]"
        ));
        assert!(text.contains("  - category_mismatch: 2"));
    }

    #[test]
    fn render_reports_no_matches() {
        let mut profile = demo_profile("seeding");
        profile.recommended_category = "여행".to_string();
        let shortlist = demo_shortlist(&profile, 3);
        let text = render_shortlist(&shortlist, fixed_time());

        assert!(shortlist.is_empty());
        assert!(text.contains("no matching influencers among 8 candidates"));
        assert!(!text.contains("Ranked candidates:"));
    }
}
