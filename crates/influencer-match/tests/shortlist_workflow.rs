use std::path::PathBuf;

use influencer_match::matching::{
    load_profile, load_weight_table, rank, CampaignType, CandidateImporter, MatchingEngine,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn engine() -> MatchingEngine {
    let weights = load_weight_table(fixture("weights.json")).expect("weights load");
    MatchingEngine::new(weights)
}

#[test]
fn branding_shortlist_from_exported_files() {
    let profile = load_profile(fixture("profile.json")).expect("profile loads");
    let candidates = CandidateImporter::from_path(fixture("candidates.json")).expect("import");
    assert_eq!(candidates.len(), 6, "non-object records are skipped");

    let shortlist = engine().shortlist(&profile, &candidates, 1);

    assert_eq!(shortlist.campaign_type, CampaignType::Branding);
    assert_eq!(shortlist.report.total_candidates, 6);
    assert_eq!(shortlist.report.eligible_candidates, 2);
    assert_eq!(shortlist.report.shortlist_limit, 3);
    assert_eq!(shortlist.report.exclusions.get("below_min_followers"), Some(&1));
    assert_eq!(shortlist.report.exclusions.get("below_min_trust"), Some(&1));
    assert_eq!(shortlist.report.exclusions.get("category_mismatch"), Some(&2));
    assert_eq!(shortlist.report.excluded(), 4);

    let names: Vec<&str> = shortlist
        .candidates
        .iter()
        .map(|entry| entry.candidate.display_name())
        .collect();
    assert_eq!(names, vec!["mina_daily", "sparse.skin"]);

    let top = &shortlist.candidates[0].scores;
    assert_eq!(top.network_trust, 9.5);
    assert_eq!(top.comment_trust, 10.0);
    assert_eq!(top.trust, 9.7);
    assert_eq!(top.brand_fit, 10.0);
    assert_eq!(top.branding_fit, 8.67);
    assert_eq!(top.final_score, 8.55);

    let sparse = &shortlist.candidates[1].scores;
    assert_eq!(sparse.trust, 4.2, "embedded JSON network block is decoded");
    assert_eq!(sparse.final_score, 5.98);
}

#[test]
fn open_category_sales_campaign_truncates_to_buffer() {
    let mut profile = load_profile(fixture("profile.json")).expect("profile loads");
    profile.campaign_type = "sales".to_string();
    profile.recommended_category.clear();
    let candidates = CandidateImporter::from_path(fixture("candidates.json")).expect("import");
    let weights = load_weight_table(fixture("weights.json")).expect("weights load");

    let ranked = rank(&profile, &weights, &candidates, 1);

    let summary: Vec<(&str, f64)> = ranked
        .iter()
        .map(|entry| (entry.candidate.name.as_str(), entry.final_score()))
        .collect();
    assert_eq!(
        summary,
        vec![("Kim Mina", 7.97), ("jun.moves", 7.35), ("gadget.lab", 6.68)]
    );
}

#[test]
fn csv_and_json_exports_rank_identically() {
    let profile = load_profile(fixture("profile.json")).expect("profile loads");
    let mut open = profile.clone();
    open.recommended_category.clear();

    let from_csv = CandidateImporter::from_path(fixture("candidates.csv")).expect("csv import");
    let from_json: Vec<_> = CandidateImporter::from_path(fixture("candidates.json"))
        .expect("json import")
        .into_iter()
        .filter(|candidate| candidate.name == "Kim Mina" || candidate.name == "jun.moves")
        .collect();
    assert_eq!(from_csv.len(), 2);

    let engine = engine();
    let csv_scores: Vec<(String, f64)> = engine
        .shortlist(&open, &from_csv, 2)
        .into_candidates()
        .into_iter()
        .map(|entry| (entry.candidate.name.clone(), entry.final_score()))
        .collect();
    let json_scores: Vec<(String, f64)> = engine
        .shortlist(&open, &from_json, 2)
        .into_candidates()
        .into_iter()
        .map(|entry| (entry.candidate.name.clone(), entry.final_score()))
        .collect();

    assert_eq!(csv_scores, json_scores);
    assert_eq!(csv_scores[0], ("jun.moves".to_string(), 7.41));
}

#[test]
fn unmatched_campaign_reports_no_matches() {
    let mut profile = load_profile(fixture("profile.json")).expect("profile loads");
    profile.recommended_category = "여행".to_string();
    let candidates = CandidateImporter::from_path(fixture("candidates.json")).expect("import");

    let shortlist = engine().shortlist(&profile, &candidates, 5);

    assert!(shortlist.is_empty());
    assert_eq!(
        shortlist.summary(),
        "no matching influencers among 6 candidates"
    );
}
