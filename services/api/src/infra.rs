use influencer_match::config::MatchingSettings;
use influencer_match::error::AppError;
use influencer_match::matching::{
    load_weight_table, CampaignType, MatchingEngine, WeightSet, WeightTable,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Weights used when no table file is configured.
pub(crate) fn default_weight_table() -> WeightTable {
    WeightTable::new()
        .with(CampaignType::Sales, WeightSet::DEFAULT)
        .with(CampaignType::Branding, WeightSet::new(0.2, 0.5, 0.2, 0.1))
        .with(CampaignType::Seeding, WeightSet::new(0.2, 0.2, 0.3, 0.3))
}

/// Weight table from `path`, falling back to the built-in table when no path is given.
pub(crate) fn load_weights(path: Option<&Path>) -> Result<WeightTable, AppError> {
    match path {
        Some(path) => {
            let table = load_weight_table(path)?;
            info!(path = %path.display(), campaign_types = table.len(), "loaded matching weights");
            Ok(table)
        }
        None => Ok(default_weight_table()),
    }
}

pub(crate) fn build_engine(settings: &MatchingSettings) -> Result<MatchingEngine, AppError> {
    let weights = load_weights(settings.weights_path.as_deref())?;
    Ok(MatchingEngine::new(weights).with_max_required_count(settings.max_required_count))
}

pub(crate) fn parse_required_count(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("required count must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(err) => Err(format!("failed to parse '{raw}' as a count ({err})")),
    }
}
