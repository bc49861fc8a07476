use crate::api::types::StatsSnapshot;
use crate::consts::dashboard_consts::UNKNOWN_STATUS;

/// Display values of the statistics panel.
///
/// Values persist until the next successful stats load overwrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPanel {
    pub proxy_count: String,
    pub crawler_count: String,
    pub status: String,
    pub avg_score: String,
    /// Set once the first snapshot arrived.
    pub loaded: bool,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self {
            proxy_count: "-".to_string(),
            crawler_count: "-".to_string(),
            status: "-".to_string(),
            avg_score: "-".to_string(),
            loaded: false,
        }
    }
}

impl StatsPanel {
    /// Overwrites every field. Missing or falsy values fall back to `0` and the unknown status.
    pub fn apply(&mut self, snapshot: &StatsSnapshot) {
        self.proxy_count = snapshot.proxy_count.unwrap_or(0).to_string();
        self.crawler_count = snapshot.crawler_count.unwrap_or(0).to_string();
        self.status = snapshot
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_STATUS)
            .to_string();
        self.avg_score = snapshot.avg_score.unwrap_or(0.0).to_string();
        self.loaded = true;
    }
}
