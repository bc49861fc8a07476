//! Proxy table model: rows of the current page, their badges, the text filter and selection

use crate::api::types::ProxyRecord;
use crate::dashboard::pagination::Pagination;
use crate::utils::format::format_number;
use crate::utils::validate::is_valid_proxy;
use serde::Serialize;

/// Color tier of a score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ScoreTier {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// 40 to 59
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 40.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRow {
    /// Position across all pages, starting at 1.
    pub number: u64,
    pub record: ProxyRecord,
    pub tier: ScoreTier,
    /// Whether the address looks like `IP:PORT`.
    pub well_formed: bool,
    /// Cleared by the text filter.
    pub visible: bool,
}

impl ProxyRow {
    fn new(number: u64, record: ProxyRecord) -> Self {
        Self {
            number,
            tier: ScoreTier::from_score(record.score()),
            well_formed: is_valid_proxy(record.address()),
            record,
            visible: true,
        }
    }

    pub fn proxy(&self) -> &str {
        self.record.address()
    }

    pub fn score_label(&self) -> String {
        format_number(self.record.score())
    }

    pub fn export_row(&self) -> ExportRow {
        ExportRow {
            proxy: self.proxy().to_string(),
            score: self.score_label(),
            checked: self.record.last_checked().to_string(),
        }
    }
}

/// What the table body currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableState {
    Loading,
    Loaded(Vec<ProxyRow>),
    /// The server returned an empty page.
    Empty,
    Error(String),
}

/// Result of [`crate::dashboard::Dashboard::filter_proxies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The keyword was cleared; the current page should be fetched again.
    Reload,
    Applied { visible: usize },
}

/// A visible row as it is written to export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub proxy: String,
    pub score: String,
    pub checked: String,
}

#[derive(Debug)]
pub struct ProxyTable {
    state: TableState,
    selected: usize,
}

impl Default for ProxyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyTable {
    pub fn new() -> Self {
        Self {
            state: TableState::Loading,
            selected: 0,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn set_loading(&mut self) {
        self.state = TableState::Loading;
        self.selected = 0;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = TableState::Error(message.into());
        self.selected = 0;
    }

    /// Replaces the body with the records of the page `pagination` points at.
    pub fn render_proxies(&mut self, records: Vec<ProxyRecord>, pagination: &Pagination) {
        self.selected = 0;
        if records.is_empty() {
            self.state = TableState::Empty;
            return;
        }
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| ProxyRow::new(pagination.row_number(i), record))
            .collect();
        self.state = TableState::Loaded(rows);
    }

    /// Hides rows whose address does not contain `keyword` (case-sensitive).
    ///
    /// Returns the number of rows left visible.
    pub fn apply_filter(&mut self, keyword: &str) -> usize {
        let TableState::Loaded(rows) = &mut self.state else {
            return 0;
        };
        for row in rows.iter_mut() {
            row.visible = row.proxy().contains(keyword);
        }
        self.selected = 0;
        self.visible_count()
    }

    pub fn clear_filter(&mut self) {
        if let TableState::Loaded(rows) = &mut self.state {
            rows.iter_mut().for_each(|row| row.visible = true);
        }
    }

    pub fn visible_rows(&self) -> Vec<&ProxyRow> {
        match &self.state {
            TableState::Loaded(rows) => rows.iter().filter(|row| row.visible).collect(),
            _ => Vec::new(),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// Rows drawn in the table body. Placeholder states draw a single row.
    pub fn rendered_row_count(&self) -> usize {
        match &self.state {
            TableState::Loaded(_) => self.visible_count(),
            TableState::Loading | TableState::Empty | TableState::Error(_) => 1,
        }
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.visible_rows()
            .into_iter()
            .map(ProxyRow::export_row)
            .collect()
    }

    /// Index of the selection among the visible rows.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&ProxyRow> {
        self.visible_rows().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(n: usize) -> Vec<ProxyRecord> {
        (0..n)
            .map(|i| {
                let octet = if i % 7 == 0 { 77 } else { 10 };
                ProxyRecord::new(
                    &format!("192.168.{}.{}:8080", octet, i),
                    (i * 5) as f64,
                    "2024-01-01 12:00:00",
                )
            })
            .collect()
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(39.0), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Poor);
    }

    #[test]
    fn test_row_numbers_follow_the_page() {
        let mut pagination = Pagination::new(20);
        pagination.go_to(2);
        let mut table = ProxyTable::new();
        table.render_proxies(page_of(3), &pagination);

        let numbers: Vec<u64> = table.visible_rows().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![21, 22, 23]);
    }

    #[test]
    fn test_empty_page_renders_one_placeholder_row() {
        let mut table = ProxyTable::new();
        table.render_proxies(Vec::new(), &Pagination::new(20));
        assert_eq!(table.state(), &TableState::Empty);
        assert_eq!(table.rendered_row_count(), 1);
        assert!(table.export_rows().is_empty());
    }

    #[test]
    // Addresses 0, 7 and 14 contain ".77."
    fn test_filter_keeps_matching_rows() {
        let mut table = ProxyTable::new();
        table.render_proxies(page_of(20), &Pagination::new(20));

        assert_eq!(table.apply_filter(".77."), 3);
        let visible: Vec<&str> = table.visible_rows().iter().map(|r| r.proxy()).collect();
        assert_eq!(
            visible,
            vec!["192.168.77.0:8080", "192.168.77.7:8080", "192.168.77.14:8080"]
        );

        assert_eq!(table.apply_filter("no-such-proxy"), 0);
        assert_eq!(table.rendered_row_count(), 0);

        table.clear_filter();
        assert_eq!(table.visible_count(), 20);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let mut table = ProxyTable::new();
        table.render_proxies(
            vec![ProxyRecord::new("proxy.example:80", 50.0, "")],
            &Pagination::new(20),
        );
        assert_eq!(table.apply_filter("Example"), 0);
        assert_eq!(table.apply_filter("example"), 1);
    }

    #[test]
    fn test_export_rows_and_missing_fields() {
        let mut table = ProxyTable::new();
        let records = vec![
            ProxyRecord::new("1.2.3.4:80", 90.0, "2024-01-01"),
            ProxyRecord::default(),
        ];
        table.render_proxies(records, &Pagination::new(20));

        let rows = table.export_rows();
        assert_eq!(
            rows[0],
            ExportRow {
                proxy: "1.2.3.4:80".to_string(),
                score: "90".to_string(),
                checked: "2024-01-01".to_string(),
            }
        );
        assert_eq!(rows[1].proxy, "N/A");
        assert_eq!(rows[1].checked, "N/A");

        let visible = table.visible_rows();
        assert!(visible[0].well_formed);
        assert!(!visible[1].well_formed);
    }

    #[test]
    fn test_selection_stays_within_visible_rows() {
        let mut table = ProxyTable::new();
        table.render_proxies(page_of(20), &Pagination::new(20));
        table.apply_filter(".77.");

        table.select_next();
        table.select_next();
        table.select_next();
        assert_eq!(table.selected(), 2);
        assert_eq!(table.selected_row().unwrap().proxy(), "192.168.77.14:8080");

        table.select_previous();
        assert_eq!(table.selected_row().unwrap().proxy(), "192.168.77.7:8080");

        table.set_loading();
        assert!(table.selected_row().is_none());
    }
}
