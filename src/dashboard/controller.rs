//! The dashboard view-model
//!
//! Owns everything the screen shows and implements the user-facing operations.
//! Network I/O happens elsewhere; results come in through [`Dashboard::apply_refresh`].

use super::pagination::{Pagination, PaginationView};
use super::stats::StatsPanel;
use super::table::{FilterOutcome, ProxyTable};
use crate::utils::clipboard::Clipboard;
use crate::utils::export::{ExportError, ExportFormat, export_txt, timestamped_filename};
use crate::utils::notify::Notifier;
use crate::workers::fetcher::{RefreshKind, RefreshOutcome};
use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Dashboard {
    stats: StatsPanel,
    table: ProxyTable,
    pagination: Pagination,
    /// Record count reported by the last successful proxy load.
    total: u64,
    keyword: String,
    last_refresh: Option<DateTime<Local>>,
    export_dir: PathBuf,
    notifier: Notifier,
}

impl Dashboard {
    pub fn new(page_size: u32, export_dir: PathBuf) -> Self {
        Self {
            stats: StatsPanel::default(),
            table: ProxyTable::new(),
            pagination: Pagination::new(page_size),
            total: 0,
            keyword: String::new(),
            last_refresh: None,
            export_dir,
            notifier: Notifier::new(),
        }
    }

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    pub fn table(&self) -> &ProxyTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ProxyTable {
        &mut self.table
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn pagination_view(&self) -> Option<PaginationView> {
        self.pagination.view(self.total)
    }

    /// A proxy request for `page` started.
    pub fn begin_loading(&mut self, page: u32) {
        if page == self.pagination.current_page() {
            self.table.set_loading();
        }
    }

    /// Applies the result of a refresh cycle.
    ///
    /// Stats failures leave the previous values in place. Proxy results for a
    /// page other than the current one are stale and dropped.
    pub fn apply_refresh(&mut self, outcome: RefreshOutcome) {
        if let Some(Ok(stats)) = &outcome.stats {
            self.stats.apply(stats);
        }
        if outcome.kind == RefreshKind::Full {
            self.last_refresh = Some(Local::now());
        }

        if outcome.page != self.pagination.current_page() {
            log::debug!(
                "Dropping proxies for page {} (now on page {})",
                outcome.page,
                self.pagination.current_page()
            );
            return;
        }

        match outcome.proxies {
            Ok(page) => {
                self.total = page.total();
                self.table.render_proxies(page.proxies, &self.pagination);
                if !self.keyword.is_empty() {
                    self.table.apply_filter(&self.keyword);
                }
            }
            Err(e) => {
                self.table
                    .set_error(format!("Failed to load, press r to retry ({})", e));
                if outcome.kind == RefreshKind::Full {
                    self.notifier.error("Failed to load data");
                }
            }
        }
    }

    /// Filters the rendered rows by `keyword`.
    ///
    /// An empty keyword clears the filter and asks for a reload.
    pub fn filter_proxies(&mut self, keyword: &str) -> FilterOutcome {
        self.keyword = keyword.to_string();
        if keyword.is_empty() {
            self.table.clear_filter();
            return FilterOutcome::Reload;
        }
        let visible = self.table.apply_filter(keyword);
        if visible == 0 {
            self.notifier
                .info(format!("No proxies containing \"{}\"", keyword));
        }
        FilterOutcome::Applied { visible }
    }

    /// Moves to `page`. Returns false for non-positive pages, which are ignored.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        if !self.pagination.go_to(page) {
            return false;
        }
        self.table.set_loading();
        true
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.pagination_view()
            .filter(|view| view.prev.enabled)
            .map(|view| view.prev.page)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.pagination_view()
            .filter(|view| view.next.enabled)
            .map(|view| view.next.page)
    }

    pub fn last_page(&self) -> Option<u32> {
        self.pagination_view()
            .filter(|view| view.total_pages != self.pagination.current_page())
            .map(|view| view.total_pages)
    }

    /// Writes the visible proxies to a timestamped TXT file, one per line.
    pub fn export_proxies(&mut self) -> Option<PathBuf> {
        let lines: Vec<String> = self
            .table
            .export_rows()
            .into_iter()
            .map(|row| row.proxy)
            .collect();

        let filename = timestamped_filename("proxies", ExportFormat::Txt, &Local::now());
        match export_txt(&lines, &self.export_dir, &filename) {
            Ok(path) => {
                self.notifier.success(format!(
                    "Exported {} proxies to {}",
                    lines.len(),
                    path.display()
                ));
                Some(path)
            }
            Err(ExportError::Empty) => {
                self.notifier.warning("No proxies to export");
                None
            }
            Err(e) => {
                self.notifier.error(format!("Export failed: {}", e));
                None
            }
        }
    }

    /// Copies one proxy string to the clipboard.
    pub fn copy_proxy(&mut self, proxy: &str, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.copy(proxy) {
            Ok(()) => {
                self.notifier.success(format!("Copied {}", proxy));
                true
            }
            Err(e) => {
                self.notifier.error(format!("Copy failed: {}", e));
                false
            }
        }
    }

    pub fn copy_selected(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(proxy) = self.table.selected_row().map(|row| row.proxy().to_string()) else {
            self.notifier.warning("No proxy selected");
            return false;
        };
        self.copy_proxy(&proxy, clipboard)
    }
}
