//! The search page controller: form state, backend calls, and what the
//! page shows as a result.

mod confirm;
mod lifecycle;

pub use confirm::Confirm;
pub use lifecycle::{SearchLifecycle, SearchPhase, SearchTicket};

use crate::api::{
    ApiError, City, DataStatus, DirectoryApi, District, Institution, RefreshReport, SearchResults,
};
use crate::domain::{format_count, format_timestamp, FormState, SearchQuery};
use crate::view::{
    render_institution_card, Notice, SearchView, SelectOption, Severity, StatusPanel,
    CITY_PLACEHOLDER, DISTRICT_PLACEHOLDER,
};
use std::time::Duration;
use tracing::{debug, error, info};

pub const REFRESH_PROMPT: &str =
    "確定要強制重新下載資料嗎？這將刪除現有的本地檔案並重新下載最新資料。";

/// Mediates between the search form, the directory API and the page.
///
/// Each backend-facing operation comes in two shapes: a one-call method
/// (`load_cities`, `search_institutions`, ...) and a split form
/// (`begin_*`/`finish_*`, `apply_*`) for hosts that must release shared
/// state while the request is in flight. Failures never escape; they end
/// up as a notice plus an empty or default view state.
pub struct SearchController<A, V> {
    api: A,
    view: V,
    form: FormState,
    search: SearchLifecycle,
    // City whose district list is currently wanted.
    districts_for: String,
    refreshes_in_flight: u32,
    next_notice_id: u64,
    status_hide_after: Duration,
}

impl<A: DirectoryApi, V: SearchView> SearchController<A, V> {
    pub fn new(api: A, view: V, status_hide_after: Duration) -> Self {
        Self {
            api,
            view,
            form: FormState::default(),
            search: SearchLifecycle::default(),
            districts_for: String::new(),
            refreshes_in_flight: 0,
            next_notice_id: 0,
            status_hide_after,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn search_phase(&self) -> SearchPhase {
        self.search.phase()
    }

    // ----- cities / districts -----

    pub fn load_cities(&mut self) -> bool {
        let result = self.api.cities();
        self.apply_cities(result)
    }

    pub fn apply_cities(&mut self, result: Result<Vec<City>, ApiError>) -> bool {
        let mut options = vec![SelectOption::placeholder(CITY_PLACEHOLDER)];

        match result {
            Ok(cities) => {
                info!(count = cities.len(), "cities loaded");
                options.extend(cities.into_iter().map(|c| SelectOption::new(c.code, c.name)));
                self.view.set_city_options(options);
                true
            }
            Err(err) => {
                error!(error = %err, "loading cities failed");
                self.view.set_city_options(options);
                self.show_alert("載入縣市資料失敗", Severity::Danger);
                false
            }
        }
    }

    /// Changes the selected city. The district selection is always cleared.
    pub fn select_city(&mut self, city_code: &str) -> bool {
        if !self.begin_select_city(city_code) {
            return true;
        }
        let city_code = city_code.trim();
        let result = self.api.districts(city_code);
        self.apply_districts(city_code, result)
    }

    /// Form half of `select_city`. Returns whether districts must be fetched.
    pub fn begin_select_city(&mut self, city_code: &str) -> bool {
        self.form.city = city_code.trim().to_string();
        self.form.district.clear();
        self.prepare_districts(city_code)
    }

    pub fn select_district(&mut self, district_code: &str) {
        self.form.district = district_code.trim().to_string();
    }

    pub fn set_service_type(&mut self, service_type: &str) {
        self.form.service_type = service_type.to_string();
    }

    pub fn load_districts(&mut self, city_code: &str) -> bool {
        if !self.prepare_districts(city_code) {
            return true;
        }
        let city_code = city_code.trim();
        let result = self.api.districts(city_code);
        self.apply_districts(city_code, result)
    }

    /// Clears the district list. Returns whether a fetch is needed.
    pub fn prepare_districts(&mut self, city_code: &str) -> bool {
        self.districts_for = city_code.trim().to_string();
        self.view
            .set_district_options(vec![SelectOption::placeholder(DISTRICT_PLACEHOLDER)]);
        !self.districts_for.is_empty()
    }

    /// Fills the district list, unless another city has been chosen since
    /// the request went out.
    pub fn apply_districts(
        &mut self,
        city_code: &str,
        result: Result<Vec<District>, ApiError>,
    ) -> bool {
        if city_code != self.districts_for {
            debug!(city_code, current = %self.districts_for, "discarding stale districts");
            return false;
        }

        match result {
            Ok(districts) => {
                info!(city_code, count = districts.len(), "districts loaded");
                let mut options = vec![SelectOption::placeholder(DISTRICT_PLACEHOLDER)];
                options.extend(
                    districts
                        .into_iter()
                        .map(|d| SelectOption::new(d.code, d.name)),
                );
                self.view.set_district_options(options);
                true
            }
            Err(err) => {
                error!(city_code, error = %err, "loading districts failed");
                self.show_alert("載入區域資料失敗", Severity::Danger);
                false
            }
        }
    }

    // ----- search -----

    /// Searches with whatever the form currently holds.
    pub fn submit_search(&mut self) -> bool {
        let query = self.form.to_query();
        self.search_institutions(&query)
    }

    pub fn search_institutions(&mut self, query: &SearchQuery) -> bool {
        let ticket = self.begin_search(query);
        let outcome = self.api.search(query);
        self.finish_search(ticket, outcome)
    }

    pub fn begin_search(&mut self, query: &SearchQuery) -> SearchTicket {
        let ticket = self.search.begin();
        debug!(generation = ticket.generation(), ?query, "search started");

        self.view.set_stats(None);
        self.sync_loading();
        ticket
    }

    /// Applies a search outcome. Returns `false` and changes nothing when a
    /// newer search has started since `ticket` was issued.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchResults, ApiError>,
    ) -> bool {
        if !self.search.complete(ticket) {
            debug!(generation = ticket.generation(), "discarding stale search result");
            return false;
        }

        match outcome {
            Ok(results) => {
                info!(
                    total = results.total,
                    shown = results.institutions.len(),
                    "search complete"
                );
                self.render_results(&results.institutions);
                self.view.set_stats(Some(results.total));
            }
            Err(err) => {
                error!(error = %err, remote = err.is_remote(), "search failed");
                self.show_alert(&format!("搜尋失敗: {err}"), Severity::Danger);
                self.render_results(&[]);
            }
        }

        self.sync_loading();
        true
    }

    /// Replaces the result list, keeping API order.
    pub fn render_results(&mut self, institutions: &[Institution]) {
        let cards = institutions.iter().map(render_institution_card).collect();
        self.view.set_results(cards);
    }

    // ----- notices -----

    pub fn show_alert(&mut self, message: &str, severity: Severity) -> u64 {
        self.push_notice(vec![message.to_string()], severity)
    }

    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        self.view.remove_notice(id)
    }

    fn push_notice(&mut self, lines: Vec<String>, severity: Severity) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.view.prepend_notice(Notice {
            id,
            severity,
            lines,
        });
        id
    }

    // ----- data status / refresh -----

    pub fn show_data_status(&mut self) -> bool {
        let result = self.api.data_status();
        self.apply_data_status(result)
    }

    pub fn apply_data_status(&mut self, result: Result<DataStatus, ApiError>) -> bool {
        match result {
            Ok(status) => {
                info!(
                    local_file_exists = status.local_file_exists,
                    total_records = status.total_records,
                    "data status fetched"
                );
                self.view
                    .show_status_panel(StatusPanel::from(&status), self.status_hide_after);
                true
            }
            Err(err) => {
                error!(error = %err, "fetching data status failed");
                self.show_alert(&format!("無法取得資料狀態: {err}"), Severity::Danger);
                false
            }
        }
    }

    pub fn hide_data_status(&mut self) {
        self.view.hide_status_panel();
    }

    /// Forces a backend re-download. Nothing is sent unless `confirm` agrees.
    pub fn refresh_data(&mut self, confirm: &impl Confirm) -> bool {
        if !self.begin_refresh(confirm) {
            return false;
        }
        let result = self.api.refresh_data();
        self.finish_refresh(result)
    }

    pub fn begin_refresh(&mut self, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(REFRESH_PROMPT) {
            info!("data refresh cancelled by user");
            return false;
        }

        self.refreshes_in_flight += 1;
        self.sync_loading();
        true
    }

    pub fn finish_refresh(&mut self, result: Result<RefreshReport, ApiError>) -> bool {
        self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);

        let ok = match result {
            Ok(report) => {
                info!(
                    total_records = report.total_records,
                    update_time = %report.update_time,
                    "data refreshed"
                );
                self.push_notice(
                    vec![
                        format!(
                            "資料強制更新成功！共載入 {} 筆機構資料",
                            format_count(report.total_records)
                        ),
                        format!("更新時間: {}", format_timestamp(&report.update_time)),
                    ],
                    Severity::Success,
                );
                true
            }
            Err(err) => {
                error!(error = %err, "data refresh failed");
                self.show_alert(&format!("資料更新失敗: {err}"), Severity::Danger);
                false
            }
        };

        self.sync_loading();
        ok
    }

    // Loading is shown while a search is pending or a refresh is running;
    // neither may hide it on behalf of the other.
    fn sync_loading(&mut self) {
        let visible = self.search.is_loading() || self.refreshes_in_flight > 0;
        self.view.set_loading(visible);
    }
}
