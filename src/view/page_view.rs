use crate::view::{
    InstitutionCard, Notice, SearchView, SelectOption, StatusPanel, CITY_PLACEHOLDER,
    DISTRICT_PLACEHOLDER,
};
use std::time::{Duration, Instant};

/// In-memory page state. The host renders it with `templates::app_shell`.
#[derive(Debug, Clone)]
pub struct PageView {
    city_options: Vec<SelectOption>,
    district_options: Vec<SelectOption>,
    loading: bool,
    stats: Option<u64>,
    // None until the first search completes.
    results: Option<Vec<InstitutionCard>>,
    // Newest first.
    notices: Vec<Notice>,
    // Deadline is None when the delay is too long to represent.
    status_panel: Option<(StatusPanel, Option<Instant>)>,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            city_options: vec![SelectOption::placeholder(CITY_PLACEHOLDER)],
            district_options: vec![SelectOption::placeholder(DISTRICT_PLACEHOLDER)],
            loading: false,
            stats: None,
            results: None,
            notices: Vec::new(),
            status_panel: None,
        }
    }
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city_options(&self) -> &[SelectOption] {
        &self.city_options
    }

    pub fn district_options(&self) -> &[SelectOption] {
        &self.district_options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> Option<u64> {
        self.stats
    }

    pub fn results(&self) -> Option<&[InstitutionCard]> {
        self.results.as_deref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// The status panel, unless its display window has run out.
    pub fn status_panel(&self) -> Option<&StatusPanel> {
        let now = Instant::now();
        self.status_panel
            .as_ref()
            .filter(|(_, deadline)| deadline.map_or(true, |d| now < d))
            .map(|(panel, _)| panel)
    }

    /// Time left before the panel hides. `None` while no panel is up, and
    /// for a panel that never hides by itself.
    pub fn status_panel_remaining(&self) -> Option<Duration> {
        let (_, deadline) = self.status_panel.as_ref()?;
        deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
            .filter(|remaining| !remaining.is_zero())
    }
}

impl SearchView for PageView {
    fn set_city_options(&mut self, options: Vec<SelectOption>) {
        self.city_options = options;
    }

    fn set_district_options(&mut self, options: Vec<SelectOption>) {
        self.district_options = options;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_stats(&mut self, total: Option<u64>) {
        self.stats = total;
    }

    fn set_results(&mut self, cards: Vec<InstitutionCard>) {
        self.results = Some(cards);
    }

    fn prepend_notice(&mut self, notice: Notice) {
        self.notices.insert(0, notice);
    }

    fn remove_notice(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    fn show_status_panel(&mut self, panel: StatusPanel, hide_after: Duration) {
        self.status_panel = Some((panel, Instant::now().checked_add(hide_after)));
    }

    fn hide_status_panel(&mut self) {
        self.status_panel = None;
    }
}
