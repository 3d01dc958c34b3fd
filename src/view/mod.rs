//! Typed view-model the controller renders into.
//!
//! `SearchView` names every binding the page has; the controller only ever
//! talks to the page through it. `PageView` is the in-process implementation
//! the HTTP host renders from.

pub mod card;
pub mod notice;
pub mod page_view;
pub mod status;

use std::time::Duration;

pub use card::{render_institution_card, InstitutionCard};
pub use notice::{Notice, Severity};
pub use page_view::PageView;
pub use status::StatusPanel;

pub const CITY_PLACEHOLDER: &str = "請選擇縣市";
pub const DISTRICT_PLACEHOLDER: &str = "請選擇鄉鎮區";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The leading "nothing selected" entry; its value is empty.
    pub fn placeholder(label: &str) -> Self {
        Self::new("", label)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

pub trait SearchView {
    fn set_city_options(&mut self, options: Vec<SelectOption>);
    fn set_district_options(&mut self, options: Vec<SelectOption>);

    fn set_loading(&mut self, visible: bool);

    /// `None` hides the statistics panel.
    fn set_stats(&mut self, total: Option<u64>);

    /// Replaces the result list. An empty list is the "no results" state.
    fn set_results(&mut self, cards: Vec<InstitutionCard>);

    /// Adds a notice above the results without touching them.
    fn prepend_notice(&mut self, notice: Notice);
    fn remove_notice(&mut self, id: u64) -> bool;

    fn show_status_panel(&mut self, panel: StatusPanel, hide_after: Duration);
    fn hide_status_panel(&mut self);
}
