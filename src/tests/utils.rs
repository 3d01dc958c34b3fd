use crate::api::{
    ApiError, City, DataStatus, DirectoryApi, District, Institution, RefreshReport, SearchResults,
};
use crate::controller::SearchController;
use crate::domain::SearchQuery;
use crate::view::PageView;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned `DirectoryApi` that records every call it receives.
#[derive(Clone)]
pub struct StubApi {
    cities: Result<Vec<City>, ApiError>,
    districts: HashMap<String, Result<Vec<District>, ApiError>>,
    search: Result<SearchResults, ApiError>,
    data_status: Result<DataStatus, ApiError>,
    refresh: Result<RefreshReport, ApiError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub fn new() -> Self {
        let mut districts = HashMap::new();
        districts.insert(
            "63000".to_string(),
            Ok(vec![district("63000030", "大安區"), district("63000040", "信義區")]),
        );
        districts.insert(
            "64000".to_string(),
            Ok(vec![district("64000050", "三民區")]),
        );

        Self {
            cities: Ok(vec![city("63000", "臺北市"), city("64000", "高雄市")]),
            districts,
            search: Ok(SearchResults {
                institutions: vec![],
                total: 0,
            }),
            data_status: Ok(DataStatus::default()),
            refresh: Ok(RefreshReport {
                total_records: 12345,
                update_time: "2026-10-19 08:30:00".into(),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_cities(mut self, cities: Result<Vec<City>, ApiError>) -> Self {
        self.cities = cities;
        self
    }

    pub fn with_districts(
        mut self,
        city_code: &str,
        districts: Result<Vec<District>, ApiError>,
    ) -> Self {
        self.districts.insert(city_code.to_string(), districts);
        self
    }

    pub fn with_search(mut self, search: Result<SearchResults, ApiError>) -> Self {
        self.search = search;
        self
    }

    pub fn with_data_status(mut self, status: Result<DataStatus, ApiError>) -> Self {
        self.data_status = status;
        self
    }

    pub fn with_refresh(mut self, refresh: Result<RefreshReport, ApiError>) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DirectoryApi for StubApi {
    fn cities(&self) -> Result<Vec<City>, ApiError> {
        self.record("cities".into());
        self.cities.clone()
    }

    fn districts(&self, city_code: &str) -> Result<Vec<District>, ApiError> {
        self.record(format!("districts:{city_code}"));
        self.districts
            .get(city_code)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchResults, ApiError> {
        let params: Vec<String> = query
            .params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        self.record(format!("search:{}", params.join("&")));
        self.search.clone()
    }

    fn data_status(&self) -> Result<DataStatus, ApiError> {
        self.record("data_status".into());
        self.data_status.clone()
    }

    fn refresh_data(&self) -> Result<RefreshReport, ApiError> {
        self.record("refresh_data".into());
        self.refresh.clone()
    }
}

pub fn city(code: &str, name: &str) -> City {
    City {
        code: code.into(),
        name: name.into(),
    }
}

pub fn district(code: &str, name: &str) -> District {
    District {
        code: code.into(),
        name: name.into(),
    }
}

/// An institution with only the mandatory fields filled in.
pub fn institution(code: &str, name: &str) -> Institution {
    Institution {
        code: code.into(),
        name: name.into(),
        address: "臺北市大安區復興南路一段1號".into(),
        contract_start: "2024-01-01".into(),
        contract_end: "2026-12-31".into(),
        ..Default::default()
    }
}

pub fn results(institutions: Vec<Institution>, total: u64) -> SearchResults {
    SearchResults {
        institutions,
        total,
    }
}

pub fn controller(api: StubApi) -> SearchController<StubApi, PageView> {
    SearchController::new(api, PageView::new(), Duration::from_secs(60))
}
