// client.rs
use crate::api::{ApiError, City, DataStatus, District, RefreshReport, SearchResults};
use crate::domain::SearchQuery;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("ltc_search/", env!("CARGO_PKG_VERSION"));

/// The backend contract the search controller depends on.
///
/// Every method is a blocking round trip; callers that share state must
/// not hold a lock across these calls.
pub trait DirectoryApi {
    fn cities(&self) -> Result<Vec<City>, ApiError>;
    fn districts(&self, city_code: &str) -> Result<Vec<District>, ApiError>;
    fn search(&self, query: &SearchQuery) -> Result<SearchResults, ApiError>;
    fn data_status(&self) -> Result<DataStatus, ApiError>;
    fn refresh_data(&self) -> Result<RefreshReport, ApiError>;
}

#[derive(Clone)]
pub struct HttpDirectoryApi {
    client: Client,
    base: Url,
}

impl HttpDirectoryApi {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(api_base)
            .map_err(|e| ApiError::InvalidBase(format!("{api_base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(api_base.to_string()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base })
    }

    /// Appends path segments to the base, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, ?query, "directory api request");

        let response = self.client.get(url).query(query).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        decode_body(status, &body)
    }
}

impl DirectoryApi for HttpDirectoryApi {
    fn cities(&self) -> Result<Vec<City>, ApiError> {
        self.get_json(self.endpoint(&["cities"])?, &[])
    }

    fn districts(&self, city_code: &str) -> Result<Vec<District>, ApiError> {
        self.get_json(self.endpoint(&["districts", city_code])?, &[])
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchResults, ApiError> {
        self.get_json(self.endpoint(&["institutions"])?, &query.params())
    }

    fn data_status(&self) -> Result<DataStatus, ApiError> {
        self.get_json(self.endpoint(&["data-info"])?, &[])
    }

    fn refresh_data(&self) -> Result<RefreshReport, ApiError> {
        self.get_json(self.endpoint(&["refresh-data"])?, &[])
    }
}

/// Turns a response body into `T`.
///
/// A truthy top-level `error` field wins over everything else, whatever the
/// HTTP status was. A body that is not JSON at all is a parse failure, or a
/// status failure when the status was not 2xx.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let success = (200..300).contains(&status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !success => return Err(ApiError::Status { status }),
        Err(e) => return Err(ApiError::JsonParse(e.to_string())),
    };

    if let Some(message) = value.get("error").and_then(truthy_message) {
        return Err(ApiError::Remote(message));
    }

    if !success {
        return Err(ApiError::Status { status });
    }

    serde_json::from_value(value).map_err(|e| ApiError::JsonParse(e.to_string()))
}

fn truthy_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("unknown error".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
