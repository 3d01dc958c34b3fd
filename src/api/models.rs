use serde::{Deserialize, Deserializer};

// Wire shapes of the directory backend. Every endpoint answers UTF-8 JSON;
// error envelopes are filtered out in `client::decode_body` before these
// types are touched.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct City {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct District {
    pub code: String,
    pub name: String,
}

/// One long-term-care provider as returned by `GET /institutions`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Institution {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,

    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,

    /// Semicolon-delimited, e.g. `"日間照顧; 居家服務"`.
    #[serde(default)]
    pub service_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub contract_start: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contract_end: String,

    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSearchResults")]
pub struct SearchResults {
    pub institutions: Vec<Institution>,
    /// Total matches server-side; may exceed `institutions.len()` when the
    /// backend truncates the page.
    pub total: u64,
}

#[derive(Deserialize)]
struct RawSearchResults {
    #[serde(default)]
    institutions: Vec<Institution>,
    #[serde(default)]
    total: Option<u64>,
}

impl From<RawSearchResults> for SearchResults {
    fn from(raw: RawSearchResults) -> Self {
        let total = raw.total.unwrap_or(raw.institutions.len() as u64);
        Self {
            institutions: raw.institutions,
            total,
        }
    }
}

/// Freshness of the backend's cached dataset (`GET /data-info`).
///
/// The backend only reports `file_date`, `days_old` and `needs_update`
/// when its local file exists.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DataStatus {
    #[serde(default)]
    pub local_file_exists: bool,
    #[serde(default)]
    pub needs_update: Option<bool>,
    #[serde(default)]
    pub file_date: Option<String>,
    #[serde(default)]
    pub days_old: Option<f64>,
    #[serde(default)]
    pub total_records: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RefreshReport {
    #[serde(default)]
    pub total_records: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub update_time: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
