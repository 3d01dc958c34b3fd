// src/domain/query.rs

/// Filters for `GET /institutions`, combined with AND server-side.
///
/// Blank fields never survive construction, so `None` always means
/// "no filter on that field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub city: Option<String>,
    pub district: Option<String>,
    pub service_type: Option<String>,
}

impl SearchQuery {
    pub fn new(city: &str, district: &str, service_type: &str) -> Self {
        Self {
            city: non_blank(city),
            district: non_blank(district),
            service_type: non_blank(service_type),
        }
    }

    /// Query-string pairs, with absent filters omitted.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("city", self.city.as_deref()),
            ("district", self.district.as_deref()),
            ("service_type", self.service_type.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// What the user has currently entered in the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub city: String,
    pub district: String,
    pub service_type: String,
}

impl FormState {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(&self.city, &self.district, &self.service_type)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
