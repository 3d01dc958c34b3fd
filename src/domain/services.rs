/// Splits a semicolon-delimited service list into trimmed labels.
///
/// Empty segments (`"a;;b"`, a trailing `;`) are dropped. `None` yields no
/// labels.
pub fn split_service_types(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(';')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
