use chrono::NaiveDateTime;

const BACKEND_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";
const DISPLAY_TIMESTAMP: &str = "%Y-%m-%d %H:%M";

/// Groups digits by thousands: `12345` -> `"12,345"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Normalises a backend timestamp for display.
///
/// Anything that does not parse is shown as the backend sent it.
pub fn format_timestamp(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw.trim(), BACKEND_TIMESTAMP)
        .map(|dt| dt.format(DISPLAY_TIMESTAMP).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
