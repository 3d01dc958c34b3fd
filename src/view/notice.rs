#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Bootstrap contextual suffix (`alert-danger`, ...).
    pub fn css_suffix(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// A dismissible alert shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub severity: Severity,
    /// Rendered one per line.
    pub lines: Vec<String>,
}

impl Notice {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
