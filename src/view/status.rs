use crate::api::DataStatus;

/// Content of the transient data-status panel.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusPanel {
    Available {
        file_date: String,
        days_old: f64,
        total_records: u64,
        needs_update: bool,
    },
    /// The backend has no local copy yet; it downloads on first search.
    MissingLocalFile,
}

impl From<&DataStatus> for StatusPanel {
    fn from(status: &DataStatus) -> Self {
        if !status.local_file_exists {
            return StatusPanel::MissingLocalFile;
        }

        StatusPanel::Available {
            file_date: status.file_date.clone().unwrap_or_default(),
            days_old: status.days_old.unwrap_or(0.0),
            total_records: status.total_records,
            needs_update: status.needs_update.unwrap_or(false),
        }
    }
}
