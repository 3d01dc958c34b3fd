pub mod format;
pub mod query;
pub mod services;

pub use format::{format_count, format_timestamp};
pub use query::{FormState, SearchQuery};
pub use services::split_service_types;
