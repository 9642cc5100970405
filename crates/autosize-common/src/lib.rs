pub mod errors;
pub mod types;

pub use errors::{AutosizeError, ConfigError};
pub use types::{FileLink, Rect, ReportChannel, Size};

pub type Result<T> = std::result::Result<T, AutosizeError>;
