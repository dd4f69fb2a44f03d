pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

pub use config::AppConfig;
pub use error::InsightError;
pub use normalize::normalize_sessions;
pub use types::{NormalizedSession, SessionRecord};
