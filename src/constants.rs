use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Multipart field carrying the university logo.
pub const LOGO_FIELD: &str = "logo";

/// Public path prefix under which stored uploads are served.
pub const UPLOADS_ROUTE: &str = "/uploads";
