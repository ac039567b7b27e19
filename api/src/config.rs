use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Page size used when a caller omits `limit` or supplies a non-positive one
    pub default_page_limit: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            default_page_limit: env::var("DEFAULT_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
