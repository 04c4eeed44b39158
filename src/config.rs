use std::{env, str::FromStr};

/// How the `keyword` filter on the wishlist listing matches `wishlist_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMatch {
    Exact,
    /// Substring containment. Case sensitivity follows the backend's `LIKE`
    /// (sensitive on PostgreSQL, ASCII-insensitive on SQLite).
    #[default]
    Contains,
    ContainsIgnoreCase,
}

impl FromStr for KeywordMatch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "contains" => Ok(Self::Contains),
            "icontains" => Ok(Self::ContainsIgnoreCase),
            other => anyhow::bail!(
                "invalid KEYWORD_MATCH '{other}', expected one of: exact, contains, icontains"
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub keyword_match: KeywordMatch,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://development.db?mode=rwc".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let keyword_match = match env::var("KEYWORD_MATCH") {
            Ok(value) => value.parse()?,
            Err(_) => KeywordMatch::default(),
        };
        Ok(Self {
            port,
            database_url,
            host,
            keyword_match,
        })
    }
}
