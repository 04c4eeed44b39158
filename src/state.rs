use sea_orm::DatabaseConnection;

use crate::config::KeywordMatch;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub keyword_match: KeywordMatch,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, keyword_match: KeywordMatch) -> Self {
        Self { orm, keyword_match }
    }
}
