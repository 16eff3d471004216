use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub league_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// Body for season create (POST) and update (PUT).
#[derive(Debug, Clone, Serialize)]
pub struct SeasonPayload {
    pub name: String,
    pub league_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
}
