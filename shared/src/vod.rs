use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One VOD row; `/api/vods/team/:id` serves these as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vod {
    pub id: i64,
    pub team_id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub added_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VodPayload {
    pub team_id: i64,
    pub title: String,
    pub url: String,
}
