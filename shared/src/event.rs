use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One calendar event as served by `/api/events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubEvent {
    pub id: i64,
    pub title: String,
    pub game_id: Option<i64>,
    #[serde(default)]
    pub game_title: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub events: Vec<ClubEvent>,
}

/// Body for `/api/event/create` and `/api/event/update`.
#[derive(Debug, Clone, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub game_id: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
}
