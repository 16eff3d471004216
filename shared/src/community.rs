use serde::{Deserialize, Serialize};

/// A per-game community the signed-in user can join or leave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub game_id: i64,
    pub name: String,
    pub division: String,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub joined: bool,
    #[serde(default)]
    pub gm_id: Option<i64>,
    #[serde(default)]
    pub gm_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommunitiesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub communities: Vec<Community>,
}

/// Body for the GM assignment action (elevated roles only).
#[derive(Debug, Clone, Serialize)]
pub struct AssignGmPayload {
    pub game_id: i64,
    pub user_id: i64,
}
