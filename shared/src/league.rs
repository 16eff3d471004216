use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub game_id: i64,
    #[serde(default)]
    pub game_title: Option<String>,
    #[serde(default)]
    pub team_count: u32,
}

/// `/league/list` answers either a bare `{leagues: [...]}` or a full
/// `{success, leagues}` envelope depending on the route; both decode here.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaguesResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub leagues: Vec<League>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaguePayload {
    pub name: String,
    pub game_id: i64,
}
