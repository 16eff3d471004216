use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed top-level game categories, in sidebar priority order.
pub const DIVISION_NAMES: [&str; 4] = ["Strategy", "Shooter", "Sports", "Other"];

/// Sort rank for a division name. The three named divisions hold fixed
/// priority slots; everything else shares the last rank and falls back to
/// alphabetical ordering at the call site.
pub fn division_rank(division: &str) -> u8 {
    match division {
        "Strategy" => 0,
        "Shooter" => 1,
        "Sports" => 2,
        _ => 3,
    }
}

/// One team row as served by `/api/teams/sidebar`. Read-only on the client;
/// mutations go through action routes and force a full reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
    pub game_id: i64,
    pub game_title: String,
    pub division: String,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub max_size: u32,
    #[serde(default)]
    pub size_options: Vec<u32>,
    pub manager_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidebarTeams {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub teams: Vec<TeamSummary>,
}

/// Game picker option from `/api/games-list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: i64,
    pub title: String,
    pub division: String,
    #[serde(default)]
    pub size_options: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamesList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub games: Vec<GameEntry>,
}

/// Body for team create/update action routes.
#[derive(Debug, Clone, Serialize)]
pub struct TeamPayload {
    pub name: String,
    pub game_id: i64,
    pub max_size: u32,
}

#[cfg(test)]
mod tests {
    use super::division_rank;

    #[test]
    fn named_divisions_rank_in_priority_order() {
        assert!(division_rank("Strategy") < division_rank("Shooter"));
        assert!(division_rank("Shooter") < division_rank("Sports"));
        assert!(division_rank("Sports") < division_rank("Other"));
    }

    #[test]
    fn unknown_divisions_share_the_last_rank() {
        assert_eq!(division_rank("Other"), division_rank("Fighting"));
    }
}
