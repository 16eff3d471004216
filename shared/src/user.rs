use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site-wide and per-game roles. `GameManager` has authority over one
/// game's teams and events; `Admin` and `Developer` are elevated site-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Developer,
    GameManager,
    Member,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::GameManager => "gm",
            Role::Member => "member",
        }
    }

    pub fn from_permission(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "developer" => Some(Role::Developer),
            "gm" => Some(Role::GameManager),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Admin | Role::Developer)
    }
}

/// Parse the comma-separated permission string exposed by the session
/// globals. Unknown entries are dropped.
pub fn parse_permissions(raw: &str) -> Vec<Role> {
    raw.split(',')
        .map(str::trim)
        .filter_map(Role::from_permission)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserRow {
    pub id: i64,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUsersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub users: Vec<AdminUserRow>,
}

/// Profile shape consumed by the profile panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePayload {
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Role, parse_permissions};

    #[test]
    fn parses_comma_separated_permissions() {
        let roles = parse_permissions("admin, gm");
        assert_eq!(roles, vec![Role::Admin, Role::GameManager]);
    }

    #[test]
    fn drops_unknown_permission_entries() {
        let roles = parse_permissions("member,superuser");
        assert_eq!(roles, vec![Role::Member]);
    }

    #[test]
    fn only_admin_and_developer_are_elevated() {
        assert!(Role::Admin.is_elevated());
        assert!(Role::Developer.is_elevated());
        assert!(!Role::GameManager.is_elevated());
        assert!(!Role::Member.is_elevated());
    }
}
