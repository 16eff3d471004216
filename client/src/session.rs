use js_sys::Reflect;
use wasm_bindgen::JsValue;

use clubdeck_shared::{Role, TeamSummary, parse_permissions};

/// Signed-in user identity, read once at boot from the session globals the
/// server injects into the page (`window.currentUserId`,
/// `window.userPermissions`). Auth itself is not this layer's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub roles: Vec<Role>,
}

impl Session {
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let user_id = Reflect::get(window.as_ref(), &JsValue::from_str("currentUserId"))
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v as i64);

        let roles = Reflect::get(window.as_ref(), &JsValue::from_str("userPermissions"))
            .ok()
            .and_then(|v| v.as_string())
            .map(|raw| parse_permissions(&raw))
            .unwrap_or_default();

        Self { user_id, roles }
    }

    /// Admin or Developer: unlocks the division sub-filter, the admin panel
    /// and GM assignment.
    pub fn is_elevated(&self) -> bool {
        self.roles.iter().any(|role| role.is_elevated())
    }

    /// Whether this user manages the given team (shows the edit affordance).
    pub fn manages(&self, team: &TeamSummary) -> bool {
        self.user_id == Some(team.manager_id)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use chrono::Utc;
    use clubdeck_shared::{Role, TeamSummary};

    fn team(manager_id: i64) -> TeamSummary {
        TeamSummary {
            id: 1,
            name: "Night Owls".into(),
            game_id: 7,
            game_title: "Starfall Tactics".into(),
            division: "Strategy".into(),
            member_count: 4,
            max_size: 5,
            size_options: vec![3, 5],
            manager_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn elevation_requires_admin_or_developer() {
        let member = Session {
            user_id: Some(1),
            roles: vec![Role::Member, Role::GameManager],
        };
        assert!(!member.is_elevated());

        let dev = Session {
            user_id: Some(2),
            roles: vec![Role::Developer],
        };
        assert!(dev.is_elevated());
    }

    #[test]
    fn manages_matches_manager_id_only() {
        let session = Session {
            user_id: Some(9),
            roles: Vec::new(),
        };
        assert!(session.manages(&team(9)));
        assert!(!session.manages(&team(10)));

        let anonymous = Session::default();
        assert!(!anonymous.manages(&team(9)));
    }
}
