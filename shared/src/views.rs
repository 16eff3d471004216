use serde::{Deserialize, Serialize};

/// A permission-gated list mode for the teams sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamView {
    All,
    Manage,
    Play,
    Division,
}

impl TeamView {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamView::All => "all",
            TeamView::Manage => "manage",
            TeamView::Play => "play",
            TeamView::Division => "division",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "all" => Some(TeamView::All),
            "manage" => Some(TeamView::Manage),
            "play" => Some(TeamView::Play),
            "division" => Some(TeamView::Division),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamView::All => "All Teams",
            TeamView::Manage => "Teams I Manage",
            TeamView::Play => "Teams I Play On",
            TeamView::Division => "Filter by Division",
        }
    }

    /// Whether the rendered list groups rows by game.
    pub fn is_grouped(self) -> bool {
        matches!(self, TeamView::All | TeamView::Division)
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            TeamView::All => "No teams have been created yet.",
            TeamView::Manage => "You don't manage any teams.",
            TeamView::Play => "You're not on any teams yet.",
            TeamView::Division => "No teams in this division.",
        }
    }
}

/// A (value, label) pair describing one permitted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewOption {
    pub value: String,
    pub label: String,
}

impl ViewOption {
    pub fn for_view(view: TeamView) -> Self {
        Self {
            value: view.as_str().to_string(),
            label: view.label().to_string(),
        }
    }
}

/// Response shape of `/api/teams/available-views`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableViews {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub views: Vec<ViewOption>,
    #[serde(default)]
    pub has_multiple: bool,
}

#[cfg(test)]
mod tests {
    use super::TeamView;

    #[test]
    fn wire_values_round_trip() {
        for view in [
            TeamView::All,
            TeamView::Manage,
            TeamView::Play,
            TeamView::Division,
        ] {
            assert_eq!(TeamView::from_value(view.as_str()), Some(view));
        }
        assert_eq!(TeamView::from_value("bogus"), None);
    }

    #[test]
    fn only_all_and_division_views_group() {
        assert!(TeamView::All.is_grouped());
        assert!(TeamView::Division.is_grouped());
        assert!(!TeamView::Manage.is_grouped());
        assert!(!TeamView::Play.is_grouped());
    }
}
