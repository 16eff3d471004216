use clubdeck_shared::{TeamSummary, division_rank};

/// Stable sidebar order: division rank first (Strategy, Shooter, Sports,
/// then alphabetical for anything else), then game title case-insensitive,
/// then creation time ascending.
pub fn sort_teams(teams: &mut [TeamSummary]) {
    teams.sort_by(|a, b| {
        division_rank(&a.division)
            .cmp(&division_rank(&b.division))
            .then_with(|| {
                // Unranked divisions fall back to alphabetical between themselves.
                if division_rank(&a.division) == 3 {
                    a.division.cmp(&b.division)
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .then_with(|| {
                a.game_title
                    .to_lowercase()
                    .cmp(&b.game_title.to_lowercase())
            })
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

/// One collapsible sidebar group: every team of a single game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameGroup {
    pub game_id: i64,
    pub game_title: String,
    pub division: String,
    pub teams: Vec<TeamSummary>,
}

/// Group an already-sorted list by consecutive game id.
pub fn group_by_game(teams: Vec<TeamSummary>) -> Vec<GameGroup> {
    let mut groups: Vec<GameGroup> = Vec::new();
    for team in teams {
        match groups.last_mut() {
            Some(group) if group.game_id == team.game_id => group.teams.push(team),
            _ => groups.push(GameGroup {
                game_id: team.game_id,
                game_title: team.game_title.clone(),
                division: team.division.clone(),
                teams: vec![team],
            }),
        }
    }
    groups
}

/// A division heading with its consecutive run of game groups.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionSection {
    pub division: String,
    pub groups: Vec<GameGroup>,
}

/// Fold sorted game groups into division sections for the grouped views.
pub fn section_by_division(groups: Vec<GameGroup>) -> Vec<DivisionSection> {
    let mut sections: Vec<DivisionSection> = Vec::new();
    for group in groups {
        match sections.last_mut() {
            Some(section) if section.division == group.division => section.groups.push(group),
            _ => sections.push(DivisionSection {
                division: group.division.clone(),
                groups: vec![group],
            }),
        }
    }
    sections
}

/// Client-side restriction of a view's rows to one division.
pub fn filter_division(teams: Vec<TeamSummary>, division: &str) -> Vec<TeamSummary> {
    teams
        .into_iter()
        .filter(|team| team.division == division)
        .collect()
}

/// Human-readable list subtitle: `"{label} ({count})"`.
pub fn subtitle(label: &str, count: usize) -> String {
    format!("{label} ({count})")
}

/// List label when a division sub-filter is active.
pub fn division_label(division: &str) -> String {
    format!("{division} Teams")
}

#[cfg(test)]
mod tests {
    use super::{division_label, filter_division, group_by_game, sort_teams, subtitle};
    use chrono::{TimeZone, Utc};
    use clubdeck_shared::TeamSummary;

    fn team(id: i64, division: &str, game_id: i64, game_title: &str) -> TeamSummary {
        TeamSummary {
            id,
            name: format!("Team {id}"),
            game_id,
            game_title: game_title.into(),
            division: division.into(),
            member_count: 3,
            max_size: 5,
            size_options: vec![3, 5],
            manager_id: 1,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, id as u32).unwrap(),
        }
    }

    #[test]
    fn division_rank_wins_over_game_title() {
        let mut teams = vec![
            team(1, "Sports", 2, "B"),
            team(2, "Strategy", 1, "A"),
            team(3, "Other", 3, "Z"),
        ];
        sort_teams(&mut teams);
        let order: Vec<&str> = teams.iter().map(|t| t.division.as_str()).collect();
        assert_eq!(order, vec!["Strategy", "Sports", "Other"]);
    }

    #[test]
    fn game_title_compares_case_insensitively() {
        let mut teams = vec![
            team(1, "Strategy", 2, "zephyr"),
            team(2, "Strategy", 1, "Aurora"),
        ];
        sort_teams(&mut teams);
        assert_eq!(teams[0].game_title, "Aurora");
    }

    #[test]
    fn unranked_divisions_sort_alphabetically() {
        let mut teams = vec![
            team(1, "Racing", 2, "A"),
            team(2, "Fighting", 1, "B"),
        ];
        sort_teams(&mut teams);
        assert_eq!(teams[0].division, "Fighting");
    }

    #[test]
    fn equal_keys_keep_creation_order() {
        let mut teams = vec![
            team(5, "Shooter", 1, "Ironsight"),
            team(2, "Shooter", 1, "Ironsight"),
        ];
        sort_teams(&mut teams);
        let ids: Vec<i64> = teams.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn five_teams_over_two_games_make_two_groups() {
        let teams = vec![
            team(1, "Shooter", 1, "Ironsight"),
            team(2, "Shooter", 1, "Ironsight"),
            team(3, "Shooter", 1, "Ironsight"),
            team(4, "Strategy", 2, "Starfall"),
            team(5, "Strategy", 2, "Starfall"),
        ];
        let groups = group_by_game(teams);
        assert_eq!(groups.len(), 2);
        let total: usize = groups.iter().map(|g| g.teams.len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn sections_follow_consecutive_divisions() {
        let teams = vec![
            team(1, "Strategy", 1, "Starfall"),
            team(2, "Strategy", 2, "Hexfield"),
            team(3, "Shooter", 3, "Ironsight"),
        ];
        let sections = super::section_by_division(group_by_game(teams));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].division, "Strategy");
        assert_eq!(sections[0].groups.len(), 2);
        assert_eq!(sections[1].groups.len(), 1);
    }

    #[test]
    fn division_filter_yields_matching_rows_and_subtitle() {
        let mut teams = Vec::new();
        for id in 0..3 {
            teams.push(team(id, "Strategy", 1, "Starfall"));
        }
        for id in 3..7 {
            teams.push(team(id, "Shooter", 2, "Ironsight"));
        }
        for id in 7..10 {
            teams.push(team(id, "Other", 3, "Misc"));
        }

        let filtered = filter_division(teams, "Shooter");
        assert_eq!(filtered.len(), 4);
        assert_eq!(
            subtitle(&division_label("Shooter"), filtered.len()),
            "Shooter Teams (4)"
        );
    }
}
