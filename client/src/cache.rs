use std::collections::HashMap;

use clubdeck_shared::{TeamSummary, TeamView};

/// How long a fetched team list may be served without a network refetch.
pub const FRESHNESS_WINDOW_MS: i64 = 30_000;

/// Cache key for a view. The division view keys per selected division so
/// switching sub-filters doesn't evict each other's rows.
pub fn cache_key(view: TeamView, division: Option<&str>) -> String {
    match (view, division) {
        (TeamView::Division, Some(name)) => format!("division-{name}"),
        _ => view.as_str().to_string(),
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    teams: Vec<TeamSummary>,
    fetched_at_ms: i64,
}

/// In-memory team-list cache keyed by view. Mutated only from the main
/// thread; invalidated wholesale after any team mutation elsewhere in the
/// app.
#[derive(Debug, Clone, Default)]
pub struct SidebarCache {
    entries: HashMap<String, CacheEntry>,
}

impl SidebarCache {
    /// Rows for `key` if fetched within the freshness window, else None
    /// (caller must refetch).
    pub fn fresh(&self, key: &str, now_ms: i64) -> Option<&[TeamSummary]> {
        let entry = self.entries.get(key)?;
        if now_ms - entry.fetched_at_ms < FRESHNESS_WINDOW_MS {
            Some(&entry.teams)
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: String, teams: Vec<TeamSummary>, now_ms: i64) {
        self.entries.insert(
            key,
            CacheEntry {
                teams,
                fetched_at_ms: now_ms,
            },
        );
    }

    /// Coarse-grained invalidation: every entry and timestamp goes.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::{FRESHNESS_WINDOW_MS, SidebarCache, cache_key};
    use chrono::Utc;
    use clubdeck_shared::{TeamSummary, TeamView};

    fn team(id: i64) -> TeamSummary {
        TeamSummary {
            id,
            name: format!("Team {id}"),
            game_id: 1,
            game_title: "Starfall Tactics".into(),
            division: "Strategy".into(),
            member_count: 3,
            max_size: 5,
            size_options: vec![3, 5],
            manager_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn read_within_window_hits() {
        let mut cache = SidebarCache::default();
        cache.insert("all".into(), vec![team(1), team(2)], 1_000);

        let hit = cache.fresh("all", 1_000 + FRESHNESS_WINDOW_MS - 1);
        assert_eq!(hit.map(<[TeamSummary]>::len), Some(2));
    }

    #[test]
    fn read_at_window_boundary_misses() {
        let mut cache = SidebarCache::default();
        cache.insert("all".into(), vec![team(1)], 1_000);

        assert!(cache.fresh("all", 1_000 + FRESHNESS_WINDOW_MS).is_none());
    }

    #[test]
    fn absent_key_misses() {
        let cache = SidebarCache::default();
        assert!(cache.fresh("manage", 0).is_none());
    }

    #[test]
    fn invalidate_all_clears_every_key() {
        let mut cache = SidebarCache::default();
        cache.insert("all".into(), vec![team(1)], 1_000);
        cache.insert("division-Shooter".into(), vec![team(2)], 1_000);

        cache.invalidate_all();
        assert!(cache.is_empty());
        assert!(cache.fresh("all", 1_001).is_none());
        assert!(cache.fresh("division-Shooter", 1_001).is_none());
    }

    #[test]
    fn division_view_keys_per_division() {
        assert_eq!(cache_key(TeamView::All, None), "all");
        assert_eq!(cache_key(TeamView::Manage, Some("Shooter")), "manage");
        assert_eq!(
            cache_key(TeamView::Division, Some("Shooter")),
            "division-Shooter"
        );
        assert_eq!(cache_key(TeamView::Division, None), "division");
    }
}
