use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use std::collections::HashSet;

use clubdeck_shared::{GameEntry, TeamSummary, TeamView, ViewOption};

use crate::api;
use crate::cache::SidebarCache;
use crate::session::Session;
use crate::sidebar::{Sidebar, SidebarHandles};
use crate::storage::{
    KEY_COLLAPSED_DIVISIONS, KEY_COLLAPSED_GAMES, KEY_DIVISION_FILTER, KeyValueStore, SessionStore,
    load_name_set,
};

/// Newtype wrappers give same-shaped signals distinct types for Leptos
/// context (two `RwSignal<Option<String>>` would overwrite each other).
#[derive(Clone, Copy)]
pub(crate) struct SelectedTeam(pub RwSignal<Option<i64>>);
#[derive(Clone, Copy)]
pub(crate) struct PermittedViews(pub RwSignal<Vec<ViewOption>>);
#[derive(Clone, Copy)]
pub(crate) struct CollapsedDivisions(pub RwSignal<HashSet<String>>);
#[derive(Clone, Copy)]
pub(crate) struct CollapsedGames(pub RwSignal<HashSet<String>>);
#[derive(Clone, Copy)]
pub(crate) struct GamesCatalog(pub RwSignal<Vec<GameEntry>>);
#[derive(Clone, Copy)]
pub(crate) struct EditingTeam(pub RwSignal<Option<TeamEditorState>>);

/// Editor target: an existing team, or `None` for team creation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TeamEditorState {
    pub team: Option<TeamSummary>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Events,
    Leagues,
    Seasons,
    Communities,
    Vods,
    Profile,
    Admin,
}

impl Panel {
    fn label(self) -> &'static str {
        match self {
            Panel::Events => "Events",
            Panel::Leagues => "Leagues",
            Panel::Seasons => "Seasons",
            Panel::Communities => "Communities",
            Panel::Vods => "VODs",
            Panel::Profile => "Profile",
            Panel::Admin => "Admin",
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct ActivePanel(pub RwSignal<Panel>);

pub(crate) const PANEL_HEADER_STYLE: &str = "padding: 14px 24px 8px; font-family: 'Silkscreen', monospace; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.14em; color: #5a5860;";
pub(crate) const STATUS_STYLE_OK: &str = "padding: 6px 24px; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; color: #50c878;";
pub(crate) const STATUS_STYLE_ERR: &str = "padding: 6px 24px; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; color: #e06c75;";

/// Inline status region shared by the mutation panels: `Ok` in green,
/// `Err` in red, server text shown verbatim.
#[component]
pub(crate) fn StatusRegion(status: RwSignal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        status.get().map(|result| match result {
            Ok(text) => view! { <div style=STATUS_STYLE_OK>{text}</div> },
            Err(text) => view! { <div style=STATUS_STYLE_ERR>{text}</div> },
        })
    }
}

/// Root application component. Provides global reactive signals via context.
#[component]
pub fn App() -> impl IntoView {
    let session = Session::from_window();
    let store = SessionStore;

    // Sidebar state
    let current_view: RwSignal<TeamView> = RwSignal::new(TeamView::All);
    let permitted_views: RwSignal<Vec<ViewOption>> = RwSignal::new(Vec::new());
    let division_filter: RwSignal<Option<String>> =
        RwSignal::new(store.get(KEY_DIVISION_FILTER).filter(|name| !name.is_empty()));
    let selected_team: RwSignal<Option<i64>> = RwSignal::new(None);
    let sidebar_teams: RwSignal<Vec<TeamSummary>> = RwSignal::new(Vec::new());
    let sidebar_subtitle: RwSignal<String> = RwSignal::new(String::new());
    let sidebar_loading: RwSignal<bool> = RwSignal::new(false);
    let sidebar_error: RwSignal<Option<String>> = RwSignal::new(None);
    let load_nonce: RwSignal<u64> = RwSignal::new(0);
    let team_cache: StoredValue<SidebarCache> = StoredValue::new(SidebarCache::default());
    let collapsed_divisions: RwSignal<HashSet<String>> =
        RwSignal::new(load_name_set(&store, KEY_COLLAPSED_DIVISIONS));
    let collapsed_games: RwSignal<HashSet<String>> =
        RwSignal::new(load_name_set(&store, KEY_COLLAPSED_GAMES));
    let editing_team: RwSignal<Option<TeamEditorState>> = RwSignal::new(None);

    // App-wide state
    let games: RwSignal<Vec<GameEntry>> = RwSignal::new(Vec::new());
    let active_panel: RwSignal<Panel> = RwSignal::new(Panel::Events);

    let handles = SidebarHandles {
        view: current_view,
        division: division_filter,
        teams: sidebar_teams,
        subtitle: sidebar_subtitle,
        loading: sidebar_loading,
        error: sidebar_error,
        nonce: load_nonce,
        cache: team_cache,
        selected: selected_team,
    };

    provide_context(session.clone());
    provide_context(handles);
    provide_context(SelectedTeam(selected_team));
    provide_context(PermittedViews(permitted_views));
    provide_context(CollapsedDivisions(collapsed_divisions));
    provide_context(CollapsedGames(collapsed_games));
    provide_context(GamesCatalog(games));
    provide_context(EditingTeam(editing_team));
    provide_context(ActivePanel(active_panel));

    // Game catalog is shared by the event form, team editor and communities
    // panel; fetched once on mount.
    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_games().await {
                Ok(list) => games.set(list),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Games list fetch failed: {e}").into());
                }
            }
        });
    });

    let elevated = session.is_elevated();
    let panels: Vec<Panel> = {
        let mut panels = vec![
            Panel::Events,
            Panel::Leagues,
            Panel::Seasons,
            Panel::Communities,
            Panel::Vods,
            Panel::Profile,
        ];
        if elevated {
            panels.push(Panel::Admin);
        }
        panels
    };

    view! {
        <div style="width: 100%; height: 100%; display: flex; flex-direction: column; background: #0c0e17; color: #e2e0d8;">
            <AppHeader panels=panels />
            <div style="flex: 1; display: flex; min-height: 0;">
                <Sidebar />
                <main class="scrollbar-thin" style="flex: 1; overflow-y: auto; border-left: 1px solid #282c3e;">
                    {move || match active_panel.get() {
                        Panel::Events => view! { <crate::events::EventsPanel /> }.into_any(),
                        Panel::Leagues => view! { <crate::leagues::LeaguesPanel /> }.into_any(),
                        Panel::Seasons => view! { <crate::seasons::SeasonsPanel /> }.into_any(),
                        Panel::Communities => {
                            view! { <crate::communities::CommunitiesPanel /> }.into_any()
                        }
                        Panel::Vods => view! { <crate::vods::VodsPanel /> }.into_any(),
                        Panel::Profile => view! { <crate::profile::ProfilePanel /> }.into_any(),
                        Panel::Admin => view! { <crate::admin::AdminPanel /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
fn AppHeader(panels: Vec<Panel>) -> impl IntoView {
    let ActivePanel(active_panel) = expect_context();

    view! {
        <header style="display: flex; align-items: center; gap: 18px; padding: 12px 24px; border-bottom: 1px solid #282c3e; background: #13161f;">
            <div style="display: flex; align-items: baseline; gap: 10px;">
                <div class="text-gold-gradient" style="font-family: 'Silkscreen', monospace; font-size: 1.25rem; font-weight: 700; letter-spacing: 0.18em; text-transform: uppercase;">"CLUBDECK"</div>
                <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.58rem; color: #3a3f5c; background: #1a1d2a; padding: 1px 6px; border-radius: 3px; border: 1px solid rgba(245,197,66,0.15);">"v0.1"</div>
            </div>
            <nav style="display: flex; gap: 4px; margin-left: auto;">
                {panels
                    .into_iter()
                    .map(|panel| {
                        view! {
                            <button
                                style=move || {
                                    let active = active_panel.get() == panel;
                                    format!(
                                        "padding: 5px 12px; border: none; border-radius: 4px; cursor: pointer; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; background: {}; color: {};",
                                        if active { "rgba(245,197,66,0.12)" } else { "transparent" },
                                        if active { "#f5c542" } else { "#7c829e" },
                                    )
                                }
                                on:click=move |_| active_panel.set(panel)
                            >
                                {panel.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
