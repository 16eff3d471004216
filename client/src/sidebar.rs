use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{
    DIVISION_NAMES, TeamPayload, TeamSummary, TeamView, ViewOption, game_color,
};

use crate::api;
use crate::app::{
    CollapsedDivisions, CollapsedGames, EditingTeam, GamesCatalog, PermittedViews, TeamEditorState,
};
use crate::cache::{SidebarCache, cache_key, now_ms};
use crate::grouping::{
    DivisionSection, GameGroup, division_label, filter_division, group_by_game,
    section_by_division, sort_teams, subtitle,
};
use crate::session::Session;
use crate::storage::{
    KEY_COLLAPSED_DIVISIONS, KEY_COLLAPSED_GAMES, KEY_DIVISION_FILTER, KEY_SELECTED_VIEW,
    KeyValueStore, SessionStore, toggle_name,
};

fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Every signal the sidebar loader touches, passed as one copyable bundle
/// so panels elsewhere in the app can invalidate and reload after a team
/// mutation.
#[derive(Clone, Copy)]
pub(crate) struct SidebarHandles {
    pub view: RwSignal<TeamView>,
    pub division: RwSignal<Option<String>>,
    pub teams: RwSignal<Vec<TeamSummary>>,
    pub subtitle: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub nonce: RwSignal<u64>,
    pub cache: StoredValue<SidebarCache>,
    pub selected: RwSignal<Option<i64>>,
}

fn active_division(handles: SidebarHandles) -> Option<String> {
    if handles.view.get_untracked() == TeamView::Division {
        handles.division.get_untracked()
    } else {
        None
    }
}

fn list_label(view: TeamView, division: Option<&str>) -> String {
    match (view, division) {
        (TeamView::Division, Some(name)) => division_label(name),
        (TeamView::Division, None) => "All Divisions".to_string(),
        _ => view.label().to_string(),
    }
}

/// Final switcher contents and initial view: elevated users get the
/// division option appended, and a persisted view is restored only while
/// the server still permits it.
fn prepare_views(
    mut views: Vec<ViewOption>,
    elevated: bool,
    persisted: Option<&str>,
) -> (Vec<ViewOption>, TeamView) {
    if elevated && !views.iter().any(|v| v.value == TeamView::Division.as_str()) {
        views.push(ViewOption::for_view(TeamView::Division));
    }

    let restored = persisted
        .and_then(TeamView::from_value)
        .filter(|view| views.iter().any(|v| v.value == view.as_str()));
    let initial = restored
        .or_else(|| views.first().and_then(|v| TeamView::from_value(&v.value)))
        .unwrap_or(TeamView::All);

    (views, initial)
}

fn next_generation(current: u64) -> u64 {
    current.wrapping_add(1)
}

fn response_is_stale(latest: u64, request: u64) -> bool {
    latest != request
}

/// Load the current view's team list: serve a fresh cache entry directly,
/// otherwise fetch, filter, sort and cache. Overlapping loads are
/// disambiguated by a request-generation nonce; a response whose nonce no
/// longer matches the latest request is discarded. The generation advances
/// on every load, cache hit included, so a cache-served render also orphans
/// any still-in-flight response.
pub(crate) fn load_teams(handles: SidebarHandles) {
    let view = handles.view.get_untracked();
    let division = active_division(handles);
    let key = cache_key(view, division.as_deref());
    let label = list_label(view, division.as_deref());

    let request_nonce = next_generation(handles.nonce.get_untracked());
    handles.nonce.set(request_nonce);

    let cached = handles
        .cache
        .with_value(|cache| cache.fresh(&key, now_ms()).map(<[TeamSummary]>::to_vec));
    if let Some(rows) = cached {
        handles.subtitle.set(subtitle(&label, rows.len()));
        handles.teams.set(rows);
        handles.error.set(None);
        handles.loading.set(false);
        return;
    }

    handles.loading.set(true);
    handles.error.set(None);

    spawn_local(async move {
        match api::fetch_sidebar_teams(view).await {
            Ok(mut rows) => {
                if response_is_stale(handles.nonce.get_untracked(), request_nonce) {
                    return;
                }
                if let Some(name) = division.as_deref() {
                    rows = filter_division(rows, name);
                }
                sort_teams(&mut rows);
                handles
                    .cache
                    .update_value(|cache| cache.insert(key, rows.clone(), now_ms()));
                handles.subtitle.set(subtitle(&label, rows.len()));
                handles.teams.set(rows);
                handles.loading.set(false);
            }
            Err(e) => {
                if response_is_stale(handles.nonce.get_untracked(), request_nonce) {
                    return;
                }
                web_sys::console::warn_1(&format!("Team list fetch failed: {e}").into());
                handles.error.set(Some(e));
                handles.loading.set(false);
            }
        }
    });
}

/// Called after any team create/edit/delete anywhere in the app: drops every
/// cache entry, then reloads the current view from the network.
pub(crate) fn invalidate_and_reload(handles: SidebarHandles) {
    handles.cache.update_value(SidebarCache::invalidate_all);
    load_teams(handles);
}

fn on_view_change(handles: SidebarHandles, new_view: TeamView) {
    if handles.view.get_untracked() == new_view {
        return;
    }
    SessionStore.set(KEY_SELECTED_VIEW, new_view.as_str());
    handles.selected.set(None);
    handles.view.set(new_view);
    load_teams(handles);
}

/// Teams sidebar: view switcher, optional division sub-filter, grouped and
/// collapsible team list.
#[component]
pub fn Sidebar() -> impl IntoView {
    let handles: SidebarHandles = expect_context();
    let session: Session = expect_context();
    let PermittedViews(permitted_views) = expect_context();
    let EditingTeam(editing_team) = expect_context();

    let elevated = session.is_elevated();

    // Fetch permitted views once; any failure hides the switcher (the list
    // degrades to the default view) and logs to the console only.
    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_available_views().await {
                Ok(available) => {
                    let persisted = SessionStore.get(KEY_SELECTED_VIEW);
                    let (views, initial) =
                        prepare_views(available.views, elevated, persisted.as_deref());

                    // Gate on the post-append length: an elevated user whose
                    // server grants a single view still needs the switcher to
                    // reach the division option.
                    if views.len() > 1 {
                        permitted_views.set(views);
                    }
                    handles.view.set(initial);
                    load_teams(handles);
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("Available views fetch failed: {e}").into(),
                    );
                    load_teams(handles);
                }
            }
        });
    });

    view! {
        <aside style="width: 340px; min-width: 340px; background: #13161f; display: flex; flex-direction: column; min-height: 0;">
            <SidebarHeader />
            <ViewSwitcher />
            <Show when=move || {
                elevated && handles.view.get() == TeamView::Division
            }>
                <DivisionFilterRow />
            </Show>
            <div class="scrollbar-thin" style="flex: 1; overflow-y: auto;">
                <TeamList />
            </div>
            {move || {
                editing_team
                    .get()
                    .map(|state| view! { <TeamEditor state=state /> })
            }}
        </aside>
    }
}

#[component]
fn SidebarHeader() -> impl IntoView {
    let handles: SidebarHandles = expect_context();
    let EditingTeam(editing_team) = expect_context();

    view! {
        <div style="padding: 16px 24px 10px; border-bottom: 1px solid #282c3e;">
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <div style="font-family: 'Silkscreen', monospace; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.14em; color: #5a5860;">
                    <span style="color: #f5c542; margin-right: 6px; font-size: 0.7rem;">{"\u{25C6}"}</span>"Teams"
                </div>
                <button
                    style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #9a9590; font-family: 'JetBrains Mono', monospace; font-size: 0.62rem; padding: 3px 8px; cursor: pointer;"
                    on:click=move |_| editing_team.set(Some(TeamEditorState { team: None }))
                >
                    "+ New Team"
                </button>
            </div>
            <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; color: #9a9590; margin-top: 6px;">
                {move || handles.subtitle.get()}
            </div>
            <div class="divider-gold" style="margin-top: 10px;" />
        </div>
    }
}

#[component]
fn ViewSwitcher() -> impl IntoView {
    let handles: SidebarHandles = expect_context();
    let PermittedViews(permitted_views) = expect_context();

    let on_change = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        if let Some(view) = TeamView::from_value(&select.value()) {
            on_view_change(handles, view);
        }
    };

    // Hidden entirely when zero or one view is permitted.
    view! {
        <Show when=move || (permitted_views.get().len() > 1)>
            <div style="padding: 10px 24px; border-bottom: 1px solid #282c3e;">
                <select
                    on:change=on_change
                    style="width: 100%; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; padding: 6px 8px; outline: none;"
                >
                    {move || {
                        permitted_views
                            .get()
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || {
                                            handles.view.get().as_str() == selected_value
                                        }
                                    >
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </Show>
    }
}

#[component]
fn DivisionFilterRow() -> impl IntoView {
    let handles: SidebarHandles = expect_context();

    let on_change = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        let value = select.value();
        let chosen = (value != "all").then_some(value);
        match &chosen {
            Some(name) => SessionStore.set(KEY_DIVISION_FILTER, name),
            None => SessionStore.remove(KEY_DIVISION_FILTER),
        }
        handles.selected.set(None);
        handles.division.set(chosen);
        load_teams(handles);
    };

    view! {
        <div style="padding: 10px 24px; border-bottom: 1px solid #282c3e;">
            <select
                on:change=on_change
                style="width: 100%; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; padding: 6px 8px; outline: none;"
            >
                <option value="all" selected=move || handles.division.get().is_none()>
                    "All Divisions"
                </option>
                {DIVISION_NAMES
                    .iter()
                    .map(|&name| {
                        view! {
                            <option
                                value=name
                                selected=move || handles.division.get().as_deref() == Some(name)
                            >
                                {name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn TeamList() -> impl IntoView {
    let handles: SidebarHandles = expect_context();

    move || {
        if handles.loading.get() {
            return view! {
                <div style="padding: 24px; text-align: center;">
                    <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c; letter-spacing: 0.05em;">"Loading teams..."</div>
                </div>
            }
            .into_any();
        }
        if let Some(message) = handles.error.get() {
            return view! {
                <div style="padding: 24px; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #e06c75;">
                    {message}
                </div>
            }
            .into_any();
        }

        let rows = handles.teams.get();
        let view_kind = handles.view.get();
        if rows.is_empty() {
            return view! {
                <div style="padding: 24px; font-family: 'Inter', system-ui, sans-serif; font-size: 0.82rem; color: #5a5860;">
                    {view_kind.empty_message()}
                </div>
            }
            .into_any();
        }

        if view_kind.is_grouped() {
            let sections = section_by_division(group_by_game(rows));
            view! {
                <div style="padding: 8px 12px 12px;">
                    {sections
                        .into_iter()
                        .map(|section| view! { <DivisionSectionView section=section /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        } else {
            view! {
                <ul style="list-style: none; padding: 8px 12px 12px; margin: 0;">
                    {rows
                        .into_iter()
                        .map(|team| view! { <TeamRow team=team /> })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }
    }
}

#[component]
fn DivisionSectionView(section: DivisionSection) -> impl IntoView {
    let CollapsedDivisions(collapsed_divisions) = expect_context();

    let DivisionSection { division, groups } = section;
    let title = division.clone();
    let toggle_division = division.clone();
    let is_collapsed = move || collapsed_divisions.get().contains(&division);
    let caret = is_collapsed.clone();
    let collapsed_for_groups = is_collapsed.clone();
    let team_count: usize = groups.iter().map(|g| g.teams.len()).sum();

    let on_toggle = move |_| {
        toggle_name(&SessionStore, KEY_COLLAPSED_DIVISIONS, &toggle_division);
        let name = toggle_division.clone();
        collapsed_divisions.update(|set| {
            if !set.remove(&name) {
                set.insert(name);
            }
        });
    };

    view! {
        <div style="margin-top: 6px;">
            <div
                style="display: flex; align-items: center; justify-content: space-between; padding: 6px 10px; border-radius: 4px; cursor: pointer; font-family: 'JetBrains Mono', monospace; font-size: 0.62rem; text-transform: uppercase; letter-spacing: 0.12em; color: #5a5860;"
                on:click=on_toggle
            >
                <span>
                    <span style="color: #f5c542; margin-right: 6px;">
                        {move || if caret() { "\u{25B8}" } else { "\u{25BE}" }}
                    </span>
                    {title}
                </span>
                <span>{format!("{team_count}")}</span>
            </div>
            <Show when=move || !collapsed_for_groups()>
                {groups
                    .clone()
                    .into_iter()
                    .map(|group| view! { <GameGroupView group=group /> })
                    .collect_view()}
            </Show>
        </div>
    }
}

#[component]
fn GameGroupView(group: GameGroup) -> impl IntoView {
    let CollapsedGames(collapsed_games) = expect_context();

    let GameGroup {
        game_title, teams, ..
    } = group;
    let title = game_title.clone();
    let toggle_title = game_title.clone();
    let watched_title = game_title.clone();
    let is_collapsed = move || collapsed_games.get().contains(&watched_title);
    let caret = is_collapsed.clone();
    let collapsed_for_rows = is_collapsed.clone();
    let (r, g, b) = game_color(&game_title);
    let team_count = teams.len();

    let on_toggle = move |_| {
        toggle_name(&SessionStore, KEY_COLLAPSED_GAMES, &toggle_title);
        let name = toggle_title.clone();
        collapsed_games.update(|set| {
            if !set.remove(&name) {
                set.insert(name);
            }
        });
    };

    view! {
        <div style="margin: 2px 0 2px 8px;">
            <div
                style="display: flex; align-items: center; gap: 8px; padding: 6px 10px; border-radius: 4px; cursor: pointer;"
                on:click=on_toggle
                on:mouseenter=|e| {
                    if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                        el.style().set_property("background", "#232738").ok();
                    }
                }
                on:mouseleave=|e| {
                    if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                        el.style().set_property("background", "transparent").ok();
                    }
                }
            >
                <div style=format!(
                    "width: 12px; height: 12px; border-radius: 3px; border: 1px solid rgba(255,255,255,0.1); flex-shrink: 0; background: {};",
                    rgba_css(r, g, b, 0.8)
                ) />
                <span style="flex: 1; font-size: 0.82rem; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                    {title}
                </span>
                <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; color: #3a3f5c;">
                    {move || {
                        if caret() {
                            format!("{team_count} \u{25B8}")
                        } else {
                            format!("{team_count} \u{25BE}")
                        }
                    }}
                </span>
            </div>
            <Show when=move || !collapsed_for_rows()>
                <ul style="list-style: none; margin: 0; padding: 0 0 0 12px;">
                    {teams
                        .clone()
                        .into_iter()
                        .map(|team| view! { <TeamRow team=team /> })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn TeamRow(team: TeamSummary) -> impl IntoView {
    let handles: SidebarHandles = expect_context();
    let session: Session = expect_context();
    let EditingTeam(editing_team) = expect_context();

    let team_id = team.id;
    let manages = session.manages(&team);
    let edit_target = team.clone();

    view! {
        <li
            style="display: flex; align-items: center; gap: 8px; padding: 6px 10px; border-radius: 4px; cursor: pointer; transition: background 0.15s, box-shadow 0.15s;"
            style:box-shadow=move || {
                if handles.selected.get() == Some(team_id) {
                    "inset 2px 0 0 #f5c542"
                } else {
                    "none"
                }
            }
            on:click=move |_| handles.selected.set(Some(team_id))
            on:mouseenter=|e| {
                if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                    el.style().set_property("background", "#232738").ok();
                }
            }
            on:mouseleave=|e| {
                if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                    el.style().set_property("background", "transparent").ok();
                }
            }
        >
            <div style="flex: 1; min-width: 0;">
                <div style="font-size: 0.85rem; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                    {team.name.clone()}
                </div>
                <div style="font-size: 0.68rem; color: #9a9590; font-family: 'JetBrains Mono', monospace;">
                    {team.game_title.clone()}
                </div>
            </div>
            <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #9a9590; flex-shrink: 0;">
                {format!("{}/{}", team.member_count, team.max_size)}
            </span>
            {manages.then(|| {
                view! {
                    <button
                        title="Edit team"
                        style="background: transparent; border: none; color: #5a5860; cursor: pointer; font-size: 0.72rem; padding: 2px;"
                        on:click=move |e: leptos::ev::MouseEvent| {
                            e.stop_propagation();
                            editing_team.set(Some(TeamEditorState {
                                team: Some(edit_target.clone()),
                            }));
                        }
                    >
                        {"\u{270E}"}
                    </button>
                }
            })}
        </li>
    }
}

/// Inline editor for team create/update/delete. Any successful mutation
/// drops the whole cache and reloads the current view.
#[component]
fn TeamEditor(state: TeamEditorState) -> impl IntoView {
    let handles: SidebarHandles = expect_context();
    let EditingTeam(editing_team) = expect_context();
    let GamesCatalog(games) = expect_context();

    let is_edit = state.team.is_some();
    let team_id = state.team.as_ref().map(|t| t.id);
    let name: RwSignal<String> = RwSignal::new(
        state
            .team
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default(),
    );
    let game_id: RwSignal<Option<i64>> = RwSignal::new(state.team.as_ref().map(|t| t.game_id));
    let max_size: RwSignal<u32> =
        RwSignal::new(state.team.as_ref().map(|t| t.max_size).unwrap_or(5));
    let size_options: Vec<u32> = state
        .team
        .as_ref()
        .filter(|t| !t.size_options.is_empty())
        .map(|t| t.size_options.clone())
        .unwrap_or_else(|| vec![2, 3, 5, 6, 8, 10]);
    let status: RwSignal<Option<String>> = RwSignal::new(None);
    let saving: RwSignal<bool> = RwSignal::new(false);

    let on_name = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        name.set(input.value());
    };

    let on_game = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        game_id.set(select.value().parse::<i64>().ok());
    };

    let on_size = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        if let Ok(parsed) = select.value().parse::<u32>() {
            max_size.set(parsed);
        }
    };

    let on_save = move |_| {
        let team_name = name.get_untracked().trim().to_string();
        if team_name.is_empty() {
            status.set(Some("Team name is required.".to_string()));
            return;
        }
        let Some(game) = game_id.get_untracked() else {
            status.set(Some("Pick a game first.".to_string()));
            return;
        };
        let payload = TeamPayload {
            name: team_name,
            game_id: game,
            max_size: max_size.get_untracked(),
        };
        saving.set(true);
        spawn_local(async move {
            let result = match team_id {
                Some(id) => api::update_team(id, &payload).await,
                None => api::create_team(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(response) if response.success => {
                    editing_team.set(None);
                    invalidate_and_reload(handles);
                }
                Ok(response) => status.set(Some(response.text().to_string())),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Team save failed: {e}").into());
                    status.set(Some(e));
                }
            }
        });
    };

    let on_delete = move |_| {
        let Some(id) = team_id else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this team?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_team(id).await {
                Ok(response) if response.success => {
                    editing_team.set(None);
                    handles.selected.set(None);
                    invalidate_and_reload(handles);
                }
                Ok(response) => status.set(Some(response.text().to_string())),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Team delete failed: {e}").into());
                    status.set(Some(e));
                }
            }
        });
    };

    let input_style = "width: 100%; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; padding: 5px 7px; outline: none;";

    view! {
        <div style="border-top: 1px solid #282c3e; padding: 12px 24px 16px; background: #11141c;">
            <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.62rem; text-transform: uppercase; letter-spacing: 0.12em; color: #5a5860; margin-bottom: 8px;">
                {if is_edit { "Edit Team" } else { "New Team" }}
            </div>
            <input
                type="text"
                placeholder="Team name"
                prop:value=move || name.get()
                on:input=on_name
                style=input_style
            />
            <Show when=move || !is_edit>
                <select on:change=on_game style=format!("{input_style} margin-top: 6px;")>
                    <option value="" selected=move || game_id.get().is_none()>
                        "Pick a game..."
                    </option>
                    {move || {
                        games
                            .get()
                            .into_iter()
                            .map(|game| {
                                let id = game.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || game_id.get() == Some(id)
                                    >
                                        {game.title}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </Show>
            <select on:change=on_size style=format!("{input_style} margin-top: 6px;")>
                {size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || max_size.get() == size
                            >
                                {format!("{size} players")}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || {
                status.get().map(|message| {
                    view! {
                        <div style="margin-top: 6px; font-family: 'JetBrains Mono', monospace; font-size: 0.66rem; color: #e06c75;">
                            {message}
                        </div>
                    }
                })
            }}
            <div style="display: flex; gap: 6px; margin-top: 10px;">
                <button
                    style="flex: 1; background: rgba(245,197,66,0.12); border: 1px solid rgba(245,197,66,0.3); border-radius: 4px; color: #f5c542; font-family: 'JetBrains Mono', monospace; font-size: 0.66rem; padding: 5px 0; cursor: pointer;"
                    disabled=move || saving.get()
                    on:click=on_save
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                {is_edit.then(|| {
                    view! {
                        <button
                            style="background: transparent; border: 1px solid #282c3e; border-radius: 4px; color: #e06c75; font-family: 'JetBrains Mono', monospace; font-size: 0.66rem; padding: 5px 10px; cursor: pointer;"
                            on:click=on_delete
                        >
                            "Delete"
                        </button>
                    }
                })}
                <button
                    style="background: transparent; border: 1px solid #282c3e; border-radius: 4px; color: #9a9590; font-family: 'JetBrains Mono', monospace; font-size: 0.66rem; padding: 5px 10px; cursor: pointer;"
                    on:click=move |_| editing_team.set(None)
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{next_generation, prepare_views, response_is_stale};
    use crate::cache::{SidebarCache, cache_key};
    use clubdeck_shared::{TeamView, ViewOption};

    fn options(views: &[TeamView]) -> Vec<ViewOption> {
        views.iter().copied().map(ViewOption::for_view).collect()
    }

    #[test]
    fn matching_generation_is_not_stale() {
        let request = next_generation(0);
        assert!(!response_is_stale(request, request));
        assert!(response_is_stale(next_generation(request), request));
    }

    #[test]
    fn generation_wraps_without_panicking() {
        assert_eq!(next_generation(u64::MAX), 0);
    }

    #[test]
    fn cache_hit_orphans_in_flight_response() {
        let mut cache = SidebarCache::default();
        let mut nonce: u64 = 0;
        let all_key = cache_key(TeamView::All, None);

        // First load of the All view completes and caches.
        nonce = next_generation(nonce);
        let all_request = nonce;
        assert!(!response_is_stale(nonce, all_request));
        cache.insert(all_key.clone(), Vec::new(), 0);

        // Switch to Manage: cache miss, request goes in flight.
        nonce = next_generation(nonce);
        let manage_request = nonce;

        // Switch back to All within the freshness window: served from
        // cache, but the generation still advances.
        assert!(cache.fresh(&all_key, 10_000).is_some());
        nonce = next_generation(nonce);

        // The slow Manage response must now be discarded.
        assert!(response_is_stale(nonce, manage_request));
    }

    #[test]
    fn elevated_single_view_still_gets_a_switcher() {
        let (views, initial) = prepare_views(options(&[TeamView::Manage]), true, None);
        let values: Vec<&str> = views.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["manage", "division"]);
        assert!(views.len() > 1);
        assert_eq!(initial, TeamView::Manage);
    }

    #[test]
    fn division_option_is_not_duplicated() {
        let (views, _) = prepare_views(options(&[TeamView::All, TeamView::Division]), true, None);
        let division_count = views
            .iter()
            .filter(|v| v.value == TeamView::Division.as_str())
            .count();
        assert_eq!(division_count, 1);
    }

    #[test]
    fn persisted_view_restores_only_while_permitted() {
        let permitted = options(&[TeamView::All, TeamView::Play]);

        let (_, restored) = prepare_views(permitted.clone(), false, Some("play"));
        assert_eq!(restored, TeamView::Play);

        // No longer permitted: fall back to the first permitted view.
        let (_, fallback) = prepare_views(permitted, false, Some("manage"));
        assert_eq!(fallback, TeamView::All);
    }
}
