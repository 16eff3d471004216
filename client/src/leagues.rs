use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{League, LeaguePayload};

use crate::api;
use crate::app::{GamesCatalog, PANEL_HEADER_STYLE, StatusRegion};

#[component]
pub fn LeaguesPanel() -> impl IntoView {
    let GamesCatalog(games) = expect_context();

    let leagues: RwSignal<Vec<League>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    let name: RwSignal<String> = RwSignal::new(String::new());
    let game_id: RwSignal<Option<i64>> = RwSignal::new(None);

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_leagues().await {
                Ok(list) => leagues.set(list),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Leagues fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || reload());

    let on_create = move |_| {
        let league_name = name.get_untracked().trim().to_string();
        if league_name.is_empty() {
            status.set(Some(Err("League name is required.".to_string())));
            return;
        }
        let Some(game) = game_id.get_untracked() else {
            status.set(Some(Err("Pick a game for the league.".to_string())));
            return;
        };
        let payload = LeaguePayload {
            name: league_name,
            game_id: game,
        };
        spawn_local(async move {
            match api::create_league(&payload).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    name.set(String::new());
                    game_id.set(None);
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("League create failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let on_delete = move |league_id: i64, league_name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete league {league_name}?"))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_league(league_id).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("League delete failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"Leagues"</div>
            <StatusRegion status=status />
            <div style="padding: 8px 24px 24px; max-width: 560px;">
                <div style="display: flex; gap: 6px; margin-bottom: 14px;">
                    <input
                        type="text"
                        placeholder="League name"
                        style="flex: 1; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-size: 0.8rem; padding: 6px 8px; outline: none;"
                        prop:value=move || name.get()
                        on:input=move |e| {
                            if let Some(input) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                name.set(input.value());
                            }
                        }
                    />
                    <select
                        style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; padding: 4px 6px;"
                        on:change=move |e| {
                            if let Some(select) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                            {
                                game_id.set(select.value().parse::<i64>().ok());
                            }
                        }
                    >
                        <option value="" selected=move || game_id.get().is_none()>
                            "Game..."
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
                    <button
                        style="background: rgba(245,197,66,0.12); border: 1px solid rgba(245,197,66,0.3); border-radius: 4px; color: #f5c542; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; padding: 6px 12px; cursor: pointer;"
                        on:click=on_create
                    >
                        "Add"
                    </button>
                </div>
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">"Loading leagues..."</div>
                        }
                        .into_any();
                    }
                    let rows = leagues.get();
                    if rows.is_empty() {
                        return view! {
                            <div style="font-size: 0.82rem; color: #5a5860;">"No leagues yet."</div>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .map(|league| {
                            let league_id = league.id;
                            let delete_name = league.name.clone();
                            view! {
                                <div style="display: flex; align-items: baseline; gap: 10px; padding: 6px 10px; border: 1px solid #1d2130; border-radius: 4px; margin-bottom: 4px;">
                                    <span style="flex: 1; font-size: 0.85rem; color: #e2e0d8;">{league.name.clone()}</span>
                                    <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #9a9590;">
                                        {league.game_title.clone().unwrap_or_default()}
                                    </span>
                                    <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #5a5860;">
                                        {format!("{} teams", league.team_count)}
                                    </span>
                                    <button
                                        style="background: transparent; border: none; color: #e06c75; cursor: pointer; font-size: 0.72rem;"
                                        on:click=move |_| on_delete(league_id, delete_name.clone())
                                    >
                                        {"\u{2715}"}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
