use chrono::NaiveDate;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{League, Season, SeasonPayload};

use crate::api;
use crate::app::{PANEL_HEADER_STYLE, StatusRegion};

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[component]
pub fn SeasonsPanel() -> impl IntoView {
    let seasons: RwSignal<Vec<Season>> = RwSignal::new(Vec::new());
    let leagues: RwSignal<Vec<League>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    let name: RwSignal<String> = RwSignal::new(String::new());
    let league_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let start_raw: RwSignal<String> = RwSignal::new(String::new());
    let end_raw: RwSignal<String> = RwSignal::new(String::new());

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_seasons().await {
                Ok(list) => seasons.set(list),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Seasons fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || {
        reload();
        spawn_local(async move {
            match api::fetch_leagues().await {
                Ok(list) => leagues.set(list),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Leagues fetch failed: {e}").into())
                }
            }
        });
    });

    let on_create = move |_| {
        let season_name = name.get_untracked().trim().to_string();
        if season_name.is_empty() {
            status.set(Some(Err("Season name is required.".to_string())));
            return;
        }
        let (Some(start_date), Some(end_date)) = (
            parse_date(&start_raw.get_untracked()),
            parse_date(&end_raw.get_untracked()),
        ) else {
            status.set(Some(Err("Start and end dates are required.".to_string())));
            return;
        };
        if end_date < start_date {
            status.set(Some(Err("Season cannot end before it starts.".to_string())));
            return;
        }
        let payload = SeasonPayload {
            name: season_name,
            league_id: league_id.get_untracked(),
            start_date,
            end_date,
            active: false,
        };
        spawn_local(async move {
            match api::create_season(&payload).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    name.set(String::new());
                    start_raw.set(String::new());
                    end_raw.set(String::new());
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Season create failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    // Toggling "active" re-submits the full season row over PUT.
    let on_toggle_active = move |season: Season| {
        let payload = SeasonPayload {
            name: season.name,
            league_id: season.league_id,
            start_date: season.start_date,
            end_date: season.end_date,
            active: !season.active,
        };
        let season_id = season.id;
        spawn_local(async move {
            match api::update_season(season_id, &payload).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Season update failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let field_style = "background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-size: 0.8rem; padding: 6px 8px; outline: none;";

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"Seasons"</div>
            <StatusRegion status=status />
            <div style="padding: 8px 24px 24px; max-width: 640px;">
                <div style="display: flex; gap: 6px; margin-bottom: 14px; flex-wrap: wrap;">
                    <input
                        type="text"
                        placeholder="Season name"
                        style=format!("{field_style} flex: 1; min-width: 140px;")
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
                        style=format!(
                            "{field_style} font-family: 'JetBrains Mono', monospace; font-size: 0.72rem;",
                        )
                        on:change=move |e| {
                            if let Some(select) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                            {
                                league_id.set(select.value().parse::<i64>().ok());
                            }
                        }
                    >
                        <option value="" selected=move || league_id.get().is_none()>
                            "No league"
                        </option>
                        {move || {
                            leagues
                                .get()
                                .into_iter()
                                .map(|league| {
                                    let id = league.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || league_id.get() == Some(id)
                                        >
                                            {league.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="date"
                        style=field_style
                        prop:value=move || start_raw.get()
                        on:input=move |e| {
                            if let Some(input) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                start_raw.set(input.value());
                            }
                        }
                    />
                    <input
                        type="date"
                        style=field_style
                        prop:value=move || end_raw.get()
                        on:input=move |e| {
                            if let Some(input) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                end_raw.set(input.value());
                            }
                        }
                    />
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
                            <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">"Loading seasons..."</div>
                        }
                        .into_any();
                    }
                    let rows = seasons.get();
                    if rows.is_empty() {
                        return view! {
                            <div style="font-size: 0.82rem; color: #5a5860;">"No seasons yet."</div>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .map(|season| {
                            let toggled = season.clone();
                            let active = season.active;
                            view! {
                                <div style="display: flex; align-items: baseline; gap: 10px; padding: 6px 10px; border: 1px solid #1d2130; border-radius: 4px; margin-bottom: 4px;">
                                    <span style="flex: 1; font-size: 0.85rem; color: #e2e0d8;">{season.name.clone()}</span>
                                    <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #9a9590;">
                                        {format!(
                                            "{} \u{2013} {}",
                                            season.start_date.format("%b %d, %Y"),
                                            season.end_date.format("%b %d, %Y"),
                                        )}
                                    </span>
                                    <button
                                        style=move || {
                                            if active {
                                                "background: rgba(152,195,121,0.12); border: 1px solid rgba(152,195,121,0.4); border-radius: 4px; color: #98c379; font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; padding: 3px 8px; cursor: pointer;"
                                            } else {
                                                "background: transparent; border: 1px solid #282c3e; border-radius: 4px; color: #5a5860; font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; padding: 3px 8px; cursor: pointer;"
                                            }
                                        }
                                        on:click=move |_| on_toggle_active(toggled.clone())
                                    >
                                        {if active { "Active" } else { "Inactive" }}
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

#[cfg(test)]
mod tests {
    use super::parse_date;
    use chrono::NaiveDate;

    #[test]
    fn parses_date_input_values() {
        assert_eq!(
            parse_date("2026-09-01"),
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert!(parse_date("09/01/2026").is_none());
        assert!(parse_date("").is_none());
    }
}
