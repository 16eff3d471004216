use chrono::Utc;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{Vod, VodPayload};

use crate::api;
use crate::app::{PANEL_HEADER_STYLE, SelectedTeam, StatusRegion};
use crate::time_format::format_relative_time;

#[component]
pub fn VodsPanel() -> impl IntoView {
    let SelectedTeam(selected) = expect_context();

    let vods: RwSignal<Vec<Vod>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(false);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);
    let playing: RwSignal<Option<String>> = RwSignal::new(None);

    let title: RwSignal<String> = RwSignal::new(String::new());
    let url: RwSignal<String> = RwSignal::new(String::new());

    let reload = move |team_id: i64| {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_team_vods(team_id).await {
                Ok(list) => vods.set(list),
                Err(e) => {
                    web_sys::console::warn_1(&format!("VOD fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    };

    // Refetch whenever the sidebar selection changes.
    Effect::new(move || match selected.get() {
        Some(team_id) => reload(team_id),
        None => {
            vods.set(Vec::new());
            playing.set(None);
        }
    });

    let on_add = move |_| {
        let Some(team_id) = selected.get_untracked() else {
            return;
        };
        let vod_title = title.get_untracked().trim().to_string();
        let vod_url = url.get_untracked().trim().to_string();
        if vod_title.is_empty() || vod_url.is_empty() {
            status.set(Some(Err("Both a title and a URL are required.".to_string())));
            return;
        }
        let payload = VodPayload {
            team_id,
            title: vod_title,
            url: vod_url,
        };
        spawn_local(async move {
            match api::add_vod(&payload).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    title.set(String::new());
                    url.set(String::new());
                    reload(team_id);
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("VOD add failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let on_delete = move |vod_id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this VOD?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_vod(vod_id).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    if let Some(team_id) = selected.get_untracked() {
                        reload(team_id);
                    }
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("VOD delete failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let field_style = "flex: 1; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-size: 0.8rem; padding: 6px 8px; outline: none;";

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"Match VODs"</div>
            <StatusRegion status=status />
            <Show
                when=move || selected.get().is_some()
                fallback=|| {
                    view! {
                        <div style="padding: 8px 24px; font-size: 0.82rem; color: #5a5860;">
                            "Select a team in the sidebar to see its VODs."
                        </div>
                    }
                }
            >
                <div style="padding: 8px 24px 24px; max-width: 640px;">
                    <div style="display: flex; gap: 6px; margin-bottom: 14px;">
                        <input
                            type="text"
                            placeholder="Title"
                            style=field_style
                            prop:value=move || title.get()
                            on:input=move |e| {
                                if let Some(input) = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                {
                                    title.set(input.value());
                                }
                            }
                        />
                        <input
                            type="text"
                            placeholder="https://..."
                            style=field_style
                            prop:value=move || url.get()
                            on:input=move |e| {
                                if let Some(input) = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                {
                                    url.set(input.value());
                                }
                            }
                        />
                        <button
                            style="background: rgba(245,197,66,0.12); border: 1px solid rgba(245,197,66,0.3); border-radius: 4px; color: #f5c542; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; padding: 6px 12px; cursor: pointer;"
                            on:click=on_add
                        >
                            "Add VOD"
                        </button>
                    </div>
                    <Show when=move || playing.get().is_some()>
                        <video
                            src=move || playing.get().unwrap_or_default()
                            controls=true
                            style="width: 100%; max-height: 360px; background: #000; border-radius: 4px; margin-bottom: 12px;"
                        ></video>
                    </Show>
                    {move || {
                        if loading.get() {
                            return view! {
                                <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">"Loading VODs..."</div>
                            }
                            .into_any();
                        }
                        let rows = vods.get();
                        if rows.is_empty() {
                            return view! {
                                <div style="font-size: 0.82rem; color: #5a5860;">"No VODs for this team yet."</div>
                            }
                            .into_any();
                        }
                        let now = Utc::now().timestamp();
                        rows.into_iter()
                            .map(|vod| {
                                let vod_id = vod.id;
                                let play_url = vod.url.clone();
                                view! {
                                    <div style="display: flex; align-items: baseline; gap: 10px; padding: 6px 10px; border: 1px solid #1d2130; border-radius: 4px; margin-bottom: 4px;">
                                        <a
                                            href="#"
                                            style="flex: 1; font-size: 0.85rem; color: #61afef; text-decoration: none;"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                playing.set(Some(play_url.clone()));
                                            }
                                        >
                                            {vod.title.clone()}
                                        </a>
                                        <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; color: #5a5860;">
                                            {format_relative_time(&vod.created_at.to_rfc3339(), now)}
                                        </span>
                                        <button
                                            style="background: transparent; border: none; color: #e06c75; cursor: pointer; font-size: 0.72rem;"
                                            on:click=move |_| on_delete(vod_id)
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
            </Show>
        </div>
    }
}
