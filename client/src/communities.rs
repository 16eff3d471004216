use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{AdminUserRow, AssignGmPayload, Community, division_rank};

use crate::api;
use crate::app::{PANEL_HEADER_STYLE, StatusRegion};
use crate::session::Session;

#[component]
pub fn CommunitiesPanel() -> impl IntoView {
    let session: Session = expect_context();
    let elevated = session.is_elevated();

    let communities: RwSignal<Vec<Community>> = RwSignal::new(Vec::new());
    let candidates: RwSignal<Vec<AdminUserRow>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_communities().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| {
                        division_rank(&a.division)
                            .cmp(&division_rank(&b.division))
                            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                    });
                    communities.set(list);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Communities fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || {
        reload();
        if elevated {
            spawn_local(async move {
                match api::fetch_admin_users().await {
                    Ok(users) => candidates.set(users),
                    Err(e) => web_sys::console::warn_1(
                        &format!("GM candidate fetch failed: {e}").into(),
                    ),
                }
            });
        }
    });

    let on_membership = move |game_id: i64, joined: bool| {
        spawn_local(async move {
            let result = if joined {
                api::leave_community(game_id).await
            } else {
                api::join_community(game_id).await
            };
            match result {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Membership change failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let on_assign_gm = move |game_id: i64, user_id: i64| {
        let payload = AssignGmPayload { game_id, user_id };
        spawn_local(async move {
            match api::assign_gm(&payload).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("GM assignment failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"Game Communities"</div>
            <StatusRegion status=status />
            <div style="padding: 8px 24px 24px; max-width: 640px;">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">"Loading communities..."</div>
                        }
                        .into_any();
                    }
                    let rows = communities.get();
                    if rows.is_empty() {
                        return view! {
                            <div style="font-size: 0.82rem; color: #5a5860;">"No communities available."</div>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .map(|community| {
                            let game_id = community.game_id;
                            let joined = community.joined;
                            view! {
                                <div style="display: flex; align-items: center; gap: 12px; padding: 8px 10px; border: 1px solid #1d2130; border-radius: 4px; margin-bottom: 4px;">
                                    <div style="flex: 1; min-width: 0;">
                                        <div style="font-size: 0.85rem; color: #e2e0d8;">{community.name.clone()}</div>
                                        <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; color: #5a5860;">
                                            {format!(
                                                "{} \u{00B7} {} members \u{00B7} GM: {}",
                                                community.division,
                                                community.member_count,
                                                community.gm_name.clone().unwrap_or_else(|| "none".to_string()),
                                            )}
                                        </div>
                                    </div>
                                    <Show when=move || elevated>
                                        <select
                                            style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; padding: 4px 6px;"
                                            on:change=move |e| {
                                                if let Some(user_id) = e
                                                    .target()
                                                    .and_then(|t| {
                                                        t.dyn_into::<web_sys::HtmlSelectElement>().ok()
                                                    })
                                                    .and_then(|s| s.value().parse::<i64>().ok())
                                                {
                                                    on_assign_gm(game_id, user_id);
                                                }
                                            }
                                        >
                                            <option value="" selected=true>
                                                "Assign GM..."
                                            </option>
                                            {move || {
                                                candidates
                                                    .get()
                                                    .into_iter()
                                                    .map(|user| {
                                                        view! {
                                                            <option value=user
                                                                .id
                                                                .to_string()>{user.username}</option>
                                                        }
                                                    })
                                                    .collect_view()
                                            }}
                                        </select>
                                    </Show>
                                    <button
                                        style=move || {
                                            if joined {
                                                "background: transparent; border: 1px solid rgba(224,108,117,0.4); border-radius: 4px; color: #e06c75; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; padding: 4px 10px; cursor: pointer;"
                                            } else {
                                                "background: rgba(152,195,121,0.12); border: 1px solid rgba(152,195,121,0.4); border-radius: 4px; color: #98c379; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; padding: 4px 10px; cursor: pointer;"
                                            }
                                        }
                                        on:click=move |_| on_membership(game_id, joined)
                                    >
                                        {if joined { "Leave" } else { "Join" }}
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
