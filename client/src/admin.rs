use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{AdminUserRow, Role};

use crate::api;
use crate::app::{PANEL_HEADER_STYLE, StatusRegion};
use crate::session::Session;

const ROLE_CHOICES: [Role; 4] = [Role::Member, Role::GameManager, Role::Developer, Role::Admin];

#[component]
pub fn AdminPanel() -> impl IntoView {
    let session: Session = expect_context();
    let elevated = session.is_elevated();

    let users: RwSignal<Vec<AdminUserRow>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_admin_users().await {
                Ok(rows) => users.set(rows),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Admin users fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || {
        if elevated {
            reload();
        }
    });

    let on_role_change = move |user_id: i64, role: String| {
        spawn_local(async move {
            match api::manage_role(user_id, &role).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Role change failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let on_remove = move |user_id: i64, username: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Remove {username} from the club?"))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::remove_user(user_id).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("User removal failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"User Administration"</div>
            <StatusRegion status=status />
            <Show
                when=move || elevated
                fallback=|| {
                    view! {
                        <div style="padding: 8px 24px; font-size: 0.82rem; color: #e06c75;">
                            "Admin access is required to manage users."
                        </div>
                    }
                }
            >
                <div style="padding: 8px 24px 24px;">
                    {move || {
                        if loading.get() {
                            return view! {
                                <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">"Loading users..."</div>
                            }
                            .into_any();
                        }
                        let rows = users.get();
                        if rows.is_empty() {
                            return view! {
                                <div style="font-size: 0.82rem; color: #5a5860;">"No users found."</div>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|user| {
                                let user_id = user.id;
                                let username = user.username.clone();
                                let remove_name = user.username.clone();
                                let current_role = user.role.clone();
                                view! {
                                    <div style="display: flex; align-items: center; gap: 12px; padding: 6px 10px; border: 1px solid #1d2130; border-radius: 4px; margin-bottom: 4px;">
                                        <span style="flex: 1; font-size: 0.85rem; color: #e2e0d8;">{username}</span>
                                        <select
                                            style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; padding: 4px 6px;"
                                            on:change=move |e| {
                                                if let Some(select) = e
                                                    .target()
                                                    .and_then(|t| {
                                                        t.dyn_into::<web_sys::HtmlSelectElement>().ok()
                                                    })
                                                {
                                                    on_role_change(user_id, select.value());
                                                }
                                            }
                                        >
                                            {ROLE_CHOICES
                                                .into_iter()
                                                .map(|role| {
                                                    let value = role.as_str();
                                                    let selected = current_role == value;
                                                    view! {
                                                        <option value=value selected=selected>
                                                            {value}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                        <button
                                            style="background: transparent; border: 1px solid rgba(224,108,117,0.4); border-radius: 4px; color: #e06c75; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; padding: 4px 8px; cursor: pointer;"
                                            on:click=move |_| on_remove(user_id, remove_name.clone())
                                        >
                                            "Remove"
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
