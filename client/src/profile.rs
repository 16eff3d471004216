use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::ProfilePayload;

use crate::api;
use crate::app::{PANEL_HEADER_STYLE, StatusRegion};

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    let display_name: RwSignal<String> = RwSignal::new(String::new());
    let avatar_url: RwSignal<String> = RwSignal::new(String::new());
    let bio: RwSignal<String> = RwSignal::new(String::new());

    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(Some(profile)) => {
                    display_name.set(profile.display_name);
                    avatar_url.set(profile.avatar_url.unwrap_or_default());
                    bio.set(profile.bio.unwrap_or_default());
                }
                Ok(None) => {
                    status.set(Some(Err("No profile found for this account.".to_string())));
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Profile fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    });

    let on_save = move |_| {
        let name = display_name.get_untracked().trim().to_string();
        if name.is_empty() {
            status.set(Some(Err("Display name is required.".to_string())));
            return;
        }
        let payload = ProfilePayload {
            display_name: name,
            avatar_url: Some(avatar_url.get_untracked())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            bio: Some(bio.get_untracked())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };
        spawn_local(async move {
            match api::update_profile(&payload).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Profile save failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let field_style = "width: 100%; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-size: 0.8rem; padding: 6px 8px; outline: none;";
    let label_style = "font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; text-transform: uppercase; letter-spacing: 0.1em; color: #5a5860; margin: 10px 0 4px;";

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"Your Profile"</div>
            <StatusRegion status=status />
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="status-pulse" style="padding: 8px 24px; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">
                            "Loading profile..."
                        </div>
                    }
                }
            >
                <div style="padding: 8px 24px 24px; max-width: 420px;">
                    <div style="display: flex; align-items: center; gap: 14px; margin-bottom: 8px;">
                        <Show when=move || !avatar_url.get().is_empty()>
                            <img
                                src=move || avatar_url.get()
                                alt="avatar"
                                style="width: 56px; height: 56px; border-radius: 50%; border: 1px solid #282c3e; object-fit: cover;"
                            />
                        </Show>
                        <span style="font-size: 1rem; color: #e2e0d8;">{move || display_name.get()}</span>
                    </div>
                    <div style=label_style>"Display Name"</div>
                    <input
                        type="text"
                        style=field_style
                        prop:value=move || display_name.get()
                        on:input=move |e| {
                            if let Some(input) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                display_name.set(input.value());
                            }
                        }
                    />
                    <div style=label_style>"Avatar URL"</div>
                    <input
                        type="text"
                        placeholder="https://..."
                        style=field_style
                        prop:value=move || avatar_url.get()
                        on:input=move |e| {
                            if let Some(input) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                avatar_url.set(input.value());
                            }
                        }
                    />
                    <div style=label_style>"Bio"</div>
                    <textarea
                        rows=4
                        style=format!("{field_style} resize: vertical;")
                        prop:value=move || bio.get()
                        on:input=move |e| {
                            if let Some(area) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                            {
                                bio.set(area.value());
                            }
                        }
                    />
                    <button
                        style="margin-top: 12px; background: rgba(245,197,66,0.12); border: 1px solid rgba(245,197,66,0.3); border-radius: 4px; color: #f5c542; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; padding: 6px 16px; cursor: pointer;"
                        on:click=on_save
                    >
                        "Save Profile"
                    </button>
                </div>
            </Show>
        </div>
    }
}
