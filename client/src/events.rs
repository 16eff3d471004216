use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clubdeck_shared::{ClubEvent, EventPayload};

use crate::api;
use crate::app::{GamesCatalog, PANEL_HEADER_STYLE, StatusRegion};
use crate::time_format::{format_event_day, format_event_range};

/// Bucket events into (day heading, rows) pairs, ordered by start time.
pub(crate) fn group_events_by_day(mut events: Vec<ClubEvent>) -> Vec<(String, Vec<ClubEvent>)> {
    events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    let mut days: Vec<(String, Vec<ClubEvent>)> = Vec::new();
    for event in events {
        let heading = format_event_day(&event.start_time);
        match days.last_mut() {
            Some((day, rows)) if *day == heading => rows.push(event),
            _ => days.push((heading, vec![event])),
        }
    }
    days
}

/// Parse the value of an `<input type="datetime-local">` as UTC.
fn parse_local_datetime(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

#[component]
pub fn EventsPanel() -> impl IntoView {
    let GamesCatalog(games) = expect_context();

    let events: RwSignal<Vec<ClubEvent>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    // Form state; `editing` carries the id when the form targets an
    // existing event.
    let editing: RwSignal<Option<i64>> = RwSignal::new(None);
    let title: RwSignal<String> = RwSignal::new(String::new());
    let game_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let start_raw: RwSignal<String> = RwSignal::new(String::new());
    let end_raw: RwSignal<String> = RwSignal::new(String::new());
    let location: RwSignal<String> = RwSignal::new(String::new());
    let description: RwSignal<String> = RwSignal::new(String::new());

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_events().await {
                Ok(list) => events.set(list),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Events fetch failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || reload());

    let reset_form = move || {
        editing.set(None);
        title.set(String::new());
        game_id.set(None);
        start_raw.set(String::new());
        end_raw.set(String::new());
        location.set(String::new());
        description.set(String::new());
    };

    let on_submit = move |_| {
        let event_title = title.get_untracked().trim().to_string();
        if event_title.is_empty() {
            status.set(Some(Err("Event title is required.".to_string())));
            return;
        }
        let Some(start_time) = parse_local_datetime(&start_raw.get_untracked()) else {
            status.set(Some(Err("Start time is required.".to_string())));
            return;
        };
        let payload = EventPayload {
            title: event_title,
            game_id: game_id.get_untracked(),
            start_time,
            end_time: parse_local_datetime(&end_raw.get_untracked()),
            location: Some(location.get_untracked())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            description: Some(description.get_untracked())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };
        let target = editing.get_untracked();
        spawn_local(async move {
            let result = match target {
                Some(id) => api::update_event(id, &payload).await,
                None => api::create_event(&payload).await,
            };
            match result {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reset_form();
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Event save failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let begin_edit = move |event: ClubEvent| {
        editing.set(Some(event.id));
        title.set(event.title);
        game_id.set(event.game_id);
        start_raw.set(event.start_time.format("%Y-%m-%dT%H:%M").to_string());
        end_raw.set(
            event
                .end_time
                .map(|t| t.format("%Y-%m-%dT%H:%M").to_string())
                .unwrap_or_default(),
        );
        location.set(event.location.unwrap_or_default());
        description.set(event.description.unwrap_or_default());
    };

    let on_delete = move |event_id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this event?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_event(event_id).await {
                Ok(response) if response.success => {
                    status.set(Some(Ok(response.text().to_string())));
                    reload();
                }
                Ok(response) => status.set(Some(Err(response.text().to_string()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Event delete failed: {e}").into());
                    status.set(Some(Err(e)));
                }
            }
        });
    };

    let text_input =
        "width: 100%; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 4px; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; font-size: 0.8rem; padding: 6px 8px; outline: none;";

    view! {
        <div>
            <div style=PANEL_HEADER_STYLE>"Events"</div>
            <StatusRegion status=status />
            <div style="display: flex; gap: 24px; padding: 8px 24px 24px; flex-wrap: wrap;">
                <div style="flex: 2; min-width: 320px;">
                    {move || {
                        if loading.get() {
                            return view! {
                                <div class="status-pulse" style="font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c;">"Loading events..."</div>
                            }
                            .into_any();
                        }
                        let days = group_events_by_day(events.get());
                        if days.is_empty() {
                            return view! {
                                <div style="font-size: 0.82rem; color: #5a5860;">"No upcoming events."</div>
                            }
                            .into_any();
                        }
                        days.into_iter()
                            .map(|(heading, rows)| {
                                view! {
                                    <div style="margin-bottom: 14px;">
                                        <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; text-transform: uppercase; letter-spacing: 0.1em; color: #5a5860; margin-bottom: 4px;">
                                            {heading}
                                        </div>
                                        {rows
                                            .into_iter()
                                            .map(|event| {
                                                let event_id = event.id;
                                                let edit_copy = event.clone();
                                                view! {
                                                    <div style="display: flex; align-items: baseline; gap: 10px; padding: 6px 10px; border-radius: 4px; border: 1px solid #1d2130; margin-bottom: 4px;">
                                                        <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #f5c542; flex-shrink: 0;">
                                                            {format_event_range(
                                                                &event.start_time,
                                                                event.end_time.as_ref(),
                                                            )}
                                                        </span>
                                                        <div style="flex: 1; min-width: 0;">
                                                            <div style="font-size: 0.85rem; color: #e2e0d8;">{event.title.clone()}</div>
                                                            <div style="font-size: 0.68rem; color: #9a9590; font-family: 'JetBrains Mono', monospace;">
                                                                {[
                                                                    event.game_title.clone(),
                                                                    event.location.clone(),
                                                                ]
                                                                    .into_iter()
                                                                    .flatten()
                                                                    .collect::<Vec<_>>()
                                                                    .join(" \u{00B7} ")}
                                                            </div>
                                                        </div>
                                                        <button
                                                            style="background: transparent; border: none; color: #5a5860; cursor: pointer; font-size: 0.72rem;"
                                                            on:click=move |_| begin_edit(edit_copy.clone())
                                                        >
                                                            {"\u{270E}"}
                                                        </button>
                                                        <button
                                                            style="background: transparent; border: none; color: #e06c75; cursor: pointer; font-size: 0.72rem;"
                                                            on:click=move |_| on_delete(event_id)
                                                        >
                                                            {"\u{2715}"}
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
                <div style="flex: 1; min-width: 260px;">
                    <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; text-transform: uppercase; letter-spacing: 0.1em; color: #5a5860; margin-bottom: 6px;">
                        {move || if editing.get().is_some() { "Edit Event" } else { "New Event" }}
                    </div>
                    <input
                        type="text"
                        placeholder="Title"
                        style=text_input
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
                    <select
                        style=format!("{text_input} margin-top: 6px;")
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
                            "No game"
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
                    <input
                        type="datetime-local"
                        style=format!("{text_input} margin-top: 6px;")
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
                        type="datetime-local"
                        style=format!("{text_input} margin-top: 6px;")
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
                    <input
                        type="text"
                        placeholder="Location"
                        style=format!("{text_input} margin-top: 6px;")
                        prop:value=move || location.get()
                        on:input=move |e| {
                            if let Some(input) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                location.set(input.value());
                            }
                        }
                    />
                    <textarea
                        placeholder="Description"
                        rows=3
                        style=format!("{text_input} margin-top: 6px; resize: vertical;")
                        prop:value=move || description.get()
                        on:input=move |e| {
                            if let Some(area) = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                            {
                                description.set(area.value());
                            }
                        }
                    />
                    <div style="display: flex; gap: 6px; margin-top: 10px;">
                        <button
                            style="flex: 1; background: rgba(245,197,66,0.12); border: 1px solid rgba(245,197,66,0.3); border-radius: 4px; color: #f5c542; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; padding: 6px 0; cursor: pointer;"
                            on:click=on_submit
                        >
                            {move || if editing.get().is_some() { "Update" } else { "Create" }}
                        </button>
                        <Show when=move || editing.get().is_some()>
                            <button
                                style="background: transparent; border: 1px solid #282c3e; border-radius: 4px; color: #9a9590; font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; padding: 6px 10px; cursor: pointer;"
                                on:click=move |_| reset_form()
                            >
                                "Cancel"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{group_events_by_day, parse_local_datetime};
    use chrono::{TimeZone, Utc};
    use clubdeck_shared::ClubEvent;

    fn event(id: i64, day: u32, hour: u32) -> ClubEvent {
        ClubEvent {
            id,
            title: format!("Event {id}"),
            game_id: None,
            game_title: None,
            start_time: Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap(),
            end_time: None,
            location: None,
            description: None,
            created_by: 1,
        }
    }

    #[test]
    fn groups_by_day_in_start_order() {
        let days = group_events_by_day(vec![event(1, 5, 20), event(2, 4, 18), event(3, 5, 10)]);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].0, "Mar 04, 2026");
        let second_day_ids: Vec<i64> = days[1].1.iter().map(|e| e.id).collect();
        assert_eq!(second_day_ids, vec![3, 1]);
    }

    #[test]
    fn parses_datetime_local_values() {
        let parsed = parse_local_datetime("2026-03-04T18:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 4, 18, 30, 0).unwrap());
        assert!(parse_local_datetime("late march").is_none());
    }
}
