//! Thin fetch wrappers over the backend's HTTP/JSON contract. Every helper
//! maps transport, status and decode failures to a display string; callers
//! decide whether the string reaches the console or a status region.

use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

use clubdeck_shared::{
    AdminUsersResponse, AdminUserRow, ApiStatus, AssignGmPayload, AvailableViews, ClubEvent,
    CommunitiesResponse, Community, EventPayload, EventsResponse, GameEntry, GamesList, League,
    LeaguePayload, LeaguesResponse, ProfilePayload, ProfileResponse, Season, SeasonPayload,
    SeasonsResponse, SidebarTeams, TeamPayload, TeamSummary, TeamView, UserProfile, Vod,
    VodPayload,
};

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<T>().await.map_err(|e| format!("parse error: {e}"))
}

async fn send_json<B: Serialize>(method: &str, url: &str, body: &B) -> Result<ApiStatus, String> {
    let builder = match method {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        _ => Request::delete(url),
    };
    let resp = builder
        .json(body)
        .map_err(|e| format!("encode error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<ApiStatus>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

// --- teams sidebar ---

pub async fn fetch_available_views() -> Result<AvailableViews, String> {
    get_json("/api/teams/available-views").await
}

pub async fn fetch_sidebar_teams(view: TeamView) -> Result<Vec<TeamSummary>, String> {
    let url = format!("/api/teams/sidebar?view={}", view.as_str());
    let parsed: SidebarTeams = get_json(&url).await?;
    if !parsed.success {
        return Err("server rejected sidebar request".to_string());
    }
    Ok(parsed.teams)
}

pub async fn fetch_games() -> Result<Vec<GameEntry>, String> {
    let parsed: GamesList = get_json("/api/games-list").await?;
    Ok(parsed.games)
}

pub async fn create_team(payload: &TeamPayload) -> Result<ApiStatus, String> {
    send_json("POST", "/api/teams/create", payload).await
}

pub async fn update_team(team_id: i64, payload: &TeamPayload) -> Result<ApiStatus, String> {
    send_json("POST", &format!("/api/teams/{team_id}/update"), payload).await
}

pub async fn delete_team(team_id: i64) -> Result<ApiStatus, String> {
    send_json("DELETE", &format!("/api/teams/{team_id}"), &()).await
}

// --- events ---

pub async fn fetch_events() -> Result<Vec<ClubEvent>, String> {
    let parsed: EventsResponse = get_json("/api/events").await?;
    Ok(parsed.events)
}

pub async fn create_event(payload: &EventPayload) -> Result<ApiStatus, String> {
    send_json("POST", "/api/event/create", payload).await
}

pub async fn update_event(event_id: i64, payload: &EventPayload) -> Result<ApiStatus, String> {
    send_json("POST", &format!("/api/event/{event_id}/update"), payload).await
}

pub async fn delete_event(event_id: i64) -> Result<ApiStatus, String> {
    send_json("DELETE", &format!("/api/event/{event_id}"), &()).await
}

// --- admin ---

pub async fn fetch_admin_users() -> Result<Vec<AdminUserRow>, String> {
    let parsed: AdminUsersResponse = get_json("/admin/users").await?;
    Ok(parsed.users)
}

#[derive(Serialize)]
struct ManageRoleBody<'a> {
    user_id: i64,
    role: &'a str,
}

pub async fn manage_role(user_id: i64, role: &str) -> Result<ApiStatus, String> {
    send_json("POST", "/admin/manage-role", &ManageRoleBody { user_id, role }).await
}

#[derive(Serialize)]
struct RemoveUserBody {
    user_id: i64,
}

pub async fn remove_user(user_id: i64) -> Result<ApiStatus, String> {
    send_json("POST", "/admin/remove-user", &RemoveUserBody { user_id }).await
}

// --- leagues ---

pub async fn fetch_leagues() -> Result<Vec<League>, String> {
    let parsed: LeaguesResponse = get_json("/league/list").await?;
    Ok(parsed.leagues)
}

pub async fn create_league(payload: &LeaguePayload) -> Result<ApiStatus, String> {
    send_json("POST", "/league/create", payload).await
}

pub async fn delete_league(league_id: i64) -> Result<ApiStatus, String> {
    send_json("DELETE", &format!("/league/{league_id}"), &()).await
}

// --- seasons ---

pub async fn fetch_seasons() -> Result<Vec<Season>, String> {
    let parsed: SeasonsResponse = get_json("/api/seasons").await?;
    Ok(parsed.seasons)
}

pub async fn create_season(payload: &SeasonPayload) -> Result<ApiStatus, String> {
    send_json("POST", "/api/seasons/create", payload).await
}

pub async fn update_season(season_id: i64, payload: &SeasonPayload) -> Result<ApiStatus, String> {
    send_json("PUT", &format!("/api/seasons/{season_id}"), payload).await
}

// --- communities ---

pub async fn fetch_communities() -> Result<Vec<Community>, String> {
    let parsed: CommunitiesResponse = get_json("/api/communities").await?;
    Ok(parsed.communities)
}

#[derive(Serialize)]
struct CommunityBody {
    game_id: i64,
}

pub async fn join_community(game_id: i64) -> Result<ApiStatus, String> {
    send_json("POST", "/api/communities/join", &CommunityBody { game_id }).await
}

pub async fn leave_community(game_id: i64) -> Result<ApiStatus, String> {
    send_json("POST", "/api/communities/leave", &CommunityBody { game_id }).await
}

pub async fn assign_gm(payload: &AssignGmPayload) -> Result<ApiStatus, String> {
    send_json("POST", "/api/communities/assign-gm", payload).await
}

// --- profile ---

pub async fn fetch_profile() -> Result<Option<UserProfile>, String> {
    let parsed: ProfileResponse = get_json("/api/profile").await?;
    Ok(parsed.profile)
}

pub async fn update_profile(payload: &ProfilePayload) -> Result<ApiStatus, String> {
    send_json("POST", "/api/profile/update", payload).await
}

// --- vods ---

pub async fn fetch_team_vods(team_id: i64) -> Result<Vec<Vod>, String> {
    // This route answers a bare array, not a success envelope.
    get_json(&format!("/api/vods/team/{team_id}")).await
}

pub async fn add_vod(payload: &VodPayload) -> Result<ApiStatus, String> {
    send_json("POST", "/api/vods", payload).await
}

pub async fn delete_vod(vod_id: i64) -> Result<ApiStatus, String> {
    send_json("DELETE", &format!("/api/vods/{vod_id}"), &()).await
}
