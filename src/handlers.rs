use crate::counter::{Action, WidgetState};
use crate::errors::AppError;
use crate::input::action_for;
use crate::models::{ClickRequest, ClickResponse, KeyRequest, StatsResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let counter = state.counter.lock().await;
    let stats = to_stats(&counter);
    let page = render_index(&stats).map_err(AppError::internal)?;
    Ok(Html(page))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let counter = state.counter.lock().await;
    Json(to_stats(&counter))
}

pub async fn click(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<ClickResponse>, AppError> {
    let action = Action::parse(payload.action.trim()).ok_or_else(|| {
        AppError::bad_request("action must be 'increment', 'decrement' or 'reset'")
    })?;

    Ok(Json(apply_action(&state, action).await))
}

pub async fn key(State(state): State<AppState>, Json(payload): Json<KeyRequest>) -> Response {
    match action_for(&payload.key, payload.ctrl_key, payload.meta_key) {
        Some(action) => Json(apply_action(&state, action).await).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn click_increment(State(state): State<AppState>) -> Redirect {
    apply_action(&state, Action::Increment).await;
    Redirect::to("/")
}

pub async fn click_decrement(State(state): State<AppState>) -> Redirect {
    apply_action(&state, Action::Decrement).await;
    Redirect::to("/")
}

pub async fn click_reset(State(state): State<AppState>) -> Redirect {
    apply_action(&state, Action::Reset).await;
    Redirect::to("/")
}

async fn apply_action(state: &AppState, action: Action) -> ClickResponse {
    let mut counter = state.counter.lock().await;
    counter.apply(action);

    let stats = to_stats(&counter);
    ClickResponse {
        action: action.as_str().to_string(),
        feedback: action.feedback().to_string(),
        count: stats.count,
        total_clicks: stats.total_clicks,
        max_value: stats.max_value,
        min_value: stats.min_value,
        tone: stats.tone,
    }
}

fn to_stats(counter: &WidgetState) -> StatsResponse {
    let snap = counter.snapshot();
    StatsResponse {
        count: snap.count,
        total_clicks: snap.total_clicks,
        max_value: snap.max_value,
        min_value: snap.min_value,
        tone: counter.tone().as_str().to_string(),
    }
}
