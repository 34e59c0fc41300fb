use crate::errors::AppError;
use crate::models::{
    Dataset, HistoryResponse, StatusRecord, SubmitRequest, TodayEntry, TodayResponse, WeeklyReport,
};
use crate::state::AppState;
use crate::stats::{build_report, date_history};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Query, State},
    response::{Html, Redirect},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let data = state.data.lock().await;
    Html(render_index(&date, &state.activities, &data))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let date = today_string();
    let data = state.data.lock().await;
    Ok(Json(today_view(&state, &date, &data)))
}

pub async fn get_report(State(state): State<AppState>) -> Result<Json<WeeklyReport>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_report(&data)))
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub date: String,
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, AppError> {
    let date = params.date.trim();
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be a valid YYYY-MM-DD date"));
    }

    let data = state.data.lock().await;
    Ok(Json(HistoryResponse {
        date: date.to_string(),
        entries: date_history(&data, date),
    }))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    for activity in payload.statuses.keys() {
        if !state.activities.contains(activity) {
            return Err(AppError::bad_request(format!("unknown activity '{activity}'")));
        }
    }

    let response = apply_submit(&state, &payload.statuses).await?;
    Ok(Json(response))
}

/// Plain form fallback. A checkbox only shows up in the fields when checked.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Result<Redirect, AppError> {
    let statuses = state
        .activities
        .iter()
        .map(|activity| (activity.clone(), fields.contains_key(activity)))
        .collect();
    apply_submit(&state, &statuses).await?;
    Ok(Redirect::to("/"))
}

/// Records every configured activity for today, explicit `false` for the
/// unchecked ones, then rewrites the data file once. Resubmitting later the
/// same day replaces the whole day's records.
async fn apply_submit(
    state: &AppState,
    statuses: &BTreeMap<String, bool>,
) -> Result<TodayResponse, AppError> {
    let now = Local::now();
    let date = now.format("%Y-%m-%d").to_string();
    let time = now.format("%H:%M:%S").to_string();

    let mut data = state.data.lock().await;
    for activity in state.activities.iter() {
        let status = statuses.get(activity).copied().unwrap_or(false);
        data.upsert(
            activity,
            &date,
            StatusRecord {
                time: time.clone(),
                status,
            },
        );
    }

    persist_data(&state.data_path, &data).await?;
    info!("saved progress for {date}");

    Ok(today_view(state, &date, &data))
}

fn today_view(state: &AppState, date: &str, data: &Dataset) -> TodayResponse {
    let activities = state
        .activities
        .iter()
        .map(|activity| {
            let record = data.record(activity, date);
            TodayEntry {
                activity: activity.clone(),
                recorded: record.is_some(),
                status: record.is_some_and(|record| record.status),
                time: record.map(|record| record.time.clone()),
            }
        })
        .collect();

    TodayResponse {
        date: date.to_string(),
        activities,
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
