//! Event handlers.
//!
//! Thin translation between HTTP and the event store: parse, validate,
//! call the repository, wrap the outcome as `{"result": ...}`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use eventcal_core::event::{
    validate_new_event, validate_update, CreateEventRequest, Event, EventId, Period,
    UpdateEventRequest, UserId,
};

use crate::{handlers::AppError, state::AppState};

/// Success envelope for every event endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub result: T,
}

impl<T> ApiResponse<T> {
    fn new(result: T) -> Json<Self> {
        Json(Self { result })
    }
}

/// Query parameters addressing one event of one user.
#[derive(Debug, Deserialize)]
pub struct EventQuery {
    pub user_id: UserId,
    pub event_id: EventId,
}

/// Query parameters for the range endpoints.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub user_id: UserId,
    /// Reference date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Create a new event (POST /create_event).
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create event request");

    let new_event = validate_new_event(payload, Local::now())?;
    let event = state.event_repo.create_event(new_event).await;

    tracing::info!(user_id = event.user_id, event_id = event.event_id, "Created event");

    Ok(ApiResponse::new(event))
}

/// Update an event (POST /update_event?user_id=&event_id=).
pub async fn update_event(
    State(state): State<AppState>,
    query: Result<Query<EventQuery>, QueryRejection>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let Query(query) = query?;
    let Json(payload) = payload?;

    validate_update(&payload, Local::now())?;
    let event = state
        .event_repo
        .update_event(query.user_id, query.event_id, payload)
        .await?;

    tracing::info!(user_id = event.user_id, event_id = event.event_id, "Updated event");

    Ok(ApiResponse::new(event))
}

/// Delete an event (POST /delete_event?user_id=&event_id=).
pub async fn delete_event(
    State(state): State<AppState>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<&'static str>>, AppError> {
    let Query(query) = query?;

    state
        .event_repo
        .delete_event(query.user_id, query.event_id)
        .await?;

    tracing::info!(user_id = query.user_id, event_id = query.event_id, "Deleted event");

    Ok(ApiResponse::new("successfully deleted event"))
}

/// List a user's events on a day (GET /events_for_day?user_id=&date=).
pub async fn events_for_day(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
    events_for_period(&state, query?.0, Period::Day).await
}

/// List a user's events in an ISO week (GET /events_for_week?user_id=&date=).
pub async fn events_for_week(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
    events_for_period(&state, query?.0, Period::Week).await
}

/// List a user's events in a month (GET /events_for_month?user_id=&date=).
pub async fn events_for_month(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
    events_for_period(&state, query?.0, Period::Month).await
}

async fn events_for_period(
    state: &AppState,
    query: PeriodQuery,
    period: Period,
) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
    let events = match period {
        Period::Day => state.event_repo.get_events_for_day(query.user_id, query.date),
        Period::Week => state.event_repo.get_events_for_week(query.user_id, query.date),
        Period::Month => state.event_repo.get_events_for_month(query.user_id, query.date),
    }
    .await?;

    tracing::debug!(
        user_id = query.user_id,
        date = %query.date,
        %period,
        count = events.len(),
        "Listed events"
    );

    Ok(ApiResponse::new(events))
}
