//! Route handlers

use super::WebState;
use super::error::ApiError;
use super::page::INDEX_HTML;
use crate::dataset::Iso;
use crate::dispatch::{InputEvent, ViewUpdate};
use crate::layout::PageLayout;
use crate::state::{Metric, ViewState};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, IntoResponse};
use serde::{Deserialize, Serialize};

/// Event body as sent by the page. Values are validated here so bad input maps to 400.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub kind: String,
    pub iso: Option<String>,
    pub metric: Option<String>,
}

impl EventRequest {
    fn into_event(self) -> Result<InputEvent, ApiError> {
        match self.kind.as_str() {
            "map_clicked" => {
                let raw = self
                    .iso
                    .ok_or_else(|| ApiError::BadRequest("map_clicked needs an `iso`".into()))?;
                let iso: Iso = raw
                    .parse()
                    .map_err(|e: crate::dataset::InvalidIso| ApiError::BadRequest(e.to_string()))?;
                Ok(InputEvent::MapClicked { iso })
            }
            "metric_changed" => {
                let raw = self.metric.ok_or_else(|| {
                    ApiError::BadRequest("metric_changed needs a `metric`".into())
                })?;
                let metric: Metric = raw
                    .parse()
                    .map_err(|e: crate::state::UnknownMetric| ApiError::BadRequest(e.to_string()))?;
                Ok(InputEvent::MetricChanged { metric })
            }
            other => Err(ApiError::BadRequest(format!("Unknown event kind `{}`", other))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub state: ViewState,
    pub updates: Vec<ViewUpdate>,
}

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    "OK"
}

pub async fn layout(State(state): State<WebState>) -> Json<PageLayout> {
    let dispatcher = state.dispatcher.lock().await;
    Json(PageLayout::build(&dispatcher))
}

pub async fn current_state(State(state): State<WebState>) -> Json<ViewState> {
    let dispatcher = state.dispatcher.lock().await;
    Json(dispatcher.state().clone())
}

/// Applies one input event. The lock is held for the whole dispatch so interactions from
/// different clients never interleave.
///
/// Renderers read image files synchronously, so the dispatch runs on the blocking pool.
pub async fn apply_event(
    State(state): State<WebState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, ApiError> {
    let Json(request) = payload?;
    let event = request.into_event()?;
    let shared = state.dispatcher.clone();
    let response = tokio::task::spawn_blocking(move || {
        let mut dispatcher = shared.blocking_lock();
        let outcome = dispatcher.dispatch(event);
        for event in &outcome.events {
            event.emit();
        }
        EventResponse {
            state: dispatcher.state().clone(),
            updates: outcome.updates,
        }
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(response))
}
