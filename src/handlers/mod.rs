/// HTTP request handlers
use crate::clients::UpstreamBody;
use crate::domain::{ApodQuery, EpicQuery, Health, MarsPhotosQuery, NeoQuery};
use crate::errors::ApiResult;
use crate::services::ProxyService;
use crate::views::html::{page, Section};
use crate::views::mars::MarsParams;
use crate::views::{ApodView, EpicView, MarsView, NeoView};
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ProxyService>,
    pub epic_archive_url: Arc<str>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "Backend is running!",
    })
}

/// Relay an upstream body untouched
fn relay(body: UpstreamBody) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body.0).into_response()
}

pub async fn apod(
    Query(query): Query<ApodQuery>,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    state.proxy.apod(&query).await.map(relay)
}

pub async fn mars_photos(
    Query(query): Query<MarsPhotosQuery>,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    state.proxy.mars_photos(&query).await.map(relay)
}

pub async fn epic(
    Query(query): Query<EpicQuery>,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    state.proxy.epic(&query).await.map(relay)
}

pub async fn neos(
    Query(query): Query<NeoQuery>,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    state.proxy.neos(&query).await.map(relay)
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Treat `?date=` the same as no date at all
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Astronomy Picture of the Day page
pub async fn apod_page(
    Query(query): Query<ApodQuery>,
    State(state): State<AppState>,
) -> Html<String> {
    let mut view = ApodView::new(&today(), non_empty(query.date));
    view.refresh(state.proxy.as_ref()).await;
    Html(page(Section::Apod, &view.render()))
}

#[derive(Debug, Default, Deserialize)]
pub struct MarsPageQuery {
    pub rover: Option<String>,
    pub prev_rover: Option<String>,
    pub date: Option<String>,
    pub camera: Option<String>,
}

/// Mars rover photos page
pub async fn mars_page(
    Query(query): Query<MarsPageQuery>,
    State(state): State<AppState>,
) -> Html<String> {
    let params = MarsParams::from_form(
        query.rover.as_deref(),
        query.prev_rover.as_deref(),
        query.date.as_deref(),
        query.camera.as_deref(),
    );
    let mut view = MarsView::new(&today(), params);
    view.refresh(state.proxy.as_ref()).await;
    Html(page(Section::Mars, &view.render()))
}

/// Earth imagery page
pub async fn epic_page(
    Query(query): Query<EpicQuery>,
    State(state): State<AppState>,
) -> Html<String> {
    let mut view = EpicView::new(&today(), non_empty(query.date), &state.epic_archive_url);
    view.refresh(state.proxy.as_ref()).await;
    Html(page(Section::Epic, &view.render()))
}

/// Near Earth Objects page
pub async fn neos_page(
    Query(query): Query<NeoQuery>,
    State(state): State<AppState>,
) -> Html<String> {
    let mut view = NeoView::new(&today(), non_empty(query.start_date));
    view.refresh(state.proxy.as_ref()).await;
    Html(page(Section::Neos, &view.render()))
}
