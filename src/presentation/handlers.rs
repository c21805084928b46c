// HTTP request handlers
use crate::application::errors::DashboardError;
use crate::infrastructure::http_response::{created, SuccessBody};
use crate::presentation::app_state::AppState;
use crate::presentation::dashboard_page::render_dashboard;
use crate::presentation::extract::{ApiJson, EntityId};
use crate::presentation::requests::{
    CreateCategoryRequest, CreateLinkRequest, CreatePanelRequest, ReorderCategoriesRequest,
    ReorderLinksRequest, UpdateLinkRequest,
};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

type HandlerResult<T> = Result<T, DashboardError>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page with the hierarchy embedded as client state
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> HandlerResult<Html<String>> {
    let panels = state.hierarchy_service.get_hierarchy().await?;
    Ok(Html(render_dashboard(&panels)))
}

pub async fn list_panels(State(state): State<Arc<AppState>>) -> HandlerResult<Response> {
    let panels = state.hierarchy_service.get_hierarchy().await?;
    Ok(Json(panels).into_response())
}

pub async fn create_panel(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreatePanelRequest>,
) -> HandlerResult<Response> {
    let panel = state.panel_service.create_panel(body.name.as_deref()).await?;
    Ok(created(panel))
}

pub async fn delete_panel(
    EntityId(id): EntityId,
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Json<SuccessBody>> {
    state.panel_service.delete_panel(id).await?;
    Ok(SuccessBody::ok())
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> HandlerResult<Response> {
    let categories = state.hierarchy_service.list_categories().await?;
    Ok(Json(categories).into_response())
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateCategoryRequest>,
) -> HandlerResult<Response> {
    let category = state
        .category_service
        .create_category(body.name.as_deref(), body.panel_id)
        .await?;
    Ok(created(category))
}

pub async fn reorder_categories(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ReorderCategoriesRequest>,
) -> HandlerResult<Json<SuccessBody>> {
    state.reorder_service.reorder_categories(&body.items).await?;
    Ok(SuccessBody::ok())
}

pub async fn delete_category(
    EntityId(id): EntityId,
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Json<SuccessBody>> {
    state.category_service.delete_category(id).await?;
    Ok(SuccessBody::ok())
}

pub async fn create_link(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateLinkRequest>,
) -> HandlerResult<Response> {
    let link = state
        .link_service
        .create_link(body.name.as_deref(), body.url.as_deref(), body.category_id)
        .await?;
    Ok(created(link))
}

pub async fn update_link(
    EntityId(id): EntityId,
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<UpdateLinkRequest>,
) -> HandlerResult<Response> {
    let link = state.link_service.update_link(id, body.into()).await?;
    Ok(Json(link).into_response())
}

pub async fn reorder_links(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ReorderLinksRequest>,
) -> HandlerResult<Json<SuccessBody>> {
    state.reorder_service.reorder_links(&body.items).await?;
    Ok(SuccessBody::ok())
}

pub async fn delete_link(
    EntityId(id): EntityId,
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Json<SuccessBody>> {
    state.link_service.delete_link(id).await?;
    Ok(SuccessBody::ok())
}
