use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::catalog::{CreateCategoryRequest, CreateProgramRequest},
    models::{Category, Program},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories by name", body = Vec<Category>)
    ),
    tag = "catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, WebError> {
    Ok(Json(state.store().list_categories().await?))
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found")
    ),
    tag = "catalog"
)]
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<Uuid>,
) -> Result<Json<Category>, WebError> {
    Ok(Json(state.store().get_category(category_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "catalog"
)]
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = state.store().add_category(&req).await?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/programs",
    responses(
        (status = 200, description = "All programs by schedule", body = Vec<Program>)
    ),
    tag = "catalog"
)]
pub async fn list_programs(State(state): State<AppState>) -> Result<Json<Vec<Program>>, WebError> {
    Ok(Json(state.store().list_programs().await?))
}

#[utoipa::path(
    get,
    path = "/api/programs/{program_id}",
    params(
        ("program_id" = Uuid, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program found", body = Program),
        (status = 404, description = "Program not found")
    ),
    tag = "catalog"
)]
pub async fn get_program(
    State(state): State<AppState>,
    ApiPath(program_id): ApiPath<Uuid>,
) -> Result<Json<Program>, WebError> {
    Ok(Json(state.store().get_program(program_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/programs",
    request_body = CreateProgramRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Program created", body = Program),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "catalog"
)]
pub async fn create_program(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProgramRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let program = state.store().add_program(&req).await?;

    Ok((StatusCode::CREATED, Json(program)).into_response())
}
