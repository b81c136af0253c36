use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, CapacityExceededResponse,
        ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::CompanyResult;
use crate::models::{CompanyDto, CreateCompany, UpdateCompany};
use crate::repository::CompanyRepository;
use crate::service::CompanyService;

/// OpenAPI documentation for Companies API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_companies,
        create_company,
        get_company,
        update_company,
        delete_company,
    ),
    components(
        schemas(CompanyDto, CreateCompany, UpdateCompany),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            CapacityExceededResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Company management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the company router with all HTTP endpoints
pub fn router<R: CompanyRepository + 'static>(service: CompanyService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/all", get(list_companies))
        .route("/create", post(create_company))
        .route("/{id}", get(get_company))
        .route("/update/{id}", put(update_company))
        .route("/delete/{id}", delete(delete_company))
        .with_state(shared_service)
}

/// List all companies
#[utoipa::path(
    get,
    path = "/all",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All companies in id order", body = Vec<CompanyDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_companies<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
) -> CompanyResult<Json<Vec<CompanyDto>>> {
    let companies = service.list_companies().await?;
    Ok(Json(companies))
}

/// Create a new company
#[utoipa::path(
    post,
    path = "/create",
    tag = entity::Model::TAG,
    request_body = CreateCompany,
    responses(
        (status = 201, description = "Company created successfully", body = CompanyDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 400, response = CapacityExceededResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCompany>,
) -> CompanyResult<impl IntoResponse> {
    let company = service.create_company(input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// Get a company by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    IdPath(id): IdPath,
) -> CompanyResult<Json<CompanyDto>> {
    let company = service.get_company(id).await?;
    Ok(Json(company))
}

/// Update a company
///
/// Omitted fields are kept. An explicit `null` clears an optional field.
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    request_body = UpdateCompany,
    responses(
        (status = 200, description = "Company updated successfully", body = CompanyDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateCompany>,
) -> CompanyResult<Json<CompanyDto>> {
    let company = service.update_company(id, input).await?;
    Ok(Json(company))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 204, description = "Company deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    IdPath(id): IdPath,
) -> CompanyResult<impl IntoResponse> {
    service.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
