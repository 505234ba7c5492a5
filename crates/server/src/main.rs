// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use orgledger_api::{
    ApiError, AssignDepartmentRoleRequest, AssignEmploymentDepartmentRoleRequest,
    AssignRoleResponse, ChangeEmploymentStatusRequest, CreateDepartmentRequest,
    CreateDepartmentResponse, CreateEmploymentRequest, CreateEmploymentResponse,
    CreateJobTitleRequest, CreateJobTitleResponse, CreatePersonRequest, CreatePersonResponse,
    CreatePositionRequest, CreatePositionResponse, CurrentManagersResponse,
    DeleteEmploymentResponse, EmploymentInfo, GetSupervisorResponse, ReportingMatrixResponse,
    SetAccountFlagRequest, SetAccountFlagResponse, SetPositionManagersRequest, StatusLogResponse,
    UpdatePositionResponse,
};
use orgledger_persistence::{DashboardStats, OrgChart, Persistence, SupervisorLookup};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::info;

/// Orgledger Server - HTTP server for the orgledger personnel system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the employment ledger.
    persistence: Arc<Mutex<Persistence>>,
}

/// JSON error payload.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// The calling day, fixed per request for end-date stamping and dashboard
/// windows.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Query parameters for the current-managers listing.
#[derive(Debug, Deserialize)]
struct CurrentManagersQuery {
    /// Restrict to one department.
    department_id: Option<i64>,
}

async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<CreateDepartmentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::create_department(&mut persistence, req)?))
}

async fn handle_create_job_title(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateJobTitleRequest>,
) -> Result<Json<CreateJobTitleResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::create_job_title(&mut persistence, req)?))
}

async fn handle_create_position(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePositionRequest>,
) -> Result<Json<CreatePositionResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::create_position(&mut persistence, req)?))
}

async fn handle_set_position_managers(
    AxumState(app_state): AxumState<AppState>,
    Path(position_id): Path<i64>,
    Json(req): Json<SetPositionManagersRequest>,
) -> Result<Json<UpdatePositionResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::set_position_managers(
        &mut persistence,
        position_id,
        req,
    )?))
}

async fn handle_set_person_account_flag(
    AxumState(app_state): AxumState<AppState>,
    Path(person_id): Path<i64>,
    Json(req): Json<SetAccountFlagRequest>,
) -> Result<Json<SetAccountFlagResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::set_person_account_flag(
        &mut persistence,
        person_id,
        req,
    )?))
}

async fn handle_create_person(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<Json<CreatePersonResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::create_person(&mut persistence, req)?))
}

async fn handle_create_employment(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEmploymentRequest>,
) -> Result<Json<CreateEmploymentResponse>, HttpError> {
    info!(
        person_id = req.person_id,
        position_id = req.position_id,
        status = %req.status,
        "Handling create_employment request"
    );
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::create_employment(&mut persistence, req)?))
}

async fn handle_change_employment_status(
    AxumState(app_state): AxumState<AppState>,
    Path(employment_id): Path<i64>,
    Json(req): Json<ChangeEmploymentStatusRequest>,
) -> Result<Json<EmploymentInfo>, HttpError> {
    info!(
        employment_id,
        new_status = %req.new_status,
        "Handling change_employment_status request"
    );
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::change_employment_status(
        &mut persistence,
        employment_id,
        req,
        today(),
    )?))
}

async fn handle_delete_employment(
    AxumState(app_state): AxumState<AppState>,
    Path(employment_id): Path<i64>,
) -> Result<Json<DeleteEmploymentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::delete_employment(
        &mut persistence,
        employment_id,
    )?))
}

async fn handle_status_log(
    AxumState(app_state): AxumState<AppState>,
    Path(employment_id): Path<i64>,
) -> Result<Json<StatusLogResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::list_status_log(
        &mut persistence,
        employment_id,
    )?))
}

async fn handle_get_supervisor(
    AxumState(app_state): AxumState<AppState>,
    Path(position_id): Path<i64>,
) -> Result<Json<GetSupervisorResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::get_supervisor(
        &mut persistence,
        position_id,
    )?))
}

async fn handle_get_org_chart(
    AxumState(app_state): AxumState<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<OrgChart>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::get_org_chart(&mut persistence, person_id)?))
}

async fn handle_get_department_manager(
    AxumState(app_state): AxumState<AppState>,
    Path(department_id): Path<i64>,
) -> Result<Json<SupervisorLookup>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::get_department_manager(
        &mut persistence,
        department_id,
    )?))
}

async fn handle_reporting_matrix(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReportingMatrixResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::get_reporting_matrix(&mut persistence)?))
}

async fn handle_dashboard_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DashboardStats>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::get_dashboard_stats(
        &mut persistence,
        today(),
    )?))
}

async fn handle_assign_department_role(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignDepartmentRoleRequest>,
) -> Result<Json<AssignRoleResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::assign_department_role(
        &mut persistence,
        req,
        today(),
    )?))
}

async fn handle_assign_employment_department_role(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignEmploymentDepartmentRoleRequest>,
) -> Result<Json<AssignRoleResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::assign_employment_department_role(
        &mut persistence,
        req,
        today(),
    )?))
}

async fn handle_current_managers(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<CurrentManagersQuery>,
) -> Result<Json<CurrentManagersResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(orgledger_api::list_current_managers(
        &mut persistence,
        query.department_id,
    )?))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/departments", post(handle_create_department))
        .route("/job_titles", post(handle_create_job_title))
        .route("/positions", post(handle_create_position))
        .route(
            "/positions/{position_id}/managers",
            post(handle_set_position_managers),
        )
        .route("/persons", post(handle_create_person))
        .route(
            "/persons/{person_id}/account_flag",
            post(handle_set_person_account_flag),
        )
        .route("/employments", post(handle_create_employment))
        .route(
            "/employments/{employment_id}/status",
            post(handle_change_employment_status),
        )
        .route(
            "/employments/{employment_id}",
            delete(handle_delete_employment),
        )
        .route(
            "/employments/{employment_id}/status_log",
            get(handle_status_log),
        )
        .route(
            "/positions/{position_id}/supervisor",
            get(handle_get_supervisor),
        )
        .route("/persons/{person_id}/org_chart", get(handle_get_org_chart))
        .route(
            "/departments/{department_id}/manager",
            get(handle_get_department_manager),
        )
        .route("/positions/matrix", get(handle_reporting_matrix))
        .route("/dashboard/stats", get(handle_dashboard_stats))
        .route("/department_roles", post(handle_assign_department_role))
        .route(
            "/employment_department_roles",
            post(handle_assign_employment_department_role),
        )
        .route(
            "/department_roles/current_managers",
            get(handle_current_managers),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing orgledger server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Seeds a department, title, one-seat position and a person; returns
    /// (`position_id`, `person_id`).
    async fn seed_minimal_org(app: &Router) -> (i64, i64) {
        let department = response_json(
            post_json(
                app.clone(),
                "/departments",
                &serde_json::json!({"name": "Human Resources"}),
            )
            .await,
        )
        .await;
        let title = response_json(
            post_json(
                app.clone(),
                "/job_titles",
                &serde_json::json!({"name": "Analyst"}),
            )
            .await,
        )
        .await;
        let position = response_json(
            post_json(
                app.clone(),
                "/positions",
                &serde_json::json!({
                    "department_id": department["department_id"],
                    "job_title_id": title["job_title_id"],
                    "vacancies": 1,
                }),
            )
            .await,
        )
        .await;
        let person = response_json(
            post_json(
                app.clone(),
                "/persons",
                &serde_json::json!({
                    "first_name": "Alice",
                    "last_name": "Moreno",
                    "birthdate": "1990-03-14",
                    "has_user_account": true,
                }),
            )
            .await,
        )
        .await;
        (
            position["position_id"].as_i64().unwrap(),
            person["person_id"].as_i64().unwrap(),
        )
    }

    fn hire_body(person_id: i64, position_id: i64) -> serde_json::Value {
        serde_json::json!({
            "person_id": person_id,
            "position_id": position_id,
            "role": "employee",
            "employment_type": "permanent",
            "status": "active",
            "hire_date": "2024-01-01",
        })
    }

    #[tokio::test]
    async fn test_create_employment_succeeds() {
        let app = build_router(create_test_app_state());
        let (position_id, person_id) = seed_minimal_org(&app).await;

        let response =
            post_json(app.clone(), "/employments", &hire_body(person_id, position_id)).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["remaining_capacity"], 0);
    }

    #[tokio::test]
    async fn test_capacity_exceeded_maps_to_unprocessable_entity() {
        let app = build_router(create_test_app_state());
        let (position_id, person_id) = seed_minimal_org(&app).await;

        post_json(app.clone(), "/employments", &hire_body(person_id, position_id)).await;

        let second_person = response_json(
            post_json(
                app.clone(),
                "/persons",
                &serde_json::json!({
                    "first_name": "Bob",
                    "last_name": "Paredes",
                    "birthdate": "1988-11-02",
                }),
            )
            .await,
        )
        .await;
        let response = post_json(
            app.clone(),
            "/employments",
            &hire_body(second_person["person_id"].as_i64().unwrap(), position_id),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
        let body = response_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_bad_date_maps_to_bad_request() {
        let app = build_router(create_test_app_state());
        let (position_id, person_id) = seed_minimal_org(&app).await;

        let mut body = hire_body(person_id, position_id);
        body["hire_date"] = serde_json::json!("01/02/2024");
        let response = post_json(app.clone(), "/employments", &body).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_supervisor_lookup_of_unconfigured_position() {
        let app = build_router(create_test_app_state());
        let (position_id, _person_id) = seed_minimal_org(&app).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/positions/{position_id}/supervisor"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["supervisor"]["kind"], "unconfigured");
    }

    #[tokio::test]
    async fn test_missing_employment_maps_to_not_found() {
        let app = build_router(create_test_app_state());
        seed_minimal_org(&app).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/employments/9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }
}
