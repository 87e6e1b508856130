//! HTTP request handlers for the salary calculator API.
//!
//! This module contains the handler functions for all API endpoints:
//! a stateless `/calculate`, rate lookup, and the session endpoints that
//! read and update the shared ledger.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{monthly_rates, resolve_period, total_reimbursements};
use crate::error::{SalaryError, SalaryResult};
use crate::export::{ExportFormat, SalaryBreakdown, render};
use crate::ledger::{
    Ledger, validate_overtime_hours, validate_positions, validate_reimbursement,
};
use crate::models::{
    MonthInfo, MonthlyRates, Project, ProjectDraft, ReimbursementDraft, ReimbursementItem,
};

use super::request::{CalculationRequest, ExportQuery, FormatQuery, OvertimeRequest, PeriodQuery};
use super::response::{
    ApiErrorResponse, OvertimeResponse, ProjectListResponse, RatesResponse,
    ReimbursementListResponse, SalariesResponse,
};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/:id", put(update_project).delete(delete_project))
        .route("/projects/:id/retire", post(retire_project))
        .route("/projects/:id/reactivate", post(reactivate_project))
        .route(
            "/reimbursements",
            get(list_reimbursements).post(create_reimbursement),
        )
        .route(
            "/reimbursements/:id",
            put(update_reimbursement).delete(delete_reimbursement),
        )
        .route("/overtime", put(set_overtime))
        .route("/salaries", get(salaries_handler))
        .route("/breakdown", get(breakdown_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Calculates a full breakdown from the request body alone; the session
/// ledger is neither read nor changed.
async fn calculate_handler(
    State(state): State<AppState>,
    query: Result<Query<FormatQuery>, QueryRejection>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let Query(query) = query.map_err(|e| fail(correlation_id, e))?;
    let Json(request) = payload.map_err(|e| fail(correlation_id, e))?;

    let start_time = Instant::now();
    let (month, rates) =
        month_and_rates(&state, request.period.as_deref()).map_err(|e| fail(correlation_id, e))?;

    let overtime_hours = request.overtime_hours;
    let (projects, reimbursements) =
        calculation_inputs(request).map_err(|e| fail(correlation_id, e))?;

    let breakdown = SalaryBreakdown::build(
        state.config().config(),
        month,
        rates,
        &projects,
        &reimbursements,
        overtime_hours,
        today(),
    );

    info!(
        correlation_id = %correlation_id,
        projects_count = breakdown.projects.len(),
        grand_total = %breakdown.totals.grand_total,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    rendered(&breakdown, query.format).map_err(|e| fail(correlation_id, e))
}

/// Handler for GET /rates.
async fn rates_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|e| fail(correlation_id, e))?;
    let (month, rates) =
        month_and_rates(&state, query.period.as_deref()).map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        month = %month.month_name,
        working_days = month.working_days,
        "Rates derived"
    );
    Ok(Json(RatesResponse { month, rates }).into_response())
}

/// Handler for GET /projects.
async fn list_projects(State(state): State<AppState>) -> Json<ProjectListResponse> {
    let ledger = state.snapshot().await;
    Json(ProjectListResponse {
        projects: ledger.projects().to_vec(),
        next_position: ledger.next_position(),
        premium_rate_lost: ledger.premium_rate_lost(),
    })
}

/// Handler for POST /projects.
async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectDraft>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Json(draft) = payload.map_err(|e| fail(correlation_id, e))?;

    let project = state
        .update(|ledger| {
            let (ledger, id) = ledger.add_project(draft);
            with_project(ledger, id)
        })
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        project_id = %project.id,
        tier = %project.tier(),
        "Project added"
    );
    Ok((StatusCode::CREATED, Json(project)).into_response())
}

/// Handler for PUT /projects/:id.
async fn update_project(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ProjectDraft>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|e| fail(correlation_id, e))?;
    let Json(draft) = payload.map_err(|e| fail(correlation_id, e))?;

    let project = state
        .update(|ledger| with_project(ledger.edit_project(id, draft)?, id))
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(correlation_id = %correlation_id, project_id = %id, "Project updated");
    Ok(Json(project).into_response())
}

/// Handler for DELETE /projects/:id.
async fn delete_project(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|e| fail(correlation_id, e))?;

    state
        .update(|ledger| Ok((ledger.remove_project(id)?, ())))
        .await
        .map_err(|e| fail(correlation_id, e))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for POST /projects/:id/retire.
async fn retire_project(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|e| fail(correlation_id, e))?;

    let project = state
        .update(|ledger| with_project(ledger.retire_project(id)?, id))
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(correlation_id = %correlation_id, project_id = %id, "Project retired");
    Ok(Json(project).into_response())
}

/// Handler for POST /projects/:id/reactivate.
async fn reactivate_project(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|e| fail(correlation_id, e))?;

    let project = state
        .update(|ledger| with_project(ledger.reactivate_project(id)?, id))
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(correlation_id = %correlation_id, project_id = %id, "Project reactivated");
    Ok(Json(project).into_response())
}

/// Handler for GET /reimbursements.
async fn list_reimbursements(State(state): State<AppState>) -> Json<ReimbursementListResponse> {
    let ledger = state.snapshot().await;
    Json(ReimbursementListResponse {
        reimbursements: ledger.reimbursements().to_vec(),
        total: total_reimbursements(ledger.reimbursements()),
    })
}

/// Handler for POST /reimbursements.
async fn create_reimbursement(
    State(state): State<AppState>,
    payload: Result<Json<ReimbursementDraft>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Json(draft) = payload.map_err(|e| fail(correlation_id, e))?;

    let item = state
        .update(|ledger| {
            let (ledger, id) = ledger.add_reimbursement(draft)?;
            with_reimbursement(ledger, id)
        })
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        reimbursement_id = %item.id,
        amount = %item.amount,
        "Reimbursement added"
    );
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// Handler for PUT /reimbursements/:id.
async fn update_reimbursement(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ReimbursementDraft>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|e| fail(correlation_id, e))?;
    let Json(draft) = payload.map_err(|e| fail(correlation_id, e))?;

    let item = state
        .update(|ledger| with_reimbursement(ledger.edit_reimbursement(id, draft)?, id))
        .await
        .map_err(|e| fail(correlation_id, e))?;

    Ok(Json(item).into_response())
}

/// Handler for DELETE /reimbursements/:id.
async fn delete_reimbursement(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|e| fail(correlation_id, e))?;

    state
        .update(|ledger| Ok((ledger.remove_reimbursement(id)?, ())))
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(correlation_id = %correlation_id, reimbursement_id = %id, "Reimbursement removed");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for PUT /overtime.
async fn set_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|e| fail(correlation_id, e))?;

    let overtime_hours = state
        .update(|ledger| {
            let ledger = ledger.with_overtime_hours(request.hours)?;
            let hours = ledger.overtime_hours();
            Ok((ledger, hours))
        })
        .await
        .map_err(|e| fail(correlation_id, e))?;

    info!(correlation_id = %correlation_id, overtime_hours = %overtime_hours, "Overtime updated");
    Ok(Json(OvertimeResponse { overtime_hours }).into_response())
}

/// Handler for GET /salaries.
///
/// Returns one calculation per active session project at the selected
/// month's rates, plus the totals.
async fn salaries_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|e| fail(correlation_id, e))?;
    let (month, rates) =
        month_and_rates(&state, query.period.as_deref()).map_err(|e| fail(correlation_id, e))?;

    let ledger = state.snapshot().await;
    let calculations = ledger.salaries(&rates);
    let totals = ledger.totals(&rates);

    info!(
        correlation_id = %correlation_id,
        projects_count = calculations.len(),
        grand_total = %totals.grand_total,
        "Session salaries calculated"
    );
    Ok(Json(SalariesResponse {
        month,
        rates,
        calculations,
        totals,
    })
    .into_response())
}

/// Handler for GET /breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|e| fail(correlation_id, e))?;
    let (month, rates) =
        month_and_rates(&state, query.period.as_deref()).map_err(|e| fail(correlation_id, e))?;

    let ledger = state.snapshot().await;
    let breakdown =
        SalaryBreakdown::from_ledger(state.config().config(), month, rates, &ledger, today());

    info!(
        correlation_id = %correlation_id,
        format = ?query.format,
        "Breakdown exported"
    );
    rendered(&breakdown, query.format).map_err(|e| fail(correlation_id, e))
}

/// Resolves the selected month and derives both tiers' rates for it.
fn month_and_rates(
    state: &AppState,
    period: Option<&str>,
) -> SalaryResult<(MonthInfo, MonthlyRates)> {
    let month = resolve_period(period)?;
    let rates = monthly_rates(month.working_days, state.config().rates())?;
    Ok((month, rates))
}

/// Converts a calculation body into calculator inputs, applying the same
/// checks the session ledger applies.
fn calculation_inputs(
    request: CalculationRequest,
) -> SalaryResult<(Vec<Project>, Vec<ReimbursementItem>)> {
    validate_overtime_hours(request.overtime_hours)?;

    let projects: Vec<Project> = request.projects.into_iter().map(Into::into).collect();
    validate_positions(&projects)?;

    let reimbursements: Vec<ReimbursementItem> =
        request.reimbursements.into_iter().map(Into::into).collect();
    for item in &reimbursements {
        validate_reimbursement(&item.description, item.amount)?;
    }

    Ok((projects, reimbursements))
}

fn with_project(ledger: Ledger, id: Uuid) -> SalaryResult<(Ledger, Project)> {
    let project = ledger
        .project(id)
        .cloned()
        .ok_or(SalaryError::ProjectNotFound { id })?;
    Ok((ledger, project))
}

fn with_reimbursement(ledger: Ledger, id: Uuid) -> SalaryResult<(Ledger, ReimbursementItem)> {
    let item = ledger
        .reimbursement(id)
        .cloned()
        .ok_or(SalaryError::ReimbursementNotFound { id })?;
    Ok((ledger, item))
}

fn rendered(breakdown: &SalaryBreakdown, format: ExportFormat) -> SalaryResult<Response> {
    let body = render(breakdown, format)?;
    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn fail(correlation_id: Uuid, error: impl Into<ApiErrorResponse>) -> ApiErrorResponse {
    let response = error.into();
    warn!(
        correlation_id = %correlation_id,
        status = response.status.as_u16(),
        code = %response.error.code,
        error = %response.error.message,
        "Request failed"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::ApiError;
    use crate::config::ConfigLoader;
    use crate::models::RateTier;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_router() -> Router {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        create_router(AppState::new(config))
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn as_dec(value: &Value) -> Decimal {
        dec(value.as_str().unwrap())
    }

    fn february_request() -> Value {
        // February 2023 has 20 working days: 1000/day and 125/hour premium
        json!({
            "period": "2023-02",
            "projects": [
                {"name": "Alpha", "start_date": "2023-02-06", "end_date": "2023-02-10", "position": 1},
                {"name": "Beta", "start_date": "2023-02-06", "end_date": "2023-02-10", "position": 2}
            ],
            "overtime_hours": "2"
        })
    }

    #[tokio::test]
    async fn test_calculate_returns_breakdown_json() {
        let router = create_test_router();
        let response = send(&router, "POST", "/calculate", Some(february_request())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = body_json(response).await;
        assert_eq!(body["month"]["working_days"], 20);
        assert_eq!(body["projects"][0]["label"], "1st Project");
        assert_eq!(body["projects"][0]["calculation"]["working_hours"], 40);
        assert_eq!(as_dec(&body["projects"][0]["calculation"]["ot_pay"]), dec("250"));
        assert_eq!(as_dec(&body["projects"][1]["calculation"]["ot_pay"]), dec("0"));
        // 40 x 125 + 2 x 125 + 40 x 62.5
        assert_eq!(as_dec(&body["totals"]["total_salary"]), dec("7750"));
    }

    #[tokio::test]
    async fn test_calculate_text_format() {
        let router = create_test_router();
        let response = send(
            &router,
            "POST",
            "/calculate?format=text",
            Some(february_request()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .get("content-type")
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("February 2023 has 20 working days"));
        assert!(text.contains("GRAND TOTAL: ₱7750.00"));
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let router = create_test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let error: ApiError = serde_json::from_value(body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_invalid_period_returns_400() {
        let router = create_test_router();
        let mut request = february_request();
        request["period"] = json!("2023-13");

        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_calculate_negative_overtime_returns_400() {
        let router = create_test_router();
        let mut request = february_request();
        request["overtime_hours"] = json!("-1");

        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_OVERTIME");
    }

    #[tokio::test]
    async fn test_rates_for_period() {
        let router = create_test_router();
        let response = send(&router, "GET", "/rates?period=2023-02", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["month"]["month_name"], "February 2023");
        assert_eq!(as_dec(&body["rates"]["premium_daily_rate"]), dec("1000"));
        assert_eq!(as_dec(&body["rates"]["standard_hourly_rate"]), dec("62.5"));
    }

    #[tokio::test]
    async fn test_unknown_format_returns_400() {
        let router = create_test_router();
        let response = send(&router, "GET", "/breakdown?format=pdf", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let router = create_test_router();
        let draft = json!({"name": "Alpha", "start_date": "2023-02-06", "end_date": "2023-02-10"});

        let response = send(&router, "POST", "/projects", Some(draft)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let project: Project = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(project.position, 1);
        assert_eq!(project.tier(), RateTier::Premium);

        let uri = format!("/projects/{}/retire", project.id);
        let response = send(&router, "POST", &uri, None).await;
        assert_eq!(body_json(response).await["disbanded"], true);

        let response = send(&router, "GET", "/salaries?period=2023-02", None).await;
        let body = body_json(response).await;
        assert_eq!(body["calculations"].as_array().unwrap().len(), 0);

        let uri = format!("/projects/{}", project.id);
        let response = send(&router, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&router, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "PROJECT_NOT_FOUND");

        let response = send(&router, "GET", "/projects", None).await;
        let body = body_json(response).await;
        assert_eq!(body["next_position"], 2);
        assert_eq!(body["premium_rate_lost"], true);
    }

    #[tokio::test]
    async fn test_invalid_project_id_returns_400() {
        let router = create_test_router();
        let response = send(&router, "DELETE", "/projects/not-a-uuid", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_ID");
    }

    #[tokio::test]
    async fn test_negative_reimbursement_rejected() {
        let router = create_test_router();
        let item = json!({
            "description": "Taxi",
            "amount": "-5",
            "date": "2023-02-06",
            "category": "transportation"
        });

        let response = send(&router, "POST", "/reimbursements", Some(item)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_REIMBURSEMENT");

        let response = send(&router, "GET", "/reimbursements", None).await;
        let body = body_json(response).await;
        assert!(body["reimbursements"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overtime_applies_to_session_salaries() {
        let router = create_test_router();
        let draft = json!({"name": "Alpha", "start_date": "2023-02-06", "end_date": "2023-02-10"});
        send(&router, "POST", "/projects", Some(draft)).await;

        let response = send(&router, "PUT", "/overtime", Some(json!({"hours": "3"}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(as_dec(&body_json(response).await["overtime_hours"]), dec("3"));

        let response = send(&router, "GET", "/salaries?period=2023-02", None).await;
        let body = body_json(response).await;
        assert_eq!(as_dec(&body["calculations"][0]["ot_pay"]), dec("375"));
        assert_eq!(as_dec(&body["totals"]["grand_total"]), dec("5375"));
    }

    #[tokio::test]
    async fn test_calculate_duplicate_positions_returns_400() {
        let router = create_test_router();
        let mut request = february_request();
        request["projects"][1]["position"] = json!(1);

        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("position 1"));
    }

    #[tokio::test]
    async fn test_calculate_zero_position_returns_400() {
        let router = create_test_router();
        let mut request = february_request();
        request["projects"][0]["position"] = json!(0);

        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_calculate_invalid_reimbursement_returns_400() {
        let router = create_test_router();
        let mut request = february_request();
        request["reimbursements"] = json!([
            {"description": "Taxi", "amount": "-5", "date": "2023-02-06", "category": "transportation"}
        ]);

        let response = send(&router, "POST", "/calculate", Some(request.clone())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_REIMBURSEMENT");

        request["reimbursements"][0]["amount"] = json!("5");
        request["reimbursements"][0]["description"] = json!("  ");
        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_REIMBURSEMENT");
    }

    #[tokio::test]
    async fn test_calculate_rejects_amounts_past_bounds() {
        let router = create_test_router();
        let mut request = february_request();
        request["overtime_hours"] = json!(Decimal::MAX.to_string());

        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_OVERTIME");

        let mut request = february_request();
        request["reimbursements"] = json!([
            {"description": "Taxi", "amount": Decimal::MAX.to_string(), "date": "2023-02-06", "category": "transportation"},
            {"description": "Taxi", "amount": Decimal::MAX.to_string(), "date": "2023-02-07", "category": "transportation"}
        ]);
        let response = send(&router, "POST", "/calculate", Some(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_REIMBURSEMENT");
    }

    #[tokio::test]
    async fn test_oversized_overtime_leaves_session_usable() {
        let router = create_test_router();
        let draft = json!({"name": "Alpha", "start_date": "2023-02-06", "end_date": "2023-02-10"});
        send(&router, "POST", "/projects", Some(draft)).await;

        let hours = json!({"hours": Decimal::MAX.to_string()});
        let response = send(&router, "PUT", "/overtime", Some(hours)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_OVERTIME");

        let response = send(&router, "GET", "/salaries?period=2023-02", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(as_dec(&body["totals"]["grand_total"]), dec("5000"));
    }
}
