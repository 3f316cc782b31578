//! Weekly report API handlers.
//!
//! Thin adapters between HTTP and the repository: every handler maps to
//! exactly one SQL statement and converts failures to a status code at the
//! point of origin.

use actix_web::{HttpResponse, delete, get, post, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{CreateReportRequest, DeleteReportResponse, WeeklyReport};

/// Configure report routes.
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_reports)
        .service(create_report)
        .service(get_report)
        .service(delete_report);
}

/// Parse the `{id}` path segment; non-numeric input is a client error, not
/// a missing route.
fn parse_report_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidInput("Invalid report ID".to_string()))
}

/// List all reports, most recent first.
///
/// GET /reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<WeeklyReport>)
    )
)]
#[get("/reports")]
pub async fn list_reports(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let reports: Vec<WeeklyReport> = pool
        .list_reports()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(reports))
}

/// Create a report from client-supplied fields.
///
/// POST /reports
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "Reports",
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Stored report including id and createdAt", body = WeeklyReport),
        (status = 400, description = "Malformed request body")
    )
)]
#[post("/reports")]
pub async fn create_report(
    pool: web::Data<DbPool>,
    body: web::Json<CreateReportRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();

    let report = pool
        .insert_report(
            request.week_owner,
            request.week_start,
            request.week_end,
            request.team_data,
        )
        .await?;

    Ok(HttpResponse::Created().json(WeeklyReport::from(report)))
}

/// Get a single report by ID.
///
/// GET /reports/{id}
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "Reports",
    params(
        ("id" = i32, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report details", body = WeeklyReport),
        (status = 400, description = "Non-numeric report ID"),
        (status = 404, description = "Report not found")
    )
)]
#[get("/reports/{id}")]
pub async fn get_report(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_report_id(&path.into_inner())?;

    let report = pool
        .get_report_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Report".to_string()))?;

    Ok(HttpResponse::Ok().json(WeeklyReport::from(report)))
}

/// Permanently delete a report.
///
/// DELETE /reports/{id}
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = "Reports",
    params(
        ("id" = i32, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteReportResponse),
        (status = 400, description = "Non-numeric report ID"),
        (status = 404, description = "Report not found")
    )
)]
#[delete("/reports/{id}")]
pub async fn delete_report(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_report_id(&path.into_inner())?;

    if !pool.delete_report_by_id(id).await? {
        return Err(AppError::NotFound("Report".to_string()));
    }

    Ok(HttpResponse::Ok().json(DeleteReportResponse::deleted()))
}
