//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weekly Report Server",
        version = "0.1.0",
        description = "API server for storing and viewing weekly team performance reports"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Report endpoints
        api::reports::list_reports,
        api::reports::create_report,
        api::reports::get_report,
        api::reports::delete_report,
    ),
    components(
        schemas(
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Reports
            models::CreateReportRequest,
            models::WeeklyReport,
            models::DeleteReportResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Reports", description = "Weekly report CRUD")
    )
)]
pub struct ApiDoc;
