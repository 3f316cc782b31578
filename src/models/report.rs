//! Weekly report DTOs.
//!
//! JSON field names are camelCase to match the front end. `teamData` is a
//! raw JSON tree: the documented per-member shape (`assigned`, `completed`,
//! `bugs.{critical,major,minor}`, `tcr`, `tpr`) is a client convention the
//! server never validates.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::entity::weekly_report;

/// Client-supplied fields for creating a report.
///
/// `id` and `createdAt` are never accepted from the client; storage assigns
/// both at insertion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    /// Person responsible for the week.
    pub week_owner: String,
    /// First day of the reported week (ISO date).
    pub week_start: NaiveDate,
    /// Last day of the reported week (ISO date).
    pub week_end: NaiveDate,
    /// Per-member metrics, schema-less.
    #[schema(value_type = Object)]
    pub team_data: JsonValue,
}

/// A stored report, as returned by every read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    /// Server-assigned ID.
    pub id: i32,
    /// Person responsible for the week.
    pub week_owner: String,
    /// First day of the reported week.
    pub week_start: NaiveDate,
    /// Last day of the reported week.
    pub week_end: NaiveDate,
    /// Per-member metrics, schema-less.
    #[schema(value_type = Object)]
    pub team_data: JsonValue,
    /// Insertion timestamp, assigned by storage.
    pub created_at: NaiveDateTime,
}

impl From<weekly_report::Model> for WeeklyReport {
    fn from(model: weekly_report::Model) -> Self {
        WeeklyReport {
            id: model.id,
            week_owner: model.week_owner,
            week_start: model.week_start,
            week_end: model.week_end,
            team_data: model.team_data,
            created_at: model.created_at,
        }
    }
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteReportResponse {
    pub message: String,
}

impl DeleteReportResponse {
    pub fn deleted() -> Self {
        DeleteReportResponse {
            message: "Report deleted successfully".to_string(),
        }
    }
}
