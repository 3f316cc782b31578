//! Database queries for weekly reports.
//!
//! Each operation is a single SQL statement running in its own implicit
//! transaction; nothing here retries or spans statements.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde_json::Value as JsonValue;

use crate::entity::weekly_report::{self, ActiveModel, Column, Entity as WeeklyReport};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Insert a new report. `id` and `created_at` are assigned by the
    /// database and returned through INSERT ... RETURNING.
    pub async fn insert_report(
        &self,
        week_owner: String,
        week_start: NaiveDate,
        week_end: NaiveDate,
        team_data: JsonValue,
    ) -> AppResult<weekly_report::Model> {
        let model = ActiveModel {
            week_owner: Set(week_owner),
            week_start: Set(week_start),
            week_end: Set(week_end),
            team_data: Set(team_data),
            // id and created_at stay NotSet so storage assigns them
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert report: {}", e)))?;

        Ok(result)
    }

    /// List all reports, most recent first. An empty table yields an empty
    /// vec, not an error. Ties on created_at fall back to id descending so
    /// the order is stable.
    pub async fn list_reports(&self) -> AppResult<Vec<weekly_report::Model>> {
        let reports = WeeklyReport::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list reports: {}", e)))?;

        Ok(reports)
    }

    /// Get a report by ID.
    pub async fn get_report_by_id(&self, id: i32) -> AppResult<Option<weekly_report::Model>> {
        let result = WeeklyReport::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get report: {}", e)))?;

        Ok(result)
    }

    /// Delete a report by ID. Returns false when no row matched.
    pub async fn delete_report_by_id(&self, id: i32) -> AppResult<bool> {
        let result = WeeklyReport::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete report: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}
