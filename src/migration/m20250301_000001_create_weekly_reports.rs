//! Migration: Create the weekly_reports table.
//!
//! One row per weekly snapshot. `id` and `created_at` are assigned by the
//! database; clients never supply them.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE IF NOT EXISTS weekly_reports (
                    id SERIAL PRIMARY KEY,
                    week_owner VARCHAR(255) NOT NULL,
                    week_start DATE NOT NULL,
                    week_end DATE NOT NULL,
                    team_data JSONB NOT NULL,
                    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                );

                -- Index for listing by creation date (most recent first)
                CREATE INDEX IF NOT EXISTS idx_weekly_reports_created_at
                    ON weekly_reports(created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS weekly_reports;")
            .await?;

        Ok(())
    }
}
