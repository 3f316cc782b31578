//! Weekly report entity.
//!
//! `team_data` is stored as JSONB and never inspected by the server; its
//! per-member shape is a client-side convention.

use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weekly_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub week_owner: String,
    pub week_start: Date,
    pub week_end: Date,
    #[sea_orm(column_type = "JsonBinary")]
    pub team_data: JsonValue,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
