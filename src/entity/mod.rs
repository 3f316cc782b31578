//! SeaORM entity definitions for the PostgreSQL database.

pub mod weekly_report;
