//! Domain models for the weekly report server.

pub mod report;

// Re-export commonly used types
pub use report::{CreateReportRequest, DeleteReportResponse, WeeklyReport};
