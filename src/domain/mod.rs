//! Core domain layer. No external I/O dependencies.
//!
//! Wire records, outcomes and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod outcome;

pub use entities::{
    CheckTaskRequest, CheckTaskResponse, ClickUpStatus, DEVLOG_FILENAME, ReportStatus,
    SaveDevlogRequest, SaveDevlogResponse, SaveReportRequest, SaveReportResponse,
};
pub use errors::{ApiError, DomainError};
pub use outcome::{
    DevlogOutcome, DevlogSaved, ErrorCode, ErrorOutcome, ReportOutcome, ReportSaved, TaskPending,
};
