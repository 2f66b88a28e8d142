//! Application use cases. Orchestrate domain logic via ports.

pub mod daily_report_service;
pub mod devlog_service;
pub mod error_mapping;
pub mod project;

#[cfg(test)]
pub(crate) mod test_support;

pub use daily_report_service::{DailyReportService, SubmitDailyReportInput};
pub use devlog_service::{DevlogService, GenerateDevlogInput};
