//! Application use cases

pub mod report_service;

pub use report_service::{
    build_dashboard, build_report, business_detail, export, BusinessDetail, ExportedReport,
    ReportOptions, ReportServiceError,
};
