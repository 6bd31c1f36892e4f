//! Domain services
//!
//! All pure: no I/O, no shared state, safe to call from anywhere.

pub mod dashboard;
pub mod identifier;
pub mod pt_br;
pub mod record_aggregator;
pub mod report_projector;
pub mod unit_converter;

pub use dashboard::{dashboard, dashboard_in, DashboardRow, DashboardView};
pub use record_aggregator::{
    aggregate, business_totals, filter_businesses_by_name, filter_by_date,
    filter_by_day_equality, project_non_empty, BusinessTotals, DeliverySummary,
};
pub use report_projector::{project, ReportModel, ReportSection};
pub use unit_converter::{weight_to_bag_count, weight_to_bag_count_with, BAG_WEIGHT_KG};
