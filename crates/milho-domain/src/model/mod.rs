//! Domain model types

pub mod business;
pub mod delivery_truck;
pub mod report_filter;
pub mod submission;
pub mod timestamp;

pub use business::Business;
pub use delivery_truck::DeliveryTruck;
pub use report_filter::{FieldVisibility, ReportField, ReportFilterCriteria, ReportMode};
pub use submission::{BusinessSubmission, DeliveryTruckSubmission, FieldIssue};
