//! Report projection: the data contract handed to document renderers

use serde::{Deserialize, Serialize};

use super::record_aggregator::{
    aggregate, apply_date_range, business_totals, filter_businesses_by_name, project_non_empty,
    BusinessTotals, DeliverySummary,
};
use crate::model::{Business, FieldVisibility, ReportFilterCriteria, ReportMode};

/// One business section of a report (one page in paged renderers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub business: Business,
    pub totals: BusinessTotals,
}

/// Everything a renderer needs to lay out a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    pub mode: ReportMode,
    /// Filters as applied; `None` for complete reports
    pub criteria: Option<ReportFilterCriteria>,
    pub visibility: FieldVisibility,
    pub sections: Vec<ReportSection>,
    pub summary: DeliverySummary,
}

impl ReportModel {
    pub fn businesses(&self) -> impl Iterator<Item = &Business> {
        self.sections.iter().map(|s| &s.business)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Build the report model for `mode`.
///
/// Complete mode keeps every business and forces all fields visible.
/// Filtered mode applies the name filter, then the date range, then
/// drops businesses left without trucks, and carries the visibility
/// flags through unchanged.
pub fn project(
    businesses: &[Business],
    criteria: &ReportFilterCriteria,
    mode: ReportMode,
) -> ReportModel {
    let (selected, applied, visibility) = match mode {
        ReportMode::Complete => (businesses.to_vec(), None, FieldVisibility::all()),
        ReportMode::Filtered => {
            let named = filter_businesses_by_name(businesses, &criteria.business_name);
            let dated = apply_date_range(&named, criteria.date_from, criteria.date_to);
            (
                project_non_empty(&dated),
                Some(criteria.clone()),
                criteria.visibility,
            )
        }
    };

    let summary = aggregate(&selected);
    let sections = selected
        .into_iter()
        .map(|business| ReportSection {
            totals: business_totals(&business),
            business,
        })
        .collect();

    ReportModel {
        mode,
        criteria: applied,
        visibility,
        sections,
        summary,
    }
}
