//! Dashboard projection

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::record_aggregator::{aggregate, apply_day_in, business_totals, project_non_empty, DeliverySummary};
use crate::model::Business;

/// Chart labels longer than this are cut and suffixed with `...`
pub const CHART_LABEL_MAX: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub business_id: String,
    pub name: String,
    pub chart_label: String,
    pub truck_count: usize,
    pub total_weight: f64,
    pub total_bag_quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub day: Option<NaiveDate>,
    pub summary: DeliverySummary,
    pub rows: Vec<DashboardRow>,
}

/// Dashboard for `day` (local time), or for everything when `day` is `None`.
pub fn dashboard(businesses: &[Business], day: Option<NaiveDate>) -> DashboardView {
    dashboard_in(businesses, day, &Local)
}

/// With no day, businesses pass through untouched, including those
/// without trucks. With a day, trucks are kept by day equality
/// (undated ones included) and empty businesses are dropped.
pub fn dashboard_in<Tz: TimeZone>(
    businesses: &[Business],
    day: Option<NaiveDate>,
    tz: &Tz,
) -> DashboardView {
    let visible = match day {
        None => businesses.to_vec(),
        Some(d) => project_non_empty(&apply_day_in(businesses, d, tz)),
    };

    let rows = visible
        .iter()
        .map(|b| {
            let totals = business_totals(b);
            DashboardRow {
                business_id: b.id.clone(),
                name: b.name.clone(),
                chart_label: chart_label(&b.name),
                truck_count: totals.truck_count,
                total_weight: totals.total_weight,
                total_bag_quantity: totals.total_bag_quantity,
            }
        })
        .collect();

    DashboardView {
        day,
        summary: aggregate(&visible),
        rows,
    }
}

pub fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_MAX {
        let cut: String = name.chars().take(CHART_LABEL_MAX).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::record_aggregator::fixtures::{business, truck};
    use chrono::Utc;

    fn sample() -> Vec<Business> {
        vec![
            business(
                "b1",
                "Fazenda Boa Vista do Sul",
                vec![
                    truck("t1", Some("2024-01-01T12:00:00Z"), 1.0, 16),
                    truck("t2", Some("2024-01-02T12:00:00Z"), 2.0, 33),
                ],
            ),
            business("b2", "Sítio", vec![truck("t3", Some("2024-01-02T12:00:00Z"), 1.5, 25)]),
            business("b3", "Sem entregas", vec![]),
        ]
    }

    #[test]
    fn test_without_day_keeps_everything() {
        let view = dashboard_in(&sample(), None, &Utc);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.summary.business_count, 3);
        assert_eq!(view.summary.truck_count, 3);
        assert_eq!(view.summary.total_bag_quantity, 74);
    }

    #[test]
    fn test_with_day_filters_and_drops_empty() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let view = dashboard_in(&sample(), Some(day), &Utc);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].business_id, "b1");
        assert_eq!(view.rows[0].truck_count, 1);
        assert_eq!(view.summary.total_bag_quantity, 16);
    }

    #[test]
    fn test_undated_trucks_always_shown() {
        let businesses = vec![business("b1", "Fazenda", vec![truck("t1", None, 1.0, 16)])];
        let day = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
        let view = dashboard_in(&businesses, Some(day), &Utc);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn test_chart_label_truncation() {
        assert_eq!(chart_label("Sítio"), "Sítio");
        assert_eq!(chart_label("Fazenda Boa Vis"), "Fazenda Boa Vis");
        assert_eq!(chart_label("Fazenda Boa Vista do Sul"), "Fazenda Boa Vis...");
    }
}
