//! Filtering and totals over business/truck collections
//!
//! Nothing here mutates its input; every filter returns a new vector.
//!
//! Two date policies coexist and must not be merged:
//! - range filtering (reports) drops trucks without a creation time
//!   whenever a bound is set;
//! - day equality (dashboard) always keeps undated trucks.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Business, DeliveryTruck};

/// Totals over a set of businesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySummary {
    pub business_count: usize,
    pub truck_count: usize,
    /// Metric tons
    pub total_weight: f64,
    pub total_bag_quantity: u64,
}

/// Totals for a single business
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessTotals {
    pub truck_count: usize,
    pub total_weight: f64,
    pub total_bag_quantity: u64,
}

/// Keep trucks created within `[from, to]` (instants, both inclusive).
///
/// With no bounds every truck is kept. With any bound, undated trucks
/// are dropped.
pub fn filter_by_date(
    trucks: &[DeliveryTruck],
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Vec<DeliveryTruck> {
    if from.is_none() && to.is_none() {
        return trucks.to_vec();
    }
    trucks
        .iter()
        .filter(|truck| match truck.created_at {
            None => false,
            Some(created) => {
                from.map_or(true, |f| f <= created) && to.map_or(true, |t| created <= t)
            }
        })
        .cloned()
        .collect()
}

/// Keep trucks created on `day` in the local time zone; undated trucks stay.
pub fn filter_by_day_equality(trucks: &[DeliveryTruck], day: NaiveDate) -> Vec<DeliveryTruck> {
    filter_by_day_equality_in(trucks, day, &Local)
}

/// [`filter_by_day_equality`] against an explicit time zone.
pub fn filter_by_day_equality_in<Tz: TimeZone>(
    trucks: &[DeliveryTruck],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<DeliveryTruck> {
    trucks
        .iter()
        .filter(|truck| match truck.created_at {
            None => true,
            Some(created) => created.with_timezone(tz).date_naive() == day,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the business name.
pub fn filter_businesses_by_name(businesses: &[Business], substring: &str) -> Vec<Business> {
    if substring.is_empty() {
        return businesses.to_vec();
    }
    let needle = substring.to_lowercase();
    businesses
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Drop businesses left without trucks.
pub fn project_non_empty(businesses: &[Business]) -> Vec<Business> {
    businesses
        .iter()
        .filter(|b| !b.delivery_trucks.is_empty())
        .cloned()
        .collect()
}

/// Apply [`filter_by_date`] to every business's trucks.
pub fn apply_date_range(
    businesses: &[Business],
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Vec<Business> {
    businesses
        .iter()
        .map(|b| b.with_trucks(filter_by_date(&b.delivery_trucks, from, to)))
        .collect()
}

/// Apply [`filter_by_day_equality_in`] to every business's trucks.
pub fn apply_day_in<Tz: TimeZone>(businesses: &[Business], day: NaiveDate, tz: &Tz) -> Vec<Business> {
    businesses
        .iter()
        .map(|b| b.with_trucks(filter_by_day_equality_in(&b.delivery_trucks, day, tz)))
        .collect()
}

/// Sums the server-assigned weight and quantity of every truck.
pub fn aggregate(businesses: &[Business]) -> DeliverySummary {
    businesses
        .iter()
        .map(business_totals)
        .fold(
            DeliverySummary {
                business_count: businesses.len(),
                ..Default::default()
            },
            |mut acc, t| {
                acc.truck_count += t.truck_count;
                acc.total_weight += t.total_weight;
                acc.total_bag_quantity += t.total_bag_quantity;
                acc
            },
        )
}

pub fn business_totals(business: &Business) -> BusinessTotals {
    let trucks = &business.delivery_trucks;
    BusinessTotals {
        truck_count: trucks.len(),
        total_weight: trucks.iter().map(|t| t.weight).sum(),
        total_bag_quantity: trucks.iter().map(|t| t.quantity).sum(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn truck(id: &str, created: Option<&str>, weight: f64, quantity: u64) -> DeliveryTruck {
        DeliveryTruck {
            id: id.to_string(),
            track_sign: "ABC1234".to_string(),
            truck_name: format!("Motorista {}", id),
            weight,
            quantity,
            created_at: created.and_then(crate::model::timestamp::parse_timestamp),
            updated_at: None,
        }
    }

    pub fn business(id: &str, name: &str, trucks: Vec<DeliveryTruck>) -> Business {
        Business {
            id: id.to_string(),
            name: name.to_string(),
            cnpj: Some("11444777000161".to_string()),
            phone: Some("11987654321".to_string()),
            delivery_trucks: trucks,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{business, truck};
    use super::*;
    use crate::model::timestamp::parse_timestamp;

    fn two_days() -> Vec<DeliveryTruck> {
        vec![
            truck("t1", Some("2024-01-01T12:00:00Z"), 1.0, 16),
            truck("t2", Some("2024-01-02T12:00:00Z"), 2.0, 33),
        ]
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_equality_keeps_matching_day() {
        let kept = filter_by_day_equality_in(&two_days(), day(2024, 1, 1), &Utc);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "t1");
    }

    #[test]
    fn test_day_equality_local_zone() {
        // Midday timestamps land on the same calendar day in any zone
        // within eleven hours of UTC.
        let kept = filter_by_day_equality(&two_days(), day(2024, 1, 2));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "t2");
    }

    #[test]
    fn test_day_equality_respects_zone_offset() {
        let trucks = vec![truck("late", Some("2024-01-02T01:00:00Z"), 1.0, 16)];
        let sao_paulo = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(filter_by_day_equality_in(&trucks, day(2024, 1, 1), &sao_paulo).len(), 1);
        assert!(filter_by_day_equality_in(&trucks, day(2024, 1, 1), &Utc).is_empty());
    }

    #[test]
    fn test_day_equality_keeps_undated() {
        let mut trucks = two_days();
        trucks.push(truck("undated", None, 1.0, 16));
        let kept = filter_by_day_equality_in(&trucks, day(2024, 1, 1), &Utc);
        let ids: Vec<_> = kept.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "undated"]);
    }

    #[test]
    fn test_date_range_from_only() {
        let from = parse_timestamp("2024-01-02");
        let kept = filter_by_date(&two_days(), from, None);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "t2");
    }

    #[test]
    fn test_date_range_bounds_are_inclusive_instants() {
        let from = parse_timestamp("2024-01-01T12:00:00Z");
        let to = parse_timestamp("2024-01-02T12:00:00Z");
        assert_eq!(filter_by_date(&two_days(), from, to).len(), 2);

        // Date-only upper bound is midnight, so the same day's noon is excluded.
        let to = parse_timestamp("2024-01-02");
        assert_eq!(filter_by_date(&two_days(), None, to).len(), 1);
    }

    #[test]
    fn test_date_range_drops_undated_only_when_bounded() {
        let trucks = vec![truck("undated", None, 1.0, 16)];
        assert_eq!(filter_by_date(&trucks, None, None).len(), 1);
        assert!(filter_by_date(&trucks, parse_timestamp("2000-01-01"), None).is_empty());
    }

    #[test]
    fn test_name_filter_case_insensitive() {
        let businesses = vec![
            business("b1", "Fazenda Boa Vista", vec![]),
            business("b2", "Cooperativa Sul", vec![]),
        ];
        let found = filter_businesses_by_name(&businesses, "BOA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b1");
        assert_eq!(filter_businesses_by_name(&businesses, "").len(), 2);
        assert!(filter_businesses_by_name(&businesses, "norte").is_empty());
    }

    #[test]
    fn test_project_non_empty_after_date_filter() {
        let businesses = vec![
            business("b1", "Fazenda", vec![truck("t1", Some("2024-01-01T12:00:00Z"), 1.0, 16)]),
            business("b2", "Armazém", vec![truck("t2", Some("2024-03-01T12:00:00Z"), 1.0, 16)]),
        ];
        let snapshot = businesses.clone();

        let dated = apply_date_range(&businesses, parse_timestamp("2024-02-01"), None);
        let remaining = project_non_empty(&dated);

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b2");
        assert_eq!(businesses, snapshot);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), DeliverySummary::default());
    }

    #[test]
    fn test_aggregate_two_businesses() {
        let businesses = vec![
            business("b1", "A", vec![truck("t1", None, 1.5, 20)]),
            business("b2", "B", vec![truck("t2", None, 2.5, 30)]),
        ];
        let summary = aggregate(&businesses);
        assert_eq!(summary.business_count, 2);
        assert_eq!(summary.truck_count, 2);
        assert!((summary.total_weight - 4.0).abs() < 0.01);
        assert_eq!(summary.total_bag_quantity, 50);
    }

    #[test]
    fn test_aggregate_uses_server_quantity() {
        // 1 t would preview as 16 bags; the stored quantity wins.
        let businesses = vec![business("b1", "A", vec![truck("t1", None, 1.0, 99)])];
        assert_eq!(aggregate(&businesses).total_bag_quantity, 99);
    }

    #[test]
    fn test_business_totals() {
        let b = business(
            "b1",
            "A",
            vec![truck("t1", None, 1.25, 20), truck("t2", None, 0.75, 12)],
        );
        let totals = business_totals(&b);
        assert_eq!(totals.truck_count, 2);
        assert!((totals.total_weight - 2.0).abs() < 0.01);
        assert_eq!(totals.total_bag_quantity, 32);
    }
}
