//! Delivery truck record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single corn delivery, as returned by the truck endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTruck {
    pub id: String,
    /// Vehicle plate ("placa"), free text while editing
    #[serde(default)]
    pub track_sign: String,
    /// Driver/truck name ("motorista")
    #[serde(default)]
    pub truck_name: String,
    /// Weight in metric tons
    #[serde(default)]
    pub weight: f64,
    /// Bag count assigned by the server
    #[serde(default)]
    pub quantity: u64,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": "t-1",
            "trackSign": "ABC1234",
            "truckName": "João",
            "weight": 1.5,
            "quantity": 25,
            "createdAt": "2024-01-01T12:00:00Z",
            "updatedAt": null
        }"#;
        let truck: DeliveryTruck = serde_json::from_str(json).unwrap();
        assert_eq!(truck.track_sign, "ABC1234");
        assert_eq!(truck.quantity, 25);
        assert!(truck.created_at.is_some());
        assert!(truck.updated_at.is_none());
    }

    #[test]
    fn test_missing_timestamps_are_absent() {
        let json = r#"{"id": "t-2", "trackSign": "", "truckName": "", "weight": 0, "quantity": 0}"#;
        let truck: DeliveryTruck = serde_json::from_str(json).unwrap();
        assert!(truck.created_at.is_none());
    }
}
