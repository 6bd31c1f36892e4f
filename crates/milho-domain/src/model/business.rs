//! Business record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::DeliveryTruck;

/// A registered business and the deliveries made to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    /// CNPJ, digits only as stored by the API
    #[serde(default, deserialize_with = "non_empty")]
    pub cnpj: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub phone: Option<String>,
    #[serde(default)]
    pub delivery_trucks: Vec<DeliveryTruck>,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Business {
    /// Copy of this business carrying a different truck sequence.
    pub fn with_trucks(&self, delivery_trucks: Vec<DeliveryTruck>) -> Self {
        Self {
            delivery_trucks,
            ..self.clone()
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
