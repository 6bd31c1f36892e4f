//! Create/update payloads sent to the remote API
//!
//! Form values arrive masked; payloads always carry the unformatted
//! identifiers. Validity is advisory: `issues()` reports problems and
//! the caller decides whether to submit anyway.

use serde::{Deserialize, Serialize};

use crate::service::identifier::{
    is_valid_phone, is_valid_plate, is_valid_tax_id, unformat_phone, unformat_plate,
    unformat_tax_id,
};
use crate::service::unit_converter::weight_to_bag_count;

/// Advisory problem found in a form before submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldIssue {
    EmptyName,
    InvalidTaxId,
    InvalidPhone,
    InvalidPlate,
    EmptyDriver,
    NonPositiveWeight,
}

impl FieldIssue {
    /// Message shown next to the offending field
    pub fn message(&self) -> &'static str {
        match self {
            FieldIssue::EmptyName => "Nome da empresa é obrigatório",
            FieldIssue::InvalidTaxId => "CNPJ inválido",
            FieldIssue::InvalidPhone => "Telefone inválido",
            FieldIssue::InvalidPlate => "Placa inválida",
            FieldIssue::EmptyDriver => "Nome do motorista é obrigatório",
            FieldIssue::NonPositiveWeight => "Peso deve ser maior que zero",
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Business create/update body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSubmission {
    pub name: String,
    pub cnpj: String,
    pub phone: String,
}

impl BusinessSubmission {
    pub fn from_form(name: &str, tax_id: &str, phone: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            cnpj: unformat_tax_id(tax_id),
            phone: unformat_phone(phone),
        }
    }

    /// Tax id and phone are optional; they are only checked when present.
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.name.is_empty() {
            issues.push(FieldIssue::EmptyName);
        }
        if !self.cnpj.is_empty() && !is_valid_tax_id(&self.cnpj) {
            issues.push(FieldIssue::InvalidTaxId);
        }
        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            issues.push(FieldIssue::InvalidPhone);
        }
        issues
    }
}

/// Delivery truck create/update body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTruckSubmission {
    pub business_id: String,
    pub track_sign: String,
    pub truck_name: String,
    pub weight: f64,
}

impl DeliveryTruckSubmission {
    pub fn from_form(business_id: &str, plate: &str, driver: &str, weight: f64) -> Self {
        Self {
            business_id: business_id.trim().to_string(),
            track_sign: unformat_plate(plate),
            truck_name: driver.trim().to_string(),
            weight: if weight.is_finite() { weight.max(0.0) } else { 0.0 },
        }
    }

    /// Bag count shown while the server value is not yet known
    pub fn preview_bag_count(&self) -> u64 {
        weight_to_bag_count(self.weight)
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if !is_valid_plate(&self.track_sign) {
            issues.push(FieldIssue::InvalidPlate);
        }
        if self.truck_name.is_empty() {
            issues.push(FieldIssue::EmptyDriver);
        }
        if self.weight <= 0.0 {
            issues.push(FieldIssue::NonPositiveWeight);
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_submission_unformats_identifiers() {
        let payload =
            BusinessSubmission::from_form("  Cooperativa Sul ", "11.444.777/0001-61", "(11) 98765-4321");
        assert_eq!(payload.name, "Cooperativa Sul");
        assert_eq!(payload.cnpj, "11444777000161");
        assert_eq!(payload.phone, "11987654321");
        assert!(payload.issues().is_empty());
    }

    #[test]
    fn test_business_submission_optional_fields() {
        let payload = BusinessSubmission::from_form("Sítio", "", "");
        assert!(payload.issues().is_empty());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["cnpj"], "");
    }

    #[test]
    fn test_business_submission_reports_issues() {
        let payload = BusinessSubmission::from_form(" ", "11.111.111/1111-11", "(10) 98765-4321");
        assert_eq!(
            payload.issues(),
            vec![
                FieldIssue::EmptyName,
                FieldIssue::InvalidTaxId,
                FieldIssue::InvalidPhone
            ]
        );
    }

    #[test]
    fn test_truck_submission_payload() {
        let payload = DeliveryTruckSubmission::from_form("b-1", "abc-1d23", " Maria ", 1.5);
        assert_eq!(payload.track_sign, "ABC1D23");
        assert_eq!(payload.truck_name, "Maria");
        assert_eq!(payload.preview_bag_count(), 25);
        assert!(payload.issues().is_empty());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["businessId"], "b-1");
        assert_eq!(json["trackSign"], "ABC1D23");
    }

    #[test]
    fn test_truck_submission_clamps_negative_weight() {
        let payload = DeliveryTruckSubmission::from_form("b-1", "AB12345", "", -3.0);
        assert_eq!(payload.weight, 0.0);
        assert_eq!(
            payload.issues(),
            vec![
                FieldIssue::InvalidPlate,
                FieldIssue::EmptyDriver,
                FieldIssue::NonPositiveWeight
            ]
        );
    }
}
