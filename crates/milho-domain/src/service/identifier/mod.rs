//! Identifier formatting: CNPJ, phone and vehicle plate
//!
//! Every function here is total. Masking returns a best-effort string
//! for any input and the `is_valid_*` predicates return `false` rather
//! than signaling; the binding check belongs to the API.

pub mod mask;
mod phone;
mod plate;
mod tax_id;

pub use phone::{format_phone, is_valid_phone, unformat_phone};
pub use plate::{format_plate, is_valid_plate, unformat_plate, PLATE_LEN};
pub use tax_id::{format_tax_id, is_valid_tax_id, unformat_tax_id, TAX_ID_LEN};

use serde::{Deserialize, Serialize};

/// The identifier families handled by this module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    #[serde(rename = "cnpj")]
    TaxId,
    Phone,
    Plate,
}

impl IdentifierKind {
    pub fn format(&self, input: &str) -> String {
        match self {
            IdentifierKind::TaxId => format_tax_id(input),
            IdentifierKind::Phone => format_phone(input),
            IdentifierKind::Plate => format_plate(input),
        }
    }

    pub fn unformat(&self, input: &str) -> String {
        match self {
            IdentifierKind::TaxId => unformat_tax_id(input),
            IdentifierKind::Phone => unformat_phone(input),
            IdentifierKind::Plate => unformat_plate(input),
        }
    }

    pub fn is_valid(&self, input: &str) -> bool {
        match self {
            IdentifierKind::TaxId => is_valid_tax_id(input),
            IdentifierKind::Phone => is_valid_phone(input),
            IdentifierKind::Plate => is_valid_plate(input),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdentifierKind::TaxId => "CNPJ",
            IdentifierKind::Phone => "Telefone",
            IdentifierKind::Plate => "Placa",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(IdentifierKind::TaxId.format("11444777000161"), "11.444.777/0001-61");
        assert_eq!(IdentifierKind::Phone.unformat("(11) 3333-4444"), "1133334444");
        assert!(IdentifierKind::Plate.is_valid("ABC-1D23"));
        assert!(!IdentifierKind::Phone.is_valid("11887654321"));
    }

    #[test]
    fn test_kind_serializes_like_cli_names() {
        assert_eq!(serde_json::to_string(&IdentifierKind::TaxId).unwrap(), "\"cnpj\"");
        assert_eq!(serde_json::to_string(&IdentifierKind::Plate).unwrap(), "\"plate\"");
        let kind: IdentifierKind = serde_json::from_str("\"cnpj\"").unwrap();
        assert_eq!(kind, IdentifierKind::TaxId);
    }
}
