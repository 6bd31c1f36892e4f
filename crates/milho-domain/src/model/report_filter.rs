//! Report filter criteria and field visibility

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which report variant to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Every business and truck, every field
    #[default]
    Complete,
    /// Name/date filters and per-field visibility applied
    Filtered,
}

impl ReportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMode::Complete => "complete",
            ReportMode::Filtered => "filtered",
        }
    }

    /// Report title shown on every page
    pub fn title(&self) -> &'static str {
        match self {
            ReportMode::Complete => "Relatório de Dados Completos",
            ReportMode::Filtered => "Relatório de Dados Filtrados",
        }
    }
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional report fields. All visible unless switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldVisibility {
    pub tax_id: bool,
    pub phone: bool,
    pub plate: bool,
    pub driver: bool,
    pub weight: bool,
    pub quantity: bool,
}

impl FieldVisibility {
    pub const fn all() -> Self {
        Self {
            tax_id: true,
            phone: true,
            plate: true,
            driver: true,
            weight: true,
            quantity: true,
        }
    }

    /// Switch a single field off
    pub fn hide(&mut self, field: ReportField) {
        match field {
            ReportField::TaxId => self.tax_id = false,
            ReportField::Phone => self.phone = false,
            ReportField::Plate => self.plate = false,
            ReportField::Driver => self.driver = false,
            ReportField::Weight => self.weight = false,
            ReportField::Quantity => self.quantity = false,
        }
    }

    pub fn is_visible(&self, field: ReportField) -> bool {
        match field {
            ReportField::TaxId => self.tax_id,
            ReportField::Phone => self.phone,
            ReportField::Plate => self.plate,
            ReportField::Driver => self.driver,
            ReportField::Weight => self.weight,
            ReportField::Quantity => self.quantity,
        }
    }
}

impl Default for FieldVisibility {
    fn default() -> Self {
        Self::all()
    }
}

/// Fields whose visibility can be toggled in a filtered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportField {
    TaxId,
    Phone,
    Plate,
    Driver,
    Weight,
    Quantity,
}

/// Filters chosen on the reports screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilterCriteria {
    /// Case-insensitive substring of the business name; empty matches all
    #[serde(default)]
    pub business_name: String,
    /// Inclusive lower bound on a truck's creation instant
    #[serde(default)]
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on a truck's creation instant
    #[serde(default)]
    pub date_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub visibility: FieldVisibility,
}

impl ReportFilterCriteria {
    pub fn has_date_bounds(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// True when no name or date filter is set
    pub fn is_unfiltered(&self) -> bool {
        self.business_name.is_empty() && !self.has_date_bounds()
    }
}
