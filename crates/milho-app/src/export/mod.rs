//! Report exporters
//!
//! Each exporter renders a [`ReportModel`] and honors its visibility
//! flags. Identifiers are shown masked.

pub mod csv_export;
pub mod excel;
pub mod text;

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};
use milho_domain::model::{Business, DeliveryTruck, FieldVisibility, ReportMode};
use milho_domain::service::identifier::{format_phone, format_plate, format_tax_id};
use milho_domain::service::pt_br;
use milho_domain::service::ReportModel;
use milho_types::{ExportError, Result};

pub use csv_export::export_to_csv;
pub use excel::export_to_excel;
pub use text::generate_report_text;

pub const SYSTEM_NAME: &str = "Sistema de Gerenciamento de Milho";

/// File format chosen from the output path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Csv,
    Text,
}

impl ReportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" => Ok(ReportFormat::Xlsx),
            "csv" => Ok(ReportFormat::Csv),
            "txt" => Ok(ReportFormat::Text),
            other => Err(ExportError::UnsupportedFormat(other.to_string()).into()),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "txt",
        }
    }
}

/// `relatorio-<mode>-<yyyy-mm-dd>.<ext>`
pub fn default_file_name(mode: ReportMode, date: NaiveDate, format: ReportFormat) -> String {
    format!(
        "relatorio-{}-{}.{}",
        mode.as_str(),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Write `model` to `path` in the format implied by its extension
pub fn export_report(model: &ReportModel, path: &Path, generated_at: DateTime<Local>) -> Result<()> {
    match ReportFormat::from_path(path)? {
        ReportFormat::Xlsx => export_to_excel(model, path, generated_at),
        ReportFormat::Csv => export_to_csv(model, path),
        ReportFormat::Text => {
            std::fs::write(path, generate_report_text(model, generated_at))?;
            Ok(())
        }
    }
}

/// Truck table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruckColumn {
    Driver,
    Plate,
    Weight,
    Quantity,
}

impl TruckColumn {
    pub fn header(&self) -> &'static str {
        match self {
            TruckColumn::Driver => "Motorista",
            TruckColumn::Plate => "Placa",
            TruckColumn::Weight => "Peso (T)",
            TruckColumn::Quantity => "Sacarias",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, TruckColumn::Weight | TruckColumn::Quantity)
    }

    /// Display text for this column
    pub fn cell(&self, truck: &DeliveryTruck) -> String {
        match self {
            TruckColumn::Driver => truck.truck_name.clone(),
            TruckColumn::Plate => format_plate(&truck.track_sign),
            TruckColumn::Weight => pt_br::format_decimal(truck.weight),
            TruckColumn::Quantity => pt_br::format_integer(truck.quantity),
        }
    }
}

/// Visible truck columns
pub fn truck_columns(visibility: &FieldVisibility) -> Vec<TruckColumn> {
    let mut columns = Vec::with_capacity(4);
    if visibility.driver {
        columns.push(TruckColumn::Driver);
    }
    if visibility.plate {
        columns.push(TruckColumn::Plate);
    }
    if visibility.weight {
        columns.push(TruckColumn::Weight);
    }
    if visibility.quantity {
        columns.push(TruckColumn::Quantity);
    }
    columns
}

/// Masked tax id when visible and present
pub fn visible_tax_id(business: &Business, visibility: &FieldVisibility) -> Option<String> {
    business
        .cnpj
        .as_deref()
        .filter(|_| visibility.tax_id)
        .map(format_tax_id)
}

/// Masked phone when visible and present
pub fn visible_phone(business: &Business, visibility: &FieldVisibility) -> Option<String> {
    business
        .phone
        .as_deref()
        .filter(|_| visibility.phone)
        .map(format_phone)
}

/// Lines describing the filters applied to a filtered report
pub fn applied_filter_lines(model: &ReportModel) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(ref criteria) = model.criteria {
        if !criteria.business_name.is_empty() {
            lines.push(format!("Empresa: {}", criteria.business_name));
        }
        if let Some(from) = criteria.date_from {
            lines.push(format!("Data de: {}", pt_br::format_date(from.date_naive())));
        }
        if let Some(to) = criteria.date_to {
            lines.push(format!("Data até: {}", pt_br::format_date(to.date_naive())));
        }
    }
    lines
}
