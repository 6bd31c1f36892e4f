//! Excel export functionality
//!
//! One summary sheet, then one sheet per business.

use chrono::{DateTime, Local};
use milho_domain::service::{pt_br, ReportModel, ReportSection};
use milho_domain::model::FieldVisibility;
use milho_types::{Error, ExportError, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use super::{applied_filter_lines, truck_columns, visible_phone, visible_tax_id, TruckColumn, SYSTEM_NAME};

/// Excel sheet names are limited to 31 characters
const SHEET_NAME_MAX: usize = 31;

fn excel_err(e: XlsxError) -> Error {
    ExportError::Excel(e.to_string()).into()
}

/// Export a report model to an Excel file
pub fn export_to_excel(model: &ReportModel, output_path: &Path, generated_at: DateTime<Local>) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, model, generated_at)?;

    // One sheet per business
    for (index, section) in model.sections.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(sheet_name(index, &section.business.name))
            .map_err(excel_err)?;
        write_business_sheet(sheet, section, &model.visibility)?;
    }

    // Save workbook
    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, model: &ReportModel, generated_at: DateTime<Local>) -> Result<()> {
    sheet.set_name("Resumo").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let weight_format = Format::new().set_num_format("#,##0.00");

    sheet
        .write_string_with_format(0, 0, model.mode.title(), &header_format)
        .map_err(excel_err)?;
    sheet.write_string(1, 0, SYSTEM_NAME).map_err(excel_err)?;
    sheet
        .write_string(2, 0, format!("Gerado em: {}", pt_br::format_timestamp(&generated_at)))
        .map_err(excel_err)?;

    let mut row = 4;
    let filters = applied_filter_lines(model);
    if !filters.is_empty() {
        sheet
            .write_string_with_format(row, 0, "Filtros Aplicados", &header_format)
            .map_err(excel_err)?;
        row += 1;
        for line in &filters {
            sheet.write_string(row, 0, line).map_err(excel_err)?;
            row += 1;
        }
        row += 1;
    }

    sheet
        .write_string_with_format(row, 0, "Resumo", &header_format)
        .map_err(excel_err)?;
    row += 1;

    let summary = &model.summary;
    sheet.write_string(row, 0, "Empresas:").map_err(excel_err)?;
    sheet
        .write_number(row, 1, summary.business_count as f64)
        .map_err(excel_err)?;
    row += 1;

    sheet.write_string(row, 0, "Caminhões:").map_err(excel_err)?;
    sheet
        .write_number(row, 1, summary.truck_count as f64)
        .map_err(excel_err)?;
    row += 1;

    sheet.write_string(row, 0, "Peso total (T):").map_err(excel_err)?;
    sheet
        .write_number_with_format(row, 1, summary.total_weight, &weight_format)
        .map_err(excel_err)?;
    row += 1;

    sheet.write_string(row, 0, "Total de Sacarias:").map_err(excel_err)?;
    sheet
        .write_number(row, 1, summary.total_bag_quantity as f64)
        .map_err(excel_err)?;

    sheet.set_column_width(0, 40).map_err(excel_err)?;
    sheet.set_column_width(1, 16).map_err(excel_err)?;

    Ok(())
}

fn write_business_sheet(sheet: &mut Worksheet, section: &ReportSection, visibility: &FieldVisibility) -> Result<()> {
    let header_format = Format::new().set_bold();
    let weight_format = Format::new().set_num_format("#,##0.00");
    let business = &section.business;

    sheet
        .write_string_with_format(0, 0, &business.name, &header_format)
        .map_err(excel_err)?;

    let mut row = 1;
    if let Some(tax_id) = visible_tax_id(business, visibility) {
        sheet.write_string(row, 0, "CNPJ:").map_err(excel_err)?;
        sheet.write_string(row, 1, &tax_id).map_err(excel_err)?;
        row += 1;
    }
    if let Some(phone) = visible_phone(business, visibility) {
        sheet.write_string(row, 0, "Telefone:").map_err(excel_err)?;
        sheet.write_string(row, 1, &phone).map_err(excel_err)?;
        row += 1;
    }

    sheet.write_string(row, 0, "Total de Caminhões:").map_err(excel_err)?;
    sheet
        .write_number(row, 1, section.totals.truck_count as f64)
        .map_err(excel_err)?;
    row += 1;

    sheet.write_string(row, 0, "Total de Sacarias:").map_err(excel_err)?;
    sheet
        .write_number(row, 1, section.totals.total_bag_quantity as f64)
        .map_err(excel_err)?;
    row += 2;

    let columns = truck_columns(visibility);
    if business.delivery_trucks.is_empty() || columns.is_empty() {
        return Ok(());
    }

    for (col, column) in columns.iter().enumerate() {
        sheet
            .write_string_with_format(row, col as u16, column.header(), &header_format)
            .map_err(excel_err)?;
    }

    for truck in &business.delivery_trucks {
        row += 1;
        for (col, column) in columns.iter().enumerate() {
            let col = col as u16;
            match column {
                TruckColumn::Weight => {
                    sheet
                        .write_number_with_format(row, col, truck.weight, &weight_format)
                        .map_err(excel_err)?;
                }
                TruckColumn::Quantity => {
                    sheet
                        .write_number(row, col, truck.quantity as f64)
                        .map_err(excel_err)?;
                }
                TruckColumn::Driver | TruckColumn::Plate => {
                    sheet
                        .write_string(row, col, column.cell(truck))
                        .map_err(excel_err)?;
                }
            }
        }
    }

    // Auto-fit columns (approximate)
    sheet.set_column_width(0, 28).map_err(excel_err)?;
    for col in 1..columns.len() as u16 {
        sheet.set_column_width(col, 16).map_err(excel_err)?;
    }

    Ok(())
}

/// Unique, Excel-safe sheet name for the business at `index`
fn sheet_name(index: usize, business_name: &str) -> String {
    let cleaned: String = business_name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
            _ => c,
        })
        .collect();
    let name = format!("{:02} {}", index + 1, cleaned.trim());
    // Excel rejects names ending with an apostrophe
    name.chars()
        .take(SHEET_NAME_MAX)
        .collect::<String>()
        .trim_end_matches(|c: char| c == '\'' || c.is_whitespace())
        .to_string()
}
