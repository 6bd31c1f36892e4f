//! CSV export: one row per delivery truck

use std::path::Path;

use milho_domain::service::{pt_br, ReportModel};
use milho_types::{Error, ExportError, Result};

use super::{truck_columns, visible_phone, visible_tax_id};

fn csv_err(e: csv::Error) -> Error {
    ExportError::Csv(e.to_string()).into()
}

/// Export a report model to a CSV file.
///
/// Businesses without trucks still get one row with empty truck cells.
pub fn export_to_csv(model: &ReportModel, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path).map_err(csv_err)?;

    let columns = truck_columns(&model.visibility);
    let mut header = vec!["Empresa"];
    if model.visibility.tax_id {
        header.push("CNPJ");
    }
    if model.visibility.phone {
        header.push("Telefone");
    }
    header.extend(columns.iter().map(|c| c.header()));
    header.push("Data");
    writer.write_record(&header).map_err(csv_err)?;

    for business in model.businesses() {
        let mut prefix = vec![business.name.clone()];
        if model.visibility.tax_id {
            prefix.push(visible_tax_id(business, &model.visibility).unwrap_or_default());
        }
        if model.visibility.phone {
            prefix.push(visible_phone(business, &model.visibility).unwrap_or_default());
        }

        if business.delivery_trucks.is_empty() {
            let mut record = prefix.clone();
            record.extend(std::iter::repeat(String::new()).take(columns.len() + 1));
            writer.write_record(&record).map_err(csv_err)?;
            continue;
        }

        for truck in &business.delivery_trucks {
            let mut record = prefix.clone();
            record.extend(columns.iter().map(|c| c.cell(truck)));
            record.push(
                truck
                    .created_at
                    .map(|ts| pt_br::format_local_day(&ts))
                    .unwrap_or_default(),
            );
            writer.write_record(&record).map_err(csv_err)?;
        }
    }

    writer.flush()?;
    Ok(())
}
