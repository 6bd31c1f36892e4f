//! Output formatting module

use milho_app::app::BusinessDetail;
use milho_domain::model::FieldIssue;
use milho_domain::service::identifier::{format_phone, format_plate, format_tax_id, IdentifierKind};
use milho_domain::service::{pt_br, DashboardView, ReportModel};
use milho_types::{OutputFormat, Result};
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_identifier(
    output_format: OutputFormat,
    kind: IdentifierKind,
    input: &str,
    result: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "kind": kind, "input": input, "result": result }));
    }
    println!("{}", result);
    Ok(())
}

pub fn output_validation(
    output_format: OutputFormat,
    kind: IdentifierKind,
    input: &str,
    valid: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "kind": kind,
            "input": input,
            "formatted": kind.format(input),
            "valid": valid,
        }));
    }
    println!(
        "{} {}: {}",
        kind.label(),
        kind.format(input),
        if valid { "válido" } else { "inválido" }
    );
    Ok(())
}

pub fn output_bags(output_format: OutputFormat, weight: f64, bag_kg: f64, bags: u64) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "weight": weight, "bagWeightKg": bag_kg, "bags": bags }));
    }
    println!(
        "{} T = {} sacas de {} kg",
        pt_br::format_decimal(weight),
        pt_br::format_integer(bags),
        bag_kg
    );
    Ok(())
}

pub fn output_dashboard(output_format: OutputFormat, view: &DashboardView) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(view);
    }

    println!("\nDashboard");
    println!("=========");
    if let Some(day) = view.day {
        println!("Dia:               {}", pt_br::format_date(day));
    }
    println!("Empresas:          {}", view.summary.business_count);
    println!("Caminhões:         {}", view.summary.truck_count);
    println!("Peso total (T):    {}", pt_br::format_decimal(view.summary.total_weight));
    println!("Total de Sacarias: {}", pt_br::format_integer(view.summary.total_bag_quantity));

    if view.rows.is_empty() {
        println!("\nNenhum dado encontrado.");
        return Ok(());
    }

    println!();
    println!("{:<18} {:>10} {:>14} {:>12}", "Empresa", "Caminhões", "Peso (T)", "Sacarias");
    println!("{}", "-".repeat(57));
    for row in &view.rows {
        println!(
            "{:<18} {:>10} {:>14} {:>12}",
            row.chart_label,
            row.truck_count,
            pt_br::format_decimal(row.total_weight),
            pt_br::format_integer(row.total_bag_quantity)
        );
    }
    Ok(())
}

pub fn output_business(output_format: OutputFormat, detail: &BusinessDetail) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "business": detail.business, "totals": detail.totals }));
    }

    let business = &detail.business;
    println!("\n{}", business.name);
    println!("{}", "=".repeat(business.name.chars().count()));
    if let Some(ref cnpj) = business.cnpj {
        println!("CNPJ:               {}", format_tax_id(cnpj));
    }
    if let Some(ref phone) = business.phone {
        println!("Telefone:           {}", format_phone(phone));
    }
    println!("Total de Caminhões: {}", detail.totals.truck_count);
    println!("Total de Sacarias:  {}", pt_br::format_integer(detail.totals.total_bag_quantity));

    if business.delivery_trucks.is_empty() {
        return Ok(());
    }

    println!();
    println!("{:<24} {:<10} {:>12} {:>10} {:<10}", "Motorista", "Placa", "Peso (T)", "Sacarias", "Data");
    println!("{}", "-".repeat(70));
    for truck in &business.delivery_trucks {
        println!(
            "{:<24} {:<10} {:>12} {:>10} {:<10}",
            truncate(&truck.truck_name, 24),
            format_plate(&truck.track_sign),
            pt_br::format_decimal(truck.weight),
            pt_br::format_integer(truck.quantity),
            truck
                .created_at
                .map(|ts| pt_br::format_local_day(&ts))
                .unwrap_or_else(|| "-".to_string())
        );
    }
    Ok(())
}

/// Summary printed after a report has been written
pub fn output_report(output_format: OutputFormat, model: &ReportModel, path: &std::path::Path) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "mode": model.mode,
            "path": path.display().to_string(),
            "summary": model.summary,
        }));
    }
    println!("{}", model.mode.title());
    println!(
        "Empresas: {}  Caminhões: {}  Sacarias: {}",
        model.summary.business_count,
        model.summary.truck_count,
        pt_br::format_integer(model.summary.total_bag_quantity)
    );
    println!("Exported to: {}", path.display());
    Ok(())
}

pub fn output_payload<T: Serialize>(output_format: OutputFormat, payload: &T, issues: &[FieldIssue]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "payload": payload, "issues": issues }));
    }
    println!("{}", serde_json::to_string_pretty(payload)?);
    if issues.is_empty() {
        println!("\nSem pendências.");
    } else {
        println!("\nPendências:");
        for issue in issues {
            println!("  - {}", issue);
        }
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        format!("{}...", s.chars().take(max_len.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Ana", 24), "Ana");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }
}
