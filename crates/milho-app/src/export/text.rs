//! Plain-text report, one page per business

use chrono::{DateTime, Local};
use milho_domain::service::{pt_br, ReportModel, ReportSection};

use super::{
    applied_filter_lines, truck_columns, visible_phone, visible_tax_id, TruckColumn, SYSTEM_NAME,
};

const RULE: &str = "==================================================";

/// Render the report as text pages separated by form feeds
pub fn generate_report_text(model: &ReportModel, generated_at: DateTime<Local>) -> String {
    let page_count = model.sections.len().max(1);
    let mut report = String::new();

    report.push_str(RULE);
    report.push('\n');
    report.push_str(&format!("  {}\n", model.mode.title()));
    report.push_str(&format!("  {}\n", SYSTEM_NAME));
    report.push_str(&format!(
        "  Gerado em: {}\n",
        pt_br::format_timestamp(&generated_at)
    ));
    report.push_str(RULE);
    report.push_str("\n\n");

    let filters = applied_filter_lines(model);
    if !filters.is_empty() {
        report.push_str("【Filtros Aplicados】\n");
        for line in &filters {
            report.push_str(&format!("  {}\n", line));
        }
        report.push('\n');
    }

    report.push_str("【Resumo】\n");
    report.push_str(&format!(
        "  Empresas:            {}\n",
        pt_br::format_integer(model.summary.business_count as u64)
    ));
    report.push_str(&format!(
        "  Caminhões:           {}\n",
        pt_br::format_integer(model.summary.truck_count as u64)
    ));
    report.push_str(&format!(
        "  Peso total (T):      {}\n",
        pt_br::format_decimal(model.summary.total_weight)
    ));
    report.push_str(&format!(
        "  Total de Sacarias:   {}\n\n",
        pt_br::format_integer(model.summary.total_bag_quantity)
    ));

    if model.is_empty() {
        report.push_str("  Nenhum dado encontrado.\n\n");
        push_footer(&mut report, 1, page_count);
        return report;
    }

    for (index, section) in model.sections.iter().enumerate() {
        if index > 0 {
            report.push('\u{c}');
            report.push('\n');
        }
        push_section(&mut report, section, model);
        push_footer(&mut report, index + 1, page_count);
    }

    report
}

fn push_section(report: &mut String, section: &ReportSection, model: &ReportModel) {
    let business = &section.business;
    report.push_str("【Detalhamento da Empresa】\n");
    report.push_str(&format!("  Empresa:             {}\n", business.name));
    if let Some(tax_id) = visible_tax_id(business, &model.visibility) {
        report.push_str(&format!("  CNPJ:                {}\n", tax_id));
    }
    if let Some(phone) = visible_phone(business, &model.visibility) {
        report.push_str(&format!("  Telefone:            {}\n", phone));
    }
    report.push_str(&format!(
        "  Total de Caminhões:  {}\n",
        pt_br::format_integer(section.totals.truck_count as u64)
    ));
    report.push_str(&format!(
        "  Total de Sacarias:   {}\n\n",
        pt_br::format_integer(section.totals.total_bag_quantity)
    ));

    let columns = truck_columns(&model.visibility);
    if columns.is_empty() || business.delivery_trucks.is_empty() {
        return;
    }

    let width = columns.iter().map(|c| column_width(*c) + 1).sum::<usize>();
    report.push_str(&"-".repeat(width));
    report.push('\n');
    let header: Vec<String> = columns
        .iter()
        .map(|c| pad(c.header(), *c))
        .collect();
    report.push_str(header.join(" ").trim_end());
    report.push('\n');
    report.push_str(&"-".repeat(width));
    report.push('\n');

    for truck in &business.delivery_trucks {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| pad(&truncate_str(&c.cell(truck), column_width(*c)), *c))
            .collect();
        report.push_str(cells.join(" ").trim_end());
        report.push('\n');
    }
    report.push('\n');
}

fn push_footer(report: &mut String, page: usize, page_count: usize) {
    report.push_str(RULE);
    report.push('\n');
    report.push_str(&format!("  Página {} de {}\n", page, page_count));
}

fn column_width(column: TruckColumn) -> usize {
    match column {
        TruckColumn::Driver => 24,
        TruckColumn::Plate => 10,
        TruckColumn::Weight => 12,
        TruckColumn::Quantity => 10,
    }
}

fn pad(text: &str, column: TruckColumn) -> String {
    let width = column_width(column);
    if column.is_numeric() {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milho_domain::model::{Business, DeliveryTruck, ReportField, ReportFilterCriteria, ReportMode};
    use milho_domain::service::project;

    fn businesses() -> Vec<Business> {
        let truck = DeliveryTruck {
            id: "t1".to_string(),
            track_sign: "abc1d23".to_string(),
            truck_name: "Motorista Com Um Nome Muito Comprido".to_string(),
            weight: 1234.5,
            quantity: 20575,
            created_at: None,
            updated_at: None,
        };
        vec![
            Business {
                id: "b1".to_string(),
                name: "Fazenda Boa Vista".to_string(),
                cnpj: Some("11444777000161".to_string()),
                phone: Some("1133334444".to_string()),
                delivery_trucks: vec![truck],
                created_at: None,
                updated_at: None,
            },
            Business {
                id: "b2".to_string(),
                name: "Sítio Novo".to_string(),
                cnpj: None,
                phone: None,
                delivery_trucks: vec![],
                created_at: None,
                updated_at: None,
            },
        ]
    }

    #[test]
    fn test_complete_report_text() {
        let model = project(&businesses(), &ReportFilterCriteria::default(), ReportMode::Complete);
        let text = generate_report_text(&model, Local::now());

        assert!(text.contains("Relatório de Dados Completos"));
        assert!(text.contains(SYSTEM_NAME));
        assert!(!text.contains("Filtros Aplicados"));
        assert!(text.contains("11.444.777/0001-61"));
        assert!(text.contains("(11) 3333-4444"));
        assert!(text.contains("ABC-1D23"));
        assert!(text.contains("1.234,50"));
        assert!(text.contains("20.575"));
        assert!(text.contains("Motorista Com Um Nome .."));
        assert!(text.contains("Página 1 de 2"));
        assert!(text.contains("Página 2 de 2"));
    }

    #[test]
    fn test_filtered_report_hides_fields() {
        let mut criteria = ReportFilterCriteria {
            business_name: "boa".to_string(),
            ..Default::default()
        };
        criteria.visibility.hide(ReportField::TaxId);
        criteria.visibility.hide(ReportField::Driver);
        let model = project(&businesses(), &criteria, ReportMode::Filtered);
        let text = generate_report_text(&model, Local::now());

        assert!(text.contains("Relatório de Dados Filtrados"));
        assert!(text.contains("Empresa: boa"));
        assert!(!text.contains("CNPJ"));
        assert!(!text.contains("Motorista"));
        assert!(!text.contains("Sítio Novo"));
        assert!(text.contains("Página 1 de 1"));
    }

    #[test]
    fn test_empty_report_has_single_page() {
        let criteria = ReportFilterCriteria {
            business_name: "inexistente".to_string(),
            ..Default::default()
        };
        let model = project(&businesses(), &criteria, ReportMode::Filtered);
        let text = generate_report_text(&model, Local::now());
        assert!(text.contains("Nenhum dado encontrado"));
        assert!(text.contains("Página 1 de 1"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("abc", 5), "abc");
        assert_eq!(truncate_str("abcdefgh", 5), "abc..");
    }
}
