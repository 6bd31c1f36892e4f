//! Command implementations

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::cli::{Cli, Commands, FieldArg, IdentifierArg};
use crate::output;
use milho_app::app::{self, ReportOptions};
use milho_app::config::Config;
use milho_app::repository::open_business_repo;
use milho_domain::model::{
    BusinessSubmission, DeliveryTruckSubmission, FieldVisibility, ReportFilterCriteria, ReportMode,
};
use milho_domain::service::identifier::IdentifierKind;
use milho_domain::service::weight_to_bag_count_with;
use milho_types::{ConfigError, Error, OutputFormat, Result};

fn service_err(e: app::ReportServiceError) -> Error {
    Error::ReportFailed(e.to_string())
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // `config` must work on a file that fails validation
    if let Commands::Config {
        show,
        set_data_file,
        set_output,
        set_bag_kg,
        set_report_dir,
        reset,
    } = cli.command
    {
        return cmd_config(
            show,
            set_data_file,
            set_output,
            set_bag_kg,
            set_report_dir,
            reset,
        );
    }

    // Load config
    let config = Config::load()?;

    // Override from CLI args
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!("Output format: {}", output_format);

    match cli.command {
        Commands::Format { kind, value } => {
            let kind = IdentifierKind::from(kind);
            output::output_identifier(output_format, kind, &value, &kind.format(&value))
        }

        Commands::Unformat { kind, value } => {
            let kind = IdentifierKind::from(kind);
            output::output_identifier(output_format, kind, &value, &kind.unformat(&value))
        }

        Commands::Validate { kind, value } => cmd_validate(output_format, kind, &value),

        Commands::Bags { weight, bag_kg } => {
            cmd_bags(output_format, weight, bag_kg.unwrap_or(config.bag_weight_kg))
        }

        Commands::Dashboard { data, day } => cmd_dashboard(&config, output_format, data, day),

        Commands::Business { id, data } => cmd_business(&config, output_format, data, &id),

        Commands::Report {
            data,
            filtered,
            name,
            from,
            to,
            hide,
            output,
        } => {
            let mode = if filtered {
                ReportMode::Filtered
            } else {
                ReportMode::Complete
            };
            let criteria = build_criteria(name, from, to, &hide);
            cmd_report(&config, output_format, data, mode, criteria, output)
        }

        Commands::PrepareBusiness { name, cnpj, phone } => {
            let payload = BusinessSubmission::from_form(&name, &cnpj, &phone);
            output::output_payload(output_format, &payload, &payload.issues())
        }

        Commands::PrepareTruck {
            business_id,
            plate,
            driver,
            weight,
        } => {
            let payload = DeliveryTruckSubmission::from_form(&business_id, &plate, &driver, weight);
            if output_format == OutputFormat::Table {
                println!("Sacarias (prévia): {}", payload.preview_bag_count());
            }
            output::output_payload(output_format, &payload, &payload.issues())
        }

        Commands::Config { .. } => unreachable!("handled before loading config"),
    }
}

fn cmd_validate(output_format: OutputFormat, kind: IdentifierArg, value: &str) -> Result<()> {
    let kind = IdentifierKind::from(kind);
    let valid = kind.is_valid(value);
    output::output_validation(output_format, kind, value, valid)?;
    if !valid {
        return Err(Error::InvalidArgument(format!(
            "{} inválido: {}",
            kind.label(),
            value
        )));
    }
    Ok(())
}

fn cmd_bags(output_format: OutputFormat, weight: f64, bag_kg: f64) -> Result<()> {
    if !(bag_kg.is_finite() && bag_kg > 0.0) {
        return Err(ConfigError::InvalidValue(format!("bag mass must be positive, got {}", bag_kg)).into());
    }
    let bags = weight_to_bag_count_with(weight, bag_kg);
    output::output_bags(output_format, weight, bag_kg, bags)
}

fn cmd_dashboard(
    config: &Config,
    output_format: OutputFormat,
    data: Option<PathBuf>,
    day: Option<NaiveDate>,
) -> Result<()> {
    let repo = open_business_repo(config, data)?;
    let view = app::build_dashboard(&repo, day).map_err(service_err)?;
    output::output_dashboard(output_format, &view)
}

fn cmd_business(
    config: &Config,
    output_format: OutputFormat,
    data: Option<PathBuf>,
    id: &str,
) -> Result<()> {
    let repo = open_business_repo(config, data)?;
    let detail = app::business_detail(&repo, id).map_err(service_err)?;
    output::output_business(output_format, &detail)
}

fn build_criteria(
    name: Option<String>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    hide: &[FieldArg],
) -> ReportFilterCriteria {
    let mut visibility = FieldVisibility::all();
    for field in hide {
        visibility.hide((*field).into());
    }
    ReportFilterCriteria {
        business_name: name.unwrap_or_default(),
        date_from: from,
        date_to: to,
        visibility,
    }
}

fn cmd_report(
    config: &Config,
    output_format: OutputFormat,
    data: Option<PathBuf>,
    mode: ReportMode,
    criteria: ReportFilterCriteria,
    output: Option<PathBuf>,
) -> Result<()> {
    if mode == ReportMode::Complete && !criteria.is_unfiltered() {
        eprintln!("Note: filters are ignored without --filtered");
    }

    let repo = open_business_repo(config, data)?;
    let mut options = ReportOptions::new(mode).with_criteria(criteria);
    if let Some(path) = output {
        options = options.with_output(path);
    }

    let report_dir = config.report_dir()?;
    let exported = app::export(&repo, &options, &report_dir).map_err(service_err)?;
    output::output_report(output_format, &exported.model, &exported.path)
}

fn cmd_config(
    show: bool,
    set_data_file: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_bag_kg: Option<f64>,
    set_report_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load_unchecked()?;
    let mut modified = false;

    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(bag_kg) = set_bag_kg {
        config.bag_weight_kg = bag_kg;
        modified = true;
    }

    if let Some(dir) = set_report_dir {
        config.report_dir = Some(dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
