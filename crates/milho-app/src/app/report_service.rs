//! Report Service - use cases behind the dashboard and reports screens
//!
//! The workflow for a report:
//! 1. Load businesses from the repository
//! 2. Project them for the chosen mode and filters
//! 3. Optionally render the projection to a file

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info};

use milho_domain::model::{Business, ReportFilterCriteria, ReportMode};
use milho_domain::repository::BusinessRepository;
use milho_domain::service::{business_totals, dashboard, project, BusinessTotals, DashboardView, ReportModel};
use milho_types::{Error, RepositoryError};

use crate::export::{default_file_name, export_report, ReportFormat};

/// Errors specific to the report service
#[derive(Debug, Error)]
pub enum ReportServiceError {
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Business not found: {0}")]
    BusinessNotFound(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<Error> for ReportServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Repository(RepositoryError::NotFound(msg)) => {
                ReportServiceError::DataUnavailable(format!("snapshot not found: {}", msg))
            }
            Error::Repository(e) => ReportServiceError::DataUnavailable(e.to_string()),
            Error::Export(e) => ReportServiceError::ExportFailed(e.to_string()),
            Error::Config(e) => ReportServiceError::ConfigError(e.to_string()),
            _ => ReportServiceError::ExportFailed(err.to_string()),
        }
    }
}

type ServiceResult<T> = std::result::Result<T, ReportServiceError>;

/// Options for a report request
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub mode: ReportMode,
    pub criteria: ReportFilterCriteria,
    /// Output file; defaults to `relatorio-<mode>-<date>.xlsx` in `report_dir`
    pub output: Option<PathBuf>,
}

impl ReportOptions {
    pub fn new(mode: ReportMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_criteria(mut self, criteria: ReportFilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }
}

/// A single business with its totals
#[derive(Debug, Clone)]
pub struct BusinessDetail {
    pub business: Business,
    pub totals: BusinessTotals,
}

/// Build the report model from everything the repository holds
pub fn build_report(
    repo: &impl BusinessRepository,
    criteria: &ReportFilterCriteria,
    mode: ReportMode,
) -> ServiceResult<ReportModel> {
    let businesses = repo.find_all()?;
    debug!("Projecting {} businesses for {} report", businesses.len(), mode);

    let model = project(&businesses, criteria, mode);
    info!(
        "Report ({}) covers {} businesses, {} trucks",
        mode, model.summary.business_count, model.summary.truck_count
    );
    Ok(model)
}

/// A report that has been written to disk
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub path: PathBuf,
    pub model: ReportModel,
}

/// Build and write a report
pub fn export(
    repo: &impl BusinessRepository,
    options: &ReportOptions,
    report_dir: &Path,
) -> ServiceResult<ExportedReport> {
    let model = build_report(repo, &options.criteria, options.mode)?;
    let now = Local::now();

    let path = match options.output {
        Some(ref path) => path.clone(),
        None => report_dir.join(default_file_name(
            options.mode,
            now.date_naive(),
            ReportFormat::Xlsx,
        )),
    };

    // Reject unsupported extensions before touching the filesystem
    ReportFormat::from_path(&path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ReportServiceError::ExportFailed(e.to_string()))?;
    }

    export_report(&model, &path, now)?;
    info!("Report written to {}", path.display());
    Ok(ExportedReport { path, model })
}

/// Dashboard over all businesses, optionally restricted to one local day
pub fn build_dashboard(
    repo: &impl BusinessRepository,
    day: Option<NaiveDate>,
) -> ServiceResult<DashboardView> {
    let businesses = repo.find_all()?;
    let view = dashboard(&businesses, day);
    debug!(
        "Dashboard: {} rows, {} trucks",
        view.rows.len(),
        view.summary.truck_count
    );
    Ok(view)
}

/// One business with its totals
pub fn business_detail(repo: &impl BusinessRepository, id: &str) -> ServiceResult<BusinessDetail> {
    let business = repo
        .find_by_id(id)?
        .ok_or_else(|| ReportServiceError::BusinessNotFound(id.to_string()))?;
    Ok(BusinessDetail {
        totals: business_totals(&business),
        business,
    })
}
