//! CLI definition using clap

use chrono::{DateTime, NaiveDate, Utc};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use milho_domain::model::timestamp::parse_timestamp;
use milho_domain::model::ReportField;
use milho_domain::service::identifier::IdentifierKind;
use milho_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "milho")]
#[command(author = "front-milho")]
#[command(version)]
#[command(about = "Corn delivery records: identifier masks, bag counts, dashboards and reports")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Identifier family on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdentifierArg {
    Cnpj,
    Phone,
    Plate,
}

impl From<IdentifierArg> for IdentifierKind {
    fn from(arg: IdentifierArg) -> Self {
        match arg {
            IdentifierArg::Cnpj => IdentifierKind::TaxId,
            IdentifierArg::Phone => IdentifierKind::Phone,
            IdentifierArg::Plate => IdentifierKind::Plate,
        }
    }
}

/// Report field that can be hidden in a filtered report
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Cnpj,
    Phone,
    Plate,
    Driver,
    Weight,
    Quantity,
}

impl From<FieldArg> for ReportField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Cnpj => ReportField::TaxId,
            FieldArg::Phone => ReportField::Phone,
            FieldArg::Plate => ReportField::Plate,
            FieldArg::Driver => ReportField::Driver,
            FieldArg::Weight => ReportField::Weight,
            FieldArg::Quantity => ReportField::Quantity,
        }
    }
}

fn parse_bound(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| format!("invalid date: {} (expected YYYY-MM-DD)", raw))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the display mask to an identifier
    Format {
        kind: IdentifierArg,
        value: String,
    },

    /// Strip an identifier down to the characters sent to the API
    Unformat {
        kind: IdentifierArg,
        value: String,
    },

    /// Check whether an identifier has a valid shape
    Validate {
        kind: IdentifierArg,
        value: String,
    },

    /// Convert a weight in tons to a bag count
    Bags {
        /// Weight in metric tons
        weight: f64,

        /// Bag mass in kg. Uses config value if not specified.
        #[arg(long)]
        bag_kg: Option<f64>,
    },

    /// Per-business totals, optionally for a single day
    Dashboard {
        /// Business snapshot (JSON). Uses config value if not specified.
        #[arg(long, short = 'd')]
        data: Option<PathBuf>,

        /// Only trucks created on this local day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<NaiveDate>,
    },

    /// Show one business with its trucks and totals
    Business {
        /// Business identifier
        id: String,

        /// Business snapshot (JSON). Uses config value if not specified.
        #[arg(long, short = 'd')]
        data: Option<PathBuf>,
    },

    /// Build a report and write it to a file
    Report {
        /// Business snapshot (JSON). Uses config value if not specified.
        #[arg(long, short = 'd')]
        data: Option<PathBuf>,

        /// Apply filters and visibility flags (otherwise a complete report)
        #[arg(long)]
        filtered: bool,

        /// Business name substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Earliest truck creation date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_bound)]
        from: Option<DateTime<Utc>>,

        /// Latest truck creation date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_bound)]
        to: Option<DateTime<Utc>>,

        /// Fields to leave out of a filtered report
        #[arg(long, value_delimiter = ',')]
        hide: Vec<FieldArg>,

        /// Output file (.xlsx, .csv or .txt). Defaults to the report directory.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Build a business create/update payload from form values
    PrepareBusiness {
        #[arg(long)]
        name: String,

        /// CNPJ, masked or not
        #[arg(long, default_value = "")]
        cnpj: String,

        /// Phone, masked or not
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Build a delivery truck create/update payload from form values
    PrepareTruck {
        #[arg(long)]
        business_id: String,

        /// Plate, masked or not
        #[arg(long)]
        plate: String,

        /// Driver name
        #[arg(long)]
        driver: String,

        /// Weight in metric tons
        #[arg(long)]
        weight: f64,
    },

    /// Configure settings
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default business snapshot
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set bag mass in kg
        #[arg(long)]
        set_bag_kg: Option<f64>,

        /// Set directory for exported reports
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
