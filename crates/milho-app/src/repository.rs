//! Repository adapters for persistence layer

use std::path::PathBuf;

use milho_infra::persistence::FileBusinessRepository;
use milho_types::{ConfigError, Result};

use crate::config::Config;

/// Open the business snapshot, preferring an explicit path over config
pub fn open_business_repo(
    config: &Config,
    data_file: Option<PathBuf>,
) -> Result<FileBusinessRepository> {
    let path = data_file
        .or_else(|| config.data_file.clone())
        .ok_or_else(|| {
            ConfigError::InvalidValue(
                "no data file given; pass --data or run: milho config --set-data-file <path>"
                    .to_string(),
            )
        })?;
    open_business_repo_at(path)
}

/// Open a business snapshot at a specific path
pub fn open_business_repo_at(path: PathBuf) -> Result<FileBusinessRepository> {
    FileBusinessRepository::open(path)
}
