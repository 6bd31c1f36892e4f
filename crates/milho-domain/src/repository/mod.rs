//! Repository trait definitions for business records

use crate::model::Business;
use milho_types::Error;

/// Read access to businesses and their delivery trucks
pub trait BusinessRepository {
    /// Load every business with nested trucks
    fn find_all(&self) -> Result<Vec<Business>, Error>;

    /// Find a business by its identifier
    fn find_by_id(&self, id: &str) -> Result<Option<Business>, Error>;
}
