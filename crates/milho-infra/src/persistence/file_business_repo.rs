//! File-based implementation of BusinessRepository
//!
//! Reads a JSON snapshot of the `/api/v1/business/all` response: either
//! a bare array of businesses or an object with a `businesses` array.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use milho_domain::model::Business;
use milho_domain::repository::BusinessRepository;
use milho_types::{Error, RepositoryError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    List(Vec<Business>),
    Wrapped { businesses: Vec<Business> },
}

impl Snapshot {
    fn into_businesses(self) -> Vec<Business> {
        match self {
            Snapshot::List(businesses) => businesses,
            Snapshot::Wrapped { businesses } => businesses,
        }
    }
}

/// Business snapshot loaded from a JSON file
pub struct FileBusinessRepository {
    snapshot_path: PathBuf,
    businesses: Vec<Business>,
}

impl FileBusinessRepository {
    /// Load a repository from a snapshot file
    pub fn open(snapshot_path: PathBuf) -> Result<Self> {
        let businesses = load_snapshot(&snapshot_path)?;
        Ok(Self {
            snapshot_path,
            businesses,
        })
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Re-read the snapshot from disk
    pub fn reload(&mut self) -> Result<()> {
        self.businesses = load_snapshot(&self.snapshot_path)?;
        Ok(())
    }
}

impl BusinessRepository for FileBusinessRepository {
    fn find_all(&self) -> std::result::Result<Vec<Business>, Error> {
        Ok(self.businesses.clone())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Business>, Error> {
        Ok(self.businesses.iter().find(|b| b.id == id).cloned())
    }
}

fn load_snapshot(path: &Path) -> Result<Vec<Business>> {
    if !path.exists() {
        return Err(RepositoryError::NotFound(path.display().to_string()).into());
    }

    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(reader)
        .map_err(|e| RepositoryError::Malformed(format!("{}: {}", path.display(), e)))?;
    let businesses = snapshot.into_businesses();

    debug!(
        "Loaded {} businesses from {}",
        businesses.len(),
        path.display()
    );
    Ok(businesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"[
        {
            "id": "b-1",
            "name": "Fazenda Boa Vista",
            "cnpj": "11444777000161",
            "phone": "11987654321",
            "deliveryTrucks": [
                {"id": "t-1", "trackSign": "ABC1234", "truckName": "Ana", "weight": 1.5, "quantity": 25,
                 "createdAt": "2024-01-01T12:00:00Z", "updatedAt": "2024-01-01T12:00:00Z"}
            ],
            "createdAt": "2023-12-01T08:00:00Z",
            "updatedAt": "2023-12-01T08:00:00Z"
        },
        {"id": "b-2", "name": "Sítio Novo", "cnpj": "", "phone": null, "deliveryTrucks": []}
    ]"#;

    fn write_snapshot(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("businesses.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_open_and_find() {
        let dir = tempdir().unwrap();
        let repo = FileBusinessRepository::open(write_snapshot(dir.path(), SNAPSHOT)).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].delivery_trucks.len(), 1);

        let found = repo.find_by_id("b-2").unwrap().unwrap();
        assert_eq!(found.name, "Sítio Novo");
        assert!(found.cnpj.is_none());
        assert!(repo.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_wrapped_snapshot() {
        let dir = tempdir().unwrap();
        let content = format!(r#"{{"businesses": {}}}"#, SNAPSHOT);
        let repo = FileBusinessRepository::open(write_snapshot(dir.path(), &content)).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = FileBusinessRepository::open(dir.path().join("nope.json"));
        assert!(matches!(
            result,
            Err(Error::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let result = FileBusinessRepository::open(write_snapshot(dir.path(), "{\"oops\": 1}"));
        assert!(matches!(
            result,
            Err(Error::Repository(RepositoryError::Malformed(_)))
        ));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempdir().unwrap();
        let path = write_snapshot(dir.path(), SNAPSHOT);
        let mut repo = FileBusinessRepository::open(path.clone()).unwrap();
        std::fs::write(&path, "[]").unwrap();
        repo.reload().unwrap();
        assert!(repo.find_all().unwrap().is_empty());
        assert_eq!(repo.snapshot_path(), path.as_path());
    }
}
