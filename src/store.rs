use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::models::{PatientRecord, SortField, SortOrder};

/// Patient records keyed by identifier, in backing-file order
///
/// A duplicate id in the file replaces the earlier record, like a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientCollection {
    entries: IndexMap<String, PatientRecord>,
}

impl PatientCollection {
    /// Parse the backing file format: a JSON object of id -> attribute object
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("Patients file is not a JSON object of patient records")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PatientRecord> {
        self.entries.get(id)
    }

    /// Records ordered by `field`, leaving the collection untouched
    ///
    /// The sort is stable in both directions: records with numerically equal
    /// keys (including `-0.0` against a missing field) keep their file order.
    pub fn sorted_by(&self, field: SortField, order: SortOrder) -> Vec<PatientRecord> {
        let mut records: Vec<&PatientRecord> = self.entries.values().collect();

        records.sort_by(|a, b| {
            let (a, b) = (a.sort_key(field), b.sort_key(field));
            // Keys come from JSON numbers, never NaN
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        records.into_iter().cloned().collect()
    }
}

/// Handle on the flat JSON file backing the service
///
/// Nothing is cached: every call opens and parses the file again, so edits
/// to the file are visible on the next request.
#[derive(Clone, Debug)]
pub struct PatientStore {
    path: Arc<PathBuf>,
}

impl PatientStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        tracing::info!("Serving patients from: {}", config.patients_file.display());
        Self::new(config.patients_file.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole backing file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON object
    /// whose values are patient records
    pub async fn load(&self) -> Result<PatientCollection> {
        let bytes = tokio::fs::read(self.path.as_path())
            .await
            .with_context(|| format!("Failed to read patients file {}", self.path.display()))?;

        let collection = PatientCollection::from_slice(&bytes)?;
        tracing::debug!("Loaded {} patients from {}", collection.len(), self.path.display());
        Ok(collection)
    }

    pub async fn list_all(&self) -> Result<PatientCollection> {
        self.load().await
    }

    /// Look up a single record
    ///
    /// # Returns
    /// * `Ok(Some(record))` - Patient found
    /// * `Ok(None)` - No patient with this id
    /// * `Err(_)` - Backing file could not be loaded
    pub async fn read(&self, id: &str) -> Result<Option<PatientRecord>> {
        let collection = self.load().await?;
        Ok(collection.get(id).cloned())
    }

    pub async fn sort_by(&self, field: SortField, order: SortOrder) -> Result<Vec<PatientRecord>> {
        let collection = self.load().await?;
        Ok(collection.sorted_by(field, order))
    }

    /// Verify the backing file is readable and well formed
    pub async fn health_check(&self) -> Result<()> {
        self.load().await.map(|_| ())
    }
}
