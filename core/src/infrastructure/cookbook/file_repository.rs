use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    cookbook::{ports::CookbookRepository, value_objects::SaveRecipeOutcome},
    recipe::entities::Recipe,
};

/// Cookbook persisted as a single JSON array on disk.
///
/// The whole array is read and rewritten on every mutation. A mutex
/// serializes the read-modify-write cycle within this process; writes land
/// in a sibling temp file that is renamed over the target.
///
/// Records are kept as raw JSON while rewriting, so an entry this build
/// cannot decode is still written back untouched. A file that cannot be
/// read, or is not a JSON array, lists as empty but is never overwritten.
#[derive(Debug, Clone)]
pub struct FileCookbookRepository {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileCookbookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<Value>, CoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read cookbook: {}", e);
                return Err(CoreError::StorageError(format!("Failed to read cookbook: {}", e)));
            }
        };

        serde_json::from_slice::<Vec<Value>>(&raw).map_err(|e| {
            tracing::warn!(path = %self.path.display(), "Cookbook file is not a JSON array: {}", e);
            CoreError::StorageError(format!("Cookbook file is unreadable: {}", e))
        })
    }

    fn decode(&self, records: Vec<Value>) -> Vec<Recipe> {
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Recipe>(record) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        index,
                        "Skipping unreadable cookbook entry: {}",
                        e
                    );
                    None
                }
            })
            .collect()
    }

    async fn write_records(&self, records: &[Value]) -> Result<(), CoreError> {
        let payload = serde_json::to_vec_pretty(records).map_err(|e| {
            tracing::error!("Failed to serialize cookbook: {}", e);
            CoreError::StorageError(format!("Failed to serialize cookbook: {}", e))
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!(
                    path = %parent.display(),
                    "Failed to create cookbook directory: {}",
                    e
                );
                CoreError::StorageError(format!("Failed to create cookbook directory: {}", e))
            })?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, payload).await.map_err(|e| {
            tracing::error!(path = %temp_path.display(), "Failed to write cookbook: {}", e);
            CoreError::StorageError(format!("Failed to write cookbook: {}", e))
        })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| {
                tracing::error!(path = %self.path.display(), "Failed to replace cookbook: {}", e);
                CoreError::StorageError(format!("Failed to replace cookbook: {}", e))
            })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "cookbook.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

impl CookbookRepository for FileCookbookRepository {
    async fn list(&self) -> Result<Vec<Recipe>, CoreError> {
        let _guard = self.lock.lock().await;
        match self.read_records().await {
            Ok(records) => Ok(self.decode(records)),
            Err(_) => Ok(Vec::new()),
        }
    }

    async fn add(&self, recipe: Recipe) -> Result<SaveRecipeOutcome, CoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;

        if records
            .iter()
            .any(|stored| record_id(stored) == Some(recipe.id.as_str()))
        {
            return Ok(SaveRecipeOutcome::AlreadyPresent);
        }

        let record = serde_json::to_value(&recipe).map_err(|e| {
            tracing::error!("Failed to serialize recipe {}: {}", recipe.id, e);
            CoreError::StorageError(format!("Failed to serialize recipe: {}", e))
        })?;
        records.push(record);
        self.write_records(&records).await?;
        Ok(SaveRecipeOutcome::Added)
    }

    async fn remove(&self, recipe_id: String) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        let before = records.len();
        records.retain(|record| record_id(record) != Some(recipe_id.as_str()));

        if records.len() == before {
            return Ok(());
        }
        self.write_records(&records).await
    }
}
