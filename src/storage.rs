use crate::errors::AppError;
use crate::models::Dataset;
use std::io::ErrorKind;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;

pub const DEFAULT_ACTIVITIES: [&str; 5] =
    ["Exercise", "Meditation", "Designing", "Coding", "Exploring"];

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HABIT_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Tracked activities, from `HABIT_ACTIVITIES` (comma-separated) when set.
pub fn resolve_activities() -> Vec<String> {
    if let Ok(raw) = env::var("HABIT_ACTIVITIES") {
        let names: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if !names.is_empty() {
            return names;
        }
    }

    DEFAULT_ACTIVITIES.iter().map(|name| name.to_string()).collect()
}

/// A missing file means a fresh start and yields a dataset seeded with the
/// configured activities. Anything unreadable or unparsable is an error:
/// reinitializing over a corrupt file would destroy the recorded history.
pub async fn load_data(path: &Path, activities: &[String]) -> Result<Dataset, std::io::Error> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Dataset::seeded(activities)),
        Err(err) => return Err(err),
    };

    serde_json::from_slice(&bytes).map_err(|err| {
        std::io::Error::new(
            ErrorKind::InvalidData,
            format!("malformed data file {}: {err}", path.display()),
        )
    })
}

/// Rewrites the full dataset through a sibling temp file and a rename, so
/// the data file always holds either the old or the new content. The temp
/// file is removed when either step fails.
pub async fn persist_data(path: &Path, data: &Dataset) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let tmp = path.with_extension("tmp");

    if let Err(err) = fs::write(&tmp, &payload).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(AppError::internal(err));
    }
    if let Err(err) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(AppError::internal(err));
    }

    Ok(())
}
