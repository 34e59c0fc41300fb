use crate::models::Dataset;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub activities: Arc<Vec<String>>,
    pub data: Arc<Mutex<Dataset>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, activities: Vec<String>, data: Dataset) -> Self {
        Self {
            data_path,
            activities: Arc::new(activities),
            data: Arc::new(Mutex::new(data)),
        }
    }
}
