use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog_path: PathBuf,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            started_at: Instant::now(),
        }
    }
}
