use crate::core::models::DemoEntryDto;
use crate::core::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tauri::Manager;

pub const CATALOG_FILE_NAME: &str = "demos.json";

/// Resolves the catalog location once at startup. Development builds read
/// from the crate directory; packaged builds read from the bundled resources.
pub fn resolve_catalog_path(app: &tauri::App) -> PathBuf {
    if cfg!(debug_assertions) {
        return PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(CATALOG_FILE_NAME);
    }

    match app.path().resource_dir() {
        Ok(resource_dir) => resource_dir.join(CATALOG_FILE_NAME),
        Err(error) => {
            tracing::warn!(
                event = "catalog_resource_dir_unavailable",
                error = error.to_string()
            );
            PathBuf::from(CATALOG_FILE_NAME)
        }
    }
}

/// Loads the catalog in file order. Read and parse failures degrade to an
/// empty catalog at this boundary; callers cannot tell the two apart and the
/// detail is only visible in the logs.
pub fn load_demo_catalog(path: &Path) -> Vec<DemoEntryDto> {
    match read_catalog(path) {
        Ok(entries) => {
            tracing::info!(
                event = "catalog_loaded",
                path = %path.display(),
                entry_count = entries.len()
            );
            entries
        }
        Err(error) => {
            tracing::error!(
                event = "catalog_load_failed",
                path = %path.display(),
                error_code = error.code.as_str(),
                error_detail = error.detail.as_deref().unwrap_or_default()
            );
            Vec::new()
        }
    }
}

fn read_catalog(path: &Path) -> AppResult<Vec<DemoEntryDto>> {
    let data = fs::read_to_string(path).map_err(|error| {
        AppError::new("catalog_read_failed", "failed to read catalog file")
            .with_detail(error.to_string())
    })?;
    serde_json::from_str(&data).map_err(|error| {
        AppError::new("catalog_parse_failed", "failed to parse catalog file")
            .with_detail(error.to_string())
    })
}
