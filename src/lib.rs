pub mod app;
pub mod commands;
pub mod core;
pub mod infrastructure;

use app::catalog_service::resolve_catalog_path;
use app::state::AppState;
use infrastructure::logging::log_error_fallback;
use tauri::Manager;

pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let logging_guard = infrastructure::logging::init_logging(app)?;
            tracing::info!(
                event = "logging_initialized",
                level = logging_guard.level(),
                log_dir = %logging_guard.log_dir().display()
            );

            let catalog_path = resolve_catalog_path(app);
            tracing::info!(
                event = "catalog_path_resolved",
                path = %catalog_path.display(),
                packaged = !cfg!(debug_assertions)
            );

            app.manage(AppState::new(catalog_path));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::catalog::load_demos,
            commands::launcher::launch_demo,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|error| {
            log_error_fallback(&format!("failed to start application: {error}"));
            std::process::exit(1);
        });
}
