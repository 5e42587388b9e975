use super::{command_end_status, command_start, normalize_request_id};
use crate::app::launcher_service;
use crate::app::state::AppState;
use crate::core::models::LaunchResultDto;
use crate::infrastructure::opener::SystemUrlOpener;
use tauri::State;

#[tauri::command]
pub fn launch_demo(
    state: State<'_, AppState>,
    demo_id: String,
    request_id: Option<String>,
    window_label: Option<String>,
) -> LaunchResultDto {
    let request_id = normalize_request_id(request_id);
    let started_at = command_start("launch_demo", &request_id, window_label.as_deref());
    let result = launcher_service::launch_demo(&state.catalog_path, &SystemUrlOpener, &demo_id);
    command_end_status(
        "launch_demo",
        &request_id,
        started_at,
        result.ok(),
        &result.message,
    );
    result
}
