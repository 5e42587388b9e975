use super::{command_end_ok, command_start, normalize_request_id};
use crate::app::catalog_service::load_demo_catalog;
use crate::app::state::AppState;
use crate::core::models::DemoEntryDto;
use tauri::State;

/// Boundary contract: always a plain list. An unreadable catalog comes back
/// as an empty list, indistinguishable from a genuinely empty one.
#[tauri::command]
pub fn load_demos(
    state: State<'_, AppState>,
    request_id: Option<String>,
    window_label: Option<String>,
) -> Vec<DemoEntryDto> {
    let request_id = normalize_request_id(request_id);
    let started_at = command_start("load_demos", &request_id, window_label.as_deref());
    let demos = load_demo_catalog(&state.catalog_path);
    command_end_ok("load_demos", &request_id, started_at);
    demos
}
