pub mod catalog;
pub mod launcher;

use std::time::Instant;

pub(crate) fn normalize_request_id(request_id: Option<String>) -> String {
    request_id
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

pub(crate) fn command_start(
    command: &str,
    request_id: &str,
    window_label: Option<&str>,
) -> Instant {
    tracing::info!(
        event = "command_start",
        command = command,
        request_id = request_id,
        window_label = window_label.unwrap_or("unknown")
    );
    Instant::now()
}

pub(crate) fn command_end_ok(command: &str, request_id: &str, started_at: Instant) {
    tracing::info!(
        event = "command_end",
        command = command,
        request_id = request_id,
        ok = true,
        duration_ms = started_at.elapsed().as_millis() as u64
    );
}

pub(crate) fn command_end_status(
    command: &str,
    request_id: &str,
    started_at: Instant,
    ok: bool,
    message: &str,
) {
    if ok {
        command_end_ok(command, request_id, started_at);
        return;
    }

    tracing::error!(
        event = "command_end",
        command = command,
        request_id = request_id,
        ok = false,
        duration_ms = started_at.elapsed().as_millis() as u64,
        error_message = message
    );
}
