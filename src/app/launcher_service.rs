use crate::app::catalog_service::load_demo_catalog;
use crate::core::models::{DemoEntryDto, LaunchResultDto, LaunchType};
use std::path::Path;
use std::process::{Command, Stdio};

/// Seam for the platform URL handler, so the dispatch rules stay testable
/// without opening a browser.
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> Result<(), String>;
}

/// Launches the demo with the given id. The catalog is reloaded wholesale on
/// every request; nothing is cached between calls. Every failure comes back
/// as a normal error result, never as a panic or propagated error.
pub fn launch_demo(catalog_path: &Path, opener: &dyn UrlOpener, demo_id: &str) -> LaunchResultDto {
    let demos = load_demo_catalog(catalog_path);
    let Some(demo) = demos.iter().find(|demo| demo.id == demo_id) else {
        tracing::warn!(event = "launch_demo_not_found", demo_id = demo_id);
        return LaunchResultDto::error("Demo ID not found");
    };

    let name = demo.display_name();
    let Some(command) = non_empty_command(demo) else {
        tracing::warn!(event = "launch_no_command", demo_id = demo_id, name = name);
        return LaunchResultDto::error("No command specified for this demo");
    };

    let raw_type = demo.launch_type.as_deref().unwrap_or("unknown");
    let Some(launch_type) = LaunchType::parse(raw_type) else {
        tracing::warn!(
            event = "launch_unknown_type",
            demo_id = demo_id,
            name = name,
            launch_type = raw_type
        );
        return LaunchResultDto::error(format!("Unknown launch type: {raw_type}"));
    };

    tracing::info!(
        event = "launch_dispatch",
        demo_id = demo_id,
        name = name,
        launch_type = raw_type
    );

    match launch_type {
        // URLs go to the default handler, never through a shell; the command
        // string is passed verbatim whatever it contains.
        LaunchType::Url => match opener.open_url(command) {
            Ok(()) => LaunchResultDto::success(format!("Opened URL for {demo_id}")),
            Err(error) => {
                tracing::error!(
                    event = "launch_open_url_failed",
                    demo_id = demo_id,
                    name = name,
                    error = error
                );
                LaunchResultDto::error(format!("Failed to open URL: {error}"))
            }
        },
        LaunchType::Script | LaunchType::Video | LaunchType::Container => {
            spawn_detached(demo_id, name, command)
        }
    }
}

fn non_empty_command(demo: &DemoEntryDto) -> Option<&str> {
    demo.command
        .as_deref()
        .map(str::trim)
        .filter(|command| !command.is_empty())
}

/// Fire-and-forget spawn through the platform shell. Success means the
/// process was started; its eventual exit is observed only by the reaper
/// thread below and never reaches the caller.
fn spawn_detached(demo_id: &str, name: &str, command: &str) -> LaunchResultDto {
    let mut shell = shell_command(command);
    shell
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match shell.spawn() {
        Ok(child) => {
            tracing::info!(
                event = "launch_spawned",
                demo_id = demo_id,
                name = name,
                pid = child.id()
            );
            reap_in_background(demo_id.to_string(), child);
            LaunchResultDto::success(format!("Launch command initiated for {demo_id}"))
        }
        Err(error) => {
            tracing::error!(
                event = "launch_spawn_failed",
                demo_id = demo_id,
                name = name,
                error = error.to_string()
            );
            LaunchResultDto::error(format!("Failed to launch demo: {error}"))
        }
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut shell = Command::new("cmd");
        shell.arg("/C").arg(command);
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.arg("-c").arg(command);
        shell
    }
}

/// Waits on the child off the request path, purely to reap it and log the
/// exit status. Failures observed here are log-only; the launch response has
/// already been sent.
fn reap_in_background(demo_id: String, mut child: std::process::Child) {
    std::thread::spawn(move || match child.wait() {
        Ok(status) => {
            tracing::info!(
                event = "launch_child_exited",
                demo_id = demo_id.as_str(),
                exit_code = status.code().unwrap_or(-1)
            );
        }
        Err(error) => {
            tracing::warn!(
                event = "launch_child_wait_failed",
                demo_id = demo_id.as_str(),
                error = error.to_string()
            );
        }
    });
}
