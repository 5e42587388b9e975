use demodeck_lib::app::launcher_service::{UrlOpener, launch_demo};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

fn unique_temp_dir() -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or_default();
    std::env::temp_dir().join(format!(
        "demodeck-launcher-test-{}-{}-{}",
        std::process::id(),
        millis,
        DIR_COUNTER.fetch_add(1, Ordering::Relaxed)
    ))
}

fn write_catalog(content: &str) -> (PathBuf, PathBuf) {
    let dir = unique_temp_dir();
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("demos.json");
    fs::write(&path, content).expect("failed to write catalog");
    (dir, path)
}

#[derive(Default)]
struct RecordingOpener {
    urls: RefCell<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open_url(&self, url: &str) -> Result<(), String> {
        self.urls.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct FailingOpener;

impl UrlOpener for FailingOpener {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Err("no default handler".to_string())
    }
}

#[test]
fn should_route_url_launch_through_opener_only() {
    // Shell metacharacters must reach the opener verbatim, never a shell.
    let (dir, path) = write_catalog(
        r#"[{"id": "a", "name": "Demo A", "launch_type": "url",
            "command": "https://example.com/?q=$(rm -rf /)&x=1;echo hi"}]"#,
    );
    let opener = RecordingOpener::default();

    let result = launch_demo(&path, &opener, "a");
    assert!(result.ok(), "unexpected failure: {}", result.message);
    assert_eq!(result.message, "Opened URL for a");
    assert_eq!(
        opener.urls.borrow().as_slice(),
        ["https://example.com/?q=$(rm -rf /)&x=1;echo hi"]
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn should_report_error_for_unknown_id() {
    let (dir, path) = write_catalog(
        r#"[{"id": "a", "name": "Demo A", "launch_type": "url", "command": "https://example.com"}]"#,
    );
    let opener = RecordingOpener::default();

    let result = launch_demo(&path, &opener, "missing");
    assert!(!result.ok());
    assert!(result.message.contains("not found"), "{}", result.message);
    assert!(opener.urls.borrow().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn should_report_error_when_command_missing() {
    let (dir, path) = write_catalog(r#"[{"id": "a", "name": "Demo A", "launch_type": "script"}]"#);

    let result = launch_demo(&path, &RecordingOpener::default(), "a");
    assert!(!result.ok());
    assert!(result.message.contains("command"), "{}", result.message);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn should_report_error_when_command_blank() {
    let (dir, path) = write_catalog(
        r#"[{"id": "a", "name": "Demo A", "launch_type": "script", "command": "   "}]"#,
    );

    let result = launch_demo(&path, &RecordingOpener::default(), "a");
    assert!(!result.ok());
    assert!(result.message.contains("command"), "{}", result.message);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn should_report_error_for_unknown_launch_type() {
    let (dir, path) = write_catalog(r#"[{"id": "b", "launch_type": "bogus", "command": "x"}]"#);

    let result = launch_demo(&path, &RecordingOpener::default(), "b");
    assert!(!result.ok());
    assert!(
        result.message.contains("Unknown launch type"),
        "{}",
        result.message
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn should_treat_missing_launch_type_as_unknown() {
    let (dir, path) = write_catalog(r#"[{"id": "b", "command": "x"}]"#);

    let result = launch_demo(&path, &RecordingOpener::default(), "b");
    assert!(!result.ok());
    assert!(
        result.message.contains("Unknown launch type"),
        "{}",
        result.message
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn should_surface_opener_failure_as_error_result() {
    let (dir, path) = write_catalog(
        r#"[{"id": "a", "name": "Demo A", "launch_type": "url", "command": "https://example.com"}]"#,
    );

    let result = launch_demo(&path, &FailingOpener, "a");
    assert!(!result.ok());
    assert!(
        result.message.contains("Failed to open URL"),
        "{}",
        result.message
    );

    let _ = fs::remove_dir_all(dir);
}

#[cfg(unix)]
#[test]
fn should_acknowledge_script_spawn_immediately() {
    let (dir, path) =
        write_catalog(r#"[{"id": "s", "name": "Script", "launch_type": "script", "command": "true"}]"#);
    let opener = RecordingOpener::default();

    let result = launch_demo(&path, &opener, "s");
    assert!(result.ok(), "unexpected failure: {}", result.message);
    assert!(result.message.contains("initiated"), "{}", result.message);
    assert!(opener.urls.borrow().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[cfg(unix)]
#[test]
fn should_report_success_even_when_command_fails_later() {
    // Fire-and-forget: the shell starts fine, the command inside it does not.
    let (dir, path) = write_catalog(
        r#"[{"id": "v", "name": "Video", "launch_type": "video",
            "command": "demodeck-no-such-binary-xyz"}]"#,
    );

    let result = launch_demo(&path, &RecordingOpener::default(), "v");
    assert!(result.ok(), "unexpected failure: {}", result.message);

    let _ = fs::remove_dir_all(dir);
}
