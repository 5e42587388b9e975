use crate::app::launcher_service::UrlOpener;

/// Routes URLs to the platform default handler via the opener plugin. This
/// path never touches a shell.
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open_url(&self, url: &str) -> Result<(), String> {
        tauri_plugin_opener::open_url(url, None::<&str>).map_err(|error| error.to_string())
    }
}
