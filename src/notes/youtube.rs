//! YouTube search links for a chapter.

use crate::error::{PlannerError, Result};
use std::process::Command;
use tracing::debug;
use url::Url;

const SEARCH_URL: &str = "https://www.youtube.com/results";

/// Build a YouTube search URL for "{prefix} {subject} Chapter {chapter}".
pub fn youtube_search_url(prefix: &str, subject: &str, chapter: &str) -> Result<String> {
    let query = format!("{} {} Chapter {}", prefix, subject, chapter);
    let query = query.trim();

    let url = Url::parse_with_params(SEARCH_URL, &[("search_query", query)])
        .map_err(|e| PlannerError::InvalidInput(format!("Bad search URL: {}", e)))?;
    Ok(url.into())
}

/// Open a URL with the platform's default browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    debug!("Opening {} with {:?}", url, command.get_program());

    match command.status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(PlannerError::Browser(format!(
            "{:?} exited with {}",
            command.get_program(),
            status
        ))),
        Err(e) => Err(PlannerError::Browser(format!(
            "{:?}: {}",
            command.get_program(),
            e
        ))),
    }
}
