//! Saves raw storefront pages for use as parser fixtures.

use std::path::{Path, PathBuf};
use std::time::Duration;

use steamtop_core::AppId;
use steamtop_fetch::{FetchSettings, HttpClient};
use tracing::{info, instrument};

use super::error::DumpError;

/// User agent sent by the dumper.
pub const DUMP_USER_AGENT: &str = "DumpSteamHTML v1.0";

/// Per-request deadline for dumps, in seconds.
pub const DUMP_TIMEOUT_SECS: u64 = 10;

/// Default output directory.
pub const DEFAULT_DUMP_DIR: &str = "tests/html";

/// Downloads storefront pages and writes them as `<dir>/<app_id>.html`.
#[derive(Debug, Clone)]
pub struct PageDumper {
    http: HttpClient,
    settings: FetchSettings,
}

impl PageDumper {
    /// Creates a dumper for the store and language in `settings`.
    ///
    /// The dumper uses its own client with [`DUMP_USER_AGENT`] and a
    /// [`DUMP_TIMEOUT_SECS`] deadline; the age-gate cookies are kept.
    pub fn new(settings: FetchSettings) -> Result<Self, DumpError> {
        let http = HttpClient::builder()
            .user_agent(DUMP_USER_AGENT)
            .timeout(Duration::from_secs(DUMP_TIMEOUT_SECS))
            .age_gate(Some(settings.age_gate))
            .build()?;
        Ok(Self { http, settings })
    }

    /// Downloads the page bytes for one app.
    pub async fn fetch(&self, app_id: AppId) -> Result<Vec<u8>, DumpError> {
        let url = self.settings.app_url(app_id);
        let request_err = |source: reqwest::Error| DumpError::Request { app_id, source };

        let response = self
            .http
            .get_with_query(&url, &[("l", self.settings.language.as_str())])
            .await
            .map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DumpError::Status {
                app_id,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(request_err)?;
        Ok(bytes.to_vec())
    }

    /// Downloads the page and writes it under `dir`, creating `dir` if
    /// needed. Returns the written path.
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub async fn save(&self, app_id: AppId, dir: &Path) -> Result<PathBuf, DumpError> {
        let bytes = self.fetch(app_id).await?;

        tokio::fs::create_dir_all(dir).await.map_err(|source| DumpError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(format!("{app_id}.html"));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| DumpError::Io {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), bytes = bytes.len(), "Saved page");
        Ok(path)
    }
}
