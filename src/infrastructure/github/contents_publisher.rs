//! GitHub Contents API publisher.

use async_trait::async_trait;
use base64::Engine as _;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::GithubConfig;
use crate::domain::{AssetPublisher, Upload, UpstreamError};
use crate::infrastructure::http::body_text;
use crate::utils::github_url::RAW_HOST;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Path of a file inside the repository: `{dir}/{filename}`, or just
/// `{filename}` when `dir` is empty.
pub fn repo_file_path(dir: &str, filename: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        filename.to_string()
    } else {
        format!("{dir}/{filename}")
    }
}

/// Raw-content URL of a published file.
///
/// A pure function of its four inputs, so the URL is known before the commit
/// lands.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     raw_url_for("alice/audio", "main", "audio", "my_song.mp3"),
///     "https://raw.githubusercontent.com/alice/audio/main/audio/my_song.mp3"
/// );
/// ```
pub fn raw_url_for(repo: &str, branch: &str, dir: &str, filename: &str) -> String {
    format!(
        "https://{RAW_HOST}/{repo}/{branch}/{}",
        repo_file_path(dir, filename)
    )
}

/// Body of `PUT /repos/{repo}/contents/{path}`.
#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: String,
    content: String,
    branch: &'a str,
    /// Blob SHA of the file being replaced. Required by GitHub for updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

/// The part of `GET /repos/{repo}/contents/{path}` we need.
#[derive(Debug, Deserialize)]
struct ExistingContents {
    sha: String,
}

/// Commits uploaded files to a repository through the GitHub Contents API.
///
/// Each publish is a create-or-update: the current blob SHA is looked up first
/// and sent along when the file already exists.
pub struct GithubContentsPublisher {
    client: Client,
    config: GithubConfig,
}

impl GithubContentsPublisher {
    pub fn new(client: Client, config: GithubConfig) -> Self {
        Self { client, config }
    }

    fn contents_url(&self, filename: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.repo,
            repo_file_path(&self.config.path, filename)
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.config.token)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    /// Returns the blob SHA of the file if it already exists on the branch.
    async fn existing_sha(&self, filename: &str) -> Result<Option<String>, UpstreamError> {
        let response = self
            .authorized(self.client.get(self.contents_url(filename)))
            .query(&[("ref", self.config.branch.as_str())])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let existing: ExistingContents = response.json().await?;
                Ok(Some(existing.sha))
            }
            status => Err(UpstreamError::Publish {
                status: status.as_u16(),
                body: body_text(response).await,
            }),
        }
    }
}

#[async_trait]
impl AssetPublisher for GithubContentsPublisher {
    async fn publish(&self, upload: &Upload) -> Result<String, UpstreamError> {
        let filename = upload.filename();
        let sha = self.existing_sha(filename).await?;
        debug!(filename, replacing = sha.is_some(), "Publishing to GitHub");

        let body = PutContentsRequest {
            message: format!(
                "Upload {filename} ({})",
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            content: base64::engine::general_purpose::STANDARD.encode(upload.content()),
            branch: &self.config.branch,
            sha,
        };

        let response = self
            .authorized(self.client.put(self.contents_url(filename)))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = body_text(response).await;
            warn!(filename, %status, "GitHub rejected upload");
            return Err(UpstreamError::Publish {
                status: status.as_u16(),
                body,
            });
        }

        let raw = raw_url_for(
            &self.config.repo,
            &self.config.branch,
            &self.config.path,
            filename,
        );
        info!(filename, bytes = upload.len(), %raw, "Published file to GitHub");

        Ok(raw)
    }

    fn target(&self) -> Option<String> {
        Some(format!(
            "{}@{}:/{}",
            self.config.repo, self.config.branch, self.config.path
        ))
    }
}
