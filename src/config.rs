//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly
//! into the server. Handlers never read the environment.
//!
//! ## Uploads
//!
//! Publishing uploaded files to GitHub is enabled only when `GITHUB_TOKEN` is
//! set. The URL-only mode (`/api/make`) works without it.
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_..."
//! export GITHUB_REPO="alice/audio-files"
//! export GITHUB_BRANCH="main"     # optional
//! export GITHUB_PATH="audio"      # optional
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `GITHUB_API_URL` - GitHub API base (default: `https://api.github.com`)
//! - `SHORTENER_URL` - Shortening endpoint (default: `https://is.gd/create.php`)
//! - `QR_SERVICE_URL` - QR rendering endpoint (default: api.qrserver.com)
//! - `QR_SIZE` - QR image edge in pixels (default: 500, range: 50-1000)
//! - `MAX_UPLOAD_BYTES` - Request body limit (default: 25 MiB)
//! - `UPSTREAM_TIMEOUT_SECS` - Timeout for every outbound request (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use url::Url;

use crate::utils::qr::{DEFAULT_QR_ENDPOINT, DEFAULT_QR_SIZE};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SHORTENER_URL: &str = "https://is.gd/create.php";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upload target. `None` disables uploads.
    pub github: Option<GithubConfig>,
    pub shortener_url: String,
    pub qr_service_url: String,
    pub qr_size: u32,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    /// Applies to every request sent to GitHub and the shortener.
    pub upstream_timeout_secs: u64,
}

/// Repository that receives uploaded files.
#[derive(Clone)]
pub struct GithubConfig {
    pub api_url: String,
    /// `owner/name`
    pub repo: String,
    pub branch: String,
    /// Directory inside the repository, without leading or trailing slashes.
    pub path: String,
    pub token: String,
}

impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("path", &self.path)
            .field("token", &mask_secret(&self.token))
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_TOKEN` is set without `GITHUB_REPO`.
    pub fn from_env() -> Result<Self> {
        let github = Self::load_github().context("Failed to load GitHub configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let shortener_url =
            env::var("SHORTENER_URL").unwrap_or_else(|_| DEFAULT_SHORTENER_URL.to_string());
        let qr_service_url =
            env::var("QR_SERVICE_URL").unwrap_or_else(|_| DEFAULT_QR_ENDPOINT.to_string());

        let qr_size = env::var("QR_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QR_SIZE);

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            github,
            shortener_url,
            qr_service_url,
            qr_size,
            max_upload_bytes,
            upstream_timeout_secs,
        })
    }

    /// Loads the upload target.
    ///
    /// Returns `Ok(None)` when `GITHUB_TOKEN` is unset or empty.
    fn load_github() -> Result<Option<GithubConfig>> {
        let token = match env::var("GITHUB_TOKEN") {
            Ok(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => return Ok(None),
        };

        let repo = env::var("GITHUB_REPO").context("GITHUB_REPO must be set when GITHUB_TOKEN is")?;
        let branch = env::var("GITHUB_BRANCH").unwrap_or_else(|_| "main".to_string());
        let path = env::var("GITHUB_PATH").unwrap_or_else(|_| "audio".to_string());
        let api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());

        Ok(Some(GithubConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.trim().to_string(),
            branch: branch.trim().to_string(),
            path: path.trim().trim_matches('/').to_string(),
            token,
        }))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - an upstream endpoint is not an absolute HTTP(S) URL
    /// - `GITHUB_REPO` is not `owner/name`, or `GITHUB_BRANCH` is empty
    /// - `qr_size`, `max_upload_bytes` or `upstream_timeout_secs` are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_http_url("SHORTENER_URL", &self.shortener_url)?;
        validate_http_url("QR_SERVICE_URL", &self.qr_service_url)?;

        if let Some(ref github) = self.github {
            validate_http_url("GITHUB_API_URL", &github.api_url)?;

            let mut parts = github.repo.split('/');
            let well_formed = matches!(
                (parts.next(), parts.next(), parts.next()),
                (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
            );
            if !well_formed {
                anyhow::bail!(
                    "GITHUB_REPO must be in format 'owner/name', got '{}'",
                    github.repo
                );
            }

            if github.branch.is_empty() {
                anyhow::bail!("GITHUB_BRANCH must not be empty");
            }
        }

        if !(50..=1000).contains(&self.qr_size) {
            anyhow::bail!("QR_SIZE must be between 50 and 1000, got {}", self.qr_size);
        }

        if self.max_upload_bytes < 1024 {
            anyhow::bail!(
                "MAX_UPLOAD_BYTES must be at least 1024, got {}",
                self.max_upload_bytes
            );
        }

        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether uploads are enabled.
    pub fn is_upload_enabled(&self) -> bool {
        self.github.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref github) = self.github {
            tracing::info!(
                "  Uploads: {}@{}:/{} (token {})",
                github.repo,
                github.branch,
                github.path,
                mask_secret(&github.token)
            );
        } else {
            tracing::info!("  Uploads: disabled (GITHUB_TOKEN not set)");
        }

        tracing::info!("  Shortener: {}", self.shortener_url);
        tracing::info!("  QR service: {} ({}px)", self.qr_service_url, self.qr_size);
        tracing::info!("  Max upload: {} bytes", self.max_upload_bytes);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
    }

    Ok(())
}

/// Masks a secret for logging, keeping only the first four characters.
///
/// - `ghp_abcdef123456` → `ghp_***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const GITHUB_VARS: &[&str] = &[
        "GITHUB_TOKEN",
        "GITHUB_REPO",
        "GITHUB_BRANCH",
        "GITHUB_PATH",
        "GITHUB_API_URL",
    ];

    fn clear_github_vars() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in GITHUB_VARS {
                env::remove_var(var);
            }
        }
    }

    fn test_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            github: Some(GithubConfig {
                api_url: DEFAULT_GITHUB_API_URL.to_string(),
                repo: "alice/audio".to_string(),
                branch: "main".to_string(),
                path: "audio".to_string(),
                token: "ghp_secret_token".to_string(),
            }),
            shortener_url: DEFAULT_SHORTENER_URL.to_string(),
            qr_service_url: DEFAULT_QR_ENDPOINT.to_string(),
            qr_size: 500,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            upstream_timeout_secs: 30,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("ghp_abcdef123456"), "ghp_***");
        assert_eq!(mask_secret("short"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_github_config_debug_hides_token() {
        let config = test_config();
        let debug = format!("{:?}", config.github.unwrap());
        assert!(!debug.contains("ghp_secret_token"));
        assert!(debug.contains("ghp_***"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();

        config.shortener_url = "is.gd/create.php".to_string();
        assert!(config.validate().is_err());
        config.shortener_url = "ftp://is.gd/create.php".to_string();
        assert!(config.validate().is_err());
        config.shortener_url = DEFAULT_SHORTENER_URL.to_string();

        config.qr_size = 10;
        assert!(config.validate().is_err());
        config.qr_size = 500;

        config.max_upload_bytes = 100;
        assert!(config.validate().is_err());
        config.max_upload_bytes = DEFAULT_MAX_UPLOAD_BYTES;

        config.upstream_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.upstream_timeout_secs = 30;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_repo_format_validation() {
        let mut config = test_config();

        for bad in ["alice", "alice/", "/audio", "alice/audio/extra", ""] {
            if let Some(ref mut github) = config.github {
                github.repo = bad.to_string();
            }
            assert!(config.validate().is_err(), "accepted repo '{bad}'");
        }
    }

    #[test]
    fn test_uploads_disabled_config_is_valid() {
        let mut config = test_config();
        config.github = None;
        assert!(config.validate().is_ok());
        assert!(!config.is_upload_enabled());
    }

    #[test]
    #[serial]
    fn test_load_github_disabled_without_token() {
        clear_github_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GITHUB_REPO", "alice/audio");
        }

        assert!(Config::load_github().unwrap().is_none());

        unsafe {
            env::set_var("GITHUB_TOKEN", "   ");
        }
        assert!(Config::load_github().unwrap().is_none());

        clear_github_vars();
    }

    #[test]
    #[serial]
    fn test_load_github_requires_repo() {
        clear_github_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GITHUB_TOKEN", "ghp_secret_token");
        }

        assert!(Config::load_github().is_err());

        clear_github_vars();
    }

    #[test]
    #[serial]
    fn test_load_github_defaults_and_trimming() {
        clear_github_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GITHUB_TOKEN", "ghp_secret_token");
            env::set_var("GITHUB_REPO", "alice/audio");
            env::set_var("GITHUB_PATH", "/sounds/2024/");
            env::set_var("GITHUB_API_URL", "http://localhost:9000/");
        }

        let github = Config::load_github().unwrap().unwrap();
        assert_eq!(github.repo, "alice/audio");
        assert_eq!(github.branch, "main");
        assert_eq!(github.path, "sounds/2024");
        assert_eq!(github.api_url, "http://localhost:9000");
        assert_eq!(github.token, "ghp_secret_token");

        clear_github_vars();
    }
}
