#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};
use qrlink::application::services::LinkService;
use qrlink::domain::{AssetPublisher, LinkShortener, Upload, UpstreamError};
use qrlink::infrastructure::github::raw_url_for;
use qrlink::state::AppState;
use qrlink::utils::qr::QrRenderer;

pub const REPO: &str = "alice/audio";
pub const BRANCH: &str = "main";
pub const DIR: &str = "audio";
pub const SHORT_URL: &str = "https://is.gd/abc123";
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Publisher that records filenames and answers like a configured repository.
#[derive(Default)]
pub struct FakePublisher {
    pub fail_with: Option<(u16, String)>,
    pub published: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakePublisher {
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            fail_with: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub fn published_names(&self) -> Vec<String> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
impl AssetPublisher for FakePublisher {
    async fn publish(&self, upload: &Upload) -> Result<String, UpstreamError> {
        self.published
            .lock()
            .unwrap()
            .push((upload.filename().to_string(), upload.content().to_vec()));

        match &self.fail_with {
            Some((status, body)) => Err(UpstreamError::Publish {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(raw_url_for(REPO, BRANCH, DIR, upload.filename())),
        }
    }

    fn target(&self) -> Option<String> {
        Some(format!("{REPO}@{BRANCH}:/{DIR}"))
    }
}

/// Shortener that always answers [`SHORT_URL`], or a fixed failure.
#[derive(Default)]
pub struct FakeShortener {
    pub fail_with: Option<UpstreamErrorKind>,
    pub requested: Mutex<Vec<String>>,
}

pub enum UpstreamErrorKind {
    Status(u16, String),
    Network(String),
}

impl FakeShortener {
    pub fn failing(kind: UpstreamErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkShortener for FakeShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, UpstreamError> {
        self.requested.lock().unwrap().push(long_url.to_string());

        match &self.fail_with {
            Some(UpstreamErrorKind::Status(status, body)) => Err(UpstreamError::Shorten {
                status: *status,
                body: body.clone(),
            }),
            Some(UpstreamErrorKind::Network(message)) => {
                Err(UpstreamError::Network(message.clone()))
            }
            None => Ok(SHORT_URL.to_string()),
        }
    }

    fn endpoint(&self) -> String {
        "https://is.gd/create.php".to_string()
    }
}

pub fn create_test_state(
    publisher: Arc<dyn AssetPublisher>,
    shortener: Arc<dyn LinkShortener>,
) -> AppState {
    let link_service = LinkService::new(publisher, shortener, QrRenderer::default());
    AppState::new(Arc::new(link_service), MAX_UPLOAD_BYTES)
}

pub fn create_default_state() -> AppState {
    create_test_state(
        Arc::new(FakePublisher::default()),
        Arc::new(FakeShortener::default()),
    )
}

/// Serves `app` on an ephemeral local port and returns its base URL.
///
/// Used to impersonate GitHub and the shortener for the real HTTP clients.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Base URL of a local port nothing listens on.
pub async fn closed_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}
