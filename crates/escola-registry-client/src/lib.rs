//! HTTP client for existence checks against the registry (gerenciamento) service.

use std::time::Duration;

use anyhow::Context as _;
use reqwest::{Client, StatusCode};

use escola_domain::kind::RegistryKind;
use escola_domain::reference::{LookupError, ReferenceValidator};

/// `ReferenceValidator` over `GET {base_url}/{kind}/{id}`.
///
/// 200 means the entity exists and 404 means it does not. Timeouts, connection
/// failures and 5xx answers are retried `retries` times before giving up; any
/// other status is reported as-is without retrying.
#[derive(Clone, Debug)]
pub struct HttpRegistryClient {
    client: Client,
    base_url: String,
    retries: u32,
}

impl HttpRegistryClient {
    pub fn new(base_url: &str, timeout: Duration, retries: u32) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build registry HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            retries,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, kind: RegistryKind, id: i32) -> String {
        format!("{}/{}/{}", self.base_url, kind.path_segment(), id)
    }

    async fn lookup_once(&self, url: &str) -> Result<bool, LookupError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Transport(e.to_string())
            }
        })?;
        match resp.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(LookupError::UnexpectedStatus(status.as_u16())),
        }
    }
}

fn is_transient(err: &LookupError) -> bool {
    match err {
        LookupError::Timeout | LookupError::Transport(_) => true,
        LookupError::UnexpectedStatus(status) => *status >= 500,
    }
}

impl ReferenceValidator for HttpRegistryClient {
    async fn exists(&self, kind: RegistryKind, id: i32) -> Result<bool, LookupError> {
        let url = self.url(kind, id);
        let mut attempt = 0;
        loop {
            match self.lookup_once(&url).await {
                Err(err) if attempt < self.retries && is_transient(&err) => {
                    attempt += 1;
                    tracing::warn!(
                        %kind,
                        id,
                        attempt,
                        error = %err,
                        "registry lookup failed, retrying"
                    );
                }
                Err(err) => {
                    tracing::warn!(%kind, id, error = %err, "registry lookup failed");
                    return Err(err);
                }
                Ok(found) => return Ok(found),
            }
        }
    }
}
