// src/core/net.rs
// One blocking HTTPS GET per page. No retries; the caller decides what a failure means.

use std::time::Duration;

use thiserror::Error;

use crate::config::consts::{USER_AGENT, WIKI_HOST};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Where page HTML comes from. `HttpSource` in production, canned pages in tests.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Full Wikipedia URL for a site path (`/wiki/...`).
pub fn wiki_url(path: &str) -> String {
    format!("{WIKI_HOST}{path}")
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}
