//! Stubbed HTTP layer. No sockets are opened; one configured URL always fails.

use anyhow::bail;
use std::fmt;
use tandem_core::Compose;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    data: String,
}

impl HttpResponse {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl Compose for HttpResponse {
    fn compose(self, other: Self) -> Self {
        HttpResponse::new(format!("{self} composed with {other}"))
    }
}

/// Pretends to fetch a URL. Echoes the URL back as the body, except for
/// `secret_url`, which is refused.
#[derive(Debug, Clone)]
pub struct StubClient {
    secret_url: String,
}

impl StubClient {
    pub fn new(secret_url: impl Into<String>) -> Self {
        Self {
            secret_url: secret_url.into(),
        }
    }

    pub fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        if url == self.secret_url {
            bail!("Exception for {url}");
        }
        tracing::trace!(url, "stub GET");
        Ok(HttpResponse::new(url))
    }
}
