use crate::error::{Result, ScanError};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Transport used by the traversal to retrieve page markup.
///
/// Any error is treated by the caller as "this page is empty"; implementors
/// should not retry on their own behalf.
pub trait Fetch {
    fn fetch(&self, link: &str) -> impl Future<Output = Result<String>> + Send;
}

/// `reqwest`-backed transport. Non-success statuses count as failures.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("wgrep/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, link: &str) -> Result<String> {
        debug!("GET {}", link);

        let response = self.client.get(link).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                url: link.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
