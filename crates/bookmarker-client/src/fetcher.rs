use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use bookmarker_core::error::AppError;
use bookmarker_core::traits::Fetcher;
use bookmarker_core::util::validate_url_scheme;
use reqwest::Client;
use url::{Host, Url};

use crate::config::{ClientConfig, DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};

/// HTTP fetcher using reqwest.
///
/// Downloads raw HTML from URLs with configurable User-Agent and timeout.
/// One GET per call, no retries. Private-address blocking is **disabled** by
/// default; use [`block_private_urls`](Self::block_private_urls) when the
/// fetcher is exposed to untrusted input.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout: Duration,
    block_private: bool,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        Self::build(timeout, DEFAULT_USER_AGENT)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        let fetcher = Self::build(config.fetch_timeout, &config.user_agent)?;
        Ok(if config.block_private_urls {
            fetcher.block_private_urls()
        } else {
            fetcher
        })
    }

    fn build(timeout: Duration, user_agent: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            timeout,
            block_private: false,
        })
    }

    /// Refuse requests to private/reserved IP ranges.
    pub fn block_private_urls(mut self) -> Self {
        self.block_private = true;
        self
    }

    fn classify(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(self.timeout)
        } else if e.is_connect() {
            AppError::NetworkError(format!("Connection failed: {e}"))
        } else {
            AppError::HttpError(e.to_string())
        }
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        validate_url_scheme(url)?;

        if self.block_private {
            ensure_public_host(url).await?;
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout)
            } else {
                AppError::HttpError(format!("Failed to read response body: {e}"))
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Private host blocking
// ---------------------------------------------------------------------------

/// Refuse article URLs whose host is, or resolves to, a non-public address.
///
/// Runs after [`validate_url_scheme`], so only the host needs checking.
async fn ensure_public_host(url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(url).map_err(|_| AppError::InvalidUrlFormat)?;

    let addrs: Vec<IpAddr> = match parsed.host() {
        Some(Host::Ipv4(v4)) => vec![IpAddr::V4(v4)],
        Some(Host::Ipv6(v6)) => vec![IpAddr::V6(v6)],
        Some(Host::Domain(domain)) => {
            let port = parsed.port_or_known_default().unwrap_or(80);
            tokio::net::lookup_host((domain, port))
                .await
                .map_err(|e| AppError::NetworkError(format!("Could not resolve {domain}: {e}")))?
                .map(|addr| addr.ip())
                .collect()
        }
        None => return Err(AppError::InvalidUrlFormat),
    };

    match addrs.into_iter().find(|ip| is_private_ip(*ip)) {
        Some(ip) => Err(AppError::HttpError(format!(
            "Blocked: {url} points at non-public address {ip}"
        ))),
        None => Ok(()),
    }
}

/// Loopback, private, link-local, shared (CGN), documentation, and unspecified ranges.
fn is_private_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_private_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_private_v4(v4),
            None => is_private_v6(v6),
        },
    }
}

fn is_private_v4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_documentation()
        || (a == 100 && (64..128).contains(&b))
}

fn is_private_v6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        || (first & 0xffc0) == 0xfe80
        || (first & 0xfe00) == 0xfc00
}
