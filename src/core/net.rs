// src/core/net.rs
//
// Page fetching behind a small trait so site adapters never see the HTTP
// client, and tests can feed captured HTML instead.

use std::{error::Error as _, io, time::{Duration, Instant}};

use log::debug;

use crate::config::consts::{CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchFailure;

pub trait Fetch {
    /// GET `url` and return the body as text.
    fn get(&self, url: &str) -> Result<String, FetchFailure>;
}

/// Blocking HTTP client. One agent (connection pool, cookies) is shared by all sources.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout.min(Duration::from_secs(CONNECT_TIMEOUT_SECS)))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchFailure> {
        let t = Instant::now();
        let response = self
            .agent
            .get(url)
            .set("Accept", "text/html,application/xhtml+xml")
            .call()
            .map_err(|e| classify(url, e))?;

        let body = response.into_string().map_err(|e| classify_io(url, &e))?;
        debug!("GET {url}: {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

/// Never touches the network; every scraped category degrades to fallback.
pub struct OfflineFetcher;

impl Fetch for OfflineFetcher {
    fn get(&self, _url: &str) -> Result<String, FetchFailure> {
        Err(FetchFailure::Offline)
    }
}

fn classify(url: &str, error: ureq::Error) -> FetchFailure {
    match error {
        ureq::Error::Status(status, _) => FetchFailure::Status { url: s!(url), status },
        ureq::Error::Transport(transport) => {
            let timed_out = transport
                .source()
                .and_then(|e| e.downcast_ref::<io::Error>())
                .is_some_and(is_timeout);
            if timed_out {
                FetchFailure::Timeout { url: s!(url) }
            } else {
                FetchFailure::Network { url: s!(url), reason: transport.to_string() }
            }
        }
    }
}

fn classify_io(url: &str, error: &io::Error) -> FetchFailure {
    if is_timeout(error) {
        FetchFailure::Timeout { url: s!(url) }
    } else {
        FetchFailure::Network { url: s!(url), reason: error.to_string() }
    }
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}
