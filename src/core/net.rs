// src/core/net.rs

// Blocking HTTP for the portal. One agent per run; no retries, no pacing
// (the scrape layer sleeps between entities).

use std::io;

use log::debug;
use thiserror::Error;

use crate::config::consts::USER_AGENT;
use crate::config::options::ScrapeOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {code} from {url}")]
    Status { url: String, code: u16 },
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("reading body of {url}: {source}")]
    Body { url: String, #[source] source: io::Error },
}

/// What the harvest needs from HTTP. `Client` is the real thing; tests
/// substitute canned pages.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String, FetchError>;
}

pub struct Client {
    agent: ureq::Agent,
}

impl Client {
    pub fn new(opts: &ScrapeOptions) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(opts.timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Fetch for Client {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        read_body(url, self.agent.get(url).call())
    }

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String, FetchError> {
        debug!("POST {url} {form:?}");
        read_body(url, self.agent.post(url).send_form(form))
    }
}

fn read_body(url: &str, resp: Result<ureq::Response, ureq::Error>) -> Result<String, FetchError> {
    match resp {
        Ok(resp) => resp.into_string().map_err(|source| FetchError::Body { url: s!(url), source }),
        Err(ureq::Error::Status(code, _)) => Err(FetchError::Status { url: s!(url), code }),
        Err(e) => Err(FetchError::Transport { url: s!(url), reason: e.to_string() }),
    }
}
