//! Fuel Finder site-specifics
//!
//! Phases:
//! 1. build the ordered list of candidate URLs (direct endpoint first, then
//!    the proxy-derived fallback when one is configured)
//! 2. GET each candidate in turn and keep the first 200 + non-empty body
//!
//! Data fetched is CSV, returned as raw bytes.  Decoding is left to the
//! `formats` crate.
//!
//! This implements the `Fetchable` trait described in `lib.rs`.
//!

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use tracing::{debug, trace};

use crate::{http_get, Fetchable, SourceError};

/// Canonical URL for the latest fuel-price CSV
///
pub const FUEL_FINDER_URL: &str =
    "https://www.fuel-finder.service.gov.uk/internal/v1.0.2/csv/get-latest-fuel-prices-csv";

/// Placeholder substituted inside a proxy template
const URL_TOKEN: &str = "{url}";

/// Per-target request timeout
const TIMEOUT: Duration = Duration::from_secs(30);

/// This describes the GOV.UK Fuel Finder "site", the only source we have.
///
#[derive(Clone, Debug)]
pub struct FuelFinder {
    /// Base site url, defaults to the canonical endpoint
    pub base_url: String,
    /// Optional proxy template used to derive a fallback URL
    pub proxy_template: Option<String>,
    /// reqwest blocking client
    pub client: Client,
}

impl FuelFinder {
    #[tracing::instrument]
    pub fn new() -> eyre::Result<Self> {
        trace!("fuelfinder::new");

        let client = Client::builder().timeout(TIMEOUT).build()?;
        Ok(FuelFinder {
            base_url: FUEL_FINDER_URL.to_owned(),
            proxy_template: None,
            client,
        })
    }

    /// Point the source at a different endpoint (mirrors, tests)
    ///
    pub fn url(&mut self, url: &str) -> &mut Self {
        trace!("Set url {}", url);
        self.base_url = url.to_owned();
        self
    }

    /// Configure the proxy template, ignored when blank
    ///
    pub fn proxy(&mut self, template: &str) -> &mut Self {
        trace!("Set proxy template {}", template);
        let template = template.trim();
        self.proxy_template = if template.is_empty() {
            None
        } else {
            Some(template.to_owned())
        };
        self
    }

    /// Ordered list of candidate URLs, direct endpoint always first.
    ///
    pub fn targets(&self) -> Vec<String> {
        match &self.proxy_template {
            Some(template) => vec![
                self.base_url.clone(),
                proxy_url(template, &self.base_url),
            ],
            None => vec![self.base_url.clone()],
        }
    }

    /// One attempt against one candidate URL.  Anything but a 200 with a
    /// non-empty body is an error.
    ///
    #[tracing::instrument(skip(self))]
    fn fetch_from(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        trace!("fuelfinder::fetch_from({})", url);

        let resp = http_get!(self, url).map_err(|source| SourceError::Transport {
            url: url.to_owned(),
            source,
        })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(SourceError::BadStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let payload = resp.bytes().map_err(|source| SourceError::Transport {
            url: url.to_owned(),
            source,
        })?;
        if payload.is_empty() {
            return Err(SourceError::EmptyBody {
                url: url.to_owned(),
            });
        }

        debug!("{} bytes read from {}", payload.len(), url);
        Ok(payload.to_vec())
    }
}

impl Fetchable for FuelFinder {
    fn name(&self) -> String {
        "fuel-finder".to_string()
    }

    /// Fetch actual data from the site, trying each candidate in order and
    /// returning the first success.  On exhaustion we surface the last
    /// recorded failure.
    ///
    #[tracing::instrument(skip(self))]
    fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        trace!("fuelfinder::fetch");

        let mut last: Option<SourceError> = None;
        for url in self.targets() {
            match self.fetch_from(&url) {
                Ok(payload) => return Ok(payload),
                Err(err) => {
                    debug!("target {} failed: {}", url, err);
                    last = Some(err);
                }
            }
        }

        Err(last.unwrap_or(SourceError::Exhausted))
    }
}

/// Derive the fallback URL from a proxy template.
///
/// Templates carrying the `{url}` token get the percent-encoded target
/// substituted in; anything else is treated as a plain prefix and gets the
/// target appended verbatim.
///
pub fn proxy_url(template: &str, target: &str) -> String {
    if template.contains(URL_TOKEN) {
        let encoded = utf8_percent_encode(target, NON_ALPHANUMERIC).to_string();
        template.replace(URL_TOKEN, &encoded)
    } else {
        format!("{}{}", template, target)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    fn source_for(url: &str) -> FuelFinder {
        let mut site = FuelFinder::new().unwrap();
        site.url(url);
        site
    }

    #[test]
    fn test_targets_without_proxy() {
        let site = source_for("https://example.net/csv");

        assert_eq!(vec!["https://example.net/csv".to_string()], site.targets());
    }

    #[test]
    fn test_targets_with_proxy_prefix() {
        let mut site = source_for("https://example.net/csv");
        site.proxy("https://relay.example.com/?");

        assert_eq!(
            vec![
                "https://example.net/csv".to_string(),
                "https://relay.example.com/?https://example.net/csv".to_string(),
            ],
            site.targets()
        );
    }

    #[test]
    fn test_targets_blank_proxy_is_ignored() {
        let mut site = source_for("https://example.net/csv");
        site.proxy("   ");

        assert_eq!(1, site.targets().len());
    }

    #[test]
    fn test_proxy_url_token_is_percent_encoded() {
        let got = proxy_url("https://relay.example.com/get?u={url}", "https://a.b/c d");

        assert_eq!("https://relay.example.com/get?u=https%3A%2F%2Fa%2Eb%2Fc%20d", got);
    }

    #[test]
    fn test_proxy_url_without_token_concatenates() {
        let got = proxy_url("https://relay.example.com/", "https://a.b/c");

        assert_eq!("https://relay.example.com/https://a.b/c", got);
    }

    #[test]
    fn test_fetch_direct() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .header("accept-language", "en-GB,en;q=0.9")
                .path("/csv");
            then.status(200).body("brand,postcode\nShell,SW1A 1AA\n");
        });

        let site = source_for(&server.url("/csv"));
        let payload = site.fetch();

        m.assert();
        assert!(payload.is_ok());
        assert_eq!(
            b"brand,postcode\nShell,SW1A 1AA\n".to_vec(),
            payload.unwrap()
        );
    }

    #[test]
    fn test_fetch_falls_back_to_proxy() {
        let server = MockServer::start();
        let direct = server.mock(|when, then| {
            when.method(GET).path("/csv");
            then.status(503);
        });
        let relayed = server.mock(|when, then| {
            when.method(GET).path("/relay");
            then.status(200).body("brand\nEsso\n");
        });

        let mut site = source_for(&server.url("/csv"));
        site.proxy(&format!("{}?u={{url}}", server.url("/relay")));
        let payload = site.fetch();

        direct.assert();
        relayed.assert();
        assert_eq!(b"brand\nEsso\n".to_vec(), payload.unwrap());
    }

    #[test]
    fn test_fetch_no_proxy_fails_on_bad_status() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/csv");
            then.status(500);
        });

        let site = source_for(&server.url("/csv"));
        let err = site.fetch().unwrap_err();

        // exactly one attempt, there is no fallback to try
        m.assert_hits(1);
        assert!(matches!(err, SourceError::BadStatus { status: 500, .. }));
    }

    #[test]
    fn test_fetch_empty_body_is_an_error() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/csv");
            then.status(200).body("");
        });

        let site = source_for(&server.url("/csv"));
        let err = site.fetch().unwrap_err();

        m.assert();
        assert!(matches!(err, SourceError::EmptyBody { .. }));
    }

    #[test]
    fn test_fetch_surfaces_last_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/csv");
            then.status(500);
        });
        let relayed = server.mock(|when, then| {
            when.method(GET).path("/relay");
            then.status(403);
        });

        let mut site = source_for(&server.url("/csv"));
        site.proxy(&format!("{}?u={{url}}", server.url("/relay")));
        let err = site.fetch().unwrap_err();

        relayed.assert();
        assert!(matches!(err, SourceError::BadStatus { status: 403, .. }));
    }
}
