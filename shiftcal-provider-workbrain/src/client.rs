//! Blocking HTTP client for the portal session.

use reqwest::blocking::Response;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

use crate::constants::{CLIENT_HEADER_NAME, CLIENT_HEADER_VALUE};

/// Cookie-carrying HTTP client shared by the login flow and the
/// scraper. All portal traffic goes through here, so the Workday
/// session cookies picked up during login ride along on every
/// timesheet request.
pub struct PortalHttp {
    client: reqwest::blocking::Client,
}

impl PortalHttp {
    /// Create a client with a cookie jar, the client version header on
    /// every request, and capped redirect following (the SAML hop
    /// bounces through a couple of redirects).
    pub fn new() -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CLIENT_HEADER_NAME, HeaderValue::from_static(CLIENT_HEADER_VALUE));

        let client = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(PortalHttp { client })
    }

    pub fn get(&self, url: &str) -> reqwest::Result<Response> {
        debug!(url, "GET");
        self.client.get(url).send()
    }

    pub fn post_form<F: Serialize + ?Sized>(&self, url: &str, form: &F) -> reqwest::Result<Response> {
        debug!(url, "POST form");
        self.client.post(url).form(form).send()
    }

    /// POST a JSON body with one extra header (the gateway's secure
    /// token rides on the MFA challenge this way).
    pub fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        header: (&str, &str),
        body: &B,
    ) -> reqwest::Result<Response> {
        debug!(url, "POST json");
        self.client
            .post(url)
            .header(header.0, header.1)
            .json(body)
            .send()
    }
}
