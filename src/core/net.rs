// src/core/net.rs
// One form POST over reqwest's blocking client.

use std::borrow::Cow;
use std::time::Duration;

use crate::error::Error;

/// Status and raw body of an HTTP exchange, kept for diagnostics.
/// `Response::default()` means no exchange took place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Same body, different status. Used when the page content overrides
    /// what the server reported.
    pub(crate) fn with_status(self, status: u16) -> Self {
        Self { status, ..self }
    }
}

/// Sends a urlencoded form and hands back whatever came back.
/// Non-2xx statuses are *not* errors at this level.
pub trait Transport {
    fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<Response, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<Response, Error> {
        (**self).post_form(url, form)
    }
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// `timeout: None` leaves the request without a deadline. Cookies set by
    /// the site (the login session) are kept for later requests, redirects included.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(Error::transport)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<Response, Error> {
        // `.form()` sets Content-Type: application/x-www-form-urlencoded
        let res = self
            .client
            .post(url)
            .form(form)
            .send()
            .map_err(Error::transport)?;

        let status = res.status().as_u16();
        let body = res.bytes().map_err(Error::transport)?;
        logd!("POST {url} -> {status} ({} bytes)", body.len());

        Ok(Response::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::Response;

    #[test]
    fn default_response_is_empty() {
        let r = Response::default();
        assert_eq!(r.status, 0);
        assert!(r.body.is_empty());
        assert!(!r.is_success());
    }

    #[test]
    fn status_override_keeps_body() {
        let r = Response::new(200, "<html/>").with_status(401);
        assert_eq!(r.status, 401);
        assert_eq!(r.text(), "<html/>");
    }
}
