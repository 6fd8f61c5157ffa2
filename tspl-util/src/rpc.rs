//! Handling JSON requests to remote HTTP APIs.

use reqwest::Client;
use reqwest::Error as ReqwestError;
use failure_derive::Fail;
use std::fmt::Display;
use std::time::Duration;
use serde::de::DeserializeOwned;
use log::*;

use crate::impl_from_for_error;

/// An error encountered after an API call.
#[derive(Debug, Fail)]
pub enum RpcError {
    /// The remote entity was not found.
    #[fail(display = "not found (remote)")]
    RemoteNotFound,
    /// The remote service was unavailable.
    #[fail(display = "remote service unavailable")]
    RemoteServiceUnavailable,
    /// The remote service returned an error.
    #[fail(display = "{} error (code {}): {}", service, code, error)]
    RemoteError {
        /// Name of the remote API responsible.
        service: &'static str,
        /// The HTTP status code returned.
        code: u16,
        /// The error text.
        error: String
    },
    /// reqwest error.
    #[fail(display = "reqwest: {}", _0)]
    Reqwest(ReqwestError)
}
impl_from_for_error!(RpcError,
                     ReqwestError => Reqwest);

impl RpcError {
    /// Classifies a non-success HTTP status code.
    ///
    /// Returns `None` for success codes.
    pub fn from_status(service: &'static str, code: u16, text: String) -> Option<Self> {
        match code {
            200..=299 => None,
            404 => Some(RpcError::RemoteNotFound),
            503 => Some(RpcError::RemoteServiceUnavailable),
            _ => Some(RpcError::RemoteError {
                service,
                code,
                error: text
            })
        }
    }
}

/// A client for some remote JSON API, rooted at `base_url`.
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    pub user_agent: String,
    pub name: &'static str,
    pub cli: Client
}
impl ApiClient {
    pub fn new(ua: String, name: &'static str, base_url: String, timeout: Duration) -> Result<Self, RpcError> {
        let cli = Client::builder()
            .timeout(timeout)
            .build()?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        Ok(Self {
            user_agent: ua,
            name, base_url, cli
        })
    }
    /// GETs `url` (relative to `base_url`), and parses the JSON response.
    pub fn get<T, U>(&self, url: T) -> Result<U, RpcError> where T: Display, U: DeserializeOwned {
        let url = format!("{}{}", self.base_url, url);
        debug!("API ({}): GET {}", self.name, url);
        let mut resp = self.cli.get(&url as &str)
            .header(reqwest::header::USER_AGENT, &self.user_agent as &str)
            .send()?;
        let status = resp.status();
        debug!("API ({}): response code {}", self.name, status.as_u16());
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            warn!("API ({}): request failed ({}): {}", self.name, status.as_u16(), text);
            if let Some(e) = RpcError::from_status(self.name, status.as_u16(), text) {
                Err(e)?
            }
        }
        let ret: U = resp.json()?;
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_codes_are_not_errors() {
        assert!(RpcError::from_status("tfl", 200, String::new()).is_none());
        assert!(RpcError::from_status("tfl", 204, String::new()).is_none());
    }
    #[test]
    fn error_codes_are_classified() {
        match RpcError::from_status("tfl", 404, String::new()) {
            Some(RpcError::RemoteNotFound) => {},
            x => panic!("expected RemoteNotFound, got {:?}", x)
        }
        match RpcError::from_status("tfl", 503, String::new()) {
            Some(RpcError::RemoteServiceUnavailable) => {},
            x => panic!("expected RemoteServiceUnavailable, got {:?}", x)
        }
        match RpcError::from_status("tfl", 429, "slow down".into()) {
            Some(RpcError::RemoteError { service, code, error }) => {
                assert_eq!(service, "tfl");
                assert_eq!(code, 429);
                assert_eq!(error, "slow down");
            },
            x => panic!("expected RemoteError, got {:?}", x)
        }
    }
    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let cli = ApiClient::new("test".into(), "tfl", "https://api.tfl.gov.uk/".into(),
                                 Duration::from_secs(5)).unwrap();
        assert_eq!(cli.base_url, "https://api.tfl.gov.uk");
    }
}
