//! HTTP client for the chemical-equation balancing service.
//!
//! This module provides the [`BalancerRequester`] struct for issuing balancing
//! requests to the external service and decoding its JSON responses.

use std::time::Duration;

use log::{debug, info, warn};
use mockall::automock;
use reqwest::Client;

use crate::balancer::BalancerError;
use crate::balancer::response_structs::BalanceResult;

/// HTTP client for requesting equation balancing from the external service.
///
/// # Examples
///
/// ```no_run
/// let requester = BalancerRequester::new("http://127.0.0.1:8000", 5).unwrap();
/// let result = requester.balance_reaction("H2 + O2 -> H2O").await.unwrap();
/// println!("Balanced: {:?}", result.reaction);
/// ```
pub struct BalancerRequester {
    /// Balancing service base url
    url: String,
    /// HTTP client, configured with an explicit request timeout
    client: Client,
}

/// Trait for making requests to the balancing service.
///
/// This trait abstracts the HTTP operation for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Submits one equation to the balancing service.
    async fn balance_reaction(&self, reaction: &str) -> Result<BalanceResult, BalancerError>;
}

impl BalancerRequester {
    /// Create a new [BalancerRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the balancing service, without trailing slash.
    /// * `timeout` - Request timeout in seconds applied to the whole call.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(url: &str, timeout: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(BalancerRequester {
            url: url.to_string(),
            client,
        })
    }

    /// Builds the full request URL for a reaction.
    ///
    /// The reaction text is percent-encoded as the `reaction` query parameter.
    /// The trailing `}` after the encoded value is part of the wire format the
    /// service has always been called with and is kept for compatibility.
    fn request_url(&self, reaction: &str) -> String {
        format!(
            "{}/balance_reaction?reaction={}}}",
            &self.url,
            urlencoding::encode(reaction)
        )
    }
}

impl Requester for BalancerRequester {
    /// Request `POST /balance_reaction?reaction={reaction}` to balance one equation.
    ///
    /// The request carries no body. The response is a json object:
    /// ```
    /// { ok: true, reaction: "2H2 + O2 -> 2H2O", log: "balanced in 3 steps" }
    /// ```
    /// This method transforms this json into a [`BalanceResult`].
    ///
    /// Network failures, timeouts and undecodable bodies are all reported as
    /// [`BalancerError::ServiceUnavailable`]; the underlying error is logged here.
    async fn balance_reaction(&self, reaction: &str) -> Result<BalanceResult, BalancerError> {
        let url = self.request_url(reaction);
        info!("request balancing of a reaction");
        debug!("request {}", &url);

        let response = self.client.post(&url).send().await.map_err(|e| {
            warn!("balancing service unreachable: {}", e);
            BalancerError::ServiceUnavailable
        })?;

        let balance_result: BalanceResult = response.json().await.map_err(|e| {
            warn!("undecodable response from the balancing service: {}", e);
            BalancerError::ServiceUnavailable
        })?;

        debug!("response from {} -> {:?}", &url, &balance_result);

        Ok(balance_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_reaction() {
        let requester = BalancerRequester::new("http://127.0.0.1:8000", 5).unwrap();
        assert_eq!(
            requester.request_url("H2 + O2 -> H2O"),
            "http://127.0.0.1:8000/balance_reaction?reaction=H2%20%2B%20O2%20-%3E%20H2O}"
        );
    }

    #[test]
    fn test_request_url_plain_reaction() {
        let requester = BalancerRequester::new("http://127.0.0.1:8000", 5).unwrap();
        assert_eq!(
            requester.request_url("XX"),
            "http://127.0.0.1:8000/balance_reaction?reaction=XX}"
        );
    }

    #[tokio::test]
    async fn test_balance_reaction_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{"ok": true, "reaction": "2H2 + O2 -> 2H2O", "log": "balanced in 3 steps"}"#;

        server
            .mock("POST", "/balance_reaction")
            .match_query(mockito::Matcher::Regex(
                "reaction=H2%20%2B%20O2%20-%3E%20H2O(%7D|\\})".to_owned(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let requester = BalancerRequester::new(&url, 5).unwrap();
        let result = requester.balance_reaction("H2 + O2 -> H2O").await.unwrap();
        assert!(result.ok);
        assert_eq!(result.reaction.unwrap(), "2H2 + O2 -> 2H2O");
        assert_eq!(result.log.unwrap(), "balanced in 3 steps");
    }

    #[tokio::test]
    async fn test_balance_reaction_failure_response() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{"ok": false, "reaction": null, "log": "unrecognized element XX"}"#;

        server
            .mock("POST", "/balance_reaction")
            .match_query(mockito::Matcher::Regex("reaction=XX(%7D|\\})".to_owned()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let requester = BalancerRequester::new(&url, 5).unwrap();
        let result = requester.balance_reaction("XX").await.unwrap();
        assert!(!result.ok);
        assert!(result.reaction.is_none());
        assert_eq!(result.log.unwrap(), "unrecognized element XX");
    }

    #[tokio::test]
    async fn test_balance_reaction_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("POST", "/balance_reaction")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let requester = BalancerRequester::new(&url, 5).unwrap();
        let result = requester.balance_reaction("H2 + O2 -> H2O").await;
        assert!(matches!(result, Err(BalancerError::ServiceUnavailable)));
    }

    #[tokio::test]
    async fn test_balance_reaction_connection_refused() {
        // Port 1 is never bound in the test environment
        let requester = BalancerRequester::new("http://127.0.0.1:1", 1).unwrap();
        let result = requester.balance_reaction("H2 + O2 -> H2O").await;
        assert!(matches!(result, Err(BalancerError::ServiceUnavailable)));
    }
}
