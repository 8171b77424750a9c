//! The request/response engine.
//!
//! [`Client::call`] is the whole caller-facing surface: extract the
//! parameters into a form, POST them to `<base_url>/bot<token>/<method>`,
//! and unwrap the `{ok, result, description}` envelope into the caller's
//! result type. One atomic attempt per call, no retries, no partial
//! results.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::error::BotError;
use crate::params::{FormValue, IntoFormParams};
use crate::types::ApiResponse;

/// Default request timeout for clients built by [`Client::new`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout for clients built by [`Client::new`].
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bot API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bot token, embedded in the request path.
    pub token: SecretString,
    /// Base URL of the Bot API server.
    pub base_url: String,
}

impl ClientConfig {
    /// Default base URL for the hosted Bot API.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.telegram.org";

    /// Create a configuration for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different Bot API server (local server or
    /// test double).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), BotError> {
        if self.token.expose_secret().is_empty() {
            return Err(BotError::Configuration(
                "bot token cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(BotError::Configuration(
                "base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bot API client.
///
/// Cheap to clone and safe for concurrent calls; the held `reqwest::Client`
/// is the only shared resource and handles its own connection pooling.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client with the crate's default transport settings.
    pub fn new(config: ClientConfig) -> Result<Self, BotError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| BotError::Configuration(e.to_string()))?;
        Self::with_http_client(config, http_client)
    }

    /// Create a client over a caller-owned transport. The transport's own
    /// timeout and pooling settings apply unchanged.
    pub fn with_http_client(
        config: ClientConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, BotError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Call a Bot API method and decode its result into `T`.
    ///
    /// Parameterless methods take `&()`. On any failure the error names the
    /// stage that failed (see [`BotError`]) and no result value exists.
    pub async fn call<T, P>(&self, method: &str, params: &P) -> Result<T, BotError>
    where
        T: DeserializeOwned,
        P: IntoFormParams + ?Sized,
    {
        let form_params = params.to_form_params();

        let url = format!(
            "{}/bot{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.token.expose_secret(),
            method,
        );
        let url =
            reqwest::Url::parse(&url).map_err(|e| BotError::RequestBuild(e.to_string()))?;

        tracing::debug!(method, fields = form_params.len(), "sending Bot API call");

        // An empty form must not produce a multipart content-type header;
        // the request goes out with no body at all.
        let request = if form_params.is_empty() {
            self.http_client.post(url)
        } else {
            let mut form = reqwest::multipart::Form::new();
            for (name, value) in form_params.iter() {
                form = match value {
                    FormValue::Text(text) => form.text(name.to_string(), text.clone()),
                    FormValue::Part { file_name, bytes } => form.part(
                        name.to_string(),
                        reqwest::multipart::Part::bytes(bytes.clone())
                            .file_name(file_name.clone()),
                    ),
                };
            }
            self.http_client.post(url).multipart(form)
        };

        let response = request
            .send()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;

        // The Bot API reports business failures through the envelope, often
        // alongside a non-2xx status; the status line carries no extra
        // information, so decode unconditionally.
        let body = response
            .bytes()
            .await
            .map_err(|e| BotError::ResponseRead(e.to_string()))?;

        let envelope: ApiResponse = serde_json::from_slice(&body)
            .map_err(|e| BotError::EnvelopeDecode(e.to_string()))?;

        if !envelope.ok {
            tracing::debug!(method, description = %envelope.description, "Bot API rejected call");
            return Err(BotError::Api(envelope.description));
        }

        serde_json::from_value(envelope.result)
            .map_err(|e| BotError::ResultDecode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        let config = ClientConfig::new("");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BotError::Configuration(_)));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = ClientConfig::new("123:abc").with_base_url("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_validates() {
        assert!(ClientConfig::new("123:abc").validate().is_ok());
    }

    #[test]
    fn client_construction_checks_config() {
        assert!(Client::new(ClientConfig::new("")).is_err());
        assert!(Client::new(ClientConfig::new("123:abc")).is_ok());
    }
}
