//! EmailJS-style REST notifier.
//!
//! The gateway accepts a single JSON POST naming a service, a message
//! template, a public user key, and the template parameters; the template
//! itself lives gateway-side.

use async_trait::async_trait;
use serde::Serialize;

use crate::notification::{
    domain::Notice,
    ports::{Notifier, NotifierError, NotifierResult},
};

/// Default EmailJS send endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Connection settings for the EmailJS gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    endpoint: String,
    service_id: String,
    template_id: String,
    user_id: String,
}

impl EmailJsConfig {
    /// Creates a configuration against the public EmailJS endpoint.
    #[must_use]
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            user_id: user_id.into(),
        }
    }

    /// Overrides the endpoint, for self-hosted gateways and tests.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_name: &'a str,
    to_email: &'a str,
    message: &'a str,
}

/// Notifier delivering through an EmailJS-compatible REST gateway.
#[derive(Debug, Clone)]
pub struct EmailJsNotifier {
    config: EmailJsConfig,
    client: reqwest::Client,
}

impl EmailJsNotifier {
    /// Creates a notifier with a fresh HTTP client.
    #[must_use]
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for EmailJsNotifier {
    async fn send(&self, notice: &Notice) -> NotifierResult<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: TemplateParams {
                to_name: notice.recipient_name(),
                to_email: notice.recipient_email().as_str(),
                message: notice.message(),
            },
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(NotifierError::send)?;
        response.error_for_status().map_err(NotifierError::send)?;
        Ok(())
    }
}
