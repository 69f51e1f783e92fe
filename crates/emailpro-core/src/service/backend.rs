//! HTTP client for the EmailPro backend.

use reqwest::{Response, Url};
use tracing::{debug, info, warn};

use crate::catalog::{TemplateFolder, TemplateListing, TemplateMeta};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::service::generate::{GenerateRequest, GenerateResponse, GeneratedContent};
use crate::service::send::{SendEmailRequest, SendOutcome};
use crate::service::verify::{VerificationReport, VerifyResponse};
use crate::template::TemplateContent;
use crate::validation::ValidationError;

const TEMPLATES_PATH: &str = "email-templates";
const SEND_PATH: &str = "send-email";
const GENERATE_PATH: &str = "generate-email-content";
const VERIFY_PATH: &str = "verify-email";

/// Typed access to the backend endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL; each segment is percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Turns a non-success response into `Error::Backend`.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!("Backend returned {}: {}", status, first_line(&body));
        Err(Error::Backend {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetches the raw nested template listing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or an undecodable body.
    pub async fn fetch_listing(&self) -> Result<TemplateListing> {
        let url = self.endpoint(&[TEMPLATES_PATH])?;
        debug!("GET {}", url.path());
        let response = Self::check_status(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Lists every template, flattened.
    ///
    /// # Errors
    ///
    /// See [`fetch_listing`](Self::fetch_listing).
    pub async fn list_templates(&self) -> Result<Vec<TemplateMeta>> {
        let metas = self.fetch_listing().await?.flatten();
        info!("Loaded {} templates", metas.len());
        Ok(metas)
    }

    /// Lists the template folders for browsing.
    ///
    /// # Errors
    ///
    /// See [`fetch_listing`](Self::fetch_listing).
    pub async fn template_tree(&self) -> Result<Vec<TemplateFolder>> {
        Ok(self.fetch_listing().await?.tree())
    }

    /// Fetches one template's subject, body and placeholder names.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an empty name or any non-success status, and
    /// `Error::Network` on transport or decode failure.
    pub async fn resolve_template(&self, filename: &str) -> Result<TemplateContent> {
        if filename.is_empty() {
            return Err(Error::NotFound(String::new()));
        }
        let url = self.endpoint(&[TEMPLATES_PATH, filename])?;
        debug!("GET {}", url.path());

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            warn!(
                "Template {} not found (status {})",
                filename,
                response.status()
            );
            return Err(Error::NotFound(filename.to_string()));
        }
        Ok(response.json().await?)
    }

    /// Sends (or prepares) an email.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` without contacting the backend if a required
    /// field is empty; otherwise transport and status errors.
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<SendOutcome> {
        request.validate()?;
        let url = self.endpoint(&[SEND_PATH])?;
        debug!("POST {} (template: {:?})", url.path(), request.template);

        let response = Self::check_status(self.http.post(url).json(request).send().await?).await?;
        let body = response.text().await?;
        let outcome = SendOutcome::from_body(&body);
        info!("Send to {} completed: {:?}", request.to, outcome);
        Ok(outcome)
    }

    /// Generates a draft from a prompt.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` without contacting the backend for a blank
    /// prompt; otherwise transport, status and decode errors.
    pub async fn generate_content(&self, prompt: &str) -> Result<GeneratedContent> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt.into());
        }
        let url = self.endpoint(&[GENERATE_PATH])?;
        debug!("POST {}", url.path());

        let response = Self::check_status(
            self.http
                .post(url)
                .json(&GenerateRequest { prompt })
                .send()
                .await?,
        )
        .await?;
        let body: GenerateResponse = response.json().await?;
        Ok(body.generated_content.into())
    }

    /// Verifies one address.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` without contacting the backend for an empty
    /// address; otherwise transport, status and decode errors.
    pub async fn verify_email(&self, email: &str) -> Result<VerificationReport> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        let url = self.endpoint(&[VERIFY_PATH, email])?;
        debug!("GET {}", url.path());

        let response = Self::check_status(self.http.get(url).send().await?).await?;
        let body: VerifyResponse = response.json().await?;
        Ok(VerificationReport::from_response(email, body))
    }
}

/// First line of an error body, for logs.
fn first_line(body: &str) -> &str {
    body.lines().next().unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(&ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client("http://localhost:3000");
        let url = client.endpoint(&[VERIFY_PATH, "a b/c@example.com"]).unwrap();
        assert_eq!(url.path(), "/verify-email/a%20b%2Fc@example.com");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("http://localhost:3000/api/");
        let url = client.endpoint(&[TEMPLATES_PATH, "welcome.html"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/email-templates/welcome.html");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(BackendClient::new(&ClientConfig::new("::nope::")).is_err());
    }
}
