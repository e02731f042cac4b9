use crate::dto::SendMailRequest;
use crate::sendgrid::SendGridClient;

use axum::body::Body;
use axum::response::Response;

pub struct MailService {
    client: SendGridClient,
}

#[derive(Debug, thiserror::Error)]
pub enum MailServiceError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Provider request timed out: {0}")]
    ProviderTimeout(reqwest::Error),

    #[error("Failed to deliver request to provider: {0}")]
    ProviderUnreachable(reqwest::Error),

    #[error("Failed to read provider response: {0}")]
    ProviderBody(reqwest::Error),

    #[error("Failed to build relay response: {0}")]
    ResponseBuild(#[from] axum::http::Error),
}

impl MailService {
    pub fn new(client: SendGridClient) -> Self {
        MailService { client }
    }

    pub async fn relay(&self, request: SendMailRequest) -> Result<Response, MailServiceError> {
        validate(&request)?;

        tracing::info!(
            "Relaying mail to {} recipient(s) with subject '{}'",
            request.recipients.len(),
            request.subject
        );

        let upstream = self.client.send(&request).await?;

        let status = upstream.status();
        tracing::debug!("Provider response status: {}", status);

        let response_headers = upstream.headers().clone();
        let response_body = upstream
            .bytes()
            .await
            .map_err(MailServiceError::ProviderBody)?;

        let mut response = Response::builder()
            .status(status)
            .body(Body::from(response_body))?;

        // Copy headers, but skip ones that should be set by the response builder
        let headers_to_skip = [
            "content-length",
            "transfer-encoding",
            "connection",
            "keep-alive",
        ];
        for (name, value) in response_headers.iter() {
            let name_lower = name.as_str().to_lowercase();
            if !headers_to_skip.contains(&name_lower.as_str()) {
                response.headers_mut().append(name, value.clone());
            }
        }

        Ok(response)
    }
}

fn validate(request: &SendMailRequest) -> Result<(), MailServiceError> {
    if request.subject.is_empty() {
        return Err(MailServiceError::MissingField("subject"));
    }

    if request.recipients.is_empty() {
        return Err(MailServiceError::MissingField("recipients"));
    }

    if request.content.is_empty() {
        return Err(MailServiceError::MissingField("content"));
    }

    Ok(())
}
