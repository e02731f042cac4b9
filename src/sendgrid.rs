use crate::config::Config;
use crate::dto::SendMailRequest;
use crate::service::MailServiceError;

use serde::Serialize;

/// SendGrid v3 `mail/send` payload: a single personalization carrying the
/// whole recipient list, and a single text/plain content part.
#[derive(Debug, Serialize)]
pub struct SendGridRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
pub struct EmailAddress {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl SendGridRequest {
    pub fn new(sender: &str, request: &SendMailRequest) -> Self {
        let to = request
            .recipients
            .iter()
            .map(|recipient| EmailAddress {
                email: recipient.clone(),
            })
            .collect();

        SendGridRequest {
            personalizations: vec![Personalization { to }],
            from: EmailAddress {
                email: sender.to_string(),
            },
            subject: request.subject.clone(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: request.content.clone(),
            }],
        }
    }
}

pub struct SendGridClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender: String,
}

impl SendGridClient {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        SendGridClient {
            client,
            api_url: config.api_url,
            api_key: config.api_key,
            sender: config.sender,
        }
    }

    /// Issues the single outbound POST. The client-level timeout covers the
    /// whole call, from connect to the end of the response body.
    pub async fn send(
        &self,
        request: &SendMailRequest,
    ) -> Result<reqwest::Response, MailServiceError> {
        let payload = SendGridRequest::new(&self.sender, request);

        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailServiceError::ProviderTimeout(e)
                } else {
                    MailServiceError::ProviderUnreachable(e)
                }
            })
    }
}
