//! HTTP client for the assistant backend.
//!
//! One JSON POST per prompt. The body is parsed into [`AssistantResponse`]
//! and validated here, so the store only ever sees well-formed file maps.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::core::Service;
use crate::kernel::services::ports::{
    AssistantRequest, AssistantResponse, AssistantSettings, ResponseError,
};
use crate::kernel::services::KernelServiceContext;
use crate::kernel::Action;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server error: HTTP {status} - {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    Invalid(#[from] ResponseError),
}

#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    endpoint: String,
}

impl AssistantService {
    pub fn new(settings: &AssistantSettings) -> Result<Self, AssistantError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(
        &self,
        request: &AssistantRequest,
    ) -> Result<AssistantResponse, AssistantError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }

    /// Sends `request` in the background and posts the outcome for `ticket_id`.
    pub fn spawn_request(
        &self,
        ctx: &KernelServiceContext,
        ticket_id: u64,
        request: AssistantRequest,
    ) {
        let service = self.clone();
        let task_ctx = ctx.clone();
        ctx.spawn_future(async move {
            tracing::info!(
                ticket_id,
                project = ?request.project_name,
                files = request.files.len(),
                "assistant request"
            );
            match service.generate(&request).await {
                Ok(response) => {
                    tracing::debug!(
                        ticket_id,
                        messages = response.messages().len(),
                        "assistant replied"
                    );
                    task_ctx.dispatch(Action::AssistantReplied {
                        ticket_id,
                        response,
                    });
                }
                Err(e) => {
                    tracing::warn!(ticket_id, error = %e, "assistant request failed");
                    task_ctx.dispatch(Action::AssistantFailed {
                        ticket_id,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

impl Service for AssistantService {
    fn name(&self) -> &'static str {
        "AssistantService"
    }
}

pub fn parse_response(body: &str) -> Result<AssistantResponse, AssistantError> {
    let response: AssistantResponse = serde_json::from_str(body)?;
    response.validate()?;
    Ok(response)
}
