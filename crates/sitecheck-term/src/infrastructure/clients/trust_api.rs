use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::models::ClientSettings;
use crate::domain::models::FetchError;
use crate::domain::models::FetchResult;
use crate::domain::models::RequestClient;
use crate::domain::models::RequestEnvelope;
use crate::domain::models::TrustReport;

#[cfg(test)]
#[path = "trust_api_test.rs"]
mod tests;

pub struct TrustApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl TrustApi {
    pub fn new(settings: ClientSettings) -> TrustApi {
        return TrustApi {
            settings,
            client: reqwest::Client::new(),
        };
    }

    async fn send(&self, query: &str) -> Result<TrustReport, FetchError> {
        let envelope = RequestEnvelope::build(&self.settings, query)?;

        let response = self
            .client
            .request(envelope.method, envelope.url)
            .headers(envelope.headers)
            .body(envelope.body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "trust api is not reachable");
                return FetchError::Transport(err.to_string());
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| return FetchError::Read(err.to_string()))?;

        // The body is decoded before the status is checked, so a malformed
        // error page reports the decode error.
        let report = serde_json::from_slice::<TrustReport>(&body).map_err(|err| {
            tracing::error!(status = status.as_u16(), error = %err, "trust api response did not decode");
            return FetchError::Decode(err.to_string());
        })?;

        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "trust api returned an error status");
            return Err(FetchError::Status(status.to_string()));
        }

        return Ok(report);
    }
}

#[async_trait]
impl RequestClient for TrustApi {
    async fn fetch(&self, query: &str) -> FetchResult {
        return self.send(query).await.into();
    }
}
