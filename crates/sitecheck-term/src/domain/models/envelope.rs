use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use reqwest::Url;

use super::ClientSettings;
use super::FetchError;

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

/// A fully built outbound request. Built fresh for every query.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl RequestEnvelope {
    pub fn build(settings: &ClientSettings, query: &str) -> Result<RequestEnvelope, FetchError> {
        let url = Url::parse(&settings.endpoint)
            .map_err(|err| FetchError::Construction(format!("invalid endpoint: {err}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !settings.api_key.is_empty() {
            let mut value = HeaderValue::from_str(&settings.api_key)
                .map_err(|err| FetchError::Construction(format!("invalid api key: {err}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut payload = serde_json::Map::new();
        payload.insert(
            settings.query_field.to_string(),
            serde_json::Value::String(query.to_string()),
        );
        let body = serde_json::to_string(&payload)
            .map_err(|err| FetchError::Construction(err.to_string()))?;

        return Ok(RequestEnvelope {
            method: Method::POST,
            url,
            headers,
            body,
        });
    }
}
