use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrustSignal {
    pub domain: i64,
    pub ownership: i64,
    pub encryption: i64,
    pub website: i64,
}

/// Decoded trust-check response. Unknown fields are ignored, missing ones fail decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrustReport {
    pub host: String,
    pub trustscore: i64,
    pub trustsignal: TrustSignal,
}

impl TrustReport {
    /// Indented JSON with a single-space indent, fields in declaration order.
    pub fn to_pretty_text(&self) -> String {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

        // Plain structs of strings and integers cannot fail to serialize.
        if self.serialize(&mut ser).is_err() {
            return String::new();
        }

        return String::from_utf8_lossy(&buf).to_string();
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Construction(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Read(String),
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Status(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResult {
    Success(TrustReport),
    Failure(String),
}

impl From<Result<TrustReport, FetchError>> for FetchResult {
    fn from(res: Result<TrustReport, FetchError>) -> FetchResult {
        match res {
            Ok(report) => FetchResult::Success(report),
            Err(err) => FetchResult::Failure(err.to_string()),
        }
    }
}
