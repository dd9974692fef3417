mod trust_api;

pub use trust_api::TrustApi;
