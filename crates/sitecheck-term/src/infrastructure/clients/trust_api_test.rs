use mockito::Matcher;

use super::*;

const REPORT_BODY: &str = r#"{
    "host": "example.com",
    "trustscore": 87,
    "trustsignal": {"domain": 90, "ownership": 70, "encryption": 100, "website": 88}
}"#;

fn settings(url: &str, api_key: &str) -> ClientSettings {
    return ClientSettings {
        endpoint: format!("{url}/api/early"),
        query_field: "query".to_string(),
        api_key: api_key.to_string(),
    };
}

#[tokio::test]
async fn it_returns_the_decoded_report() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/early")
        .match_header("content-type", "application/json")
        .match_header("authorization", "secret-123")
        .match_body(Matcher::Json(serde_json::json!({"query": "example.com"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REPORT_BODY)
        .create_async()
        .await;

    let client = TrustApi::new(settings(&server.url(), "secret-123"));
    let res = client.fetch("example.com").await;

    mock.assert_async().await;
    match res {
        FetchResult::Success(report) => {
            assert_eq!(report.host, "example.com");
            assert_eq!(report.trustscore, 87);
            assert_eq!(report.trustsignal.encryption, 100);
        }
        FetchResult::Failure(message) => panic!("unexpected failure: {message}"),
    }
}

#[tokio::test]
async fn it_skips_authorization_without_a_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/early")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(REPORT_BODY)
        .create_async()
        .await;

    let client = TrustApi::new(settings(&server.url(), ""));
    let res = client.fetch("example.com").await;

    mock.assert_async().await;
    assert!(matches!(res, FetchResult::Success(_)));
}

#[tokio::test]
async fn it_fails_with_the_status_line_even_when_the_body_decodes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/early")
        .with_status(404)
        .with_body(REPORT_BODY)
        .create_async()
        .await;

    let client = TrustApi::new(settings(&server.url(), ""));
    let res = client.fetch("example.com").await;

    assert_eq!(res, FetchResult::Failure("404 Not Found".to_string()));
}

#[tokio::test]
async fn it_treats_other_success_codes_as_failures() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/early")
        .with_status(201)
        .with_body(REPORT_BODY)
        .create_async()
        .await;

    let client = TrustApi::new(settings(&server.url(), ""));
    let res = client.fetch("example.com").await;

    assert_eq!(res, FetchResult::Failure("201 Created".to_string()));
}

#[tokio::test]
async fn it_reports_the_decode_error_before_the_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/early")
        .with_status(500)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = TrustApi::new(settings(&server.url(), ""));
    let res = client.fetch("example.com").await;

    let expected = serde_json::from_str::<TrustReport>("<html>oops</html>")
        .unwrap_err()
        .to_string();
    assert_eq!(res, FetchResult::Failure(expected));
}

#[tokio::test]
async fn it_fails_on_missing_fields() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/early")
        .with_status(200)
        .with_body(r#"{"host": "example.com"}"#)
        .create_async()
        .await;

    let client = TrustApi::new(settings(&server.url(), ""));
    let res = client.fetch("example.com").await;

    match res {
        FetchResult::Failure(message) => assert!(message.contains("missing field `trustscore`")),
        FetchResult::Success(_) => panic!("expected a decode failure"),
    }
}

#[tokio::test]
async fn it_fails_on_transport_errors() {
    // Nothing listens on port 1.
    let client = TrustApi::new(settings("http://127.0.0.1:1", ""));
    let res = client.fetch("example.com").await;

    assert!(matches!(res, FetchResult::Failure(message) if !message.is_empty()));
}

#[tokio::test]
async fn it_fails_on_a_malformed_endpoint() {
    let mut settings = settings("", "");
    settings.endpoint = "::not a url::".to_string();

    let client = TrustApi::new(settings);
    let res = client.fetch("example.com").await;

    assert!(matches!(res, FetchResult::Failure(message) if message.starts_with("invalid endpoint")));
}
