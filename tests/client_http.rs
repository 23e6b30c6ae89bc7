mod common;

use mockito::Matcher;
use serde_json::json;
use sid_url_manager::domain::ports::ShortUrlApi;
use sid_url_manager::error::{ApiError, ErrorKind};
use sid_url_manager::infrastructure::http::SidApiClient;

#[tokio::test]
async fn test_list_page_sends_auth_headers_and_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = common::mock_list(
        &mut server,
        2,
        vec![common::record_json(11, "eleven"), common::record_json(12, "twelve")],
    )
    .await;

    let client = common::client_for(&server);
    let records = client.list_page(&common::credentials(), 2).await.unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "11");
    assert_eq!(records[0].short, "eleven");
    assert_eq!(records[1].long_url, "https://example.com/twelve");
}

#[tokio::test]
async fn test_list_page_without_data_is_protocol_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client.list_page(&common::credentials(), 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_count_total() {
    let mut server = mockito::Server::new_async().await;
    let mock = common::mock_count(&mut server, 25).await;

    let client = common::client_for(&server);
    let total = client.count_total(&common::credentials()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(total, 25);
}

#[tokio::test]
async fn test_count_without_total_is_protocol_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links")
        .match_query(Matcher::UrlEncoded("count_only".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client.count_total(&common::credentials()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_forbidden_is_auth_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"message": "invalid_credentials"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client.count_total(&common::credentials()).await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(_)));
    assert_eq!(
        err.to_string(),
        "Access denied. Please check your authentication credentials."
    );
}

#[tokio::test]
async fn test_create_short_posts_long_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/links")
        .match_header("X-Auth-Id", common::AUTH_ID)
        .match_header("X-Auth-Key", common::AUTH_KEY)
        .match_body(Matcher::Json(json!({ "long_url": "https://www.rust-lang.org" })))
        .with_status(201)
        .with_body(r#"{"code": 201, "message": "created", "data": {"short": "rust"}}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let short = client
        .create_short(&common::credentials(), "https://www.rust-lang.org")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(short, "rust");
}

#[tokio::test]
async fn test_create_without_short_is_protocol_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/links")
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {}}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .create_short(&common::credentials(), "https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_create_limit_reached_status_is_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/links")
        .with_status(422)
        .with_body(r#"{"code": 422, "message": "change_shortname_limit_reached"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .create_short(&common::credentials(), "https://example.com")
        .await
        .unwrap_err();
    assert!(err.is_rate_limit());
}

#[tokio::test]
async fn test_create_limit_reached_in_success_body_is_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/links")
        .with_status(200)
        .with_body(r#"{"code": "422", "message": "change_shortname_limit_reached"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .create_short(&common::credentials(), "https://example.com")
        .await
        .unwrap_err();
    assert!(err.is_rate_limit());
}

#[tokio::test]
async fn test_create_invalid_url_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/links")
        .expect(0)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .create_short(&common::credentials(), "example.com")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_rename_short_acknowledged() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/links/42")
        .match_body(Matcher::Json(json!({
            "short": "docs",
            "long_url": "https://docs.rs",
        })))
        .with_status(200)
        .with_body(r#"{"code": 200, "message": "link_updated"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .rename_short(&common::credentials(), "42", "  docs ", "https://docs.rs")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_rename_id_is_a_single_encoded_segment() {
    let mut server = mockito::Server::new_async().await;
    let escaped = server
        .mock("POST", "/admin")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let rename = server
        .mock("POST", "/links/..%2Fadmin%3Fx=1")
        .match_header("X-Auth-Id", common::AUTH_ID)
        .with_status(200)
        .with_body(r#"{"code": 200, "message": "link_updated"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .rename_short(&common::credentials(), "../admin?x=1", "docs", "https://docs.rs")
        .await
        .unwrap();

    rename.assert_async().await;
    escaped.assert_async().await;
}

#[tokio::test]
async fn test_rename_dot_id_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .rename_short(&common::credentials(), "..", "docs", "https://docs.rs")
        .await
        .unwrap_err();

    any.assert_async().await;
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_count_total_as_numeric_string() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links")
        .match_query(Matcher::UrlEncoded("count_only".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"total": "25"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let total = client.count_total(&common::credentials()).await.unwrap();
    assert_eq!(total, 25);
}

#[tokio::test]
async fn test_rename_limit_reached_is_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/links/42")
        .with_status(422)
        .with_body(r#"{"code": 422, "message": "change_shortname_limit_reached"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .rename_short(&common::credentials(), "42", "docs", "https://docs.rs")
        .await
        .unwrap_err();
    assert!(err.is_rate_limit());
}

#[tokio::test]
async fn test_rename_limit_token_in_success_body_is_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/links/42")
        .with_status(200)
        .with_body(r#"{"code": 422, "message": "change_shortname_limit_reached"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .rename_short(&common::credentials(), "42", "docs", "https://docs.rs")
        .await
        .unwrap_err();
    assert!(err.is_rate_limit());
}

#[tokio::test]
async fn test_rename_unexpected_ack_is_protocol_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/links/42")
        .with_status(200)
        .with_body(r#"{"code": 200, "message": "ok"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .rename_short(&common::credentials(), "42", "docs", "https://docs.rs")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_server_error_is_remote() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"message": "database unavailable"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client.list_page(&common::credentials(), 1).await.unwrap_err();

    assert!(matches!(err, ApiError::Remote { status: 500, .. }));
    assert_eq!(err.to_string(), "Unexpected Error: database unavailable");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = SidApiClient::with_client(reqwest::Client::new(), "http://127.0.0.1:1");
    let err = client.count_total(&common::credentials()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(
        err.to_string(),
        "No response from the server. Please check your connection."
    );
}
