mod common;

use atcoder_summary::SummaryError;
use atcoder_summary::atcoder::{AtCoderClient, SubmissionSource, submissions_url};
use atcoder_summary::identity::{IdentitySource, RemoteIdentitySource};
use atcoder_summary::worker::deliver::{HttpResponseSink, ResponseSink};
use atcoder_summary::worker::summarize::scrape_user_result;
use common::{page, row};
use httpmock::prelude::*;
use reqwest::Client as HttpClient;
use serde_json::json;
use url::Url;

fn origin(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).unwrap()
}

#[tokio::test]
async fn test_atcoder_client_scrapes_from_configured_origin() {
    let server = MockServer::start_async().await;
    let submissions = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/contests/abc456/submissions")
                .query_param("f.User", "alice_ac");
            then.status(200).header("content-type", "text/html").body(page(&[
                row("2024-05-25 21:03:10+0900", "A - Leap Year", "WA", 1),
                row("2024-05-25 21:05:00+0900", "A - Leap Year", "AC", 2),
            ]));
        })
        .await;

    let client = AtCoderClient::new(HttpClient::new(), origin(&server));
    let result = scrape_user_result(&client, "abc456", "alice_ac").await.unwrap();

    submissions.assert_async().await;
    assert_eq!(result.member, "alice_ac");
    assert_eq!(result.result_summary.len(), 1);
    assert_eq!(result.result_summary[&'A'].status, "AC");
    assert_eq!(
        result.result_summary[&'A'].detail,
        format!("{}/contests/abc456/submissions/2", server.base_url())
    );
}

#[tokio::test]
async fn test_atcoder_error_status_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/contests/abc999/submissions");
            then.status(404).body("Not Found");
        })
        .await;

    let client = AtCoderClient::new(HttpClient::new(), origin(&server));
    let url = submissions_url(client.base_url(), "abc999", "alice_ac").unwrap();
    let err = client.fetch_page(&url).await.unwrap_err();

    assert!(matches!(err, SummaryError::HttpError(_)));
}

#[tokio::test]
async fn test_remote_identity_table_is_loaded() {
    let server = MockServer::start_async().await;
    let table = server
        .mock_async(|when, then| {
            when.method(GET).path("/AtCoderIdMatcher.json");
            then.status(200).json_body(json!([
                { "slackUserId": "U1", "atCoderId": "alice_ac" },
                { "slackUserId": "U2", "atCoderId": "bob" }
            ]));
        })
        .await;

    let url = Url::parse(&server.url("/AtCoderIdMatcher.json")).unwrap();
    let map = RemoteIdentitySource::new(HttpClient::new(), url)
        .load()
        .await
        .unwrap();

    table.assert_async().await;
    assert_eq!(map.resolve(&[]), vec!["alice_ac", "bob"]);
}

#[tokio::test]
async fn test_remote_identity_error_status_is_identity_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/AtCoderIdMatcher.json");
            then.status(500).body("boom");
        })
        .await;

    let url = Url::parse(&server.url("/AtCoderIdMatcher.json")).unwrap();
    let err = RemoteIdentitySource::new(HttpClient::new(), url)
        .load()
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::IdentityError(_)));
}

#[tokio::test]
async fn test_response_sink_posts_json_payload() {
    let server = MockServer::start_async().await;
    let payload = json!({ "response_type": "in_channel", "blocks": [{ "type": "divider" }] });
    let hook = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/commands/T1/1/abc")
                .header("content-type", "application/json")
                .json_body(payload.clone());
            then.status(200).body("ok");
        })
        .await;

    HttpResponseSink::new(HttpClient::new())
        .post(&server.url("/commands/T1/1/abc"), &payload)
        .await
        .unwrap();

    hook.assert_async().await;
}

#[tokio::test]
async fn test_response_sink_error_status_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/commands/T1/1/expired");
            then.status(404).body("expired_url");
        })
        .await;

    let err = HttpResponseSink::new(HttpClient::new())
        .post(&server.url("/commands/T1/1/expired"), &json!({ "blocks": [] }))
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::HttpError(_)));
}
