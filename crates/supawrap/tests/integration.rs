//! End-to-end flow through the facade: sign in, adopt the session token,
//! then hit a table with it.

use mockito::Matcher;
use serde_json::json;
use supawrap::prelude::*;

#[tokio::test]
async fn sign_in_then_query_with_session_token() {
    let mut server = mockito::Server::new_async().await;

    let token_mock = server
        .mock("POST", "/auth/v1/token")
        .match_query(Matcher::UrlEncoded("grant_type".into(), "password".into()))
        .match_header("authorization", "Bearer anon-key")
        .with_status(200)
        .with_body(
            r#"{
                "access_token": "session-jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "rt"
            }"#,
        )
        .create_async()
        .await;

    let table_mock = server
        .mock("GET", "/rest/v1/todos")
        .match_header("authorization", "Bearer session-jwt")
        .match_query(Matcher::UrlEncoded("done".into(), "eq.false".into()))
        .with_status(200)
        .with_body(r#"[{"id":1,"title":"ship it","done":false}]"#)
        .create_async()
        .await;

    let client = Client::new(ClientConfig::new(server.url(), "anon-key")).unwrap();

    let session = client.sign_in("user@example.com", "password").await.unwrap();
    client.set_token(session.access_token.clone());
    assert_eq!(client.token().as_deref(), Some("session-jwt"));

    let mut params = QueryParams::new();
    params.insert("done".into(), filter::eq("false"));
    let body = client.get("todos", Some(&params)).await.unwrap();

    assert_eq!(
        body,
        ResponseBody::Json(json!([{"id": 1, "title": "ship it", "done": false}]))
    );
    token_mock.assert_async().await;
    table_mock.assert_async().await;
}

#[tokio::test]
async fn sign_out_clears_session_scoped_state_only_when_asked() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/v1/logout")
        .with_status(204)
        .create_async()
        .await;

    let client = Client::new(ClientConfig::new(server.url(), "anon-key")).unwrap();
    client.set_token("session-jwt");

    // sign_out hits the backend; the stored token stays until the caller
    // clears it explicitly.
    client.sign_out().await.unwrap();
    assert_eq!(client.token().as_deref(), Some("session-jwt"));

    client.clear_token();
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn two_clients_hold_independent_tokens() {
    let a = Client::new(ClientConfig::new("https://a.example.com", "key-a")).unwrap();
    let b = Client::new(ClientConfig::new("https://b.example.com", "key-b")).unwrap();

    a.set_token("token-a");
    b.set_token("token-b");

    assert_eq!(a.token().as_deref(), Some("token-a"));
    assert_eq!(b.token().as_deref(), Some("token-b"));
}
