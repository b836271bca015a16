use herald_adapters::{config::test::email_client::SENDER, email::MockEmailSender};
use herald_core::{Email, EmailMessage, UserStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{TestApp, postmark_sender};

#[tokio::test]
async fn register_returns_201_and_sends_one_welcome_email() {
    let app = TestApp::with_mock_sender().await;

    let response = app
        .post_register(&json!({ "email": "user@example.com", "name": "Ada" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "success" }));

    let recipient = Email::parse("user@example.com").unwrap();
    assert_eq!(
        app.email_sender.calls().await,
        vec![EmailMessage::new(recipient.clone(), "Welcome", "Thank you!")]
    );
    assert!(app.user_store.get_user(&recipient).await.is_ok());
}

#[tokio::test]
async fn register_returns_400_for_an_invalid_email() {
    let app = TestApp::with_mock_sender().await;

    let response = app
        .post_register(&json!({ "email": "not-an-email", "name": "Ada" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.email_sender.call_count().await, 0);
}

#[tokio::test]
async fn register_returns_409_for_a_duplicate_user() {
    let app = TestApp::with_mock_sender().await;
    let body = json!({ "email": "user@example.com", "name": "Ada" });

    app.post_register(&body).await;
    let response = app.post_register(&body).await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(app.email_sender.call_count().await, 1);
}

#[tokio::test]
async fn register_returns_502_when_the_notification_fails() {
    let recipient = Email::parse("bounce@example.com").unwrap();
    let app = TestApp::spawn(MockEmailSender::failing_for(recipient.clone())).await;

    let response = app
        .post_register(&json!({ "email": "bounce@example.com", "name": "Ada" }))
        .await;

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Notification failed"));
    assert_eq!(app.email_sender.call_count().await, 1);
    assert!(app.user_store.get_user(&recipient).await.is_ok());
}

#[tokio::test]
async fn register_forwards_the_welcome_email_to_postmark() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(postmark_sender(&mock_server)).await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .and(header("X-Postmark-Server-Token", "server-token"))
        .and(body_json(json!({
            "From": SENDER,
            "To": "user@example.com",
            "Subject": "Welcome",
            "HtmlBody": "Thank you!",
            "TextBody": "Thank you!",
            "MessageStream": "outbound",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = app
        .post_register(&json!({ "email": "user@example.com", "name": "Ada" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn register_returns_502_when_postmark_fails() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(postmark_sender(&mock_server)).await;

    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = app
        .post_register(&json!({ "email": "user@example.com", "name": "Ada" }))
        .await;

    assert_eq!(response.status().as_u16(), 502);
}
