use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;

use contactform::{EmailJsClient, EmailJsConfig, EmailSender, FormPayload, SendError};

fn client_for(server: &MockServer) -> EmailJsClient {
    EmailJsClient::new(
        EmailJsConfig::new("service_test", "template_test", "public_test")
            .with_api_url(server.base_url()),
    )
}

/// A valid submission is one POST carrying the three identifiers and the values
#[tokio::test]
async fn test_send_posts_identifiers_and_values() -> Result<()> {
    let server = MockServer::start_async().await;

    let send_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body(json!({
                    "service_id": "service_test",
                    "template_id": "template_test",
                    "user_id": "public_test",
                    "template_params": {
                        "user_name": "Jo",
                        "user_email": "jo@example.com",
                        "message": "hello there"
                    }
                }));
            then.status(200).body("OK");
        })
        .await;

    let client = client_for(&server);
    client
        .send(&FormPayload::new("Jo", "jo@example.com", "hello there"))
        .await?;

    send_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_rejected_send_surfaces_status() -> Result<()> {
    let server = MockServer::start_async().await;

    let send_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(400).body("The Public Key is invalid");
        })
        .await;

    let client = client_for(&server);
    let err = client
        .send(&FormPayload::new("Jo", "jo@example.com", "hi"))
        .await
        .unwrap_err();

    match err {
        SendError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The Public Key is invalid");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(send_mock.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Nothing listens on port 9 of localhost
    let client = EmailJsClient::new(
        EmailJsConfig::new("s", "t", "p").with_api_url("http://127.0.0.1:9"),
    );
    let err = client.send(&FormPayload::default()).await.unwrap_err();
    assert!(matches!(err, SendError::Transport(_)));
}
