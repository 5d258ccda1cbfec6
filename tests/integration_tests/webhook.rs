use crate::common::{test_context::TestContext, TEST_CHAVE};
use pix_rust::{apis::webhook::ListWebhooksRequest, Error};

static WEBHOOK_URL: &str = "https://pix.example.com/webhook";

#[tokio::test]
async fn configure_get_and_delete() {
    let ctx = TestContext::start().await;

    ctx.client.webhook.configure(TEST_CHAVE, WEBHOOK_URL).await.unwrap();

    let webhook = ctx.client.webhook.get(TEST_CHAVE).await.unwrap();
    assert_eq!(webhook["webhookUrl"], WEBHOOK_URL);
    assert_eq!(webhook["chave"], TEST_CHAVE);

    let webhooks = ctx
        .client
        .webhook
        .list(&ListWebhooksRequest::default())
        .await
        .unwrap();
    assert!(webhooks["webhooks"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w["chave"] == TEST_CHAVE));

    ctx.client.webhook.delete(TEST_CHAVE).await.unwrap();

    let err = ctx
        .client
        .webhook
        .get(TEST_CHAVE)
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::ApiError(e) if e.is_not_found()));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn insecure_webhook_urls_are_rejected() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .webhook
        .configure(TEST_CHAVE, "http://pix.example.com/webhook")
        .await
        .expect_err("Expected error");

    match err {
        Error::ApiError(e) => {
            assert!(e.is_validation());
            assert_eq!(e.violacoes[0].propriedade.as_deref(), Some("webhook.webhookUrl"));
        }
        e => panic!("Unexpected error: {}", e),
    }
}
