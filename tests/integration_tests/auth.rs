use crate::common::test_context::TestContext;

#[tokio::test]
async fn get_access_token() {
    let ctx = TestContext::start().await;

    let access_token = ctx.client.auth.get_access_token().await.unwrap();

    assert!(!access_token.token().expose_secret().is_empty());
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn access_token_is_shared_across_apis() {
    let ctx = TestContext::start().await;

    ctx.client.auth.get_access_token().await.unwrap();
    ctx.client.webhook.list(&Default::default()).await.unwrap();
    ctx.client.webhook.list(&Default::default()).await.unwrap();

    assert_eq!(ctx.token_requests(), 1);
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn invalid_credentials() {
    use pix_rust::{apis::auth::Credentials, client::Bank, error::ApiError, Error, PixClient};

    let ctx = TestContext::start().await;

    // Create a new client with a set of invalid credentials pointing to the same mock server
    let client = PixClient::builder(
        Bank::Sicoob,
        Credentials::ClientCredentials {
            client_id: "invalid".to_string(),
            client_secret: Some("invalid".into()),
            scope: None,
        },
    )
    .with_environment(ctx.environment())
    .build()
    .unwrap();

    // Make the request and assert that we got an error
    let err = client
        .auth
        .get_access_token()
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::ApiError(ApiError { title, .. }) if title == "invalid_client"));

    // API calls fail the same way, before reaching the PIX endpoints
    let err = client.cob.get("any-txid", None).await.expect_err("Expected error");
    assert!(matches!(err, Error::ApiError(ApiError { status: 401, .. })));
}
