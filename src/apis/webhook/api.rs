use crate::{
    apis::{
        webhook::{ConfigureWebhookRequest, ListWebhooksRequest},
        PixClientInner,
    },
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX key webhooks (`/webhook`) APIs client.
#[derive(Clone, Debug)]
pub struct WebhookApi {
    inner: Arc<PixClientInner>,
}

impl WebhookApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Configures the URL notified whenever a PIX is received on `chave`.
    #[tracing::instrument(name = "Configure Webhook", skip(self))]
    pub async fn configure(&self, chave: &str, webhook_url: &str) -> Result<(), Error> {
        self.inner
            .client
            .put(self.inner.url(&format!("/webhook/{}", encode(chave)))?)
            .json(&ConfigureWebhookRequest {
                webhook_url: webhook_url.to_string(),
            })
            .send()
            .await?;

        Ok(())
    }

    #[tracing::instrument(name = "Get Webhook", skip(self))]
    pub async fn get(&self, chave: &str) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url(&format!("/webhook/{}", encode(chave)))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Delete Webhook", skip(self))]
    pub async fn delete(&self, chave: &str) -> Result<(), Error> {
        self.inner
            .client
            .delete(self.inner.url(&format!("/webhook/{}", encode(chave)))?)
            .send()
            .await?;

        Ok(())
    }

    /// Lists the webhooks configured for all the keys of the account.
    #[tracing::instrument(name = "List Webhooks", skip(self))]
    pub async fn list(&self, request: &ListWebhooksRequest) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url("/webhook")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
