use crate::{
    apis::{webhook::ConfigureWebhookRequest, PixClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;

/// PIX recurrences webhook (`/webhookrec`) APIs client.
#[derive(Clone, Debug)]
pub struct WebhookRecApi {
    inner: Arc<PixClientInner>,
}

impl WebhookRecApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Configure WebhookRec", skip(self))]
    pub async fn configure(&self, webhook_url: &str) -> Result<(), Error> {
        self.inner
            .client
            .put(self.inner.url("/webhookrec")?)
            .json(&ConfigureWebhookRequest {
                webhook_url: webhook_url.to_string(),
            })
            .send()
            .await?;

        Ok(())
    }

    #[tracing::instrument(name = "Get WebhookRec", skip(self))]
    pub async fn get(&self) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url("/webhookrec")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Delete WebhookRec", skip(self))]
    pub async fn delete(&self) -> Result<(), Error> {
        self.inner
            .client
            .delete(self.inner.url("/webhookrec")?)
            .send()
            .await?;

        Ok(())
    }
}
