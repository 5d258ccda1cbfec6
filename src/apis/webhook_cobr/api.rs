use crate::{
    apis::{webhook::ConfigureWebhookRequest, PixClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;

/// PIX recurring charges webhook (`/webhookcobr`) APIs client.
#[derive(Clone, Debug)]
pub struct WebhookCobRApi {
    inner: Arc<PixClientInner>,
}

impl WebhookCobRApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Configure WebhookCobR", skip(self))]
    pub async fn configure(&self, webhook_url: &str) -> Result<(), Error> {
        self.inner
            .client
            .put(self.inner.url("/webhookcobr")?)
            .json(&ConfigureWebhookRequest {
                webhook_url: webhook_url.to_string(),
            })
            .send()
            .await?;

        Ok(())
    }

    #[tracing::instrument(name = "Get WebhookCobR", skip(self))]
    pub async fn get(&self) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url("/webhookcobr")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Delete WebhookCobR", skip(self))]
    pub async fn delete(&self) -> Result<(), Error> {
        self.inner
            .client
            .delete(self.inner.url("/webhookcobr")?)
            .send()
            .await?;

        Ok(())
    }
}
