use crate::{apis::PixClientInner, Error};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX recurrence requests (`/solicrec`) APIs client.
#[derive(Clone, Debug)]
pub struct SolicRecApi {
    inner: Arc<PixClientInner>,
}

impl SolicRecApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Asks the payer to confirm a recurrence. The bank assigns the request identifier.
    #[tracing::instrument(name = "Create SolicRec", skip(self, body))]
    pub async fn create<B>(&self, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .post(self.inner.url("/solicrec")?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get SolicRec", skip(self))]
    pub async fn get(&self, id: &str) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url(&format!("/solicrec/{}", encode(id)))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Reviews a pending recurrence request, e.g. to cancel it.
    #[tracing::instrument(name = "Review SolicRec", skip(self, body))]
    pub async fn review<B>(&self, id: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .patch(self.inner.url(&format!("/solicrec/{}", encode(id)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
