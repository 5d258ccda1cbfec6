use crate::{
    apis::{lote_cobv::ListLotesCobVRequest, PixClientInner},
    Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX batches of charges with due date (`/lotecobv`) APIs client.
#[derive(Clone, Debug)]
pub struct LoteCobVApi {
    inner: Arc<PixClientInner>,
}

impl LoteCobVApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Creates (or replaces) a batch of charges with due date.
    ///
    /// The bank processes the batch asynchronously and usually replies `202 Accepted`
    /// with an empty body, in which case `None` is returned.
    #[tracing::instrument(name = "Create LoteCobV", skip(self, body))]
    pub async fn create<B>(&self, id: &str, body: &B) -> Result<Option<Value>, Error>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .client
            .put(self.inner.url(&format!("/lotecobv/{}", encode(id)))?)
            .json(body)
            .send()
            .await?;

        optional_json(response).await
    }

    /// Reviews specific charges of an existing batch.
    ///
    /// Returns `None` when the bank accepts the review without a body.
    #[tracing::instrument(name = "Review LoteCobV", skip(self, body))]
    pub async fn review<B>(&self, id: &str, body: &B) -> Result<Option<Value>, Error>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .client
            .patch(self.inner.url(&format!("/lotecobv/{}", encode(id)))?)
            .json(body)
            .send()
            .await?;

        optional_json(response).await
    }

    #[tracing::instrument(name = "Get LoteCobV", skip(self))]
    pub async fn get(&self, id: &str) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url(&format!("/lotecobv/{}", encode(id)))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "List LotesCobV", skip(self))]
    pub async fn list(&self, request: &ListLotesCobVRequest) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url("/lotecobv")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

/// Decodes the JSON body of `response`, if it has one.
async fn optional_json(response: reqwest::Response) -> Result<Option<Value>, Error> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| Error::Other(anyhow::Error::new(e).context("Invalid LoteCobV response")))
}
