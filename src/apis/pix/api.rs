use crate::{
    apis::{ensure_single_document, pix::ListPixRequest, PixClientInner},
    Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX received payments (`/pix`) APIs client.
#[derive(Clone, Debug)]
pub struct PixApi {
    inner: Arc<PixClientInner>,
}

impl PixApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Lists PIX received in the given period.
    #[tracing::instrument(name = "List Pix", skip(self))]
    pub async fn list(&self, request: &ListPixRequest) -> Result<Value, Error> {
        ensure_single_document(request.cpf.as_deref(), request.cnpj.as_deref())?;

        let res = self
            .inner
            .client
            .get(self.inner.url("/pix")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets a received PIX by its end-to-end identifier.
    #[tracing::instrument(name = "Get Pix", skip(self))]
    pub async fn get(&self, e2eid: &str) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url(&format!("/pix/{}", encode(e2eid)))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Requests a refund of a received PIX.
    ///
    /// `id` is chosen by the caller and identifies the refund among all the refunds of the same
    /// PIX.
    #[tracing::instrument(name = "Request Refund", skip(self, body))]
    pub async fn request_refund<B>(&self, e2eid: &str, id: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .put(self.inner.url(&format!(
                "/pix/{}/devolucao/{}",
                encode(e2eid),
                encode(id)
            ))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Refund", skip(self))]
    pub async fn get_refund(&self, e2eid: &str, id: &str) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url(&format!(
                "/pix/{}/devolucao/{}",
                encode(e2eid),
                encode(id)
            ))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
