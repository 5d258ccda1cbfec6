use crate::{
    apis::{cob::ListCobsRequest, ensure_single_document, PixClientInner},
    Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX immediate charges (`/cob`) APIs client.
#[derive(Clone, Debug)]
pub struct CobApi {
    inner: Arc<PixClientInner>,
}

impl CobApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Creates an immediate charge identified by the given `txid`.
    #[tracing::instrument(name = "Create Cob", skip(self, body))]
    pub async fn create<B>(&self, txid: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .put(self.inner.url(&format!("/cob/{}", encode(txid)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Creates an immediate charge, letting the bank assign its `txid`.
    #[tracing::instrument(name = "Create Cob with auto txid", skip(self, body))]
    pub async fn create_with_auto_txid<B>(&self, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .post(self.inner.url("/cob")?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Reviews (partially updates) an existing immediate charge.
    #[tracing::instrument(name = "Review Cob", skip(self, body))]
    pub async fn review<B>(&self, txid: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .patch(self.inner.url(&format!("/cob/{}", encode(txid)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets an immediate charge, optionally at a specific revision.
    #[tracing::instrument(name = "Get Cob", skip(self))]
    pub async fn get(&self, txid: &str, revisao: Option<u32>) -> Result<Value, Error> {
        let mut request = self
            .inner
            .client
            .get(self.inner.url(&format!("/cob/{}", encode(txid)))?);
        if let Some(revisao) = revisao {
            request = request.query(&[("revisao", revisao)]);
        }

        let res = request.send().await?.json().await?;

        Ok(res)
    }

    /// Lists immediate charges matching the given filters.
    #[tracing::instrument(name = "List Cobs", skip(self))]
    pub async fn list(&self, request: &ListCobsRequest) -> Result<Value, Error> {
        ensure_single_document(request.cpf.as_deref(), request.cnpj.as_deref())?;

        let res = self
            .inner
            .client
            .get(self.inner.url("/cob")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
