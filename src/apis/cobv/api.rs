use crate::{
    apis::{cobv::ListCobVsRequest, ensure_single_document, PixClientInner},
    Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX charges with due date (`/cobv`) APIs client.
#[derive(Clone, Debug)]
pub struct CobVApi {
    inner: Arc<PixClientInner>,
}

impl CobVApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a charge with due date identified by the given `txid`.
    #[tracing::instrument(name = "Create CobV", skip(self, body))]
    pub async fn create<B>(&self, txid: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .put(self.inner.url(&format!("/cobv/{}", encode(txid)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Reviews (partially updates) an existing charge with due date.
    #[tracing::instrument(name = "Review CobV", skip(self, body))]
    pub async fn review<B>(&self, txid: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .patch(self.inner.url(&format!("/cobv/{}", encode(txid)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets a charge with due date, optionally at a specific revision.
    #[tracing::instrument(name = "Get CobV", skip(self))]
    pub async fn get(&self, txid: &str, revisao: Option<u32>) -> Result<Value, Error> {
        let mut request = self
            .inner
            .client
            .get(self.inner.url(&format!("/cobv/{}", encode(txid)))?);
        if let Some(revisao) = revisao {
            request = request.query(&[("revisao", revisao)]);
        }

        let res = request.send().await?.json().await?;

        Ok(res)
    }

    /// Lists charges with due date matching the given filters.
    #[tracing::instrument(name = "List CobVs", skip(self))]
    pub async fn list(&self, request: &ListCobVsRequest) -> Result<Value, Error> {
        ensure_single_document(request.cpf.as_deref(), request.cnpj.as_deref())?;

        let res = self
            .inner
            .client
            .get(self.inner.url("/cobv")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
