use crate::{
    apis::{ensure_single_document, rec::ListRecsRequest, PixClientInner},
    Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX recurrences (`/rec`) APIs client.
#[derive(Clone, Debug)]
pub struct RecApi {
    inner: Arc<PixClientInner>,
}

impl RecApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a recurrence identified by `id_rec`.
    #[tracing::instrument(name = "Create Rec", skip(self, body))]
    pub async fn create<B>(&self, id_rec: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .put(self.inner.url(&format!("/rec/{}", encode(id_rec)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Reviews (partially updates) an existing recurrence, e.g. to cancel it.
    #[tracing::instrument(name = "Review Rec", skip(self, body))]
    pub async fn review<B>(&self, id_rec: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .patch(self.inner.url(&format!("/rec/{}", encode(id_rec)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets a recurrence.
    ///
    /// When `txid` is set, the bank also returns the location of the immediate charge
    /// attached to the recurrence.
    #[tracing::instrument(name = "Get Rec", skip(self))]
    pub async fn get(&self, id_rec: &str, txid: Option<&str>) -> Result<Value, Error> {
        let mut request = self
            .inner
            .client
            .get(self.inner.url(&format!("/rec/{}", encode(id_rec)))?);
        if let Some(txid) = txid {
            request = request.query(&[("txid", txid)]);
        }

        let res = request.send().await?.json().await?;

        Ok(res)
    }

    #[tracing::instrument(name = "List Recs", skip(self))]
    pub async fn list(&self, request: &ListRecsRequest) -> Result<Value, Error> {
        ensure_single_document(request.cpf.as_deref(), request.cnpj.as_deref())?;

        let res = self
            .inner
            .client
            .get(self.inner.url("/rec")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
