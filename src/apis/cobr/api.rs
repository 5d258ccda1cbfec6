use crate::{
    apis::{cobr::ListCobRsRequest, ensure_single_document, PixClientInner},
    Error,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// PIX recurring charges (`/cobr`) APIs client.
#[derive(Clone, Debug)]
pub struct CobRApi {
    inner: Arc<PixClientInner>,
}

impl CobRApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a recurring charge identified by the given `txid`.
    #[tracing::instrument(name = "Create CobR with txid", skip(self, body))]
    pub async fn create_with_txid<B>(&self, txid: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .put(self.inner.url(&format!("/cobr/{}", encode(txid)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Creates a recurring charge, letting the bank assign its `txid`.
    #[tracing::instrument(name = "Create CobR", skip(self, body))]
    pub async fn create<B>(&self, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .post(self.inner.url("/cobr")?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Review CobR", skip(self, body))]
    pub async fn review<B>(&self, txid: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .patch(self.inner.url(&format!("/cobr/{}", encode(txid)))?)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get CobR", skip(self))]
    pub async fn get(&self, txid: &str) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.url(&format!("/cobr/{}", encode(txid)))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "List CobRs", skip(self))]
    pub async fn list(&self, request: &ListCobRsRequest) -> Result<Value, Error> {
        ensure_single_document(request.cpf.as_deref(), request.cnpj.as_deref())?;

        let res = self
            .inner
            .client
            .get(self.inner.url("/cobr")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Asks the bank to retry the settlement of a failed recurring charge on the given date.
    ///
    /// Sent as POST `/cobr/{txid}/retentativa/{YYYY-MM-DD}`, the route defined by the BCB API.
    /// Older gateways expose the same operation as POST `/rec/{txid}/{YYYY-MM-DD}`.
    #[tracing::instrument(name = "Request CobR retry", skip(self))]
    pub async fn request_retry(&self, txid: &str, date: NaiveDate) -> Result<Value, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.url(&format!(
                "/cobr/{}/retentativa/{}",
                encode(txid),
                date.format("%Y-%m-%d")
            ))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
