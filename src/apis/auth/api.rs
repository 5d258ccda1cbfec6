use crate::{
    apis::{auth::AccessToken, PixClientInner},
    Error,
};
use std::sync::Arc;

/// PIX authentication API client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    inner: Arc<PixClientInner>,
}

impl AuthApi {
    pub(crate) fn new(inner: Arc<PixClientInner>) -> Self {
        Self { inner }
    }

    /// Returns the current [`AccessToken`](crate::apis::auth::AccessToken) used to authenticate to
    /// the PIX APIs.
    /// If the client is not authenticated yet, or the cached token is about to expire,
    /// a new token request using the configured credentials will be fired.
    pub async fn get_access_token(&self) -> Result<AccessToken, Error> {
        // Just delegate to the authenticator
        self.inner.authenticator.get_access_token().await
    }
}
