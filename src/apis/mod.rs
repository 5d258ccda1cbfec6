//! Clients for the various PIX APIs.

use crate::{authenticator::Authenticator, Error};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt::{Debug, Formatter};

pub mod auth;
pub mod cob;
pub mod cobr;
pub mod cobv;
pub mod lote_cobv;
pub mod pix;
pub mod rec;
pub mod solic_rec;
pub mod webhook;
pub mod webhook_cobr;
pub mod webhook_rec;

pub(crate) struct PixClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) authenticator: Authenticator,
    pub(crate) pix_url: Url,
}

impl PixClientInner {
    /// Appends `path` to the PIX base URL, preserving any path the base URL already has
    /// (e.g. `/pix/v2`). Path segments must already be percent-encoded.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!(
            "{}{}",
            self.pix_url.as_str().trim_end_matches('/'),
            path
        ))?)
    }
}

impl Debug for PixClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixClientInner")
            .field("pix_url", &self.pix_url.as_str())
            .field("client_id", &self.authenticator.client_id)
            .finish_non_exhaustive()
    }
}

/// Rejects filters carrying both a CPF and a CNPJ, which PIX APIs do not allow.
pub(crate) fn ensure_single_document(
    cpf: Option<&str>,
    cnpj: Option<&str>,
) -> Result<(), Error> {
    if cpf.is_some() && cnpj.is_some() {
        return Err(Error::InvalidParameters(
            "CPF e CNPJ não podem ser utilizados simultaneamente".to_string(),
        ));
    }

    Ok(())
}
