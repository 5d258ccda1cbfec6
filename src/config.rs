//! Configuration of a [`PixClient`](crate::PixClient) from files and environment variables.
//!
//! Settings are read, in order of precedence, from environment variables and from an optional
//! `pix.{toml,json,yaml}` file in the working directory:
//!
//! | Key                         | Description                                              |
//! |-----------------------------|----------------------------------------------------------|
//! | `BANK`                      | `bb`, `banco_do_brasil` or `sicoob`                      |
//! | `ENVIRONMENT`               | `production` (default) or `sandbox`                      |
//! | `CLIENT_ID`                 | OAuth2 client id                                         |
//! | `CLIENT_SECRET`             | OAuth2 client secret, omitted for mTLS-only banks        |
//! | `SCOPE`                     | Requested scopes, defaults to the bank's scopes          |
//! | `CERT` / `PVK`              | Paths to the PEM certificate and private key             |
//! | `CERT_PFX` / `PWD_PFX`      | Path to a PKCS#12 bundle and its password                |
//! | `SANDBOX_TOKEN`             | Fixed bearer token used against sandboxes                |
//! | `DEVELOPER_APPLICATION_KEY` | Banco do Brasil `gw-dev-app-key`                         |

use crate::{
    apis::auth::{Credentials, Token},
    client::{Bank, Environment, PixClientBuilder},
    common::DEFAULT_SANDBOX_TOKEN,
    tls::ClientCertificate,
    Error, PixClient,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment selected through configuration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentName {
    #[default]
    Production,
    Sandbox,
}

/// Settings needed to build a [`PixClient`](crate::PixClient).
#[derive(Deserialize, Debug, Clone)]
pub struct PixConfig {
    pub bank: Bank,
    #[serde(default)]
    pub environment: EnvironmentName,
    pub client_id: String,
    pub client_secret: Option<Token>,
    pub scope: Option<String>,
    pub cert: Option<PathBuf>,
    pub pvk: Option<PathBuf>,
    pub cert_pfx: Option<PathBuf>,
    pub pwd_pfx: Option<Token>,
    pub sandbox_token: Option<Token>,
    pub developer_application_key: Option<String>,
}

impl PixConfig {
    /// Reads the configuration from the optional `pix` file and from environment variables.
    pub fn read() -> Result<Self, Error> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("pix").required(false))
            .add_source(config::Environment::default())
            .build()
            .map_err(|e| Error::Other(e.into()))?;

        Self::from_config(config)
    }

    /// Deserializes the settings out of an already assembled [`config::Config`].
    pub fn from_config(config: config::Config) -> Result<Self, Error> {
        config
            .try_deserialize()
            .map_err(|e| Error::Other(anyhow::Error::new(e).context("Invalid PIX configuration")))
    }

    /// Whether requests are authenticated with a fixed sandbox token instead of OAuth2.
    ///
    /// This happens in the sandbox environment when a token is configured, or when there is
    /// no client secret to request one with.
    pub fn uses_static_token(&self) -> bool {
        self.environment == EnvironmentName::Sandbox
            && (self.sandbox_token.is_some() || self.client_secret.is_none())
    }

    /// Loads the configured client certificate, preferring a PKCS#12 bundle over PEM files.
    pub fn client_certificate(&self) -> Result<Option<ClientCertificate>, Error> {
        match (&self.cert_pfx, &self.cert, &self.pvk) {
            (Some(cert_pfx), _, _) => {
                let password = self.pwd_pfx.clone().unwrap_or_else(|| Token::new(""));
                Ok(Some(ClientCertificate::from_pkcs12_file(cert_pfx, password)?))
            }
            (None, Some(cert), Some(pvk)) => {
                Ok(Some(ClientCertificate::from_pem_files(cert, pvk)?))
            }
            (None, Some(_), None) | (None, None, Some(_)) => Err(Error::Certificate(
                "both CERT and PVK must be set to use a PEM certificate".to_string(),
            )),
            (None, None, None) => Ok(None),
        }
    }

    fn credentials(&self) -> Credentials {
        if self.uses_static_token() {
            Credentials::StaticToken {
                client_id: self.client_id.clone(),
                access_token: self
                    .sandbox_token
                    .clone()
                    .unwrap_or_else(|| Token::new(DEFAULT_SANDBOX_TOKEN)),
            }
        } else {
            Credentials::ClientCredentials {
                client_id: self.client_id.clone(),
                client_secret: self.client_secret.clone(),
                scope: self.scope.clone(),
            }
        }
    }

    /// Returns a [`PixClientBuilder`](crate::client::PixClientBuilder) configured with these
    /// settings.
    pub fn into_builder(self) -> Result<PixClientBuilder, Error> {
        let environment = match self.environment {
            EnvironmentName::Production => Environment::Production,
            EnvironmentName::Sandbox => Environment::Sandbox,
        };

        let mut builder =
            PixClient::builder(self.bank, self.credentials()).with_environment(environment);

        if let Some(certificate) = self.client_certificate()? {
            builder = builder.with_client_certificate(certificate);
        }

        if let Some(key) = self.developer_application_key {
            builder = builder.with_developer_application_key(key);
        }

        Ok(builder)
    }
}
