//! Module containing the main PIX API client.

use crate::{
    apis::{
        auth::{AuthApi, Credentials},
        cob::CobApi,
        cobr::CobRApi,
        cobv::CobVApi,
        lote_cobv::LoteCobVApi,
        pix::PixApi,
        rec::RecApi,
        solic_rec::SolicRecApi,
        webhook::WebhookApi,
        webhook_cobr::WebhookCobRApi,
        webhook_rec::WebhookRecApi,
        PixClientInner,
    },
    authenticator::Authenticator,
    common::{
        BB_PIX_URL, BB_SANDBOX_PIX_URL, BB_SANDBOX_TOKEN_URL, BB_SCOPES, BB_TOKEN_URL,
        DEFAULT_USER_AGENT, SICOOB_PIX_URL, SICOOB_SANDBOX_PIX_URL, SICOOB_SCOPES,
        SICOOB_TOKEN_URL,
    },
    middlewares::{
        authentication::AuthenticationMiddleware,
        developer_key::DeveloperKeyMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_headers::InjectHeadersMiddleware,
        retry_idempotent::{DynRetryPolicy, RetryIdempotentMiddleware},
    },
    tls::ClientCertificate,
    Error,
};
use reqwest::{header::HeaderValue, Url};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use reqwest_tracing::TracingMiddleware;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Banks supported out of the box.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Bank {
    #[serde(alias = "bb")]
    BancoDoBrasil,
    Sicoob,
}

impl Bank {
    /// Scopes requested when the [`Credentials`](crate::apis::auth::Credentials) do not specify
    /// any.
    pub fn default_scopes(&self) -> &'static str {
        match self {
            Bank::BancoDoBrasil => BB_SCOPES,
            Bank::Sicoob => SICOOB_SCOPES,
        }
    }
}

/// PIX environment to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// The bank's production environment.
    Production,
    /// The bank's sandbox environment.
    Sandbox,
    /// Custom environment, e.g. a proxy or a mock server.
    Custom { pix_url: Url, token_url: Url },
}

impl Environment {
    /// Builds a custom environment serving the PIX APIs at `url`
    /// and the token endpoint at `{url}/oauth/token`.
    pub fn from_single_url(url: &Url) -> Environment {
        let mut token_url = url.clone();
        token_url.set_path(&format!("{}/oauth/token", url.path().trim_end_matches('/')));

        Environment::Custom {
            pix_url: url.clone(),
            token_url,
        }
    }

    /// Base URL of the PIX APIs for the given bank.
    pub fn pix_url(&self, bank: Bank) -> Result<Url, Error> {
        let url = match (self, bank) {
            (Environment::Custom { pix_url, .. }, _) => return Ok(pix_url.clone()),
            (Environment::Production, Bank::BancoDoBrasil) => BB_PIX_URL,
            (Environment::Sandbox, Bank::BancoDoBrasil) => BB_SANDBOX_PIX_URL,
            (Environment::Production, Bank::Sicoob) => SICOOB_PIX_URL,
            (Environment::Sandbox, Bank::Sicoob) => SICOOB_SANDBOX_PIX_URL,
        };

        Ok(Url::parse(url)?)
    }

    /// URL of the OAuth2 token endpoint for the given bank.
    pub fn token_url(&self, bank: Bank) -> Result<Url, Error> {
        let url = match (self, bank) {
            (Environment::Custom { token_url, .. }, _) => return Ok(token_url.clone()),
            (Environment::Production, Bank::BancoDoBrasil) => BB_TOKEN_URL,
            (Environment::Sandbox, Bank::BancoDoBrasil) => BB_SANDBOX_TOKEN_URL,
            // Sicoob serves both environments from the same authorization server
            (_, Bank::Sicoob) => SICOOB_TOKEN_URL,
        };

        Ok(Url::parse(url)?)
    }
}

/// Client for the PIX APIs of a single bank.
///
/// Transient failures of idempotent requests (`GET`, `PUT`, `DELETE`, ...) are automatically
/// retried
/// with an exponential backoff. `POST` and `PATCH` requests are never retried.
#[derive(Debug, Clone)]
pub struct PixClient {
    /// Authentication APIs client.
    pub auth: AuthApi,
    /// Immediate charges APIs client.
    pub cob: CobApi,
    /// Charges with due date APIs client.
    pub cobv: CobVApi,
    /// Batches of charges with due date APIs client.
    pub lote_cobv: LoteCobVApi,
    /// Received PIX and refunds APIs client.
    pub pix: PixApi,
    /// Recurrences APIs client.
    pub rec: RecApi,
    /// Recurrence requests APIs client.
    pub solic_rec: SolicRecApi,
    /// Recurring charges APIs client.
    pub cobr: CobRApi,
    /// PIX key webhooks APIs client.
    pub webhook: WebhookApi,
    /// Recurrences webhook APIs client.
    pub webhook_rec: WebhookRecApi,
    /// Recurring charges webhook APIs client.
    pub webhook_cobr: WebhookCobRApi,
}

impl PixClient {
    /// Returns a new builder to configure a new [`PixClient`](crate::client::PixClient).
    pub fn builder(bank: Bank, credentials: Credentials) -> PixClientBuilder {
        PixClientBuilder::new(bank, credentials)
    }
}

/// Builder for a [`PixClient`](crate::client::PixClient).
#[derive(Debug)]
pub struct PixClientBuilder {
    bank: Bank,
    credentials: Credentials,
    environment: Environment,
    client: Option<reqwest::Client>,
    retry_policy: Option<DynRetryPolicy>,
    certificate: Option<ClientCertificate>,
    developer_application_key: Option<String>,
    user_agent: String,
}

impl PixClientBuilder {
    /// Creates a new builder to configure a [`PixClient`](crate::client::PixClient).
    pub fn new(bank: Bank, credentials: Credentials) -> Self {
        Self {
            bank,
            credentials,
            environment: Environment::Production,
            client: None,
            retry_policy: Some(DynRetryPolicy(Arc::new(
                ExponentialBackoff::builder().build_with_max_retries(3),
            ))),
            certificate: None,
            developer_application_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Consumes the builder and builds a new [`PixClient`](crate::client::PixClient).
    ///
    /// Fails if the client certificate cannot be loaded, or if a certificate is combined
    /// with a custom HTTP client.
    ///
    /// Must be called from within a Tokio runtime: the access token manager runs as a
    /// background task.
    pub fn build(self) -> Result<PixClient, Error> {
        let client = match (self.client, self.certificate) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidParameters(
                    "a client certificate cannot be used together with a custom HTTP client"
                        .to_string(),
                ))
            }
            (Some(client), None) => client,
            (None, Some(certificate)) => reqwest::Client::builder()
                .identity(certificate.identity()?)
                .build()?,
            (None, None) => reqwest::Client::new(),
        };

        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
            Error::InvalidParameters(format!("invalid user agent: {}", self.user_agent))
        })?;
        let client_id = Some(self.credentials.client_id())
            .filter(|id| !id.is_empty())
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|_| Error::InvalidParameters("invalid client id".to_string()))?;

        // Token requests share the mTLS session but skip authentication and bank specific headers
        let authenticator = Authenticator::new(
            build_client_with_middleware(
                client.clone(),
                self.retry_policy.clone(),
                None,
                InjectHeadersMiddleware::new(user_agent.clone(), None),
                None,
            ),
            self.environment.token_url(self.bank)?,
            self.credentials,
            self.bank.default_scopes().to_string(),
        );

        let auth_middleware = Some(AuthenticationMiddleware {
            authenticator: authenticator.clone(),
        });
        let developer_key_middleware =
            self.developer_application_key
                .map(|developer_application_key| DeveloperKeyMiddleware {
                    developer_application_key,
                });

        let inner = Arc::new(PixClientInner {
            client: build_client_with_middleware(
                client,
                self.retry_policy,
                auth_middleware,
                InjectHeadersMiddleware::new(user_agent, client_id),
                developer_key_middleware,
            ),
            authenticator,
            pix_url: self.environment.pix_url(self.bank)?,
        });

        tracing::debug!(bank = ?self.bank, pix_url = %inner.pix_url, "Built PIX client");

        Ok(PixClient {
            auth: AuthApi::new(inner.clone()),
            cob: CobApi::new(inner.clone()),
            cobv: CobVApi::new(inner.clone()),
            lote_cobv: LoteCobVApi::new(inner.clone()),
            pix: PixApi::new(inner.clone()),
            rec: RecApi::new(inner.clone()),
            solic_rec: SolicRecApi::new(inner.clone()),
            cobr: CobRApi::new(inner.clone()),
            webhook: WebhookApi::new(inner.clone()),
            webhook_rec: WebhookRecApi::new(inner.clone()),
            webhook_cobr: WebhookCobRApi::new(inner),
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Cannot be combined with [`with_client_certificate`](Self::with_client_certificate):
    /// configure the identity on the custom client instead.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets a specific [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient
    /// failures.
    ///
    /// To disable automatic retrying of failed requests, use `None`.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(DynRetryPolicy);
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Production`](crate::client::Environment::Production).
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Configures the certificate presented to the bank when establishing TLS sessions,
    /// both with the token endpoint and with the PIX APIs.
    pub fn with_client_certificate(mut self, certificate: ClientCertificate) -> Self {
        self.certificate = Some(certificate);
        self
    }

    /// Sets the developer application key sent as `gw-dev-app-key` on every API request,
    /// as required by Banco do Brasil.
    pub fn with_developer_application_key(mut self, key: impl Into<String>) -> Self {
        self.developer_application_key = Some(key.into());
        self
    }

    /// Overrides the `User-Agent` header.
    ///
    /// Defaults to `pix-rust/<version>`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    auth_middleware: Option<AuthenticationMiddleware>,
    inject_headers_middleware: InjectHeadersMiddleware,
    developer_key_middleware: Option<DeveloperKeyMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder = builder.with(inject_headers_middleware);

    if let Some(developer_key_middleware) = developer_key_middleware {
        builder = builder.with(developer_key_middleware);
    }

    builder.build()
}
