//! Rust client for the PIX APIs exposed by Brazilian banks.
//!
//! PIX is the instant-payment system operated by the Banco Central do Brasil.
//! Each participant bank exposes the same family of REST resources (immediate charges,
//! charges with due date, recurrences, webhooks, ...) behind its own OAuth2 server,
//! usually protected by mutual TLS.
//!
//! # Usage
//!
//! ## Initialize a new `PixClient`
//!
//! Pick the bank you are integrating with and provide your OAuth2 client credentials.
//! Most banks also require a client certificate issued through their developer portal.
//!
//! ```rust,no_run
//! # use pix_rust::{apis::auth::Credentials, client::Bank, tls::ClientCertificate};
//! # use pix_rust::{Error, PixClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let pix = PixClient::builder(
//!     Bank::BancoDoBrasil,
//!     Credentials::ClientCredentials {
//!         client_id: "some-client-id".into(),
//!         client_secret: Some("some-client-secret".into()),
//!         scope: None,
//!     },
//! )
//! .with_client_certificate(ClientCertificate::from_pem_files("cert.pem", "key.pem")?)
//! .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Building a client spawns the task that manages access tokens, so it must happen
//! inside a Tokio runtime.
//!
//! By default, a `PixClient` connects to the bank's production environment.
//! To connect to a sandbox, use
//! [`with_environment(Environment::Sandbox)`](crate::client::PixClientBuilder::with_environment).
//!
//! ## Create an immediate charge
//!
//! ```rust,no_run
//! # use pix_rust::{PixClient, Error};
//! # use serde_json::json;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let pix: PixClient = unreachable!();
//! #
//! let cob = pix
//!     .cob
//!     .create_with_auto_txid(&json!({
//!         "calendario": { "expiracao": 3600 },
//!         "devedor": { "cpf": "12345678909", "nome": "Fulano de Tal" },
//!         "valor": { "original": "10.00" },
//!         "chave": "chave@exemplo.com",
//!     }))
//!     .await?;
//!
//! println!("Created new charge: {}", cob["txid"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling errors
//!
//! Error responses are mapped into [`ApiError`](crate::error::ApiError)s which can be classified
//! using [`ApiError::kind`](crate::error::ApiError::kind):
//!
//! ```rust,no_run
//! # use pix_rust::{PixClient, Error, error::ApiErrorKind};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let pix: PixClient = unreachable!();
//! #
//! match pix.cob.get("some-txid", None).await {
//!     Ok(cob) => println!("Status: {}", cob["status"]),
//!     Err(Error::ApiError(e)) if e.kind() == ApiErrorKind::NotFound => println!("No such charge"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run a demo, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example create_cob
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod config;
pub mod error;
mod middlewares;
pub mod tls;

pub use client::PixClient;
pub use common::generate_txid;
pub use error::Error;
