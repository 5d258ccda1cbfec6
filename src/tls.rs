//! Client certificates for mutual TLS.
//!
//! Most banks only accept connections authenticated with a certificate issued through their
//! developer portal, both on the OAuth2 token endpoint and on the PIX APIs themselves.
//! Certificates are usually distributed either as a PEM certificate plus a private key,
//! or as a single password-protected PKCS#12 (`.pfx`/`.p12`) bundle.

use crate::{apis::auth::Token, Error};
use std::{fmt, fs, path::Path};

/// Client certificate used to establish a mutual TLS session with the bank.
#[derive(Clone)]
pub enum ClientCertificate {
    /// PEM encoded certificate chain and PKCS#8 PEM encoded private key.
    Pem {
        certificate: Vec<u8>,
        private_key: Token,
    },
    /// DER encoded PKCS#12 archive protected by a password.
    Pkcs12 { der: Vec<u8>, password: Token },
}

impl ClientCertificate {
    /// Reads a PEM certificate and its private key from disk.
    pub fn from_pem_files(
        certificate_path: impl AsRef<Path>,
        private_key_path: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        let certificate = read_file(certificate_path.as_ref())?;
        let private_key = String::from_utf8(read_file(private_key_path.as_ref())?)
            .map_err(|_| Error::Certificate("private key is not valid PEM".to_string()))?;

        Ok(Self::Pem {
            certificate,
            private_key: private_key.into(),
        })
    }

    /// Reads a password-protected PKCS#12 archive from disk.
    pub fn from_pkcs12_file(
        path: impl AsRef<Path>,
        password: impl Into<Token>,
    ) -> Result<Self, Error> {
        Ok(Self::Pkcs12 {
            der: read_file(path.as_ref())?,
            password: password.into(),
        })
    }

    /// Builds the [`Identity`](reqwest::Identity) presented during the TLS handshake.
    pub fn identity(&self) -> Result<reqwest::Identity, Error> {
        let identity = match self {
            ClientCertificate::Pem {
                certificate,
                private_key,
            } => reqwest::Identity::from_pkcs8_pem(
                certificate,
                private_key.expose_secret().as_bytes(),
            ),
            ClientCertificate::Pkcs12 { der, password } => {
                reqwest::Identity::from_pkcs12_der(der, password.expose_secret())
            }
        };

        identity.map_err(|e| Error::Certificate(e.to_string()))
    }
}

impl fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientCertificate::Pem { .. } => f.debug_struct("Pem").finish_non_exhaustive(),
            ClientCertificate::Pkcs12 { .. } => f.debug_struct("Pkcs12").finish_non_exhaustive(),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|e| Error::Certificate(format!("{}: {}", path.display(), e)))
}
