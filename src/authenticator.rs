use crate::{
    apis::auth::{AccessToken, Credentials},
    error::Error,
};
use chrono::{Duration, Utc};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tokio::sync::{mpsc, oneshot};

/// Seconds before the actual expiration at which a token is considered stale.
const REFRESH_MARGIN_SECS: i64 = 60;

/// Manager for credentials and access tokens.
#[derive(Debug, Clone)]
pub struct Authenticator {
    tx: mpsc::UnboundedSender<oneshot::Sender<Result<AccessToken, Error>>>,
    pub(crate) client_id: String,
}

impl Authenticator {
    /// Starts a new authenticator with the given credentials.
    ///
    /// `default_scope` is requested when the credentials do not carry a scope of their own.
    pub fn new(
        client: ClientWithMiddleware,
        token_url: Url,
        credentials: Credentials,
        default_scope: String,
    ) -> Self {
        let client_id = credentials.client_id().to_string();
        let state = AuthenticatorState {
            client,
            token_url,
            credentials,
            default_scope,
            access_token: None,
        };

        // Spawn a long running task which will run until the authenticator is dropped
        let (tx, rx) = mpsc::unbounded_channel();
        #[cfg(test)]
        tests::mocked_time::spawn(async move {
            // We need to propagate the mocked time task-local in order to control time in the tests
            process_loop(state, rx).await;
        });
        #[cfg(not(test))]
        tokio::spawn(async move {
            process_loop(state, rx).await;
        });

        Self { tx, client_id }
    }

    /// Returns the current access token used for authentication against the PIX APIs.
    /// If there's no access token available, or the available one is about to expire,
    /// a new one will be requested from the bank's OAuth2 server.
    ///
    /// Concurrent calls to `get_access_token` are batched into one single token request.
    pub async fn get_access_token(&self) -> Result<AccessToken, Error> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(tx)
            .map_err(|_| Error::Other(anyhow::anyhow!("Authenticator task is not running")))?;

        rx.await
            .map_err(|_| Error::Other(anyhow::anyhow!("Authenticator task dropped the request")))?
    }
}

/// Internal state of the authenticator.
struct AuthenticatorState {
    client: ClientWithMiddleware,
    token_url: Url,
    credentials: Credentials,
    default_scope: String,
    access_token: Option<AccessToken>,
}

async fn process_loop(
    mut state: AuthenticatorState,
    mut rx: mpsc::UnboundedReceiver<oneshot::Sender<Result<AccessToken, Error>>>,
) {
    // Wait for commands from the main client
    while let Some(reply) = rx.recv().await {
        if reply
            .send(process_get_access_token(&mut state).await)
            .is_err()
        {
            tracing::warn!("Receiver dropped before the reply");
        }
    }
}

#[tracing::instrument(name = "Get Access Token", level = "debug", skip(state))]
async fn process_get_access_token(state: &mut AuthenticatorState) -> Result<AccessToken, Error> {
    if let Some(token) = &state.access_token {
        if !should_refresh_token(token) {
            tracing::debug!("Reusing existing access token");
            return Ok(token.clone());
        }
    }

    let (client_id, client_secret, scope) = match &state.credentials {
        Credentials::StaticToken { access_token, .. } => {
            let token = AccessToken {
                token: access_token.clone(),
                expires_at: None,
            };
            state.access_token = Some(token.clone());
            tracing::debug!("Using static access token");
            return Ok(token);
        }
        Credentials::ClientCredentials {
            client_id,
            client_secret,
            scope,
        } => (
            client_id.clone(),
            client_secret.clone(),
            scope.clone().unwrap_or_else(|| state.default_scope.clone()),
        ),
    };

    match request_token(state, &client_id, client_secret.as_ref(), &scope).await {
        Ok(token) => {
            tracing::info!(client_id = %client_id, scope = %scope, "Got new access token");
            state.access_token = Some(token.clone());
            Ok(token)
        }
        Err(e) => {
            tracing::warn!(
                client_id = %client_id,
                scope = %scope,
                error = %e,
                "Authentication failed"
            );
            Err(e)
        }
    }
}

async fn request_token(
    state: &AuthenticatorState,
    client_id: &str,
    client_secret: Option<&crate::apis::auth::Token>,
    scope: &str,
) -> Result<AccessToken, Error> {
    let mut form = vec![("grant_type", "client_credentials"), ("scope", scope)];

    let mut request = state.client.post(state.token_url.clone());
    request = match client_secret {
        Some(secret) => request.basic_auth(client_id, Some(secret.expose_secret())),
        None => {
            // Without a secret the bank identifies the caller through the client certificate
            form.push(("client_id", client_id));
            request
        }
    };

    let res: RawAuthenticationResponse = request.form(&form).send().await?.json().await?;

    if !res.token_type.eq_ignore_ascii_case("bearer") {
        return Err(Error::Other(anyhow::anyhow!(
            "Unsupported access token type: {}",
            res.token_type,
        )));
    }

    Ok(AccessToken {
        token: res.access_token.into(),
        expires_at: res.expires_in.map(|secs| now() + Duration::seconds(secs)),
    })
}

/// Returns `true` if the token is close to expiration and should be refreshed.
/// If this token does not expire, this function always returns `false`.
fn should_refresh_token(token: &AccessToken) -> bool {
    token.expires_at.map_or(false, |expires_at| {
        now() >= expires_at - Duration::seconds(REFRESH_MARGIN_SECS)
    })
}

// Select an implementation of `now()` depending on whether we are testing or not
#[cfg(not(test))]
fn now() -> chrono::DateTime<Utc> {
    Utc::now()
}
#[cfg(test)]
use tests::mocked_time::now;

/// Successful response of a token request.
#[derive(serde::Deserialize)]
struct RawAuthenticationResponse {
    access_token: String,
    expires_in: Option<i64>,
    token_type: String,
}
