use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use uuid::Uuid;

// Banco do Brasil
pub static BB_PIX_URL: &str = "https://api.bb.com.br/pix/v2";
pub static BB_TOKEN_URL: &str = "https://oauth.bb.com.br/oauth/token";
pub static BB_SANDBOX_PIX_URL: &str = "https://api.hm.bb.com.br/pix/v2";
pub static BB_SANDBOX_TOKEN_URL: &str = "https://oauth.hm.bb.com.br/oauth/token";

// Sicoob
pub static SICOOB_PIX_URL: &str = "https://api.sicoob.com.br/pix/api/v2";
pub static SICOOB_TOKEN_URL: &str =
    "https://auth.sicoob.com.br/auth/realms/cooperado/protocol/openid-connect/token";
pub static SICOOB_SANDBOX_PIX_URL: &str =
    "https://sandbox.sicoob.com.br/sicoob/sandbox/pix/api/v2";

// Default scopes
pub static BB_SCOPES: &str = "cob.read cob.write cobv.read cobv.write lotecobv.read lotecobv.write \
    pix.read pix.write webhook.read webhook.write";
pub static SICOOB_SCOPES: &str = "cob.read cob.write cobv.read cobv.write lotecobv.read \
    lotecobv.write pix.read pix.write webhook.read webhook.write rec.read rec.write \
    solicrec.read solicrec.write cobr.read cobr.write webhookrec.read webhookrec.write \
    webhookcobr.read webhookcobr.write";

// Header and query names
pub static CLIENT_ID_HEADER: &str = "client_id";
pub static DEVELOPER_APPLICATION_KEY_PARAM: &str = "gw-dev-app-key";

pub static DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub static DEFAULT_SANDBOX_TOKEN: &str = "sandbox-token";
pub static DEFAULT_ERROR_TYPE: &str = "https://pix.bcb.gov.br/api/v2/error";

/// Generates a new random `txid` suitable for charges created with a caller-chosen identifier.
///
/// PIX requires 26 to 35 alphanumeric characters: this returns the 32 hex digits of a random UUID.
pub fn generate_txid() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Serializes a query timestamp as RFC 3339 with second precision, as expected by PIX APIs.
pub(crate) fn serialize_timestamp<S>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub(crate) fn serialize_optional_timestamp<S>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(timestamp) => serialize_timestamp(timestamp, serializer),
        None => serializer.serialize_none(),
    }
}
