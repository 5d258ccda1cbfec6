//! APIs and models related to OAuth2 authentication.

mod api;
mod model;

pub use api::AuthApi;
pub use model::*;
