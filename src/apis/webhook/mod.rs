//! APIs and models related to webhooks notifying PIX received on a key (`webhook`).

mod api;
mod model;

pub use api::WebhookApi;
pub use model::*;
