//! APIs related to the webhook notifying changes of recurrences (`webhookrec`).

mod api;

pub use api::WebhookRecApi;
