//! APIs related to the webhook notifying changes of recurring charges (`webhookcobr`).

mod api;

pub use api::WebhookCobRApi;
