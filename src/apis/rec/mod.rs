//! APIs and models related to recurrences (`rec`), the mandates behind automatic PIX.

mod api;
mod model;

pub use api::RecApi;
pub use model::*;
