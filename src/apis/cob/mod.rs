//! APIs and models related to immediate charges (`cob`).

mod api;
mod model;

pub use api::CobApi;
pub use model::*;
