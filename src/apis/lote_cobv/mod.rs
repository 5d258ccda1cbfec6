//! APIs and models related to batches of charges with due date (`lotecobv`).

mod api;
mod model;

pub use api::LoteCobVApi;
pub use model::*;
