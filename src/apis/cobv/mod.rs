//! APIs and models related to charges with due date (`cobv`).

mod api;
mod model;

pub use api::CobVApi;
pub use model::*;
