//! APIs and models related to received PIX and their refunds (`pix`).

mod api;
mod model;

pub use api::PixApi;
pub use model::*;
