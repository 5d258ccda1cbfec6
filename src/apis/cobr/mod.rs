//! APIs and models related to recurring charges (`cobr`) issued under an approved recurrence.

mod api;
mod model;

pub use api::CobRApi;
pub use model::*;
