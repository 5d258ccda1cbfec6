//! APIs related to recurrence requests (`solicrec`), sent to the payer's PSP for approval.

mod api;

pub use api::SolicRecApi;
