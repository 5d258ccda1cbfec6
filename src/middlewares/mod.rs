pub mod authentication;
pub mod developer_key;
pub mod error_handling;
pub mod inject_headers;
pub mod retry_idempotent;
