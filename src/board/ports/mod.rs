//! Port contracts for the board client.

pub mod api;

pub use api::{BoardApi, BoardApiError, BoardApiResult};
