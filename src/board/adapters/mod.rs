//! Adapter implementations of the board API port.

pub mod http;
pub mod local;

pub use http::HttpBoardApi;
pub use local::LocalBoardApi;
