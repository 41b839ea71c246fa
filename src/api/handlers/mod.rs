//! Request handlers for each endpoint.

pub mod ask;
pub mod history;
pub mod meta;
