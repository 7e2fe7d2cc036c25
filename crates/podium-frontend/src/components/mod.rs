//! Shell components rendered around the routed pages.

pub mod auth_error;
pub mod header;
pub mod loader;

pub use auth_error::*;
pub use header::*;
pub use loader::*;
