//! Backend services for the development server.
//!
//! Currently a single in-memory user directory that stands in for the real
//! backend's user store.

pub mod users;

pub use users::*;
