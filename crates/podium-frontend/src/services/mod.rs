//! Clients for the third-party platforms the shell is built on.

pub mod auth;
pub mod storage;

pub use auth::*;
pub use storage::*;
