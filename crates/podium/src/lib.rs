//! The shared library for Podium, the Rust front-end shell of a presentation
//! creation web application.
//!
//! This library holds everything that does not need a browser: the wire types
//! exchanged with the backend, the session model and its redirect guard, the
//! bootstrap flows that turn backend answers into session updates, build-time
//! configuration, error types, logging and the callback macro used by the
//! frontend components.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod data;
pub mod errors;
pub mod guard;
pub mod log;
pub mod macros;
pub mod session;

pub use serde;
pub use serde_json;
pub use tracing;
