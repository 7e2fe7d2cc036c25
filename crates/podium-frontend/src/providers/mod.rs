//! Context providers for shared application state and services.

pub mod api;
pub mod services;
pub mod session;
pub mod theme;

pub use services::{Services, ServicesProvider, use_services};
pub use session::{SessionHandle, SessionProvider, use_session};
pub use theme::{PaletteProvider, use_palette};
