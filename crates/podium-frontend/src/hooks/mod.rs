//! Hooks wiring the session to the outside world.

pub mod use_bootstrap;
pub mod use_context_menu;
pub mod use_report_page;
pub mod use_session_guard;

pub use use_bootstrap::*;
pub use use_context_menu::*;
pub use use_report_page::*;
pub use use_session_guard::*;
