//! Page components for different routes in the application.

pub mod about;
pub mod create;
pub mod dashboard;
pub mod edit_profile;
pub mod explore;
pub mod home;
pub mod login;
pub mod presentations;
pub mod pricing;
pub mod profile;
pub mod view;

pub use about::*;
pub use create::*;
pub use dashboard::*;
pub use edit_profile::*;
pub use explore::*;
pub use home::*;
pub use login::*;
pub use presentations::*;
pub use pricing::*;
pub use profile::*;
pub use view::*;
