#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod dashboard;
pub use dashboard::*;

mod moderation;
pub use moderation::*;
