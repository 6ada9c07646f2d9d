pub mod error;
pub mod feature_flags;
pub mod models;

// Portal records as served by the REST backend
pub mod activity_log;
pub mod booking;
pub mod common;
pub mod directory;
pub mod review;

// Client-side logic shared by the server functions and the UI
pub mod access;
pub mod controller;
pub mod export;
pub mod filters;
pub mod load;
pub mod stats;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use activity_log::*;
pub use booking::*;
pub use common::*;
pub use directory::*;
pub use review::*;

pub use access::*;
pub use controller::*;
pub use export::*;
pub use filters::*;
pub use load::*;
pub use stats::*;
