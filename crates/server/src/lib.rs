#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod auth;

// REST backend access
#[cfg(feature = "server")]
pub mod backend;

#[cfg(feature = "server")]
pub mod dashboard;

#[cfg(feature = "server")]
pub mod reviews;

#[cfg(feature = "server")]
pub mod activity;
