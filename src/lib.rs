//! Offsets API Library

pub mod auth;
pub mod config;
pub mod http;
pub mod lookup;
pub mod observability;

pub use config::schema::Config;
pub use http::HttpServer;
