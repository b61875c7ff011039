//! Client entry point and the per-domain service façades.
//!
//! Each façade validates its parameters locally, then hands the call to the
//! shared [`HttpTransport`](crate::transport::HttpTransport).

pub mod analytics;
pub mod builder;
pub mod chat;
pub mod core;
pub mod keys;

pub use analytics::AnalyticsService;
pub use builder::ClientBuilder;
pub use chat::ChatService;
pub use self::core::Client;
pub use keys::KeysService;
