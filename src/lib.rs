//! # synqly
//!
//! Typed client for the Synqly chat-completion aggregation service.
//!
//! A single request shape (provider, model, messages, generation options) is
//! routed by the service to the chosen upstream provider; the response comes
//! back normalized regardless of which provider served it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use synqly::{ChatCreateParams, Client, Config, Message};
//!
//! #[tokio::main]
//! async fn main() -> synqly::Result<()> {
//!     let client = Client::new(Config::new("sk_synqly_your_key_here"))?;
//!
//!     let params = ChatCreateParams::new("gpt-4", vec![Message::user("Hello!")])
//!         .provider("openai");
//!     let response = client.chat().create(&params).await?;
//!
//!     println!("{}", response.content());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Configuration and base-URL resolution |
//! | [`client`] | Async client and the chat / analytics / keys façades |
//! | [`blocking`] | Thread-blocking wrapper around the async client |
//! | [`transport`] | Request execution: paths, headers, JSON, status mapping |
//! | [`types`] | Wire types |
//! | [`error`] | [`ApiError`] and its classification |
//! | [`logger`] | Caller-injected logging sinks |

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use client::{AnalyticsService, ChatService, Client, ClientBuilder, KeysService};
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorClass, ErrorKind};
pub use logger::{noop_logger, Logger, StdLogger, TracingLogger};
pub use reqwest::Method;
pub use types::{
    analytics::{UsageParams, UsageStats},
    chat::{
        ApiResponse, ChatCreateParams, ChatResponse, CompletionTokensDetails,
        PromptTokensDetails, UsageDetail,
    },
    keys::CreateKeyParams,
    message::Message,
    Payload,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ApiError>;
