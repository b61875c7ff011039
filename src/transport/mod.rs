//! HTTP transport: path normalization, authentication headers, JSON
//! transcoding and status-to-error mapping.

mod http;

pub use http::{encode_segment, normalize_path, with_query, HttpTransport};

pub(crate) use http::NO_BODY;
