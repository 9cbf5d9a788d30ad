//! Stream Proxy Module
//!
//! Relays byte-range audio requests to upstream HTTP(S) resources
//! without buffering the body.

mod stream;

pub use stream::stream_handler;
