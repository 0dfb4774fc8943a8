// wiolink-api: Async Rust client for the Wio Link cloud REST API

pub mod client;
pub mod endpoints;
pub mod error;
pub mod region;
pub mod request;
pub mod transport;

pub use client::WioClient;
pub use error::Error;
pub use region::Region;
pub use request::{Encoding, RequestSpec};
pub use transport::{TlsMode, TransportConfig};
