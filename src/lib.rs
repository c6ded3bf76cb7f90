//! A line-oriented TCP client.
//!
//! [`connect`] resolves an [`Endpoint`], opens one TCP connection and hands
//! back a [`Connection`] carrying a flushing line writer and a buffered line
//! reader. Failures are classified as [`ConnectError::UnknownHost`] or
//! [`ConnectError::Io`] and returned to the caller.

pub mod connect;
pub mod endpoint;
pub mod error;
pub mod relay;

pub use connect::{connect, Connection, LineReader, LineWriter};
pub use endpoint::{Endpoint, DEFAULT_HOST, DEFAULT_PORT};
pub use error::ConnectError;
pub use relay::relay;
