//! The transport-agnostic connection: a read/write buffer pair plus the
//! glue between the serializer, match condition and parser.

pub mod config;
pub mod connection;

pub use config::ConnectionConfig;
pub use connection::Connection;
