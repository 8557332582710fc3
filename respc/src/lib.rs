//! Synchronous client core for RESP-based line stores.
//!
//! `respc` is a thin, blocking facade over [`respc_core`]: it supplies a
//! concrete stream ([`std::net::TcpStream`], or any other
//! `Read + Write` type you hand it) and re-exports the parser, serializer
//! and command types untouched.
//!
//! ```rust,no_run
//! use respc::{Connection, ConnectionConfig, SingleCommand};
//!
//! # fn main() -> respc::RespResult<()> {
//! let stream = std::net::TcpStream::connect("127.0.0.1:6379")?;
//! let mut conn = Connection::new(stream, ConnectionConfig::default());
//! let command = SingleCommand::new(["PING"]).unwrap().into();
//! let replies = conn.call(&command)?;
//! println!("{replies:?}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub use respc_core::{
    Command, CommandSequence, Connection, ConnectionConfig, DropResult, DynamicBuffer, Extractor,
    GrowableBuffer, KeepResult, Marker, MatchCondition, Outcome, ParserConfig, ProtocolErrorKind,
    RespError, RespResult, ResultPolicy, SingleCommand, Value,
};
pub use respc_core::helpers;

use std::net::{TcpStream, ToSocketAddrs};

/// A [`Connection`] over a plain [`TcpStream`], the common case.
pub type TcpConnection = Connection<TcpStream>;

/// Connects to `addr` and wraps the resulting stream in a [`Connection`].
pub fn connect<A: ToSocketAddrs>(addr: A, cfg: ConnectionConfig) -> RespResult<TcpConnection> {
    let stream = TcpStream::connect(addr)?;
    Ok(Connection::new(stream, cfg))
}
