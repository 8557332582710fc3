//! Asynchronous (tokio) client core for RESP-based line stores.
//!
//! `respc-tokio` is a thin facade over [`respc_core`]: it supplies a
//! concrete stream ([`tokio::net::TcpStream`], or any other
//! `AsyncRead + AsyncWrite + Unpin` type you hand it) and re-exports the
//! parser, serializer and command types untouched.
//!
//! ```rust,no_run
//! use respc_tokio::{Connection, ConnectionConfig, SingleCommand};
//!
//! # async fn run() -> respc_tokio::RespResult<()> {
//! let stream = tokio::net::TcpStream::connect("127.0.0.1:6379").await?;
//! let mut conn = Connection::new(stream, ConnectionConfig::default());
//! let command = SingleCommand::new(["PING"]).unwrap().into();
//! let replies = conn.async_call(&command).await?;
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

use tokio::net::{TcpStream, ToSocketAddrs};

/// A [`Connection`] over a plain [`TcpStream`], the common case.
pub type TcpConnection = Connection<TcpStream>;

/// Connects to `addr` and wraps the resulting stream in a [`Connection`].
pub async fn connect<A: ToSocketAddrs>(addr: A, cfg: ConnectionConfig) -> RespResult<TcpConnection> {
    let stream = TcpStream::connect(addr).await?;
    Ok(Connection::new(stream, cfg))
}
