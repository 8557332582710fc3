//! Do not use this crate directly.
//!
//! This is the implementation crate for `respc` and `respc-tokio`.
//!
//! If you need a synchronous client, use `respc`.
//!
//! If you need an asynchronous (tokio) client, use `respc-tokio`.
//!
//! What lives here: a zero-copy streaming parser and serializer for the
//! RESP wire protocol, and a transport-generic [`conn::Connection`] that
//! composes them over any stream. There is no TCP, TLS or authentication
//! logic in this crate — that belongs to the facade crates, which supply
//! the concrete stream type.

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(not(any(feature = "sync", feature = "async")), allow(unused_imports))]
#![cfg_attr(not(any(feature = "sync", feature = "async")), allow(dead_code))]

#[macro_use]
extern crate log;

pub mod buffer;
pub mod conn;
pub mod error;
pub mod helpers;
pub mod protocol;

pub use crate::buffer::{DynamicBuffer, GrowableBuffer};
pub use crate::conn::{Connection, ConnectionConfig};
pub use crate::error::{ProtocolErrorKind, RespError, RespResult};
pub use crate::protocol::{
    Command, CommandSequence, DropResult, Extractor, KeepResult, Marker, MatchCondition, Outcome,
    ParserConfig, ResultPolicy, SingleCommand, Value,
};
