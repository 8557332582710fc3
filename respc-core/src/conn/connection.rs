//! The generic I/O adaptor (spec.md §4.7): composes the serializer, the
//! match condition and the parser over any stream that is either
//! synchronously or asynchronously readable and writable.
//!
//! `Connection<S>` carries no concrete transport logic of its own — no TCP,
//! no TLS, no authentication — it is generic over `S` and only asks of it
//! what the active feature needs (`std::io::Read + Write` for `sync`,
//! `tokio::io::AsyncRead + AsyncWrite + Unpin` for `async`). Composing a
//! real transport into `S` is a concern of the `respc`/`respc-tokio` facade
//! crates.

use log::trace;

use crate::buffer::{DynamicBuffer, GrowableBuffer};
use crate::conn::config::ConnectionConfig;
use crate::error::RespResult;
use crate::protocol::marker::KeepResult;
use crate::protocol::matcher::MatchCondition;
use crate::protocol::parser::{parse, Outcome};
use crate::protocol::value::{Extractor, Value};
use crate::protocol::Command;

/// A RESP connection over stream `S`.
///
/// Holds a read buffer and a write buffer across calls, so pipelined
/// commands and replies that arrive fragmented across several physical
/// reads never force a fresh allocation per call (spec.md §5, "no internal
/// locking, no re-entrancy — the caller serializes access").
#[derive(Debug)]
pub struct Connection<S> {
    stream: S,
    read_buf: GrowableBuffer,
    write_buf: GrowableBuffer,
    cfg: ConnectionConfig,
}

impl<S> Connection<S> {
    /// Wraps `stream`, allocating the read buffer with
    /// `cfg.read_buffer_capacity` bytes reserved up front.
    pub fn new(stream: S, cfg: ConnectionConfig) -> Self {
        Self {
            stream,
            read_buf: GrowableBuffer::with_capacity(cfg.read_buffer_capacity),
            write_buf: GrowableBuffer::with_capacity(cfg.read_buffer_capacity),
            cfg,
        }
    }

    /// Borrows the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Consumes the connection, returning the underlying stream. Any bytes
    /// still sitting in the read buffer (replies read ahead of a caller
    /// that stopped asking for them) are discarded.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Decodes as many complete replies as `read_buf` currently holds,
    /// without touching the stream. Used by both the sync and async `read`
    /// once enough bytes have accumulated.
    fn extract_replies(&mut self, count: usize) -> RespResult<Vec<Value>> {
        let data = self.read_buf.data();
        let mut values = Vec::with_capacity(count);
        let mut offset = 0;
        for _ in 0..count {
            match parse::<KeepResult>(&data[offset..], &self.cfg.parser_config()) {
                Outcome::Positive { result, consumed } => {
                    values.push(Extractor::new(&data[offset..offset + consumed]).extract(&result)?);
                    offset += consumed;
                }
                // The match condition already proved `count` replies are
                // present; these can only be reached on an internal bug.
                Outcome::NotEnoughData => unreachable!("match condition under-reported readiness"),
                Outcome::ProtocolError { kind } => return Err(kind.into()),
            }
        }
        self.read_buf.consume(offset);
        Ok(values)
    }
}

#[cfg(feature = "sync")]
mod sync_impl {
    use super::*;
    use std::io::{Read, Write};

    impl<S: Read + Write> Connection<S> {
        /// Serializes and writes `command` in one go.
        pub fn write(&mut self, command: &Command) -> RespResult<()> {
            crate::protocol::serializer::serialize(&mut self.write_buf, command);
            self.stream.write_all(self.write_buf.data())?;
            let written = self.write_buf.size();
            self.write_buf.consume(written);
            trace!("wrote {written} bytes");
            Ok(())
        }

        /// Reads and decodes exactly `expected_replies` replies, blocking
        /// until they have all arrived (or an error occurs).
        pub fn read(&mut self, expected_replies: usize) -> RespResult<Vec<Value>> {
            let mut condition = MatchCondition::new(expected_replies, self.cfg.parser_config());
            let mut begin = 0;
            loop {
                let (new_begin, done) = condition.feed(self.read_buf.data(), begin)?;
                begin = new_begin;
                if done {
                    break;
                }
                let chunk = self.read_buf.prepare(self.cfg.read_buffer_capacity);
                let n = self.stream.read(chunk)?;
                if n == 0 {
                    return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
                }
                self.read_buf.commit(n);
                trace!("read {n} bytes");
            }
            self.extract_replies(expected_replies)
        }

        /// Writes `command` and reads back its replies in one call.
        pub fn call(&mut self, command: &Command) -> RespResult<Vec<Value>> {
            let expected = command.expected_replies();
            self.write(command)?;
            self.read(expected)
        }
    }
}

#[cfg(feature = "async")]
mod async_impl {
    use super::*;
    use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

    impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
        /// Serializes and writes `command` in one go.
        pub async fn async_write(&mut self, command: &Command) -> RespResult<()> {
            crate::protocol::serializer::serialize(&mut self.write_buf, command);
            self.stream.write_all(self.write_buf.data()).await?;
            let written = self.write_buf.size();
            self.write_buf.consume(written);
            trace!("wrote {written} bytes");
            Ok(())
        }

        /// Reads and decodes exactly `expected_replies` replies, awaiting
        /// the stream until they have all arrived (or an error occurs).
        pub async fn async_read(&mut self, expected_replies: usize) -> RespResult<Vec<Value>> {
            let mut condition = MatchCondition::new(expected_replies, self.cfg.parser_config());
            let mut begin = 0;
            loop {
                let (new_begin, done) = condition.feed(self.read_buf.data(), begin)?;
                begin = new_begin;
                if done {
                    break;
                }
                let chunk = self.read_buf.prepare(self.cfg.read_buffer_capacity);
                let n = self.stream.read(chunk).await?;
                if n == 0 {
                    return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
                }
                self.read_buf.commit(n);
                trace!("read {n} bytes");
            }
            self.extract_replies(expected_replies)
        }

        /// Writes `command` and reads back its replies in one call.
        pub async fn async_call(&mut self, command: &Command) -> RespResult<Vec<Value>> {
            let expected = command.expected_replies();
            self.async_write(command).await?;
            self.async_read(expected).await
        }
    }
}
