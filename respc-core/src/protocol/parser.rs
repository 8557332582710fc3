//! The zero-copy streaming parser (spec.md §4.2).
//!
//! `parse` never blocks and never reads past `input`: a reply that is not
//! fully present yields [`Outcome::NotEnoughData`] rather than an error, so
//! the caller can read more bytes and retry the same call with a larger
//! `input`. A reply that is fully present is decoded in one recursive
//! descent, generic over a [`ResultPolicy`] so the same code path drives
//! both the keep-result and drop-result policies (spec.md §9).

use crate::error::ProtocolErrorKind;
use crate::protocol::grammar::{find_crlf, parse_count, TAG_ARRAY, TAG_BULK, TAG_ERROR, TAG_INT, TAG_STRING};
use crate::protocol::marker::ResultPolicy;

/// Parser-tunable limits (spec.md §4.5, "Limits").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Upper bound on a bulk string's or array's declared count. Guards
    /// against a peer-declared count causing an unbounded allocation before
    /// the payload itself has even arrived.
    pub max_bulk_len: i64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_bulk_len: 512 * 1024 * 1024,
        }
    }
}

/// Result of one call to [`parse`].
#[derive(Debug)]
pub enum Outcome<T> {
    /// `input` does not yet contain a complete reply starting at its front.
    NotEnoughData,
    /// A complete reply was decoded; `consumed` bytes of `input` belong to it.
    Positive { result: T, consumed: usize },
    /// `input` is not a valid prefix of the wire grammar.
    ProtocolError { kind: ProtocolErrorKind },
}

/// Attempts to decode one complete reply from the front of `input`.
///
/// Returns [`Outcome::NotEnoughData`] if `input` is a valid but incomplete
/// prefix, [`Outcome::ProtocolError`] if it is not a valid prefix at all,
/// and [`Outcome::Positive`] with the number of bytes consumed otherwise.
pub fn parse<P: ResultPolicy>(input: &[u8], cfg: &ParserConfig) -> Outcome<P::Value> {
    match parse_at::<P>(input, 0, cfg) {
        Ok(Some((result, consumed))) => Outcome::Positive { result, consumed },
        Ok(None) => Outcome::NotEnoughData,
        Err(kind) => Outcome::ProtocolError { kind },
    }
}

/// Core recursion. `from` is the offset of the tag byte that introduces the
/// reply to decode. Returns `Ok(Some((value, new_offset)))` on success,
/// `Ok(None)` if more data is needed, `Err(kind)` on a grammar violation.
fn parse_at<P: ResultPolicy>(
    input: &[u8],
    from: usize,
    cfg: &ParserConfig,
) -> Result<Option<(P::Value, usize)>, ProtocolErrorKind> {
    let Some(&tag) = input.get(from) else {
        return Ok(None);
    };

    match tag {
        TAG_STRING => parse_line::<P>(input, from, P::leaf_string),
        TAG_ERROR => parse_line::<P>(input, from, P::leaf_error),
        TAG_INT => parse_line::<P>(input, from, P::leaf_int),
        TAG_BULK => parse_bulk::<P>(input, from, cfg),
        TAG_ARRAY => parse_array::<P>(input, from, cfg),
        _ => Err(ProtocolErrorKind::WrongIntroduction),
    }
}

/// Shared shape of `+`, `-`, `:`: a tag byte, a CRLF-delimited payload, and
/// nothing else. `leaf` builds the policy's value from the payload range
/// (which excludes the tag byte and the terminator).
fn parse_line<P: ResultPolicy>(
    input: &[u8],
    from: usize,
    leaf: fn(usize, usize) -> P::Value,
) -> Result<Option<(P::Value, usize)>, ProtocolErrorKind> {
    let payload_start = from + 1;
    let Some(crlf_pos) = find_crlf(input, payload_start) else {
        return Ok(None);
    };
    let value = leaf(payload_start, crlf_pos);
    Ok(Some((value, crlf_pos + 2)))
}

/// `$<count>\r\n<payload>\r\n`, or `$-1\r\n` for a null bulk string.
fn parse_bulk<P: ResultPolicy>(
    input: &[u8],
    from: usize,
    cfg: &ParserConfig,
) -> Result<Option<(P::Value, usize)>, ProtocolErrorKind> {
    let count_start = from + 1;
    let Some(count_crlf) = find_crlf(input, count_start) else {
        return Ok(None);
    };
    let count = parse_count(&input[count_start..count_crlf], cfg.max_bulk_len)?;
    let payload_start = count_crlf + 2;

    if count == -1 {
        return Ok(Some((P::leaf_nil(count_start, count_crlf), payload_start)));
    }

    let len = count as usize;
    let payload_end = payload_start + len;
    let Some(terminator) = input.get(payload_end..payload_end + 2) else {
        return Ok(None);
    };
    if terminator != b"\r\n" {
        return Err(ProtocolErrorKind::BulkTerminator);
    }
    let value = P::leaf_string(payload_start, payload_end);
    Ok(Some((value, payload_end + 2)))
}

/// `*<count>\r\n<element>...`, or `*-1\r\n` for a null array.
fn parse_array<P: ResultPolicy>(
    input: &[u8],
    from: usize,
    cfg: &ParserConfig,
) -> Result<Option<(P::Value, usize)>, ProtocolErrorKind> {
    let count_start = from + 1;
    let Some(count_crlf) = find_crlf(input, count_start) else {
        return Ok(None);
    };
    let count = parse_count(&input[count_start..count_crlf], cfg.max_bulk_len)?;
    let mut cursor = count_crlf + 2;

    if count == -1 {
        return Ok(Some((P::leaf_nil(count_start, count_crlf), cursor)));
    }

    let mut builder = P::ArrayBuilder::default();
    for _ in 0..count {
        match parse_at::<P>(input, cursor, cfg)? {
            Some((element, next)) => {
                P::push(&mut builder, element);
                cursor = next;
            }
            None => return Ok(None),
        }
    }
    Ok(Some((P::finish_array(builder), cursor)))
}
