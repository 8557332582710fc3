//! Owned reply values and the [`Extractor`] that materializes them from a
//! [`Marker`] tree (spec.md §4.4, "Extraction").
//!
//! A [`Marker`] only borrows byte ranges into the buffer that was live at
//! parse time; once that buffer is consumed or reused those ranges are
//! meaningless. `Extractor::extract` walks the tree once and copies every
//! leaf out into an owned [`Value`], so the result outlives the buffer.

use crate::error::RespError;
use crate::protocol::marker::Marker;

/// An owned reply value: the same five wire variants as [`Marker`], but
/// with leaves copied out of the buffer instead of referencing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(Vec<u8>),
    Error(Vec<u8>),
    Int(i64),
    Nil,
    Array(Vec<Value>),
}

impl Value {
    /// Borrows the payload of a `String` or `Error` value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(bytes) | Self::Error(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Borrows the elements of an `Array` value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }
}

/// Walks a [`Marker`] tree against the buffer it was produced from and
/// builds an owned [`Value`] tree.
pub struct Extractor<'a> {
    input: &'a [u8],
}

impl<'a> Extractor<'a> {
    /// `input` must be the same buffer (or at least the same byte range)
    /// the marker tree was parsed from.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    /// Materializes `marker` into an owned [`Value`].
    ///
    /// Fails only if an `Int` leaf's digit range is not a valid `i64` — the
    /// parser never validates that range itself, since the keep-result
    /// policy has no reason to reject bytes it is only asked to remember.
    pub fn extract(&self, marker: &Marker) -> Result<Value, RespError> {
        match marker {
            Marker::String { from, to } => Ok(Value::String(self.slice(*from, *to).to_vec())),
            Marker::Error { from, to } => Ok(Value::Error(self.slice(*from, *to).to_vec())),
            Marker::Nil { .. } => Ok(Value::Nil),
            Marker::Int { from, to } => {
                let text = std::str::from_utf8(self.slice(*from, *to))
                    .map_err(|_| RespError::IntConversion)?;
                let value: i64 = text.parse().map_err(|_| RespError::IntConversion)?;
                Ok(Value::Int(value))
            }
            Marker::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.extract(element)?);
                }
                Ok(Value::Array(values))
            }
        }
    }

    fn slice(&self, from: usize, to: usize) -> &'a [u8] {
        &self.input[from..to]
    }
}
