//! The marker tree: a borrowed, tagged-union value tree whose leaves are
//! byte ranges into the caller's buffer (spec.md §3), plus the
//! [`ResultPolicy`] trait the parser is generic over (spec.md §4.2,
//! "Policies").
//!
//! Two policies implement [`ResultPolicy`]: [`KeepResult`], which builds a
//! [`Marker`] tree, and [`DropResult`], which builds nothing — both policies
//! drive the exact same recursion in [`crate::protocol::parser`], so
//! `consumed` is identical between them (spec.md §8, "for all (from, to),
//! drop_parse(...).consumed == keep_parse(...).consumed").

/// A tagged value tree over byte ranges `[from, to)` into the buffer that
/// was live at parse time.
///
/// Invariants (spec.md §3): every leaf range is contained in the buffer
/// region that existed at parse time; an `Array`'s element count equals the
/// decoded count; `String` ranges exclude the length prefix and the
/// trailing CRLF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// A simple-string payload range (no tag byte, no terminator).
    String { from: usize, to: usize },
    /// An error payload range.
    Error { from: usize, to: usize },
    /// An integer payload, kept as the raw (unparsed) digit range.
    Int { from: usize, to: usize },
    /// The count-field range of a null bulk string or null array.
    Nil { from: usize, to: usize },
    /// A decoded array; `elements.len()` equals the wire-declared count.
    Array(Vec<Marker>),
}

/// Drives how the parser's recursion materializes a completed reply:
/// [`KeepResult`] builds a [`Marker`] tree, [`DropResult`] builds
/// `()` and allocates nothing.
///
/// The array case is split into a builder (`push` as each element
/// completes) and a finisher, so `DropResult` never allocates a `Vec` for
/// arrays either — only `KeepResult`'s builder is a real `Vec`.
pub trait ResultPolicy {
    /// The value produced for one reply (or sub-reply) of this policy.
    type Value;
    /// Accumulator threaded through an array's elements as they're parsed.
    type ArrayBuilder: Default;

    fn push(builder: &mut Self::ArrayBuilder, value: Self::Value);
    fn finish_array(builder: Self::ArrayBuilder) -> Self::Value;
    fn leaf_string(from: usize, to: usize) -> Self::Value;
    fn leaf_error(from: usize, to: usize) -> Self::Value;
    fn leaf_int(from: usize, to: usize) -> Self::Value;
    fn leaf_nil(from: usize, to: usize) -> Self::Value;
}

/// Keep-result policy: builds a full [`Marker`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepResult;

impl ResultPolicy for KeepResult {
    type Value = Marker;
    type ArrayBuilder = Vec<Marker>;

    fn push(builder: &mut Self::ArrayBuilder, value: Self::Value) {
        builder.push(value);
    }
    fn finish_array(builder: Self::ArrayBuilder) -> Self::Value {
        Marker::Array(builder)
    }
    fn leaf_string(from: usize, to: usize) -> Self::Value {
        Marker::String { from, to }
    }
    fn leaf_error(from: usize, to: usize) -> Self::Value {
        Marker::Error { from, to }
    }
    fn leaf_int(from: usize, to: usize) -> Self::Value {
        Marker::Int { from, to }
    }
    fn leaf_nil(from: usize, to: usize) -> Self::Value {
        Marker::Nil { from, to }
    }
}

/// Drop-result policy: builds only the consumed byte count, no tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropResult;

impl ResultPolicy for DropResult {
    type Value = ();
    type ArrayBuilder = ();

    fn push(_builder: &mut Self::ArrayBuilder, _value: Self::Value) {}
    fn finish_array(_builder: Self::ArrayBuilder) -> Self::Value {}
    fn leaf_string(_from: usize, _to: usize) -> Self::Value {}
    fn leaf_error(_from: usize, _to: usize) -> Self::Value {}
    fn leaf_int(_from: usize, _to: usize) -> Self::Value {}
    fn leaf_nil(_from: usize, _to: usize) -> Self::Value {}
}

impl Marker {
    /// Number of elements if this is an array, else `None`.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Array(elements) => Some(elements.len()),
            _ => None,
        }
    }

    /// The raw byte range backing a leaf, if this is a leaf variant.
    pub fn leaf_range(&self) -> Option<(usize, usize)> {
        match *self {
            Self::String { from, to }
            | Self::Error { from, to }
            | Self::Int { from, to }
            | Self::Nil { from, to } => Some((from, to)),
            Self::Array(_) => None,
        }
    }
}
